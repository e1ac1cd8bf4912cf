use super::catalogue::{FieldDescriptor, FieldKind, Placement};
use super::table::RawSmbiosTable;
use bytes::Buf;
use log::{debug, warn};
use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    /// Integer printed with `width` bytes of hex digits.
    UInt {
        value: u64,
        width: u8,
    },
    Enum {
        value: u64,
        width: u8,
        label: Option<&'static str>,
    },
    Flag(bool),
    /// `text` is `None` when `index` is 0 or past the last string.
    String {
        index: u8,
        text: Option<Cow<'a, str>>,
    },
    Uuid(Uuid),
    Bytes(&'a [u8]),
}

impl<'a> Value<'a> {
    pub fn numeric(&self) -> Option<u64> {
        match self {
            Value::UInt { value, .. } | Value::Enum { value, .. } => Some(*value),
            Value::Flag(set) => Some(*set as u64),
            Value::String { index, .. } => Some(*index as u64),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Value::Enum { label, .. } => *label,
            _ => None,
        }
    }
}

impl<'a> fmt::Display for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::UInt { value, width } => write_hex(f, *value, *width),
            Value::Enum {
                value,
                width,
                label,
            } => {
                write_hex(f, *value, *width)?;
                match label {
                    Some(label) => write!(f, " ({})", label),
                    None => Ok(()),
                }
            }
            Value::Flag(set) => f.write_str(if *set { "[x]" } else { "[ ]" }),
            Value::String {
                index: 0,
                text: None,
            } => f.write_str("0x00 (Not Specified)"),
            Value::String { index, text: None } => write!(f, "0x{:02X} <BAD INDEX>", index),
            Value::String {
                index,
                text: Some(text),
            } => write!(f, "0x{:02X} \"{}\"", index, text),
            Value::Uuid(uuid) => {
                let mut buf = Uuid::encode_buffer();
                f.write_str(uuid.as_hyphenated().encode_upper(&mut buf))
            }
            Value::Bytes(bytes) => {
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
        }
    }
}

fn write_hex(f: &mut fmt::Formatter, value: u64, width: u8) -> fmt::Result {
    write!(f, "0x{:0w$X}", value, w = width as usize * 2)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedField<'a> {
    pub descriptor: &'static FieldDescriptor,
    pub value: Value<'a>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded<'a> {
    Field(DecodedField<'a>),
    /// Nothing to show for this descriptor; later ones may still decode.
    Skip,
    /// The structure is too short for this field and everything after it.
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Word {
    value: u64,
    width: u8,
}

fn read_uint(bytes: &[u8]) -> Option<u64> {
    let mut buf = bytes;
    match bytes.len() {
        1 => Some(buf.get_u8() as u64),
        2 => Some(buf.get_u16_le() as u64),
        4 => Some(buf.get_u32_le() as u64),
        8 => Some(buf.get_u64_le()),
        _ => None,
    }
}

fn enum_label(values: &'static [(u64, &'static str)], value: u64) -> Option<&'static str> {
    values.iter().find(|(v, _)| *v == value).map(|(_, name)| *name)
}

fn field_bytes<'a>(table: &RawSmbiosTable<'a>, offset: u8, size: u8) -> Option<&'a [u8]> {
    let start = offset as usize;
    let end = start + size as usize;
    if end > table.length as usize {
        return None;
    }
    table.body.get(start..end)
}

fn decode_plain<'a>(table: &RawSmbiosTable<'a>, field: &'static FieldDescriptor) -> Decoded<'a> {
    let (offset, size) = match field.placement {
        Placement::Bytes { offset, size } => (offset, size),
        Placement::Bits { .. } => return Decoded::Skip,
    };
    let bytes = match field_bytes(table, offset, size) {
        Some(bytes) => bytes,
        None => return Decoded::OutOfRange,
    };

    let value = match field.kind {
        FieldKind::UInt | FieldKind::Enum(_) => {
            let value = match read_uint(bytes) {
                Some(value) => value,
                None => {
                    warn!(
                        "type {} field \"{}\" has unsupported size {}",
                        table.table_ty, field.name, size
                    );
                    return Decoded::Skip;
                }
            };
            match field.kind {
                FieldKind::Enum(values) => {
                    let label = enum_label(values, value);
                    if label.is_none() {
                        debug!("no label for \"{}\" value 0x{:X}", field.name, value);
                    }
                    Value::Enum {
                        value,
                        width: size,
                        label,
                    }
                }
                _ => Value::UInt { value, width: size },
            }
        }
        FieldKind::String => {
            let index = match bytes {
                [index] => *index,
                _ => {
                    warn!("string field \"{}\" is {} bytes", field.name, size);
                    return Decoded::Skip;
                }
            };
            let text = table.strings.get(index).map(String::from_utf8_lossy);
            if text.is_none() && index != 0 {
                debug!(
                    "handle 0x{:04X} string index {} out of {}",
                    table.handle,
                    index,
                    table.strings.len()
                );
            }
            Value::String { index, text }
        }
        FieldKind::Uuid => match <[u8; 16]>::try_from(bytes) {
            Ok(raw) => Value::Uuid(Uuid::from_bytes(raw)),
            Err(_) => {
                warn!("UUID field \"{}\" is {} bytes", field.name, size);
                return Decoded::Skip;
            }
        },
        FieldKind::Raw | FieldKind::Other => Value::Bytes(bytes),
        FieldKind::Bit => {
            warn!("flag \"{}\" is not inside a bit field run", field.name);
            return Decoded::Skip;
        }
    };

    Decoded::Field(DecodedField {
        descriptor: field,
        value,
    })
}

/// Reads the word backing a bit field run from the descriptor right before it.
fn backing_word(table: &RawSmbiosTable, backing: Option<&FieldDescriptor>) -> Option<Word> {
    let backing = match backing {
        Some(backing) if !backing.is_bit_field() => backing,
        _ => {
            warn!(
                "type {} bit field run has no backing field",
                table.table_ty
            );
            return None;
        }
    };
    let (offset, size) = match (backing.kind, backing.placement) {
        (FieldKind::UInt, Placement::Bytes { offset, size }) if matches!(size, 1 | 2 | 4 | 8) => {
            (offset, size)
        }
        _ => {
            warn!(
                "type {} field \"{}\" cannot back a bit field run",
                table.table_ty, backing.name
            );
            return None;
        }
    };
    let value = read_uint(field_bytes(table, offset, size)?)?;
    Some(Word { value, width: size })
}

fn decode_bits(field: &'static FieldDescriptor, word: Word) -> Option<DecodedField<'static>> {
    let (position, width) = match field.placement {
        Placement::Bits { position, width } => (position as u32, width as u32),
        Placement::Bytes { .. } => return None,
    };
    if let Some(selector) = field.when {
        if !selector.matches(word.value) {
            return None;
        }
    }
    if width == 0 || position + width > word.width as u32 * 8 {
        return None;
    }

    let shifted = word.value >> position;
    let mask = if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    let value = match field.kind {
        FieldKind::Bit => Value::Flag(shifted & 1 == 1),
        FieldKind::UInt => Value::UInt {
            value: shifted & mask,
            width: word.width,
        },
        FieldKind::Enum(values) => Value::Enum {
            value: shifted & mask,
            width: word.width,
            label: enum_label(values, shifted & mask),
        },
        _ => {
            warn!("bit field \"{}\" has a non-integer kind", field.name);
            return None;
        }
    };

    Some(DecodedField {
        descriptor: field,
        value,
    })
}

/// Decodes `fields[index]` of `table` on its own.
///
/// A bit field is decoded against the nearest plain field before it.
pub fn decode<'a>(
    table: &RawSmbiosTable<'a>,
    fields: &'static [FieldDescriptor],
    index: usize,
) -> Decoded<'a> {
    let field = match fields.get(index) {
        Some(field) => field,
        None => return Decoded::Skip,
    };
    if !field.is_bit_field() {
        return decode_plain(table, field);
    }

    let backing = fields[..index].iter().rev().find(|f| !f.is_bit_field());
    if let Some(Placement::Bytes { offset, size }) = backing.map(|b| b.placement) {
        if field_bytes(table, offset, size).is_none() {
            return Decoded::OutOfRange;
        }
    }
    match backing_word(table, backing).and_then(|word| decode_bits(field, word)) {
        Some(decoded) => Decoded::Field(decoded),
        None => Decoded::Skip,
    }
}

#[derive(Clone, Copy, Debug)]
enum Run {
    Normal,
    /// `None` when the backing word was unusable and the run is skipped.
    InBitfieldRun(Option<Word>),
}

/// Decoded fields of one structure, in catalogue order.
///
/// Stops at the first plain field that does not fit in the structure.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    table: RawSmbiosTable<'a>,
    fields: &'static [FieldDescriptor],
    index: usize,
    run: Run,
}

impl<'a> Fields<'a> {
    pub fn new(table: RawSmbiosTable<'a>, fields: &'static [FieldDescriptor]) -> Self {
        Fields {
            table,
            fields,
            index: 0,
            run: Run::Normal,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = DecodedField<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let fields = self.fields;
        while let Some(field) = fields.get(self.index) {
            let index = self.index;
            self.index += 1;

            if !field.is_bit_field() {
                self.run = Run::Normal;
                match decode_plain(&self.table, field) {
                    Decoded::Field(decoded) => return Some(decoded),
                    Decoded::Skip => continue,
                    Decoded::OutOfRange => {
                        debug!(
                            "handle 0x{:04X} ends before field \"{}\"",
                            self.table.handle, field.name
                        );
                        self.index = fields.len();
                        return None;
                    }
                }
            }

            let word = match self.run {
                Run::InBitfieldRun(word) => word,
                Run::Normal => {
                    let backing = index.checked_sub(1).and_then(|i| fields.get(i));
                    let word = backing_word(&self.table, backing);
                    self.run = Run::InBitfieldRun(word);
                    word
                }
            };
            if let Some(decoded) = word.and_then(|word| decode_bits(field, word)) {
                return Some(decoded);
            }
        }
        None
    }
}

impl<'a> FusedIterator for Fields<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{self, FieldDescriptor as F};
    use crate::table::advance;
    use crate::test_support::record;

    fn decode_all<'a>(
        table: &RawSmbiosTable<'a>,
        fields: &'static [FieldDescriptor],
    ) -> Vec<(&'static str, Value<'a>)> {
        Fields::new(*table, fields)
            .map(|d| (d.descriptor.name, d.value))
            .collect()
    }

    #[test]
    fn integers_are_little_endian() {
        static FIELDS: &[F] = &[
            F::uint(0x04, 1, "a"),
            F::uint(0x05, 2, "b"),
            F::uint(0x07, 4, "c"),
            F::uint(0x0B, 8, "d"),
        ];
        let body = [
            0x12, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 8, 7, 6, 5, 4, 3, 2, 1,
        ];
        let buf = record(200, 0, &body, &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);
        let numbers: Vec<_> = values.iter().map(|(_, v)| v.numeric().unwrap()).collect();
        assert_eq!(
            numbers,
            vec![0x12, 0x1234, 0x1234_5678, 0x0102_0304_0506_0708]
        );
        assert_eq!(values[1].1.to_string(), "0x1234");
        assert_eq!(values[3].1.to_string(), "0x0102030405060708");
    }

    #[test]
    fn field_ending_at_length_is_in_range() {
        static FIELDS: &[F] = &[F::uint(0x04, 2, "fits"), F::uint(0x06, 1, "past")];
        let buf = record(200, 0, &[0xCD, 0xAB], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        assert_eq!(table.length, 6);

        assert!(matches!(
            decode(&table, FIELDS, 0),
            Decoded::Field(DecodedField {
                value: Value::UInt {
                    value: 0xABCD,
                    width: 2
                },
                ..
            })
        ));
        assert_eq!(decode(&table, FIELDS, 1), Decoded::OutOfRange);
        assert_eq!(decode_all(&table, FIELDS).len(), 1);
    }

    #[test]
    fn out_of_range_stops_the_record() {
        static FIELDS: &[F] = &[
            F::uint(0x04, 1, "present"),
            F::uint(0x05, 4, "cut"),
            F::uint(0x06, 1, "would fit"),
        ];
        let buf = record(200, 0, &[1, 2, 3], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let names: Vec<_> = decode_all(&table, FIELDS)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec!["present"]);
    }

    #[test]
    fn bit_fields_slice_the_backing_word() {
        static FIELDS: &[F] = &[
            F::uint(0x04, 2, "Configuration"),
            F::bit_range(0, 3, "Level"),
            F::flag(3, "Socketed"),
            F::flag(4, "Reserved"),
            F::bit_enum(8, 2, "Mode", &[(0b01, "Write Back")]),
            F::uint(0x06, 1, "After"),
        ];
        let buf = record(200, 0, &[0x0A, 0x01, 0x55], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);

        assert_eq!(values.len(), 6);
        assert_eq!(values[1].1, Value::UInt { value: 2, width: 2 });
        assert_eq!(values[2].1, Value::Flag(true));
        assert_eq!(values[3].1, Value::Flag(false));
        assert_eq!(values[4].1.label(), Some("Write Back"));
        assert_eq!(values[4].1.to_string(), "0x0001 (Write Back)");
        assert_eq!(values[5].1.numeric(), Some(0x55));
        assert_eq!(decode(&table, FIELDS, 2), Decoded::Field(DecodedField {
            descriptor: &FIELDS[2],
            value: Value::Flag(true),
        }));
    }

    #[test]
    fn full_width_bit_range_does_not_overflow() {
        static FIELDS: &[F] = &[
            F::uint(0x04, 8, "Word"),
            F::bit_range(0, 64, "All"),
            F::bit_range(60, 8, "Outside"),
            F::bit_range(63, 1, "Top"),
        ];
        let buf = record(200, 0, &[0xFF; 8], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);
        assert_eq!(values.len(), 3);
        assert_eq!(values[1].1.numeric(), Some(u64::MAX));
        assert_eq!(values[2].0, "Top");
        assert_eq!(values[2].1.numeric(), Some(1));
    }

    #[test]
    fn run_without_uint_backing_is_skipped() {
        static FIELDS: &[F] = &[
            F::string(0x04, "Name"),
            F::flag(0, "Orphan"),
            F::uint(0x05, 3, "Odd"),
            F::flag(0, "Also orphan"),
            F::uint(0x08, 1, "Tail"),
            F::flag(1, "Kept"),
        ];
        let buf = record(200, 0, &[1, 0xFF, 0xFF, 0xFF, 0x02], &["x"]);
        let (table, _) = advance(&buf, 0).unwrap();
        let names: Vec<_> = decode_all(&table, FIELDS)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec!["Name", "Tail", "Kept"]);
        assert_eq!(decode(&table, FIELDS, 1), Decoded::Skip);
        assert_eq!(decode(&table, FIELDS, 2), Decoded::Skip);
    }

    #[test]
    fn unmatched_enum_has_no_label() {
        static FIELDS: &[F] = &[F::enumerated(0x04, 1, "Kind", &[(1, "One")])];
        let buf = record(200, 0, &[0x42], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);
        assert_eq!(values[0].1.label(), None);
        assert_eq!(values[0].1.numeric(), Some(0x42));
        assert_eq!(values[0].1.to_string(), "0x42");
    }

    #[test]
    fn string_indexes() {
        static FIELDS: &[F] = &[
            F::string(0x04, "First"),
            F::string(0x05, "Unset"),
            F::string(0x06, "Bad"),
            F::string(0x07, "Second"),
        ];
        let buf = record(200, 0, &[1, 0, 3, 2], &["Alpha", "Beta"]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);
        assert_eq!(
            values[0].1,
            Value::String {
                index: 1,
                text: Some(Cow::Borrowed("Alpha"))
            }
        );
        assert_eq!(values[0].1.to_string(), "0x01 \"Alpha\"");
        assert_eq!(
            values[1].1,
            Value::String {
                index: 0,
                text: None
            }
        );
        assert_eq!(values[1].1.to_string(), "0x00 (Not Specified)");
        assert_eq!(
            values[2].1,
            Value::String {
                index: 3,
                text: None
            }
        );
        assert_eq!(values[2].1.to_string(), "0x03 <BAD INDEX>");
        assert_eq!(values[3].1.to_string(), "0x02 \"Beta\"");
    }

    #[test]
    fn uuid_and_raw_bytes() {
        static FIELDS: &[F] = &[F::uuid(0x04, "UUID"), F::raw(0x14, 3, "Data")];
        let mut body: Vec<u8> = (0x10..0x20).collect();
        body.extend_from_slice(&[0xDE, 0xAD, 0x0F]);
        let buf = record(200, 0, &body, &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);
        assert_eq!(
            values[0].1.to_string(),
            "10111213-1415-1617-1819-1A1B1C1D1E1F"
        );
        assert_eq!(values[1].1, Value::Bytes(&[0xDE, 0xAD, 0x0F]));
        assert_eq!(values[1].1.to_string(), "DE AD 0F");
    }

    #[test]
    fn unsupported_integer_size_is_skipped() {
        static FIELDS: &[F] = &[F::uint(0x04, 3, "Odd"), F::uint(0x07, 1, "Next")];
        let buf = record(200, 0, &[1, 2, 3, 4], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        assert_eq!(decode(&table, FIELDS, 0), Decoded::Skip);
        let values = decode_all(&table, FIELDS);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].0, "Next");
    }

    #[test]
    fn string_without_index_byte_is_skipped() {
        static FIELDS: &[F] = &[
            F {
                name: "Empty",
                placement: Placement::Bytes { offset: 4, size: 0 },
                kind: FieldKind::String,
                when: None,
            },
            F::string(0x04, "Vendor"),
        ];
        let buf = record(200, 0, &[1], &["Acme"]);
        let (table, _) = advance(&buf, 0).unwrap();
        assert_eq!(decode(&table, FIELDS, 0), Decoded::Skip);
        let values = decode_all(&table, FIELDS);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].1.to_string(), "0x01 \"Acme\"");
    }

    #[test]
    fn selector_bit_past_the_word_reads_clear() {
        static FIELDS: &[F] = &[
            F::uint(0x04, 1, "Flags"),
            F::flag(0, "Low").when(70, true),
            F::flag(1, "High").when(64, false),
        ];
        let buf = record(200, 0, &[0xFF], &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        let values = decode_all(&table, FIELDS);
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].0, "High");
        assert_eq!(values[1].1, Value::Flag(true));
    }

    fn processor_voltage(voltage: u8) -> Vec<(&'static str, String)> {
        let fields = catalogue::lookup(4).unwrap().fields;
        let mut body = vec![0u8; 0x0E];
        body[0x11 - 4] = voltage;
        let buf = record(4, 0, &body, &[]);
        let (table, _) = advance(&buf, 0).unwrap();
        Fields::new(table, fields)
            .skip_while(|d| d.descriptor.name != "Voltage")
            .skip(1)
            .take_while(|d| d.descriptor.is_bit_field())
            .map(|d| (d.descriptor.name, d.value.to_string()))
            .collect()
    }

    #[test]
    fn legacy_voltage_flags() {
        let values = processor_voltage(0x02);
        assert_eq!(
            values,
            vec![
                ("5V", "[ ]".to_string()),
                ("3.3V", "[x]".to_string()),
                ("2.9V", "[ ]".to_string()),
                ("Not Legacy Mode", "[ ]".to_string()),
            ]
        );
    }

    #[test]
    fn current_voltage_times_ten() {
        let values = processor_voltage(0x80 | 33);
        assert_eq!(
            values,
            vec![
                ("Current voltage times 10", "0x21".to_string()),
                ("Not Legacy Mode", "[x]".to_string()),
            ]
        );
    }
}
