use super::catalogue::{self, TypeDescriptor};
use super::decode::Fields;
use super::error::Error;
use super::strings::StringTable;
use bytes::Buf;
use log::{debug, warn};
use std::iter::FusedIterator;

pub const HEADER_LENGTH: usize = 4;
pub const INACTIVE: u8 = 126;
pub const END_OF_TABLE: u8 = 127;

/// One structure borrowed from the structure table.
///
/// `body` is the formatted area including the 4 header bytes, so field
/// offsets from the catalogue index it directly.
#[derive(Clone, Copy, Debug)]
pub struct RawSmbiosTable<'a> {
    pub table_ty: u8,
    pub length: u8,
    pub handle: u16,
    pub offset: usize,
    pub body: &'a [u8],
    pub strings: StringTable<'a>,
    pub total_length: usize,
}

impl<'a> RawSmbiosTable<'a> {
    pub fn descriptor(&self) -> Option<&'static TypeDescriptor> {
        catalogue::lookup(self.table_ty)
    }

    pub fn fields(&self, descriptor: &'static TypeDescriptor) -> Fields<'a> {
        Fields::new(*self, descriptor.fields)
    }

    pub fn is_end_of_table(&self) -> bool {
        self.table_ty == END_OF_TABLE
    }
}

/// Reads the structure at `offset` and locates the one after it.
///
/// Returns `None` as the next offset once the structure reaches the end of
/// `buf`.
pub fn advance<'a>(
    buf: &'a [u8],
    offset: usize,
) -> Result<(RawSmbiosTable<'a>, Option<usize>), Error> {
    let mut header = buf
        .get(offset..offset + HEADER_LENGTH)
        .ok_or(Error::Truncated { offset })?;
    let table_ty = header.get_u8();
    let length = header.get_u8();
    let handle = header.get_u16_le();

    if (length as usize) < HEADER_LENGTH {
        return Err(Error::InvalidLength { offset, length });
    }

    let fixed_end = offset + length as usize;
    let body = buf
        .get(offset..fixed_end)
        .ok_or(Error::Truncated { offset })?;
    let (strings, end) =
        StringTable::extract(buf, fixed_end).map_err(|_| Error::Truncated { offset })?;

    let table = RawSmbiosTable {
        table_ty,
        length,
        handle,
        offset,
        body,
        strings,
        total_length: end - offset,
    };

    let next = if end < buf.len() { Some(end) } else { None };
    Ok((table, next))
}

/// Walks every structure of a table, ending after the end-of-table
/// structure, at the end of the buffer or at the first malformed structure.
#[derive(Clone, Debug)]
pub struct Tables<'a> {
    buf: &'a [u8],
    next: Option<usize>,
}

impl<'a> Tables<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        let next = if buf.is_empty() { None } else { Some(0) };
        Tables { buf, next }
    }
}

impl<'a> Iterator for Tables<'a> {
    type Item = Result<RawSmbiosTable<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.next.take()?;

        let (table, next) = match advance(self.buf, offset) {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };

        debug!(
            "type {} handle 0x{:04X} at 0x{:08X}, {} bytes",
            table.table_ty, table.handle, table.offset, table.total_length
        );

        if table.is_end_of_table() {
            if let Some(next) = next {
                warn!(
                    "ignoring {} bytes after end-of-table structure",
                    self.buf.len() - next
                );
            }
        } else {
            self.next = next;
        }

        Some(Ok(table))
    }
}

impl<'a> FusedIterator for Tables<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{end_of_table, record};

    #[test]
    fn advance_reads_header_and_extent() {
        let mut buf = record(1, 0x0100, &[1, 2], &["Manufacturer", "Product"]);
        let first_len = buf.len();
        buf.extend(end_of_table(0xFEFF));

        let (table, next) = advance(&buf, 0).unwrap();
        assert_eq!(table.table_ty, 1);
        assert_eq!(table.length, 6);
        assert_eq!(table.handle, 0x0100);
        assert_eq!(table.body, &buf[0..6]);
        assert_eq!(table.strings.len(), 2);
        assert_eq!(table.total_length, first_len);
        assert_eq!(next, Some(first_len));
        assert_eq!(table.strings.get(1), Some(&b"Manufacturer"[..]));
    }

    #[test]
    fn advance_always_progresses() {
        let mut buf = vec![];
        buf.extend(record(0, 0, &[], &[]));
        buf.extend(record(2, 1, &[0; 11], &["x"]));
        buf.extend(record(200, 2, &[0xAA; 3], &[]));
        buf.extend(end_of_table(3));

        let mut offset = 0;
        let mut count = 0;
        loop {
            let (_, next) = advance(&buf, offset).unwrap();
            count += 1;
            match next {
                Some(next) => {
                    assert!(next > offset);
                    offset = next;
                }
                None => break,
            }
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn header_only_structure_has_extent() {
        let buf = record(126, 7, &[], &[]);
        let (table, next) = advance(&buf, 0).unwrap();
        assert_eq!(table.length, 4);
        assert_eq!(table.total_length, 6);
        assert_eq!(next, None);
    }

    #[test]
    fn short_header_is_truncated() {
        let buf = [1u8, 4, 0];
        assert!(matches!(
            advance(&buf, 0),
            Err(Error::Truncated { offset: 0 })
        ));
    }

    #[test]
    fn length_below_header_is_invalid() {
        let buf = [1u8, 3, 0, 0, 0, 0];
        assert!(matches!(
            advance(&buf, 0),
            Err(Error::InvalidLength {
                offset: 0,
                length: 3
            })
        ));
    }

    #[test]
    fn length_past_buffer_is_truncated() {
        let buf = [1u8, 0x40, 0, 0, 0, 0];
        assert!(matches!(
            advance(&buf, 0),
            Err(Error::Truncated { offset: 0 })
        ));
    }

    #[test]
    fn walk_stops_at_end_of_table() {
        let mut buf = vec![];
        buf.extend(record(1, 0, &[0; 4], &[]));
        buf.extend(end_of_table(1));
        buf.extend(record(2, 2, &[0; 4], &[]));

        let tables: Vec<_> = Tables::new(&buf).collect();
        assert_eq!(tables.len(), 2);
        assert!(tables[1].as_ref().unwrap().is_end_of_table());
    }

    #[test]
    fn walk_reports_truncation_after_good_records() {
        let mut buf = vec![];
        buf.extend(record(1, 0, &[0; 4], &["ok"]));
        buf.extend_from_slice(&[2, 6, 1, 0, 1, 1, b'b', b'a', b'd']);

        let mut tables = Tables::new(&buf);
        let first = tables.next().unwrap().unwrap();
        assert_eq!(first.strings.len(), 1);
        let offset = first.total_length;
        assert!(matches!(
            tables.next(),
            Some(Err(Error::Truncated { offset: o })) if o == offset
        ));
        assert!(tables.next().is_none());
        assert!(tables.next().is_none());
    }

    #[test]
    fn empty_buffer_has_no_structures() {
        assert_eq!(Tables::new(&[]).count(), 0);
    }

    #[test]
    fn offsets_are_relative_to_table_start() {
        let mut buf = vec![];
        buf.extend(record(1, 0, &[], &[]));
        buf.extend(record(2, 1, &[], &[]));
        buf.extend(end_of_table(2));

        let offsets: Vec<_> = Tables::new(&buf)
            .map(|t| t.unwrap().offset)
            .collect();
        assert_eq!(offsets, vec![0, 6, 12]);
    }
}
