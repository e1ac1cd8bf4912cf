use super::catalogue::Placement;
use super::decode::{DecodedField, Value};
use super::error::Error;
use super::table::RawSmbiosTable;
use super::RawSmbiosData;
use log::info;
use std::io::Write;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Hex dump structures that have no known layout.
    pub hex: bool,
    /// Only render these types. Empty renders all.
    pub types: Vec<u8>,
}

impl DumpOptions {
    fn wants(&self, table_ty: u8) -> bool {
        self.types.is_empty() || self.types.contains(&table_ty)
    }
}

/// Renders every structure of `smbios` as text.
///
/// Structures before a malformed one are written before its error is
/// returned.
pub fn dump(
    smbios: &RawSmbiosData,
    options: &DumpOptions,
    writer: &mut impl Write,
) -> Result<(), Error> {
    writer.write_fmt(format_args!(
        "SMBIOS Version: {}.{}\n",
        smbios.smbios_major_version, smbios.smbios_minor_version
    ))?;
    writer.write_fmt(format_args!("DMI Revision: {}\n", smbios.dmi_revision))?;
    writer.write_fmt(format_args!("Data Size: {} bytes\n\n", smbios.table().len()))?;

    let mut count = 0;
    for table in smbios.tables() {
        let table = table?;
        count += 1;
        if options.wants(table.table_ty) {
            dump_table(&table, options, writer)?;
        }
    }
    info!("{} structures", count);

    Ok(())
}

/// Renders one structure followed by a blank line.
pub fn dump_table(
    table: &RawSmbiosTable,
    options: &DumpOptions,
    writer: &mut impl Write,
) -> Result<(), Error> {
    let descriptor = table.descriptor();
    match descriptor {
        Some(desc) => {
            writer.write_fmt(format_args!("[Type {}: {}]\n", table.table_ty, desc.name))?
        }
        None => writer.write_fmt(format_args!(
            "[Type {} (Unrecognized)]\n",
            table.table_ty
        ))?,
    }
    writer.write_fmt(format_args!(
        "Handle: 0x{:04X}, Offset: 0x{:08X}, Length: 0x{:02X} bytes, Total: 0x{:X} bytes\n",
        table.handle, table.offset, table.length, table.total_length
    ))?;

    match descriptor {
        Some(desc) => {
            for field in table.fields(desc) {
                write_field(writer, &field)?;
            }
        }
        None if options.hex => write_raw(writer, table)?,
        None => {}
    }

    writer.write_fmt(format_args!("\n"))?;
    Ok(())
}

fn write_field(writer: &mut impl Write, field: &DecodedField) -> std::io::Result<()> {
    let desc = field.descriptor;
    match (desc.placement, &field.value) {
        (Placement::Bytes { offset, .. }, value) => {
            writer.write_fmt(format_args!("0x{:04X} {}: {}\n", offset, desc.name, value))
        }
        (Placement::Bits { position, .. }, Value::Flag(_)) => writer.write_fmt(format_args!(
            "\t{:02} {} {}\n",
            position, field.value, desc.name
        )),
        (Placement::Bits { position, width }, value) => writer.write_fmt(format_args!(
            "\t{:02}:{:02} {}: {}\n",
            position,
            position as u32 + width as u32 - 1,
            desc.name,
            value
        )),
    }
}

fn write_raw(writer: &mut impl Write, table: &RawSmbiosTable) -> std::io::Result<()> {
    writer.write_fmt(format_args!("\tHeader and Data:\n"))?;
    write_bytearray(writer, table.body)?;

    if !table.strings.is_empty() {
        writer.write_fmt(format_args!("\tStrings:\n"))?;
        for bytes in table.strings.iter() {
            write_bytearray(writer, bytes)?;
            writer.write_fmt(format_args!("\t\t{}\n", String::from_utf8_lossy(bytes)))?;
        }
    }
    Ok(())
}

fn write_bytearray(writer: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    writer.write_fmt(format_args!("\t\t"))?;
    for (i, byte) in bytes.iter().enumerate() {
        writer.write_fmt(format_args!("{:02X}", byte))?;

        let num = i + 1;
        if num % 16 == 0 && num < bytes.len() {
            writer.write_fmt(format_args!("\n\t\t"))?;
        } else if num != bytes.len() {
            writer.write_fmt(format_args!(" "))?;
        }
    }
    writer.write_fmt(format_args!("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::advance;
    use crate::test_support::record;

    fn render(buf: &[u8], options: &DumpOptions) -> String {
        let (table, _) = advance(buf, 0).unwrap();
        let mut out = Vec::new();
        dump_table(&table, options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bytearray_wraps_every_16_bytes() {
        let bytes: Vec<u8> = (0..18).collect();
        let mut out = Vec::new();
        write_bytearray(&mut out, &bytes).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\t\t00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n\t\t10 11\n"
        );

        let mut out = Vec::new();
        write_bytearray(&mut out, &bytes[..16]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\t\t00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n"
        );
    }

    #[test]
    fn unrecognized_type_without_hex() {
        let buf = record(0xC8, 0x0042, &[1, 2], &["oem"]);
        assert_eq!(
            render(&buf, &DumpOptions::default()),
            "[Type 200 (Unrecognized)]\n\
             Handle: 0x0042, Offset: 0x00000000, Length: 0x06 bytes, Total: 0xB bytes\n\
             \n"
        );
    }

    #[test]
    fn unrecognized_type_with_hex() {
        let buf = record(0xC8, 0x0042, &[1, 2], &["oem"]);
        let options = DumpOptions {
            hex: true,
            types: vec![],
        };
        assert_eq!(
            render(&buf, &options),
            "[Type 200 (Unrecognized)]\n\
             Handle: 0x0042, Offset: 0x00000000, Length: 0x06 bytes, Total: 0xB bytes\n\
             \tHeader and Data:\n\
             \t\tC8 06 42 00 01 02\n\
             \tStrings:\n\
             \t\t6F 65 6D\n\
             \t\toem\n\
             \n"
        );
    }

    #[test]
    fn bit_field_lines() {
        // Level 2, not socketed, enabled, write back.
        let buf = record(7, 0x0010, &[0x00, 0x82, 0x01], &[]);
        let text = render(&buf, &DumpOptions::default());
        assert_eq!(
            text,
            "[Type 7: Cache Information]\n\
             Handle: 0x0010, Offset: 0x00000000, Length: 0x07 bytes, Total: 0x9 bytes\n\
             0x0004 Socket Designation: 0x00 (Not Specified)\n\
             0x0005 Cache Configuration: 0x0182\n\
             \t00:02 Level: 0x0002\n\
             \t03 [ ] Socketed\n\
             \t05:06 Location: 0x0000 (Internal)\n\
             \t07 [x] Enabled\n\
             \t08:09 Operational Mode: 0x0001 (Write Back)\n\
             \n"
        );
    }
}
