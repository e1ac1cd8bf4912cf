use super::error::Error;
use super::RawSmbiosData;
use bytes::{Buf, Bytes};
use log::{debug, warn};

pub const SMBIOS2_ANCHOR: &[u8] = b"_SM_";
pub const SMBIOS3_ANCHOR: &[u8] = b"_SM3_";
const DMI_ANCHOR: &[u8] = b"_DMI_";

const SMBIOS2_LENGTH: usize = 0x1F;
const SMBIOS3_LENGTH: usize = 0x18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Smbios2,
    Smbios3,
}

/// The fields of an entry point structure needed to locate and label the
/// structure table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryPoint {
    pub anchor: Anchor,
    pub major: u8,
    pub minor: u8,
    /// 2 for a 2.1 entry point, 3 for 3.0.
    pub dmi_revision: u8,
    pub max_structure_size: Option<u16>,
    /// Exact table length for 2.1 entry points, an upper bound for 3.0.
    pub table_length: u32,
    pub table_address: u64,
    pub structure_count: Option<u16>,
}

pub fn has_anchor(buf: &[u8]) -> bool {
    buf.starts_with(SMBIOS2_ANCHOR) || buf.starts_with(SMBIOS3_ANCHOR)
}

fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}

fn verify_checksum(name: &str, bytes: &[u8]) {
    let sum = checksum(bytes);
    if sum != 0 {
        warn!("{} checksum mismatch (sum 0x{:02X})", name, sum);
    }
}

impl EntryPoint {
    pub fn parse(buf: &[u8]) -> Result<Self, Error> {
        if buf.starts_with(SMBIOS3_ANCHOR) {
            Self::parse_smbios3(buf)
        } else if buf.starts_with(SMBIOS2_ANCHOR) {
            Self::parse_smbios2(buf)
        } else {
            Err(Error::InvalidEntryPoint("unknown anchor"))
        }
    }

    fn parse_smbios2(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < SMBIOS2_LENGTH {
            return Err(Error::InvalidEntryPoint("2.1 entry point too short"));
        }

        let mut entry = &buf[4..];
        let _entry_checksum = entry.get_u8();
        let entry_length = entry.get_u8() as usize;
        let major = entry.get_u8();
        let minor = entry.get_u8();
        let max_structure_size = entry.get_u16_le();
        let _entry_revision = entry.get_u8();
        entry.advance(5);
        let inter_anchor = &entry[..5];
        entry.advance(5);
        let _inter_checksum = entry.get_u8();
        let table_length = entry.get_u16_le() as u32;
        let table_address = entry.get_u32_le() as u64;
        let structure_count = entry.get_u16_le();

        if inter_anchor != DMI_ANCHOR {
            warn!("2.1 entry point has no intermediate anchor");
        }
        verify_checksum(
            "entry point",
            &buf[..entry_length.clamp(SMBIOS2_LENGTH, buf.len())],
        );
        verify_checksum("intermediate entry point", &buf[0x10..SMBIOS2_LENGTH]);
        debug!(
            "SMBIOS {}.{} entry point: {} structures, {} bytes at 0x{:08X}",
            major, minor, structure_count, table_length, table_address
        );

        Ok(EntryPoint {
            anchor: Anchor::Smbios2,
            major,
            minor,
            dmi_revision: 2,
            max_structure_size: Some(max_structure_size),
            table_length,
            table_address,
            structure_count: Some(structure_count),
        })
    }

    fn parse_smbios3(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < SMBIOS3_LENGTH {
            return Err(Error::InvalidEntryPoint("3.0 entry point too short"));
        }

        let mut entry = &buf[5..];
        let _entry_checksum = entry.get_u8();
        let entry_length = entry.get_u8() as usize;
        let major = entry.get_u8();
        let minor = entry.get_u8();
        let _docrev = entry.get_u8();
        let _entry_revision = entry.get_u8();
        let _reserved = entry.get_u8();
        let table_length = entry.get_u32_le();
        let table_address = entry.get_u64_le();

        verify_checksum(
            "entry point",
            &buf[..entry_length.clamp(SMBIOS3_LENGTH, buf.len())],
        );
        debug!(
            "SMBIOS {}.{} entry point: up to {} bytes at 0x{:016X}",
            major, minor, table_length, table_address
        );

        Ok(EntryPoint {
            anchor: Anchor::Smbios3,
            major,
            minor,
            dmi_revision: 3,
            max_structure_size: None,
            table_length,
            table_address,
            structure_count: None,
        })
    }

    /// Pairs the entry point with the structure table it describes.
    pub fn raw_data(&self, smbios_table_data: Bytes) -> RawSmbiosData {
        RawSmbiosData {
            used_20_calling_method: (self.anchor == Anchor::Smbios2) as u8,
            smbios_major_version: self.major,
            smbios_minor_version: self.minor,
            dmi_revision: self.dmi_revision,
            length: self.table_length,
            smbios_table_data,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn fix_checksum(buf: &mut [u8], at: usize, range: std::ops::Range<usize>) {
        buf[at] = 0;
        let sum = checksum(&buf[range]);
        buf[at] = 0u8.wrapping_sub(sum);
    }

    pub(crate) fn smbios2(major: u8, minor: u8, table_length: u16, table_address: u32) -> Vec<u8> {
        let mut buf = vec![0u8; SMBIOS2_LENGTH];
        buf[..4].copy_from_slice(SMBIOS2_ANCHOR);
        buf[5] = SMBIOS2_LENGTH as u8;
        buf[6] = major;
        buf[7] = minor;
        buf[8..10].copy_from_slice(&0x0100u16.to_le_bytes());
        buf[16..21].copy_from_slice(DMI_ANCHOR);
        buf[22..24].copy_from_slice(&table_length.to_le_bytes());
        buf[24..28].copy_from_slice(&table_address.to_le_bytes());
        buf[28..30].copy_from_slice(&3u16.to_le_bytes());
        buf[30] = 0x28;
        fix_checksum(&mut buf, 0x15, 0x10..SMBIOS2_LENGTH);
        fix_checksum(&mut buf, 4, 0..SMBIOS2_LENGTH);
        buf
    }

    pub(crate) fn smbios3(major: u8, minor: u8, docrev: u8, max: u32, address: u64) -> Vec<u8> {
        let mut buf = vec![0u8; SMBIOS3_LENGTH];
        buf[..5].copy_from_slice(SMBIOS3_ANCHOR);
        buf[6] = SMBIOS3_LENGTH as u8;
        buf[7] = major;
        buf[8] = minor;
        buf[9] = docrev;
        buf[10] = 1;
        buf[12..16].copy_from_slice(&max.to_le_bytes());
        buf[16..24].copy_from_slice(&address.to_le_bytes());
        fix_checksum(&mut buf, 5, 0..SMBIOS3_LENGTH);
        buf
    }

    #[test]
    fn parses_smbios2() {
        let buf = smbios2(2, 8, 0x1234, 0x000F_0000);
        assert_eq!(checksum(&buf), 0);
        let entry = EntryPoint::parse(&buf).unwrap();
        assert_eq!(entry.anchor, Anchor::Smbios2);
        assert_eq!((entry.major, entry.minor), (2, 8));
        assert_eq!(entry.max_structure_size, Some(0x0100));
        assert_eq!(entry.table_length, 0x1234);
        assert_eq!(entry.table_address, 0x000F_0000);
        assert_eq!(entry.structure_count, Some(3));
        assert_eq!(entry.dmi_revision, 2);

        let raw = entry.raw_data(Bytes::new());
        assert_eq!(raw.used_20_calling_method, 1);
        assert_eq!(raw.dmi_revision, 2);
        assert_eq!(raw.length, 0x1234);
    }

    #[test]
    fn parses_smbios3() {
        let buf = smbios3(3, 4, 0, 0x2000, 0x7654_3210);
        let entry = EntryPoint::parse(&buf).unwrap();
        assert_eq!(entry.anchor, Anchor::Smbios3);
        assert_eq!((entry.major, entry.minor, entry.dmi_revision), (3, 4, 3));
        assert_eq!(entry.table_length, 0x2000);
        assert_eq!(entry.table_address, 0x7654_3210);
        assert_eq!(entry.structure_count, None);
        assert_eq!(entry.raw_data(Bytes::new()).used_20_calling_method, 0);
    }

    #[test]
    fn bad_checksum_is_not_fatal() {
        let mut buf = smbios3(3, 0, 0, 0x100, 0x20);
        buf[5] = buf[5].wrapping_add(1);
        assert!(EntryPoint::parse(&buf).is_ok());
    }

    #[test]
    fn rejects_short_and_unknown() {
        let buf = smbios2(2, 7, 0, 0);
        assert!(matches!(
            EntryPoint::parse(&buf[..20]),
            Err(Error::InvalidEntryPoint(_))
        ));
        assert!(matches!(
            EntryPoint::parse(&smbios3(3, 0, 0, 0, 0)[..10]),
            Err(Error::InvalidEntryPoint(_))
        ));
        assert!(matches!(
            EntryPoint::parse(b"_XX_ not an entry point at all"),
            Err(Error::InvalidEntryPoint(_))
        ));
        assert!(!has_anchor(b"_DMI_"));
        assert!(has_anchor(&buf));
    }
}
