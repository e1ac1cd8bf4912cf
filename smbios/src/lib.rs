//! SMBIOS structure table walker, field decoder and text renderer.

pub mod catalogue;
pub mod decode;
pub mod dump;
pub mod entry;
pub mod error;
pub mod source;
pub mod strings;
pub mod table;
#[cfg(test)]
mod test_support;

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod windows;

pub use self::catalogue::{get_table_name_by_id, lookup};
pub use self::dump::{dump, DumpOptions};
pub use self::error::Error;
pub use self::source::{Acquire, DumpFile, Firmware};
pub use self::table::{RawSmbiosTable, Tables};
#[cfg(target_family = "unix")]
pub use self::unix::get_smbios;
#[cfg(target_family = "windows")]
pub use self::windows::get_smbios;
use bytes::{Buf, Bytes};

const RAW_HEADER_LENGTH: usize = 8;

/// A structure table together with the version information that came
/// with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSmbiosData {
    pub used_20_calling_method: u8,
    pub smbios_major_version: u8,
    pub smbios_minor_version: u8,
    pub dmi_revision: u8,
    /// Declared table length; 0 when unknown.
    pub length: u32,
    pub smbios_table_data: Bytes,
}

impl RawSmbiosData {
    /// The structure table, cut to the declared length when one is known.
    pub fn table(&self) -> &[u8] {
        let data = &self.smbios_table_data[..];
        match self.length as usize {
            0 => data,
            length => &data[..length.min(data.len())],
        }
    }

    pub fn tables(&self) -> Tables<'_> {
        Tables::new(self.table())
    }
}

/// Parses the raw SMBIOS data layout returned by `GetSystemFirmwareTable`.
impl TryFrom<Bytes> for RawSmbiosData {
    type Error = Error;

    fn try_from(mut buf: Bytes) -> Result<Self, Error> {
        if buf.remaining() < RAW_HEADER_LENGTH {
            return Err(Error::InvalidEntryPoint("raw SMBIOS data header truncated"));
        }

        let used_20_calling_method = buf.get_u8();
        let smbios_major_version = buf.get_u8();
        let smbios_minor_version = buf.get_u8();
        let dmi_revision = buf.get_u8();
        let length = buf.get_u32_le();

        Ok(RawSmbiosData {
            used_20_calling_method,
            smbios_major_version,
            smbios_minor_version,
            dmi_revision,
            length,
            smbios_table_data: buf,
        })
    }
}
