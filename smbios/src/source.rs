//! Where a structure table comes from.

use super::entry::{self, EntryPoint};
use super::error::Error;
use super::RawSmbiosData;
use bytes::Bytes;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

pub trait Acquire {
    fn acquire(&self) -> Result<RawSmbiosData, Error>;
}

/// The table published by the running platform's firmware.
#[derive(Clone, Copy, Debug, Default)]
pub struct Firmware;

impl Acquire for Firmware {
    fn acquire(&self) -> Result<RawSmbiosData, Error> {
        super::get_smbios()
    }
}

/// A table saved by `dmidecode --dump-bin`, or a bare structure table.
#[derive(Clone, Debug)]
pub struct DumpFile {
    pub path: PathBuf,
}

impl DumpFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DumpFile { path: path.into() }
    }

    /// Splits dump file contents into entry point and table.
    ///
    /// The entry point's table address is the file offset of the table.
    pub fn parse(contents: Vec<u8>) -> Result<RawSmbiosData, Error> {
        if !entry::has_anchor(&contents) {
            warn!("no entry point anchor, reading as a bare structure table");
            let length = contents.len() as u32;
            return Ok(RawSmbiosData {
                used_20_calling_method: 0,
                smbios_major_version: 0,
                smbios_minor_version: 0,
                dmi_revision: 0,
                length,
                smbios_table_data: Bytes::from(contents),
            });
        }

        let entry = EntryPoint::parse(&contents)?;
        let offset = entry.table_address as usize;
        if entry.table_address > contents.len() as u64 {
            return Err(Error::InvalidEntryPoint("table address past end of file"));
        }
        debug!("table at file offset 0x{:X}", offset);

        let table = Bytes::from(contents).slice(offset..);
        Ok(entry.raw_data(table))
    }
}

impl Acquire for DumpFile {
    fn acquire(&self) -> Result<RawSmbiosData, Error> {
        debug!("reading {}", self.path.display());
        let contents = fs::read(&self.path)?;
        Self::parse(contents)
    }
}
