use super::entry::EntryPoint;
use super::error::Error;
use super::RawSmbiosData;
use bytes::Bytes;
use log::debug;
use std::fs;

const DMI_PATH: &str = "/sys/firmware/dmi/tables/DMI";
const SMBIOS_ENTRY_POINT_PATH: &str = "/sys/firmware/dmi/tables/smbios_entry_point";

pub fn get_smbios() -> Result<RawSmbiosData, Error> {
    let entry = fs::read(SMBIOS_ENTRY_POINT_PATH)?;
    let entry = EntryPoint::parse(&entry)?;

    let smbios_table_data = fs::read(DMI_PATH)?;
    debug!("read {} bytes from {}", smbios_table_data.len(), DMI_PATH);

    Ok(entry.raw_data(Bytes::from(smbios_table_data)))
}
