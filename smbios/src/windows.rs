use super::error::Error;
use super::RawSmbiosData;
use bytes::Bytes;
use log::debug;
use windows::core::Error as Win32Error;
use windows::Win32::System::SystemInformation::{
    EnumSystemFirmwareTables, GetSystemFirmwareTable, FIRMWARE_TABLE_ID, FIRMWARE_TABLE_PROVIDER,
};

pub const FIRMWARE_TABLE_RSMB: u32 = 0x52534D42; // 'RSMB'

pub fn get_smbios() -> Result<RawSmbiosData, Error> {
    let tables = enum_system_firmware_table(FIRMWARE_TABLE_RSMB)?;
    let table_id = tables
        .first()
        .copied()
        .ok_or(Error::InvalidEntryPoint("no RSMB firmware table"))?;

    let smbios_bytes = get_system_firmware_table(FIRMWARE_TABLE_RSMB, table_id)?;
    debug!("read {} bytes of RSMB table", smbios_bytes.len());

    RawSmbiosData::try_from(Bytes::from(smbios_bytes))
}

fn enum_system_firmware_table(signature: u32) -> Result<Vec<u32>, Win32Error> {
    // https://docs.microsoft.com/en-us/windows/win32/api/sysinfoapi/nf-sysinfoapi-enumsystemfirmwaretables

    let sig = FIRMWARE_TABLE_PROVIDER(signature);

    let size = unsafe { EnumSystemFirmwareTables(sig, std::ptr::null_mut(), 0) };
    if size == 0 {
        return Err(Win32Error::from_win32());
    }

    let mut buffer = vec![0u32; (size / 4) as usize];

    let size = unsafe {
        let buf = buffer.as_mut_ptr() as *mut FIRMWARE_TABLE_ID;
        EnumSystemFirmwareTables(sig, buf, size)
    };
    if size == 0 {
        return Err(Win32Error::from_win32());
    }

    Ok(buffer)
}

fn get_system_firmware_table(signature: u32, table_id: u32) -> Result<Vec<u8>, Win32Error> {
    // https://docs.microsoft.com/en-us/windows/win32/api/sysinfoapi/nf-sysinfoapi-getsystemfirmwaretable

    let sig = FIRMWARE_TABLE_PROVIDER(signature);
    let id = FIRMWARE_TABLE_ID(table_id);

    let size = unsafe { GetSystemFirmwareTable(sig, id, std::ptr::null_mut(), 0) };
    if size == 0 {
        return Err(Win32Error::from_win32());
    }

    let mut buffer = vec![0u8; size as usize];

    let size = unsafe {
        let buf = buffer.as_mut_ptr() as *mut std::ffi::c_void;
        GetSystemFirmwareTable(sig, id, buf, size)
    };
    if size == 0 {
        return Err(Win32Error::from_win32());
    }
    buffer.truncate(size as usize);

    Ok(buffer)
}
