use super::{FieldDescriptor as F, TypeDescriptor};

const ARRAY_LOCATION: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "System board or motherboard"),
    (0x04, "ISA add-on card"),
    (0x05, "EISA add-on card"),
    (0x06, "PCI add-on card"),
    (0x07, "MCA add-on card"),
    (0x08, "PCMCIA add-on card"),
    (0x09, "Proprietary add-on card"),
    (0x0A, "NuBus"),
    (0xA0, "PC-98/C20 add-on card"),
    (0xA1, "PC-98/C24 add-on card"),
    (0xA2, "PC-98/E add-on card"),
    (0xA3, "PC-98/Local bus add-on card"),
    (0xA4, "CXL add-on card"),
];

const ARRAY_USE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "System memory"),
    (0x04, "Video memory"),
    (0x05, "Flash memory"),
    (0x06, "Non-volatile RAM"),
    (0x07, "Cache memory"),
];

const ARRAY_ERROR_CORRECTION: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "None"),
    (0x04, "Parity"),
    (0x05, "Single-bit ECC"),
    (0x06, "Multi-bit ECC"),
    (0x07, "CRC"),
];

const FORM_FACTOR: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "SIMM"),
    (0x04, "SIP"),
    (0x05, "Chip"),
    (0x06, "DIP"),
    (0x07, "ZIP"),
    (0x08, "Proprietary Card"),
    (0x09, "DIMM"),
    (0x0A, "TSOP"),
    (0x0B, "Row of chips"),
    (0x0C, "RIMM"),
    (0x0D, "SODIMM"),
    (0x0E, "SRIMM"),
    (0x0F, "FB-DIMM"),
    (0x10, "Die"),
    (0x11, "CAMM"),
];

const MEMORY_TYPE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "DRAM"),
    (0x04, "EDRAM"),
    (0x05, "VRAM"),
    (0x06, "SRAM"),
    (0x07, "RAM"),
    (0x08, "ROM"),
    (0x09, "FLASH"),
    (0x0A, "EEPROM"),
    (0x0B, "FEPROM"),
    (0x0C, "EPROM"),
    (0x0D, "CDRAM"),
    (0x0E, "3DRAM"),
    (0x0F, "SDRAM"),
    (0x10, "SGRAM"),
    (0x11, "RDRAM"),
    (0x12, "DDR"),
    (0x13, "DDR2"),
    (0x14, "DDR2 FB-DIMM"),
    (0x18, "DDR3"),
    (0x19, "FBD2"),
    (0x1A, "DDR4"),
    (0x1B, "LPDDR"),
    (0x1C, "LPDDR2"),
    (0x1D, "LPDDR3"),
    (0x1E, "LPDDR4"),
    (0x1F, "Logical non-volatile device"),
    (0x20, "HBM (High Bandwidth Memory)"),
    (0x21, "HBM2 (High Bandwidth Memory Generation 2)"),
    (0x22, "DDR5"),
    (0x23, "LPDDR5"),
    (0x24, "HBM3 (High Bandwidth Memory Generation 3)"),
];

const MEMORY_TECHNOLOGY: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "DRAM"),
    (0x04, "NVDIMM-N"),
    (0x05, "NVDIMM-F"),
    (0x06, "NVDIMM-P"),
    (0x07, "Intel Optane persistent memory"),
    (0x08, "MRDIMM"),
];

const PHYSICAL_MEMORY_ARRAY: &[F] = &[
    F::enumerated(0x04, 1, "Location", ARRAY_LOCATION),
    F::enumerated(0x05, 1, "Use", ARRAY_USE),
    F::enumerated(0x06, 1, "Memory Error Correction", ARRAY_ERROR_CORRECTION),
    F::uint(0x07, 4, "Maximum Capacity"),
    F::uint(0x0B, 2, "Memory Error Information Handle"),
    F::uint(0x0D, 2, "Number of Memory Devices"),
    F::uint(0x0F, 8, "Extended Maximum Capacity"),
];

const MEMORY_DEVICE: &[F] = &[
    F::uint(0x04, 2, "Physical Memory Array Handle"),
    F::uint(0x06, 2, "Memory Error Information Handle"),
    F::uint(0x08, 2, "Total Width"),
    F::uint(0x0A, 2, "Data Width"),
    F::uint(0x0C, 2, "Size"),
    F::bit_range(0, 15, "Size"),
    F::flag(15, "Granularity in KB"),
    F::enumerated(0x0E, 1, "Form Factor", FORM_FACTOR),
    F::uint(0x0F, 1, "Device Set"),
    F::string(0x10, "Device Locator"),
    F::string(0x11, "Bank Locator"),
    F::enumerated(0x12, 1, "Memory Type", MEMORY_TYPE),
    F::uint(0x13, 2, "Type Detail"),
    F::flag(1, "Other"),
    F::flag(2, "Unknown"),
    F::flag(3, "Fast-paged"),
    F::flag(4, "Static column"),
    F::flag(5, "Pseudo-static"),
    F::flag(6, "RAMBUS"),
    F::flag(7, "Synchronous"),
    F::flag(8, "CMOS"),
    F::flag(9, "EDO"),
    F::flag(10, "Window DRAM"),
    F::flag(11, "Cache DRAM"),
    F::flag(12, "Non-volatile"),
    F::flag(13, "Registered (Buffered)"),
    F::flag(14, "Unbuffered (Unregistered)"),
    F::flag(15, "LRDIMM"),
    F::uint(0x15, 2, "Speed"),
    F::string(0x17, "Manufacturer"),
    F::string(0x18, "Serial Number"),
    F::string(0x19, "Asset Tag"),
    F::string(0x1A, "Part Number"),
    F::uint(0x1B, 1, "Attributes"),
    F::bit_range(0, 4, "Rank"),
    F::uint(0x1C, 4, "Extended Size"),
    F::bit_range(0, 31, "Size in MB"),
    F::uint(0x20, 2, "Configured Memory Speed"),
    F::uint(0x22, 2, "Minimum Voltage"),
    F::uint(0x24, 2, "Maximum Voltage"),
    F::uint(0x26, 2, "Configured Voltage"),
    F::enumerated(0x28, 1, "Memory Technology", MEMORY_TECHNOLOGY),
    F::uint(0x29, 2, "Memory Operating Mode Capability"),
    F::flag(1, "Other"),
    F::flag(2, "Unknown"),
    F::flag(3, "Volatile memory"),
    F::flag(4, "Byte-accessible persistent memory"),
    F::flag(5, "Block-accessible persistent memory"),
    F::string(0x2B, "Firmware Version"),
    F::uint(0x2C, 2, "Module Manufacturer ID"),
    F::uint(0x2E, 2, "Module Product ID"),
    F::uint(0x30, 2, "Memory Subsystem Controller Manufacturer ID"),
    F::uint(0x32, 2, "Memory Subsystem Controller Product ID"),
    F::uint(0x34, 8, "Non-volatile Size"),
    F::uint(0x3C, 8, "Volatile Size"),
    F::uint(0x44, 8, "Cache Size"),
    F::uint(0x4C, 8, "Logical Size"),
    F::uint(0x54, 4, "Extended Speed"),
    F::uint(0x58, 4, "Extended Configured Memory Speed"),
    F::uint(0x5C, 2, "PMIC0 Manufacturer ID"),
    F::uint(0x5E, 2, "PMIC0 Revision Number"),
    F::uint(0x60, 2, "RCD Manufacturer ID"),
    F::uint(0x62, 2, "RCD Revision Number"),
];

const MEMORY_ARRAY_MAPPED_ADDRESS: &[F] = &[
    F::uint(0x04, 4, "Starting Address"),
    F::uint(0x08, 4, "Ending Address"),
    F::uint(0x0C, 2, "Memory Array Handle"),
    F::uint(0x0E, 1, "Partition Width"),
    F::uint(0x0F, 8, "Extended Starting Address"),
    F::uint(0x17, 8, "Extended Ending Address"),
];

pub(super) static TYPES: &[TypeDescriptor] = &[
    TypeDescriptor::new(16, "Physical Memory Array", PHYSICAL_MEMORY_ARRAY),
    TypeDescriptor::new(17, "Memory Device", MEMORY_DEVICE),
    TypeDescriptor::new(
        19,
        "Memory Array Mapped Address",
        MEMORY_ARRAY_MAPPED_ADDRESS,
    ),
];
