use super::{FieldDescriptor as F, TypeDescriptor};

const PROCESSOR_TYPE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Central Processor"),
    (0x04, "Math Processor"),
    (0x05, "DSP Processor"),
    (0x06, "Video Processor"),
];

const PROCESSOR_FAMILY: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "8086"),
    (0x04, "80286"),
    (0x05, "Intel386 processor"),
    (0x06, "Intel486 processor"),
    (0x0B, "Intel Pentium processor"),
    (0x0C, "Pentium Pro processor"),
    (0x0D, "Pentium II processor"),
    (0x11, "Pentium III processor"),
    (0x18, "AMD Duron Processor Family"),
    (0x19, "K5 Family"),
    (0x1A, "K6 Family"),
    (0x28, "Intel Core Duo processor"),
    (0x29, "Intel Core Duo mobile processor"),
    (0x2B, "Intel Atom processor"),
    (0x2C, "Intel Core M processor"),
    (0x2D, "Intel Core m3 processor"),
    (0x2E, "Intel Core m5 processor"),
    (0x2F, "Intel Core m7 processor"),
    (0x38, "AMD Turion II Ultra Dual-Core Mobile M Processor Family"),
    (0x6B, "AMD Zen Processor Family"),
    (0x83, "AMD Athlon 64 Processor Family"),
    (0x84, "AMD Opteron Processor Family"),
    (0xB3, "Intel Xeon processor"),
    (0xBF, "Intel Core 2 Duo processor"),
    (0xC6, "Intel Core i7 processor"),
    (0xCD, "Intel Core i5 processor"),
    (0xCE, "Intel Core i3 processor"),
    (0xCF, "Intel Core i9 processor"),
    (0xFE, "Available for assignment"),
];

const PROCESSOR_FAMILY_2: &[(u64, &str)] = &[
    (0x0100, "ARMv7"),
    (0x0101, "ARMv8"),
    (0x0102, "ARMv9"),
    (0x0104, "SH-3"),
    (0x0105, "SH-4"),
    (0x0118, "ARM"),
    (0x0119, "StrongARM"),
    (0x012C, "6x86"),
    (0x012D, "MediaGX"),
    (0x012E, "MII"),
    (0x0140, "WinChip"),
    (0x015E, "DSP"),
    (0x01F4, "Video Processor"),
    (0x0200, "RISC-V RV32"),
    (0x0201, "RISC-V RV64"),
    (0x0202, "RISC-V RV128"),
    (0x0258, "LoongArch"),
    (0x0300, "Intel Core 3"),
    (0x0301, "Intel Core 5"),
    (0x0302, "Intel Core 7"),
    (0x0303, "Intel Core 9"),
    (0x0304, "Intel Core Ultra 3"),
    (0x0305, "Intel Core Ultra 5"),
    (0x0306, "Intel Core Ultra 7"),
    (0x0307, "Intel Core Ultra 9"),
];

const CPU_STATUS: &[(u64, &str)] = &[
    (0x0, "Unknown"),
    (0x1, "CPU Enabled"),
    (0x2, "CPU Disabled by User through Firmware Setup"),
    (0x3, "CPU Disabled By firmware (POST Error)"),
    (0x4, "CPU is Idle, waiting to be enabled"),
    (0x7, "Other"),
];

const PROCESSOR_UPGRADE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Daughter Board"),
    (0x04, "ZIF Socket"),
    (0x05, "Replaceable Piggy Back"),
    (0x06, "None"),
    (0x07, "LIF Socket"),
    (0x08, "Slot 1"),
    (0x09, "Slot 2"),
    (0x0A, "370-pin socket"),
    (0x0B, "Slot A"),
    (0x0C, "Slot M"),
    (0x0D, "Socket 423"),
    (0x0E, "Socket A (Socket 462)"),
    (0x0F, "Socket 478"),
    (0x10, "Socket 754"),
    (0x11, "Socket 940"),
    (0x12, "Socket 939"),
    (0x13, "Socket mPGA604"),
    (0x14, "Socket LGA771"),
    (0x15, "Socket LGA775"),
    (0x16, "Socket S1"),
    (0x17, "Socket AM2"),
    (0x18, "Socket F (1207)"),
    (0x19, "Socket LGA1366"),
    (0x1A, "Socket G34"),
    (0x1B, "Socket AM3"),
    (0x1C, "Socket C32"),
    (0x1D, "Socket LGA1156"),
    (0x1E, "Socket LGA1567"),
    (0x1F, "Socket PGA988A"),
    (0x20, "Socket BGA1288"),
    (0x21, "Socket rPGA988B"),
    (0x22, "Socket BGA1023"),
    (0x23, "Socket BGA1224"),
    (0x24, "Socket LGA1155"),
    (0x25, "Socket LGA1356"),
    (0x26, "Socket LGA2011"),
    (0x27, "Socket FS1"),
    (0x28, "Socket FS2"),
    (0x29, "Socket FM1"),
    (0x2A, "Socket FM2"),
    (0x2B, "Socket LGA2011-3"),
    (0x2C, "Socket LGA1356-3"),
    (0x2D, "Socket LGA1150"),
    (0x2E, "Socket BGA1168"),
    (0x2F, "Socket BGA1234"),
    (0x30, "Socket BGA1364"),
    (0x31, "Socket AM4"),
    (0x32, "Socket LGA1151"),
    (0x33, "Socket BGA1356"),
    (0x34, "Socket BGA1440"),
    (0x35, "Socket BGA1515"),
    (0x36, "Socket LGA3647-1"),
    (0x37, "Socket SP3"),
    (0x38, "Socket SP3r2"),
    (0x39, "Socket LGA2066"),
    (0x3A, "Socket BGA1392"),
    (0x3B, "Socket BGA1510"),
    (0x3C, "Socket BGA1528"),
    (0x3D, "Socket LGA4189"),
    (0x3E, "Socket LGA1200"),
    (0x3F, "Socket LGA4677"),
    (0x40, "Socket LGA1700"),
    (0x41, "Socket BGA1744"),
    (0x42, "Socket BGA1781"),
    (0x43, "Socket BGA1211"),
    (0x44, "Socket BGA2422"),
    (0x45, "Socket LGA1211"),
    (0x46, "Socket LGA2422"),
    (0x47, "Socket LGA5773"),
    (0x48, "Socket BGA5773"),
    (0x49, "Socket AM5"),
    (0x4A, "Socket SP5"),
    (0x4B, "Socket SP6"),
    (0x4C, "Socket BGA883"),
    (0x4D, "Socket BGA1190"),
    (0x4E, "Socket BGA4129"),
    (0x4F, "Socket LGA4710"),
    (0x50, "Socket LGA7529"),
    (0x51, "Socket BGA1964"),
    (0x52, "Socket BGA1792"),
    (0x53, "Socket BGA2049"),
    (0x54, "Socket BGA2551"),
    (0x55, "Socket LGA1851"),
    (0x56, "Socket BGA2114"),
    (0x57, "Socket BGA2833"),
    (0xFF, "Invalid"),
];

const CACHE_LOCATION: &[(u64, &str)] = &[
    (0b00, "Internal"),
    (0b01, "External"),
    (0b10, "Reserved"),
    (0b11, "Unknown"),
];

const CACHE_OPERATIONAL_MODE: &[(u64, &str)] = &[
    (0b00, "Write Through"),
    (0b01, "Write Back"),
    (0b10, "Varies with Memory Address"),
    (0b11, "Unknown"),
];

const CACHE_ERROR_CORRECTION: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "None"),
    (0x04, "Parity"),
    (0x05, "Single-bit ECC"),
    (0x06, "Multi-bit ECC"),
];

const SYSTEM_CACHE_TYPE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Instruction"),
    (0x04, "Data"),
    (0x05, "Unified"),
];

const CACHE_ASSOCIATIVITY: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Direct Mapped"),
    (0x04, "2-way Set-Associative"),
    (0x05, "4-way Set-Associative"),
    (0x06, "Fully Associative"),
    (0x07, "8-way Set-Associative"),
    (0x08, "16-way Set-Associative"),
    (0x09, "12-way Set-Associative"),
    (0x0A, "24-way Set-Associative"),
    (0x0B, "32-way Set-Associative"),
    (0x0C, "48-way Set-Associative"),
    (0x0D, "64-way Set-Associative"),
    (0x0E, "20-way Set-Associative"),
];

const PROCESSOR: &[F] = &[
    F::string(0x04, "Socket Designation"),
    F::enumerated(0x05, 1, "Processor Type", PROCESSOR_TYPE),
    F::enumerated(0x06, 1, "Processor Family", PROCESSOR_FAMILY),
    F::string(0x07, "Processor Manufacturer"),
    F::uint(0x08, 8, "Processor ID"),
    F::string(0x10, "Processor Version"),
    // Bit 7 selects between the legacy flags and the current voltage.
    F::uint(0x11, 1, "Voltage"),
    F::flag(0, "5V").when(7, false),
    F::flag(1, "3.3V").when(7, false),
    F::flag(2, "2.9V").when(7, false),
    F::bit_range(0, 7, "Current voltage times 10").when(7, true),
    F::flag(7, "Not Legacy Mode"),
    F::uint(0x12, 2, "External Clock"),
    F::uint(0x14, 2, "Max Speed"),
    F::uint(0x16, 2, "Current Speed"),
    F::uint(0x18, 1, "Status"),
    F::bit_enum(0, 3, "CPU Status", CPU_STATUS),
    F::flag(6, "CPU Socket Populated"),
    F::enumerated(0x19, 1, "Processor Upgrade", PROCESSOR_UPGRADE),
    F::uint(0x1A, 2, "L1 Cache Handle"),
    F::uint(0x1C, 2, "L2 Cache Handle"),
    F::uint(0x1E, 2, "L3 Cache Handle"),
    F::string(0x20, "Serial Number"),
    F::string(0x21, "Asset Tag"),
    F::string(0x22, "Part Number"),
    F::uint(0x23, 1, "Core Count"),
    F::uint(0x24, 1, "Core Enabled"),
    F::uint(0x25, 1, "Thread Count"),
    F::uint(0x26, 2, "Processor Characteristics"),
    F::flag(1, "Unknown"),
    F::flag(2, "64-bit Capable"),
    F::flag(3, "Multi-Core"),
    F::flag(4, "Hardware Thread"),
    F::flag(5, "Execute Protection"),
    F::flag(6, "Enhanced Virtualization"),
    F::flag(7, "Power/Performance Control"),
    F::flag(8, "128-bit Capable"),
    F::flag(9, "Arm64 SoC ID"),
    F::enumerated(0x28, 2, "Processor Family 2", PROCESSOR_FAMILY_2),
    F::uint(0x2A, 2, "Core Count 2"),
    F::uint(0x2C, 2, "Core Enabled 2"),
    F::uint(0x2E, 2, "Thread Count 2"),
    F::uint(0x30, 2, "Thread Enabled"),
    F::string(0x32, "Socket Type"),
];

const CACHE: &[F] = &[
    F::string(0x04, "Socket Designation"),
    F::uint(0x05, 2, "Cache Configuration"),
    F::bit_range(0, 3, "Level"),
    F::flag(3, "Socketed"),
    F::bit_enum(5, 2, "Location", CACHE_LOCATION),
    F::flag(7, "Enabled"),
    F::bit_enum(8, 2, "Operational Mode", CACHE_OPERATIONAL_MODE),
    F::uint(0x07, 2, "Maximum Cache Size"),
    F::bit_range(0, 15, "Size"),
    F::flag(15, "64K Granularity"),
    F::uint(0x09, 2, "Installed Size"),
    F::bit_range(0, 15, "Size"),
    F::flag(15, "64K Granularity"),
    F::uint(0x0B, 2, "Supported SRAM Type"),
    F::flag(0, "Other"),
    F::flag(1, "Unknown"),
    F::flag(2, "Non-Burst"),
    F::flag(3, "Burst"),
    F::flag(4, "Pipeline Burst"),
    F::flag(5, "Synchronous"),
    F::flag(6, "Asynchronous"),
    F::uint(0x0D, 2, "Current SRAM Type"),
    F::flag(0, "Other"),
    F::flag(1, "Unknown"),
    F::flag(2, "Non-Burst"),
    F::flag(3, "Burst"),
    F::flag(4, "Pipeline Burst"),
    F::flag(5, "Synchronous"),
    F::flag(6, "Asynchronous"),
    F::uint(0x0F, 1, "Cache Speed"),
    F::enumerated(0x10, 1, "Error Correction Type", CACHE_ERROR_CORRECTION),
    F::enumerated(0x11, 1, "System Cache Type", SYSTEM_CACHE_TYPE),
    F::enumerated(0x12, 1, "Associativity", CACHE_ASSOCIATIVITY),
    F::uint(0x13, 4, "Maximum Cache Size 2"),
    F::bit_range(0, 31, "Size"),
    F::flag(31, "64K Granularity"),
    F::uint(0x17, 4, "Installed Cache Size 2"),
    F::bit_range(0, 31, "Size"),
    F::flag(31, "64K Granularity"),
];

pub(super) static TYPES: &[TypeDescriptor] = &[
    TypeDescriptor::new(4, "Processor Information", PROCESSOR),
    TypeDescriptor::new(7, "Cache Information", CACHE),
];
