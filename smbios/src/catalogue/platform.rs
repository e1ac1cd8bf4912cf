use super::{FieldDescriptor as F, TypeDescriptor};

const EXTENDED_ROM_SIZE_UNIT: &[(u64, &str)] = &[(0b00, "MB"), (0b01, "GB")];

const WAKEUP_TYPE: &[(u64, &str)] = &[
    (0x00, "Reserved"),
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "APM Timer"),
    (0x04, "Modem Ring"),
    (0x05, "LAN Remote"),
    (0x06, "Power Switch"),
    (0x07, "PCI PME#"),
    (0x08, "AC Power Restored"),
];

const BOARD_TYPE: &[(u64, &str)] = &[
    (0x01, "Unknown"),
    (0x02, "Other"),
    (0x03, "Server Blade"),
    (0x04, "Connectivity Switch"),
    (0x05, "System Management Module"),
    (0x06, "Processor Module"),
    (0x07, "I/O Module"),
    (0x08, "Memory Module"),
    (0x09, "Daughter board"),
    (0x0A, "Motherboard"),
    (0x0B, "Processor/Memory Module"),
    (0x0C, "Processor/IO Module"),
    (0x0D, "Interconnect board"),
];

const CHASSIS_TYPE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Desktop"),
    (0x04, "Low Profile Desktop"),
    (0x05, "Pizza Box"),
    (0x06, "Mini Tower"),
    (0x07, "Tower"),
    (0x08, "Portable"),
    (0x09, "Laptop"),
    (0x0A, "Notebook"),
    (0x0B, "Hand Held"),
    (0x0C, "Docking Station"),
    (0x0D, "All in One"),
    (0x0E, "Sub Notebook"),
    (0x0F, "Space-saving"),
    (0x10, "Lunch Box"),
    (0x11, "Main Server Chassis"),
    (0x12, "Expansion Chassis"),
    (0x13, "SubChassis"),
    (0x14, "Bus Expansion Chassis"),
    (0x15, "Peripheral Chassis"),
    (0x16, "RAID Chassis"),
    (0x17, "Rack Mount Chassis"),
    (0x18, "Sealed-case PC"),
    (0x19, "Multi-system chassis"),
    (0x1A, "Compact PCI"),
    (0x1B, "Advanced TCA"),
    (0x1C, "Blade"),
    (0x1D, "Blade Enclosure"),
    (0x1E, "Tablet"),
    (0x1F, "Convertible"),
    (0x20, "Detachable"),
    (0x21, "IoT Gateway"),
    (0x22, "Embedded PC"),
    (0x23, "Mini PC"),
    (0x24, "Stick PC"),
];

const CHASSIS_STATE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "Safe"),
    (0x04, "Warning"),
    (0x05, "Critical"),
    (0x06, "Non-recoverable"),
];

const CHASSIS_SECURITY_STATE: &[(u64, &str)] = &[
    (0x01, "Other"),
    (0x02, "Unknown"),
    (0x03, "None"),
    (0x04, "External interface locked out"),
    (0x05, "External interface enabled"),
];

const BOOT_STATUS: &[(u64, &str)] = &[
    (0, "No errors detected"),
    (1, "No bootable media"),
    (2, "\"normal\" operating system failed to load"),
    (3, "Firmware-detected hardware failure"),
    (4, "Operating system-detected hardware failure"),
    (5, "User-requested boot"),
    (6, "System security violation"),
    (7, "Previously requested image"),
    (8, "System watchdog timer expired"),
];

const PLATFORM_FIRMWARE: &[F] = &[
    F::string(0x04, "Vendor"),
    F::string(0x05, "Firmware Version"),
    F::uint(0x06, 2, "BIOS Starting Address Segment"),
    F::string(0x08, "Firmware Release Date"),
    F::uint(0x09, 1, "Firmware ROM Size"),
    F::uint(0x0A, 8, "Firmware Characteristics"),
    F::flag(2, "Unknown"),
    F::flag(3, "Firmware Characteristics are not supported"),
    F::flag(4, "ISA is supported"),
    F::flag(5, "MCA is supported"),
    F::flag(6, "EISA is supported"),
    F::flag(7, "PCI is supported"),
    F::flag(8, "PC card (PCMCIA) is supported"),
    F::flag(9, "Plug and Play is supported"),
    F::flag(10, "APM is supported"),
    F::flag(11, "Firmware is upgradeable (Flash)"),
    F::flag(12, "Firmware shadowing is allowed"),
    F::flag(13, "VL-VESA is supported"),
    F::flag(14, "ESCD support is available"),
    F::flag(15, "Boot from CD is supported"),
    F::flag(16, "Selectable boot is supported"),
    F::flag(17, "Firmware ROM is socketed"),
    F::flag(18, "Boot from PC card (PCMCIA) is supported"),
    F::flag(19, "EDD specification is supported"),
    F::flag(20, "Int 13h, Japanese floppy for NEC 9800 1.2 MB"),
    F::flag(21, "Int 13h, Japanese floppy for Toshiba 1.2 MB"),
    F::flag(22, "Int 13h, 5.25\" / 360 KB floppy services"),
    F::flag(23, "Int 13h, 5.25\" / 1.2 MB floppy services"),
    F::flag(24, "Int 13h, 3.5\" / 720 KB floppy services"),
    F::flag(25, "Int 13h, 3.5\" / 2.88 MB floppy services"),
    F::flag(26, "Int 5h, print screen service is supported"),
    F::flag(27, "Int 9h, 8042 keyboard services are supported"),
    F::flag(28, "Int 14h, serial services are supported"),
    F::flag(29, "Int 17h, printer services are supported"),
    F::flag(30, "Int 10h, CGA/Mono Video Services are supported"),
    F::flag(31, "NEC PC-98"),
    F::bit_range(32, 16, "Reserved for platform firmware vendor"),
    F::bit_range(48, 16, "Reserved for system vendor"),
    F::uint(0x12, 1, "Firmware Characteristics Extension Byte 1"),
    F::flag(0, "ACPI is supported"),
    F::flag(1, "USB Legacy is supported"),
    F::flag(2, "AGP is supported"),
    F::flag(3, "I2O boot is supported"),
    F::flag(4, "LS-120 SuperDisk boot is supported"),
    F::flag(5, "ATAPI ZIP drive boot is supported"),
    F::flag(6, "1394 boot is supported"),
    F::flag(7, "Smart battery is supported"),
    F::uint(0x13, 1, "Firmware Characteristics Extension Byte 2"),
    F::flag(0, "BIOS Boot Specification is supported"),
    F::flag(1, "Function key-initiated network service boot is supported"),
    F::flag(2, "Enable targeted content distribution"),
    F::flag(3, "UEFI Specification is supported"),
    F::flag(4, "SMBIOS table describes a virtual machine"),
    F::flag(5, "Manufacturing mode is supported"),
    F::flag(6, "Manufacturing mode is enabled"),
    F::uint(0x14, 1, "Platform Firmware Major Release"),
    F::uint(0x15, 1, "Platform Firmware Minor Release"),
    F::uint(0x16, 1, "Embedded Controller Firmware Major Release"),
    F::uint(0x17, 1, "Embedded Controller Firmware Minor Release"),
    F::uint(0x18, 2, "Extended Firmware ROM Size"),
    F::bit_range(0, 14, "Size"),
    F::bit_enum(14, 2, "Unit", EXTENDED_ROM_SIZE_UNIT),
];

const SYSTEM: &[F] = &[
    F::string(0x04, "Manufacturer"),
    F::string(0x05, "Product Name"),
    F::string(0x06, "Version"),
    F::string(0x07, "Serial Number"),
    F::uuid(0x08, "UUID"),
    F::enumerated(0x18, 1, "Wake-up Type", WAKEUP_TYPE),
    F::string(0x19, "SKU Number"),
    F::string(0x1A, "Family"),
];

const BASEBOARD: &[F] = &[
    F::string(0x04, "Manufacturer"),
    F::string(0x05, "Product"),
    F::string(0x06, "Version"),
    F::string(0x07, "Serial Number"),
    F::string(0x08, "Asset Tag"),
    F::uint(0x09, 1, "Feature Flags"),
    F::flag(0, "The board is a hosting board"),
    F::flag(1, "The board requires at least one daughter board or auxiliary card"),
    F::flag(2, "The board is removable"),
    F::flag(3, "The board is replaceable"),
    F::flag(4, "The board is hot swappable"),
    F::string(0x0A, "Location in Chassis"),
    F::uint(0x0B, 2, "Chassis Handle"),
    F::enumerated(0x0D, 1, "Board Type", BOARD_TYPE),
    F::uint(0x0E, 1, "Number of Contained Object Handles"),
];

const CHASSIS: &[F] = &[
    F::string(0x04, "Manufacturer"),
    F::uint(0x05, 1, "Type"),
    F::bit_enum(0, 7, "Type", CHASSIS_TYPE),
    F::flag(7, "Chassis lock is present"),
    F::string(0x06, "Version"),
    F::string(0x07, "Serial Number"),
    F::string(0x08, "Asset Tag Number"),
    F::enumerated(0x09, 1, "Boot-up State", CHASSIS_STATE),
    F::enumerated(0x0A, 1, "Power Supply State", CHASSIS_STATE),
    F::enumerated(0x0B, 1, "Thermal State", CHASSIS_STATE),
    F::enumerated(0x0C, 1, "Security Status", CHASSIS_SECURITY_STATE),
    F::uint(0x0D, 4, "OEM-defined"),
    F::uint(0x11, 1, "Height"),
    F::uint(0x12, 1, "Number of Power Cords"),
    F::uint(0x13, 1, "Contained Element Count"),
    F::uint(0x14, 1, "Contained Element Record Length"),
];

const OEM_STRINGS: &[F] = &[F::uint(0x04, 1, "Count")];

const SYSTEM_CONFIGURATION_OPTIONS: &[F] = &[F::uint(0x04, 1, "Count")];

const SYSTEM_BOOT: &[F] = &[
    F::raw(0x04, 6, "Reserved"),
    F::enumerated(0x0A, 1, "Boot Status", BOOT_STATUS),
    F::raw(0x0B, 9, "Additional Data"),
];

pub(super) static TYPES: &[TypeDescriptor] = &[
    TypeDescriptor::new(0, "Platform Firmware Information", PLATFORM_FIRMWARE),
    TypeDescriptor::new(1, "System Information", SYSTEM),
    TypeDescriptor::new(2, "Baseboard (or Module) Information", BASEBOARD),
    TypeDescriptor::new(3, "System Enclosure or Chassis", CHASSIS),
    TypeDescriptor::new(11, "OEM Strings", OEM_STRINGS),
    TypeDescriptor::new(
        12,
        "System Configuration Options",
        SYSTEM_CONFIGURATION_OPTIONS,
    ),
    TypeDescriptor::new(32, "System Boot Information", SYSTEM_BOOT),
    TypeDescriptor::named(126, "Inactive"),
    TypeDescriptor::named(127, "End-of-Table"),
];
