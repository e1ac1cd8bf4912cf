//! Field layouts of the structure types this crate knows how to decode.
//!
//! Every layout is plain data: an ordered list of [`FieldDescriptor`]s with
//! ascending offsets. A run of bit fields describes slices of the plain
//! `UInt` field placed immediately before it.

mod memory;
mod platform;
mod processor;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type EnumValues = &'static [(u64, &'static str)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    UInt,
    Enum(EnumValues),
    Bit,
    String,
    Uuid,
    Raw,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// `size` bytes at `offset` from the start of the structure.
    Bytes { offset: u8, size: u8 },
    /// `width` bits starting at bit `position` of the backing field.
    Bits { position: u8, width: u8 },
}

/// Restricts a bit field to backing values whose bit `bit` equals `set`.
///
/// Bits past the end of the backing value read as clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selector {
    pub bit: u8,
    pub set: bool,
}

impl Selector {
    pub fn matches(&self, backing: u64) -> bool {
        backing.checked_shr(self.bit as u32).unwrap_or(0) & 1 == self.set as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub placement: Placement,
    pub kind: FieldKind,
    pub when: Option<Selector>,
}

impl FieldDescriptor {
    const fn bytes(name: &'static str, offset: u8, size: u8, kind: FieldKind) -> Self {
        FieldDescriptor {
            name,
            placement: Placement::Bytes { offset, size },
            kind,
            when: None,
        }
    }

    const fn bits(name: &'static str, position: u8, width: u8, kind: FieldKind) -> Self {
        FieldDescriptor {
            name,
            placement: Placement::Bits { position, width },
            kind,
            when: None,
        }
    }

    pub const fn uint(offset: u8, size: u8, name: &'static str) -> Self {
        Self::bytes(name, offset, size, FieldKind::UInt)
    }

    pub const fn enumerated(offset: u8, size: u8, name: &'static str, values: EnumValues) -> Self {
        Self::bytes(name, offset, size, FieldKind::Enum(values))
    }

    pub const fn string(offset: u8, name: &'static str) -> Self {
        Self::bytes(name, offset, 1, FieldKind::String)
    }

    pub const fn uuid(offset: u8, name: &'static str) -> Self {
        Self::bytes(name, offset, 16, FieldKind::Uuid)
    }

    pub const fn raw(offset: u8, size: u8, name: &'static str) -> Self {
        Self::bytes(name, offset, size, FieldKind::Raw)
    }

    pub const fn other(offset: u8, size: u8, name: &'static str) -> Self {
        Self::bytes(name, offset, size, FieldKind::Other)
    }

    pub const fn flag(position: u8, name: &'static str) -> Self {
        Self::bits(name, position, 1, FieldKind::Bit)
    }

    pub const fn bit_range(position: u8, width: u8, name: &'static str) -> Self {
        Self::bits(name, position, width, FieldKind::UInt)
    }

    pub const fn bit_enum(position: u8, width: u8, name: &'static str, values: EnumValues) -> Self {
        Self::bits(name, position, width, FieldKind::Enum(values))
    }

    pub const fn when(self, bit: u8, set: bool) -> Self {
        FieldDescriptor {
            when: Some(Selector { bit, set }),
            ..self
        }
    }

    pub fn is_bit_field(&self) -> bool {
        matches!(self.placement, Placement::Bits { .. })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub ty: u8,
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    pub const fn new(ty: u8, name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        TypeDescriptor { ty, name, fields }
    }

    pub const fn named(ty: u8, name: &'static str) -> Self {
        TypeDescriptor {
            ty,
            name,
            fields: &[],
        }
    }
}

static NAMED: &[TypeDescriptor] = &[
    TypeDescriptor::named(5, "Memory Controller Information"),
    TypeDescriptor::named(6, "Memory Module Information"),
    TypeDescriptor::named(8, "Port Connector Information"),
    TypeDescriptor::named(9, "System Slots"),
    TypeDescriptor::named(10, "On Board Devices Information"),
    TypeDescriptor::named(13, "Firmware Language Information"),
    TypeDescriptor::named(14, "Group Associations"),
    TypeDescriptor::named(15, "System Event Log"),
    TypeDescriptor::named(18, "32-Bit Memory Error Information"),
    TypeDescriptor::named(20, "Memory Device Mapped Address"),
    TypeDescriptor::named(21, "Built-in Pointing Device"),
    TypeDescriptor::named(22, "Portable Battery"),
    TypeDescriptor::named(23, "System Reset"),
    TypeDescriptor::named(24, "Hardware Security"),
    TypeDescriptor::named(25, "System Power Controls"),
    TypeDescriptor::named(26, "Voltage Probe"),
    TypeDescriptor::named(27, "Cooling Device"),
    TypeDescriptor::named(28, "Temperature Probe"),
    TypeDescriptor::named(29, "Electrical Current Probe"),
    TypeDescriptor::named(30, "Out-of-Band Remote Access"),
    TypeDescriptor::named(31, "Boot Integrity Services Entry Point"),
    TypeDescriptor::named(33, "64-Bit Memory Error Information"),
    TypeDescriptor::named(34, "Management Device"),
    TypeDescriptor::named(35, "Management Device Component"),
    TypeDescriptor::named(36, "Management Device Threshold Data"),
    TypeDescriptor::named(37, "Memory Channel"),
    TypeDescriptor::named(38, "IPMI Device Information"),
    TypeDescriptor::named(39, "System Power Supply"),
    TypeDescriptor::named(40, "Additional Information"),
    TypeDescriptor::named(41, "Onboard Devices Extended Information"),
    TypeDescriptor::named(42, "Management Controller Host Interface"),
    TypeDescriptor::named(43, "TPM Device"),
    TypeDescriptor::named(44, "Processor Additional Information"),
    TypeDescriptor::named(45, "Firmware Inventory Information"),
    TypeDescriptor::named(46, "String Property"),
];

static CATALOGUE: Lazy<HashMap<u8, &'static TypeDescriptor>> = Lazy::new(|| {
    let mut types = HashMap::new();
    for desc in platform::TYPES
        .iter()
        .chain(processor::TYPES)
        .chain(memory::TYPES)
        .chain(NAMED)
    {
        types.insert(desc.ty, desc);
    }
    types
});

pub fn lookup(ty: u8) -> Option<&'static TypeDescriptor> {
    CATALOGUE.get(&ty).copied()
}

pub fn get_table_name_by_id(id: u8) -> Option<&'static str> {
    lookup(id).map(|desc| desc.name)
}
