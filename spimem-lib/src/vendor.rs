//! SpiMem vendors file
//!
//! Each vendor is identified by the JEDEC manufacturer byte, the first byte of a Read ID reply

use std::collections::HashMap;
use std::fmt;

/// Display name for vendors missing from [VENDOR_NAMES]
pub const UNKNOWN_VENDOR_NAME: &str = "Unknown";

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq)]
#[repr(u8)]
pub enum Vendor {
    #[default]
    Unknown = 0x00,
    Cypress = 0x01,
    Fujitsu = 0x04,
    Eon = 0x1C,
    Atmel = 0x1F,
    Micron = 0x20,
    Amic = 0x37,
    Normem = 0x52,
    Sanyo = 0x62,
    Boya = 0x68,
    Intel = 0x89,
    Esmt = 0x8C,
    Issi = 0x9D,
    Fudan = 0xA1,
    Hyundai = 0xAD,
    Sst = 0xBF,
    Micronix = 0xC2,
    Gigadevice = 0xC8,
    Winbond = 0xEF,
}

impl Eq for Vendor {}

impl Vendor {
    /// Decode manufacturer byte, unrecognised bytes give [Vendor::Unknown]
    pub fn from_id(id: u8) -> Self {
        match id {
            0x01 => Vendor::Cypress,
            0x04 => Vendor::Fujitsu,
            0x1C => Vendor::Eon,
            0x1F => Vendor::Atmel,
            0x20 => Vendor::Micron,
            0x37 => Vendor::Amic,
            0x52 => Vendor::Normem,
            0x62 => Vendor::Sanyo,
            0x68 => Vendor::Boya,
            0x89 => Vendor::Intel,
            0x8C => Vendor::Esmt,
            0x9D => Vendor::Issi,
            0xA1 => Vendor::Fudan,
            0xAD => Vendor::Hyundai,
            0xBF => Vendor::Sst,
            0xC2 => Vendor::Micronix,
            0xC8 => Vendor::Gigadevice,
            0xEF => Vendor::Winbond,
            _ => Vendor::Unknown,
        }
    }

    /// JEDEC manufacturer byte
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(vendor_name(*self))
    }
}

lazy_static! {
    pub static ref VENDOR_NAMES: HashMap<Vendor, &'static str> = [
        (Vendor::Cypress, "Cypress"),
        (Vendor::Fujitsu, "Fujitsu"),
        (Vendor::Eon, "EON"),
        (Vendor::Atmel, "Atmel"),
        (Vendor::Micron, "Micron"),
        (Vendor::Amic, "AMIC"),
        (Vendor::Normem, "Nor-Mem"),
        (Vendor::Sanyo, "Sanyo"),
        (Vendor::Intel, "Intel"),
        (Vendor::Esmt, "ESMT"),
        (Vendor::Fudan, "Fudan"),
        (Vendor::Hyundai, "Hyundai"),
        (Vendor::Sst, "SST"),
        (Vendor::Micronix, "Micronix"),
        (Vendor::Gigadevice, "GigaDevice"),
        (Vendor::Issi, "ISSI"),
        (Vendor::Winbond, "Winbond"),
        (Vendor::Boya, "BOYA"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Vendor display name, "Unknown" if [vendor] has none
pub fn vendor_name(vendor: Vendor) -> &'static str {
    VENDOR_NAMES
        .get(&vendor)
        .copied()
        .unwrap_or(UNKNOWN_VENDOR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vendor_names() {
        assert_eq!(vendor_name(Vendor::Winbond), "Winbond");
        assert_eq!(vendor_name(Vendor::Normem), "Nor-Mem");
        assert_eq!(vendor_name(Vendor::Gigadevice), "GigaDevice");
        assert_eq!(Vendor::Boya.to_string(), "BOYA");
    }

    #[test]
    fn unknown_vendor_name() {
        assert_eq!(vendor_name(Vendor::Unknown), "Unknown");
        assert_eq!(vendor_name(Vendor::from_id(0x42)), "Unknown");
    }

    #[test]
    fn every_vendor_has_a_name() {
        assert_eq!(VENDOR_NAMES.len(), 18);
        assert!(!VENDOR_NAMES.contains_key(&Vendor::Unknown));
    }

    #[test]
    fn id_round_trip() {
        for vendor in VENDOR_NAMES.keys() {
            assert_eq!(Vendor::from_id(vendor.id()), *vendor);
        }
        assert_eq!(Vendor::from_id(0x00), Vendor::Unknown);
        assert_eq!(Vendor::from_id(0xFF), Vendor::Unknown);
    }
}
