//! SpiMem chip definitions file
//!
//! Each chip is identified by vendor, memory type and capacity bytes and has
//! variables concerning memory size, programming and erase granularity

use super::jedec::JedecId;
use super::vendor::{vendor_name, Vendor};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

const KIB: u32 = 1024;
const MIB: u32 = 1024 * KIB;

/// Sector erase opcode
const ERASE_4K: u8 = 0x20;
/// Block erase opcode
const ERASE_64K: u8 = 0xD8;

/// Page write strategy
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq)]
pub enum WriteMode {
    #[default]
    Unknown,
    Page256Bytes,
    AaiWord,
}

impl Eq for WriteMode {}

impl WriteMode {
    /// Bytes written by a single program command
    pub fn page_size(self) -> u32 {
        match self {
            WriteMode::Unknown => 0,
            WriteMode::Page256Bytes => 256,
            WriteMode::AaiWord => 2,
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriteMode::Unknown => "Unknown",
            WriteMode::Page256Bytes => "Page (256 bytes)",
            WriteMode::AaiWord => "AAI word",
        };
        f.write_str(name)
    }
}

/// Lookup key of [CHIPS]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct ChipKey {
    pub vendor: Vendor,
    pub type_id: u8,
    pub capacity_id: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipDescriptor {
    pub vendor: Vendor,
    pub model_name: &'static str,
    pub size: u32,
    pub write_mode: WriteMode,
    pub type_id: u8,
    pub capacity_id: u8,
    pub erase_gran: u32,
    pub erase_gran_cmd: u8,
}

impl ChipDescriptor {
    pub fn key(&self) -> ChipKey {
        ChipKey {
            vendor: self.vendor,
            type_id: self.type_id,
            capacity_id: self.capacity_id,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn chip(
    vendor: Vendor,
    model_name: &'static str,
    size: u32,
    write_mode: WriteMode,
    type_id: u8,
    capacity_id: u8,
    erase_gran: u32,
    erase_gran_cmd: u8,
) -> ChipDescriptor {
    ChipDescriptor {
        vendor,
        model_name,
        size,
        write_mode,
        type_id,
        capacity_id,
        erase_gran,
        erase_gran_cmd,
    }
}

use Vendor::*;
use WriteMode::{AaiWord, Page256Bytes};

#[rustfmt::skip]
static CHIP_LIST: &[ChipDescriptor] = &[
    // Winbond
    chip(Winbond, "W25X40", 512 * KIB, Page256Bytes, 0x30, 0x13, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25X80", MIB, Page256Bytes, 0x30, 0x14, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25X16", 2 * MIB, Page256Bytes, 0x30, 0x15, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25X32", 4 * MIB, Page256Bytes, 0x30, 0x16, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q40BV", 512 * KIB, Page256Bytes, 0x40, 0x13, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q80BV", MIB, Page256Bytes, 0x40, 0x14, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q16BV", 2 * MIB, Page256Bytes, 0x40, 0x15, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q32BV", 4 * MIB, Page256Bytes, 0x40, 0x16, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q64FV", 8 * MIB, Page256Bytes, 0x40, 0x17, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q128FV", 16 * MIB, Page256Bytes, 0x40, 0x18, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q256FV", 32 * MIB, Page256Bytes, 0x40, 0x19, 4 * KIB, ERASE_4K),
    chip(Winbond, "W25Q32FW", 4 * MIB, Page256Bytes, 0x60, 0x16, 4 * KIB, ERASE_4K),
    // Macronix
    chip(Micronix, "MX25L4005", 512 * KIB, Page256Bytes, 0x20, 0x13, 4 * KIB, ERASE_4K),
    chip(Micronix, "MX25L8005", MIB, Page256Bytes, 0x20, 0x14, 4 * KIB, ERASE_4K),
    chip(Micronix, "MX25L1605", 2 * MIB, Page256Bytes, 0x20, 0x15, 4 * KIB, ERASE_4K),
    chip(Micronix, "MX25L3205", 4 * MIB, Page256Bytes, 0x20, 0x16, 4 * KIB, ERASE_4K),
    chip(Micronix, "MX25L6405", 8 * MIB, Page256Bytes, 0x20, 0x17, 4 * KIB, ERASE_4K),
    chip(Micronix, "MX25L12805", 16 * MIB, Page256Bytes, 0x20, 0x18, 4 * KIB, ERASE_4K),
    // GigaDevice
    chip(Gigadevice, "GD25Q40", 512 * KIB, Page256Bytes, 0x40, 0x13, 4 * KIB, ERASE_4K),
    chip(Gigadevice, "GD25Q80", MIB, Page256Bytes, 0x40, 0x14, 4 * KIB, ERASE_4K),
    chip(Gigadevice, "GD25Q16", 2 * MIB, Page256Bytes, 0x40, 0x15, 4 * KIB, ERASE_4K),
    chip(Gigadevice, "GD25Q32", 4 * MIB, Page256Bytes, 0x40, 0x16, 4 * KIB, ERASE_4K),
    chip(Gigadevice, "GD25Q64", 8 * MIB, Page256Bytes, 0x40, 0x17, 4 * KIB, ERASE_4K),
    chip(Gigadevice, "GD25Q128", 16 * MIB, Page256Bytes, 0x40, 0x18, 4 * KIB, ERASE_4K),
    // SST
    chip(Sst, "SST25VF040B", 512 * KIB, AaiWord, 0x25, 0x8D, 4 * KIB, ERASE_4K),
    chip(Sst, "SST25VF080B", MIB, AaiWord, 0x25, 0x8E, 4 * KIB, ERASE_4K),
    chip(Sst, "SST25VF016B", 2 * MIB, AaiWord, 0x25, 0x41, 4 * KIB, ERASE_4K),
    chip(Sst, "SST25VF032B", 4 * MIB, AaiWord, 0x25, 0x4A, 4 * KIB, ERASE_4K),
    chip(Sst, "SST25VF064C", 8 * MIB, Page256Bytes, 0x25, 0x4B, 4 * KIB, ERASE_4K),
    // EON
    chip(Eon, "EN25F16", 2 * MIB, Page256Bytes, 0x31, 0x15, 4 * KIB, ERASE_4K),
    chip(Eon, "EN25Q32", 4 * MIB, Page256Bytes, 0x30, 0x16, 4 * KIB, ERASE_4K),
    chip(Eon, "EN25Q64", 8 * MIB, Page256Bytes, 0x30, 0x17, 4 * KIB, ERASE_4K),
    chip(Eon, "EN25Q128", 16 * MIB, Page256Bytes, 0x30, 0x18, 4 * KIB, ERASE_4K),
    // Micron, M25P parts only erase 64K blocks
    chip(Micron, "M25P16", 2 * MIB, Page256Bytes, 0x20, 0x15, 64 * KIB, ERASE_64K),
    chip(Micron, "M25P32", 4 * MIB, Page256Bytes, 0x20, 0x16, 64 * KIB, ERASE_64K),
    chip(Micron, "M25P64", 8 * MIB, Page256Bytes, 0x20, 0x17, 64 * KIB, ERASE_64K),
    chip(Micron, "N25Q032A", 4 * MIB, Page256Bytes, 0xBA, 0x16, 4 * KIB, ERASE_4K),
    chip(Micron, "N25Q128A", 16 * MIB, Page256Bytes, 0xBA, 0x18, 4 * KIB, ERASE_4K),
    // ISSI
    chip(Issi, "IS25LP080D", MIB, Page256Bytes, 0x60, 0x14, 4 * KIB, ERASE_4K),
    chip(Issi, "IS25LP016D", 2 * MIB, Page256Bytes, 0x60, 0x15, 4 * KIB, ERASE_4K),
    chip(Issi, "IS25LP032D", 4 * MIB, Page256Bytes, 0x60, 0x16, 4 * KIB, ERASE_4K),
    chip(Issi, "IS25LP128F", 16 * MIB, Page256Bytes, 0x60, 0x18, 4 * KIB, ERASE_4K),
    // BOYA
    chip(Boya, "BY25Q16BS", 2 * MIB, Page256Bytes, 0x40, 0x15, 4 * KIB, ERASE_4K),
    chip(Boya, "BY25Q32BS", 4 * MIB, Page256Bytes, 0x40, 0x16, 4 * KIB, ERASE_4K),
    chip(Boya, "BY25Q64AS", 8 * MIB, Page256Bytes, 0x40, 0x17, 4 * KIB, ERASE_4K),
    // Cypress
    chip(Cypress, "S25FL116K", 2 * MIB, Page256Bytes, 0x40, 0x15, 4 * KIB, ERASE_4K),
    chip(Cypress, "S25FL132K", 4 * MIB, Page256Bytes, 0x40, 0x16, 4 * KIB, ERASE_4K),
    chip(Cypress, "S25FL164K", 8 * MIB, Page256Bytes, 0x40, 0x17, 4 * KIB, ERASE_4K),
    // Atmel
    chip(Atmel, "AT25DF041A", 512 * KIB, Page256Bytes, 0x44, 0x01, 4 * KIB, ERASE_4K),
    chip(Atmel, "AT26DF081A", MIB, Page256Bytes, 0x45, 0x01, 4 * KIB, ERASE_4K),
    chip(Atmel, "AT25DF321A", 4 * MIB, Page256Bytes, 0x47, 0x01, 4 * KIB, ERASE_4K),
    // AMIC
    chip(Amic, "A25L032", 4 * MIB, Page256Bytes, 0x30, 0x16, 4 * KIB, ERASE_4K),
];

lazy_static! {
    pub static ref CHIPS: HashMap<ChipKey, ChipDescriptor> =
        CHIP_LIST.iter().map(|chip| (chip.key(), *chip)).collect();
}

/// Find descriptor matching [key] exactly
pub fn find_chip(key: ChipKey) -> Option<&'static ChipDescriptor> {
    CHIPS.get(&key)
}

/// All known chips ordered by vendor, type and capacity
pub fn chips() -> impl Iterator<Item = &'static ChipDescriptor> {
    let mut list: Vec<&'static ChipDescriptor> = CHIPS.values().collect();
    list.sort_by_key(|chip| (chip.vendor.id(), chip.type_id, chip.capacity_id));
    list.into_iter()
}

/// Human-readable size, e.g. "4 MiB"
pub fn format_size(size: u32) -> String {
    if size >= MIB && size % MIB == 0 {
        format!("{} MiB", size / MIB)
    } else if size >= KIB && size % KIB == 0 {
        format!("{} KiB", size / KIB)
    } else {
        format!("{} bytes", size)
    }
}

/// Chip record, filled from the Read ID reply and completed from [CHIPS]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpiMemChip {
    pub vendor_id: Vendor,
    pub model_name: Option<&'static str>,
    pub vendor_name: Option<&'static str>,
    pub size: u32,
    pub write_mode: WriteMode,
    pub type_id: u8,
    pub capacity_id: u8,
    pub erase_gran: u32,
    pub erase_gran_cmd: u8,
}

impl SpiMemChip {
    /// Partially filled record holding only the identifying fields
    pub fn from_jedec_id(id: JedecId) -> Self {
        SpiMemChip {
            vendor_id: Vendor::from_id(id.manufacturer),
            type_id: id.memory_type,
            capacity_id: id.capacity,
            ..Default::default()
        }
    }

    pub fn key(&self) -> ChipKey {
        ChipKey {
            vendor: self.vendor_id,
            type_id: self.type_id,
            capacity_id: self.capacity_id,
        }
    }

    /// Fill remaining fields from the matching descriptor
    ///
    /// Returns false and leaves the record untouched if no chip matches
    pub fn complete_info(&mut self) -> bool {
        let key = self.key();

        match find_chip(key) {
            Some(chip) => {
                self.copy_info(chip);
                self.vendor_name = Some(vendor_name(self.vendor_id));
                debug!(
                    "Completed chip info: {} {}",
                    vendor_name(self.vendor_id),
                    chip.model_name
                );
                true
            }
            None => {
                debug!(
                    "No chip matches vendor 0x{:02X} type 0x{:02X} capacity 0x{:02X}",
                    key.vendor.id(),
                    key.type_id,
                    key.capacity_id
                );
                false
            }
        }
    }

    fn copy_info(&mut self, src: &ChipDescriptor) {
        self.vendor_id = src.vendor;
        self.model_name = Some(src.model_name);
        self.size = src.size;
        self.write_mode = src.write_mode;
        self.type_id = src.type_id;
        self.capacity_id = src.capacity_id;
        self.erase_gran = src.erase_gran;
        self.erase_gran_cmd = src.erase_gran_cmd;
    }

    pub fn is_complete(&self) -> bool {
        self.model_name.is_some()
    }

    pub fn page_size(&self) -> u32 {
        self.write_mode.page_size()
    }
}

impl fmt::Display for SpiMemChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model_name {
            Some(model) => write!(
                f,
                "{} {} ({})",
                vendor_name(self.vendor_id),
                model,
                format_size(self.size)
            ),
            None => write!(
                f,
                "{} unknown chip {:02X}{:02X}",
                vendor_name(self.vendor_id),
                self.type_id,
                self.capacity_id
            ),
        }
    }
}
