//! SpiMem JEDEC ID file
//!
//! Read ID (0x9F) reply is manufacturer, memory type and capacity bytes

use super::error::SpiMemError;
use std::fmt;
use std::str::FromStr;

/// JEDEC Read ID command opcode
pub const READ_ID_CMD: u8 = 0x9F;

/// Identification triple returned by the chip
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct JedecId {
    pub manufacturer: u8,
    pub memory_type: u8,
    pub capacity: u8,
}

impl JedecId {
    pub fn new(manufacturer: u8, memory_type: u8, capacity: u8) -> Self {
        JedecId {
            manufacturer,
            memory_type,
            capacity,
        }
    }

    /// Decode raw Read ID [reply], trailing extended device bytes are ignored
    pub fn from_bytes(reply: &[u8]) -> Result<Self, SpiMemError> {
        if reply.len() < 3 {
            return Err(SpiMemError::ShortIdReply(reply.len()));
        }

        let id = &reply[..3];

        // Floating or grounded MISO
        if id.iter().all(|b| *b == 0x00) || id.iter().all(|b| *b == 0xFF) {
            return Err(SpiMemError::NoChipDetected);
        }

        Ok(JedecId::new(id[0], id[1], id[2]))
    }
}

impl FromStr for JedecId {
    type Err = SpiMemError;

    /// Accepts `EF4016`, `0xef4016`, `EF:40:16` and `EF 40 16`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SpiMemError::InvalidId(s.to_string());

        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let digits: String = digits.chars().filter(|c| *c != ':' && *c != ' ').collect();

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(&digits, 16).map_err(|_| invalid())?;

        Ok(JedecId::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

impl fmt::Display for JedecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}{:02X}{:02X}",
            self.manufacturer, self.memory_type, self.capacity
        )
    }
}
