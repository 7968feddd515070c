//! SpiMem is a SPI flash chip database library designed
//! for identifying 25-series serial flash memories by their JEDEC ID
//!
//! ## Features
//! - Decode the reply of the JEDEC Read ID (0x9F) command
//! - Complete a chip record with model, size, write mode and erase granularity
//! - Resolve vendor display names
//! - Generate human-readable random names for saved dumps

#[macro_use]
extern crate lazy_static;

pub mod chip;
pub mod error;
pub mod jedec;
pub mod random_name;
pub mod vendor;

use chip::SpiMemChip;
use error::SpiMemError;
use jedec::JedecId;

/// Identify a chip from a raw Read ID [reply]
///
/// Returns `Ok(None)` when the reply is well formed but the chip
/// is not in the database
pub fn identify(reply: &[u8]) -> Result<Option<SpiMemChip>, SpiMemError> {
    let id = JedecId::from_bytes(reply)?;
    let mut chip = SpiMemChip::from_jedec_id(id);

    if chip.complete_info() {
        Ok(Some(chip))
    } else {
        Ok(None)
    }
}
