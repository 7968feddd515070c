//! SpiMem random name file
//!
//! Default names for saved dumps are built as `Prefix_suffix`

use rand::Rng;
use tracing::trace;

pub const PREFIXES: [&str; 20] = [
    "ancient",
    "hollow",
    "strange",
    "disappeared",
    "unknown",
    "unthinkable",
    "unnamable",
    "nameless",
    "my",
    "concealed",
    "forgotten",
    "hidden",
    "mysterious",
    "obscure",
    "random",
    "remote",
    "uncharted",
    "undefined",
    "untravelled",
    "untold",
];

pub const SUFFIXES: [&str; 12] = [
    "door", "entrance", "doorway", "entry", "portal", "entree", "opening", "crack", "access",
    "corridor", "passage", "port",
];

/// Longest possible `prefix_suffix`
pub const MAX_NAME_LEN: usize = 20;

/// Write a random NUL-terminated name into [name] using the thread-local generator
///
/// See [set_random_name_with]
pub fn set_random_name(name: &mut [u8]) -> usize {
    set_random_name_with(&mut rand::thread_rng(), name)
}

/// Write a random NUL-terminated name into [name]
///
/// The name is truncated to `name.len() - 1` bytes and its first letter is
/// upper-cased. Returns the name length without terminator. An empty buffer
/// is left untouched.
pub fn set_random_name_with<R: Rng>(rng: &mut R, name: &mut [u8]) -> usize {
    let prefix = PREFIXES[rng.gen_range(0..PREFIXES.len())];
    let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];

    if name.is_empty() {
        return 0;
    }

    let full_name = format!("{}_{}", prefix, suffix);
    let name_len = full_name.len().min(name.len() - 1);

    name[..name_len].copy_from_slice(&full_name.as_bytes()[..name_len]);
    name[name_len] = 0;

    // Set first symbol to upper case
    if name_len > 0 {
        name[0].make_ascii_uppercase();
    }

    trace!(
        "Generated name: {}",
        String::from_utf8_lossy(&name[..name_len])
    );
    name_len
}

/// Random name as if written into a buffer of [max_name_size] bytes
pub fn random_name(max_name_size: usize) -> String {
    random_name_with(&mut rand::thread_rng(), max_name_size)
}

pub fn random_name_with<R: Rng>(rng: &mut R, max_name_size: usize) -> String {
    // Longer buffers give the same name
    let mut buffer = vec![0u8; max_name_size.min(MAX_NAME_LEN + 1)];
    let name_len = set_random_name_with(rng, &mut buffer);

    // Words are ASCII
    buffer[..name_len].iter().map(|b| *b as char).collect()
}
