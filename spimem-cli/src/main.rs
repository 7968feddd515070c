use clap::{Parser, Subcommand, ValueEnum};
use spimem_lib::chip::{chips, format_size, ChipDescriptor, SpiMemChip};
use spimem_lib::jedec::JedecId;
use spimem_lib::random_name::random_name;
use spimem_lib::vendor::vendor_name;
use tracing_subscriber::EnvFilter;

/// SPI flash chip database tool
#[derive(Parser, Debug)]
#[clap(version = "0.1.0")]
#[clap(
    about,
    long_about = "SpiMem identifies 25-series SPI flash chips by their JEDEC ID and generates names for saved dumps"
)]
struct Args {
    /// Log level, RUST_LOG takes precedence
    #[clap(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a chip by JEDEC ID, e.g. EF4016
    Id {
        /// Manufacturer, memory type and capacity bytes in hex
        #[clap(value_parser)]
        id: String,
    },

    /// List known chips
    List {
        /// Only show chips of this vendor
        #[clap(short, long, value_parser)]
        vendor: Option<String>,
    },

    /// Generate random dump names
    Name {
        /// Name buffer size including terminator
        #[clap(short, long, value_parser, default_value_t = 32)]
        max_len: usize,

        /// Number of names to generate
        #[clap(short, long, value_parser, default_value_t = 1)]
        count: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_chip(chip: &SpiMemChip) {
    println!("Vendor:      {}", vendor_name(chip.vendor_id));
    println!("Model:       {}", chip.model_name.unwrap_or("Unknown"));
    println!("Size:        {}", format_size(chip.size));
    println!("Write mode:  {}", chip.write_mode);
    println!("Page size:   {} bytes", chip.page_size());
    println!(
        "Erase:       {} (0x{:02X})",
        format_size(chip.erase_gran),
        chip.erase_gran_cmd
    );
}

fn describe_miss(id: JedecId) -> String {
    format!(
        "Unknown chip: {} ({})",
        id,
        vendor_name(SpiMemChip::from_jedec_id(id).vendor_id)
    )
}

/// Parse [id] and complete the chip record, Err holds the message to print
fn lookup_chip(id: &str) -> Result<SpiMemChip, String> {
    let id: JedecId = id.parse().map_err(|err| format!("ERROR: {}", err))?;

    let mut chip = SpiMemChip::from_jedec_id(id);
    if !chip.complete_info() {
        return Err(describe_miss(id));
    }

    Ok(chip)
}

/// Case-insensitive match on the vendor display name
fn vendor_matches(chip: &ChipDescriptor, vendor: &str) -> bool {
    vendor_name(chip.vendor).eq_ignore_ascii_case(vendor)
}

fn list_line(chip: &ChipDescriptor) -> String {
    format!(
        "{:02X}{:02X}{:02X}  {:<10}  {:<12}  {}",
        chip.vendor.id(),
        chip.type_id,
        chip.capacity_id,
        vendor_name(chip.vendor),
        chip.model_name,
        format_size(chip.size)
    )
}

fn generate_names(max_len: usize, count: usize) -> Vec<String> {
    (0..count).map(|_| random_name(max_len)).collect()
}

fn main() {
    let args = Args::parse();

    init_logging(args.log_level);
    tracing::debug!("Arguments: {:?}", args);

    match args.command {
        Command::Id { id } => match lookup_chip(&id) {
            Ok(chip) => print_chip(&chip),
            Err(message) => {
                println!("{}", message);
                std::process::exit(1);
            }
        },
        Command::List { vendor } => {
            for chip in chips() {
                if let Some(vendor) = &vendor {
                    if !vendor_matches(chip, vendor) {
                        continue;
                    }
                }

                println!("{}", list_line(chip));
            }
        }
        Command::Name { max_len, count } => {
            for name in generate_names(max_len, count) {
                println!("{}", name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_command() {
        let args = Args::parse_from(["spimem", "id", "EF4016"]);
        assert_eq!(args.log_level, LogLevel::Warn);
        match args.command {
            Command::Id { id } => assert_eq!(id, "EF4016"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn lookup_known_chip() {
        let chip = lookup_chip("0xEF4016").unwrap();
        assert_eq!(chip.model_name, Some("W25Q32BV"));
        assert_eq!(chip.vendor_name, Some("Winbond"));
    }

    #[test]
    fn lookup_unknown_chip() {
        assert_eq!(
            lookup_chip("EF9999"),
            Err("Unknown chip: EF9999 (Winbond)".to_string())
        );
        assert_eq!(
            lookup_chip("424016"),
            Err("Unknown chip: 424016 (Unknown)".to_string())
        );
        assert_eq!(
            describe_miss(JedecId::new(0xC2, 0x00, 0x01)),
            "Unknown chip: C20001 (Micronix)"
        );
    }

    #[test]
    fn lookup_invalid_id() {
        assert!(Args::try_parse_from(["spimem", "id", "nope"]).is_ok());
        assert_eq!(
            lookup_chip("nope"),
            Err("ERROR: Invalid chip ID: nope".to_string())
        );
    }

    #[test]
    fn vendor_filter_ignores_case() {
        let winbond: Vec<&ChipDescriptor> = chips()
            .filter(|chip| vendor_matches(chip, "wInBoNd"))
            .collect();
        assert!(!winbond.is_empty());
        assert!(winbond.iter().any(|chip| chip.model_name == "W25Q32BV"));
        assert!(winbond.iter().all(|chip| vendor_name(chip.vendor) == "Winbond"));

        assert_eq!(chips().filter(|chip| vendor_matches(chip, "nor-mem")).count(), 0);
        assert_eq!(chips().filter(|chip| vendor_matches(chip, "Win")).count(), 0);
    }

    #[test]
    fn list_line_format() {
        let chip = chips().find(|chip| chip.model_name == "W25Q32BV").unwrap();
        assert_eq!(list_line(chip), "EF4016  Winbond     W25Q32BV      4 MiB");
    }

    #[test]
    fn name_count() {
        assert_eq!(generate_names(32, 0).len(), 0);
        let names = generate_names(32, 5);
        assert_eq!(names.len(), 5);
        assert!(names.iter().all(|name| name.contains('_')));

        let short = generate_names(4, 3);
        assert!(short.iter().all(|name| name.len() == 3));
    }

    #[test]
    fn parse_name_defaults() {
        let args = Args::parse_from(["spimem", "--log-level", "debug", "name"]);
        assert_eq!(args.log_level, LogLevel::Debug);
        match args.command {
            Command::Name { max_len, count } => {
                assert_eq!(max_len, 32);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_list_vendor() {
        let args = Args::parse_from(["spimem", "list", "-v", "winbond"]);
        match args.command {
            Command::List { vendor } => assert_eq!(vendor.as_deref(), Some("winbond")),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
