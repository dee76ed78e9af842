use clap::Parser;
use fatsplit_core::{DEFAULT_CHUNK_SIZE, parse_size};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Split NSP/NSZ/XCI files into FAT32-friendly chunks",
    long_about = None
)]
pub struct Cli {
    /// NSP/NSZ/XCI files or directories to process (prompted for when omitted)
    pub targets: Vec<PathBuf>,

    /// Directory for output parts (defaults to each file's directory)
    #[arg(short, long, env = "FATSPLIT_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Chunk size in bytes; K/M/G/T are decimal, KiB/MiB/GiB/TiB binary. Default: 4GB (~3.73 GiB)
    #[arg(
        long,
        env = "FATSPLIT_CHUNK_SIZE",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = parse_chunk_size
    )]
    pub chunk_size: u64,

    /// Recursively traverse provided directories
    #[arg(long)]
    pub recursive: bool,

    /// Overwrite parts if they already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Show what would happen without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print split reports as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "FATSPLIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

fn parse_chunk_size(s: &str) -> Result<u64, String> {
    parse_size(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["fatsplit", "game.nsp"]).unwrap();
        assert_eq!(cli.targets, [PathBuf::from("game.nsp")]);
        assert_eq!(cli.chunk_size, 4_000_000_000);
        assert!(!cli.overwrite && !cli.dry_run && !cli.recursive);
        assert!(cli.output.is_none());
    }

    #[test]
    fn chunk_size_suffixes() {
        let cli = Cli::try_parse_from(["fatsplit", "--chunk-size", "512MiB", "x.nsp"]).unwrap();
        assert_eq!(cli.chunk_size, 536_870_912);
        let cli = Cli::try_parse_from(["fatsplit", "--chunk-size", "2G"]).unwrap();
        assert_eq!(cli.chunk_size, 2_000_000_000);
        assert!(cli.targets.is_empty());
    }

    #[test]
    fn bad_chunk_size_is_rejected() {
        assert!(Cli::try_parse_from(["fatsplit", "--chunk-size", "abc", "x.nsp"]).is_err());
        assert!(Cli::try_parse_from(["fatsplit", "--chunk-size", "0", "x.nsp"]).is_err());
    }

    #[test]
    fn flags_and_output() {
        let cli = Cli::try_parse_from([
            "fatsplit",
            "-o",
            "/mnt/sd",
            "--recursive",
            "--overwrite",
            "--dry-run",
            "--json",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("/mnt/sd")));
        assert!(cli.recursive && cli.overwrite && cli.dry_run && cli.json);
        assert_eq!(cli.targets.len(), 2);
    }
}
