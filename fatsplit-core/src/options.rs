use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SplitError};

/// 4 GB (decimal), keeps parts well under the FAT32 4 GiB - 1 cap.
pub const DEFAULT_CHUNK_SIZE: u64 = 4_000_000_000;

/// Copy buffer; internal, never changes the produced bytes.
pub const READ_BUFFER: usize = 8 * 1024 * 1024;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Maximum size of every part in bytes.
    pub chunk_size: u64,
    /// Directory for the parts. `None` writes next to each source file.
    pub output_dir: Option<PathBuf>,
    /// Replace existing parts without consulting the conflict resolver.
    pub overwrite: bool,
    /// Plan and report only; nothing is created on disk.
    pub dry_run: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_dir: None,
            overwrite: false,
            dry_run: false,
        }
    }
}

impl SplitOptions {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SplitError::InvalidSize {
                input: self.chunk_size.to_string(),
                reason: "size must be positive",
            });
        }
        Ok(())
    }
}
