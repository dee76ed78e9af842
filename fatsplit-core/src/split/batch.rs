use std::path::Path;
use tracing::info;

use super::writer::{SplitReport, split_file};
use crate::error::Result;
use crate::options::SplitOptions;
use crate::policy::ConflictResolver;

/// Split every file in order, stopping at the first failure.
///
/// Parts already written for earlier files are left in place.
pub fn split_batch<P: AsRef<Path>>(
    files: &[P],
    opts: &SplitOptions,
    resolver: &mut dyn ConflictResolver,
) -> Result<Vec<SplitReport>> {
    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        reports.push(split_file(file.as_ref(), opts, resolver)?);
    }
    if opts.dry_run {
        info!("Dry run completed successfully.");
    } else {
        info!("All files processed successfully.");
    }
    Ok(reports)
}
