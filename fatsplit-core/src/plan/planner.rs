use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::naming::{TWO_DIGIT_PARTS, part_name};
use crate::error::{Result, SplitError};
use crate::options::SplitOptions;

/// Upper bound on parts per source; every part is planned in memory up front.
pub const MAX_PARTS: u64 = 100_000;

/// One output file: bytes `[start, start + len)` of the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlannedPart {
    pub index: u64,
    pub path: PathBuf,
    pub start: u64,
    pub len: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SplitPlan {
    pub source: PathBuf,
    /// Directory receiving the parts.
    pub output_dir: PathBuf,
    pub file_size: u64,
    pub chunk_size: u64,
    /// Empty when the source already fits in one chunk.
    pub parts: Vec<PlannedPart>,
}

impl SplitPlan {
    pub fn needs_split(&self) -> bool {
        !self.parts.is_empty()
    }

    pub fn part_paths(&self) -> Vec<PathBuf> {
        self.parts.iter().map(|p| p.path.clone()).collect()
    }

    /// Intended part paths that are already present on disk.
    pub fn existing(&self) -> Vec<PathBuf> {
        self.parts
            .iter()
            .filter(|p| p.path.symlink_metadata().is_ok())
            .map(|p| p.path.clone())
            .collect()
    }
}

/// Compute the parts for `source` without touching the filesystem beyond `stat`.
pub fn plan_split(source: &Path, opts: &SplitOptions) -> Result<SplitPlan> {
    opts.validate()?;

    let meta = fs::metadata(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SplitError::NotFound(source.to_path_buf()),
        _ => SplitError::Io(e),
    })?;
    if !meta.is_file() {
        return Err(SplitError::NotAFile(source.to_path_buf()));
    }
    let file_name = source
        .file_name()
        .ok_or_else(|| SplitError::NotAFile(source.to_path_buf()))?;

    let base = match &opts.output_dir {
        Some(dir) => dir.join(file_name),
        None => source.to_path_buf(),
    };
    let output_dir = base
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let file_size = meta.len();
    let chunk_size = opts.chunk_size;
    let mut parts = Vec::new();

    if file_size > chunk_size {
        let total = file_size.div_ceil(chunk_size);
        if total > MAX_PARTS {
            warn!(
                parts = total,
                max = MAX_PARTS,
                "{} would need {total} parts; raise the chunk size",
                source.display()
            );
            return Err(SplitError::TooManyParts {
                path: source.to_path_buf(),
                parts: total,
                max: MAX_PARTS,
            });
        }
        if total > TWO_DIGIT_PARTS {
            warn!(
                parts = total,
                "{} needs {total} parts; indices past 99 get three or more digits, loaders expecting two may not find them",
                source.display()
            );
        }
        parts.reserve(total as usize);
        for index in 0..total {
            let start = index * chunk_size;
            parts.push(PlannedPart {
                index,
                path: part_name(&base, index),
                start,
                len: chunk_size.min(file_size - start),
            });
        }
    }

    Ok(SplitPlan {
        source: source.to_path_buf(),
        output_dir,
        file_size,
        chunk_size,
        parts,
    })
}
