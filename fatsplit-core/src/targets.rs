use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, SplitError};

/// Archive extensions accepted as split sources (compared case-insensitively).
pub const VALID_EXTENSIONS: [&str; 3] = ["nsp", "nsz", "xci"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| VALID_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
}

/// Expand files and directories into the list of sources to split.
///
/// Files must carry a supported extension. Directories contribute their
/// supported files sorted by name, a directory's own files before anything
/// in its subdirectories. Subdirectories are only entered when `recursive`
/// is set; one that cannot be read is skipped with a warning. Returned paths
/// are absolute.
pub fn collect_targets<P: AsRef<Path>>(paths: &[P], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for raw in paths {
        let raw = raw.as_ref();
        let path = std::path::absolute(raw)?;
        let meta = fs::metadata(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SplitError::NotFound(raw.to_path_buf()),
            _ => SplitError::Io(e),
        })?;

        if meta.is_dir() {
            let mut walker = WalkDir::new(&path).min_depth(1).sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });
            if !recursive {
                walker = walker.max_depth(1);
            }
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) if e.depth() > 0 => {
                        warn!("skipping unreadable entry: {e}");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                if entry.path().is_file() && is_supported(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if is_supported(&path) {
            files.push(path);
        } else {
            return Err(SplitError::Unsupported(raw.to_path_buf()));
        }
    }
    debug!(count = files.len(), "collected split targets");
    Ok(files)
}
