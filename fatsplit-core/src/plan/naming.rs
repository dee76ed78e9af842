use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Highest part count whose indices all fit in two digits (`.00` ..= `.99`).
pub const TWO_DIGIT_PARTS: u64 = 100;

/// Insert a zero-padded index (at least two digits) before the final extension of `base`.
///
/// `out/game.nsp` + 3 → `out/game.03.nsp`; a name without an extension gets
/// the index appended (`out/blob` → `out/blob.03`). Index 100 and up simply
/// grow a third digit (`out/game.100.nsp`).
pub fn part_name(base: &Path, index: u64) -> PathBuf {
    let suffix = format!(".{index:02}");
    let file_name = match (base.file_stem(), base.extension()) {
        (Some(stem), Some(ext)) => {
            let mut name = OsString::from(stem);
            name.push(&suffix);
            name.push(".");
            name.push(ext);
            name
        }
        _ => {
            let mut name = base.file_name().map(OsString::from).unwrap_or_default();
            name.push(&suffix);
            name
        }
    };
    base.with_file_name(file_name)
}
