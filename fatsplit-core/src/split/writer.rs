use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Result, SplitError};
use crate::options::{READ_BUFFER, SplitOptions};
use crate::plan::planner::{SplitPlan, plan_split};
use crate::policy::{ConflictResolver, Decision};
use crate::util::size::human_readable_size;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartReport {
    pub path: PathBuf,
    pub size: u64,
}

/// Result of splitting one source. `parts` is empty when no split was needed.
#[derive(Clone, Debug, Serialize)]
pub struct SplitReport {
    pub source: PathBuf,
    pub file_size: u64,
    pub chunk_size: u64,
    pub dry_run: bool,
    pub parts: Vec<PartReport>,
}

impl SplitReport {
    fn new(plan: &SplitPlan, dry_run: bool, parts: Vec<PartReport>) -> Self {
        Self {
            source: plan.source.clone(),
            file_size: plan.file_size,
            chunk_size: plan.chunk_size,
            dry_run,
            parts,
        }
    }

    pub fn part_paths(&self) -> Vec<PathBuf> {
        self.parts.iter().map(|p| p.path.clone()).collect()
    }
}

fn display_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy()
}

/// Split `source` into parts of at most `opts.chunk_size` bytes.
///
/// Existing parts are detected before anything is written and handed to
/// `resolver` unless `opts.overwrite` is set. A dry run only plans and
/// reports the intended parts.
pub fn split_file(
    source: &Path,
    opts: &SplitOptions,
    resolver: &mut dyn ConflictResolver,
) -> Result<SplitReport> {
    let plan = plan_split(source, opts)?;
    let name = display_name(&plan.source);

    if !plan.needs_split() {
        info!("skip: {name} is already <= chunk size.");
        return Ok(SplitReport::new(&plan, opts.dry_run, Vec::new()));
    }

    info!(
        "Splitting {name} ({}) into {} parts of {}.",
        human_readable_size(plan.file_size),
        plan.parts.len(),
        human_readable_size(plan.chunk_size)
    );

    if opts.dry_run {
        for path in plan.existing() {
            warn!("part already exists: {}", path.display());
        }
        let parts = plan
            .parts
            .iter()
            .map(|p| PartReport {
                path: p.path.clone(),
                size: p.len,
            })
            .collect();
        info!("Dry run: no files were written.");
        return Ok(SplitReport::new(&plan, true, parts));
    }

    fs::create_dir_all(&plan.output_dir)?;
    let overwrite = resolve_conflicts(&plan, opts, resolver)?;
    let parts = write_parts(&plan, overwrite)?;

    info!("Finished splitting {name}.");
    Ok(SplitReport::new(&plan, false, parts))
}

/// Returns whether existing part files may be truncated.
fn resolve_conflicts(
    plan: &SplitPlan,
    opts: &SplitOptions,
    resolver: &mut dyn ConflictResolver,
) -> Result<bool> {
    if opts.overwrite {
        return Ok(true);
    }
    let existing = plan.existing();
    let Some(first) = existing.first() else {
        return Ok(false);
    };
    match resolver.resolve(&existing) {
        Decision::Overwrite => Ok(true),
        Decision::Deny => Err(SplitError::Conflict {
            path: first.clone(),
        }),
        Decision::Cancel => Err(SplitError::Cancelled),
    }
}

fn open_part(path: &Path, overwrite: bool) -> Result<File> {
    let mut oo = OpenOptions::new();
    oo.write(true);
    if overwrite {
        oo.create(true).truncate(true);
    } else {
        oo.create_new(true);
    }
    oo.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => SplitError::Conflict {
            path: path.to_path_buf(),
        },
        _ => SplitError::Io(e),
    })
}

fn write_parts(plan: &SplitPlan, overwrite: bool) -> Result<Vec<PartReport>> {
    let mut src = File::open(&plan.source)?;
    let buf_len = plan.chunk_size.min(READ_BUFFER as u64) as usize;
    let mut buf = vec![0u8; buf_len];
    let mut written = Vec::with_capacity(plan.parts.len());

    for part in &plan.parts {
        let mut out = open_part(&part.path, overwrite)?;
        let got = copy_exact(&mut src, &mut out, part.len, &mut buf)?;
        if got != part.len {
            return Err(SplitError::UnexpectedEof {
                path: part.path.clone(),
                expected: part.len,
                got,
            });
        }
        out.flush()?;
        info!(
            "done: {} -> {}",
            display_name(&part.path),
            human_readable_size(got)
        );
        written.push(PartReport {
            path: part.path.clone(),
            size: got,
        });
    }
    Ok(written)
}

/// Copy up to `len` bytes from `src` to `dst` through `buf`.
///
/// Stops early only when `src` reports end of file; the returned count is
/// then smaller than `len` and the caller decides what that means.
pub fn copy_exact<R, W>(src: &mut R, dst: &mut W, len: u64, buf: &mut [u8]) -> std::io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut copied = 0u64;
    while copied < len {
        let want = (len - copied).min(buf.len() as u64) as usize;
        let n = match src.read(&mut buf[..want]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        dst.write_all(&buf[..n])?;
        copied += n as u64;
        debug!(copied, len, "read {n} bytes");
    }
    Ok(copied)
}
