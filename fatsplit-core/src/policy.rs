use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of asking a [`ConflictResolver`] about existing parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Truncate and rewrite the existing parts.
    Overwrite,
    /// Keep them; the split fails with `SplitError::Conflict`.
    Deny,
    /// Someone declined interactively; the split fails with `SplitError::Cancelled`.
    Cancel,
}

/// Decides whether parts that already exist on disk may be replaced.
///
/// Consulted once per source file, before any byte is written, with every
/// conflicting part path.
pub trait ConflictResolver {
    fn resolve(&mut self, existing: &[PathBuf]) -> Decision;
}

/// Non-interactive resolvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverwritePolicy {
    /// Never replace an existing part.
    #[default]
    Deny,
    /// Always replace existing parts.
    Allow,
}

impl ConflictResolver for OverwritePolicy {
    fn resolve(&mut self, _existing: &[PathBuf]) -> Decision {
        match self {
            OverwritePolicy::Deny => Decision::Deny,
            OverwritePolicy::Allow => Decision::Overwrite,
        }
    }
}

impl<F> ConflictResolver for F
where
    F: FnMut(&[PathBuf]) -> Decision,
{
    fn resolve(&mut self, existing: &[PathBuf]) -> Decision {
        self(existing)
    }
}
