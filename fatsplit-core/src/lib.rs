#![forbid(unsafe_code)]

pub mod error;
pub mod options;
pub mod policy;
pub mod targets;

pub mod util {
    pub mod size;
}

pub mod plan {
    pub mod naming;
    pub mod planner;
}

pub mod split {
    pub mod batch;
    pub mod writer;
}

// Re-exports: stable API surface
pub use error::{Result, SplitError};
pub use options::{DEFAULT_CHUNK_SIZE, READ_BUFFER, SplitOptions};
pub use plan::naming::part_name;
pub use plan::planner::{MAX_PARTS, PlannedPart, SplitPlan, plan_split};
pub use policy::{ConflictResolver, Decision, OverwritePolicy};
pub use split::batch::split_batch;
pub use split::writer::{PartReport, SplitReport, copy_exact, split_file};
pub use targets::{VALID_EXTENSIONS, collect_targets};
pub use util::size::{human_readable_size, parse_size};
