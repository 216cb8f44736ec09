mod apply;
mod lister;
mod planner;
pub mod report;
mod status;

pub use apply::{
    apply_plan, apply_plan_with, ApplyResult, RenameEntry, RenameOutcome, RenameSummary,
};
pub use lister::{compare_names, list_image_files, ImageFile, ListError, IMAGE_EXTENSIONS};
pub use planner::{
    generate_plan, target_name, ApplyMode, RenameCandidate, RenameOptions, RenamePlan,
    DEFAULT_FOLDER,
};
pub use status::RunStatus;
