use crate::lister::{list_image_files, ImageFile, ListError};
use std::path::PathBuf;

pub const DEFAULT_FOLDER: &str = "images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyMode {
    /// Report what would happen without touching the filesystem.
    DryRun,
    #[default]
    Apply,
}

impl ApplyMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else {
            Self::Apply
        }
    }

    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub folder: PathBuf,
    pub mode: ApplyMode,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            mode: ApplyMode::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenameCandidate {
    /// 1-based position in the sorted listing.
    pub index: usize,
    pub file: ImageFile,
    pub target_name: String,
    pub target_path: PathBuf,
}

impl RenameCandidate {
    pub fn already_named(&self) -> bool {
        self.file.file_name == self.target_name
    }
}

#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub folder: PathBuf,
    pub mode: ApplyMode,
    pub candidates: Vec<RenameCandidate>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

pub fn generate_plan(options: &RenameOptions) -> Result<RenamePlan, ListError> {
    let files = list_image_files(&options.folder)?;

    let candidates = files
        .into_iter()
        .enumerate()
        .map(|(offset, file)| {
            let index = offset + 1;
            let target_name = target_name(index, &file.extension);
            let target_path = options.folder.join(&target_name);
            RenameCandidate {
                index,
                file,
                target_name,
                target_path,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        folder = %options.folder.display(),
        planned = candidates.len(),
        dry_run = options.mode.is_dry_run(),
        "generated rename plan"
    );

    Ok(RenamePlan {
        folder: options.folder.clone(),
        mode: options.mode,
        candidates,
    })
}

pub fn target_name(index: usize, extension: &str) -> String {
    format!("image {index}{extension}")
}
