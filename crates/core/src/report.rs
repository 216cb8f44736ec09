use crate::apply::{ApplyResult, RenameEntry, RenameOutcome};
use crate::lister::ListError;
use crate::planner::{ApplyMode, RenamePlan};
use std::fmt;
use std::path::Path;

const RULE_WIDTH: usize = 60;

pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn header_lines(mode: ApplyMode) -> Vec<String> {
    let mut lines = vec![heavy_rule(), "Image Renamer".to_string(), heavy_rule()];
    if mode.is_dry_run() {
        lines.push("Mode: DRY RUN (no files will be modified)".to_string());
    }
    lines.push(String::new());
    lines
}

pub fn plan_lines(plan: &RenamePlan) -> Vec<String> {
    vec![
        format!(
            "Found {} image file(s) in '{}'",
            plan.len(),
            plan.folder.display()
        ),
        light_rule(),
    ]
}

pub fn no_images_line(folder: &Path) -> String {
    format!("No image files found in '{}'", folder.display())
}

pub fn list_error_line(err: &ListError) -> String {
    match err {
        ListError::NotFound(path) => format!("Error: Folder '{}' does not exist!", path.display()),
        ListError::NotADirectory(path) => format!("Error: '{}' is not a directory!", path.display()),
        ListError::Unreadable { path, source } => {
            format!("Error: could not read folder '{}': {source}", path.display())
        }
    }
}

impl fmt::Display for RenameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.original_name;
        let target = &self.target_name;
        match &self.outcome {
            RenameOutcome::AlreadyNamed => write!(f, "✓ Already named correctly: {name}"),
            RenameOutcome::Conflict => {
                write!(f, "⚠ Warning: '{target}' already exists. Skipping '{name}'")
            }
            RenameOutcome::WouldRename => {
                write!(f, "[DRY RUN] Would rename: '{name}' → '{target}'")
            }
            RenameOutcome::Renamed => write!(f, "✓ Renamed: '{name}' → '{target}'"),
            RenameOutcome::Failed { error } => write!(f, "✗ Error renaming '{name}': {error}"),
        }
    }
}

pub fn summary_lines(result: &ApplyResult) -> Vec<String> {
    let summary = &result.summary;
    let mut lines = vec![light_rule()];
    if result.mode.is_dry_run() {
        lines.push(format!(
            "[DRY RUN] Would rename {} file(s)",
            summary.would_rename
        ));
    } else {
        lines.push(format!("Successfully renamed {} file(s)", summary.renamed));
    }
    if summary.conflicts > 0 {
        lines.push(format!(
            "Skipped {} file(s) because the target name was taken",
            summary.conflicts
        ));
    }
    if summary.failed > 0 {
        lines.push(format!("Failed to rename {} file(s)", summary.failed));
    }
    lines
}
