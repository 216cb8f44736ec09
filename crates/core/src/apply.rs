use crate::planner::{ApplyMode, RenameCandidate, RenamePlan};
use std::convert::Infallible;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    AlreadyNamed,
    /// Another entry already holds the target name.
    Conflict,
    WouldRename,
    Renamed,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub original_name: String,
    pub target_name: String,
    pub outcome: RenameOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenameSummary {
    pub already_named: usize,
    pub conflicts: usize,
    pub would_rename: usize,
    pub renamed: usize,
    pub failed: usize,
}

impl RenameSummary {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::AlreadyNamed => self.already_named += 1,
            RenameOutcome::Conflict => self.conflicts += 1,
            RenameOutcome::WouldRename => self.would_rename += 1,
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplyResult {
    pub mode: ApplyMode,
    pub entries: Vec<RenameEntry>,
    /// `(old name, new name)` for every rename that went through.
    pub renamed: Vec<(String, String)>,
    pub summary: RenameSummary,
}

pub fn apply_plan(plan: &RenamePlan) -> ApplyResult {
    let result: Result<ApplyResult, Infallible> = apply_plan_with(plan, |_| Ok(()));
    match result {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Processes candidates in plan order, handing each entry to `on_entry`
/// as soon as it is decided. An error from `on_entry` stops the batch;
/// renames already performed stay in place.
pub fn apply_plan_with<E, F>(plan: &RenamePlan, mut on_entry: F) -> Result<ApplyResult, E>
where
    F: FnMut(&RenameEntry) -> Result<(), E>,
{
    let mut result = ApplyResult {
        mode: plan.mode,
        entries: Vec::with_capacity(plan.candidates.len()),
        ..ApplyResult::default()
    };

    for candidate in &plan.candidates {
        let outcome = process_candidate(candidate, plan.mode);
        result.summary.record(&outcome);
        if outcome == RenameOutcome::Renamed {
            result.renamed.push((
                candidate.file.file_name.clone(),
                candidate.target_name.clone(),
            ));
        }

        let entry = RenameEntry {
            original_name: candidate.file.file_name.clone(),
            target_name: candidate.target_name.clone(),
            outcome,
        };
        on_entry(&entry)?;
        result.entries.push(entry);
    }

    Ok(result)
}

fn process_candidate(candidate: &RenameCandidate, mode: ApplyMode) -> RenameOutcome {
    if candidate.already_named() {
        return RenameOutcome::AlreadyNamed;
    }

    if target_taken(&candidate.target_path, &candidate.file.path) {
        tracing::warn!(
            source = %candidate.file.path.display(),
            target = %candidate.target_path.display(),
            "target name already taken, skipping"
        );
        return RenameOutcome::Conflict;
    }

    if mode.is_dry_run() {
        return RenameOutcome::WouldRename;
    }

    match fs::rename(&candidate.file.path, &candidate.target_path) {
        Ok(()) => {
            tracing::info!(
                from = %candidate.file.path.display(),
                to = %candidate.target_path.display(),
                "renamed"
            );
            RenameOutcome::Renamed
        }
        Err(err) => {
            tracing::error!(
                from = %candidate.file.path.display(),
                to = %candidate.target_path.display(),
                error = %err,
                "rename failed"
            );
            RenameOutcome::Failed {
                error: err.to_string(),
            }
        }
    }
}

/// True when an entry other than `source` already lives at `target`.
/// Symlinks are never followed: a link at either path is its own entry.
fn target_taken(target: &Path, source: &Path) -> bool {
    let Ok(target_meta) = fs::symlink_metadata(target) else {
        return false;
    };
    if target == source {
        return false;
    }
    match fs::symlink_metadata(source) {
        Ok(source_meta) => !same_entry(&target_meta, &source_meta),
        Err(_) => true,
    }
}

// A case-only rename on a case-insensitive filesystem finds the source
// itself at the target path.
#[cfg(unix)]
fn same_entry(a: &fs::Metadata, b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_entry(_a: &fs::Metadata, _b: &fs::Metadata) -> bool {
    false
}
