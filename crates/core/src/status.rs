use crate::apply::ApplyResult;
use crate::lister::ListError;

/// How a run ended. Each variant has its own process exit code so scripts
/// can tell the cases apart without parsing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    MissingFolder,
    NotADirectory,
    UnreadableFolder,
    NoImages,
    ConflictsSkipped,
    RenameFailures,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        // 1 and 2 are left to the binary (report I/O and usage errors).
        match self {
            Self::Completed => 0,
            Self::MissingFolder => 3,
            Self::NotADirectory => 4,
            Self::UnreadableFolder => 5,
            Self::NoImages => 6,
            Self::ConflictsSkipped => 7,
            Self::RenameFailures => 8,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Completed
    }

    /// Rename failures take precedence over conflicts.
    pub fn from_result(result: &ApplyResult) -> Self {
        if result.summary.failed > 0 {
            Self::RenameFailures
        } else if result.summary.conflicts > 0 {
            Self::ConflictsSkipped
        } else {
            Self::Completed
        }
    }
}

impl From<&ListError> for RunStatus {
    fn from(err: &ListError) -> Self {
        match err {
            ListError::NotFound(_) => Self::MissingFolder,
            ListError::NotADirectory(_) => Self::NotADirectory,
            ListError::Unreadable { .. } => Self::UnreadableFolder,
        }
    }
}
