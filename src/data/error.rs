use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a recording directory. Fatal to the resolve
/// step: they surface to the user verbatim and are never retried silently.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no recording files (*.edf, *.bdf) found under '{}'", .dir.display())]
    NoRecordingFiles { dir: PathBuf },

    #[error(
        "could not identify a wearable recording in '{}': expected a single EDF file \
         or one left/right pair, found {found} candidate file(s)",
        .dir.display()
    )]
    AmbiguousTopology { dir: PathBuf, found: usize },

    /// Header could not be read or the file is not a valid recording.
    #[error(transparent)]
    Header(#[from] anyhow::Error),
}

/// Recoverable confirm-time error: the user corrects the selection and
/// resubmits. The in-progress selection is never discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{selected} channel(s) selected, but this recording type requires exactly {} \
     channel(s). Adjust the selection and confirm again.",
    count_word(.required)
)]
pub struct InvalidSelectionError {
    pub required: usize,
    pub selected: usize,
}

/// Spell out small counts so rejection messages read naturally.
fn count_word(n: &usize) -> String {
    match n {
        1 => "one".to_string(),
        2 => "two".to_string(),
        3 => "three".to_string(),
        other => other.to_string(),
    }
}
