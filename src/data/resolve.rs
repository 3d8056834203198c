use std::path::Path;

use serde::Serialize;

use super::classify::classify_all;
use super::error::ResolveError;
use super::header::read_channel_labels;
use super::model::{ChannelDescriptor, DataSource, TopologyMode};
use super::topology::{resolve_layout, RecordingLayout};

// ---------------------------------------------------------------------------
// Directory resolution: layout → header labels → classified channels
// ---------------------------------------------------------------------------

/// Everything a scoring session needs to open its selection surface.
#[derive(Debug, Clone)]
pub struct ResolvedRecording {
    pub layout: RecordingLayout,
    /// Classified channels, in header order. Empty for the dual-file layout,
    /// where each file carries a single channel and no header is consulted.
    pub descriptors: Vec<ChannelDescriptor>,
}

/// Wire-shaped resolve response: the raw channel labels plus the selection
/// mode the caller must enforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    pub channels: Vec<String>,
    pub selection_mode: TopologyMode,
}

impl ResolvedRecording {
    pub fn mode(&self) -> TopologyMode {
        self.layout.mode()
    }

    pub fn outcome(&self) -> ResolveOutcome {
        ResolveOutcome {
            channels: self
                .descriptors
                .iter()
                .map(|d| d.raw_name.clone())
                .collect(),
            selection_mode: self.mode(),
        }
    }
}

/// Resolve a recording directory for the declared data source.
///
/// Runs the read-only topology probe, reads the header labels of the file
/// that will be scored, and classifies them. Descriptors are derived exactly
/// once here; a fresh resolution is the only way to re-derive them.
pub fn resolve_recording(
    dir: &Path,
    source: DataSource,
) -> Result<ResolvedRecording, ResolveError> {
    let layout = resolve_layout(dir, source)?;

    let descriptors = match &layout {
        // One channel per file by construction; selection is moot and the
        // headers are left to the scoring pipeline.
        RecordingLayout::ZmaxDualFile { .. } => Vec::new(),
        RecordingLayout::Psg { file } | RecordingLayout::ZmaxSingleFile { file } => {
            let labels = read_channel_labels(file)?;
            classify_all(&labels)
        }
    };

    Ok(ResolvedRecording { layout, descriptors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::selection::{SelectionSession, SelectionState};
    use crate::data::testutil::write_minimal_edf;

    #[test]
    fn wearable_pair_resolves_to_dual_file_with_empty_selection() {
        let tmp = tempfile::tempdir().unwrap();
        write_minimal_edf(&tmp.path().join("rec_L.edf"), &["eegl"]);
        write_minimal_edf(&tmp.path().join("rec_R.edf"), &["eegr"]);

        let resolved = resolve_recording(tmp.path(), DataSource::Wearable).unwrap();
        assert_eq!(resolved.mode(), TopologyMode::ZmaxDualFile);
        assert!(resolved.descriptors.is_empty());

        let json = serde_json::to_string(&resolved.outcome()).unwrap();
        assert_eq!(json, r#"{"channels":[],"selection_mode":"zmax_two_files"}"#);

        // Default selection is empty and the validator accepts it as-is.
        let mut session = SelectionSession::new(resolved.mode(), resolved.descriptors);
        assert_eq!(session.checked_count(), 0);
        let result = session.confirm().expect("dual-file accepts zero channels");
        assert!(result.channels.is_empty());
    }

    #[test]
    fn wearable_single_file_resolves_preselects_and_validates() {
        let tmp = tempfile::tempdir().unwrap();
        write_minimal_edf(&tmp.path().join("rec.edf"), &["EEG C3", "EEG C4", "EOG LOC"]);

        let resolved = resolve_recording(tmp.path(), DataSource::Wearable).unwrap();
        assert_eq!(resolved.mode(), TopologyMode::ZmaxSingleFile);
        assert_eq!(
            resolved.outcome().channels,
            vec!["EEG C3", "EEG C4", "EOG LOC"]
        );
        assert_eq!(
            serde_json::to_value(resolved.outcome()).unwrap()["selection_mode"],
            "zmax_one_file"
        );

        let mut session = SelectionSession::new(resolved.mode(), resolved.descriptors);

        // Default preselection is the first two EEG channels.
        assert_eq!(session.checked_channels(), vec!["EEG C3", "EEG C4"]);

        // Checking only "EOG LOC" is rejected.
        session.toggle(0);
        session.toggle(1);
        session.toggle(2);
        assert_eq!(session.checked_channels(), vec!["EOG LOC"]);
        assert!(session.confirm().is_none());
        assert!(matches!(session.state(), SelectionState::Rejected { .. }));
    }

    #[test]
    fn psg_resolves_and_reports_header_order() {
        let tmp = tempfile::tempdir().unwrap();
        write_minimal_edf(
            &tmp.path().join("night.edf"),
            &["EOG LOC", "EEG C3-A1", "EMG Chin", "A2"],
        );

        let resolved = resolve_recording(tmp.path(), DataSource::Psg).unwrap();
        assert_eq!(resolved.mode(), TopologyMode::Psg);
        assert_eq!(
            resolved.outcome().channels,
            vec!["EOG LOC", "EEG C3-A1", "EMG Chin", "A2"]
        );
    }

    #[test]
    fn unreadable_header_propagates_as_resolve_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("rec.edf"), b"garbage").unwrap();

        let err = resolve_recording(tmp.path(), DataSource::Wearable).unwrap_err();
        assert!(matches!(err, ResolveError::Header(_)));
    }
}
