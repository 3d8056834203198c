use std::path::{Path, PathBuf};

use crate::color::SignalTypeColors;
use crate::data::model::{DataSource, SelectionResult};
use crate::data::resolve::{resolve_recording, ResolvedRecording};
use crate::data::selection::SelectionSession;
use crate::data::topology::RecordingLayout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One resolved recording plus its in-progress channel selection. Created
/// whole on resolution; the layout and descriptors never change afterwards,
/// only the selection does.
pub struct ScoringSession {
    pub directory: PathBuf,
    pub layout: RecordingLayout,
    pub selection: SelectionSession,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Declared data source for the next resolution.
    pub data_source: DataSource,

    /// Active session (None until a directory resolves successfully).
    pub session: Option<ScoringSession>,

    /// The confirmed selection, once accepted. Terminal for the session.
    pub accepted: Option<SelectionResult>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Colours for the channel list and legend.
    pub type_colors: SignalTypeColors,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            data_source: DataSource::default(),
            session: None,
            accepted: None,
            status_message: None,
            type_colors: SignalTypeColors::default(),
        }
    }
}

impl AppState {
    /// Resolve `dir` with the currently declared data source and open a
    /// fresh selection session. Replaces any previous session; resolution
    /// errors surface verbatim in the status line.
    pub fn resolve_directory(&mut self, dir: &Path) {
        match resolve_recording(dir, self.data_source) {
            Ok(resolved) => {
                log::info!(
                    "Resolved '{}' as {} with {} channel(s)",
                    dir.display(),
                    resolved.mode(),
                    resolved.descriptors.len()
                );
                self.set_session(dir.to_path_buf(), resolved);
            }
            Err(e) => {
                log::error!("Failed to resolve '{}': {e:#}", dir.display());
                self.session = None;
                self.accepted = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a resolved recording and open its selection surface with the
    /// topology's default preselection.
    pub fn set_session(&mut self, directory: PathBuf, resolved: ResolvedRecording) {
        let selection = SelectionSession::new(resolved.mode(), resolved.descriptors);
        self.session = Some(ScoringSession {
            directory,
            layout: resolved.layout,
            selection,
        });
        self.accepted = None;
        self.status_message = None;
    }

    /// Confirm the active selection. On acceptance the result is logged as
    /// the artifact handed to the scoring pipeline; on rejection the session
    /// stays open with the user's checks intact.
    pub fn confirm_selection(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        if let Some(result) = session.selection.confirm() {
            match serde_json::to_string(&result) {
                Ok(json) => log::info!("Channel selection confirmed: {json}"),
                Err(e) => log::error!("Could not serialize selection result: {e}"),
            }
            self.accepted = Some(result);
        }
    }
}
