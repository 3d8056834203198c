use super::error::InvalidSelectionError;
use super::model::{ChannelDescriptor, SelectionResult, SignalType, TopologyMode};

// ---------------------------------------------------------------------------
// Constraint table
// ---------------------------------------------------------------------------

/// How many channels a selection must contain to be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredCount {
    /// Any count, including zero.
    Any,
    Exactly(usize),
}

/// Static cardinality rule per topology. Exhaustive, so adding a mode is a
/// compile-time-checked change.
///
/// Dual-file wearables accept any count: one EDF carries one channel by
/// construction, the default selection is empty and confirm never blocks.
pub const fn constraint_for(mode: TopologyMode) -> RequiredCount {
    match mode {
        TopologyMode::Psg => RequiredCount::Any,
        TopologyMode::ZmaxSingleFile => RequiredCount::Exactly(2),
        TopologyMode::ZmaxDualFile => RequiredCount::Any,
    }
}

// ---------------------------------------------------------------------------
// Default preselection
// ---------------------------------------------------------------------------

/// Propose a default checked-set for the given topology, one flag per
/// descriptor, order preserved.
///
/// * PSG: every EEG and EOG channel.
/// * Single-file wearable: the first two EEG channels; fewer than two stay a
///   partial set for the user to complete.
/// * Dual-file wearable: nothing (selection is moot).
pub fn default_selection(mode: TopologyMode, descriptors: &[ChannelDescriptor]) -> Vec<bool> {
    match mode {
        TopologyMode::Psg => descriptors
            .iter()
            .map(|d| matches!(d.signal_type, SignalType::Eeg | SignalType::Eog))
            .collect(),
        TopologyMode::ZmaxSingleFile => {
            let mut remaining = 2;
            descriptors
                .iter()
                .map(|d| {
                    if remaining > 0 && d.signal_type == SignalType::Eeg {
                        remaining -= 1;
                        true
                    } else {
                        false
                    }
                })
                .collect()
        }
        TopologyMode::ZmaxDualFile => vec![false; descriptors.len()],
    }
}

// ---------------------------------------------------------------------------
// Selection session – the validator state machine
// ---------------------------------------------------------------------------

/// State of the selection surface. `Checking` only exists transiently
/// inside [`SelectionSession::confirm`]; between calls the session rests in
/// `Open`, `Rejected` or `Accepted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Open,
    Checking,
    Accepted,
    Rejected { message: String },
}

/// One scoring session's in-progress channel selection, owned by the active
/// selection surface. Descriptors are derived once at resolution time and
/// stay immutable; only the checked flags change.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    mode: TopologyMode,
    descriptors: Vec<ChannelDescriptor>,
    checked: Vec<bool>,
    state: SelectionState,
}

impl SelectionSession {
    /// Open a session with the topology's default preselection.
    pub fn new(mode: TopologyMode, descriptors: Vec<ChannelDescriptor>) -> Self {
        let checked = default_selection(mode, &descriptors);
        SelectionSession {
            mode,
            descriptors,
            checked,
            state: SelectionState::Open,
        }
    }

    pub fn mode(&self) -> TopologyMode {
        self.mode
    }

    pub fn descriptors(&self) -> &[ChannelDescriptor] {
        &self.descriptors
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|&&c| c).count()
    }

    /// Raw names of the currently checked channels, in list order.
    pub fn checked_channels(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .zip(&self.checked)
            .filter(|(_, &checked)| checked)
            .map(|(d, _)| d.raw_name.clone())
            .collect()
    }

    /// Toggle one channel. Editing after a rejection re-opens the session;
    /// the rest of the checked set is kept as-is.
    pub fn toggle(&mut self, index: usize) {
        if self.state == SelectionState::Accepted {
            return;
        }
        if let Some(flag) = self.checked.get_mut(index) {
            *flag = !*flag;
            self.state = SelectionState::Open;
        }
    }

    /// Check or uncheck every channel (PSG convenience).
    pub fn set_all(&mut self, checked: bool) {
        if self.state == SelectionState::Accepted {
            return;
        }
        self.checked.fill(checked);
        self.state = SelectionState::Open;
    }

    /// Confirm the current selection: `Open` → `Checking` → `Accepted` or
    /// `Rejected`. Acceptance is terminal and yields the hand-off artifact;
    /// rejection keeps the checked set and lets the user retry.
    pub fn confirm(&mut self) -> Option<SelectionResult> {
        if self.state == SelectionState::Accepted {
            return None;
        }
        self.state = SelectionState::Checking;

        match self.validate_count() {
            Ok(()) => {
                self.state = SelectionState::Accepted;
                Some(SelectionResult {
                    channels: match self.mode {
                        // One channel per file by construction; nothing chosen.
                        TopologyMode::ZmaxDualFile => Vec::new(),
                        _ => self.checked_channels(),
                    },
                    mode: self.mode,
                })
            }
            Err(err) => {
                self.state = SelectionState::Rejected {
                    message: err.to_string(),
                };
                None
            }
        }
    }

    fn validate_count(&self) -> Result<(), InvalidSelectionError> {
        match constraint_for(self.mode) {
            RequiredCount::Any => Ok(()),
            RequiredCount::Exactly(required) => {
                let selected = self.checked_count();
                if selected == required {
                    Ok(())
                } else {
                    Err(InvalidSelectionError { required, selected })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::classify_all;

    fn descriptors(labels: &[&str]) -> Vec<ChannelDescriptor> {
        let owned: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        classify_all(&owned)
    }

    #[test]
    fn constraint_table() {
        assert_eq!(constraint_for(TopologyMode::Psg), RequiredCount::Any);
        assert_eq!(
            constraint_for(TopologyMode::ZmaxSingleFile),
            RequiredCount::Exactly(2)
        );
        assert_eq!(constraint_for(TopologyMode::ZmaxDualFile), RequiredCount::Any);
    }

    #[test]
    fn psg_preselects_eeg_and_eog_in_order() {
        let descs = descriptors(&["EEG C3-A1", "EMG Chin", "EOG LOC", "A2", "EEG C4"]);
        let checked = default_selection(TopologyMode::Psg, &descs);
        assert_eq!(checked, vec![true, false, true, false, true]);
    }

    #[test]
    fn single_file_preselects_first_two_eeg() {
        let descs = descriptors(&["EOG LOC", "EEG C3", "EEG C4", "EEG O1"]);
        let checked = default_selection(TopologyMode::ZmaxSingleFile, &descs);
        assert_eq!(checked, vec![false, true, true, false]);
    }

    #[test]
    fn single_file_partial_default_is_not_padded() {
        let descs = descriptors(&["EOG LOC", "EEG C3"]);
        let checked = default_selection(TopologyMode::ZmaxSingleFile, &descs);
        assert_eq!(checked, vec![false, true]);
    }

    #[test]
    fn dual_file_preselects_nothing() {
        let descs = descriptors(&["eegl", "eegr"]);
        let checked = default_selection(TopologyMode::ZmaxDualFile, &descs);
        assert_eq!(checked, vec![false, false]);
    }

    #[test]
    fn psg_accepts_any_count_including_zero() {
        let mut session = SelectionSession::new(TopologyMode::Psg, descriptors(&["EEG C3"]));
        session.set_all(false);
        let result = session.confirm().expect("zero channels accepted for PSG");
        assert!(result.channels.is_empty());
        assert_eq!(*session.state(), SelectionState::Accepted);
    }

    #[test]
    fn single_file_accepts_exactly_two() {
        let mut session = SelectionSession::new(
            TopologyMode::ZmaxSingleFile,
            descriptors(&["EEG C3", "EEG C4", "EOG LOC"]),
        );
        // Default already checks C3 and C4.
        let result = session.confirm().expect("two channels accepted");
        assert_eq!(result.channels, vec!["EEG C3", "EEG C4"]);
        assert_eq!(result.mode, TopologyMode::ZmaxSingleFile);
    }

    #[test]
    fn single_file_rejects_one_and_three_naming_two() {
        let mut session = SelectionSession::new(
            TopologyMode::ZmaxSingleFile,
            descriptors(&["EEG C3", "EEG C4", "EOG LOC"]),
        );

        session.toggle(1); // down to one checked
        assert!(session.confirm().is_none());
        let SelectionState::Rejected { message } = session.state().clone() else {
            panic!("expected rejection");
        };
        assert!(message.contains("two"), "{message}");

        session.toggle(1); // back to two
        session.toggle(2); // up to three
        assert!(session.confirm().is_none());
        assert!(matches!(session.state(), SelectionState::Rejected { .. }));
    }

    #[test]
    fn rejection_keeps_partial_selection_and_edit_reopens() {
        let mut session = SelectionSession::new(
            TopologyMode::ZmaxSingleFile,
            descriptors(&["EEG C3", "EEG C4", "EOG LOC"]),
        );
        session.toggle(1);
        assert!(session.confirm().is_none());

        // The in-progress selection survives the rejection.
        assert!(session.is_checked(0));
        assert!(!session.is_checked(1));
        assert_eq!(session.checked_count(), 1);

        // Editing transitions back to Open, and a corrected set is accepted.
        session.toggle(1);
        assert_eq!(*session.state(), SelectionState::Open);
        assert!(session.confirm().is_some());
    }

    #[test]
    fn dual_file_accepts_empty_selection() {
        let mut session = SelectionSession::new(TopologyMode::ZmaxDualFile, Vec::new());
        let result = session.confirm().expect("dual-file confirm never blocks");
        assert!(result.channels.is_empty());
        assert_eq!(result.mode, TopologyMode::ZmaxDualFile);
    }

    #[test]
    fn accepted_session_ignores_further_edits() {
        let mut session = SelectionSession::new(TopologyMode::Psg, descriptors(&["EEG C3"]));
        assert!(session.confirm().is_some());
        session.toggle(0);
        session.set_all(false);
        assert_eq!(*session.state(), SelectionState::Accepted);
        assert!(session.is_checked(0));
    }
}
