use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SignalType – semantic class of one recorded channel
// ---------------------------------------------------------------------------

/// Semantic signal class of a channel, derived from its header label.
/// Classification is total: anything unrecognised is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalType {
    Eeg,
    Eog,
    Mastoid,
    Other,
}

impl SignalType {
    /// All variants, in UI/legend order.
    pub const ALL: [SignalType; 4] = [
        SignalType::Eeg,
        SignalType::Eog,
        SignalType::Mastoid,
        SignalType::Other,
    ];
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalType::Eeg => write!(f, "EEG"),
            SignalType::Eog => write!(f, "EOG"),
            SignalType::Mastoid => write!(f, "Mastoid"),
            SignalType::Other => write!(f, "Other"),
        }
    }
}

// ---------------------------------------------------------------------------
// ChannelDescriptor – one classified header label
// ---------------------------------------------------------------------------

/// A classified channel. Derived once per header read and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDescriptor {
    /// The label exactly as read from the header (whitespace-trimmed).
    pub raw_name: String,
    /// Upper-cased label with modality prefix and mastoid suffix stripped.
    pub base: String,
    /// Semantic class.
    pub signal_type: SignalType,
    /// Whether a mastoid-reference suffix (e.g. `-A1`, `:M2`) was stripped.
    pub has_mastoid_ref: bool,
}

// ---------------------------------------------------------------------------
// DataSource – what the user says the recording is
// ---------------------------------------------------------------------------

/// The declared acquisition device, chosen by the user before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Full polysomnography montage.
    #[default]
    Psg,
    /// Forehead EEG wearable (e.g. ZMax), one or two files per night.
    Wearable,
}

impl DataSource {
    pub const ALL: [DataSource; 2] = [DataSource::Psg, DataSource::Wearable];

    /// User-facing combo-box label.
    pub fn label(self) -> &'static str {
        match self {
            DataSource::Psg => "full PSG (EEG, optional: EOG, EMG)",
            DataSource::Wearable => "EEG wearable (e.g. ZMax)",
        }
    }
}

// ---------------------------------------------------------------------------
// TopologyMode – how the recording is laid out on disk
// ---------------------------------------------------------------------------

/// Resolved acquisition topology. Determined once per session from the
/// directory contents and the declared data source; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopologyMode {
    #[serde(rename = "psg")]
    Psg,
    /// One two-channel wearable EDF.
    #[serde(rename = "zmax_one_file")]
    ZmaxSingleFile,
    /// Separate left/right wearable EDFs, one channel each.
    #[serde(rename = "zmax_two_files")]
    ZmaxDualFile,
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyMode::Psg => write!(f, "PSG montage"),
            TopologyMode::ZmaxSingleFile => write!(f, "wearable, single file"),
            TopologyMode::ZmaxDualFile => write!(f, "wearable, left/right files"),
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionResult – the artifact handed to the scoring pipeline
// ---------------------------------------------------------------------------

/// A confirmed channel selection. `channels` is empty only for
/// [`TopologyMode::ZmaxDualFile`], where each file carries a single channel
/// and there is nothing to choose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub channels: Vec<String>,
    pub mode: TopologyMode,
}
