use super::model::{ChannelDescriptor, SignalType};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------
// Kept as named constants so the priority order stays auditable. First match
// wins; see `classify` for the order.

/// Mastoid reference electrode names.
pub const MASTOID_LABELS: &[&str] = &["A1", "A2", "M1", "M2"];

/// Standard 10-20 electrode site names recognised as EEG bases.
pub const EEG_SITES: &[&str] = &[
    "FP1", "FP2", "F3", "F4", "C3", "C4", "P3", "P4", "O1", "O2", "F7", "F8",
    "T3", "T4", "T5", "T6", "FZ", "CZ", "PZ", "F1", "F2",
];

/// Substrings that unambiguously mark an ocular lead. Checked before the EEG
/// rules because EOG channels are sometimes exported with EEG-like prefixes
/// (e.g. "EEG LOC-A2").
pub const EOG_MARKERS: &[&str] = &["EOG", "LOC", "ROC", "E1", "E2"];

/// Substrings that veto the generic "EEG" text match (muscle/cardiac leads).
pub const NON_EEG_MARKERS: &[&str] = &["EMG", "ECG", "EKG"];

/// Modality prefixes stripped from the front of a label when followed by
/// whitespace ("EEG C3" → "C3").
pub const MODALITY_PREFIXES: &[&str] = &["EEG", "EOG", "EMG"];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a raw header label into a [`ChannelDescriptor`].
///
/// Deterministic, pure, and total: unrecognised labels come back as
/// [`SignalType::Other`] rather than failing.
///
/// Priority order:
/// 1. Ocular marker substring anywhere in the label → `Eog`
/// 2. Normalised base is a 10-20 site, or the label says "EEG" and carries
///    no muscle/cardiac marker → `Eeg`
/// 3. Normalised base is a mastoid name → `Mastoid`
/// 4. Anything else → `Other`
pub fn classify(raw_label: &str) -> ChannelDescriptor {
    let trimmed = raw_label.trim();
    let upper = trimmed.to_uppercase();

    let (base, has_mastoid_ref) = normalized_base(&upper);

    let signal_type = if EOG_MARKERS.iter().any(|m| upper.contains(m)) {
        SignalType::Eog
    } else if EEG_SITES.contains(&base.as_str())
        || (upper.contains("EEG") && !NON_EEG_MARKERS.iter().any(|m| upper.contains(m)))
    {
        SignalType::Eeg
    } else if MASTOID_LABELS.contains(&base.as_str()) {
        SignalType::Mastoid
    } else {
        SignalType::Other
    };

    ChannelDescriptor {
        raw_name: trimmed.to_string(),
        base,
        signal_type,
        has_mastoid_ref,
    }
}

/// Classify every label of a header, preserving order.
pub fn classify_all(labels: &[String]) -> Vec<ChannelDescriptor> {
    labels.iter().map(|l| classify(l)).collect()
}

/// Strip modality prefix and mastoid-reference suffix from an already
/// upper-cased, trimmed label. Returns the base plus whether a mastoid
/// suffix was removed.
fn normalized_base(upper: &str) -> (String, bool) {
    // A bare mastoid channel name must survive untouched: stripping "A1" as
    // a suffix of the label "A1" would leave an empty base.
    if MASTOID_LABELS.contains(&upper) {
        return (upper.to_string(), false);
    }

    let mut base = upper;
    for prefix in MODALITY_PREFIXES {
        if let Some(rest) = base.strip_prefix(prefix) {
            if rest.starts_with(char::is_whitespace) {
                base = rest.trim_start();
                break;
            }
        }
    }

    let mut has_mastoid_ref = false;
    for mastoid in MASTOID_LABELS {
        if let Some(rest) = base.strip_suffix(mastoid) {
            // Optional ':' or '-' separator directly before the reference.
            base = rest.strip_suffix([':', '-']).unwrap_or(rest);
            has_mastoid_ref = true;
            break;
        }
    }

    (base.trim().to_string(), has_mastoid_ref)
}
