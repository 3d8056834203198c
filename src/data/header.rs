use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

// ---------------------------------------------------------------------------
// EDF/BDF header reader
// ---------------------------------------------------------------------------
// Only the fixed-width ASCII prelude is touched: the version sentinel, the
// signal count at offset 252, and the 16-byte label fields that follow.
// Signal data is never parsed here.

/// Byte length of the fixed part of an EDF/BDF header.
const FIXED_HEADER_LEN: usize = 256;

/// Offset of the 4-character "number of signals" field.
const SIGNAL_COUNT_OFFSET: usize = 252;

/// Byte length of one channel label field.
const LABEL_LEN: usize = 16;

/// Read the ordered channel labels from an EDF or BDF file header.
///
/// Fails loudly (never silently) when the file is unreadable or does not
/// start with a valid EDF/BDF header.
pub fn read_channel_labels(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)
        .with_context(|| format!("opening recording '{}'", path.display()))?;

    let mut fixed = [0u8; FIXED_HEADER_LEN];
    file.read_exact(&mut fixed)
        .with_context(|| format!("reading header of '{}'", path.display()))?;

    check_version_sentinel(&fixed, path)?;

    let ns_field = std::str::from_utf8(&fixed[SIGNAL_COUNT_OFFSET..SIGNAL_COUNT_OFFSET + 4])
        .ok()
        .map(str::trim)
        .with_context(|| format!("'{}': signal-count field is not ASCII", path.display()))?;
    let n_signals: usize = ns_field
        .parse()
        .with_context(|| format!("'{}': invalid signal count '{ns_field}'", path.display()))?;
    if n_signals == 0 {
        bail!("'{}' declares zero signals", path.display());
    }

    let mut label_bytes = vec![0u8; n_signals * LABEL_LEN];
    file.read_exact(&mut label_bytes)
        .with_context(|| format!("reading channel labels of '{}'", path.display()))?;

    let labels = label_bytes
        .chunks_exact(LABEL_LEN)
        .map(|chunk| String::from_utf8_lossy(chunk).trim().to_string())
        .collect();

    Ok(labels)
}

/// The first 8 header bytes identify the format: ASCII "0" padded with
/// spaces for EDF, 0xFF followed by "BIOSEMI" for BDF.
fn check_version_sentinel(fixed: &[u8], path: &Path) -> Result<()> {
    let version = &fixed[..8];
    let is_edf = version[0] == b'0' && version[1..].iter().all(|&b| b == b' ');
    let is_bdf = version[0] == 0xFF && &version[1..] == b"BIOSEMI";
    if !is_edf && !is_bdf {
        bail!("'{}' is not a valid EDF/BDF recording", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::write_minimal_edf;
    use std::io::Write;

    #[test]
    fn reads_labels_in_header_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night.edf");
        write_minimal_edf(&path, &["EEG C3-A1", "EEG C4-A2", "EOG LOC"]);

        let labels = read_channel_labels(&path).unwrap();
        assert_eq!(labels, vec!["EEG C3-A1", "EEG C4-A2", "EOG LOC"]);
    }

    #[test]
    fn rejects_non_recording_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.edf");
        let mut f = File::create(&path).unwrap();
        f.write_all(&[0x42; 512]).unwrap();

        let err = read_channel_labels(&path).unwrap_err();
        assert!(err.to_string().contains("not a valid EDF/BDF"), "{err}");
    }

    #[test]
    fn rejects_truncated_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.edf");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"0       too short").unwrap();

        assert!(read_channel_labels(&path).is_err());
    }

    #[test]
    fn missing_file_fails_with_path_in_message() {
        let err = read_channel_labels(Path::new("/nonexistent/rec.edf")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rec.edf"));
    }
}
