use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::ResolveError;
use super::model::{DataSource, TopologyMode};

// ---------------------------------------------------------------------------
// Recording layout resolution
// ---------------------------------------------------------------------------

/// File extensions accepted as sleep recordings (matched case-insensitively).
const RECORDING_EXTENSIONS: &[&str] = &["edf", "bdf"];

/// The resolved on-disk layout of one recording, carrying the concrete file
/// paths alongside the topology. Resolved once per session; the probe is
/// read-only and deterministic for an unchanged directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingLayout {
    /// Full montage: the first recording file found under the directory.
    Psg { file: PathBuf },
    /// One two-channel wearable EDF.
    ZmaxSingleFile { file: PathBuf },
    /// Separate left/right wearable EDFs.
    ZmaxDualFile { left: PathBuf, right: PathBuf },
}

impl RecordingLayout {
    pub fn mode(&self) -> TopologyMode {
        match self {
            RecordingLayout::Psg { .. } => TopologyMode::Psg,
            RecordingLayout::ZmaxSingleFile { .. } => TopologyMode::ZmaxSingleFile,
            RecordingLayout::ZmaxDualFile { .. } => TopologyMode::ZmaxDualFile,
        }
    }

    /// The underlying files, left before right for the dual layout.
    pub fn files(&self) -> Vec<&Path> {
        match self {
            RecordingLayout::Psg { file } | RecordingLayout::ZmaxSingleFile { file } => {
                vec![file.as_path()]
            }
            RecordingLayout::ZmaxDualFile { left, right } => {
                vec![left.as_path(), right.as_path()]
            }
        }
    }
}

/// Resolve the topology of `dir` for the declared `source`.
///
/// PSG recordings are searched recursively and need only exist; wearable
/// recordings are probed non-recursively against the ZMax single-letter
/// naming convention (`*_L.edf` / `*_R.edf`, or one combined EDF).
pub fn resolve_layout(dir: &Path, source: DataSource) -> Result<RecordingLayout, ResolveError> {
    match source {
        DataSource::Psg => {
            let file = find_recording_files(dir)
                .into_iter()
                .next()
                .ok_or_else(|| ResolveError::NoRecordingFiles {
                    dir: dir.to_path_buf(),
                })?;
            Ok(RecordingLayout::Psg { file })
        }
        DataSource::Wearable => {
            let probe = probe_wearable_dir(dir);
            if probe.left.len() == 1 && probe.right.len() == 1 {
                Ok(RecordingLayout::ZmaxDualFile {
                    left: probe.left.into_iter().next().unwrap(),
                    right: probe.right.into_iter().next().unwrap(),
                })
            } else if probe.recordings.len() == 1 {
                Ok(RecordingLayout::ZmaxSingleFile {
                    file: probe.recordings.into_iter().next().unwrap(),
                })
            } else {
                Err(ResolveError::AmbiguousTopology {
                    dir: dir.to_path_buf(),
                    found: probe.recordings.len(),
                })
            }
        }
    }
}

/// All recording files under `dir`, recursively, in sorted path order.
pub fn find_recording_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_recording_extension(path))
        .collect();
    files.sort();
    files
}

/// Result of the non-recursive wearable probe, sorted by file name.
#[derive(Debug, Default)]
struct WearableProbe {
    /// Every `.edf` file directly inside the directory.
    recordings: Vec<PathBuf>,
    /// Files whose stem ends in `l`/`L` (ZMax left channel).
    left: Vec<PathBuf>,
    /// Files whose stem ends in `r`/`R` (ZMax right channel).
    right: Vec<PathBuf>,
}

fn probe_wearable_dir(dir: &Path) -> WearableProbe {
    let mut probe = WearableProbe::default();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return probe;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !has_extension(&path, "edf") {
            continue;
        }
        match stem_last_char(&path) {
            Some('l') => probe.left.push(path.clone()),
            Some('r') => probe.right.push(path.clone()),
            _ => {}
        }
        probe.recordings.push(path);
    }

    probe.recordings.sort();
    probe.left.sort();
    probe.right.sort();
    probe
}

fn has_recording_extension(path: &Path) -> bool {
    RECORDING_EXTENSIONS.iter().any(|ext| has_extension(path, ext))
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(wanted))
}

fn stem_last_char(path: &Path) -> Option<char> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.chars().last())
        .map(|c| c.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn psg_finds_recording_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("night1")).unwrap();
        touch(&tmp.path().join("night1"), "recording.edf");

        let layout = resolve_layout(tmp.path(), DataSource::Psg).unwrap();
        assert_eq!(layout.mode(), TopologyMode::Psg);
        assert!(layout.files()[0].ends_with("night1/recording.edf"));
    }

    #[test]
    fn psg_accepts_bdf_and_mixed_case_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "recording.BDF");

        let layout = resolve_layout(tmp.path(), DataSource::Psg).unwrap();
        assert_eq!(layout.mode(), TopologyMode::Psg);
    }

    #[test]
    fn psg_with_no_recordings_fails() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "notes.txt");

        let err = resolve_layout(tmp.path(), DataSource::Psg).unwrap_err();
        assert!(matches!(err, ResolveError::NoRecordingFiles { .. }));
    }

    #[test]
    fn wearable_left_right_pair_is_dual_file() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "rec_L.edf");
        touch(tmp.path(), "rec_R.edf");

        let layout = resolve_layout(tmp.path(), DataSource::Wearable).unwrap();
        let RecordingLayout::ZmaxDualFile { left, right } = &layout else {
            panic!("expected dual-file layout, got {layout:?}");
        };
        assert!(left.ends_with("rec_L.edf"));
        assert!(right.ends_with("rec_R.edf"));
    }

    #[test]
    fn wearable_single_edf_is_single_file() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "rec.edf");

        let layout = resolve_layout(tmp.path(), DataSource::Wearable).unwrap();
        assert_eq!(layout.mode(), TopologyMode::ZmaxSingleFile);
    }

    #[test]
    fn wearable_empty_dir_is_ambiguous_with_zero_count() {
        let tmp = tempfile::tempdir().unwrap();

        let err = resolve_layout(tmp.path(), DataSource::Wearable).unwrap_err();
        let ResolveError::AmbiguousTopology { found, .. } = err else {
            panic!("expected ambiguous topology, got {err:?}");
        };
        assert_eq!(found, 0);
    }

    #[test]
    fn wearable_multiple_unpaired_files_are_ambiguous() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.edf");
        touch(tmp.path(), "b.edf");
        touch(tmp.path(), "c.edf");

        let err = resolve_layout(tmp.path(), DataSource::Wearable).unwrap_err();
        let ResolveError::AmbiguousTopology { found, .. } = err else {
            panic!("expected ambiguous topology, got {err:?}");
        };
        assert_eq!(found, 3);
    }

    #[test]
    fn wearable_probe_does_not_recurse() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();
        touch(&tmp.path().join("sub"), "rec.edf");

        let err = resolve_layout(tmp.path(), DataSource::Wearable).unwrap_err();
        assert!(matches!(err, ResolveError::AmbiguousTopology { found: 0, .. }));
    }

    #[test]
    fn resolution_is_deterministic_for_unchanged_directory() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "zzz_L.edf");
        touch(tmp.path(), "aaa_R.edf");

        let first = resolve_layout(tmp.path(), DataSource::Wearable).unwrap();
        for _ in 0..5 {
            assert_eq!(resolve_layout(tmp.path(), DataSource::Wearable).unwrap(), first);
        }
    }
}
