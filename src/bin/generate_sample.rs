//! Writes header-only sample recordings covering all three acquisition
//! topologies, so the GUI can be exercised without real sleep data:
//!
//! * `sample_recordings/psg/night.edf`        – full PSG montage
//! * `sample_recordings/zmax_single/rec.edf`  – one two-channel wearable file
//! * `sample_recordings/zmax_dual/rec_L.edf`  – left/right wearable pair
//! * `sample_recordings/zmax_dual/rec_R.edf`
//!
//! The files contain a valid EDF header with zero data records; signal data
//! is never needed for channel setup.

use std::fs;
use std::io::Write;
use std::path::Path;

const FIXED_HEADER_LEN: usize = 256;
const PER_SIGNAL_LEN: usize = 256;

/// Pad an ASCII field to its fixed EDF width.
fn field(out: &mut Vec<u8>, text: &str, width: usize) {
    assert!(
        text.len() <= width,
        "field '{text}' exceeds {width} bytes"
    );
    out.extend_from_slice(text.as_bytes());
    out.resize(out.len() + (width - text.len()), b' ');
}

/// Build a complete EDF header (fixed part plus per-signal arrays) for the
/// given channel labels, declaring zero data records.
fn edf_header(labels: &[&str]) -> Vec<u8> {
    let ns = labels.len();
    let mut out = Vec::with_capacity(FIXED_HEADER_LEN + ns * PER_SIGNAL_LEN);

    field(&mut out, "0", 8); // version
    field(&mut out, "X X X X", 80); // local patient id (anonymised)
    field(&mut out, "Startdate 01-JAN-2024 X somnoscope sample", 80);
    field(&mut out, "01.01.24", 8);
    field(&mut out, "23.00.00", 8);
    field(&mut out, &(FIXED_HEADER_LEN + ns * PER_SIGNAL_LEN).to_string(), 8);
    field(&mut out, "", 44); // reserved
    field(&mut out, "0", 8); // number of data records
    field(&mut out, "30", 8); // record duration in seconds
    field(&mut out, &ns.to_string(), 4);

    for label in labels {
        field(&mut out, label, 16);
    }
    // Per-signal arrays: transducer, dimension, physical min/max, digital
    // min/max, prefilter, samples per record, reserved.
    for (text, width) in [
        ("AgAgCl electrode", 80),
        ("uV", 8),
        ("-100", 8),
        ("100", 8),
        ("-2048", 8),
        ("2047", 8),
        ("HP:0.5Hz", 80),
        ("128", 8),
        ("", 32),
    ] {
        for _ in 0..ns {
            field(&mut out, text, width);
        }
    }

    out
}

fn write_recording(path: &Path, labels: &[&str]) {
    let header = edf_header(labels);
    let mut file = fs::File::create(path).expect("Failed to create sample recording");
    file.write_all(&header).expect("Failed to write sample recording");
    println!("Wrote {} ({} channels)", path.display(), labels.len());
}

fn main() {
    let root = Path::new("sample_recordings");

    let psg_dir = root.join("psg");
    fs::create_dir_all(&psg_dir).expect("Failed to create psg directory");
    write_recording(
        &psg_dir.join("night.edf"),
        &[
            "EEG F3-A2",
            "EEG F4-A1",
            "EEG C3-A2",
            "EEG C4-A1",
            "EEG O1-A2",
            "EEG O2-A1",
            "EOG LOC-A2",
            "EOG ROC-A1",
            "EMG Chin",
            "ECG",
            "A1",
            "A2",
        ],
    );

    let single_dir = root.join("zmax_single");
    fs::create_dir_all(&single_dir).expect("Failed to create zmax_single directory");
    write_recording(&single_dir.join("rec.edf"), &["EEG L", "EEG R"]);

    let dual_dir = root.join("zmax_dual");
    fs::create_dir_all(&dual_dir).expect("Failed to create zmax_dual directory");
    write_recording(&dual_dir.join("rec_L.edf"), &["EEG L"]);
    write_recording(&dual_dir.join("rec_R.edf"), &["EEG R"]);

    println!("Sample recordings ready under {}", root.display());
}
