/// Data layer: recording topology, channel classification, and selection
/// validation.
///
/// Architecture:
/// ```text
///   recording directory + declared data source
///        │
///        ▼
///   ┌──────────┐
///   │ topology  │  read-only probe → RecordingLayout (psg / one file / two files)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  header   │  EDF/BDF ASCII prelude → ordered raw channel labels
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  label → ChannelDescriptor (EEG / EOG / mastoid / other)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ selection │  default preselection + confirm-time cardinality check
///   └──────────┘
/// ```
///
/// `resolve` composes the first three stages into one call; `selection`
/// owns the user's in-progress choices until they are confirmed.

pub mod classify;
pub mod error;
pub mod header;
pub mod model;
pub mod resolve;
pub mod selection;
pub mod topology;
