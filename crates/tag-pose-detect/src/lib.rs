//! Detector-facing contracts for the tag pose pipeline.
//!
//! This crate defines what the pipeline needs from a marker detector: the
//! closed family registry, the tuning record shared with the live detector
//! state, raw detection records, and the [`TagDetector`] seam. It does
//! **not** perform quad detection or decoding itself.

mod config;
mod detection;
mod detector;
mod family;

pub use config::DetectorConfig;
pub use detection::RawDetection;
pub use detector::{DetectError, TagDetector};
pub use family::{TagFamily, UnknownFamilyError};
