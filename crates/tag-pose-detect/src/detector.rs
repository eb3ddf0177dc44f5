use crate::{DetectorConfig, RawDetection};
use tag_pose_core::GrayFrameView;

/// Failure reported by a detector implementation.
#[derive(thiserror::Error, Debug)]
#[error("marker detection failed: {message}")]
pub struct DetectError {
    message: String,
}

impl DetectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An opaque marker detector.
///
/// Implementations own their family resources and release them in `Drop`, so
/// teardown happens exactly once on every path, early construction errors
/// included. The pipeline guarantees `configure` and `detect` never run
/// concurrently.
pub trait TagDetector {
    /// Push updated tuning parameters into the live detector state.
    fn configure(&mut self, config: &DetectorConfig);

    /// Run detection over one grayscale frame.
    fn detect(&mut self, image: &GrayFrameView<'_>) -> Result<Vec<RawDetection>, DetectError>;
}
