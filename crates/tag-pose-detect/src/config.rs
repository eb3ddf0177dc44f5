use serde::{Deserialize, Serialize};

/// Tuning parameters shared with the live detector state.
///
/// The detector reads these while a detection call runs, so updates must
/// never race a call; the pipeline keeps this record under the same lock as
/// the detector itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Worker threads used for quad detection.
    pub threads: usize,
    /// Decimation factor for the quad detection resolution.
    pub decimate: f32,
    /// Sigma of the Gaussian blur applied before quad detection.
    pub blur_sigma: f32,
    /// Snap quad edges to strong gradients.
    pub refine_edges: bool,
    /// Sharpening applied to decoded image patches.
    pub decode_sharpening: f64,
    /// Write detector debug images to the working directory.
    pub debug: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            decimate: 2.0,
            blur_sigma: 0.0,
            refine_edges: true,
            decode_sharpening: 0.25,
            debug: false,
        }
    }
}
