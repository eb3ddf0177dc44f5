use crate::TagFamily;
use nalgebra::{Matrix3, Point2};

/// One raw marker detection, as reported by a detector implementation.
///
/// Produced and consumed within a single pipeline invocation; the pipeline
/// copies what it keeps and drops the rest.
#[derive(Clone, Debug)]
pub struct RawDetection {
    /// Family that decoded the marker.
    pub family: TagFamily,
    /// Decoded marker id.
    pub id: u32,
    /// Bit errors corrected while decoding the id.
    pub hamming: u32,
    /// Detector-reported decoding confidence (higher is better).
    pub decision_margin: f32,
    /// Centroid in image pixels.
    pub center: Point2<f64>,
    /// Corners in image pixels.
    pub corners: [Point2<f64>; 4],
    /// Homography mapping canonical tag coordinates (spanning [-1, 1]) into
    /// image pixels.
    pub homography: Matrix3<f64>,
}
