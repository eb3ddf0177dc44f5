//! Per-frame output batches.

use nalgebra::{Isometry3, Matrix3, Point2};
use serde::{Deserialize, Serialize};
use tag_pose_core::FrameHeader;

/// One accepted detection, copied verbatim from the raw detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagDetectionRecord {
    /// Family name ("36h11", ...).
    pub family: String,
    pub id: u32,
    pub hamming: u32,
    pub decision_margin: f32,
    pub center: Point2<f64>,
    pub corners: [Point2<f64>; 4],
    pub homography: Matrix3<f64>,
}

/// All accepted detections of one frame. An empty list is still emitted so
/// consumers observe liveness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionBatch {
    pub header: FrameHeader,
    pub detections: Vec<TagDetectionRecord>,
}

/// Tag pose relative to the camera frame named in the header.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StampedTransform {
    pub header: FrameHeader,
    /// Resolved destination frame of the tag.
    pub child_frame_id: String,
    pub transform: Isometry3<f64>,
}

/// Everything one `process` call emits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameOutput {
    pub detections: DetectionBatch,
    pub transforms: Vec<StampedTransform>,
}
