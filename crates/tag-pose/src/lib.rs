//! Facade crate for the `tag-pose-*` workspace.
//!
//! This crate provides stable, convenient re-exports of the underlying
//! crates:
//!
//! - `tag_pose::core`: frames, headers, projection matrices, the
//!   homography-to-pose estimator.
//! - `tag_pose::detect`: the tag family registry, detector tuning, raw
//!   detections, and the [`TagDetector`] seam.
//! - `tag_pose::pipeline`: the detection-to-pose pipeline, its configuration,
//!   reconfiguration protocol, and output batches.
//!
//! ## Quickstart
//!
//! ```no_run
//! use tag_pose::{CameraProjection, Frame, FrameHeader, GrayFrameView};
//! use tag_pose::{PipelineConfig, TagPipeline};
//!
//! # fn build_detector(
//! #     _family: tag_pose::TagFamily,
//! #     _config: &tag_pose::DetectorConfig,
//! # ) -> Result<Box<dyn tag_pose::TagDetector + Send>, tag_pose::detect::DetectError> {
//! #     unimplemented!()
//! # }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::load_json("pipeline.json")?;
//! let pipeline = TagPipeline::new(&config, build_detector)?;
//!
//! let pixels = vec![0u8; 640 * 480];
//! let frame = Frame {
//!     header: FrameHeader::default(),
//!     image: GrayFrameView::new(&pixels, 640, 480, 640)?,
//! };
//! let projection = CameraProjection::from_row_slice(&[
//!     600.0, 0.0, 320.0, 0.0, //
//!     0.0, 600.0, 240.0, 0.0, //
//!     0.0, 0.0, 1.0, 0.0,
//! ]);
//!
//! let output = pipeline.process(&frame, &projection)?;
//! println!("{} tags", output.detections.detections.len());
//! # Ok(())
//! # }
//! ```

pub use tag_pose_core as core;
pub use tag_pose_detect as detect;
pub use tag_pose_pipeline as pipeline;

pub use tag_pose_core::{estimate_tag_pose, CameraProjection, Frame, FrameHeader, GrayFrameView};
pub use tag_pose_detect::{DetectorConfig, RawDetection, TagDetector, TagFamily};
pub use tag_pose_pipeline::{
    DetectionBatch, FrameOutput, ParamUpdate, ParamValue, PipelineConfig, StampedTransform,
    TagPipeline,
};
