//! Detection-to-pose pipeline over an opaque fiducial marker detector.
//!
//! Per frame, the pipeline checks the lock-free enable flag, inverts the
//! camera intrinsics, runs the detector under its lock, filters detections
//! by the id allow-list and hamming threshold, resolves per-id frame names
//! and edge sizes, and converts each surviving homography into a camera-
//! relative pose. A control thread may reconfigure the pipeline at any time
//! through [`TagPipeline::apply_updates`].
//!
//! The detector itself is a collaborator behind the
//! [`tag_pose_detect::TagDetector`] trait; this crate never performs quad
//! detection or decoding.

mod config;
mod output;
mod pipeline;
mod reconfig;

pub use config::{ConfigError, ConfigIoError, PipelineConfig};
pub use output::{DetectionBatch, FrameOutput, StampedTransform, TagDetectionRecord};
pub use pipeline::{PipelineError, TagPipeline};
pub use reconfig::{ParamUpdate, ParamValue};
