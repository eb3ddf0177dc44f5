//! Core geometry for fiducial tag pose estimation.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete marker detector: frames, camera projection
//! matrices, and the homography-to-pose decomposition live here.

mod frame;
mod pose;
mod projection;

pub use frame::{Frame, FrameError, FrameHeader, GrayFrameView};
pub use pose::{estimate_tag_pose, PoseError};
pub use projection::CameraProjection;
