//! The frame pipeline: detector invocation, filtering, pose estimation.

use std::sync::atomic::Ordering;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, info};
use tag_pose_core::{estimate_tag_pose, CameraProjection, Frame, PoseError};
use tag_pose_detect::{DetectError, DetectorConfig, TagDetector, TagFamily};

use crate::config::{ConfigError, PipelineConfig, RuntimeConfig};
use crate::output::{DetectionBatch, FrameOutput, StampedTransform, TagDetectionRecord};
use crate::reconfig::ParamUpdate;

/// Per-frame processing failures.
///
/// Each aborts the current frame only: no partial batch is emitted, shared
/// state stays intact, and the next frame proceeds normally.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("projection matrix has a singular intrinsic block")]
    SingularProjection,
    #[error(transparent)]
    Detect(#[from] DetectError),
    #[error(transparent)]
    Pose(#[from] PoseError),
}

struct DetectorState {
    config: DetectorConfig,
    detector: Box<dyn TagDetector + Send>,
}

/// Detection-to-pose pipeline for one camera stream.
///
/// `process` runs frames; [`TagPipeline::apply_updates`] may run concurrently
/// from a control thread. One mutex serializes detection against detector
/// reconfiguration; the scalar flags are lock-free atomics.
pub struct TagPipeline {
    family: TagFamily,
    runtime: RuntimeConfig,
    detector: Mutex<DetectorState>,
}

impl std::fmt::Debug for TagPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagPipeline")
            .field("family", &self.family)
            .field("runtime", &self.runtime)
            .finish_non_exhaustive()
    }
}

impl TagPipeline {
    /// Build the pipeline and its detector.
    ///
    /// Resolves the tag family, validates the per-id lists, then builds the
    /// detector through `build_detector` and pushes the initial tuning into
    /// it. Any failure aborts construction with nothing left behind; a
    /// partially built detector releases its resources through `Drop`.
    pub fn new<F>(config: &PipelineConfig, build_detector: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(TagFamily, &DetectorConfig) -> Result<Box<dyn TagDetector + Send>, DetectError>,
    {
        let family: TagFamily = config.family.parse()?;
        let runtime = RuntimeConfig::from_config(config)?;

        let mut detector = build_detector(family, &config.detector)?;
        detector.configure(&config.detector);

        Ok(Self {
            family,
            runtime,
            detector: Mutex::new(DetectorState {
                config: config.detector,
                detector,
            }),
        })
    }

    /// Tag family resolved at construction.
    #[inline]
    pub fn family(&self) -> TagFamily {
        self.family
    }

    /// Whether incoming frames are currently processed.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.runtime.enabled.load(Ordering::Relaxed)
    }

    /// Current detector tuning.
    pub fn detector_config(&self) -> DetectorConfig {
        self.detector_state().config
    }

    /// Process one frame into a detection batch and a transform batch.
    ///
    /// Detections failing the allow-list or hamming filter are dropped
    /// silently; everything else that goes wrong aborts the whole frame.
    pub fn process(
        &self,
        frame: &Frame<'_>,
        projection: &CameraProjection,
    ) -> Result<FrameOutput, PipelineError> {
        if !self.enabled() {
            return Ok(FrameOutput {
                detections: DetectionBatch {
                    header: frame.header.clone(),
                    detections: Vec::new(),
                },
                transforms: Vec::new(),
            });
        }

        let p_inv = projection
            .intrinsics_inverse()
            .ok_or(PipelineError::SingularProjection)?;

        let started = Instant::now();
        let raw = {
            // hold the lock for the detection call only
            let mut state = self.detector_state();
            state.detector.detect(&frame.image)?
        };

        if self.runtime.profile.load(Ordering::Relaxed) {
            info!(
                "detected {} tags in {:.3} ms",
                raw.len(),
                started.elapsed().as_secs_f64() * 1e3
            );
        }

        let max_hamming = self.runtime.max_hamming.load(Ordering::Relaxed);
        let z_up = self.runtime.z_up.load(Ordering::Relaxed);

        let mut records = Vec::new();
        let mut transforms = Vec::new();

        for det in &raw {
            // ignore untracked tags
            if !self.runtime.tag_frames.is_empty()
                && !self.runtime.tag_frames.contains_key(&det.id)
            {
                continue;
            }

            // reject detections with more corrected bits than allowed
            if det.hamming > max_hamming {
                continue;
            }

            records.push(TagDetectionRecord {
                family: det.family.name().to_string(),
                id: det.id,
                hamming: det.hamming,
                decision_margin: det.decision_margin,
                center: det.center,
                corners: det.corners,
                homography: det.homography,
            });

            let child_frame_id = self
                .runtime
                .tag_frames
                .get(&det.id)
                .cloned()
                .unwrap_or_else(|| format!("{}:{}", det.family.name(), det.id));
            let size = self
                .runtime
                .tag_sizes
                .get(&det.id)
                .copied()
                .unwrap_or(self.runtime.tag_edge_size);

            let transform = estimate_tag_pose(&det.homography, &p_inv, size, z_up)?;
            transforms.push(StampedTransform {
                header: frame.header.clone(),
                child_frame_id,
                transform,
            });
        }

        Ok(FrameOutput {
            detections: DetectionBatch {
                header: frame.header.clone(),
                detections: records,
            },
            transforms,
        })
    }

    /// Apply a batch of named updates.
    ///
    /// Unrecognized names and mismatched value types are ignored, so the
    /// operation never fails. Detector keys are applied under the detection
    /// lock and pushed to the detector once per batch; the scalar flags are
    /// plain atomic stores.
    pub fn apply_updates(&self, updates: &[ParamUpdate]) {
        let mut state = self.detector_state();
        let mut detector_changed = false;

        for update in updates {
            debug!("setting: {} = {:?}", update.name, update.value);
            let value = update.value;
            match update.name.as_str() {
                "detector.threads" => {
                    if let Some(v) = value.as_usize() {
                        state.config.threads = v;
                        detector_changed = true;
                    }
                }
                "detector.decimate" => {
                    if let Some(v) = value.as_f32() {
                        state.config.decimate = v;
                        detector_changed = true;
                    }
                }
                "detector.blur" => {
                    if let Some(v) = value.as_f32() {
                        state.config.blur_sigma = v;
                        detector_changed = true;
                    }
                }
                "detector.refine" => {
                    if let Some(v) = value.as_bool() {
                        state.config.refine_edges = v;
                        detector_changed = true;
                    }
                }
                "detector.sharpening" => {
                    if let Some(v) = value.as_f64() {
                        state.config.decode_sharpening = v;
                        detector_changed = true;
                    }
                }
                "detector.debug" => {
                    if let Some(v) = value.as_bool() {
                        state.config.debug = v;
                        detector_changed = true;
                    }
                }
                "max_hamming" => {
                    if let Some(v) = value.as_u32() {
                        self.runtime.max_hamming.store(v, Ordering::Relaxed);
                    }
                }
                "profile" => {
                    if let Some(v) = value.as_bool() {
                        self.runtime.profile.store(v, Ordering::Relaxed);
                    }
                }
                "z_up" => {
                    if let Some(v) = value.as_bool() {
                        self.runtime.z_up.store(v, Ordering::Relaxed);
                    }
                }
                "enabled" => {
                    if let Some(v) = value.as_bool() {
                        self.runtime.enabled.store(v, Ordering::Relaxed);
                    }
                }
                _ => {}
            }
        }

        if detector_changed {
            let DetectorState { config, detector } = &mut *state;
            detector.configure(config);
        }
    }

    fn detector_state(&self) -> MutexGuard<'_, DetectorState> {
        // a detector panic must not wedge processing or reconfiguration; the
        // guarded state is plain data plus the opaque detector
        self.detector.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
