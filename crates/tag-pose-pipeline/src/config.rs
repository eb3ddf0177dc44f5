//! Startup configuration and the runtime configuration store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU32};

use tag_pose_detect::{DetectError, DetectorConfig, UnknownFamilyError};

/// Fatal construction errors. Nothing is left half-initialized.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownFamily(#[from] UnknownFamilyError),
    #[error("number of tag ids ({ids}) and frames ({frames}) mismatch")]
    TagFramesMismatch { ids: usize, frames: usize },
    #[error("number of tag ids ({ids}) and sizes ({sizes}) mismatch")]
    TagSizesMismatch { ids: usize, sizes: usize },
    #[error(transparent)]
    Detector(#[from] DetectError),
}

/// IO errors for loading or saving a pipeline configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_family() -> String {
    "36h11".to_string()
}

fn default_size() -> f64 {
    1.0
}

fn default_z_up() -> bool {
    true
}

/// Startup configuration, read once at pipeline construction.
///
/// The `tag_ids`/`tag_frames`/`tag_sizes` lists are parallel: a non-empty
/// `tag_frames` or `tag_sizes` must match `tag_ids` in length. Changing the
/// tag topology requires a restart; everything else is reachable through the
/// reconfiguration protocol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Tag family key ("36h11", "Standard41h12", ...).
    #[serde(default = "default_family")]
    pub family: String,
    /// Default tag edge size, used when no per-id size is configured.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Tag ids with a configured frame name or size.
    #[serde(default)]
    pub tag_ids: Vec<u32>,
    /// Frame name per id in `tag_ids` (same length, or empty).
    #[serde(default)]
    pub tag_frames: Vec<String>,
    /// Edge size per id in `tag_ids` (same length, or empty).
    #[serde(default)]
    pub tag_sizes: Vec<f64>,
    /// Initial detector tuning.
    #[serde(default)]
    pub detector: DetectorConfig,
    /// Reject detections with more corrected bits than this.
    #[serde(default)]
    pub max_hamming: u32,
    /// Report detection timing at `info` level.
    #[serde(default)]
    pub profile: bool,
    /// Let the z-axis of the tag frame point up.
    #[serde(default = "default_z_up")]
    pub z_up: bool,
    /// Process incoming frames; a disabled pipeline returns empty batches.
    #[serde(default)]
    pub enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            size: default_size(),
            tag_ids: Vec::new(),
            tag_frames: Vec::new(),
            tag_sizes: Vec::new(),
            detector: DetectorConfig::default(),
            max_hamming: 0,
            profile: false,
            z_up: default_z_up(),
            enabled: false,
        }
    }
}

impl PipelineConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Runtime flags and the fixed per-id lookups.
///
/// The atomic flags tolerate concurrent reads while a frame is in flight
/// (`Relaxed`: a frame may observe the old or new value, never a torn one).
/// The maps and default edge size never change after construction.
#[derive(Debug)]
pub(crate) struct RuntimeConfig {
    pub(crate) tag_edge_size: f64,
    pub(crate) tag_frames: HashMap<u32, String>,
    pub(crate) tag_sizes: HashMap<u32, f64>,
    pub(crate) max_hamming: AtomicU32,
    pub(crate) profile: AtomicBool,
    pub(crate) z_up: AtomicBool,
    pub(crate) enabled: AtomicBool,
}

impl RuntimeConfig {
    pub(crate) fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        let mut tag_frames = HashMap::new();
        if !config.tag_frames.is_empty() {
            if config.tag_ids.len() != config.tag_frames.len() {
                return Err(ConfigError::TagFramesMismatch {
                    ids: config.tag_ids.len(),
                    frames: config.tag_frames.len(),
                });
            }
            for (id, frame) in config.tag_ids.iter().zip(&config.tag_frames) {
                tag_frames.insert(*id, frame.clone());
            }
        }

        let mut tag_sizes = HashMap::new();
        if !config.tag_sizes.is_empty() {
            if config.tag_ids.len() != config.tag_sizes.len() {
                return Err(ConfigError::TagSizesMismatch {
                    ids: config.tag_ids.len(),
                    sizes: config.tag_sizes.len(),
                });
            }
            for (id, size) in config.tag_ids.iter().zip(&config.tag_sizes) {
                tag_sizes.insert(*id, *size);
            }
        }

        Ok(Self {
            tag_edge_size: config.size,
            tag_frames,
            tag_sizes,
            max_hamming: AtomicU32::new(config.max_hamming),
            profile: AtomicBool::new(config.profile),
            z_up: AtomicBool::new(config.z_up),
            enabled: AtomicBool::new(config.enabled),
        })
    }
}
