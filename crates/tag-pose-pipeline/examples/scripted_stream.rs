//! Run the pipeline over a synthetic frame with a scripted detector and
//! print the resulting batches as JSON.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example scripted_stream
//! ```

use nalgebra::{Matrix3, Point2};
use tag_pose_core::{CameraProjection, Frame, FrameHeader, GrayFrameView};
use tag_pose_detect::{DetectError, DetectorConfig, RawDetection, TagDetector, TagFamily};
use tag_pose_pipeline::{ParamUpdate, PipelineConfig, TagPipeline};

struct ScriptedDetector;

impl TagDetector for ScriptedDetector {
    fn configure(&mut self, _config: &DetectorConfig) {}

    fn detect(&mut self, _image: &GrayFrameView<'_>) -> Result<Vec<RawDetection>, DetectError> {
        Ok(vec![RawDetection {
            family: TagFamily::Tag36h11,
            id: 5,
            hamming: 0,
            decision_margin: 72.5,
            center: Point2::new(412.0, 280.0),
            corners: [
                Point2::new(380.0, 250.0),
                Point2::new(444.0, 252.0),
                Point2::new(442.0, 312.0),
                Point2::new(378.0, 310.0),
            ],
            homography: Matrix3::new(
                31.0, -1.2, 412.0, //
                0.8, 30.4, 280.0, //
                0.001, -0.002, 1.0,
            ),
        }])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = PipelineConfig {
        tag_ids: vec![5],
        tag_frames: vec!["pallet".to_string()],
        tag_sizes: vec![0.16],
        profile: true,
        ..PipelineConfig::default()
    };

    let pipeline = TagPipeline::new(&config, |_family, _config| {
        Ok(Box::new(ScriptedDetector) as Box<dyn TagDetector + Send>)
    })?;
    pipeline.apply_updates(&[ParamUpdate::new("enabled", true)]);

    let pixels = vec![128u8; 640 * 480];
    let frame = Frame {
        header: FrameHeader {
            seq: 1,
            stamp_ns: 1_700_000_000_000,
            frame_id: "camera_optical".to_string(),
        },
        image: GrayFrameView::new(&pixels, 640, 480, 640)?,
    };
    let projection = CameraProjection::from_row_slice(&[
        600.0, 0.0, 320.0, 0.0, //
        0.0, 600.0, 240.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    ]);

    let output = pipeline.process(&frame, &projection)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
