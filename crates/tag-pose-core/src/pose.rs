use nalgebra::{Isometry3, Matrix3, Rotation3, Translation3, UnitQuaternion};

/// Pose estimation failures.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseError {
    #[error("degenerate homography: near-zero leading column")]
    DegenerateHomography,
}

const MIN_COLUMN_NORM: f64 = 1e-12;

/// Recover the tag pose relative to the camera from a planar homography.
///
/// With `H = K * [r0 r1 t]` up to scale, `T = Pinv * H` carries the first two
/// rotation columns and the translation. The third rotation column is the
/// cross product of the normalized first two, which keeps the basis
/// right-handed even when the raw columns are not orthogonal. The canonical
/// tag corners span [-1, 1], so the metric scale is half the tag edge length.
///
/// `z_up` flips the tag frame by half a turn about its local x-axis so the
/// z-axis points away from the tag surface instead of towards the camera.
pub fn estimate_tag_pose(
    h: &Matrix3<f64>,
    p_inv: &Matrix3<f64>,
    size: f64,
    z_up: bool,
) -> Result<Isometry3<f64>, PoseError> {
    let t = p_inv * h;

    let n0 = t.column(0).norm();
    let n1 = t.column(1).norm();
    if n0 < MIN_COLUMN_NORM || n1 < MIN_COLUMN_NORM {
        return Err(PoseError::DegenerateHomography);
    }

    let r0 = t.column(0) / n0;
    let r1 = t.column(1) / n1;
    let r2 = r0.cross(&r1);

    let mut r = Matrix3::from_columns(&[r0, r1, r2]);
    if z_up {
        r.column_mut(1).neg_mut();
        r.column_mut(2).neg_mut();
    }

    // the first two column norms both approximate the homography scale; their
    // average divides it out before the edge-size half-width is applied
    let translation = t.column(2) / ((n0 + n1) / 2.0) * (size / 2.0);

    // columns are unit length and right-handed by construction
    let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(r));

    Ok(Isometry3::from_parts(Translation3::from(translation), rotation))
}
