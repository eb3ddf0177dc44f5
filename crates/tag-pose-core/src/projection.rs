use nalgebra::{Matrix3, Matrix3x4};

/// Row-major 3x4 camera projection matrix.
///
/// Calibration may change between frames, so the intrinsic inverse is
/// recomputed per frame rather than cached; the inversion is cheap next to a
/// detection call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraProjection {
    p: Matrix3x4<f64>,
}

impl CameraProjection {
    pub fn new(p: Matrix3x4<f64>) -> Self {
        Self { p }
    }

    /// Build from the 12 row-major entries of a calibration message.
    pub fn from_row_slice(values: &[f64; 12]) -> Self {
        Self {
            p: Matrix3x4::from_row_slice(values),
        }
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix3x4<f64> {
        &self.p
    }

    /// Inverse of the leading 3x3 block, `None` when the block is singular.
    pub fn intrinsics_inverse(&self) -> Option<Matrix3<f64>> {
        self.p.fixed_view::<3, 3>(0, 0).into_owned().try_inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inverts_pinhole_intrinsics() {
        let proj = CameraProjection::from_row_slice(&[
            600.0, 0.0, 320.0, 0.0, //
            0.0, 600.0, 240.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ]);
        let p_inv = proj.intrinsics_inverse().expect("invertible");
        let k = proj.matrix().fixed_view::<3, 3>(0, 0).into_owned();
        assert_relative_eq!(p_inv * k, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn singular_block_has_no_inverse() {
        let proj = CameraProjection::from_row_slice(&[
            600.0, 0.0, 320.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ]);
        assert!(proj.intrinsics_inverse().is_none());
    }
}
