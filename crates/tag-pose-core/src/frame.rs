use serde::{Deserialize, Serialize};

/// Header of an incoming frame, copied verbatim onto every derived output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameHeader {
    /// Sequence number of the frame.
    pub seq: u32,
    /// Capture timestamp in nanoseconds.
    pub stamp_ns: u64,
    /// Name of the camera frame the image was captured in.
    pub frame_id: String,
}

/// Errors from wrapping a raw pixel buffer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("row stride {stride} is smaller than image width {width}")]
    StrideTooSmall { stride: usize, width: usize },
    #[error("pixel buffer holds {len} bytes, expected at least {expected}")]
    BufferTooShort { len: usize, expected: usize },
}

/// Borrowed 8-bit grayscale image with an explicit row stride.
///
/// The view is valid for one pipeline invocation; nothing downstream retains
/// it.
#[derive(Clone, Copy, Debug)]
pub struct GrayFrameView<'a> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [u8],
}

impl<'a> GrayFrameView<'a> {
    /// Wrap a raw pixel buffer, row-major with `stride` bytes per row.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, FrameError> {
        if stride < width {
            return Err(FrameError::StrideTooSmall { stride, width });
        }
        let expected = stride * height;
        if data.len() < expected {
            return Err(FrameError::BufferTooShort {
                len: data.len(),
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixels of row `y`, `width` bytes without the stride padding.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// The full underlying buffer, including stride padding.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// One incoming frame: pixels plus the pass-through header.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    pub header: FrameHeader,
    pub image: GrayFrameView<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_rows() {
        let data = vec![0u8; 10 * 4];
        let view = GrayFrameView::new(&data, 8, 4, 10).expect("valid view");
        assert_eq!(view.row(3).len(), 8);
    }

    #[test]
    fn rejects_stride_below_width() {
        let data = vec![0u8; 64];
        let err = GrayFrameView::new(&data, 8, 4, 6).unwrap_err();
        assert_eq!(
            err,
            FrameError::StrideTooSmall {
                stride: 6,
                width: 8
            }
        );
    }

    #[test]
    fn rejects_short_buffer() {
        let data = vec![0u8; 30];
        let err = GrayFrameView::new(&data, 8, 4, 8).unwrap_err();
        assert_eq!(
            err,
            FrameError::BufferTooShort {
                len: 30,
                expected: 32
            }
        );
    }
}
