use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame dimensions must be non-zero and even, got {width}x{height}")]
    Dimensions { width: u32, height: u32 },
    #[error("luma plane has {actual} bytes, expected {expected}")]
    LumaLength { expected: usize, actual: usize },
    #[error("chroma plane has {actual} bytes, expected {expected}")]
    ChromaLength { expected: usize, actual: usize },
    #[error("NV12 stream has {actual} bytes, expected {expected} for both planes")]
    StreamLength { expected: usize, actual: usize },
}

/// Pixel layouts a camera source can hand over.
///
/// Only two-plane NV12 (luma followed by interleaved U/V) reaches the
/// compositor; everything else is passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Nv12,
    Nv21,
    I420,
    Yv12,
    Yuyv,
    Uyvy,
    Rgb565,
    Rgb888,
    Rgba8888,
}

impl PixelFormat {
    pub fn is_supported(self) -> bool {
        matches!(self, PixelFormat::Nv12)
    }
}

/// Mutable, non-owning view over one 4:2:0 camera frame.
///
/// The luma plane holds `width * height` bytes in row-major order. The
/// chroma plane holds one interleaved (U, V) pair per 2x2 luma block, so
/// it is `width * height / 2` bytes long. The view borrows the camera's
/// buffers for the duration of a single callback.
#[derive(Debug)]
pub struct PlanarFrame<'a> {
    luma: &'a mut [u8],
    chroma: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> PlanarFrame<'a> {
    pub fn new(
        luma: &'a mut [u8],
        chroma: &'a mut [u8],
        width: u32,
        height: u32,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(FrameError::Dimensions { width, height });
        }
        let luma_len = width as usize * height as usize;
        if luma.len() != luma_len {
            return Err(FrameError::LumaLength {
                expected: luma_len,
                actual: luma.len(),
            });
        }
        if chroma.len() != luma_len / 2 {
            return Err(FrameError::ChromaLength {
                expected: luma_len / 2,
                actual: chroma.len(),
            });
        }
        Ok(Self {
            luma,
            chroma,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn luma(&self) -> &[u8] {
        self.luma
    }

    pub fn luma_mut(&mut self) -> &mut [u8] {
        self.luma
    }

    pub fn chroma(&self) -> &[u8] {
        self.chroma
    }

    pub fn chroma_mut(&mut self) -> &mut [u8] {
        self.chroma
    }

    /// Luma byte index of pixel `(x, y)`, or `None` when it lies off-frame.
    pub fn luma_index(&self, x: i64, y: i64) -> Option<usize> {
        let (w, h) = (self.width as i64, self.height as i64);
        if x < 0 || y < 0 || x >= w || y >= h {
            return None;
        }
        Some((x + y * w) as usize)
    }

    /// Index of the U byte of chroma sample `(cx, cy)`; V follows at `+ 1`.
    ///
    /// Chroma coordinates are luma coordinates halved on both axes.
    pub fn chroma_index(&self, cx: i64, cy: i64) -> Option<usize> {
        let (cw, ch) = (self.width as i64 / 2, self.height as i64 / 2);
        if cx < 0 || cy < 0 || cx >= cw || cy >= ch {
            return None;
        }
        Some(((cx + cy * cw) * 2) as usize)
    }
}

/// Owned NV12 buffer, for callers that hold a whole frame in memory
/// (file replay, tests) rather than borrowing a camera's planes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nv12Buffer {
    pub luma: Vec<u8>,
    pub chroma: Vec<u8>,
    width: u32,
    height: u32,
}

impl Nv12Buffer {
    /// Uniform frame: every luma byte is `y`, every chroma byte `c`.
    pub fn filled(width: u32, height: u32, y: u8, c: u8) -> Self {
        let luma_len = width as usize * height as usize;
        Self {
            luma: vec![y; luma_len],
            chroma: vec![c; luma_len / 2],
            width,
            height,
        }
    }

    /// Splits a raw NV12 byte stream (luma plane then chroma plane).
    pub fn from_bytes(data: &[u8], width: u32, height: u32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(FrameError::Dimensions { width, height });
        }
        let luma_len = width as usize * height as usize;
        let total = luma_len + luma_len / 2;
        if data.len() != total {
            return Err(FrameError::StreamLength {
                expected: total,
                actual: data.len(),
            });
        }
        Ok(Self {
            luma: data[..luma_len].to_vec(),
            chroma: data[luma_len..].to_vec(),
            width,
            height,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.luma.len() + self.chroma.len());
        out.extend_from_slice(&self.luma);
        out.extend_from_slice(&self.chroma);
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_frame(&mut self) -> Result<PlanarFrame<'_>, FrameError> {
        PlanarFrame::new(&mut self.luma, &mut self.chroma, self.width, self.height)
    }
}
