//! BT.601 full-range conversion between RGB and YUV, as used by JPEG.

/// One pixel in YUV space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Yuv {
    pub const fn new(y: u8, u: u8, v: u8) -> Self {
        Self { y, u, v }
    }
}

fn clamp_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> Yuv {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    Yuv {
        y: clamp_u8(0.299 * r + 0.587 * g + 0.114 * b),
        u: clamp_u8(128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b),
        v: clamp_u8(128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b),
    }
}

pub fn yuv_to_rgb(yuv: Yuv) -> [u8; 3] {
    let y = yuv.y as f64;
    let u = yuv.u as f64 - 128.0;
    let v = yuv.v as f64 - 128.0;
    [
        clamp_u8(y + 1.402 * v),
        clamp_u8(y - 0.344136 * u - 0.714136 * v),
        clamp_u8(y + 1.772 * u),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::black(0, 0, 0, Yuv::new(0, 128, 128))]
    #[case::white(255, 255, 255, Yuv::new(255, 128, 128))]
    #[case::mid_gray(128, 128, 128, Yuv::new(128, 128, 128))]
    fn test_neutral_colors_have_neutral_chroma(
        #[case] r: u8,
        #[case] g: u8,
        #[case] b: u8,
        #[case] expected: Yuv,
    ) {
        assert_eq!(rgb_to_yuv(r, g, b), expected);
    }

    #[test]
    fn test_red_pushes_v_up() {
        let yuv = rgb_to_yuv(255, 0, 0);
        assert_eq!(yuv.y, 76);
        assert!(yuv.v > 200);
        assert!(yuv.u < 128);
    }

    #[test]
    fn test_round_trip_stays_close() {
        for &(r, g, b) in &[(200u8, 30u8, 90u8), (10, 240, 120), (90, 90, 250)] {
            let [r2, g2, b2] = yuv_to_rgb(rgb_to_yuv(r, g, b));
            assert!((r as i32 - r2 as i32).abs() <= 2);
            assert!((g as i32 - g2 as i32).abs() <= 2);
            assert!((b as i32 - b2 as i32).abs() <= 2);
        }
    }
}
