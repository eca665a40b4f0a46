//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

/// Copies RGBA pixel data into packed RGB, dropping alpha.
///
/// # Panics
/// Panics if `src` is not a whole number of RGBA pixels or if `dst.len()` is not
/// `src.len() / 4 * 3`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of {}",
        src.len(),
        BYTES_PER_PIXEL
    );
    let expected_dst_len = (src.len() / BYTES_PER_PIXEL) * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(3))
    {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }
}

/// Packed RGB copy of an RGBA buffer.
///
/// # Panics
/// Panics if `src` is not a whole number of RGBA pixels.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0; (src.len() / BYTES_PER_PIXEL) * 3];
    copy_rgba_to_rgb(src, &mut dst);
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 255, 255, 255, // white
        ];
        let mut dst = vec![0; 12];

        copy_rgba_to_rgb(&src, &mut dst);

        assert_eq!(dst, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);
    }

    #[test]
    fn test_copy_rgba_to_rgb_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_rgba_to_rgb(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_alpha_is_dropped_whatever_its_value() {
        assert_eq!(rgba_to_rgb(&[10, 20, 30, 0, 40, 50, 60, 7]), vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_rgba_to_rgb_rejects_short_destination() {
        let mut dst = vec![0; 2];
        copy_rgba_to_rgb(&[1, 2, 3, 255], &mut dst);
    }
}
