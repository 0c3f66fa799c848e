use crate::{CanvasError, CanvasResult, check_size};
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FastImage,
};
use image::RgbaImage;

/// Resamples `image` to exactly `width` x `height` with a Lanczos3 filter.
pub fn resize(image: &RgbaImage, width: u32, height: u32) -> CanvasResult<RgbaImage> {
    check_size(width, height)?;

    let (src_width, src_height) = image.dimensions();
    check_size(src_width, src_height)?;

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CanvasError::InvalidSize(width, height))?;

    let src_image = FastImage::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        PixelType::U8x4,
    )?;

    let mut dst = vec![0u8; len];
    let mut dst_image = FastImage::from_slice_u8(width, height, &mut dst, PixelType::U8x4)?;

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));

    Resizer::new().resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(width, height, dst).ok_or(CanvasError::ImageError(
        "New ImageBuffer failed".to_string(),
    ))
}

/// Doubles both dimensions.
pub fn upscale_2x(image: &RgbaImage) -> CanvasResult<RgbaImage> {
    let (width, height) = image.dimensions();
    match (width.checked_mul(2), height.checked_mul(2)) {
        (Some(w), Some(h)) => resize(image, w, h),
        _ => Err(CanvasError::InvalidSize(width, height)),
    }
}
