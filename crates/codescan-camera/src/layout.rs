//! Mapping between captured image pixels and the on-screen preview.
//!
//! The preview is scaled to *fill* the view (center crop, never letterbox),
//! so parts of the captured image fall outside the view and a viewfinder
//! rectangle drawn on screen corresponds to a smaller region of the image.

use crate::LayoutError;
use codescan_core::{Point, Rect};

fn check_image(width: i32, height: i32) -> Result<(), LayoutError> {
    if width <= 0 || height <= 0 {
        return Err(LayoutError::ZeroImageDimension { width, height });
    }
    Ok(())
}

/// Size the preview must be drawn at so that it covers a `frame_w x frame_h`
/// view while keeping the image aspect ratio.
///
/// Exactly matching dimensions are returned unchanged.
pub fn compute_preview_size(
    image_w: i32,
    image_h: i32,
    frame_w: i32,
    frame_h: i32,
) -> Result<Point, LayoutError> {
    if image_w == frame_w && image_h == frame_h {
        return Ok(Point::new(frame_w, frame_h));
    }
    check_image(image_w, image_h)?;

    let (iw, ih, fw, fh) = (
        image_w as i64,
        image_h as i64,
        frame_w as i64,
        frame_h as i64,
    );
    let scaled_w = iw * fh / ih;
    if scaled_w < fw {
        Ok(Point::new(frame_w, (ih * fw / iw) as i32))
    } else {
        Ok(Point::new(scaled_w as i32, frame_h))
    }
}

/// Map `view_frame_rect` (view pixels) into image pixels.
///
/// `preview_size` is the size the preview is drawn at (see
/// [`compute_preview_size`]) and `view_size` the visible view. Edges are
/// rounded half away from zero; left/top are clamped at `0`, right/bottom at
/// the image width/height.
pub fn compute_image_frame_rect(
    image_w: i32,
    image_h: i32,
    view_frame_rect: Rect,
    preview_size: Point,
    view_size: Point,
) -> Result<Rect, LayoutError> {
    check_image(image_w, image_h)?;
    if preview_size.x <= 0 || preview_size.y <= 0 {
        return Err(LayoutError::ZeroPreviewDimension {
            width: preview_size.x,
            height: preview_size.y,
        });
    }

    let w_d = (preview_size.x as i64 - view_size.x as i64) / 2;
    let h_d = (preview_size.y as i64 - view_size.y as i64) / 2;
    let w_r = image_w as f32 / preview_size.x as f32;
    let h_r = image_h as f32 / preview_size.y as f32;
    // Float-to-int `as` saturates, so far out-of-range edges clamp below.
    let scale =
        |edge: i32, offset: i64, ratio: f32| ((edge as i64 + offset) as f32 * ratio).round() as i32;

    Ok(Rect::new(
        scale(view_frame_rect.left, w_d, w_r).max(0),
        scale(view_frame_rect.top, h_d, h_r).max(0),
        scale(view_frame_rect.right, w_d, w_r).min(image_w),
        scale(view_frame_rect.bottom, h_d, h_r).min(image_h),
    ))
}

/// Whether a display orientation turns the sensor image on its side.
#[inline]
pub fn is_portrait(orientation: u32) -> bool {
    orientation == 90 || orientation == 270
}
