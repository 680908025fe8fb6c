//! Visibility window, zoom scale and list extent.

use crate::config::CarouselConfig;

pub const MIN_ZOOM_SCALE: f64 = 0.0;
pub const MAX_ZOOM_SCALE: f64 = 1.0;

/// Whether `slide_index` falls in the window starting at the active slide.
///
/// The window does not wrap: near the end of a circular carousel it runs
/// past the last index instead of continuing at 0.
#[inline]
pub fn is_visible(slide_index: usize, config: &CarouselConfig) -> bool {
    slide_index >= config.current_slide
        && slide_index < config.current_slide.saturating_add(config.slides_to_show)
}

/// Scale factor for `slide_index`: the clamped zoom scale for inactive
/// slides under zoom, 1.0 otherwise.
#[inline]
pub fn zoom_scale(slide_index: usize, config: &CarouselConfig) -> f64 {
    if config.animation.is_zoom() && slide_index != config.current_slide {
        config.zoom_scale.min(MAX_ZOOM_SCALE).max(MIN_ZOOM_SCALE)
    } else {
        1.0
    }
}

/// Length of the slide list along the layout axis
#[inline]
pub fn list_extent(config: &CarouselConfig) -> f64 {
    let count = config.slide_count as f64;
    config.slide_width * count + config.cell_spacing * count
}
