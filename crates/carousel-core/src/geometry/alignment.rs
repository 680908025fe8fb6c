//! Alignment anchor of the frame.

use crate::config::{CarouselConfig, CellAlign};

/// Offset of the frame's alignment anchor for `slide_index`.
///
/// The anchor is where the leading edge of the aligned slide sits inside
/// the frame. Cell spacing accumulated before the slide is subtracted so
/// the anchor tracks the slide rather than the gap.
pub fn alignment_offset(slide_index: usize, config: &CarouselConfig) -> f64 {
    let spacing = config.cell_spacing * slide_index as f64;
    let anchor = match config.cell_align {
        CellAlign::Left => 0.0,
        CellAlign::Center => (config.frame_width - config.slide_width) / 2.0,
        CellAlign::Right => config.frame_width - config.slide_width,
    };
    anchor - spacing
}
