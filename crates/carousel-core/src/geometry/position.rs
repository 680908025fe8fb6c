//! Target draw position of a slide.
//!
//! Slides are laid out left to right at `pitch * index`. With wrap-around
//! enabled, slides that fall too far behind or ahead of the visible window
//! are relocated to the opposite end so the sequence appears circular
//! without reordering the underlying slides.

use super::alignment::alignment_offset;
use super::direction::{resolve_direction, Direction};
use crate::config::CarouselConfig;

/// Positional nudge for the two neighbours of the active slide under zoom.
///
/// The slide just before the active one (cyclically) moves forward by
/// `slide_offset`, the slide just after moves back by the same amount.
pub fn zoom_offset(slide_index: usize, config: &CarouselConfig) -> f64 {
    if !config.animation.is_zoom() {
        return 0.0;
    }

    let current = config.current_slide;
    let last = config.slide_count.checked_sub(1);

    let is_previous = current == slide_index + 1 || (current == 0 && last == Some(slide_index));
    let is_next = slide_index == current + 1 || (last == Some(current) && slide_index == 0);

    if is_previous {
        config.slide_offset
    } else if is_next {
        -config.slide_offset
    } else {
        0.0
    }
}

/// Slide index currently sitting at the frame's alignment anchor
fn leading_slide_index(relative_position: f64, config: &CarouselConfig) -> usize {
    let raw = (relative_position / config.slide_width).floor().abs();
    if raw.is_nan() {
        return 0;
    }
    raw.min(config.last_index() as f64) as usize
}

/// How many slides may sit on each side of the leading slide before they
/// have to be relocated to the other end.
///
/// Counts are kept as `f64` so degenerate measurements (zero slide width)
/// flow through to the final non-finite check instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapWindow {
    /// Slide at the frame's alignment anchor
    pub start_slide_index: usize,
    /// Slides that never fit in the frame at the same time
    pub slides_out_of_view: f64,
    /// Share of the out-of-view slack placed before the anchor
    pub out_of_view_before: f64,
    /// Share of the out-of-view slack placed after the anchor
    pub out_of_view_after: f64,
    /// Direction from the leading slide to the active slide
    pub direction: Direction,
    /// Total slides allowed before the anchor
    pub slides_before: f64,
    /// Total slides allowed after the anchor
    pub slides_after: f64,
}

impl WrapWindow {
    pub fn new(start_slide_index: usize, alignment_offset: f64, config: &CarouselConfig) -> Self {
        let in_frame = (config.frame_width / config.slide_width).ceil();
        let slides_out_of_view = (config.slide_count as f64 - in_frame).max(0.0);

        let mut out_of_view_before = (slides_out_of_view / 2.0).floor();
        let mut out_of_view_after = slides_out_of_view - out_of_view_before;

        // Slack goes to the side the carousel is heading toward
        let direction = resolve_direction(
            start_slide_index,
            config.current_slide,
            config.is_wrapping_around,
        );
        if direction.is_backward() {
            std::mem::swap(&mut out_of_view_before, &mut out_of_view_after);
        }

        let in_view_before = (alignment_offset / config.slide_width).ceil();
        let in_view_after =
            ((config.frame_width - alignment_offset) / config.slide_width).ceil() - 1.0;

        Self {
            start_slide_index,
            slides_out_of_view,
            out_of_view_before,
            out_of_view_after,
            direction,
            slides_before: in_view_before + out_of_view_before,
            slides_after: in_view_after + out_of_view_after,
        }
    }

    /// Distance in slides between `slide_index` and the leading slide
    #[inline]
    pub fn distance(&self, slide_index: usize) -> usize {
        self.start_slide_index.abs_diff(slide_index)
    }

    /// Wrapped position for `slide_index`, or `None` when it stays put
    pub fn relocate(&self, slide_index: usize, config: &CarouselConfig) -> Option<f64> {
        let distance = self.distance(slide_index) as f64;
        let pitch = config.slide_pitch();

        if slide_index < self.start_slide_index {
            // Too far behind: draw it after the last slide
            (distance > self.slides_before)
                .then(|| pitch * (config.slide_count + slide_index) as f64)
        } else if distance > self.slides_after {
            // Too far ahead: draw it before the first slide
            let slots = config.slide_count.saturating_sub(slide_index) as f64;
            Some(-(pitch * slots))
        } else {
            None
        }
    }
}

/// Physical offset along the layout axis at which `slide_index` is drawn.
///
/// `scroll_offset` is the list's current offset along the layout axis
/// (see [`CarouselConfig::scroll_offset`]). Non-finite results degrade to
/// 0; a legitimate 0 is returned unchanged.
///
/// # Examples
/// ```
/// use carousel_core::config::CarouselConfig;
/// use carousel_core::geometry::target_position;
///
/// let config = CarouselConfig {
///     slide_width: 100.0,
///     frame_width: 300.0,
///     slide_count: 5,
///     current_slide: 2,
///     ..Default::default()
/// };
/// assert_eq!(target_position(4, 0.0, &config), 400.0);
/// ```
pub fn target_position(slide_index: usize, scroll_offset: f64, config: &CarouselConfig) -> f64 {
    let offset = zoom_offset(slide_index, config);
    let mut position = config.slide_pitch() * slide_index as f64;

    let alignment = alignment_offset(slide_index, config);
    let start_slide_index = leading_slide_index(scroll_offset - alignment, config);

    if config.wrap_around && slide_index != start_slide_index {
        let window = WrapWindow::new(start_slide_index, alignment, config);
        if let Some(wrapped) = window.relocate(slide_index, config) {
            tracing::debug!(
                slide_index,
                start_slide_index,
                from = position,
                to = wrapped,
                "Relocating slide for wrap-around"
            );
            position = wrapped;
        }
    }

    let target = position + offset;
    if target.is_finite() {
        target
    } else {
        tracing::warn!(slide_index, "Non-finite slide position, falling back to 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Animation, CellAlign};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn five_slides() -> CarouselConfig {
        CarouselConfig {
            slide_width: 100.0,
            frame_width: 300.0,
            slide_count: 5,
            ..Default::default()
        }
    }

    fn wrapping(slide_count: usize) -> CarouselConfig {
        CarouselConfig {
            slide_count,
            wrap_around: true,
            ..five_slides()
        }
    }

    #[test]
    fn test_no_wrap_uses_base_position() {
        let config = CarouselConfig {
            current_slide: 2,
            ..five_slides()
        };
        assert!(approx(target_position(4, 0.0, &config), 400.0));

        // Scroll offset never moves a slide when wrap-around is off
        for offset in [-1000.0, -150.0, 0.0, 250.0, 9000.0] {
            for i in 0..5 {
                assert!(approx(target_position(i, offset, &config), 100.0 * i as f64));
            }
        }
    }

    #[test]
    fn test_cell_spacing_widens_pitch() {
        let config = CarouselConfig {
            cell_spacing: 20.0,
            ..five_slides()
        };
        assert!(approx(target_position(3, 0.0, &config), 360.0));
    }

    #[test]
    fn test_zero_position_is_kept() {
        let config = wrapping(5);
        assert_eq!(target_position(0, 0.0, &config), 0.0);
    }

    #[test]
    fn test_wrap_moves_far_ahead_slide_before_start() {
        // Leading slide 0; slide 4 is past the slack after the window
        let config = wrapping(5);
        assert!(approx(target_position(4, 0.0, &config), -100.0));
        // Slides inside the window stay put
        for i in 1..4 {
            assert!(approx(target_position(i, 0.0, &config), 100.0 * i as f64));
        }
    }

    #[test]
    fn test_wrap_moves_far_behind_slide_after_end() {
        // Leading slide 4; slide 0 is behind by more than the slack
        let config = wrapping(5);
        assert!(approx(target_position(0, 400.0, &config), 100.0 * (5.0 + 0.0)));
        assert!(approx(target_position(2, 400.0, &config), 100.0 * (5.0 + 2.0)));
        assert!(approx(target_position(3, 400.0, &config), 300.0));
    }

    #[test]
    fn test_wrap_never_moves_leading_slide() {
        let config = wrapping(5);
        assert!(approx(target_position(3, 300.0, &config), 300.0));
    }

    #[test]
    fn test_direction_reallocates_slack() {
        // Six slides, three fit: slack of 3 splits into 1 before, 2 after
        let config = CarouselConfig {
            current_slide: 2,
            ..wrapping(6)
        };
        assert!(approx(target_position(4, 0.0, &config), 400.0));
        assert!(approx(target_position(5, 0.0, &config), -100.0));

        // Mid-wrap the direction flips and the slack moves before the anchor
        let config = CarouselConfig {
            is_wrapping_around: true,
            ..config
        };
        assert!(approx(target_position(4, 0.0, &config), -200.0));
    }

    #[test]
    fn test_wrap_window_values() {
        let config = CarouselConfig {
            current_slide: 2,
            is_wrapping_around: true,
            ..wrapping(6)
        };
        let window = WrapWindow::new(0, 0.0, &config);
        assert!(approx(window.slides_out_of_view, 3.0));
        assert_eq!(window.direction, Direction::Backward);
        assert!(approx(window.out_of_view_before, 2.0));
        assert!(approx(window.out_of_view_after, 1.0));
        assert!(approx(window.slides_before, 2.0));
        assert!(approx(window.slides_after, 3.0));
        assert_eq!(window.distance(4), 4);
        assert_eq!(window.relocate(3, &config), None);
    }

    #[test]
    fn test_no_slack_when_every_slide_fits() {
        let config = CarouselConfig {
            frame_width: 800.0,
            ..wrapping(5)
        };
        let window = WrapWindow::new(0, 0.0, &config);
        assert!(approx(window.slides_out_of_view, 0.0));
        assert!(approx(window.slides_after, 7.0));
        for i in 0..5 {
            assert!(approx(target_position(i, 0.0, &config), 100.0 * i as f64));
        }
    }

    #[test]
    fn test_center_alignment_shifts_leading_slide() {
        let config = CarouselConfig {
            cell_align: CellAlign::Center,
            ..wrapping(5)
        };
        // Anchor sits at 100, so a scroll offset of 100 leads with slide 0
        let window = WrapWindow::new(0, alignment_offset(0, &config), &config);
        assert!(approx(window.slides_before, 1.0 + 1.0));
        assert!(approx(window.slides_after, 1.0 + 1.0));
        assert!(approx(target_position(2, 100.0, &config), 200.0));
        assert!(approx(target_position(3, 100.0, &config), -200.0));
        assert!(approx(target_position(4, 100.0, &config), -100.0));
    }

    #[test]
    fn test_zoom_offset_neighbours() {
        let config = CarouselConfig {
            animation: Animation::Zoom,
            slide_offset: 20.0,
            current_slide: 2,
            ..five_slides()
        };
        assert!(approx(zoom_offset(1, &config), 20.0));
        assert!(approx(zoom_offset(3, &config), -20.0));
        for i in [0, 2, 4] {
            assert!(approx(zoom_offset(i, &config), 0.0));
        }
        assert!(approx(target_position(1, 0.0, &config), 120.0));
        assert!(approx(target_position(3, 0.0, &config), 280.0));
    }

    #[test]
    fn test_zoom_offset_wraps_cyclically() {
        let first = CarouselConfig {
            animation: Animation::Zoom,
            slide_offset: 15.0,
            current_slide: 0,
            ..five_slides()
        };
        assert!(approx(zoom_offset(4, &first), 15.0));
        assert!(approx(zoom_offset(1, &first), -15.0));

        let last = CarouselConfig {
            current_slide: 4,
            ..first
        };
        assert!(approx(zoom_offset(0, &last), -15.0));
        assert!(approx(zoom_offset(3, &last), 15.0));
    }

    #[test]
    fn test_zoom_offset_two_slides_prefers_previous() {
        // Slide 1 is both before and after slide 0; the forward nudge wins
        let config = CarouselConfig {
            animation: Animation::Zoom,
            slide_offset: 10.0,
            slide_count: 2,
            current_slide: 0,
            ..five_slides()
        };
        assert!(approx(zoom_offset(1, &config), 10.0));
        assert!(approx(zoom_offset(0, &config), 0.0));

        let second = CarouselConfig {
            current_slide: 1,
            ..config
        };
        assert!(approx(zoom_offset(0, &second), 10.0));
    }

    #[test]
    fn test_zoom_offset_single_slide_nudges_itself() {
        let config = CarouselConfig {
            animation: Animation::Zoom,
            slide_offset: 10.0,
            slide_count: 1,
            current_slide: 0,
            ..five_slides()
        };
        assert!(approx(zoom_offset(0, &config), 10.0));
        assert!(approx(target_position(0, 0.0, &config), 10.0));
    }

    #[test]
    fn test_zoom_offset_requires_zoom() {
        let config = CarouselConfig {
            slide_offset: 20.0,
            current_slide: 2,
            ..five_slides()
        };
        assert!(approx(zoom_offset(1, &config), 0.0));
        assert!(approx(zoom_offset(3, &config), 0.0));
    }

    #[test]
    fn test_non_finite_result_falls_back_to_zero() {
        let config = CarouselConfig {
            animation: Animation::Zoom,
            slide_offset: f64::NAN,
            current_slide: 2,
            ..five_slides()
        };
        assert_eq!(target_position(1, 0.0, &config), 0.0);

        let infinite = CarouselConfig {
            slide_width: f64::INFINITY,
            ..five_slides()
        };
        assert_eq!(target_position(2, 0.0, &infinite), 0.0);
    }

    #[test]
    fn test_zero_slide_width_stays_finite() {
        let config = CarouselConfig {
            slide_width: 0.0,
            cell_spacing: 10.0,
            ..wrapping(5)
        };
        for offset in [0.0, 35.0, -35.0] {
            for i in 0..5 {
                assert!(target_position(i, offset, &config).is_finite());
            }
        }
    }

    #[test]
    fn test_empty_carousel_does_not_panic() {
        let config = wrapping(0);
        assert!(target_position(0, 250.0, &config).is_finite());
    }
}
