//! Slide height policy.

use serde::{Deserialize, Serialize};

use crate::config::{CarouselConfig, HeightMode};

/// Resolved height of a slide box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum SlideHeight {
    /// Exact height in layout units
    Fixed(f64),
    /// The slide sizes itself
    Auto,
}

/// Resolve the height each slide box should use.
///
/// Vertical layouts always need a fixed height so slides stack along the
/// axis. Horizontally, `first` and `max` pin every slide to the height the
/// shell measured; `current` leaves slides to size themselves while the
/// frame follows the active one.
pub fn slide_height(config: &CarouselConfig) -> SlideHeight {
    if config.vertical {
        return SlideHeight::Fixed(config.slide_height);
    }

    match config.height_mode {
        HeightMode::First | HeightMode::Max => SlideHeight::Fixed(config.slide_height),
        HeightMode::Current => SlideHeight::Auto,
    }
}
