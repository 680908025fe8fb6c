//! Slide geometry for carousel layouts
//!
//! Pure computations over an immutable [`CarouselConfig`] snapshot. Nothing
//! here holds state or caches results; every call is recomputed from its
//! inputs so it can run on each render.
//!
//! # Layers
//!
//! ## Collaborators
//! - `alignment` - Offset of the frame's alignment anchor
//! - `height` - Slide height policy
//!
//! ## Core
//! - `direction` - Movement direction between two slide indices
//! - `position` - Target draw position with wrap-around relocation
//! - `transform` - Visibility window, zoom scale and list extent
//!
//! ## Boxes
//! - `boxes` - Per-slide and list box geometry handed to the host
//!
//! [`CarouselConfig`]: crate::config::CarouselConfig

// Collaborators
pub mod alignment;
pub mod height;

// Core
pub mod direction;
pub mod position;
pub mod transform;

// Boxes
pub mod boxes;

use serde::{Deserialize, Serialize};

pub use alignment::alignment_offset;
pub use boxes::{ListBox, Margins, SlideBox, SlideWidth};
pub use direction::{resolve_direction, Direction};
pub use height::{slide_height, SlideHeight};
pub use position::{target_position, zoom_offset, WrapWindow};
pub use transform::{is_visible, list_extent, zoom_scale, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};

/// Layout axis slides are placed along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}
