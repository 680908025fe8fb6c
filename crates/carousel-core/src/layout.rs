//! One layout pass over every slide.

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::geometry::{is_visible, target_position, zoom_scale, ListBox, SlideBox};

/// Computed placement of a single slide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    pub index: usize,
    pub target_position: f64,
    pub visible: bool,
    pub scale: f64,
    pub slide_box: SlideBox,
}

/// Result of a layout pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselLayout {
    pub slides: Vec<SlideLayout>,
    pub list: ListBox,
}

impl CarouselLayout {
    /// Indices of the slides inside the visible window
    pub fn visible_indices(&self) -> Vec<usize> {
        self.slides
            .iter()
            .filter(|slide| slide.visible)
            .map(|slide| slide.index)
            .collect()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Stateless layout pass bound to a configuration snapshot.
///
/// Nothing is memoized: computing twice with the same snapshot yields the
/// same layout, and the caller recomputes whenever the snapshot changes.
#[derive(Debug, Clone, Copy)]
pub struct LayoutPass<'a> {
    config: &'a CarouselConfig,
}

impl<'a> LayoutPass<'a> {
    pub fn new(config: &'a CarouselConfig) -> Self {
        Self { config }
    }

    /// Lay out a single slide at the snapshot's scroll offset
    pub fn slide(&self, index: usize) -> SlideLayout {
        let config = self.config;
        let target_position = target_position(index, config.scroll_offset(), config);
        let scale = zoom_scale(index, config);

        SlideLayout {
            index,
            target_position,
            visible: is_visible(index, config),
            scale,
            slide_box: SlideBox::new(target_position, scale, config),
        }
    }

    pub fn compute(&self) -> CarouselLayout {
        let slides: Vec<SlideLayout> = (0..self.config.slide_count)
            .map(|index| self.slide(index))
            .collect();

        tracing::debug!(
            slides = slides.len(),
            current = self.config.current_slide,
            "Computed carousel layout"
        );

        CarouselLayout {
            slides,
            list: ListBox::new(self.config),
        }
    }
}
