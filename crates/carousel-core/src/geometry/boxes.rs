//! Box geometry for slides and the slide list.
//!
//! These are plain numbers for the host to apply; nothing here renders.

use serde::{Deserialize, Serialize};

use super::height::{slide_height, SlideHeight};
use super::transform::list_extent;
use super::Axis;
use crate::config::CarouselConfig;

/// Margins around a box, in layout units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Equal margins on both sides of `axis`, zero across it
    pub fn along(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                left: value,
                right: value,
                ..Default::default()
            },
            Axis::Vertical => Self {
                top: value,
                bottom: value,
                ..Default::default()
            },
        }
    }
}

/// Resolved width of a slide box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum SlideWidth {
    Fixed(f64),
    /// Fill the cross axis of a vertical list
    Full,
}

/// Where and how large a single slide is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideBox {
    pub left: f64,
    pub top: f64,
    pub width: SlideWidth,
    pub height: SlideHeight,
    pub margin: Margins,
    pub scale: f64,
}

impl SlideBox {
    /// Place a slide at `target_position` along the configured axis
    pub fn new(target_position: f64, scale: f64, config: &CarouselConfig) -> Self {
        let axis = Axis::from_vertical(config.vertical);
        let margin = Margins::along(axis, config.cell_spacing / 2.0);
        let height = slide_height(config);

        match axis {
            Axis::Horizontal => Self {
                left: target_position,
                top: 0.0,
                width: SlideWidth::Fixed(config.slide_width),
                height,
                margin,
                scale,
            },
            Axis::Vertical => Self {
                left: 0.0,
                top: target_position,
                width: SlideWidth::Full,
                height,
                margin,
                scale,
            },
        }
    }
}

/// Geometry of the list holding every slide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListBox {
    pub axis: Axis,
    /// Drag translation `(x, y)`
    pub translate: (f64, f64),
    /// Pulls the list outward by half a gap so edge slides sit flush
    pub margin: Margins,
    /// Length along the layout axis
    pub main_extent: f64,
    /// Length across the layout axis; `None` lets the host decide
    pub cross_extent: Option<f64>,
    pub dragging: bool,
}

impl ListBox {
    pub fn new(config: &CarouselConfig) -> Self {
        let axis = Axis::from_vertical(config.vertical);
        let cross_extent = match axis {
            Axis::Horizontal => Some(config.slide_height),
            Axis::Vertical => None,
        };

        Self {
            axis,
            translate: (config.delta_x, config.delta_y),
            margin: Margins::along(axis, -config.cell_spacing / 2.0),
            main_extent: list_extent(config),
            cross_extent,
            dragging: config.dragging,
        }
    }

    /// `(width, height)` of the list; `None` where the host decides
    pub fn size(&self) -> (Option<f64>, Option<f64>) {
        match self.axis {
            Axis::Horizontal => (Some(self.main_extent), self.cross_extent),
            Axis::Vertical => (self.cross_extent, Some(self.main_extent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeightMode;

    fn config() -> CarouselConfig {
        CarouselConfig {
            slide_width: 100.0,
            slide_height: 60.0,
            cell_spacing: 8.0,
            slide_count: 3,
            delta_x: -25.0,
            delta_y: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_horizontal_slide_box() {
        let slide = SlideBox::new(216.0, 0.85, &config());
        assert_eq!(slide.left, 216.0);
        assert_eq!(slide.top, 0.0);
        assert_eq!(slide.width, SlideWidth::Fixed(100.0));
        assert_eq!(slide.height, SlideHeight::Fixed(60.0));
        assert_eq!(slide.margin.left, 4.0);
        assert_eq!(slide.margin.right, 4.0);
        assert_eq!(slide.margin.top, 0.0);
        assert_eq!(slide.scale, 0.85);
    }

    #[test]
    fn test_vertical_slide_box() {
        let config = CarouselConfig {
            vertical: true,
            height_mode: HeightMode::Current,
            ..config()
        };
        let slide = SlideBox::new(128.0, 1.0, &config);
        assert_eq!(slide.left, 0.0);
        assert_eq!(slide.top, 128.0);
        assert_eq!(slide.width, SlideWidth::Full);
        assert_eq!(slide.height, SlideHeight::Fixed(60.0));
        assert_eq!(slide.margin.top, 4.0);
        assert_eq!(slide.margin.bottom, 4.0);
        assert_eq!(slide.margin.left, 0.0);
    }

    #[test]
    fn test_horizontal_list_box() {
        let list = ListBox::new(&config());
        assert_eq!(list.translate, (-25.0, 4.0));
        assert_eq!(list.margin.left, -4.0);
        assert_eq!(list.margin.right, -4.0);
        assert_eq!(list.size(), (Some(324.0), Some(60.0)));
        assert!(!list.dragging);
    }

    #[test]
    fn test_vertical_list_box() {
        let config = CarouselConfig {
            vertical: true,
            dragging: true,
            ..config()
        };
        let list = ListBox::new(&config);
        assert_eq!(list.margin.top, -4.0);
        assert_eq!(list.margin.left, 0.0);
        assert_eq!(list.size(), (None, Some(324.0)));
        assert!(list.dragging);
    }
}
