use anyhow::{Context, Result};
use clap::Args;

use carousel_core::geometry::{SlideHeight, SlideWidth};
use carousel_core::{Animation, AppConfig, CarouselConfig, CellAlign, LayoutPass};

/// Overrides applied on top of the configured snapshot
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// Active slide index
    #[arg(long)]
    pub current: Option<usize>,
    /// Scroll offset along the layout axis
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<f64>,
    /// Total number of slides
    #[arg(long)]
    pub slides: Option<usize>,
    /// Width of a single slide
    #[arg(long)]
    pub slide_width: Option<f64>,
    /// Width of the visible frame
    #[arg(long)]
    pub frame_width: Option<f64>,
    /// Slide alignment: left, center or right
    #[arg(long)]
    pub align: Option<String>,
    /// Enable wrap-around
    #[arg(long)]
    pub wrap: bool,
    /// A wrap-around transition is in progress
    #[arg(long)]
    pub wrapping: bool,
    /// Enable the zoom animation
    #[arg(long)]
    pub zoom: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl LayoutArgs {
    fn apply(&self, base: &CarouselConfig) -> Result<CarouselConfig> {
        let mut config = base.clone();

        if let Some(current) = self.current {
            config.current_slide = current;
        }
        if let Some(slides) = self.slides {
            config.slide_count = slides;
        }
        if let Some(width) = self.slide_width {
            config.slide_width = width;
        }
        if let Some(width) = self.frame_width {
            config.frame_width = width;
        }
        if let Some(offset) = self.offset {
            if config.vertical {
                config.top = offset;
            } else {
                config.left = offset;
            }
        }
        if let Some(align) = &self.align {
            config.cell_align = align.parse::<CellAlign>()?;
        }
        if self.wrap {
            config.wrap_around = true;
        }
        if self.wrapping {
            config.is_wrapping_around = true;
        }
        if self.zoom {
            config.animation = Animation::Zoom;
        }

        Ok(config)
    }
}

pub fn run(app_config: &AppConfig, args: &LayoutArgs) -> Result<()> {
    let config = args.apply(&app_config.carousel)?;
    config.validate().context("Cannot lay out carousel")?;

    let layout = LayoutPass::new(&config).compute();

    if args.json {
        println!("{}", layout.to_json()?);
        return Ok(());
    }

    if layout.slides.is_empty() {
        println!("No slides to lay out.");
        println!("\nSet slide_count in the config or pass --slides <n>.");
        return Ok(());
    }

    println!(
        "Layout ({} slides, current {}, offset {}):\n",
        config.slide_count,
        config.current_slide,
        config.scroll_offset()
    );
    println!(
        "  {:>5}  {:>10}  {:>7}  {:>5}  {:>8}  {:>8}",
        "index", "position", "visible", "scale", "width", "height"
    );

    for slide in &layout.slides {
        let width = match slide.slide_box.width {
            SlideWidth::Fixed(w) => format!("{}", w),
            SlideWidth::Full => "100%".to_string(),
        };
        let height = match slide.slide_box.height {
            SlideHeight::Fixed(h) => format!("{}", h),
            SlideHeight::Auto => "auto".to_string(),
        };
        let marker = if slide.index == config.current_slide { "*" } else { " " };

        println!(
            "{} {:>5}  {:>10.2}  {:>7}  {:>5.2}  {:>8}  {:>8}",
            marker,
            slide.index,
            slide.target_position,
            if slide.visible { "yes" } else { "no" },
            slide.scale,
            width,
            height
        );
    }

    let (width, height) = layout.list.size();
    let fmt_extent =
        |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "auto".to_string());
    println!(
        "\nList: {} x {}, translate ({}, {})",
        fmt_extent(width),
        fmt_extent(height),
        layout.list.translate.0,
        layout.list.translate.1
    );

    Ok(())
}
