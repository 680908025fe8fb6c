use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Alignment of a slide inside the frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for CellAlign {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(CellAlign::Left),
            "center" => Ok(CellAlign::Center),
            "right" => Ok(CellAlign::Right),
            other => Err(crate::Error::Config(format!("unknown cell alignment '{}'", other))),
        }
    }
}

impl fmt::Display for CellAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellAlign::Left => "left",
            CellAlign::Center => "center",
            CellAlign::Right => "right",
        };
        f.write_str(name)
    }
}

/// How the slide height is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightMode {
    /// Use the height of the first slide
    First,
    /// Follow the height of the current slide
    Current,
    /// Use the height of the tallest slide
    #[default]
    Max,
}

/// Transition styling applied to inactive slides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    None,
    Zoom,
}

impl Animation {
    #[inline]
    pub fn is_zoom(&self) -> bool {
        matches!(self, Animation::Zoom)
    }
}

/// Snapshot of everything a layout pass reads.
///
/// Supplied by the widget shell on every render. All measurements are in
/// layout units (pixels for a DOM host, cells for a terminal host).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Width of a single slide
    #[serde(default)]
    pub slide_width: f64,
    /// Height of a single slide, as measured by the shell
    #[serde(default)]
    pub slide_height: f64,
    /// Width of the visible frame
    #[serde(default)]
    pub frame_width: f64,
    /// Gap between adjacent slides
    #[serde(default)]
    pub cell_spacing: f64,
    /// Total number of slides
    #[serde(default)]
    pub slide_count: usize,
    /// Size of the visible window, in slides
    #[serde(default = "default_slides_to_show")]
    pub slides_to_show: usize,
    /// Index of the active slide
    #[serde(default)]
    pub current_slide: usize,
    /// Treat the slide sequence as circular
    #[serde(default)]
    pub wrap_around: bool,
    /// A wrap-triggered transition is in progress
    #[serde(default)]
    pub is_wrapping_around: bool,
    #[serde(default)]
    pub animation: Animation,
    /// Scale applied to inactive slides under zoom, clamped to [0, 1]
    #[serde(default = "default_zoom_scale")]
    pub zoom_scale: f64,
    /// Nudge applied to the neighbours of the active slide under zoom
    #[serde(default)]
    pub slide_offset: f64,
    /// Lay slides out top to bottom instead of left to right
    #[serde(default)]
    pub vertical: bool,
    #[serde(default)]
    pub cell_align: CellAlign,
    #[serde(default)]
    pub height_mode: HeightMode,
    /// Current drag translation along x
    #[serde(default)]
    pub delta_x: f64,
    /// Current drag translation along y
    #[serde(default)]
    pub delta_y: f64,
    /// Scroll offset along x, used when horizontal
    #[serde(default)]
    pub left: f64,
    /// Scroll offset along y, used when vertical
    #[serde(default)]
    pub top: f64,
    /// A drag gesture is in progress
    #[serde(default)]
    pub dragging: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_width: 0.0,
            slide_height: 0.0,
            frame_width: 0.0,
            cell_spacing: 0.0,
            slide_count: 0,
            slides_to_show: default_slides_to_show(),
            current_slide: 0,
            wrap_around: false,
            is_wrapping_around: false,
            animation: Animation::None,
            zoom_scale: default_zoom_scale(),
            slide_offset: 0.0,
            vertical: false,
            cell_align: CellAlign::Left,
            height_mode: HeightMode::Max,
            delta_x: 0.0,
            delta_y: 0.0,
            left: 0.0,
            top: 0.0,
            dragging: false,
        }
    }
}

impl CarouselConfig {
    /// Scroll offset along the layout axis
    #[inline]
    pub fn scroll_offset(&self) -> f64 {
        if self.vertical {
            self.top
        } else {
            self.left
        }
    }

    /// Distance between the leading edges of two adjacent slides
    #[inline]
    pub fn slide_pitch(&self) -> f64 {
        self.slide_width + self.cell_spacing
    }

    /// Index of the last slide, or 0 for an empty carousel
    #[inline]
    pub fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// Check the constraints the layout computations assume.
    ///
    /// The computations themselves never call this; they degrade to 0 on
    /// bad input instead. Callers that load a snapshot from the outside
    /// should validate it first.
    pub fn validate(&self) -> crate::Result<()> {
        let dimensions = [
            ("slide_width", self.slide_width),
            ("slide_height", self.slide_height),
            ("frame_width", self.frame_width),
            ("cell_spacing", self.cell_spacing),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::InvalidConfig(format!(
                    "{} must be a non-negative finite number, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("zoom_scale", self.zoom_scale),
            ("slide_offset", self.slide_offset),
            ("delta_x", self.delta_x),
            ("delta_y", self.delta_y),
            ("left", self.left),
            ("top", self.top),
        ] {
            if !value.is_finite() {
                return Err(crate::Error::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.slides_to_show == 0 {
            return Err(crate::Error::InvalidConfig(
                "slides_to_show must be at least 1".to_string(),
            ));
        }

        if self.slide_count > 0 && self.current_slide >= self.slide_count {
            return Err(crate::Error::InvalidConfig(format!(
                "current_slide {} is out of range for {} slides",
                self.current_slide, self.slide_count
            )));
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_slides_to_show() -> usize {
    1
}

fn default_zoom_scale() -> f64 {
    0.85
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let path = expand_tilde(path);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        let path = expand_tilde(path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }
}
