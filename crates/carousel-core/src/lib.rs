pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;

pub use config::{Animation, AppConfig, CarouselConfig, CellAlign, HeightMode};
pub use error::{Error, Result};
pub use layout::{CarouselLayout, LayoutPass, SlideLayout};
