//! Foundation types shared by every Semáforo crate.
//!
//! All layout values are physical millimetres; conversion to PDF points
//! happens only at the render boundary (see [`geometry::mm_to_pt`]).

pub mod color;
pub mod geometry;
pub mod image;
pub mod metrics;
pub mod page;
pub mod text;

pub use color::Color;
pub use geometry::{mm_to_pt, pt_to_mm, Size};
pub use image::RasterImage;
pub use page::{Orientation, PageSize};
pub use text::{FontWeight, TextAlign};
