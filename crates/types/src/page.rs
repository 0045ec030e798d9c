use crate::geometry::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Paper sizes, in millimetres as given for portrait orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    pub fn portrait_mm(self) -> Size {
        match self {
            PageSize::A4 => Size::new(210.0, 297.0),
        }
    }

    /// Page dimensions with width and height swapped for landscape.
    pub fn oriented_mm(self, orientation: Orientation) -> Size {
        let size = self.portrait_mm();
        match orientation {
            Orientation::Portrait => size,
            Orientation::Landscape => Size::new(size.height, size.width),
        }
    }
}
