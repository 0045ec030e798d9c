//! PDF canvas using lopdf.
//!
//! [`LopdfCanvas`] implements [`semaforo_traits::DocumentCanvas`]: drawing calls
//! accumulate as content-stream operations per page, and the document object
//! graph is assembled from scratch on every serialization.

mod canvas;
mod encoding;
mod images;
mod writer;

pub use canvas::LopdfCanvas;
pub use encoding::to_win_ansi;
