//! # semaforo
//!
//! Branded PDF reports for the Semáforo news-monitoring dashboard.
//!
//! This crate re-exports [`semaforo_core`]; the `semaforo` binary wraps it in
//! a small command line.
//!
//! ```no_run
//! use semaforo::{Orientation, ReportConfig, ReportDocumentBuilder};
//!
//! # fn main() -> Result<(), semaforo::ReportError> {
//! let config = ReportConfig::new("Acme", "Globex", "Monthly Report")
//!     .with_footer_text("Confidential");
//! let mut report = ReportDocumentBuilder::new(config, Orientation::Portrait)?;
//! let y = report.start_y();
//! report.add_text("Body", 20.0, y, semaforo::types::FontWeight::Normal, 11.0);
//! report.add_footer(1);
//! report.save_as("report.pdf")?;
//! # Ok(())
//! # }
//! ```

pub use semaforo_core::*;
