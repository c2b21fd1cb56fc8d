// Page geometry and text measurement for the resume renderer.
// Lengths are millimetres; font sizes are points.

pub mod font_metrics;
pub mod page;
pub mod wrap;

// Re-export the public API consumed by other modules (config, state, main).
pub use page::{default_page_config, PageConfig, PaperSize};
