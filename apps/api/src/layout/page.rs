use serde::{Deserialize, Serialize};

/// Paper sizes the renderer can lay out on, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    A4,
    Letter,
}

impl PaperSize {
    /// (width, height) in millimetres, portrait.
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }
}

impl std::str::FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            "letter" => Ok(PaperSize::Letter),
            other => Err(format!("unknown paper size '{other}' (expected a4 or letter)")),
        }
    }
}

/// Fixed page model for the resume renderer. All lengths are millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub paper: PaperSize,
    pub page_width: f32,
    pub page_height: f32,
    /// Same margin on all four sides.
    pub margin: f32,
    /// Vertical advance per body line.
    pub line_height: f32,
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest cursor position content may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }

    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.page_width - self.margin
    }
}

/// Page config with a 20mm margin and 6mm line height.
pub fn default_page_config(paper: PaperSize) -> PageConfig {
    let (page_width, page_height) = paper.dimensions_mm();
    PageConfig {
        paper,
        page_width,
        page_height,
        margin: 20.0,
        line_height: 6.0,
    }
}
