//! Resume layout: walks the document top to bottom with a vertical cursor and
//! emits a per-page display list.
//!
//! Coordinates are millimetres from the top-left corner; `y` is the text
//! baseline. Every section reserves a minimum height with `check_page_break`
//! before drawing, so a heading is never left alone at the bottom of a page.

use crate::layout::font_metrics::{get_metrics, FontFace};
use crate::layout::page::PageConfig;
use crate::layout::wrap::wrap_text;
use crate::models::resume::{non_blank, ResumeDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const LINK_BLUE: Rgb = Rgb(0, 0, 255);

const SEPARATOR: &str = " | ";

// Font sizes (pt).
const NAME_SIZE: f32 = 24.0;
const HEADING_SIZE: f32 = 14.0;
const ITEM_TITLE_SIZE: f32 = 12.0;
const ITEM_SUBTITLE_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;

// Minimum free height (mm) a block needs before it is started.
const SUMMARY_RESERVE: f32 = 20.0;
const EXPERIENCE_RESERVE: f32 = 30.0;
const ENTRY_RESERVE: f32 = 25.0;
const EDUCATION_RESERVE: f32 = 20.0;
const SKILLS_RESERVE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text, already positioned. `x` is the left edge after alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub face: FontFace,
    pub size_pt: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    /// Horizontal line at `y` from `x1` to `x2`.
    Rule { x1: f32, x2: f32, y: f32, color: Rgb },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            DrawOp::Rule { .. } => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ResumeLayout {
    pub config: PageConfig,
    pub pages: Vec<Page>,
}

#[cfg(test)]
impl ResumeLayout {
    /// Every text run with the index of the page it sits on.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.texts().map(move |run| (i, run)))
    }

    pub fn find_text(&self, text: &str) -> Option<(usize, &TextRun)> {
        self.texts().find(|(_, run)| run.text == text)
    }
}

/// Drawing state for one render. A fresh composer is built per call.
struct Composer<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    y: f32,
    face: FontFace,
    size_pt: f32,
    color: Rgb,
}

impl<'a> Composer<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::default()],
            y: config.margin,
            face: FontFace::Regular,
            size_pt: BODY_SIZE,
            color: BLACK,
        }
    }

    fn set_font(&mut self, face: FontFace, size_pt: f32) {
        self.face = face;
        self.size_pt = size_pt;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Starts a new page if `required` more millimetres would cross the bottom margin.
    fn check_page_break(&mut self, required: f32) {
        if self.y + required > self.config.bottom_limit() {
            self.pages.push(Page::default());
            self.y = self.config.margin;
        }
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Draws one line at the cursor. `x` is the anchor for the given alignment.
    fn text(&mut self, text: &str, x: f32, align: Align) {
        let width = get_metrics(self.face).text_width(text, self.size_pt);
        let left = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let run = TextRun {
            text: text.to_string(),
            x: left,
            y: self.y,
            face: self.face,
            size_pt: self.size_pt,
            color: self.color,
        };
        self.push(DrawOp::Text(run));
    }

    fn rule(&mut self, x1: f32, x2: f32) {
        let op = DrawOp::Rule {
            x1,
            x2,
            y: self.y,
            color: BLACK,
        };
        self.push(op);
    }

    /// Word-wraps `text` to the content width in the current font, one line per
    /// `line_height`. Lines that no longer fit continue on a new page.
    fn wrapped(&mut self, text: &str) {
        let lines = wrap_text(
            text,
            get_metrics(self.face),
            self.size_pt,
            self.config.content_width(),
        );
        for line in lines {
            self.check_page_break(self.config.line_height);
            self.text(&line, self.config.margin, Align::Left);
            self.advance(self.config.line_height);
        }
    }

    fn heading(&mut self, title: &str) {
        self.set_font(FontFace::Bold, HEADING_SIZE);
        self.text(title, self.config.margin, Align::Left);
        self.advance(8.0);
    }

    fn finish(self) -> ResumeLayout {
        ResumeLayout {
            config: self.config.clone(),
            pages: self.pages,
        }
    }
}

/// Lays out the whole document. Sections without data are left out entirely.
pub fn compose(doc: &ResumeDocument, config: &PageConfig) -> ResumeLayout {
    let mut c = Composer::new(config);
    let lh = config.line_height;

    header(&mut c, doc);

    if let Some(summary) = non_blank(&doc.summary) {
        c.check_page_break(SUMMARY_RESERVE);
        c.heading("PROFESSIONAL SUMMARY");
        c.set_font(FontFace::Regular, BODY_SIZE);
        c.wrapped(summary);
        c.advance(8.0);
    }

    let entries: Vec<_> = doc
        .experience_entries
        .iter()
        .filter(|e| e.is_renderable())
        .collect();
    if !entries.is_empty() {
        c.check_page_break(EXPERIENCE_RESERVE);
        c.heading("WORK EXPERIENCE");

        for (i, entry) in entries.into_iter().enumerate() {
            // The heading reserve already covers the first entry's title and company.
            if i > 0 {
                c.check_page_break(ENTRY_RESERVE);
            }

            c.set_font(FontFace::Bold, ITEM_TITLE_SIZE);
            c.text(entry.job_title.trim(), config.margin, Align::Left);
            if let Some(range) = entry.date_range() {
                c.set_font(FontFace::Regular, BODY_SIZE);
                c.text(&range, config.right_edge(), Align::Right);
            }
            c.advance(lh);

            c.set_font(FontFace::Italic, ITEM_SUBTITLE_SIZE);
            c.text(entry.company_name.trim(), config.margin, Align::Left);
            c.advance(lh + 2.0);

            if let Some(description) = non_blank(&entry.description) {
                c.set_font(FontFace::Regular, BODY_SIZE);
                c.wrapped(description);
            }
            c.advance(5.0);
        }
    }

    let education = &doc.education;
    let degree = non_blank(&education.degree);
    let institution = non_blank(&education.institution);
    if degree.is_some() || institution.is_some() {
        c.check_page_break(EDUCATION_RESERVE);
        c.heading("EDUCATION");

        if let Some(degree) = degree {
            c.set_font(FontFace::Bold, ITEM_TITLE_SIZE);
            c.text(degree, config.margin, Align::Left);
            if let Some(year) = non_blank(&education.graduation_year) {
                c.set_font(FontFace::Regular, BODY_SIZE);
                c.text(year, config.right_edge(), Align::Right);
            }
            c.advance(lh);
        }
        if let Some(institution) = institution {
            c.set_font(FontFace::Italic, ITEM_SUBTITLE_SIZE);
            c.text(institution, config.margin, Align::Left);
            c.advance(lh);
        }
        if let Some(gpa) = non_blank(&education.gpa) {
            c.set_font(FontFace::Regular, BODY_SIZE);
            c.text(&format!("GPA: {gpa}"), config.margin, Align::Left);
            c.advance(lh);
        }
        c.advance(5.0);
    }

    if let Some(skills) = non_blank(&doc.skills) {
        c.check_page_break(SKILLS_RESERVE);
        c.heading("SKILLS");
        c.set_font(FontFace::Regular, BODY_SIZE);
        c.wrapped(skills);
    }

    c.finish()
}

/// Name, contact line, links line and the divider rule.
fn header(c: &mut Composer<'_>, doc: &ResumeDocument) {
    let info = &doc.personal_info;
    let config = c.config;
    let lh = config.line_height;

    c.set_font(FontFace::Bold, NAME_SIZE);
    let full_name = info.full_name();
    if let Some(name) = non_blank(&full_name) {
        c.text(name, config.center_x(), Align::Center);
    }
    c.advance(12.0);

    c.set_font(FontFace::Regular, BODY_SIZE);
    let contact: Vec<&str> = [&info.email, &info.phone, &info.address]
        .into_iter()
        .filter_map(|v| non_blank(v))
        .collect();
    if !contact.is_empty() {
        c.text(&contact.join(SEPARATOR), config.center_x(), Align::Center);
        c.advance(lh + 2.0);
    }

    let links: Vec<&str> = [&info.linkedin_url, &info.portfolio_url]
        .into_iter()
        .filter_map(|v| non_blank(v))
        .collect();
    if !links.is_empty() {
        c.set_text_color(LINK_BLUE);
        c.text(&links.join(SEPARATOR), config.center_x(), Align::Center);
        c.set_text_color(BLACK);
        c.advance(lh + 5.0);
    }

    c.rule(config.margin, config.right_edge());
    c.advance(8.0);
}
