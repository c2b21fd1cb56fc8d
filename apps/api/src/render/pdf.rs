//! Serialises a composed resume layout into PDF bytes.
//!
//! Text uses the base-14 Helvetica faces with WinAnsiEncoding, so no font
//! files are embedded. Characters outside that encoding fail the whole render.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::layout::font_metrics::{FontFace, PT_PER_MM};
use crate::layout::page::PageConfig;
use crate::render::composer::{DrawOp, Page, ResumeLayout, Rgb, TextRun};
use crate::render::RenderError;

/// Resource name for each face on every page.
const FONT_RESOURCES: [(FontFace, &[u8]); 3] = [
    (FontFace::Regular, b"F1"),
    (FontFace::Bold, b"F2"),
    (FontFace::Italic, b"F3"),
];

/// Stroke width of divider rules, in points.
const RULE_WIDTH_PT: f32 = 0.57;

fn resource_name(face: FontFace) -> Name<'static> {
    let name = FONT_RESOURCES
        .iter()
        .find(|(f, _)| *f == face)
        .map(|(_, n)| *n)
        .unwrap_or(b"F1");
    Name(name)
}

/// Writes all pages. Nothing is returned unless every page encodes cleanly.
pub fn write_pdf(layout: &ResumeLayout) -> Result<Vec<u8>, RenderError> {
    // Encode content streams first so a bad character aborts before any output.
    let contents = layout
        .pages
        .iter()
        .map(|page| page_content(page, &layout.config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let font_ids: Vec<(FontFace, Ref)> = FONT_RESOURCES
        .iter()
        .map(|(face, _)| (*face, alloc.bump()))
        .collect();
    let page_ids: Vec<(Ref, Ref)> = contents
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    for (face, id) in &font_ids {
        pdf.type1_font(*id)
            .base_font(Name(face.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let media_box = Rect::new(
        0.0,
        0.0,
        layout.config.page_width * PT_PER_MM,
        layout.config.page_height * PT_PER_MM,
    );

    for ((page_id, content_id), content) in page_ids.iter().zip(contents) {
        let mut page = pdf.page(*page_id);
        page.media_box(media_box)
            .parent(tree_id)
            .contents(*content_id);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for (face, id) in &font_ids {
            fonts.pair(resource_name(*face), *id);
        }
        fonts.finish();
        resources.finish();
        page.finish();

        pdf.stream(*content_id, &content);
    }

    Ok(pdf.finish())
}

fn page_content(page: &Page, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text(run) => draw_text(&mut content, run, config)?,
            DrawOp::Rule { x1, x2, y, color } => {
                let (r, g, b) = unit_rgb(*color);
                let y = to_pdf_y(*y, config);
                content
                    .set_stroke_rgb(r, g, b)
                    .set_line_width(RULE_WIDTH_PT)
                    .move_to(x1 * PT_PER_MM, y)
                    .line_to(x2 * PT_PER_MM, y)
                    .stroke();
            }
        }
    }
    Ok(content.finish())
}

fn draw_text(content: &mut Content, run: &TextRun, config: &PageConfig) -> Result<(), RenderError> {
    let encoded = encode_win_ansi(&run.text).map_err(|character| {
        RenderError::UnsupportedCharacter {
            character,
            text: run.text.clone(),
        }
    })?;
    let (r, g, b) = unit_rgb(run.color);
    content
        .begin_text()
        .set_font(resource_name(run.face), run.size_pt)
        .set_fill_rgb(r, g, b)
        .next_line(run.x * PT_PER_MM, to_pdf_y(run.y, config))
        .show(Str(&encoded))
        .end_text();
    Ok(())
}

/// Layout y grows downwards from the top edge; PDF y grows upwards from the bottom.
fn to_pdf_y(y: f32, config: &PageConfig) -> f32 {
    (config.page_height - y) * PT_PER_MM
}

fn unit_rgb(Rgb(r, g, b): Rgb) -> (f32, f32, f32) {
    (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Maps text to WinAnsiEncoding bytes. Returns the first character that has no
/// code in that encoding.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>, char> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => Ok(c as u8),
            '\u{A0}'..='\u{FF}' => Ok(c as u32 as u8),
            _ => win_ansi_special(c).ok_or(c),
        })
        .collect()
}

/// Codes 0x80..=0x9F, where WinAnsi differs from Latin-1.
fn win_ansi_special(c: char) -> Option<u8> {
    let code = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::{default_page_config, PaperSize};
    use crate::render::composer::BLACK;

    fn layout_with(texts: &[&str], pages: usize) -> ResumeLayout {
        let page = Page {
            ops: texts
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    DrawOp::Text(TextRun {
                        text: t.to_string(),
                        x: 20.0,
                        y: 20.0 + 6.0 * i as f32,
                        face: FontFace::Regular,
                        size_pt: 10.0,
                        color: BLACK,
                    })
                })
                .collect(),
        };
        ResumeLayout {
            config: default_page_config(PaperSize::A4),
            pages: vec![page; pages],
        }
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_encode_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Jane Doe").unwrap(), b"Jane Doe".to_vec());
    }

    #[test]
    fn test_encode_latin1_and_specials() {
        assert_eq!(encode_win_ansi("é").unwrap(), vec![0xE9]);
        assert_eq!(encode_win_ansi("€ – ’").unwrap(), vec![0x80, b' ', 0x96, b' ', 0x92]);
    }

    #[test]
    fn test_encode_rejects_outside_win_ansi() {
        assert_eq!(encode_win_ansi("Zoë 中"), Err('中'));
        assert_eq!(encode_win_ansi("tab\there"), Err('\t'));
    }

    #[test]
    fn test_write_pdf_structure() {
        let bytes = write_pdf(&layout_with(&["Hello", "World"], 2)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF") || bytes.ends_with(b"%%EOF\n"));
        assert_eq!(count(&bytes, b"/Type /Page") - count(&bytes, b"/Type /Pages"), 2);
        assert_eq!(count(&bytes, b"/Helvetica-Bold"), 1);
        assert_eq!(count(&bytes, b"/WinAnsiEncoding"), 3);
        assert!(count(&bytes, b"(Hello)") >= 2);
    }

    #[test]
    fn test_write_pdf_fails_wholesale_on_bad_character() {
        let err = write_pdf(&layout_with(&["Fine", "Emoji 🚀"], 1)).unwrap_err();
        match err {
            RenderError::UnsupportedCharacter { character, text } => {
                assert_eq!(character, '🚀');
                assert_eq!(text, "Emoji 🚀");
            }
        }
    }

    #[test]
    fn test_pdf_y_flips_axis() {
        let config = default_page_config(PaperSize::A4);
        assert!((to_pdf_y(297.0, &config)).abs() < 1e-4);
        assert!((to_pdf_y(0.0, &config) - 297.0 * PT_PER_MM).abs() < 1e-3);
    }
}
