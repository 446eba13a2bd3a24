//! PDF export of an assessment report.
//!
//! Rendering happens in two steps. `layout_report` places every line of text on
//! a page (pure, no I/O). `render_pdf` then draws those pages with the builtin
//! Helvetica faces, so no font files are embedded.
//!
//! Page geometry: A4 portrait with a fixed 190mm content width. Rows that run
//! past the bottom margin continue on the next page.

use std::io::BufWriter;

use chrono::{NaiveDate, Utc};
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

use crate::report::error::ExportError;
use crate::report::font_metrics::{FontMetricTable, HELVETICA, HELVETICA_BOLD};
use crate::report::rows::Report;

const DOCUMENT_TITLE: &str = "Assessment Report";
const HEADING: &str = "Your Assessment:";
const FIELD_HEADER: &str = "Field";
const DETAILS_HEADER: &str = "Details";

/// Vertical padding above and below each table row.
const ROW_PADDING_MM: f32 = 1.5;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry and type sizes for the exported report.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_x_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
    /// Fixed content width shared by the label and detail columns.
    pub content_width_mm: f32,
    pub label_column_mm: f32,
    pub column_gap_mm: f32,
    pub heading_size_pt: f32,
    pub body_size_pt: f32,
    pub footer_size_pt: f32,
    pub line_height_mm: f32,
}

/// A4 portrait, 10mm side margins (190mm content width), 10pt body text.
pub fn a4_page_layout() -> PageLayout {
    PageLayout {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_x_mm: 10.0,
        margin_top_mm: 15.0,
        margin_bottom_mm: 15.0,
        content_width_mm: 190.0,
        label_column_mm: 50.0,
        column_gap_mm: 4.0,
        heading_size_pt: 14.0,
        body_size_pt: 10.0,
        footer_size_pt: 8.0,
        line_height_mm: 5.0,
    }
}

impl PageLayout {
    fn detail_x_mm(&self) -> f32 {
        self.margin_x_mm + self.label_column_mm + self.column_gap_mm
    }

    fn detail_column_mm(&self) -> f32 {
        self.content_width_mm - self.label_column_mm - self.column_gap_mm
    }

    fn bottom_limit_mm(&self) -> f32 {
        self.page_height_mm - self.margin_bottom_mm
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// A run of text positioned on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x_mm: f32,
    /// Baseline distance from the top edge of the page.
    pub y_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub texts: Vec<PlacedText>,
    /// Horizontal rules spanning the content width, measured from the top edge.
    pub rules_mm: Vec<f32>,
}

struct Cursor<'a> {
    layout: &'a PageLayout,
    pages: Vec<PageContent>,
    y_mm: f32,
}

impl<'a> Cursor<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            pages: vec![PageContent::default()],
            y_mm: layout.margin_top_mm,
        }
    }

    fn page(&mut self) -> &mut PageContent {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Moves down one line of `height_mm` and returns its baseline, breaking to
    /// a new page first if the line would cross the bottom margin.
    fn advance(&mut self, height_mm: f32) -> f32 {
        if self.y_mm + height_mm > self.layout.bottom_limit_mm() {
            self.pages.push(PageContent::default());
            self.y_mm = self.layout.margin_top_mm;
        }
        self.y_mm += height_mm;
        self.y_mm
    }

    /// Adds vertical space without breaking the page.
    fn skip(&mut self, height_mm: f32) {
        self.y_mm += height_mm;
    }

    fn text(&mut self, text: &str, x_mm: f32, y_mm: f32, size_pt: f32, bold: bool) {
        self.page().texts.push(PlacedText {
            text: text.to_string(),
            x_mm,
            y_mm,
            size_pt,
            bold,
        });
    }

    fn rule(&mut self, y_mm: f32) {
        self.page().rules_mm.push(y_mm);
    }
}

/// Lays out a report into pages. Rows render as a two-column Field/Details
/// table; when no rows parse, the raw text is printed as wrapped paragraphs.
pub fn layout_report(
    report: &Report,
    layout: &PageLayout,
    generated_on: NaiveDate,
) -> Vec<PageContent> {
    let mut cursor = Cursor::new(layout);
    let lh = layout.line_height_mm;

    let y = cursor.advance(lh * 1.6);
    cursor.text(HEADING, layout.margin_x_mm, y, layout.heading_size_pt, true);
    cursor.skip(lh * 0.6);

    if report.rows.is_empty() {
        for paragraph in report.raw.lines() {
            if paragraph.trim().is_empty() {
                cursor.skip(lh * 0.5);
                continue;
            }
            let lines = wrap_text(
                paragraph,
                layout.content_width_mm,
                &HELVETICA,
                layout.body_size_pt,
            );
            for line in lines {
                let y = cursor.advance(lh);
                cursor.text(&line, layout.margin_x_mm, y, layout.body_size_pt, false);
            }
        }
    } else {
        let y = cursor.advance(lh);
        cursor.text(FIELD_HEADER, layout.margin_x_mm, y, layout.body_size_pt, true);
        cursor.text(DETAILS_HEADER, layout.detail_x_mm(), y, layout.body_size_pt, true);
        cursor.rule(y + ROW_PADDING_MM);

        for row in &report.rows {
            let labels = wrap_text(
                &row.label,
                layout.label_column_mm,
                &HELVETICA_BOLD,
                layout.body_size_pt,
            );
            let details = wrap_text(
                &row.detail,
                layout.detail_column_mm(),
                &HELVETICA,
                layout.body_size_pt,
            );

            cursor.skip(ROW_PADDING_MM);
            for i in 0..labels.len().max(details.len()) {
                let y = cursor.advance(lh);
                if let Some(label) = labels.get(i) {
                    cursor.text(label, layout.margin_x_mm, y, layout.body_size_pt, true);
                }
                if let Some(detail) = details.get(i) {
                    cursor.text(detail, layout.detail_x_mm(), y, layout.body_size_pt, false);
                }
            }
            let y = cursor.y_mm + ROW_PADDING_MM;
            cursor.rule(y);
        }
    }

    let mut pages = cursor.pages;
    let total = pages.len();
    let footer_y = layout.page_height_mm - layout.margin_bottom_mm / 2.0;
    for (index, page) in pages.iter_mut().enumerate() {
        page.texts.push(PlacedText {
            text: format!("Generated {generated_on} - Page {} of {total}", index + 1),
            x_mm: layout.margin_x_mm,
            y_mm: footer_y,
            size_pt: layout.footer_size_pt,
            bold: false,
        });
    }
    pages
}

/// Greedy word wrap by measured glyph width: no line is wider than
/// `max_width_mm` when set in `font` at `size_pt`. Words wider than a line are
/// hard-broken between characters, keeping at least one character per line.
/// Always returns at least one (possibly empty) line.
fn wrap_text(text: &str, max_width_mm: f32, font: &FontMetricTable, size_pt: f32) -> Vec<String> {
    let fits = |s: &str| font.width_mm(s, size_pt) <= max_width_mm;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            let joined = format!("{current} {word}");
            if fits(&joined) {
                current = joined;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        for c in word.chars() {
            current.push(c);
            if current.chars().count() > 1 && !fits(&current) {
                current.pop();
                lines.push(std::mem::replace(&mut current, c.to_string()));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders a report to PDF bytes on A4, dated today (UTC).
pub fn render_pdf(report: &Report) -> Result<Vec<u8>, ExportError> {
    render_pdf_with(report, &a4_page_layout(), Utc::now().date_naive())
}

pub fn render_pdf_with(
    report: &Report,
    layout: &PageLayout,
    generated_on: NaiveDate,
) -> Result<Vec<u8>, ExportError> {
    let pages = layout_report(report, layout, generated_on);
    let width = Mm(layout.page_width_mm);
    let height = Mm(layout.page_height_mm);

    let (doc, first_page, first_layer) = PdfDocument::new(DOCUMENT_TITLE, width, height, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Font(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("Layer {}", index + 1))
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for placed in &page.texts {
            let font = if placed.bold { &bold } else { &regular };
            layer.use_text(
                placed.text.as_str(),
                placed.size_pt,
                Mm(placed.x_mm),
                Mm(layout.page_height_mm - placed.y_mm),
                font,
            );
        }

        for rule_y in &page.rules_mm {
            let y = Mm(layout.page_height_mm - rule_y);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(layout.margin_x_mm), y), false),
                    (
                        Point::new(Mm(layout.margin_x_mm + layout.content_width_mm), y),
                        false,
                    ),
                ],
                is_closed: false,
            });
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Save(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| ExportError::Save(e.to_string()))
}
