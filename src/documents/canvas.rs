// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Page canvas measured in points from the top-left corner of an A4 page,
//! and a cursor-driven layout that paginates flowing content.

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 50.0;
const FOOTER_SPACE: f32 = 30.0;
const BODY_SIZE: f32 = 10.0;
const TABLE_SIZE: f32 = 9.0;
const ROW_HEIGHT: f32 = 15.0;
const VALUE_OFFSET: f32 = 170.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// `y` is the text baseline.
    Text {
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        text: String,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    pages: Vec<Page>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    fn push(&mut self, page: usize, el: Element) {
        if let Some(p) = self.pages.get_mut(page) {
            p.elements.push(el);
        }
    }

    pub fn text_on(&mut self, page: usize, x: f32, y: f32, size: f32, font: Font, text: &str) {
        self.push(
            page,
            Element::Text {
                x,
                y,
                size,
                font,
                text: text.to_string(),
            },
        );
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, font: Font, text: &str) {
        let last = self.pages.len() - 1;
        self.text_on(last, x, y, size, font, text);
    }

    pub fn rule(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        let last = self.pages.len() - 1;
        self.push(
            last,
            Element::Rule {
                x1,
                y1,
                x2,
                y2,
                width,
            },
        );
    }
}

/// Rough Helvetica advance width; good enough for alignment and truncation.
pub fn text_width(text: &str, size: f32, font: Font) -> f32 {
    let factor = match font {
        Font::Regular => 0.5,
        Font::Bold => 0.55,
    };
    text.chars().count() as f32 * size * factor
}

fn fit(text: &str, width: f32, size: f32, font: Font) -> String {
    if text_width(text, size, font) <= width {
        return text.to_string();
    }
    let per_char = text_width("x", size, font);
    let keep = ((width / per_char).floor() as usize).saturating_sub(2);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub title: String,
    pub x: f32,
    pub width: f32,
    pub align: Align,
}

impl Column {
    pub fn new(title: &str, x: f32, width: f32, align: Align) -> Self {
        Self {
            title: title.to_string(),
            x,
            width,
            align,
        }
    }
}

pub struct Layout {
    canvas: Canvas,
    y: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            y: MARGIN,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    fn bottom() -> f32 {
        PAGE_HEIGHT - MARGIN - FOOTER_SPACE
    }

    /// Starts a new page when `height` more points would not fit.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.y + height > Self::bottom() {
            self.canvas.add_page();
            self.y = MARGIN;
            return true;
        }
        false
    }

    fn line(&mut self, x: f32, size: f32, font: Font, text: &str) {
        let height = size * 1.4;
        self.ensure_space(height);
        self.canvas.text(x, self.y + size, size, font, text);
        self.y += height;
    }

    pub fn title(&mut self, text: &str) {
        self.line(MARGIN, 18.0, Font::Bold, text);
        self.y += 6.0;
    }

    pub fn heading(&mut self, text: &str) {
        self.ensure_space(30.0);
        self.y += 4.0;
        self.line(MARGIN, 12.0, Font::Bold, text);
    }

    pub fn text(&mut self, text: &str) {
        self.line(MARGIN, BODY_SIZE, Font::Regular, text);
    }

    /// Word-wrapped body text. Blank lines in `text` become paragraph gaps.
    pub fn paragraph(&mut self, text: &str) {
        let max = PAGE_WIDTH - 2.0 * MARGIN;
        for para in text.split('\n') {
            if para.trim().is_empty() {
                self.y += BODY_SIZE;
                continue;
            }
            let mut current = String::new();
            for word in para.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{} {}", current, word)
                };
                if text_width(&candidate, BODY_SIZE, Font::Regular) > max && !current.is_empty() {
                    self.text(&current);
                    current = word.to_string();
                } else {
                    current = candidate;
                }
            }
            if !current.is_empty() {
                self.text(&current);
            }
        }
    }

    /// Bold label with its value aligned in a second column.
    pub fn field(&mut self, label: &str, value: &str) {
        let height = BODY_SIZE * 1.5;
        self.ensure_space(height);
        let baseline = self.y + BODY_SIZE;
        self.canvas
            .text(MARGIN, baseline, BODY_SIZE, Font::Bold, label);
        self.canvas
            .text(MARGIN + VALUE_OFFSET, baseline, BODY_SIZE, Font::Regular, value);
        self.y += height;
    }

    pub fn spacer(&mut self, height: f32) {
        self.y += height;
    }

    pub fn rule(&mut self) {
        self.ensure_space(8.0);
        self.y += 4.0;
        self.canvas
            .rule(MARGIN, self.y, PAGE_WIDTH - MARGIN, self.y, 0.5);
        self.y += 4.0;
    }

    fn cell(&mut self, col: &Column, baseline: f32, font: Font, text: &str) {
        let text = fit(text, col.width, TABLE_SIZE, font);
        let x = match col.align {
            Align::Left => col.x,
            Align::Right => col.x + col.width - text_width(&text, TABLE_SIZE, font),
        };
        self.canvas.text(x, baseline, TABLE_SIZE, font, &text);
    }

    fn table_header(&mut self, columns: &[Column]) {
        self.ensure_space(ROW_HEIGHT * 2.0);
        let baseline = self.y + TABLE_SIZE;
        for col in columns {
            self.cell(col, baseline, Font::Bold, &col.title);
        }
        self.y += ROW_HEIGHT - 3.0;
        self.canvas
            .rule(MARGIN, self.y, PAGE_WIDTH - MARGIN, self.y, 0.75);
        self.y += 3.0;
    }

    /// Header repeats at the top of every page the table spills onto.
    pub fn table(&mut self, columns: &[Column], rows: &[Vec<String>]) {
        self.table_header(columns);
        if rows.is_empty() {
            self.line(MARGIN, TABLE_SIZE, Font::Regular, "No entries.");
            return;
        }
        for row in rows {
            if self.ensure_space(ROW_HEIGHT) {
                self.table_header(columns);
            }
            let baseline = self.y + TABLE_SIZE;
            for (col, value) in columns.iter().zip(row.iter()) {
                self.cell(col, baseline, Font::Regular, value);
            }
            self.y += ROW_HEIGHT;
        }
    }

    /// Stamps `footer` and "Page i of n" on every page.
    pub fn finish(mut self, footer: &str) -> Canvas {
        let total = self.canvas.page_count();
        let baseline = PAGE_HEIGHT - MARGIN + 10.0;
        for page in 0..total {
            self.canvas
                .text_on(page, MARGIN, baseline, 8.0, Font::Regular, footer);
            let label = format!("Page {} of {}", page + 1, total);
            let x = PAGE_WIDTH - MARGIN - text_width(&label, 8.0, Font::Regular);
            self.canvas
                .text_on(page, x, baseline, 8.0, Font::Regular, &label);
        }
        self.canvas
    }
}
