// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Minimal PDF 1.4 writer for [`Canvas`] pages using the built-in
//! Helvetica faces, so no font data is embedded.

use std::fmt::Write as _;

use super::canvas::{Canvas, Element, Font, PAGE_HEIGHT, PAGE_WIDTH};

// Object numbers: 1 catalog, 2 page tree, 3/4 fonts, then (page, content) pairs.
const CATALOG: usize = 1;
const PAGES: usize = 2;
const FONT_REGULAR: usize = 3;
const FONT_BOLD: usize = 4;
const FIRST_PAGE: usize = 5;

/// WinAnsi string literal body. Characters outside the encoding become `?`.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '€' => out.push_str("\\200"),
            '\u{a0}'..='\u{ff}' => {
                let _ = write!(out, "\\{:03o}", ch as u32);
            }
            _ => out.push('?'),
        }
    }
    out
}

fn content_stream(elements: &[Element]) -> String {
    let mut s = String::new();
    for el in elements {
        match el {
            Element::Text {
                x,
                y,
                size,
                font,
                text,
            } => {
                let name = match font {
                    Font::Regular => "F1",
                    Font::Bold => "F2",
                };
                let _ = writeln!(
                    s,
                    "BT /{} {:.2} Tf {:.2} {:.2} Td ({}) Tj ET",
                    name,
                    size,
                    x,
                    PAGE_HEIGHT - y,
                    escape(text)
                );
            }
            Element::Rule {
                x1,
                y1,
                x2,
                y2,
                width,
            } => {
                let _ = writeln!(
                    s,
                    "{:.2} w {:.2} {:.2} m {:.2} {:.2} l S",
                    width,
                    x1,
                    PAGE_HEIGHT - y1,
                    x2,
                    PAGE_HEIGHT - y2
                );
            }
        }
    }
    s
}

struct Writer {
    out: Vec<u8>,
    offsets: Vec<usize>,
}

impl Writer {
    fn object(&mut self, num: usize, body: &str) {
        if self.offsets.len() <= num {
            self.offsets.resize(num + 1, 0);
        }
        self.offsets[num] = self.out.len();
        self.out
            .extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", num, body).as_bytes());
    }
}

pub fn render(canvas: &Canvas) -> Vec<u8> {
    let mut w = Writer {
        out: Vec::new(),
        offsets: vec![0],
    };
    w.out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let pages = canvas.pages();
    let page_obj = |i: usize| FIRST_PAGE + i * 2;

    w.object(CATALOG, &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES));
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_obj(i)))
        .collect();
    w.object(
        PAGES,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
    );
    w.object(
        FONT_REGULAR,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );
    w.object(
        FONT_BOLD,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
    );

    for (i, page) in pages.iter().enumerate() {
        let num = page_obj(i);
        w.object(
            num,
            &format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> /Contents {} 0 R >>",
                PAGES,
                PAGE_WIDTH,
                PAGE_HEIGHT,
                FONT_REGULAR,
                FONT_BOLD,
                num + 1
            ),
        );
        let stream = content_stream(&page.elements);
        w.object(
            num + 1,
            &format!(
                "<< /Length {} >>\nstream\n{}endstream",
                stream.len(),
                stream
            ),
        );
    }

    let xref_at = w.out.len();
    let count = w.offsets.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", count);
    for off in w.offsets.iter().skip(1) {
        let _ = writeln!(xref, "{:010} 00000 n ", off);
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
        count, CATALOG, xref_at
    );
    w.out.extend_from_slice(xref.as_bytes());
    w.out
}
