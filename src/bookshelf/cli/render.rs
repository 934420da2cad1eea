//! # Rendering
//!
//! Turns command results into terminal text. Layout math (column widths,
//! truncation) is Unicode-aware so titles in any script line up. Colors are
//! applied last and only when the output is a color-capable terminal.

use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::error::Result;
use bookshelf::model::Book;
use colored::{ColoredString, Colorize};
use std::io::IsTerminal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 24;
const NO_IMAGE: &str = "-";

pub(super) fn use_color() -> bool {
    std::io::stdout().is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize()
}

fn styled(text: String, color: bool, paint: fn(&str) -> ColoredString) -> String {
    if color {
        paint(&text).to_string()
    } else {
        text
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Aligned table of books, one per line, in catalog order.
pub(super) fn render_book_list(books: &[Book], color: bool) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|b| {
            [
                b.id.clone(),
                truncate_to_width(&b.title, TITLE_WIDTH),
                truncate_to_width(&b.author, AUTHOR_WIDTH),
                b.price.to_string(),
                b.image_url.clone().unwrap_or_else(|| NO_IMAGE.to_string()),
            ]
        })
        .collect();
    let header = ["ID", "TITLE", "AUTHOR", "PRICE", "IMAGE"].map(String::from);

    let mut widths = [0usize; 4];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&styled(format_row(&header, &widths), color, |s| s.bold()));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(row: &[String; 5], widths: &[usize; 4]) -> String {
    format!(
        "{}  {}  {}  {}  {}",
        pad_right(&row[0], widths[0]),
        pad_right(&row[1], widths[1]),
        pad_right(&row[2], widths[2]),
        pad_left(&row[3], widths[3]),
        row[4]
    )
    .trim_end()
    .to_string()
}

/// Every field of a single book.
pub(super) fn render_book_detail(book: &Book, color: bool) -> String {
    let label = |name: &str| styled(format!("{:<8}", name), color, |s| s.dimmed());
    let image = book.image_url.as_deref().unwrap_or(NO_IMAGE);

    format!(
        "{}{}\n{}{}\n{}{}\n{}{}\n{}{}\n",
        label("ID:"),
        book.id,
        label("Title:"),
        styled(book.title.clone(), color, |s| s.bold()),
        label("Author:"),
        book.author,
        label("Price:"),
        book.price,
        label("Image:"),
        image
    )
}

pub(super) fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
