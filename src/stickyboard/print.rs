use chrono::{DateTime, Utc};
use colored::Colorize;
use stickyboard::model::{Color, LayoutEntry, Note};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const COLOR_WIDTH: usize = 14;
const TRAILER_WIDTH: usize = 16;
const EMPTY_TEXT: &str = "(empty)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Board notes in grid order, with their cell.
pub fn print_board(notes: &[Note], layouts: &[LayoutEntry]) {
    if layouts.is_empty() {
        println!("The board is empty.");
        return;
    }

    for entry in layouts {
        let Some(note) = notes.iter().find(|n| n.id == entry.id) else {
            continue;
        };
        let cell = format!("{}x{} @ {},{}", entry.w, entry.h, entry.x, entry.y);
        let trailer = format!("{:>width$}", cell, width = TRAILER_WIDTH);
        print_row(note, trailer.dimmed().to_string());
    }
}

/// Trashed notes, most recently deleted first.
pub fn print_trash(notes: &[Note]) {
    if notes.is_empty() {
        println!("Trash is empty.");
        return;
    }

    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));

    for note in sorted {
        let age = note.deleted_at.map(format_time_ago).unwrap_or_default();
        print_row(note, age.red().to_string());
    }
}

pub fn print_palette(palette: &[Color]) {
    for color in palette {
        println!(
            "{} {:<width$} {}",
            swatch(*color),
            color.name(),
            color.hex().dimmed(),
            width = COLOR_WIDTH
        );
    }
}

fn print_row(note: &Note, trailer: String) {
    let id_str = format!("{:<width$}", note.id.as_str(), width = ID_WIDTH);
    let color_str = format!("{:<width$}", note.color.name(), width = COLOR_WIDTH);

    let text: String = note
        .text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let fixed_width = ID_WIDTH + 2 + COLOR_WIDTH + 1 + TRAILER_WIDTH + 1;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let (text_display, shown_width) = if text.is_empty() {
        (EMPTY_TEXT.dimmed().to_string(), EMPTY_TEXT.width())
    } else {
        let truncated = truncate_to_width(&text, available);
        let width = truncated.width();
        (truncated, width)
    };
    let padding = available.saturating_sub(shown_width);

    println!(
        "{}{} {} {}{} {}",
        id_str.yellow(),
        swatch(note.color),
        color_str,
        text_display,
        " ".repeat(padding),
        trailer
    );
}

fn swatch(color: Color) -> String {
    let (r, g, b) = color.rgb();
    "  ".on_truecolor(r, g, b).to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TRAILER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        // wide glyphs count double
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let s = format_time_ago(Utc::now() - chrono::Duration::minutes(5));
        assert_eq!(s.width(), TRAILER_WIDTH);
        assert!(s.trim_start().starts_with("5 minutes"));
    }
}
