use crate::error::BoardError;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current time at the millisecond precision timestamps are stored with.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Identifier of a note, e.g. `n12`.
///
/// Ids are opaque strings once issued; only the allocator cares about the
/// `prefix + digits` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number after `prefix`, if this id is exactly `prefix` followed by digits.
    pub fn numeric_suffix(&self, prefix: &str) -> Option<u64> {
        let rest = self.0.strip_prefix(prefix)?;
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        rest.parse().ok()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The fixed board palette. Order matters: it is the order shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Yellow,
    Red,
    Teal,
    Blue,
    Green,
    LightYellow,
    Plum,
    Mint,
    Orange,
    Lavender,
    Pink,
    SkyBlue,
}

pub const PALETTE: [Color; 12] = [
    Color::Yellow,
    Color::Red,
    Color::Teal,
    Color::Blue,
    Color::Green,
    Color::LightYellow,
    Color::Plum,
    Color::Mint,
    Color::Orange,
    Color::Lavender,
    Color::Pink,
    Color::SkyBlue,
];

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Yellow => "#FFE066",
            Color::Red => "#FF6B6B",
            Color::Teal => "#4ECDC4",
            Color::Blue => "#45B7D1",
            Color::Green => "#96CEB4",
            Color::LightYellow => "#FFEAA7",
            Color::Plum => "#DDA0DD",
            Color::Mint => "#98D8C8",
            Color::Orange => "#FFB347",
            Color::Lavender => "#B19CD9",
            Color::Pink => "#FF8A95",
            Color::SkyBlue => "#87CEEB",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Teal => "Teal",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::LightYellow => "Light Yellow",
            Color::Plum => "Plum",
            Color::Mint => "Mint",
            Color::Orange => "Orange",
            Color::Lavender => "Lavender",
            Color::Pink => "Pink",
            Color::SkyBlue => "Sky Blue",
        }
    }

    /// RGB components of the hex value, for terminals that render truecolor.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = BoardError;

    /// Accepts the hex value (`#FFE066`, case-insensitive) or the display
    /// name with any casing and `-`, `_` or space as separators (`sky-blue`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let normalized: String = wanted
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        PALETTE
            .iter()
            .copied()
            .find(|color| {
                color.hex().eq_ignore_ascii_case(wanted)
                    || color.name().replace(' ', "").to_lowercase() == normalized
            })
            .ok_or_else(|| BoardError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub color: Color,
    pub z_index: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(id: NoteId, color: Color, z_index: i64) -> Self {
        Self {
            id,
            text: String::new(),
            color,
            z_index,
            created_at: now_millis(),
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// `deleted_at` is present exactly when the note is in the trash.
    pub fn is_consistent(&self) -> bool {
        self.is_deleted == self.deleted_at.is_some()
    }

    /// Copy of this note moved to the trash at `at`.
    pub fn trashed(&self, at: DateTime<Utc>) -> Self {
        Self {
            is_deleted: true,
            deleted_at: Some(at),
            ..self.clone()
        }
    }

    /// Copy of this note back on the board, stacked at `z_index`.
    pub fn restored(&self, z_index: i64) -> Self {
        Self {
            is_deleted: false,
            deleted_at: None,
            z_index,
            ..self.clone()
        }
    }
}

/// Grid geometry of one active note.
///
/// Field names follow the grid library's layout items (`i`, `minW`, …) so a
/// persisted layout can be handed to it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    #[serde(rename = "i")]
    pub id: NoteId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub min_w: u32,
    pub min_h: u32,
    pub max_w: u32,
    pub max_h: u32,
}
