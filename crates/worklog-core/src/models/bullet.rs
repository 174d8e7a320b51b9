//! Bullet style enumeration and glyph resolution.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named bullet style selecting the literal prefix glyph for a rendered line.
///
/// Parsing is total: unknown tags resolve to [`BulletStyle::Dash`] so that
/// persisted documents and user input can never fail to render. Styles
/// serialize as their original tag strings (`"bullet"`, `">>"`, `"=>"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum BulletStyle {
    /// `● `
    #[default]
    Bullet,
    /// `• `
    Dot,
    /// `○ `
    Normal,
    /// `1. `, `2. `, ... from the 0-based sibling ordinal
    Number,
    /// `★ `
    Star,
    /// `■ `
    Square,
    /// `♦ `
    Diamond,
    /// `> `
    Chevron,
    /// `>> `
    DoubleChevron,
    /// `=> `
    Arrow,
    /// `==> `
    LongArrow,
    /// `-> `
    DashArrow,
    /// `- ` (also the fallback for unknown tags)
    Dash,
    /// `-- `
    DoubleDash,
}

impl BulletStyle {
    /// The tag string this style serializes as.
    pub fn tag(&self) -> &'static str {
        match self {
            BulletStyle::Bullet => "bullet",
            BulletStyle::Dot => "dot",
            BulletStyle::Normal => "normal",
            BulletStyle::Number => "number",
            BulletStyle::Star => "star",
            BulletStyle::Square => "square",
            BulletStyle::Diamond => "diamond",
            BulletStyle::Chevron => ">",
            BulletStyle::DoubleChevron => ">>",
            BulletStyle::Arrow => "=>",
            BulletStyle::LongArrow => "==>",
            BulletStyle::DashArrow => "->",
            BulletStyle::Dash => "-",
            BulletStyle::DoubleDash => "--",
        }
    }

    /// Resolve the literal line prefix for this style.
    ///
    /// `ordinal` is the 0-based position within the sibling list; only the
    /// [`BulletStyle::Number`] style uses it, rendering 1-based (`"1. "` for
    /// ordinal 0). Every other style returns its fixed glyph.
    pub fn glyph(&self, ordinal: usize) -> String {
        match self {
            BulletStyle::Bullet => "● ".to_string(),
            BulletStyle::Dot => "• ".to_string(),
            BulletStyle::Normal => "○ ".to_string(),
            BulletStyle::Number => format!("{}. ", ordinal + 1),
            BulletStyle::Star => "★ ".to_string(),
            BulletStyle::Square => "■ ".to_string(),
            BulletStyle::Diamond => "♦ ".to_string(),
            BulletStyle::Chevron => "> ".to_string(),
            BulletStyle::DoubleChevron => ">> ".to_string(),
            BulletStyle::Arrow => "=> ".to_string(),
            BulletStyle::LongArrow => "==> ".to_string(),
            BulletStyle::DashArrow => "-> ".to_string(),
            BulletStyle::Dash => "- ".to_string(),
            BulletStyle::DoubleDash => "-- ".to_string(),
        }
    }
}

impl From<&str> for BulletStyle {
    fn from(tag: &str) -> Self {
        match tag.trim() {
            "bullet" => BulletStyle::Bullet,
            "dot" => BulletStyle::Dot,
            "normal" => BulletStyle::Normal,
            "number" => BulletStyle::Number,
            "star" => BulletStyle::Star,
            "square" => BulletStyle::Square,
            "diamond" => BulletStyle::Diamond,
            ">" => BulletStyle::Chevron,
            ">>" => BulletStyle::DoubleChevron,
            "=>" => BulletStyle::Arrow,
            "==>" => BulletStyle::LongArrow,
            "->" => BulletStyle::DashArrow,
            "-" => BulletStyle::Dash,
            "--" => BulletStyle::DoubleDash,
            _ => BulletStyle::Dash,
        }
    }
}

impl From<String> for BulletStyle {
    fn from(tag: String) -> Self {
        BulletStyle::from(tag.as_str())
    }
}

impl From<BulletStyle> for String {
    fn from(style: BulletStyle) -> Self {
        style.tag().to_string()
    }
}

impl FromStr for BulletStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BulletStyle::from(s))
    }
}
