//! Styled summary text -- a string plus the character ranges shown emphasized.
//!
//! Emphasis is a single style kind (italic-equivalent). How it is drawn is up
//! to the display layer; `to_markup` covers the common text surfaces.

use serde::{Deserialize, Serialize};

use crate::{SummaryError, SummaryResult};

/// Half-open character range `[start, end)` of a summary's text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmphasisRange {
    pub start: usize,
    pub end: usize,
}

impl EmphasisRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Rendered summary line. Ranges are ascending, non-overlapping and within
/// the text's char length; `emphasize` is the only way to add one.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StyledSummary {
    text: String,
    emphasis: Vec<EmphasisRange>,
}

impl StyledSummary {
    /// Text with no emphasis.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Vec::new(),
        }
    }

    /// Text emphasized end to end.
    pub fn emphasized(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            emphasis: vec![EmphasisRange { start: 0, end }],
        }
    }

    /// Text whose first `prefix_chars` characters are emphasized.
    pub fn emphasized_prefix(text: impl Into<String>, prefix_chars: usize) -> Self {
        let text = text.into();
        let end = prefix_chars.min(text.chars().count());
        Self {
            text,
            emphasis: vec![EmphasisRange { start: 0, end }],
        }
    }

    /// Add an emphasis range after the existing ones.
    pub fn emphasize(&mut self, start: usize, end: usize) -> SummaryResult<()> {
        let len = self.char_len();
        let after_last = self.emphasis.last().map_or(0, |r| r.end);
        if start > end || end > len || start < after_last {
            return Err(SummaryError::InvalidRange { start, end, len });
        }
        self.emphasis.push(EmphasisRange { start, end });
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emphasis(&self) -> &[EmphasisRange] {
        &self.emphasis
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Substrings covered by each emphasis range, in order.
    pub fn emphasized_parts(&self) -> Vec<String> {
        self.emphasis
            .iter()
            .map(|r| self.text.chars().skip(r.start).take(r.len()).collect())
            .collect()
    }

    /// Render for a text surface. Empty ranges produce no markers.
    pub fn to_markup(&self, style: MarkupStyle) -> String {
        if style == MarkupStyle::Plain {
            return self.text.clone();
        }
        let (open, close) = style.markers();
        let chars: Vec<char> = self.text.chars().collect();
        let mut out = String::with_capacity(self.text.len() + 8 * self.emphasis.len());
        let mut cursor = 0;

        for r in self.emphasis.iter().filter(|r| !r.is_empty()) {
            push_segment(&mut out, &chars[cursor..r.start], style);
            out.push_str(open);
            push_segment(&mut out, &chars[r.start..r.end], style);
            out.push_str(close);
            cursor = r.end;
        }
        push_segment(&mut out, &chars[cursor..], style);
        out
    }
}

fn push_segment(out: &mut String, chars: &[char], style: MarkupStyle) {
    for &ch in chars {
        match (style, ch) {
            (MarkupStyle::Html, '&') => out.push_str("&amp;"),
            (MarkupStyle::Html, '<') => out.push_str("&lt;"),
            (MarkupStyle::Html, '>') => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Text surface a styled summary is rendered for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    Plain,
    Markdown,
    #[default]
    Ansi,
    Html,
}

impl MarkupStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Ansi => "ansi",
            Self::Html => "html",
        }
    }

    fn markers(&self) -> (&'static str, &'static str) {
        match self {
            Self::Plain => ("", ""),
            Self::Markdown => ("_", "_"),
            Self::Ansi => ("\x1b[3m", "\x1b[23m"),
            Self::Html => ("<i>", "</i>"),
        }
    }
}

impl std::fmt::Display for MarkupStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MarkupStyle {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "ansi" => Ok(Self::Ansi),
            "html" => Ok(Self::Html),
            _ => Err(format!("Unknown markup style: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasized_covers_whole_text() {
        let s = StyledSummary::emphasized("Missed call");
        assert_eq!(s.emphasis(), &[EmphasisRange { start: 0, end: 11 }]);
        assert_eq!(s.emphasized_parts(), vec!["Missed call".to_string()]);
    }

    #[test]
    fn test_ranges_count_chars_not_bytes() {
        let s = StyledSummary::emphasized("Brouillon : été");
        assert_eq!(s.emphasis()[0].end, 15);
        assert!(s.text().len() > 15);
    }

    #[test]
    fn test_emphasized_prefix_clamped() {
        let s = StyledSummary::emphasized_prefix("abc", 10);
        assert_eq!(s.emphasis(), &[EmphasisRange { start: 0, end: 3 }]);
    }

    #[test]
    fn test_emphasize_rejects_invalid_ranges() {
        let mut s = StyledSummary::plain("hello world");
        assert!(matches!(s.emphasize(3, 2), Err(SummaryError::InvalidRange { .. })));
        assert!(s.emphasize(0, 12).is_err());
        s.emphasize(0, 5).unwrap();
        // Overlap with the previous range
        assert!(s.emphasize(4, 8).is_err());
        s.emphasize(6, 11).unwrap();
        assert_eq!(s.emphasis().len(), 2);
        assert_eq!(s.emphasized_parts(), vec!["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_markup_markdown_partial() {
        let s = StyledSummary::emphasized_prefix("Draft: hello", 6);
        assert_eq!(s.to_markup(MarkupStyle::Markdown), "_Draft:_ hello");
        assert_eq!(s.to_markup(MarkupStyle::Plain), "Draft: hello");
        assert_eq!(s.to_markup(MarkupStyle::Ansi), "\x1b[3mDraft:\x1b[23m hello");
    }

    #[test]
    fn test_markup_html_escapes_all_segments() {
        let mut s = StyledSummary::plain("<a> & <b>");
        s.emphasize(0, 3).unwrap();
        assert_eq!(s.to_markup(MarkupStyle::Html), "<i>&lt;a&gt;</i> &amp; &lt;b&gt;");
    }

    #[test]
    fn test_markup_skips_empty_ranges() {
        let s = StyledSummary::emphasized("");
        assert_eq!(s.to_markup(MarkupStyle::Markdown), "");
    }

    #[test]
    fn test_markup_style_from_str() {
        assert_eq!("md".parse::<MarkupStyle>().unwrap(), MarkupStyle::Markdown);
        assert_eq!("html".parse::<MarkupStyle>().unwrap(), MarkupStyle::Html);
        assert!("rtf".parse::<MarkupStyle>().is_err());
    }
}
