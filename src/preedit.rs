//! Preedit buffer: the in-progress composition string, its cursor, and the
//! styled spans the server attaches to it.
//!
//! The buffer is mutated only by the bridge. Updates replace the text and
//! the span list wholesale; there is no incremental patching. The cursor is
//! stored as a character offset, spans as byte ranges, because that is what
//! the toolkit's rich-text layer consumes.

/// Semantic styling category supplied by the server per span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreeditFace {
    Default,
    NoCandidates,
    KeyPress,
    Unconvertible,
    Active,
}

impl PreeditFace {
    /// Decode the wire discriminant. Unknown values fall back to `Default`
    /// so the decode stays total.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::NoCandidates,
            2 => Self::KeyPress,
            3 => Self::Unconvertible,
            4 => Self::Active,
            _ => Self::Default,
        }
    }

    /// Fixed visual styling for this face.
    pub fn style(self) -> SpanStyle {
        match self {
            Self::NoCandidates => SpanStyle {
                underline: Some((Underline::Error, Rgb(0xffff, 0, 0))),
                foreground: None,
                bold: false,
            },
            Self::Unconvertible => {
                // halfway from 0 to 0xffff
                const GRAY: u16 = 0x7fff;
                SpanStyle {
                    underline: None,
                    foreground: Some(Rgb(GRAY, GRAY, GRAY)),
                    bold: false,
                }
            }
            Self::Active => SpanStyle {
                underline: None,
                foreground: Some(Rgb(39168, 12800, 52224)),
                bold: true,
            },
            Self::KeyPress | Self::Default => SpanStyle {
                underline: Some((Underline::Single, Rgb(0, 0, 0))),
                foreground: None,
                bold: false,
            },
        }
    }
}

/// 16-bit-per-channel color, as the toolkit's attribute layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u16, pub u16, pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    Single,
    Error,
}

/// Concrete visual attributes for one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    pub underline: Option<(Underline, Rgb)>,
    pub foreground: Option<Rgb>,
    pub bold: bool,
}

/// One styled byte range of the preedit text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpan {
    /// Byte offset of the span start.
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    pub style: SpanStyle,
}

/// One styled range as it arrives from the server, in character units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpan {
    pub start: i32,
    pub length: i32,
    pub face: PreeditFace,
}

impl FormatSpan {
    pub fn from_raw(start: i32, length: i32, face: i32) -> Self {
        Self {
            start,
            length,
            face: PreeditFace::from_raw(face),
        }
    }
}

/// The composition buffer owned by one session.
#[derive(Debug, Clone, Default)]
pub struct PreeditBuffer {
    text: String,
    cursor: usize,
    spans: Vec<AttributeSpan>,
}

impl PreeditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current composition text; empty means no preedit.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character offset into the text.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn spans(&self) -> &[AttributeSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.spans.clear();
    }

    /// Clear the buffer and hand back the text it held. Used by the flush
    /// path, which must emit the old text as a commit after clearing.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.spans.clear();
        text
    }

    /// Wholesale replacement of text, cursor, and spans.
    ///
    /// A cursor of `-1` means end-of-text and normalizes to the character
    /// length. Span offsets arrive in character units and are converted to
    /// byte ranges here.
    pub fn update(&mut self, text: &str, formats: &[FormatSpan], cursor_pos: i32) {
        let char_count = text.chars().count();

        self.text.clear();
        self.text.push_str(text);
        self.cursor = if cursor_pos < 0 {
            char_count
        } else {
            (cursor_pos as usize).min(char_count)
        };

        self.spans.clear();
        for format in formats {
            let start = format.start.max(0) as usize;
            let length = format.length.max(0) as usize;
            let (byte_start, byte_end) = byte_range_for_chars(text, char_count, start, length);
            self.spans.push(AttributeSpan {
                start: byte_start,
                end: byte_end,
                style: format.face.style(),
            });
        }
    }
}

/// Convert a (start, length) pair in character units into a byte range.
///
/// Out-of-range offsets fall back to being read as byte offsets directly,
/// clamped to the text length. The transport already guaranteed valid UTF-8,
/// so the fallback only fires for offsets past the end of the text.
fn byte_range_for_chars(
    text: &str,
    char_count: usize,
    start: usize,
    length: usize,
) -> (usize, usize) {
    let end = start.saturating_add(length);
    if start > char_count || end > char_count {
        return (start.min(text.len()), end.min(text.len()));
    }
    let byte_at = |char_offset: usize| {
        text.char_indices()
            .nth(char_offset)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len())
    };
    (byte_at(start), byte_at(end))
}
