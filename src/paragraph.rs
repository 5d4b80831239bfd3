// paragraph.rs - Paragraph boundary scanning.
//
// Paragraphs end at '\n', '\r', "\r\n" or U+2029. A "\r\n" pair is one
// delimiter. Offsets are in bytes.

use memchr::memchr3;

// U+2029 PARAGRAPH SEPARATOR in UTF-8.
const PS_UTF8: &[u8] = "\u{2029}".as_bytes();

/// Where the first paragraph of a text ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphBoundary {
    /// Byte offset of the delimiter, or the text length if there is none.
    pub delimiter: usize,
    /// Byte offset where the next paragraph starts, or the text length if
    /// nothing follows the delimiter.
    pub next_start: usize,
}

/// Locate the end of the first paragraph in `text`.
///
/// # Examples
///
/// ```
/// use breakscan::paragraph::find_paragraph_boundary;
///
/// let b = find_paragraph_boundary("one\r\ntwo");
/// assert_eq!((b.delimiter, b.next_start), (3, 5));
/// ```
pub fn find_paragraph_boundary(text: &str) -> ParagraphBoundary {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut from = 0;

    while let Some(found) = memchr3(b'\n', b'\r', PS_UTF8[0], &bytes[from..]) {
        let at = from + found;
        let delim_len = match bytes[at] {
            b'\n' => 1,
            b'\r' if bytes.get(at + 1) == Some(&b'\n') => 2,
            b'\r' => 1,
            _ if bytes[at..].starts_with(PS_UTF8) => PS_UTF8.len(),
            _ => {
                // Some other character with the same lead byte.
                from = at + 1;
                continue;
            }
        };
        return ParagraphBoundary {
            delimiter: at,
            next_start: (at + delim_len).min(len),
        };
    }

    ParagraphBoundary {
        delimiter: len,
        next_start: len,
    }
}

// === Iterator ===

/// One paragraph: its text and the delimiter that ended it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Byte offset of the paragraph within the whole text.
    pub offset: usize,
    /// Paragraph content, delimiter excluded.
    pub text: &'a str,
    /// The delimiter; empty for a final unterminated paragraph.
    pub delimiter: &'a str,
}

/// Iterator over the paragraphs of a text.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Paragraphs<'a> {
    pub fn new(text: &'a str) -> Self {
        Paragraphs { text, pos: 0 }
    }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = Paragraph<'a>;

    fn next(&mut self) -> Option<Paragraph<'a>> {
        let rest = self.text.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }
        let boundary = find_paragraph_boundary(rest);
        let para = Paragraph {
            offset: self.pos,
            text: &rest[..boundary.delimiter],
            delimiter: &rest[boundary.delimiter..boundary.next_start],
        };
        self.pos += boundary.next_start;
        Some(para)
    }
}

impl std::iter::FusedIterator for Paragraphs<'_> {}

/// Iterate over the paragraphs of `text`.
pub fn paragraphs(text: &str) -> Paragraphs<'_> {
    Paragraphs::new(text)
}
