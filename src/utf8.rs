// utf8.rs - Lenient UTF-8 decoding.
//
// Byte input is decoded lazily. Any byte that does not start a complete,
// well-formed sequence (RFC 3629: no overlongs, no surrogates, nothing
// above U+10FFFF) decodes to one U+FFFD and the decoder moves on by a
// single byte.

/// Substituted for each byte that does not start a valid sequence.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

// === Sequence Length Table ===
// Maps a lead byte to the length of the sequence it starts. Continuation
// bytes and the never-valid leads C0, C1 and F5..FF map to 1.

static ENC_LEN_UTF8: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

#[inline]
fn is_tail(b: u8) -> bool {
    (b & 0xc0) == 0x80
}

// Allowed range of the byte after `lead`; excludes overlongs, surrogates
// and codepoints past U+10FFFF.
#[inline]
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Decode one codepoint at the start of `bytes`.
///
/// Returns the codepoint and the number of bytes consumed, or `None` if
/// `bytes` is empty. Invalid input yields `(U+FFFD, 1)`.
pub fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let lead = *bytes.first()?;
    if lead < 0x80 {
        return Some((lead as char, 1));
    }

    let len = ENC_LEN_UTF8[lead as usize] as usize;
    if len == 1 || bytes.len() < len {
        return Some((REPLACEMENT_CHARACTER, 1));
    }

    let (lo, hi) = second_byte_range(lead);
    if !(lo..=hi).contains(&bytes[1]) || !bytes[2..len].iter().all(|&b| is_tail(b)) {
        return Some((REPLACEMENT_CHARACTER, 1));
    }

    let mut code = (lead as u32) & ((1u32 << (7 - len)) - 1);
    for &b in &bytes[1..len] {
        code = (code << 6) | ((b as u32) & 0x3f);
    }
    let ch = char::from_u32(code).unwrap_or(REPLACEMENT_CHARACTER);
    Some((ch, len))
}

// === Iterator ===

/// Lazy codepoint iterator over possibly malformed UTF-8.
///
/// Cloning is cheap and restarts from the clone point, so the scanner can
/// count and then scan the same input.
///
/// # Examples
///
/// ```
/// use breakscan::utf8::Utf8Chars;
///
/// let chars: String = Utf8Chars::new(b"a\xFFb").collect();
/// assert_eq!(chars, "a\u{FFFD}b");
/// ```
#[derive(Debug, Clone)]
pub struct Utf8Chars<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8Chars<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Utf8Chars { bytes }
    }

    /// Bytes not yet decoded.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Iterator for Utf8Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let (ch, len) = decode(self.bytes)?;
        self.bytes = &self.bytes[len..];
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        ((self.bytes.len() + 3) / 4, Some(self.bytes.len()))
    }
}

impl std::iter::FusedIterator for Utf8Chars<'_> {}

/// Number of codepoints `bytes` decodes to.
pub fn char_count(bytes: &[u8]) -> usize {
    Utf8Chars::new(bytes).count()
}
