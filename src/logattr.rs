// logattr.rs - Per-position logical attributes.
//
// A text of N codepoints has N+1 positions; position i sits just before
// codepoint i and position N is the end of the text. Each position carries
// one LogAttr. The record is a packed bit set so a whole buffer stays small
// and can be copied or compared in one go.

use bitflags::bitflags;

bitflags! {
    /// The thirteen boolean attributes of one text position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u16 {
        /// A line may be broken before this position.
        const LINE_BREAK = 1 << 0;
        /// A line must be broken before this position.
        const MANDATORY_BREAK = 1 << 1;
        /// Character-wrap fallback: breaking here does not split a cluster.
        const CHAR_BREAK = 1 << 2;
        /// The character at this position is whitespace.
        const WHITE = 1 << 3;
        /// The cursor may be placed here (grapheme boundary).
        const CURSOR_POSITION = 1 << 4;
        /// A word starts here.
        const WORD_START = 1 << 5;
        /// A word ends here.
        const WORD_END = 1 << 6;
        /// A sentence boundary falls here.
        const SENTENCE_BOUNDARY = 1 << 7;
        /// A sentence starts here.
        const SENTENCE_START = 1 << 8;
        /// A sentence ends here.
        const SENTENCE_END = 1 << 9;
        /// Backspace at this position deletes one character rather than
        /// the whole preceding cluster.
        const BACKSPACE_DELETES_CHARACTER = 1 << 10;
        /// The character at this position is a stretchable space.
        const EXPANDABLE_SPACE = 1 << 11;
        /// A UAX #29 word boundary falls here.
        const WORD_BOUNDARY = 1 << 12;
    }
}

macro_rules! attr_accessors {
    ($($get:ident, $set:ident => $flag:ident;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> bool {
                self.flags.contains(AttrFlags::$flag)
            }

            #[inline]
            pub fn $set(&mut self, value: bool) {
                self.flags.set(AttrFlags::$flag, value);
            }
        )*
    };
}

/// Logical attributes of one text position.
///
/// # Examples
///
/// ```
/// use breakscan::logattr::{AttrFlags, LogAttr};
///
/// let mut attr = LogAttr::default();
/// attr.set_line_break(true);
/// attr.set_cursor_position(true);
/// assert!(attr.is_line_break());
/// assert_eq!(attr.flags(), AttrFlags::LINE_BREAK | AttrFlags::CURSOR_POSITION);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogAttr {
    flags: AttrFlags,
}

impl LogAttr {
    /// A record with every attribute cleared.
    pub const fn new() -> Self {
        LogAttr {
            flags: AttrFlags::empty(),
        }
    }

    /// Build a record from a raw flag set.
    pub const fn from_flags(flags: AttrFlags) -> Self {
        LogAttr { flags }
    }

    /// The packed flag set.
    #[inline]
    pub fn flags(&self) -> AttrFlags {
        self.flags
    }

    /// True if every flag in `flags` is set.
    #[inline]
    pub fn contains(&self, flags: AttrFlags) -> bool {
        self.flags.contains(flags)
    }

    /// Set or clear every flag in `flags`.
    #[inline]
    pub fn set(&mut self, flags: AttrFlags, value: bool) {
        self.flags.set(flags, value);
    }

    attr_accessors! {
        is_line_break, set_line_break => LINE_BREAK;
        is_mandatory_break, set_mandatory_break => MANDATORY_BREAK;
        is_char_break, set_char_break => CHAR_BREAK;
        is_white, set_white => WHITE;
        is_cursor_position, set_cursor_position => CURSOR_POSITION;
        is_word_start, set_word_start => WORD_START;
        is_word_end, set_word_end => WORD_END;
        is_sentence_boundary, set_sentence_boundary => SENTENCE_BOUNDARY;
        is_sentence_start, set_sentence_start => SENTENCE_START;
        is_sentence_end, set_sentence_end => SENTENCE_END;
        backspace_deletes_character, set_backspace_deletes_character => BACKSPACE_DELETES_CHARACTER;
        is_expandable_space, set_expandable_space => EXPANDABLE_SPACE;
        is_word_boundary, set_word_boundary => WORD_BOUNDARY;
    }
}

impl From<AttrFlags> for LogAttr {
    fn from(flags: AttrFlags) -> Self {
        LogAttr { flags }
    }
}

// === Pending patches ===

/// A deferred write to an earlier (or the current) position.
///
/// Rules that revise an already-emitted decision record a patch instead of
/// reaching back into the buffer; the scanner applies all patches of a step
/// once the current position has been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttrPatch {
    pub index: usize,
    pub flag: AttrFlags,
    pub value: bool,
}

impl AttrPatch {
    pub fn new(index: usize, flag: AttrFlags, value: bool) -> Self {
        AttrPatch { index, flag, value }
    }

    /// Apply to `attrs`. Out-of-range indices are ignored.
    pub fn apply(self, attrs: &mut [LogAttr]) {
        if let Some(attr) = attrs.get_mut(self.index) {
            attr.set(self.flag, self.value);
        }
    }
}

// === Position queries ===

/// Positions at which every flag in `flag` is set.
pub fn positions(attrs: &[LogAttr], flag: AttrFlags) -> impl Iterator<Item = usize> + '_ {
    attrs
        .iter()
        .enumerate()
        .filter(move |(_, a)| a.contains(flag))
        .map(|(i, _)| i)
}

/// Grapheme cluster boundaries (cursor positions).
pub fn grapheme_boundaries(attrs: &[LogAttr]) -> impl Iterator<Item = usize> + '_ {
    positions(attrs, AttrFlags::CURSOR_POSITION)
}

/// UAX #29 word boundaries.
pub fn word_boundaries(attrs: &[LogAttr]) -> impl Iterator<Item = usize> + '_ {
    positions(attrs, AttrFlags::WORD_BOUNDARY)
}

/// Line break opportunities, mandatory ones included.
pub fn line_breaks(attrs: &[LogAttr]) -> impl Iterator<Item = usize> + '_ {
    positions(attrs, AttrFlags::LINE_BREAK)
}

/// Sentence boundaries.
pub fn sentence_boundaries(attrs: &[LogAttr]) -> impl Iterator<Item = usize> + '_ {
    positions(attrs, AttrFlags::SENTENCE_BOUNDARY)
}
