// scan.rs - The forward scan engine.
//
// One pass over the codepoints plus a virtual paragraph separator at the
// end. Each step classifies the character once and runs four rule sets
// (grapheme, word, line, sentence) against a handful of scalars carried
// from the previous step. Rules that revise an earlier position queue an
// AttrPatch; patches are applied once the current record is stored.

use std::iter;

use log::trace;
use smallvec::SmallVec;

use crate::break_table::{lookup_classes, BreakOpportunity};
use crate::classify::{
    backspace_deletes_character, ends_japanese_word, grapheme_break_type, is_expandable_space,
    is_grapheme_boundary, is_white, word_break_type, GraphemeBreakType, WordBreakType, WordType,
};
use crate::error::BreakError;
use crate::hangul::{composes, jamo_of, JamoType};
use crate::logattr::{AttrFlags, AttrPatch, LogAttr};
use crate::props::{BreakClass, GeneralCategory, PropertyOracle};

/// Appended after the last codepoint so the end position is scanned like
/// any other.
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

// === Sentence State ===

/// State of the sentence boundary machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceState {
    /// Between sentences (leading whitespace, separators).
    Outside,
    Body,
    /// Just saw '?' or '!'.
    Term,
    PostTermClose,
    PostTermSpace,
    PostTermSep,
    /// Just saw '.', which may or may not end the sentence.
    Dot,
    PostDotClose,
    PostDotSpace,
    PostDotOpen,
    /// Never entered: dot sentences do not absorb a trailing separator.
    PostDotSep,
}

// === Scanner ===

struct Scanner<'o> {
    oracle: &'o dyn PropertyOracle,

    prev_ch: char,
    prev_category: GeneralCategory,
    // Never Space: spaces leave the last non-space class in place.
    prev_break_class: BreakClass,
    prev_was_space: bool,
    prev_jamo: JamoType,
    prev_grapheme: GraphemeBreakType,

    prev_word: WordBreakType,
    prev_prev_word: WordBreakType,
    prev_word_index: Option<usize>,

    word_type: WordType,
    last_word_letter: char,
    base_character: char,

    sentence: SentenceState,
    possible_sentence_end: Option<usize>,
    possible_sentence_boundary: Option<usize>,

    patches: SmallVec<[AttrPatch; 4]>,
}

impl<'o> Scanner<'o> {
    fn new(oracle: &'o dyn PropertyOracle) -> Self {
        Scanner {
            oracle,
            prev_ch: '\0',
            prev_category: GeneralCategory::ParagraphSeparator,
            prev_break_class: BreakClass::Unknown,
            prev_was_space: false,
            prev_jamo: JamoType::NoJamo,
            prev_grapheme: GraphemeBreakType::Other,
            prev_word: WordBreakType::Other,
            prev_prev_word: WordBreakType::Other,
            prev_word_index: None,
            word_type: WordType::None,
            last_word_letter: '\0',
            base_character: '\0',
            sentence: SentenceState::Outside,
            possible_sentence_end: None,
            possible_sentence_boundary: None,
            patches: SmallVec::new(),
        }
    }

    /// Compute the record for position `i`, holding `ch`, with `next_ch`
    /// as one codepoint of lookahead.
    fn step(&mut self, i: usize, ch: char, next_ch: char) -> LogAttr {
        let props = self.oracle.classify(ch);
        let category = props.category;
        let class = props.break_class;
        let jamo = jamo_of(class);
        let makes_syllable = composes(self.prev_jamo, jamo);

        let mut attr = LogAttr::new();
        attr.set_white(is_white(ch, category));
        attr.set_expandable_space(is_expandable_space(ch));

        // Grapheme clusters
        let grapheme = grapheme_break_type(ch, category, makes_syllable);
        let at_grapheme =
            is_grapheme_boundary(self.prev_ch, self.prev_grapheme, ch, grapheme);
        self.prev_grapheme = grapheme;
        attr.set_cursor_position(at_grapheme);
        attr.set_backspace_deletes_character(
            at_grapheme && backspace_deletes_character(self.base_character),
        );

        if at_grapheme {
            let word = word_break_type(ch, category, class, props.script);
            let at_word = self.word_boundary(i, word);
            attr.set_word_boundary(at_word);

            self.line_break(ch, class, makes_syllable, &mut attr);
        }

        if class == BreakClass::Space {
            self.prev_was_space = true;
        } else {
            self.prev_break_class = class;
            self.prev_was_space = false;
            self.prev_jamo = jamo;
        }

        self.word_start_end(ch, category, &mut attr);
        self.sentence_boundary(i, ch, next_ch, category, &mut attr);

        self.prev_category = category;
        self.prev_ch = ch;
        if !category.is_mark() {
            self.base_character = ch;
        }

        attr
    }

    // === Word boundaries ===

    fn word_boundary(&mut self, i: usize, word: WordBreakType) -> bool {
        use WordBreakType::*;

        let after_newline = self.prev_word == NewlineCrLf
            && self.prev_word_index.map_or(false, |p| p + 1 == i);

        let boundary = if after_newline || word == NewlineCrLf {
            true
        } else if word == ExtendFormat {
            false
        } else if self.prev_word.is_alnum_run() && word.is_alnum_run() {
            false
        } else if self.prev_word.is_katakana_run() && word.is_katakana_run() {
            false
        } else if self.prev_prev_word == ALetter
            && word == ALetter
            && matches!(self.prev_word, MidLetter | MidNumLet)
        {
            self.clear_previous_word_boundary();
            false
        } else if self.prev_prev_word == Numeric
            && word == Numeric
            && matches!(self.prev_word, MidNum | MidNumLet)
        {
            self.clear_previous_word_boundary();
            false
        } else {
            true
        };

        if word != ExtendFormat {
            self.prev_prev_word = self.prev_word;
            self.prev_word = word;
            self.prev_word_index = Some(i);
        }
        boundary
    }

    // The middle token of a letter-mid-letter or digit-mid-digit triple is
    // not a boundary after all.
    fn clear_previous_word_boundary(&mut self) {
        if let Some(index) = self.prev_word_index {
            self.patches
                .push(AttrPatch::new(index, AttrFlags::WORD_BOUNDARY, false));
        }
    }

    fn word_start_end(&mut self, ch: char, category: GeneralCategory, attr: &mut LogAttr) {
        match self.word_type {
            WordType::None => {
                if category.is_letter() {
                    self.word_type = WordType::Letters;
                } else if category.is_number() {
                    self.word_type = WordType::Numbers;
                } else {
                    return;
                }
                self.last_word_letter = ch;
                attr.set_word_start(true);
            }
            WordType::Letters | WordType::Numbers => {
                if category.is_mark() || category == GeneralCategory::Format {
                    // absorbed into the word
                } else if category.is_letter() {
                    if self.word_type == WordType::Letters
                        && ends_japanese_word(self.last_word_letter, ch)
                    {
                        attr.set_word_end(true);
                    }
                    self.last_word_letter = ch;
                } else if category.is_number() {
                    self.last_word_letter = ch;
                } else {
                    attr.set_word_end(true);
                    self.word_type = WordType::None;
                }
            }
        }
    }

    // === Line breaks ===

    fn line_break(
        &mut self,
        ch: char,
        class: BreakClass,
        makes_syllable: bool,
        attr: &mut LogAttr,
    ) {
        use BreakClass::*;
        use BreakOpportunity::*;

        // Breaking is always possible between clusters unless prohibited.
        attr.set_char_break(true);

        let current = if self.prev_was_space && class == CombiningMark {
            Ideographic
        } else {
            class
        };

        let prev = match self.prev_break_class {
            c if c.is_hangul() => Ideographic,
            c if c.is_alphabetic_fallback() => Alphabetic,
            c => c,
        };

        let op = match prev {
            Mandatory | LineFeed | NextLine => {
                attr.set(AttrFlags::LINE_BREAK | AttrFlags::MANDATORY_BREAK, true);
                AlreadyHandled
            }
            CarriageReturn => {
                if ch != '\n' {
                    attr.set(AttrFlags::LINE_BREAK | AttrFlags::MANDATORY_BREAK, true);
                }
                AlreadyHandled
            }
            Contingent | Surrogate => Allowed,
            _ => match current {
                // These pile up at line ends and get elided.
                Mandatory | LineFeed | CarriageReturn | NextLine | Space => Prohibited,
                Contingent | Surrogate => Allowed,
                c if c.is_hangul() => {
                    if makes_syllable {
                        IfSpaces
                    } else {
                        Allowed
                    }
                }
                c if c.is_alphabetic_fallback() => pair(prev, Alphabetic),
                c => pair(prev, c),
            },
        };

        match op {
            Prohibited => attr.set_char_break(false),
            IfSpaces => {
                if self.prev_was_space {
                    attr.set_line_break(true);
                }
            }
            Allowed => attr.set_line_break(true),
            AlreadyHandled => {}
        }
    }

    // === Sentence boundaries ===

    fn sentence_boundary(
        &mut self,
        i: usize,
        ch: char,
        next_ch: char,
        category: GeneralCategory,
        attr: &mut LogAttr,
    ) {
        use GeneralCategory as Gc;
        use SentenceState::*;

        // Break after separators, keeping "\r\n" together.
        if self.prev_category.is_hard_separator() && !(ch == '\r' && next_ch == '\n') {
            attr.set_sentence_boundary(true);
        }
        // Break before separators, likewise.
        if category.is_hard_separator() && !(ch == '\n' && self.prev_ch == '\r') {
            attr.set_sentence_boundary(true);
        }

        let continues_term = category == Gc::ClosePunctuation || matches!(ch, '.' | ',' | '?' | '!');
        let crlf = self.prev_ch == '\r' && ch == '\n';

        match self.sentence {
            Outside => {
                if !is_sentence_gap(category) {
                    attr.set_sentence_start(true);
                    self.sentence = Body;
                }
            }
            Body => {
                if attr.is_sentence_boundary() {
                    attr.set_sentence_end(true);
                    self.maybe_start_new_sentence(category, attr);
                } else if ch == '.' {
                    self.sentence = Dot;
                } else if ch == '?' || ch == '!' {
                    self.sentence = Term;
                }
            }
            Term | PostTermClose => {
                if continues_term {
                    self.sentence = PostTermClose;
                } else if category == Gc::SpaceSeparator {
                    attr.set_sentence_end(true);
                    self.sentence = PostTermSpace;
                } else if category.is_line_or_paragraph_separator() {
                    attr.set_sentence_end(true);
                    // One separator may be absorbed after close punctuation.
                    if self.sentence == PostTermClose {
                        attr.set_sentence_boundary(false);
                    }
                    self.sentence = PostTermSep;
                } else {
                    attr.set(AttrFlags::SENTENCE_END | AttrFlags::SENTENCE_BOUNDARY, true);
                    self.maybe_start_new_sentence(category, attr);
                }
            }
            PostTermSpace => {
                if category == Gc::SpaceSeparator {
                    // stay
                } else if category.is_line_or_paragraph_separator() {
                    attr.set_sentence_boundary(false);
                    self.sentence = PostTermSep;
                } else {
                    attr.set_sentence_boundary(true);
                    self.maybe_start_new_sentence(category, attr);
                }
            }
            PostTermSep => {
                if !crlf {
                    attr.set_sentence_boundary(true);
                }
                self.maybe_start_new_sentence(category, attr);
            }
            Dot | PostDotClose => {
                if category == Gc::ClosePunctuation && self.sentence == Dot {
                    self.sentence = PostDotClose;
                } else if category == Gc::SpaceSeparator {
                    self.possible_sentence_end = Some(i);
                    self.sentence = PostDotSpace;
                } else if attr.is_sentence_boundary() {
                    // Broke on a separator: the period did end the sentence.
                    attr.set_sentence_end(true);
                    self.maybe_start_new_sentence(category, attr);
                } else {
                    self.sentence = Body;
                }
            }
            PostDotSpace => {
                self.possible_sentence_boundary = Some(i);
                match category {
                    Gc::SpaceSeparator => {}
                    Gc::OpenPunctuation => self.sentence = PostDotOpen,
                    // An abbreviation, not a sentence end.
                    Gc::LowercaseLetter => self.sentence = Body,
                    _ => {
                        self.commit_possible_sentence(true);
                        self.maybe_start_new_sentence(category, attr);
                    }
                }
            }
            PostDotOpen => match category {
                Gc::OpenPunctuation => {}
                Gc::LowercaseLetter => self.sentence = Body,
                _ => {
                    self.commit_possible_sentence(true);
                    self.maybe_start_new_sentence(category, attr);
                }
            },
            PostDotSep => {
                if !crlf {
                    attr.set_sentence_boundary(true);
                }
                self.commit_possible_sentence(false);
                self.maybe_start_new_sentence(category, attr);
            }
        }
    }

    fn maybe_start_new_sentence(&mut self, category: GeneralCategory, attr: &mut LogAttr) {
        if is_sentence_gap(category) {
            self.sentence = SentenceState::Outside;
        } else {
            self.sentence = SentenceState::Body;
            attr.set_sentence_start(true);
        }
    }

    // The period seen before the pending space did end a sentence.
    fn commit_possible_sentence(&mut self, with_boundary: bool) {
        let boundary = self.possible_sentence_boundary.take();
        if with_boundary {
            if let Some(index) = boundary {
                self.patches
                    .push(AttrPatch::new(index, AttrFlags::SENTENCE_BOUNDARY, true));
            }
        }
        if let Some(index) = self.possible_sentence_end.take() {
            self.patches
                .push(AttrPatch::new(index, AttrFlags::SENTENCE_END, true));
        }
    }
}

/// Categories that never start a sentence.
fn is_sentence_gap(category: GeneralCategory) -> bool {
    category.is_hard_separator() || category == GeneralCategory::SpaceSeparator
}

/// Pair-table lookup; classes outside the table break by default.
fn pair(before: BreakClass, after: BreakClass) -> BreakOpportunity {
    lookup_classes(before, after).unwrap_or(BreakOpportunity::Allowed)
}

/// Force the text-start and text-end rules on a full attribute buffer.
pub(crate) fn force_endpoints(attrs: &mut [LogAttr]) {
    if let Some(last) = attrs.last_mut() {
        last.set(
            AttrFlags::CURSOR_POSITION | AttrFlags::WORD_BOUNDARY | AttrFlags::LINE_BREAK,
            true,
        );
    }
    if let Some(first) = attrs.first_mut() {
        first.set(AttrFlags::CURSOR_POSITION | AttrFlags::WORD_BOUNDARY, true);
        first.set_line_break(false);
    }
}

// === Entry point ===

/// Compute the default logical attributes of `chars` into `attrs`.
///
/// `chars` must be restartable: it is walked once to count codepoints and
/// once to scan. `attrs` must hold exactly one record per codepoint plus
/// one for the end position; every record is overwritten.
///
/// # Errors
///
/// Returns [`BreakError::LengthMismatch`] if `attrs.len()` is not the
/// codepoint count plus one. `attrs` is left untouched in that case.
pub fn default_break<I>(
    chars: I,
    oracle: &dyn PropertyOracle,
    attrs: &mut [LogAttr],
) -> Result<(), BreakError>
where
    I: Iterator<Item = char> + Clone,
{
    let count = chars.clone().count();
    if attrs.len() != count + 1 {
        return Err(BreakError::length_mismatch(count, attrs.len()));
    }
    trace!("default_break: {} codepoints", count);

    scan_into(chars, oracle, attrs);
    Ok(())
}

/// Scan into a buffer the caller has already sized to the text.
pub(crate) fn scan_into<I>(chars: I, oracle: &dyn PropertyOracle, attrs: &mut [LogAttr])
where
    I: Iterator<Item = char>,
{
    let mut scanner = Scanner::new(oracle);
    let mut chars = chars.chain(iter::once(PARAGRAPH_SEPARATOR)).peekable();
    let mut i = 0;

    while let Some(ch) = chars.next() {
        let next_ch = chars.peek().copied().unwrap_or('\0');
        let attr = scanner.step(i, ch, next_ch);

        let Some(slot) = attrs.get_mut(i) else {
            break;
        };
        *slot = attr;
        for patch in scanner.patches.drain(..) {
            patch.apply(attrs);
        }
        i += 1;
    }

    force_endpoints(attrs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::UnicodeOracle;

    fn scan(text: &str) -> Vec<LogAttr> {
        let mut attrs = vec![LogAttr::default(); text.chars().count() + 1];
        default_break(text.chars(), &UnicodeOracle, &mut attrs).unwrap();
        attrs
    }

    fn where_set(attrs: &[LogAttr], flag: AttrFlags) -> Vec<usize> {
        crate::logattr::positions(attrs, flag).collect()
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let mut attrs = vec![LogAttr::default(); 3];
        let err = default_break("abcd".chars(), &UnicodeOracle, &mut attrs).unwrap_err();
        assert_eq!(
            err,
            BreakError::LengthMismatch {
                expected: 5,
                actual: 3
            }
        );
        assert!(attrs.iter().all(|a| *a == LogAttr::default()));
    }

    #[test]
    fn empty_text() {
        let attrs = scan("");
        assert_eq!(attrs.len(), 1);
        assert!(attrs[0].is_cursor_position());
        assert!(attrs[0].is_word_boundary());
        assert!(!attrs[0].is_line_break());
    }

    #[test]
    fn hello_world() {
        let attrs = scan("Hello world.");
        assert_eq!(where_set(&attrs, AttrFlags::WORD_BOUNDARY), vec![0, 5, 6, 11, 12]);
        assert_eq!(where_set(&attrs, AttrFlags::WORD_START), vec![0, 6]);
        assert_eq!(where_set(&attrs, AttrFlags::WORD_END), vec![5, 11]);
        assert_eq!(where_set(&attrs, AttrFlags::LINE_BREAK), vec![6, 12]);
        assert_eq!(where_set(&attrs, AttrFlags::SENTENCE_START), vec![0]);
        assert!(attrs[12].is_sentence_end());
        assert!(attrs[5].is_white());
        assert!(attrs[5].is_expandable_space());
    }

    #[test]
    fn mid_letter_joins_word() {
        // "e.g" is one word: the '.' boundary is retracted.
        let attrs = scan("e.g x");
        assert_eq!(where_set(&attrs, AttrFlags::WORD_BOUNDARY), vec![0, 3, 4, 5]);
    }

    #[test]
    fn mid_num_joins_number() {
        let attrs = scan("1,000");
        assert_eq!(where_set(&attrs, AttrFlags::WORD_BOUNDARY), vec![0, 5]);
    }

    #[test]
    fn abbreviation_commits_on_uppercase() {
        let attrs = scan("Mr. Smith went home.");
        assert!(!attrs[3].is_sentence_boundary());
        assert!(attrs[3].is_sentence_end());
        assert!(attrs[4].is_sentence_boundary());
        assert!(attrs[4].is_sentence_start());
        assert!(attrs[20].is_sentence_boundary());
        assert!(attrs[20].is_sentence_end());
    }

    #[test]
    fn abbreviation_before_lowercase_stays_in_sentence() {
        let attrs = scan("etc. and more");
        assert_eq!(where_set(&attrs, AttrFlags::SENTENCE_START), vec![0]);
        assert_eq!(where_set(&attrs, AttrFlags::SENTENCE_END), vec![13]);
    }

    #[test]
    fn question_mark_ends_sentence() {
        let attrs = scan("Why? Yes.");
        assert!(attrs[4].is_sentence_end());
        assert!(attrs[5].is_sentence_boundary());
        assert!(attrs[5].is_sentence_start());
        assert!(attrs[9].is_sentence_end());
    }

    #[test]
    fn crlf_is_one_unit() {
        let attrs = scan("a\r\nb");
        assert!(!attrs[2].is_cursor_position());
        assert!(!attrs[2].is_line_break());
        assert!(attrs[3].is_line_break());
        assert!(attrs[3].is_mandatory_break());
        assert!(attrs[1].is_sentence_end());
        assert!(attrs[3].is_sentence_start());
    }

    #[test]
    fn hangul_jamo_cluster() {
        let attrs = scan("\u{1100}\u{1161}\u{11A8}");
        assert!(attrs[0].is_cursor_position());
        assert!(!attrs[1].is_cursor_position());
        assert!(!attrs[2].is_cursor_position());
        assert!(attrs[3].is_cursor_position());
    }

    #[test]
    fn combining_mark_joins_base() {
        let attrs = scan("e\u{0301}");
        assert!(!attrs[1].is_cursor_position());
        assert!(!attrs[1].is_char_break());
        assert!(!attrs[2].backspace_deletes_character());
    }

    #[test]
    fn hyphen_and_parentheses() {
        let attrs = scan("foo-bar");
        assert!(attrs[4].is_line_break());
        assert!(!attrs[3].is_line_break());

        let attrs = scan("foo(bar)");
        assert!(!attrs[3].is_line_break());
        assert!(attrs[8].is_line_break());
    }

    #[test]
    fn ideographs_break_between() {
        let attrs = scan("\u{4E00}\u{4E8C}\u{4E09}");
        assert_eq!(where_set(&attrs, AttrFlags::LINE_BREAK), vec![1, 2, 3]);
    }

    #[test]
    fn japanese_script_change_ends_word() {
        // Hiragana followed by katakana inside one letter run.
        let attrs = scan("\u{3042}\u{30A2}");
        assert!(attrs[0].is_word_start());
        assert!(attrs[1].is_word_end());
    }

    #[test]
    fn newline_is_mandatory_break() {
        let attrs = scan("a\nb");
        assert!(attrs[2].is_mandatory_break());
        assert!(attrs[2].is_line_break());
        assert!(attrs[1].is_sentence_boundary());
        assert!(attrs[2].is_sentence_boundary());
    }
}
