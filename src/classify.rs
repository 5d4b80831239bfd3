// classify.rs - Transient per-character classification.
//
// Grapheme and word break types are recomputed for every position and
// thrown away once the boundary flags are decided. The range predicates
// used for backspace and Japanese word-end handling also live here.

use crate::props::{BreakClass, GeneralCategory, Script};

// === Grapheme Break Type ===

/// UAX #29 grapheme cluster break type, reduced to what the rules use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphemeBreakType {
    Other,
    /// Control, CR, LF, surrogates and line/paragraph separators.
    ControlCrLf,
    Extend,
    /// Never produced by the classifier; the rule that reads it is kept
    /// so that Prepend data can be wired in.
    Prepend,
    SpacingMark,
    /// Continues a Hangul syllable (covers the L, V, T, LV and LVT rules).
    InHangulSyllable,
}

/// Spacing marks at or above U+0900 that are Other_Grapheme_Extend.
fn is_extending_spacing_mark(ch: u32) -> bool {
    matches!(
        ch,
        0x09BE
            | 0x09D7
            | 0x0B3E
            | 0x0B57
            | 0x0BBE
            | 0x0BD7
            | 0x0CC2
            | 0x0CD5
            | 0x0CD6
            | 0x0D3E
            | 0x0D57
            | 0x0DCF
            | 0x0DDF
            | 0x1D165
            | 0x1D16E..=0x1D172
    )
}

/// Grapheme break type of `ch`.
///
/// `makes_syllable` is the Hangul composer's verdict for `ch` against the
/// previous character.
pub fn grapheme_break_type(
    ch: char,
    category: GeneralCategory,
    makes_syllable: bool,
) -> GraphemeBreakType {
    let cp = ch as u32;
    match category {
        GeneralCategory::Format if cp == 0x200C || cp == 0x200D => GraphemeBreakType::Extend,
        GeneralCategory::Format
        | GeneralCategory::Control
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator
        | GeneralCategory::Surrogate => GraphemeBreakType::ControlCrLf,
        // Unassigned default ignorables.
        GeneralCategory::Unassigned
            if (0xFFF0..=0xFFF8).contains(&cp) || (0xE0000..=0xE0FFF).contains(&cp) =>
        {
            GraphemeBreakType::ControlCrLf
        }
        GeneralCategory::Unassigned | GeneralCategory::OtherLetter if makes_syllable => {
            GraphemeBreakType::InHangulSyllable
        }
        GeneralCategory::ModifierLetter if (0xFF9E..=0xFF9F).contains(&cp) => {
            GraphemeBreakType::Extend
        }
        GeneralCategory::SpacingMark if cp >= 0x0900 && is_extending_spacing_mark(cp) => {
            GraphemeBreakType::Extend
        }
        GeneralCategory::SpacingMark => GraphemeBreakType::SpacingMark,
        GeneralCategory::EnclosingMark | GeneralCategory::NonspacingMark => {
            GraphemeBreakType::Extend
        }
        _ => GraphemeBreakType::Other,
    }
}

/// Whether a grapheme boundary falls between `prev` and `cur`.
pub fn is_grapheme_boundary(
    prev_ch: char,
    prev: GraphemeBreakType,
    ch: char,
    cur: GraphemeBreakType,
) -> bool {
    use GraphemeBreakType::*;

    if ch == '\n' && prev_ch == '\r' {
        false
    } else if prev == ControlCrLf || cur == ControlCrLf {
        true
    } else if matches!(cur, InHangulSyllable | Extend | SpacingMark) {
        false
    } else if prev == Prepend {
        // Unreachable until a Prepend classification exists.
        false
    } else {
        true
    }
}

// === Word Break Type ===

/// UAX #29 word break type, reduced to what the rules use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordBreakType {
    Other,
    NewlineCrLf,
    ExtendFormat,
    Katakana,
    ALetter,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
}

impl WordBreakType {
    /// ALetter, Numeric or ExtendNumLet: runs of these never break.
    #[inline]
    pub fn is_alnum_run(self) -> bool {
        matches!(
            self,
            WordBreakType::ALetter | WordBreakType::Numeric | WordBreakType::ExtendNumLet
        )
    }

    /// Katakana or ExtendNumLet.
    #[inline]
    pub fn is_katakana_run(self) -> bool {
        matches!(self, WordBreakType::Katakana | WordBreakType::ExtendNumLet)
    }
}

// Han ranges that are OtherLetter/LetterNumber but not ALetter.
fn is_ideographic_exception(cp: u32) -> bool {
    matches!(
        cp,
        0x3006
            | 0x3007
            | 0x3021..=0x3029
            | 0x3038..=0x303A
            | 0x3400..=0x4DB5
            | 0x4E00..=0x9FC3
            | 0xF900..=0xFA2D
            | 0xFA30..=0xFA6A
            | 0xFA70..=0xFAD9
            | 0x20000..=0x2A6D6
            | 0x2F800..=0x2FA1D
    )
}

/// Word break type of `ch`.
///
/// Resolution order: script, per-codepoint exceptions, line-break class,
/// then general category.
pub fn word_break_type(
    ch: char,
    category: GeneralCategory,
    break_class: BreakClass,
    script: Script,
) -> WordBreakType {
    let cp = ch as u32;

    if script == Script::Katakana {
        return WordBreakType::Katakana;
    }

    match cp {
        0x3031..=0x3035 | 0x309B | 0x309C | 0x30A0 | 0x30FC | 0xFF70 => {
            return WordBreakType::Katakana
        }
        0xFF9E | 0xFF9F => return WordBreakType::ExtendFormat,
        0x05F3 => return WordBreakType::ALetter,
        _ => {}
    }

    match break_class {
        BreakClass::Numeric if cp != 0x066C => return WordBreakType::Numeric,
        BreakClass::InfixSeparator if !matches!(cp, 0x003A | 0xFE13 | 0x002E) => {
            return WordBreakType::MidNum
        }
        _ => {}
    }

    let alphabetic = || {
        if break_class != BreakClass::ComplexContext && script != Script::Hiragana {
            WordBreakType::ALetter
        } else {
            WordBreakType::Other
        }
    };

    match category {
        GeneralCategory::Control => match cp {
            0x000D | 0x000A | 0x000B | 0x000C | 0x0085 => WordBreakType::NewlineCrLf,
            _ => WordBreakType::Other,
        },
        GeneralCategory::LineSeparator | GeneralCategory::ParagraphSeparator => {
            WordBreakType::NewlineCrLf
        }
        GeneralCategory::Format
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark
        | GeneralCategory::NonspacingMark => WordBreakType::ExtendFormat,
        GeneralCategory::ConnectorPunctuation => WordBreakType::ExtendNumLet,
        GeneralCategory::InitialPunctuation | GeneralCategory::FinalPunctuation => match cp {
            0x2018 | 0x2019 => WordBreakType::MidNumLet,
            _ => WordBreakType::Other,
        },
        GeneralCategory::OtherPunctuation => match cp {
            0x0027 | 0x002E | 0x2024 | 0xFE52 | 0xFF07 | 0xFF0E => WordBreakType::MidNumLet,
            0x00B7 | 0x05F4 | 0x2027 | 0x003A | 0x0387 | 0xFE13 | 0xFE55 | 0xFF1A => {
                WordBreakType::MidLetter
            }
            0x066C | 0xFE50 | 0xFE54 | 0xFF0C | 0xFF1B => WordBreakType::MidNum,
            _ => WordBreakType::Other,
        },
        // Circled letters are Other_Alphabetic.
        GeneralCategory::OtherSymbol if (0x24B6..=0x24E9).contains(&cp) => alphabetic(),
        GeneralCategory::OtherLetter | GeneralCategory::LetterNumber => {
            if is_ideographic_exception(cp) {
                WordBreakType::Other
            } else {
                alphabetic()
            }
        }
        GeneralCategory::LowercaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::UppercaseLetter => alphabetic(),
        _ => WordBreakType::Other,
    }
}

// === Word Start/End ===

/// Kind of word the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordType {
    #[default]
    None,
    Letters,
    Numbers,
}

#[inline]
pub fn is_japanese(ch: char) -> bool {
    ('\u{2F00}'..='\u{30FF}').contains(&ch)
}

#[inline]
pub fn is_kanji(ch: char) -> bool {
    ('\u{2F00}'..='\u{2FDF}').contains(&ch)
}

#[inline]
pub fn is_hiragana(ch: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&ch)
}

#[inline]
pub fn is_katakana(ch: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&ch)
}

/// True if moving from `last` to `ch` inside a letter word crosses a
/// Japanese script transition and so ends the word.
pub fn ends_japanese_word(last: char, ch: char) -> bool {
    if !is_japanese(last) && !is_japanese(ch) {
        return false;
    }
    (is_hiragana(last) && !is_hiragana(ch))
        || (is_katakana(last) && !(is_katakana(ch) || is_hiragana(ch)))
        || (is_kanji(last) && !(is_hiragana(ch) || is_kanji(ch)))
        || (is_japanese(last) && !is_japanese(ch))
        || (!is_japanese(last) && is_japanese(ch))
}

// === Derived flags ===

/// True if backspace after a cluster based on `base` deletes one
/// character at a time rather than the whole cluster.
pub fn backspace_deletes_character(base: char) -> bool {
    let cp = base as u32;
    let latin = (0x0020..=0x02AF).contains(&cp) || (0x1E00..=0x1EFF).contains(&cp);
    let cyrillic = (0x0400..=0x052F).contains(&cp);
    let greek = (0x0370..=0x03FF).contains(&cp) || (0x1F00..=0x1FFF).contains(&cp);
    let kana = (0x3040..=0x30FF).contains(&cp);
    let hangul = (0xAC00..=0xD7A3).contains(&cp);
    !(latin || cyrillic || greek || kana || hangul)
}

/// Classic whitespace: tab, newline, form feed, carriage return, or any
/// space, line or paragraph separator.
pub fn is_white(ch: char, category: GeneralCategory) -> bool {
    match ch {
        '\t' | '\n' | '\u{000C}' | '\r' => true,
        _ => matches!(
            category,
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        ),
    }
}

/// Spaces whose width may stretch during justification.
#[inline]
pub fn is_expandable_space(ch: char) -> bool {
    ch == '\u{0020}' || ch == '\u{00A0}'
}
