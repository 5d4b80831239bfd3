// props.rs - Character property oracle.
//
// The scanner only ever asks three questions about a codepoint: its general
// category, its line-break class and its script. `PropertyOracle` is that
// seam; `UnicodeOracle` answers it from compiled Unicode data.

use icu_properties::props::GeneralCategory as IcuCategory;
use icu_properties::CodePointMapData;
use unicode_linebreak::BreakClass as LbClass;

pub use icu_properties::props::Script;

// === General Category ===

/// Unicode general category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    Control,
    Format,
    Unassigned,
    PrivateUse,
    Surrogate,
    LowercaseLetter,
    ModifierLetter,
    OtherLetter,
    TitlecaseLetter,
    UppercaseLetter,
    SpacingMark,
    EnclosingMark,
    NonspacingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    ClosePunctuation,
    FinalPunctuation,
    InitialPunctuation,
    OtherPunctuation,
    OpenPunctuation,
    CurrencySymbol,
    ModifierSymbol,
    MathSymbol,
    OtherSymbol,
    LineSeparator,
    ParagraphSeparator,
    SpaceSeparator,
}

impl GeneralCategory {
    /// Lu, Ll, Lt, Lm or Lo.
    #[inline]
    pub fn is_letter(self) -> bool {
        matches!(
            self,
            GeneralCategory::LowercaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::UppercaseLetter
        )
    }

    /// Nd, Nl or No.
    #[inline]
    pub fn is_number(self) -> bool {
        matches!(
            self,
            GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
    }

    /// Mc, Me or Mn.
    #[inline]
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
                | GeneralCategory::NonspacingMark
        )
    }

    /// Zl, Zp, Cc or Cf: characters that always delimit sentences.
    #[inline]
    pub fn is_hard_separator(self) -> bool {
        matches!(
            self,
            GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Control
                | GeneralCategory::Format
        )
    }

    /// Zl or Zp.
    #[inline]
    pub fn is_line_or_paragraph_separator(self) -> bool {
        matches!(
            self,
            GeneralCategory::LineSeparator | GeneralCategory::ParagraphSeparator
        )
    }
}

impl From<IcuCategory> for GeneralCategory {
    fn from(gc: IcuCategory) -> Self {
        match gc {
            IcuCategory::Control => GeneralCategory::Control,
            IcuCategory::Format => GeneralCategory::Format,
            IcuCategory::Unassigned => GeneralCategory::Unassigned,
            IcuCategory::PrivateUse => GeneralCategory::PrivateUse,
            IcuCategory::Surrogate => GeneralCategory::Surrogate,
            IcuCategory::LowercaseLetter => GeneralCategory::LowercaseLetter,
            IcuCategory::ModifierLetter => GeneralCategory::ModifierLetter,
            IcuCategory::OtherLetter => GeneralCategory::OtherLetter,
            IcuCategory::TitlecaseLetter => GeneralCategory::TitlecaseLetter,
            IcuCategory::UppercaseLetter => GeneralCategory::UppercaseLetter,
            IcuCategory::SpacingMark => GeneralCategory::SpacingMark,
            IcuCategory::EnclosingMark => GeneralCategory::EnclosingMark,
            IcuCategory::NonspacingMark => GeneralCategory::NonspacingMark,
            IcuCategory::DecimalNumber => GeneralCategory::DecimalNumber,
            IcuCategory::LetterNumber => GeneralCategory::LetterNumber,
            IcuCategory::OtherNumber => GeneralCategory::OtherNumber,
            IcuCategory::ConnectorPunctuation => GeneralCategory::ConnectorPunctuation,
            IcuCategory::DashPunctuation => GeneralCategory::DashPunctuation,
            IcuCategory::ClosePunctuation => GeneralCategory::ClosePunctuation,
            IcuCategory::FinalPunctuation => GeneralCategory::FinalPunctuation,
            IcuCategory::InitialPunctuation => GeneralCategory::InitialPunctuation,
            IcuCategory::OtherPunctuation => GeneralCategory::OtherPunctuation,
            IcuCategory::OpenPunctuation => GeneralCategory::OpenPunctuation,
            IcuCategory::CurrencySymbol => GeneralCategory::CurrencySymbol,
            IcuCategory::ModifierSymbol => GeneralCategory::ModifierSymbol,
            IcuCategory::MathSymbol => GeneralCategory::MathSymbol,
            IcuCategory::OtherSymbol => GeneralCategory::OtherSymbol,
            IcuCategory::LineSeparator => GeneralCategory::LineSeparator,
            IcuCategory::ParagraphSeparator => GeneralCategory::ParagraphSeparator,
            IcuCategory::SpaceSeparator => GeneralCategory::SpaceSeparator,
            #[allow(unreachable_patterns)]
            _ => GeneralCategory::Unassigned,
        }
    }
}

// === Line Break Class ===

/// UAX #14 line-break class, restricted to the classes the scanner knows.
///
/// The first twenty-one variants are the table-driven classes (see
/// [`crate::break_table`]); the rest are resolved by special rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakClass {
    OpenPunctuation,
    ClosePunctuation,
    Quotation,
    NonBreakingGlue,
    NonStarter,
    Exclamation,
    Symbol,
    InfixSeparator,
    Prefix,
    Postfix,
    Numeric,
    Alphabetic,
    Ideographic,
    Inseparable,
    Hyphen,
    After,
    Before,
    BeforeAndAfter,
    ZeroWidthSpace,
    CombiningMark,
    WordJoiner,

    Mandatory,
    CarriageReturn,
    LineFeed,
    Surrogate,
    Contingent,
    Space,
    ComplexContext,
    Ambiguous,
    Unknown,
    NextLine,
    HangulLJamo,
    HangulVJamo,
    HangulTJamo,
    HangulLvSyllable,
    HangulLvtSyllable,
}

impl BreakClass {
    /// True for the five Hangul classes.
    #[inline]
    pub fn is_hangul(self) -> bool {
        matches!(
            self,
            BreakClass::HangulLJamo
                | BreakClass::HangulVJamo
                | BreakClass::HangulTJamo
                | BreakClass::HangulLvSyllable
                | BreakClass::HangulLvtSyllable
        )
    }

    /// Ambiguous, complex-context and unknown characters are all treated
    /// as alphabetic until a width- or language-aware resolver exists.
    #[inline]
    pub fn is_alphabetic_fallback(self) -> bool {
        matches!(
            self,
            BreakClass::Ambiguous | BreakClass::ComplexContext | BreakClass::Unknown
        )
    }
}

impl From<LbClass> for BreakClass {
    fn from(class: LbClass) -> Self {
        match class {
            LbClass::Mandatory => BreakClass::Mandatory,
            LbClass::CarriageReturn => BreakClass::CarriageReturn,
            LbClass::LineFeed => BreakClass::LineFeed,
            LbClass::CombiningMark => BreakClass::CombiningMark,
            LbClass::NextLine => BreakClass::NextLine,
            LbClass::Surrogate => BreakClass::Surrogate,
            LbClass::WordJoiner => BreakClass::WordJoiner,
            LbClass::ZeroWidthSpace => BreakClass::ZeroWidthSpace,
            LbClass::NonBreakingGlue => BreakClass::NonBreakingGlue,
            LbClass::Space => BreakClass::Space,
            LbClass::ZeroWidthJoiner => BreakClass::CombiningMark,
            LbClass::BeforeAndAfter => BreakClass::BeforeAndAfter,
            LbClass::After => BreakClass::After,
            LbClass::Before => BreakClass::Before,
            LbClass::Hyphen => BreakClass::Hyphen,
            LbClass::Contingent => BreakClass::Contingent,
            LbClass::ClosePunctuation => BreakClass::ClosePunctuation,
            LbClass::CloseParenthesis => BreakClass::ClosePunctuation,
            LbClass::Exclamation => BreakClass::Exclamation,
            LbClass::Inseparable => BreakClass::Inseparable,
            LbClass::NonStarter => BreakClass::NonStarter,
            LbClass::OpenPunctuation => BreakClass::OpenPunctuation,
            LbClass::Quotation => BreakClass::Quotation,
            LbClass::InfixSeparator => BreakClass::InfixSeparator,
            LbClass::Numeric => BreakClass::Numeric,
            LbClass::Postfix => BreakClass::Postfix,
            LbClass::Prefix => BreakClass::Prefix,
            LbClass::Symbol => BreakClass::Symbol,
            LbClass::Ambiguous => BreakClass::Ambiguous,
            LbClass::Alphabetic => BreakClass::Alphabetic,
            LbClass::ConditionalJapaneseStarter => BreakClass::NonStarter,
            LbClass::EmojiBase => BreakClass::Ideographic,
            LbClass::EmojiModifier => BreakClass::Ideographic,
            LbClass::HangulLvSyllable => BreakClass::HangulLvSyllable,
            LbClass::HangulLvtSyllable => BreakClass::HangulLvtSyllable,
            LbClass::HebrewLetter => BreakClass::Alphabetic,
            LbClass::Ideographic => BreakClass::Ideographic,
            LbClass::HangulLJamo => BreakClass::HangulLJamo,
            LbClass::HangulVJamo => BreakClass::HangulVJamo,
            LbClass::HangulTJamo => BreakClass::HangulTJamo,
            LbClass::RegionalIndicator => BreakClass::Alphabetic,
            LbClass::ComplexContext => BreakClass::ComplexContext,
            LbClass::Unknown => BreakClass::Unknown,
            #[allow(unreachable_patterns)]
            _ => BreakClass::Unknown,
        }
    }
}

// === Oracle ===

/// Everything the scanner needs to know about one codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharProps {
    pub category: GeneralCategory,
    pub break_class: BreakClass,
    pub script: Script,
}

/// Source of character properties.
///
/// Implementations must be total (every `char` is classified) and
/// deterministic; the scanner assumes repeated queries agree.
pub trait PropertyOracle: Send + Sync {
    fn classify(&self, ch: char) -> CharProps;

    fn category(&self, ch: char) -> GeneralCategory {
        self.classify(ch).category
    }

    fn script(&self, ch: char) -> Script {
        self.classify(ch).script
    }
}

/// Oracle backed by the compiled Unicode Character Database.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeOracle;

impl PropertyOracle for UnicodeOracle {
    fn classify(&self, ch: char) -> CharProps {
        CharProps {
            category: self.category(ch),
            break_class: BreakClass::from(unicode_linebreak::break_property(ch as u32)),
            script: self.script(ch),
        }
    }

    fn category(&self, ch: char) -> GeneralCategory {
        GeneralCategory::from(CodePointMapData::<IcuCategory>::new().get(ch))
    }

    fn script(&self, ch: char) -> Script {
        CodePointMapData::<Script>::new().get(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_classification() {
        let p = UnicodeOracle.classify('a');
        assert_eq!(p.category, GeneralCategory::LowercaseLetter);
        assert_eq!(p.break_class, BreakClass::Alphabetic);
        assert_eq!(p.script, Script::Latin);

        let p = UnicodeOracle.classify(' ');
        assert_eq!(p.category, GeneralCategory::SpaceSeparator);
        assert_eq!(p.break_class, BreakClass::Space);
        assert_eq!(p.script, Script::Common);
    }

    #[test]
    fn separators_and_controls() {
        assert_eq!(UnicodeOracle.category('\u{2029}'), GeneralCategory::ParagraphSeparator);
        assert_eq!(UnicodeOracle.category('\u{2028}'), GeneralCategory::LineSeparator);
        assert_eq!(UnicodeOracle.category('\n'), GeneralCategory::Control);
        assert_eq!(UnicodeOracle.classify('\n').break_class, BreakClass::LineFeed);
        assert_eq!(UnicodeOracle.classify('\r').break_class, BreakClass::CarriageReturn);
        assert_eq!(UnicodeOracle.classify('\u{2029}').break_class, BreakClass::Mandatory);
    }

    #[test]
    fn hangul_jamo_classes() {
        assert_eq!(UnicodeOracle.classify('\u{1100}').break_class, BreakClass::HangulLJamo);
        assert_eq!(UnicodeOracle.classify('\u{1161}').break_class, BreakClass::HangulVJamo);
        assert_eq!(UnicodeOracle.classify('\u{11A8}').break_class, BreakClass::HangulTJamo);
        assert_eq!(UnicodeOracle.classify('\u{AC00}').break_class, BreakClass::HangulLvSyllable);
        assert_eq!(UnicodeOracle.classify('\u{AC01}').break_class, BreakClass::HangulLvtSyllable);
    }

    #[test]
    fn newer_classes_are_folded() {
        assert_eq!(UnicodeOracle.classify(')').break_class, BreakClass::ClosePunctuation);
        assert_eq!(UnicodeOracle.classify('\u{05D0}').break_class, BreakClass::Alphabetic);
    }

    #[test]
    fn category_predicates() {
        assert!(GeneralCategory::TitlecaseLetter.is_letter());
        assert!(GeneralCategory::LetterNumber.is_number());
        assert!(GeneralCategory::EnclosingMark.is_mark());
        assert!(GeneralCategory::Format.is_hard_separator());
        assert!(!GeneralCategory::SpaceSeparator.is_hard_separator());
        assert!(BreakClass::HangulLvtSyllable.is_hangul());
        assert!(BreakClass::ComplexContext.is_alphabetic_fallback());
    }
}
