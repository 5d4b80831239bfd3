// api.rs - Idiomatic entry points for breakscan.
//
// Segmenter bundles a property oracle with the registered tailoring
// engines and runs the full pipeline: default scan, script runs, per-run
// tailoring. The free functions cover the common case of default
// segmentation with no tailoring.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::BreakError;
use crate::logattr::{self, AttrFlags, LogAttr};
use crate::props::{PropertyOracle, Script, UnicodeOracle};
use crate::scan::{default_break, force_endpoints, scan_into};
use crate::script_iter::ScriptIter;
use crate::tailor::{apply_tailor, ScriptTailor, TailorContext, TailorRegistry};
use crate::utf8::Utf8Chars;

/// Computes logical attributes for text.
///
/// # Examples
///
/// ```
/// use breakscan::api::Segmenter;
///
/// let seg = Segmenter::default();
/// let attrs = seg.log_attrs("Hi there.").unwrap();
/// assert_eq!(attrs.len(), 10);
/// assert!(attrs[3].is_line_break());
/// assert!(attrs[9].is_sentence_end());
/// ```
#[derive(Clone)]
pub struct Segmenter {
    oracle: Arc<dyn PropertyOracle>,
    tailors: TailorRegistry,
    embedding_level: Option<i32>,
    language: Option<String>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Segmenter {
            oracle: Arc::new(UnicodeOracle),
            tailors: TailorRegistry::new(),
            embedding_level: None,
            language: None,
        }
    }
}

impl Segmenter {
    /// A segmenter with the Unicode oracle and no tailoring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`SegmenterBuilder`].
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// The property oracle in use.
    pub fn oracle(&self) -> &dyn PropertyOracle {
        self.oracle.as_ref()
    }

    /// The registered tailoring engines.
    pub fn tailors(&self) -> &TailorRegistry {
        &self.tailors
    }

    /// Attributes for every position of `text`: one per codepoint plus one
    /// for the end.
    pub fn log_attrs(&self, text: &str) -> Result<Vec<LogAttr>, BreakError> {
        let mut attrs = vec![LogAttr::default(); text.chars().count() + 1];
        self.log_attrs_into(text, &mut attrs)?;
        Ok(attrs)
    }

    /// Like [`log_attrs`](Self::log_attrs), into a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// [`BreakError::LengthMismatch`] if `attrs` is not exactly one longer
    /// than the codepoint count of `text`.
    pub fn log_attrs_into(&self, text: &str, attrs: &mut [LogAttr]) -> Result<(), BreakError> {
        default_break(text.chars(), self.oracle(), attrs)?;
        debug!("log_attrs: {} positions", attrs.len());

        if !self.tailors.is_empty() {
            self.tailor_runs(text, attrs)?;
            force_endpoints(attrs);
        }
        Ok(())
    }

    /// Attributes for possibly malformed UTF-8. Each byte that does not
    /// start a valid sequence counts as one U+FFFD.
    pub fn log_attrs_bytes(&self, bytes: &[u8]) -> Result<Vec<LogAttr>, BreakError> {
        let text: String = Utf8Chars::new(bytes).collect();
        self.log_attrs(&text)
    }

    fn tailor_runs(&self, text: &str, attrs: &mut [LogAttr]) -> Result<(), BreakError> {
        let len = attrs.len();
        for run in ScriptIter::new(text, self.oracle()) {
            let Some(tailor) = self.tailors.get(run.script) else {
                continue;
            };
            trace!(
                "tailoring {:?} run, codepoints {}..{}",
                run.script,
                run.char_start,
                run.char_end
            );

            let range: RangeInclusive<usize> = run.char_start..=run.char_end;
            let slice = attrs.get_mut(range).ok_or(BreakError::InvalidRange {
                start: run.char_start,
                end: run.char_end,
                len,
            })?;
            let context = self.context(run.script);
            apply_tailor(tailor, &text[run.start..run.end], &context, slice);
        }
        Ok(())
    }

    fn context(&self, script: Script) -> TailorContext<'_> {
        TailorContext {
            script,
            embedding_level: self.embedding_level,
            language: self.language.as_deref(),
        }
    }
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("tailors", &self.tailors)
            .field("embedding_level", &self.embedding_level)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

// === SegmenterBuilder ===

/// Builder for a [`Segmenter`] with a custom oracle or tailoring.
///
/// # Examples
///
/// ```
/// use breakscan::api::Segmenter;
/// use breakscan::logattr::LogAttr;
/// use breakscan::props::Script;
/// use breakscan::tailor::TailorContext;
///
/// fn no_breaks(_: &str, _: &TailorContext<'_>, attrs: &mut [LogAttr]) -> bool {
///     for attr in attrs.iter_mut() {
///         attr.set_line_break(false);
///     }
///     true
/// }
///
/// let seg = Segmenter::builder()
///     .tailor(Script::Thai, no_breaks)
///     .language("th")
///     .build();
/// assert_eq!(seg.tailors().len(), 1);
/// ```
pub struct SegmenterBuilder {
    oracle: Arc<dyn PropertyOracle>,
    tailors: TailorRegistry,
    embedding_level: Option<i32>,
    language: Option<String>,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmenterBuilder {
    pub fn new() -> Self {
        SegmenterBuilder {
            oracle: Arc::new(UnicodeOracle),
            tailors: TailorRegistry::new(),
            embedding_level: None,
            language: None,
        }
    }

    /// Use `oracle` for character properties (default: [`UnicodeOracle`]).
    pub fn oracle(mut self, oracle: impl PropertyOracle + 'static) -> Self {
        self.oracle = Arc::new(oracle);
        self
    }

    /// Register a tailoring engine for `script`.
    pub fn tailor(mut self, script: Script, tailor: impl ScriptTailor + 'static) -> Self {
        self.tailors.register(script, Arc::new(tailor));
        self
    }

    /// Register an engine shared with other segmenters.
    pub fn shared_tailor(mut self, script: Script, tailor: Arc<dyn ScriptTailor>) -> Self {
        self.tailors.register(script, tailor);
        self
    }

    /// Embedding level handed to tailoring engines.
    pub fn embedding_level(mut self, level: i32) -> Self {
        self.embedding_level = Some(level);
        self
    }

    /// Language tag handed to tailoring engines.
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_owned());
        self
    }

    pub fn build(self) -> Segmenter {
        Segmenter {
            oracle: self.oracle,
            tailors: self.tailors,
            embedding_level: self.embedding_level,
            language: self.language,
        }
    }
}

// === Free functions ===

/// Default attributes of `text` (Unicode oracle, no tailoring).
///
/// # Examples
///
/// ```
/// let attrs = breakscan::log_attrs("ab");
/// assert_eq!(attrs.len(), 3);
/// assert!(attrs[2].is_line_break());
/// ```
pub fn log_attrs(text: &str) -> Vec<LogAttr> {
    let mut attrs = vec![LogAttr::default(); text.chars().count() + 1];
    scan_into(text.chars(), &UnicodeOracle, &mut attrs);
    attrs
}

fn positions_of(text: &str, flag: AttrFlags) -> Vec<usize> {
    logattr::positions(&log_attrs(text), flag).collect()
}

/// Codepoint indices of grapheme cluster boundaries in `text`.
pub fn grapheme_boundaries(text: &str) -> Vec<usize> {
    positions_of(text, AttrFlags::CURSOR_POSITION)
}

/// Codepoint indices of word boundaries in `text`.
pub fn word_boundaries(text: &str) -> Vec<usize> {
    positions_of(text, AttrFlags::WORD_BOUNDARY)
}

/// Codepoint indices of line break opportunities in `text`.
pub fn line_breaks(text: &str) -> Vec<usize> {
    positions_of(text, AttrFlags::LINE_BREAK)
}

/// Codepoint indices of sentence boundaries in `text`.
pub fn sentence_boundaries(text: &str) -> Vec<usize> {
    positions_of(text, AttrFlags::SENTENCE_BOUNDARY)
}

/// Split `text` at every position of `attrs` carrying `flag`.
///
/// `attrs` must be the attributes of `text`; extra or missing records
/// only shift where the cuts fall.
pub fn split_at_flag<'t>(text: &'t str, attrs: &[LogAttr], flag: AttrFlags) -> Vec<&'t str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let byte_offsets = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()));

    for (attr, offset) in attrs.iter().zip(byte_offsets) {
        if attr.contains(flag) && offset > start {
            pieces.push(&text[start..offset]);
            start = offset;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// The grapheme clusters of `text`.
///
/// # Examples
///
/// ```
/// let clusters = breakscan::graphemes("e\u{0301}x");
/// assert_eq!(clusters, vec!["e\u{0301}", "x"]);
/// ```
pub fn graphemes(text: &str) -> Vec<&str> {
    split_at_flag(text, &log_attrs(text), AttrFlags::CURSOR_POSITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_agree_with_segmenter() {
        let text = "One two. Three!";
        let seg = Segmenter::default();
        assert_eq!(seg.log_attrs(text).unwrap(), log_attrs(text));
    }

    #[test]
    fn into_rejects_bad_length() {
        let seg = Segmenter::new();
        let mut attrs = vec![LogAttr::default(); 2];
        assert_eq!(
            seg.log_attrs_into("abc", &mut attrs),
            Err(BreakError::LengthMismatch {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn bytes_use_replacement_per_invalid_byte() {
        let seg = Segmenter::new();
        let attrs = seg.log_attrs_bytes(b"a\xFF\xFEb").unwrap();
        assert_eq!(attrs.len(), 5);
    }

    #[test]
    fn boundary_helpers() {
        assert_eq!(word_boundaries("hi you"), vec![0, 2, 3, 6]);
        assert_eq!(line_breaks("hi you"), vec![3, 6]);
        assert_eq!(grapheme_boundaries("e\u{0301}"), vec![0, 2]);
        assert_eq!(sentence_boundaries("Hi. Yo."), vec![0, 4, 7]);
    }

    #[test]
    fn split_words() {
        let text = "hi you";
        let attrs = log_attrs(text);
        assert_eq!(
            split_at_flag(text, &attrs, AttrFlags::WORD_BOUNDARY),
            vec!["hi", " ", "you"]
        );
    }

    #[test]
    fn builder_carries_context() {
        let seg = Segmenter::builder()
            .embedding_level(1)
            .language("ja")
            .build();
        let ctx = seg.context(Script::Han);
        assert_eq!(ctx.embedding_level, Some(1));
        assert_eq!(ctx.language, Some("ja"));
        assert!(seg.tailors().is_empty());
    }
}
