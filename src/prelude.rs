// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use breakscan::prelude::*;
//!
//! let attrs = Segmenter::default().log_attrs("a b").unwrap();
//! assert_eq!(line_breaks("a b"), vec![2, 3]);
//! assert!(attrs[2].is_line_break());
//! ```

pub use crate::api::{
    grapheme_boundaries, graphemes, line_breaks, log_attrs, sentence_boundaries, split_at_flag,
    word_boundaries, Segmenter, SegmenterBuilder,
};
pub use crate::error::BreakError;
pub use crate::logattr::{AttrFlags, LogAttr};
pub use crate::paragraph::{find_paragraph_boundary, paragraphs, ParagraphBoundary};
pub use crate::props::{PropertyOracle, Script, UnicodeOracle};
pub use crate::script_iter::{ScriptIter, ScriptRun};
pub use crate::tailor::{ScriptTailor, TailorContext};
