//! # breakscan
//!
//! Pure-Rust Unicode text segmentation. One forward scan computes, for every
//! codepoint position of a text plus the end position, grapheme cluster
//! boundaries, word boundaries and word start/end, line break opportunities
//! (optional and mandatory), and sentence boundaries and start/end.
//!
//! ## Quick Start
//!
//! ```rust
//! use breakscan::prelude::*;
//!
//! let attrs = log_attrs("Hello world.");
//! assert_eq!(attrs.len(), 13);
//! assert!(attrs[6].is_line_break());
//! assert!(attrs[12].is_sentence_end());
//!
//! assert_eq!(word_boundaries("Hello world."), vec![0, 5, 6, 11, 12]);
//! ```
//!
//! For a custom property oracle or per-script tailoring, use
//! [`SegmenterBuilder`]:
//!
//! ```rust
//! use breakscan::prelude::*;
//!
//! let seg = Segmenter::builder().embedding_level(0).build();
//! let attrs = seg.log_attrs("\u{0E01}\u{0E32}").unwrap();
//! assert!(attrs[0].is_cursor_position());
//! ```
//!
//! ## Caller-Owned Buffers
//!
//! The core entry point writes into a buffer the caller allocates and
//! accepts any restartable codepoint iterator:
//!
//! ```rust
//! use breakscan::logattr::LogAttr;
//! use breakscan::props::UnicodeOracle;
//! use breakscan::scan::default_break;
//! use breakscan::utf8::Utf8Chars;
//!
//! let bytes = b"ok\xFF";
//! let mut attrs = vec![LogAttr::default(); 4];
//! default_break(Utf8Chars::new(bytes), &UnicodeOracle, &mut attrs).unwrap();
//! assert!(attrs[3].is_line_break());
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`logattr`] | `LogAttr` records and boundary queries |
//! | [`props`] | Character property oracle |
//! | [`break_table`] | UAX #14 pair table |
//! | [`hangul`] | Hangul syllable composition |
//! | [`classify`] | Grapheme and word break types |
//! | [`scan`] | The forward scan engine |
//! | [`utf8`] | Lenient UTF-8 decoding |
//! | [`paragraph`] | Paragraph boundaries |
//! | [`script_iter`] | Script runs |
//! | [`tailor`] | Per-script tailoring hook |
//! | [`api`] | `Segmenter` and free functions |
//! | [`error`] | `BreakError` |

pub mod api;
pub mod break_table;
pub mod classify;
pub mod error;
pub mod hangul;
pub mod logattr;
pub mod paragraph;
pub mod prelude;
pub mod props;
pub mod scan;
pub mod script_iter;
pub mod tailor;
pub mod utf8;

pub use api::{
    grapheme_boundaries, graphemes, line_breaks, log_attrs, sentence_boundaries, split_at_flag,
    word_boundaries, Segmenter, SegmenterBuilder,
};
pub use error::BreakError;
pub use logattr::{AttrFlags, LogAttr};
