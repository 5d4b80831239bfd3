// properties.rs - Invariants that hold for any input.

use breakscan::prelude::*;
use breakscan::utf8::{char_count, Utf8Chars};
use proptest::prelude::*;

/// Mixed scripts and the punctuation the scanner cares about.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 .,!?'()\\-]",
            Just("\r\n".to_owned()),
            Just("\n".to_owned()),
            Just("\u{2029}".to_owned()),
            Just("\u{0301}".to_owned()),
            Just("\u{0E01}".to_owned()),
            Just("\u{4E2D}".to_owned()),
            Just("\u{30AB}".to_owned()),
            Just("\u{1100}\u{1161}".to_owned()),
            Just("\u{AC00}".to_owned()),
            any::<char>().prop_map(String::from),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn clear_all(_: &str, _: &TailorContext<'_>, attrs: &mut [LogAttr]) -> bool {
    attrs.fill(LogAttr::default());
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn one_record_per_position(text in arb_text()) {
        prop_assert_eq!(log_attrs(&text).len(), text.chars().count() + 1);
    }

    #[test]
    fn endpoints_are_fixed(text in arb_text()) {
        let attrs = log_attrs(&text);
        let first = attrs[0];
        let last = attrs[attrs.len() - 1];
        prop_assert!(first.is_cursor_position());
        prop_assert!(first.is_word_boundary());
        prop_assert!(!first.is_line_break());
        prop_assert!(last.is_cursor_position());
        prop_assert!(last.is_word_boundary());
        prop_assert!(last.is_line_break());
    }

    #[test]
    fn line_breaks_fall_on_cluster_boundaries(text in arb_text()) {
        for (i, attr) in log_attrs(&text).iter().enumerate() {
            if attr.is_line_break() {
                prop_assert!(attr.is_cursor_position(), "line break inside cluster at {}", i);
            }
            if attr.is_mandatory_break() {
                prop_assert!(attr.is_line_break(), "mandatory without break at {}", i);
            }
        }
    }

    #[test]
    fn scan_is_deterministic(text in arb_text()) {
        let seg = Segmenter::new();
        prop_assert_eq!(seg.log_attrs(&text).unwrap(), log_attrs(&text));
        prop_assert_eq!(log_attrs(&text), log_attrs(&text));
    }

    #[test]
    fn graphemes_cover_the_text(text in arb_text()) {
        prop_assert_eq!(graphemes(&text).concat(), text);
    }

    #[test]
    fn tailored_endpoints_are_fixed(text in arb_text()) {
        let seg = Segmenter::builder().tailor(Script::Thai, clear_all).build();
        let attrs = seg.log_attrs(&text).unwrap();
        prop_assert_eq!(attrs.len(), text.chars().count() + 1);
        prop_assert!(attrs[0].is_cursor_position());
        prop_assert!(!attrs[0].is_line_break());
        prop_assert!(attrs[attrs.len() - 1].is_line_break());
    }

    #[test]
    fn arbitrary_bytes_decode(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let count = Utf8Chars::new(&bytes).count();
        prop_assert_eq!(char_count(&bytes), count);

        let attrs = Segmenter::new().log_attrs_bytes(&bytes).unwrap();
        prop_assert_eq!(attrs.len(), count + 1);
    }

    #[test]
    fn valid_utf8_decodes_like_str(text in arb_text()) {
        let decoded: String = Utf8Chars::new(text.as_bytes()).collect();
        prop_assert_eq!(decoded, text);
    }
}
