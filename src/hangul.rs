// hangul.rs - Hangul syllable composition.
//
// Precomposed LV and LVT syllables behave like jamo sequences, so each
// jamo type is decomposed into the simple type it starts with and the one
// it ends with. Two characters belong to the same syllable when the end
// type of the first equals, or is the ordinal predecessor of, the start
// type of the second. This recognizes L+V, V+T, LV+T, L+LV and the like
// without enumerating syllables. The same test drives both grapheme
// clustering and line breaking.

use crate::props::BreakClass;

/// Jamo type of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum JamoType {
    L = 0,
    V = 1,
    T = 2,
    Lv = 3,
    Lvt = 4,
    NoJamo = 5,
}

// (start, end) simple types per JamoType, indexed by discriminant.
static HANGUL_JAMO_PROPS: [(JamoType, JamoType); 6] = [
    (JamoType::L, JamoType::L),
    (JamoType::V, JamoType::V),
    (JamoType::T, JamoType::T),
    (JamoType::L, JamoType::V),
    (JamoType::L, JamoType::T),
    (JamoType::NoJamo, JamoType::NoJamo),
];

impl JamoType {
    /// Simple type the character starts with.
    #[inline]
    pub fn start(self) -> JamoType {
        HANGUL_JAMO_PROPS[self as usize].0
    }

    /// Simple type the character ends with.
    #[inline]
    pub fn end(self) -> JamoType {
        HANGUL_JAMO_PROPS[self as usize].1
    }
}

/// Jamo type of a line-break class.
#[inline]
pub fn jamo_of(class: BreakClass) -> JamoType {
    match class {
        BreakClass::HangulLJamo => JamoType::L,
        BreakClass::HangulVJamo => JamoType::V,
        BreakClass::HangulTJamo => JamoType::T,
        BreakClass::HangulLvSyllable => JamoType::Lv,
        BreakClass::HangulLvtSyllable => JamoType::Lvt,
        _ => JamoType::NoJamo,
    }
}

/// True if `cur` continues the syllable ended by `prev`.
pub fn composes(prev: JamoType, cur: JamoType) -> bool {
    if prev == JamoType::NoJamo || cur == JamoType::NoJamo {
        return false;
    }
    let prev_end = prev.end() as u8;
    let cur_start = cur.start() as u8;
    prev_end == cur_start || prev_end + 1 == cur_start
}

#[cfg(test)]
mod tests {
    use super::*;
    use JamoType::*;

    #[test]
    fn simple_sequences_compose() {
        assert!(composes(L, L));
        assert!(composes(L, V));
        assert!(composes(V, V));
        assert!(composes(V, T));
        assert!(composes(T, T));
    }

    #[test]
    fn precomposed_syllables() {
        assert!(composes(L, Lv));
        assert!(composes(L, Lvt));
        assert!(composes(Lv, V));
        assert!(composes(Lv, T));
        assert!(composes(Lvt, T));
        assert!(!composes(Lvt, V));
        assert!(!composes(Lv, L));
    }

    #[test]
    fn backwards_sequences_do_not_compose() {
        assert!(!composes(V, L));
        assert!(!composes(T, V));
        assert!(!composes(T, L));
        assert!(!composes(L, T));
    }

    #[test]
    fn non_jamo_never_composes() {
        assert!(!composes(NoJamo, L));
        assert!(!composes(L, NoJamo));
        assert!(!composes(NoJamo, NoJamo));
    }

    #[test]
    fn jamo_of_maps_only_hangul_classes() {
        assert_eq!(jamo_of(BreakClass::HangulLvtSyllable), Lvt);
        assert_eq!(jamo_of(BreakClass::Ideographic), NoJamo);
        assert_eq!(Lvt.start(), L);
        assert_eq!(Lvt.end(), T);
    }
}
