// break_table.rs - UAX #14 line-break pair table.
//
// Maps (class before, class after) to a break opportunity for the
// twenty-one classes that take part in pairwise lookup. Every other class
// is resolved by the scanner before it gets here.

use crate::props::BreakClass;

/// Outcome of comparing two adjacent line-break classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakOpportunity {
    /// Decided by a special rule; the table was not consulted.
    AlreadyHandled,
    /// No break, even if spaces intervene.
    Prohibited,
    /// Indirect break: only if spaces intervene.
    IfSpaces,
    /// Direct break.
    Allowed,
}

/// Row/column index of a table-driven class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TableClass {
    OpenPunctuation = 0,
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
}

pub const TABLE_SIZE: usize = 21;

impl TableClass {
    /// The table index of `class`, or `None` for rule-resolved classes.
    pub fn of(class: BreakClass) -> Option<TableClass> {
        let t = match class {
            BreakClass::OpenPunctuation => TableClass::OpenPunctuation,
            BreakClass::ClosePunctuation => TableClass::ClosePunctuation,
            BreakClass::Quotation => TableClass::Quotation,
            BreakClass::NonBreakingGlue => TableClass::NonBreakingGlue,
            BreakClass::NonStarter => TableClass::NonStarter,
            BreakClass::Exclamation => TableClass::Exclamation,
            BreakClass::Symbol => TableClass::Symbol,
            BreakClass::InfixSeparator => TableClass::InfixSeparator,
            BreakClass::Prefix => TableClass::Prefix,
            BreakClass::Postfix => TableClass::Postfix,
            BreakClass::Numeric => TableClass::Numeric,
            BreakClass::Alphabetic => TableClass::Alphabetic,
            BreakClass::Ideographic => TableClass::Ideographic,
            BreakClass::Inseparable => TableClass::Inseparable,
            BreakClass::Hyphen => TableClass::Hyphen,
            BreakClass::After => TableClass::After,
            BreakClass::Before => TableClass::Before,
            BreakClass::BeforeAndAfter => TableClass::BeforeAndAfter,
            BreakClass::ZeroWidthSpace => TableClass::ZeroWidthSpace,
            BreakClass::CombiningMark => TableClass::CombiningMark,
            BreakClass::WordJoiner => TableClass::WordJoiner,
            _ => return None,
        };
        Some(t)
    }
}

// === Pair Table ===
// Rows: class before. Columns, in TableClass order:
//   OP CL QU GL NS EX SY IS PR PO NU AL ID IN HY BA BB B2 ZW CM WJ
// AL, NU and CM rows prohibit a break before OP (LB30).

const X: BreakOpportunity = BreakOpportunity::Prohibited;
const I: BreakOpportunity = BreakOpportunity::IfSpaces;
const A: BreakOpportunity = BreakOpportunity::Allowed;

#[rustfmt::skip]
static PAIR_TABLE: [[BreakOpportunity; TABLE_SIZE]; TABLE_SIZE] = [
    /* OP */ [X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X],
    /* CL */ [A, X, I, I, X, X, X, X, A, I, A, A, A, A, I, I, A, A, X, X, X],
    /* QU */ [X, X, I, I, I, X, X, X, I, I, I, I, I, I, I, I, I, I, X, X, X],
    /* GL */ [I, X, I, I, I, X, X, X, I, I, I, I, I, I, I, I, I, I, X, X, X],
    /* NS */ [A, X, I, I, I, X, X, X, A, A, A, A, A, A, I, I, A, A, X, X, X],
    /* EX */ [A, X, I, I, I, X, X, X, A, A, A, A, A, A, I, I, A, A, X, X, X],
    /* SY */ [A, X, I, I, I, X, X, X, A, A, I, A, A, A, I, I, A, A, X, X, X],
    /* IS */ [A, X, I, I, I, X, X, X, A, A, I, I, A, A, I, I, A, A, X, X, X],
    /* PR */ [I, X, I, I, I, X, X, X, A, A, I, I, I, A, I, I, A, A, X, X, X],
    /* PO */ [A, X, I, I, I, X, X, X, A, A, A, A, A, A, I, I, A, A, X, X, X],
    /* NU */ [X, X, I, I, I, X, X, X, A, I, I, I, A, I, I, I, A, A, X, X, X],
    /* AL */ [X, X, I, I, I, X, X, X, A, A, I, I, A, I, I, I, A, A, X, X, X],
    /* ID */ [A, X, I, I, I, X, X, X, A, I, A, A, A, I, I, I, A, A, X, X, X],
    /* IN */ [A, X, I, I, I, X, X, X, A, A, A, A, A, I, I, I, A, A, X, X, X],
    /* HY */ [A, X, I, I, I, X, X, X, A, A, I, A, A, A, I, I, A, A, X, X, X],
    /* BA */ [A, X, I, I, I, X, X, X, A, A, A, A, A, A, I, I, A, A, X, X, X],
    /* BB */ [I, X, I, I, I, X, X, X, I, I, I, I, I, I, I, I, I, I, X, X, X],
    /* B2 */ [A, X, I, I, I, X, X, X, A, A, A, A, A, A, I, I, A, X, X, X, X],
    /* ZW */ [A, A, A, A, A, A, A, A, A, A, A, A, A, A, A, A, A, A, X, X, A],
    /* CM */ [X, X, I, I, I, X, X, X, A, A, I, I, A, I, I, I, A, A, X, X, X],
    /* WJ */ [I, X, I, I, I, X, X, X, I, I, I, I, I, I, I, I, I, I, X, X, X],
];

/// Break opportunity between two table-driven classes.
#[inline]
pub fn lookup(before: TableClass, after: TableClass) -> BreakOpportunity {
    PAIR_TABLE[before as usize][after as usize]
}

/// Break opportunity between two classes, if both are table-driven.
pub fn lookup_classes(before: BreakClass, after: BreakClass) -> Option<BreakOpportunity> {
    Some(lookup(TableClass::of(before)?, TableClass::of(after)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use BreakOpportunity::*;

    #[test]
    fn open_punctuation_never_breaks_after() {
        for after in 0..TABLE_SIZE {
            assert_eq!(PAIR_TABLE[TableClass::OpenPunctuation as usize][after], Prohibited);
        }
    }

    #[test]
    fn zero_width_space_allows_break_after() {
        assert_eq!(lookup(TableClass::ZeroWidthSpace, TableClass::Alphabetic), Allowed);
        assert_eq!(lookup(TableClass::ZeroWidthSpace, TableClass::ZeroWidthSpace), Prohibited);
    }

    #[test]
    fn alphabetic_pairs() {
        assert_eq!(lookup(TableClass::Alphabetic, TableClass::Alphabetic), IfSpaces);
        assert_eq!(lookup(TableClass::Alphabetic, TableClass::OpenPunctuation), Prohibited);
        assert_eq!(lookup(TableClass::Alphabetic, TableClass::ClosePunctuation), Prohibited);
        assert_eq!(lookup(TableClass::Hyphen, TableClass::Alphabetic), Allowed);
        assert_eq!(lookup(TableClass::ClosePunctuation, TableClass::Alphabetic), Allowed);
    }

    #[test]
    fn numeric_context() {
        assert_eq!(lookup(TableClass::Prefix, TableClass::Numeric), IfSpaces);
        assert_eq!(lookup(TableClass::Numeric, TableClass::Postfix), IfSpaces);
        assert_eq!(lookup(TableClass::InfixSeparator, TableClass::Numeric), IfSpaces);
        assert_eq!(lookup(TableClass::Hyphen, TableClass::Numeric), IfSpaces);
    }

    #[test]
    fn rule_resolved_classes_are_not_in_table() {
        assert_eq!(TableClass::of(BreakClass::Space), None);
        assert_eq!(TableClass::of(BreakClass::HangulLJamo), None);
        assert_eq!(TableClass::of(BreakClass::Unknown), None);
        assert_eq!(lookup_classes(BreakClass::Mandatory, BreakClass::Alphabetic), None);
        assert_eq!(
            lookup_classes(BreakClass::Ideographic, BreakClass::Ideographic),
            Some(Allowed)
        );
    }
}
