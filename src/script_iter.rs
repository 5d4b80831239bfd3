// script_iter.rs - Split text into maximal same-script runs.
//
// Common, Inherited and Unknown characters join whatever run they are in;
// a run made only of such characters takes the first real script that
// follows. Paired brackets are tracked on a stack so that a closing
// bracket gets the script of the run its opening bracket was in.

use smallvec::SmallVec;

use crate::props::{PropertyOracle, Script};

const PAREN_STACK_DEPTH: usize = 128;

// Open/close pairs, sorted. Even index opens, odd index closes.
static PAIRED_CHARS: [char; 34] = [
    '\u{0028}', '\u{0029}', // ( )
    '\u{003C}', '\u{003E}', // < >
    '\u{005B}', '\u{005D}', // [ ]
    '\u{007B}', '\u{007D}', // { }
    '\u{00AB}', '\u{00BB}', // « »
    '\u{2018}', '\u{2019}',
    '\u{201C}', '\u{201D}',
    '\u{2039}', '\u{203A}',
    '\u{3008}', '\u{3009}',
    '\u{300A}', '\u{300B}',
    '\u{300C}', '\u{300D}',
    '\u{300E}', '\u{300F}',
    '\u{3010}', '\u{3011}',
    '\u{3014}', '\u{3015}',
    '\u{3016}', '\u{3017}',
    '\u{3018}', '\u{3019}',
    '\u{301A}', '\u{301B}',
];

fn pair_index(ch: char) -> Option<usize> {
    PAIRED_CHARS.binary_search(&ch).ok()
}

#[inline]
fn is_open(pair: usize) -> bool {
    pair & 1 == 0
}

/// True for scripts that never end a run on their own.
#[inline]
pub fn is_neutral(script: Script) -> bool {
    script == Script::Common || script == Script::Inherited || script == Script::Unknown
}

#[inline]
fn same_script(a: Script, b: Script) -> bool {
    is_neutral(a) || is_neutral(b) || a == b
}

#[derive(Debug, Clone, Copy)]
struct Paren {
    pair: usize,
    script: Script,
}

/// A maximal same-script span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun {
    pub script: Script,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the last character.
    pub end: usize,
    /// Index of the first codepoint.
    pub char_start: usize,
    /// Index just past the last codepoint.
    pub char_end: usize,
}

impl ScriptRun {
    /// Number of codepoints in the run.
    pub fn char_len(&self) -> usize {
        self.char_end - self.char_start
    }
}

/// Iterator over the script runs of a text.
pub struct ScriptIter<'a, 'o> {
    text: &'a str,
    oracle: &'o dyn PropertyOracle,
    pos: usize,
    char_pos: usize,
    parens: SmallVec<[Paren; 8]>,
}

impl<'a, 'o> ScriptIter<'a, 'o> {
    pub fn new(text: &'a str, oracle: &'o dyn PropertyOracle) -> Self {
        ScriptIter {
            text,
            oracle,
            pos: 0,
            char_pos: 0,
            parens: SmallVec::new(),
        }
    }

    fn push_paren(&mut self, paren: Paren, fixup_from: &mut usize) {
        if self.parens.len() == PAREN_STACK_DEPTH {
            self.parens.remove(0);
            *fixup_from = fixup_from.saturating_sub(1);
        }
        self.parens.push(paren);
    }
}

impl Iterator for ScriptIter<'_, '_> {
    type Item = ScriptRun;

    fn next(&mut self) -> Option<ScriptRun> {
        let text = self.text;
        let rest = text.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }

        let mut run_script = Script::Common;
        // Parens from here up were pushed before the run's script was known.
        let mut fixup_from = self.parens.len();
        let mut end = rest.len();
        let mut chars = 0;

        for (offset, ch) in rest.char_indices() {
            let mut script = self.oracle.script(ch);
            let pair = if script == Script::Common {
                pair_index(ch)
            } else {
                None
            };

            let mut closes = false;
            if let Some(pair) = pair {
                if is_open(pair) {
                    self.push_paren(
                        Paren {
                            pair,
                            script: run_script,
                        },
                        &mut fixup_from,
                    );
                } else {
                    match self.parens.iter().rposition(|p| p.pair == (pair & !1)) {
                        Some(found) => {
                            self.parens.truncate(found + 1);
                            script = self.parens[found].script;
                            closes = true;
                        }
                        None => self.parens.clear(),
                    }
                    fixup_from = fixup_from.min(self.parens.len());
                }
            }

            if !same_script(run_script, script) {
                end = offset;
                break;
            }

            if is_neutral(run_script) && !is_neutral(script) {
                run_script = script;
                for paren in &mut self.parens[fixup_from..] {
                    paren.script = script;
                }
                fixup_from = self.parens.len();
            }
            if closes {
                self.parens.pop();
                fixup_from = fixup_from.min(self.parens.len());
            }
            chars += 1;
        }

        let run = ScriptRun {
            script: run_script,
            start: self.pos,
            end: self.pos + end,
            char_start: self.char_pos,
            char_end: self.char_pos + chars,
        };
        self.pos += end;
        self.char_pos += chars;
        Some(run)
    }
}

impl std::iter::FusedIterator for ScriptIter<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::UnicodeOracle;

    fn runs(text: &str) -> Vec<(Script, &str)> {
        ScriptIter::new(text, &UnicodeOracle)
            .map(|r| (r.script, &text[r.start..r.end]))
            .collect()
    }

    #[test]
    fn single_script() {
        assert_eq!(runs("hello world"), vec![(Script::Latin, "hello world")]);
        assert!(runs("").is_empty());
    }

    #[test]
    fn common_joins_current_run() {
        assert_eq!(
            runs("abc \u{0E01}\u{0E02}"),
            vec![(Script::Latin, "abc "), (Script::Thai, "\u{0E01}\u{0E02}")]
        );
    }

    #[test]
    fn leading_common_adopts_first_script() {
        assert_eq!(runs("123 abc"), vec![(Script::Latin, "123 abc")]);
        assert_eq!(runs("!?"), vec![(Script::Common, "!?")]);
    }

    #[test]
    fn closing_bracket_follows_opening() {
        // The ')' belongs with the Latin run that opened it, not the
        // Greek word inside.
        let text = "a(\u{03B1})b";
        assert_eq!(
            runs(text),
            vec![
                (Script::Latin, "a("),
                (Script::Greek, "\u{03B1}"),
                (Script::Latin, ")b"),
            ]
        );
    }

    #[test]
    fn char_offsets() {
        let text = "ab \u{0E01}\u{0E02}\u{0E03}";
        let all: Vec<_> = ScriptIter::new(text, &UnicodeOracle).collect();
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].char_start, all[0].char_end), (0, 3));
        assert_eq!((all[1].char_start, all[1].char_end), (3, 6));
        assert_eq!(all[1].char_len(), 3);
    }
}
