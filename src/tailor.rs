// tailor.rs - Per-script tailoring hook.
//
// A tailoring engine may rewrite the attributes of one same-script run
// after the default scan. It only sees its own run, so the decisions the
// default scan made at the run's first position (which depend on the
// previous run's last character) are restored after it returns.

use std::fmt;
use std::sync::Arc;

use log::debug;
use smallvec::SmallVec;

use crate::logattr::{AttrFlags, LogAttr};
use crate::props::Script;

/// What a tailoring engine is told about the run it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailorContext<'a> {
    /// Script of the run.
    pub script: Script,
    /// Bidi embedding level, passed through untouched.
    pub embedding_level: Option<i32>,
    /// Language tag, passed through untouched.
    pub language: Option<&'a str>,
}

/// A script-specific segmentation engine.
///
/// `attrs` covers the run plus its end position (one more record than
/// `text` has codepoints) and already holds the default attributes.
/// Return `true` if the engine handled the run.
///
/// Engines are shared between segmenters and must tolerate concurrent calls
/// for different texts.
pub trait ScriptTailor: Send + Sync {
    fn tailor(&self, text: &str, context: &TailorContext<'_>, attrs: &mut [LogAttr]) -> bool;
}

impl<F> ScriptTailor for F
where
    F: Fn(&str, &TailorContext<'_>, &mut [LogAttr]) -> bool + Send + Sync,
{
    fn tailor(&self, text: &str, context: &TailorContext<'_>, attrs: &mut [LogAttr]) -> bool {
        self(text, context, attrs)
    }
}

// === Registry ===

/// Tailoring engines keyed by script. Scripts without an engine keep the
/// default attributes.
///
/// Segmentation is the only engine capability, so the script alone is the
/// key.
#[derive(Clone, Default)]
pub struct TailorRegistry {
    engines: SmallVec<[(Script, Arc<dyn ScriptTailor>); 4]>,
}

impl TailorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tailor` for `script`, replacing any earlier engine.
    pub fn register(&mut self, script: Script, tailor: Arc<dyn ScriptTailor>) {
        match self.engines.iter_mut().find(|(s, _)| *s == script) {
            Some(entry) => entry.1 = tailor,
            None => self.engines.push((script, tailor)),
        }
    }

    /// The engine for `script`, if any.
    pub fn get(&self, script: Script) -> Option<&dyn ScriptTailor> {
        self.engines
            .iter()
            .find(|(s, _)| *s == script)
            .map(|(_, t)| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl fmt::Debug for TailorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.engines.iter().map(|(s, _)| s))
            .finish()
    }
}

// === Boundary restore ===

/// Run `tailor` over one run and enforce the boundary-restore contract.
///
/// If the engine reports it handled the run, the cursor, line-break and
/// mandatory-break flags of `attrs[0]` are OR-ed back in from the default
/// scan and its backspace flag is put back as it was.
pub fn apply_tailor(
    tailor: &dyn ScriptTailor,
    text: &str,
    context: &TailorContext<'_>,
    attrs: &mut [LogAttr],
) -> bool {
    let Some(saved) = attrs.first().copied() else {
        return false;
    };
    if !tailor.tailor(text, context, attrs) {
        return false;
    }

    if let Some(first) = attrs.first_mut() {
        let kept =
            AttrFlags::CURSOR_POSITION | AttrFlags::LINE_BREAK | AttrFlags::MANDATORY_BREAK;
        first.set(saved.flags() & kept, true);
        first.set_backspace_deletes_character(saved.backspace_deletes_character());
    }
    debug!("tailoring for {:?} handled; restored run start", context.script);
    true
}
