use std::fmt;

use tracing::trace;

use super::Picker;

/// Which stage of resolution produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Requested language or one of its configured fallbacks.
    Chain,
    /// A tag carrying the target's script suffix, e.g. `sr-Cyrl`.
    ScriptSuffix,
    /// Another language written in the target's script.
    ScriptSibling,
    /// English, for Latin-script targets.
    English,
    /// A `_rm` romanized value, for Latin-script targets.
    Romanized,
    /// The untranslated local name.
    Local,
    /// The first value added.
    First,
}

impl Tier {
    /// Short lowercase name, as printed by `--explain`.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Chain => "chain",
            Tier::ScriptSuffix => "script-suffix",
            Tier::ScriptSibling => "script-sibling",
            Tier::English => "english",
            Tier::Romanized => "romanized",
            Tier::Local => "local",
            Tier::First => "first",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chosen value and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The chosen value.
    pub value: &'a str,
    /// The tier that chose it.
    pub tier: Tier,
}

/// Accumulates one feature's names and picks one of them.
///
/// Insertion order matters: among equally good candidates the earliest
/// wins, and the first value is the last resort.
#[derive(Debug)]
pub struct Resolver<'p> {
    picker: &'p Picker,
    entries: Vec<(String, String)>,
}

impl<'p> Resolver<'p> {
    pub(super) fn new(picker: &'p Picker) -> Self {
        Self {
            picker,
            entries: Vec::new(),
        }
    }

    /// Record a `(tag, value)` pair. Duplicate tags are kept.
    pub fn add_value(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.entries.push((tag.into(), value.into()));
    }

    /// Number of `(tag, value)` pairs added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pairs have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The chosen value, or `None` when nothing was added.
    pub fn result(&self) -> Option<&str> {
        self.resolve().map(|r| r.value)
    }

    /// Consume the resolver, returning an owned value.
    pub fn into_result(mut self) -> Option<String> {
        let idx = self.resolve_index()?.0;
        Some(self.entries.swap_remove(idx).1)
    }

    /// The chosen value along with the tier that produced it.
    pub fn resolve(&self) -> Option<Resolution<'_>> {
        let (idx, tier) = self.resolve_index()?;
        Some(Resolution {
            value: &self.entries[idx].1,
            tier,
        })
    }

    fn resolve_index(&self) -> Option<(usize, Tier)> {
        if self.entries.is_empty() {
            return None;
        }
        let picker = self.picker;

        let found = if picker.force_local {
            None
        } else {
            self.find_in_chain()
                .map(|i| (i, Tier::Chain))
                .or_else(|| match picker.script {
                    Some(_) => self.find_same_script(),
                    None => self.find_latin_fallback(),
                })
        };

        let (idx, tier) = found
            .or_else(|| self.find_local().map(|i| (i, Tier::Local)))
            .unwrap_or((0, Tier::First));

        trace!(
            "resolve: lang={} tier={tier} tag={}",
            picker.target_language,
            self.entries[idx].0
        );
        Some((idx, tier))
    }

    /// Index of the first entry whose tag is one of `keys`.
    fn position_of(&self, keys: &[String]) -> Option<usize> {
        self.entries
            .iter()
            .position(|(tag, _)| keys.iter().any(|k| k == tag))
    }

    fn find_in_chain(&self) -> Option<usize> {
        self.picker
            .chain_keys
            .iter()
            .find_map(|keys| self.position_of(keys))
    }

    fn find_same_script(&self) -> Option<(usize, Tier)> {
        let suffixes = &self.picker.script_suffixes;
        if let Some(i) = self
            .entries
            .iter()
            .position(|(tag, _)| suffixes.iter().any(|s| tag.ends_with(s.as_str())))
        {
            return Some((i, Tier::ScriptSuffix));
        }

        let script = self.picker.script?;
        let scheme = &self.picker.scheme;
        self.entries
            .iter()
            .position(|(tag, _)| script.has_sibling(scheme.bare_code(tag)))
            .map(|i| (i, Tier::ScriptSibling))
    }

    fn find_latin_fallback(&self) -> Option<(usize, Tier)> {
        if let Some(i) = self.position_of(&self.picker.english_keys) {
            return Some((i, Tier::English));
        }
        self.entries
            .iter()
            .position(|(tag, _)| tag.ends_with("_rm"))
            .map(|i| (i, Tier::Romanized))
    }

    fn find_local(&self) -> Option<usize> {
        let key = self.picker.local_key.as_deref()?;
        self.entries.iter().position(|(tag, _)| tag == key)
    }
}
