//! Per-locale name selection.
//!
//! A [`Picker`] holds everything derived from the requested language and
//! the [`PickerConfig`]. It is immutable and can be shared across threads;
//! each feature gets its own [`Resolver`].

mod resolver;


pub use resolver::{Resolution, Resolver, Tier};

use tracing::debug;

use crate::config::PickerConfig;
use crate::keys::KeyScheme;
use crate::script::{script_of, Script};

/// Immutable name-selection context for one requested language.
#[derive(Debug, Clone)]
pub struct Picker {
    target_language: String,
    /// Requested code followed by its configured fallbacks.
    chain: Vec<String>,
    /// Lookup keys for each code in `chain`, same order.
    chain_keys: Vec<Vec<String>>,
    english_keys: Vec<String>,
    /// Key of the local name, when a local lookup applies.
    local_key: Option<String>,
    scheme: KeyScheme,
    script: Option<Script>,
    /// `-Cyrl` style suffixes for `script`, empty for Latin.
    script_suffixes: Vec<String>,
    force_local: bool,
}

impl Picker {
    /// Build a picker for `target_language` under `config`.
    pub fn new(target_language: impl Into<String>, config: &PickerConfig) -> Self {
        let target_language = target_language.into();
        let scheme = KeyScheme::new(config.name_tag.clone(), config.multi_tag.clone());

        let mut chain = vec![target_language.clone()];
        chain.extend(config.fallbacks_for(&target_language));
        let chain_keys = chain.iter().map(|code| scheme.keys_for(code)).collect();
        let english_keys = scheme.keys_for("en");

        let local_key = config.name_tag.clone();

        let script = script_of(&target_language);
        let script_suffixes: Vec<String> = script
            .map(|s| s.suffixes().iter().map(|tag| format!("-{tag}")).collect())
            .unwrap_or_default();

        debug!(
            "picker: lang={target_language} chain={chain:?} script={} force_local={}",
            script.map_or_else(|| "Latin".to_string(), |s| s.to_string()),
            config.force_local
        );

        Self {
            target_language,
            chain,
            chain_keys,
            english_keys,
            local_key,
            scheme,
            script,
            script_suffixes,
            force_local: config.force_local,
        }
    }

    /// Start resolving a new feature.
    pub fn new_resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }

    /// Resolve a whole feature in one call.
    pub fn pick<I, T, V>(&self, entries: I) -> Option<String>
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<String>,
        V: Into<String>,
    {
        let mut resolver = self.new_resolver();
        for (tag, value) in entries {
            resolver.add_value(tag, value);
        }
        resolver.into_result()
    }

    /// The requested language code.
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// The requested language followed by its configured fallbacks.
    pub fn fallback_chain(&self) -> &[String] {
        &self.chain
    }

    /// Script of the requested language, `None` for Latin.
    pub fn script(&self) -> Option<Script> {
        self.script
    }

    /// Tag conventions derived from `name_tag` and `multi_tag`.
    pub fn key_scheme(&self) -> &KeyScheme {
        &self.scheme
    }

    /// Whether the requested language is ignored in favour of the local name.
    pub fn force_local(&self) -> bool {
        self.force_local
    }
}
