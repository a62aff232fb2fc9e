//! Tag key derivation for language lookups.

/// Tagging conventions a feature's names follow.
///
/// With `name_tag = "name"` the English label may appear as `en` or
/// `name_en`; with `multi_tag = "name:"` it may also appear as `name:en`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScheme {
    /// Local name tag, enabling `{name_tag}_{code}` keys.
    pub name_tag: Option<String>,
    /// Namespace prefix, enabling `{multi_tag}{code}` keys.
    pub multi_tag: Option<String>,
}

impl KeyScheme {
    /// Build a scheme from the optional local tag and namespace prefix.
    pub fn new(name_tag: Option<String>, multi_tag: Option<String>) -> Self {
        Self {
            name_tag,
            multi_tag,
        }
    }

    /// Tag keys that carry a value for `code`, in preference order:
    /// the bare code, then `{multi_tag}{code}`, then `{name_tag}_{code}`.
    pub fn keys_for(&self, code: &str) -> Vec<String> {
        let mut keys = vec![code.to_string()];
        if let Some(ref multi) = self.multi_tag {
            keys.push(format!("{multi}{code}"));
        }
        if let Some(ref name) = self.name_tag {
            keys.push(format!("{name}_{code}"));
        }
        keys
    }

    /// Strip a configured namespace from `tag`, leaving the language code.
    ///
    /// `name:uk` becomes `uk` under `multi_tag = "name:"`, and `name_uk`
    /// becomes `uk` under `name_tag = "name"`. Other tags come back as-is.
    pub fn bare_code<'t>(&self, tag: &'t str) -> &'t str {
        if let Some(rest) = self
            .multi_tag
            .as_deref()
            .and_then(|multi| tag.strip_prefix(multi))
        {
            return rest;
        }
        if let Some(rest) = self
            .name_tag
            .as_deref()
            .and_then(|name| tag.strip_prefix(name))
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return rest;
        }
        tag
    }
}
