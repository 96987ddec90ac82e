use crate::{DEFAULT_LOCALE, prelude::*};
use std::collections::BTreeMap;

///
/// LocaleMap
/// Locale-keyed display strings. Hosts resolve their active locale and
/// fall back to `en` when a translation is absent, so the `en` entry is
/// mandatory.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocaleMap {
    entries: BTreeMap<String, String>,
}

impl LocaleMap {
    /// Map holding only the `en` entry.
    #[must_use]
    pub fn en(text: impl Into<String>) -> Self {
        let mut map = Self::default();
        map.insert(DEFAULT_LOCALE, text);

        map
    }

    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(locale.into(), text.into());
    }

    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locale, text);

        self
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries.get(locale).map(String::as_str)
    }

    /// Resolve a locale with the `en` fallback contract.
    #[must_use]
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        self.get(locale).or_else(|| self.get(DEFAULT_LOCALE))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ValidateNode for LocaleMap {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.get(DEFAULT_LOCALE).is_none() {
            err!(errs, "label is missing the mandatory '{DEFAULT_LOCALE}' locale");
        }

        for (locale, text) in &self.entries {
            if locale.is_empty() {
                err!(errs, "empty locale code");
            }
            if text.is_empty() {
                err!(errs, "label for locale '{locale}' is empty");
            }
        }

        errs.result()
    }
}

impl VisitableNode for LocaleMap {
    fn route_key(&self) -> String {
        "label".to_string()
    }
}
