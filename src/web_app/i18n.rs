// web_app/i18n.rs - Translation catalogs and key lookup
//
// Catalogs are flat JSON objects, one file per namespace per locale, under
// `locales/`. They are compiled in, so the server render and the hydrated
// client resolve exactly the same strings.
//
// Keys are written `namespace:key`; a key without a namespace is looked up
// in `common`. An unresolved key renders as itself.

use std::collections::HashMap;

use crate::web_app::error::I18nError;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_NAMESPACE: &str = "common";

/// Query parameter selecting the catalog locale
pub const LOCALE_PARAM: &str = "lang";

/// Namespaces the manufacturer list page needs before its first render
pub const MANUFACTURERS_PAGE_NAMESPACES: &[&str] = &["table", "common", "form"];

/// (locale, namespace, raw JSON)
const BUNDLED_CATALOGS: &[(&str, &str, &str)] = &[
    ("en", "common", include_str!("../../locales/en/common.json")),
    ("en", "form", include_str!("../../locales/en/form.json")),
    ("en", "table", include_str!("../../locales/en/table.json")),
];

#[derive(Clone, Debug, Default)]
pub struct Translator {
    locale: String,
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    /// Empty translator: every key resolves to itself
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            namespaces: HashMap::new(),
        }
    }

    /// Load the bundled catalogs of `namespaces` for `locale`
    ///
    /// Locales without bundled catalogs fall back to `DEFAULT_LOCALE`.
    /// Namespaces without a catalog are skipped with a warning; their keys
    /// then render verbatim.
    pub fn for_page(locale: &str, namespaces: &[&str]) -> Self {
        let locale = if has_bundled_locale(locale) {
            locale
        } else {
            tracing::warn!(locale, fallback = DEFAULT_LOCALE, "no catalogs for locale");
            DEFAULT_LOCALE
        };

        let mut translator = Self::new(locale);
        for namespace in namespaces {
            if let Err(e) = translator.load_bundled(namespace) {
                tracing::warn!("{}", e);
            }
        }
        translator
    }

    /// Translator for the locale named in the `lang` query parameter
    ///
    /// A missing or blank parameter selects `DEFAULT_LOCALE`.
    pub fn for_query(lang: Option<&str>, namespaces: &[&str]) -> Self {
        let locale = lang
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCALE);
        Self::for_page(locale, namespaces)
    }

    fn load_bundled(&mut self, namespace: &str) -> Result<(), I18nError> {
        let raw = BUNDLED_CATALOGS
            .iter()
            .find(|(loc, ns, _)| *loc == self.locale && *ns == namespace)
            .map(|(_, _, raw)| *raw)
            .ok_or_else(|| I18nError::MissingNamespace {
                namespace: namespace.to_string(),
            })?;
        self.add_json(namespace, raw)
    }

    /// Parse a flat `{ "key": "text" }` catalog into `namespace`
    ///
    /// Entries are merged over any already loaded for the namespace.
    pub fn add_json(&mut self, namespace: &str, raw: &str) -> Result<(), I18nError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|source| I18nError::Parse {
                namespace: namespace.to_string(),
                source,
            })?;
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .extend(entries);
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate `key`, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        let (namespace, name) = key.split_once(':').unwrap_or((DEFAULT_NAMESPACE, key));
        self.namespaces
            .get(namespace)
            .and_then(|entries| entries.get(name))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn has_bundled_locale(locale: &str) -> bool {
    BUNDLED_CATALOGS.iter().any(|(loc, _, _)| *loc == locale)
}
