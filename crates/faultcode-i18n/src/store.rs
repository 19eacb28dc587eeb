//! Template collections and the stores that provide them

use crate::{Locale, Template};
use faultcode_common::Result;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One loaded template collection: message key to template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Templates {
    entries: HashMap<String, Template>,
}

impl Templates {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the template for `key`
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.entries.get(key)
    }

    /// Whether the collection has a template for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Add or replace a template
    pub fn insert(&mut self, key: impl Into<String>, template: Template) {
        self.entries.insert(key.into(), template);
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Message keys in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Template)> for Templates {
    fn from_iter<I: IntoIterator<Item = (K, Template)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }
}

/// Read-only source of template collections keyed by (bundle, locale).
///
/// `Ok(None)` means no collection exists for exactly that locale; stores do
/// not apply locale fallback themselves. Implementations must be cheap to
/// call repeatedly and safe to share across threads.
///
/// Report failures as `Err`, never by panicking. Resolution treats an error
/// as a missing collection and also catches unwinding panics, but a binary
/// built with `panic = "abort"` terminates on the first panic.
pub trait TemplateStore: Send + Sync + fmt::Debug {
    /// Load the collection for `bundle` in exactly `locale`.
    fn load(&self, bundle: &str, locale: &Locale) -> Result<Option<Arc<Templates>>>;
}

impl<S: TemplateStore + ?Sized> TemplateStore for Arc<S> {
    fn load(&self, bundle: &str, locale: &Locale) -> Result<Option<Arc<Templates>>> {
        (**self).load(bundle, locale)
    }
}

impl<S: TemplateStore + ?Sized> TemplateStore for Box<S> {
    fn load(&self, bundle: &str, locale: &Locale) -> Result<Option<Arc<Templates>>> {
        (**self).load(bundle, locale)
    }
}

/// A store with no collections at all
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTemplateStore;

impl TemplateStore for EmptyTemplateStore {
    fn load(&self, _bundle: &str, _locale: &Locale) -> Result<Option<Arc<Templates>>> {
        Ok(None)
    }
}

/// In-memory store populated in code.
///
/// Templates are given in `MessageFormat` syntax, e.g. `"Disk {0} full"`.
#[derive(Debug, Clone, Default)]
pub struct MapTemplateStore {
    collections: HashMap<(String, Locale), Arc<Templates>>,
}

impl MapTemplateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, creating the collection if needed.
    pub fn insert(
        &mut self,
        bundle: impl Into<String>,
        locale: &Locale,
        key: impl Into<String>,
        pattern: &str,
    ) -> &mut Self {
        let collection = self
            .collections
            .entry((bundle.into(), locale.clone()))
            .or_default();
        Arc::make_mut(collection).insert(key, Template::parse(pattern));
        self
    }

    /// Builder form of [`MapTemplateStore::insert`]
    #[must_use]
    pub fn with(
        mut self,
        bundle: impl Into<String>,
        locale: &Locale,
        key: impl Into<String>,
        pattern: &str,
    ) -> Self {
        self.insert(bundle, locale, key, pattern);
        self
    }

    /// Register an empty collection, so the locale counts as present.
    pub fn insert_collection(&mut self, bundle: impl Into<String>, locale: &Locale) -> &mut Self {
        self.collections
            .entry((bundle.into(), locale.clone()))
            .or_default();
        self
    }

    /// Number of (bundle, locale) collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the store has no collections
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl TemplateStore for MapTemplateStore {
    fn load(&self, bundle: &str, locale: &Locale) -> Result<Option<Arc<Templates>>> {
        Ok(self
            .collections
            .get(&(bundle.to_string(), locale.clone()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_nothing() {
        let store = EmptyTemplateStore;
        assert!(store.load("app::Code", &Locale::english()).unwrap().is_none());
    }

    #[test]
    fn test_map_store_is_exact_per_locale() {
        let sv = Locale::parse("sv").unwrap();
        let sv_se = Locale::parse("sv-SE").unwrap();
        let store = MapTemplateStore::new().with("app::Code", &sv, "ERROR_1", "Fel: {0}");

        let templates = store.load("app::Code", &sv).unwrap().unwrap();
        assert!(templates.contains_key("ERROR_1"));
        assert_eq!(templates.len(), 1);
        assert!(store.load("app::Code", &sv_se).unwrap().is_none());
        assert!(store.load("other::Code", &sv).unwrap().is_none());
    }

    #[test]
    fn test_insert_extends_existing_collection() {
        let root = Locale::root();
        let mut store = MapTemplateStore::new();
        store
            .insert("b", &root, "A", "a")
            .insert("b", &root, "B", "b {0}");
        assert_eq!(store.len(), 1);

        let templates = store.load("b", &root).unwrap().unwrap();
        let mut keys: Vec<_> = templates.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(templates.get("B").unwrap().arity(), 1);
    }

    #[test]
    fn test_empty_collection_counts_as_present() {
        let mut store = MapTemplateStore::new();
        store.insert_collection("b", &Locale::english());
        let templates = store.load("b", &Locale::english()).unwrap().unwrap();
        assert!(templates.is_empty());
    }

    #[test]
    fn test_shared_store_delegates() {
        let store: Arc<dyn TemplateStore> =
            Arc::new(MapTemplateStore::new().with("b", &Locale::root(), "K", "v"));
        assert!(store.load("b", &Locale::root()).unwrap().is_some());
    }

    #[test]
    fn test_templates_from_iterator() {
        let templates: Templates = [("K", Template::literal("v"))].into_iter().collect();
        assert_eq!(templates.get("K"), Some(&Template::literal("v")));
    }
}
