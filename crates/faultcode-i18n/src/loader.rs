//! Fluent template files on disk, loaded lazily and cached.

use crate::resource::parse_templates;
use crate::store::{TemplateStore, Templates};
use crate::Locale;
use dashmap::DashMap;
use faultcode_common::{FaultcodeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Template store reading one Fluent file per (bundle, locale).
///
/// Bundle `app::db::Code` maps to `<root>/app/db/Code.ftl` for the root
/// locale and `<root>/app/db/Code.sv-SE.ftl` for `sv-SE`. Loaded
/// collections and missing files are cached until [`clear_cache`] is
/// called; load errors are not cached.
///
/// [`clear_cache`]: FluentTemplateStore::clear_cache
#[derive(Debug)]
pub struct FluentTemplateStore {
    root: PathBuf,
    caching: bool,
    cache: DashMap<(String, Locale), Option<Arc<Templates>>>,
}

impl FluentTemplateStore {
    /// Create a store rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            caching: true,
            cache: DashMap::new(),
        }
    }

    /// Enable or disable caching; disabled stores re-read files on every load
    #[must_use]
    pub const fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    /// The root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file consulted for `bundle` in `locale`.
    pub fn path_for(&self, bundle: &str, locale: &Locale) -> Result<PathBuf> {
        let components: Vec<&str> = bundle
            .split("::")
            .flat_map(|part| part.split('.'))
            .filter(|part| !part.is_empty())
            .collect();

        let Some((file_stem, dirs)) = components.split_last() else {
            return Err(FaultcodeError::store(format!("empty bundle name '{bundle}'")));
        };
        if components
            .iter()
            .any(|part| part.contains(['/', '\\']) || *part == "..")
        {
            return Err(FaultcodeError::store(format!("bundle name '{bundle}' is not a relative path")));
        }

        let mut path = self.root.clone();
        path.extend(dirs);
        let file_name = if locale.is_root() {
            format!("{file_stem}.ftl")
        } else {
            format!("{file_stem}.{}.ftl", locale.tag())
        };
        path.push(file_name);
        Ok(path)
    }

    /// Drop every cached collection
    pub fn clear_cache(&self) {
        self.cache.clear();
        info!(root = %self.root.display(), "Cleared template cache");
    }

    /// Number of cached (bundle, locale) lookups, hits and misses alike
    pub fn cached_collections(&self) -> usize {
        self.cache.len()
    }

    fn read(&self, bundle: &str, locale: &Locale) -> Result<Option<Arc<Templates>>> {
        let path = self.path_for(bundle, locale)?;
        if !path.is_file() {
            debug!(path = %path.display(), "No template file");
            return Ok(None);
        }

        let source = fs::read_to_string(&path).map_err(|source| FaultcodeError::TemplateLoad {
            path: path.clone(),
            source,
        })?;
        let templates = parse_templates(&path, source)?;
        debug!(
            path = %path.display(),
            templates = templates.len(),
            "Loaded template collection"
        );
        Ok(Some(Arc::new(templates)))
    }
}

impl TemplateStore for FluentTemplateStore {
    fn load(&self, bundle: &str, locale: &Locale) -> Result<Option<Arc<Templates>>> {
        if !self.caching {
            return self.read(bundle, locale);
        }

        let key = (bundle.to_string(), locale.clone());
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.value().clone());
        }

        let loaded = self.read(bundle, locale)?;
        self.cache.insert(key, loaded.clone());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultcode_common::test_utils::{template_fixtures, write_file};

    #[test]
    fn test_path_layout() {
        let store = FluentTemplateStore::new("/locales");
        let sv = Locale::parse("sv-SE").unwrap();
        assert_eq!(
            store.path_for("app::db::Code", &sv).unwrap(),
            PathBuf::from("/locales/app/db/Code.sv-SE.ftl")
        );
        assert_eq!(
            store.path_for("se.example.Code", &Locale::root()).unwrap(),
            PathBuf::from("/locales/se/example/Code.ftl")
        );
    }

    #[test]
    fn test_path_rejects_bad_bundles() {
        let store = FluentTemplateStore::new("/locales");
        assert!(store.path_for("", &Locale::root()).is_err());
        assert!(store.path_for("::", &Locale::root()).is_err());
        assert!(store.path_for("a::../b", &Locale::root()).is_err());
    }

    #[test]
    fn test_load_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "app/Code.ftl", template_fixtures::root_ftl());
        let store = FluentTemplateStore::new(dir.path());

        let templates = store.load("app::Code", &Locale::root()).unwrap().unwrap();
        assert!(templates.contains_key("ERROR_1"));
        assert!(store.load("app::Code", &Locale::english()).unwrap().is_none());
        assert_eq!(store.cached_collections(), 2);

        // Cached misses survive new files until the cache is cleared
        write_file(dir.path(), "app/Code.en-US.ftl", "ERROR_1 = English { 0 }\n");
        assert!(store.load("app::Code", &Locale::english()).unwrap().is_none());
        store.clear_cache();
        assert!(store.load("app::Code", &Locale::english()).unwrap().is_some());
    }

    #[test]
    fn test_uncached_store_rereads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FluentTemplateStore::new(dir.path()).with_caching(false);
        assert!(store.load("Code", &Locale::root()).unwrap().is_none());

        write_file(dir.path(), "Code.ftl", "ERROR_1 = now here\n");
        assert!(store.load("Code", &Locale::root()).unwrap().is_some());
        assert_eq!(store.cached_collections(), 0);
    }

    #[test]
    fn test_malformed_file_is_an_error_and_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "Code.ftl", template_fixtures::malformed_ftl());
        let store = FluentTemplateStore::new(dir.path());

        let err = store.load("Code", &Locale::root()).unwrap_err();
        assert!(matches!(err, FaultcodeError::TemplateParse { .. }));
        assert_eq!(store.cached_collections(), 0);
    }
}
