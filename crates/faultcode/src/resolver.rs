//! Message resolution.
//!
//! A message is resolved in three steps, each used only when the previous
//! one yields nothing:
//!
//! 1. the code's template from the store, searched along the locale chain
//! 2. the code's default format
//! 3. the message key, followed by the arguments as `KEY [a, b]`
//!
//! Resolution is total. Store errors and panics are logged at trace level
//! and treated as a missing collection. Panics are only caught when the
//! final binary unwinds; under `panic = "abort"` a panicking store ends the
//! process.

use crate::FaultCode;
use faultcode_common::Result;
use faultcode_config::Config;
use faultcode_i18n::{
    EmptyTemplateStore, FaultArg, FluentTemplateStore, Locale, Template, TemplateStore, Templates,
};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, trace};

/// A template store paired with the default locale used for fallback.
#[derive(Debug, Clone)]
pub struct Resolver {
    store: Arc<dyn TemplateStore>,
    default_locale: Locale,
}

impl Resolver {
    /// Create a resolver over `store`
    pub fn new(store: impl TemplateStore + 'static, default_locale: Locale) -> Self {
        Self::from_shared(Arc::new(store), default_locale)
    }

    /// Create a resolver over an already shared store
    pub fn from_shared(store: Arc<dyn TemplateStore>, default_locale: Locale) -> Self {
        Self {
            store,
            default_locale,
        }
    }

    /// A resolver that only uses default formats
    pub fn without_store(default_locale: Locale) -> Self {
        Self::new(EmptyTemplateStore, default_locale)
    }

    /// Build a resolver from configuration.
    ///
    /// A configured templates directory becomes a [`FluentTemplateStore`];
    /// otherwise no store is used.
    pub fn from_config(config: &Config) -> Result<Self> {
        let default_locale = config.i18n.default_locale()?;
        let resolver = match &config.i18n.templates_dir {
            Some(dir) => {
                debug!(
                    templates_dir = %dir.display(),
                    cache = config.i18n.cache_templates,
                    "Using Fluent template store"
                );
                Self::new(
                    FluentTemplateStore::new(dir).with_caching(config.i18n.cache_templates),
                    default_locale,
                )
            }
            None => Self::without_store(default_locale),
        };
        Ok(resolver)
    }

    /// Replace the default locale
    #[must_use]
    pub fn with_default_locale(mut self, default_locale: Locale) -> Self {
        self.default_locale = default_locale;
        self
    }

    /// Replace the template store
    #[must_use]
    pub fn with_store(mut self, store: impl TemplateStore + 'static) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// The default locale
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// The template store
    pub fn store(&self) -> &Arc<dyn TemplateStore> {
        &self.store
    }

    /// Resolve the message for `code` in `locale`.
    pub fn resolve<C: FaultCode + ?Sized>(
        &self,
        code: &C,
        locale: &Locale,
        args: &[FaultArg],
    ) -> String {
        let key = code.message_key();

        if let Some(templates) = self.find(code.bundle_name(), locale, key) {
            if let Some(template) = templates.get(key) {
                return template.render(locale, args);
            }
        }

        match code.default_format() {
            Some(format) if !format.is_empty() => Template::parse(format).render(locale, args),
            _ => degraded_message(key, args),
        }
    }

    /// Find the first collection on the lookup chain that has `key`.
    ///
    /// The requested locale's candidates come first. The default locale's
    /// candidates are searched only when no collection at all exists for a
    /// non-root requested locale. The root collection is always last.
    fn find(&self, bundle: &str, locale: &Locale, key: &str) -> Option<Arc<Templates>> {
        let mut requested_found = false;
        for candidate in locale.candidates() {
            if let Some(templates) = self.load(bundle, &candidate) {
                requested_found = true;
                if templates.contains_key(key) {
                    return Some(templates);
                }
            }
        }

        if !requested_found && !locale.is_root() && self.default_locale != *locale {
            for candidate in self.default_locale.candidates() {
                if let Some(templates) = self.load(bundle, &candidate) {
                    if templates.contains_key(key) {
                        return Some(templates);
                    }
                }
            }
        }

        self.load(bundle, &Locale::root())
            .filter(|templates| templates.contains_key(key))
    }

    fn load(&self, bundle: &str, locale: &Locale) -> Option<Arc<Templates>> {
        let store = &self.store;
        match panic::catch_unwind(AssertUnwindSafe(|| store.load(bundle, locale))) {
            Ok(Ok(templates)) => templates,
            Ok(Err(error)) => {
                trace!(bundle, locale = %locale, %error, "Template lookup failed");
                None
            }
            Err(_) => {
                trace!(bundle, locale = %locale, "Template store panicked");
                None
            }
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::without_store(Locale::system())
    }
}

/// Resolve the message for `code` in `locale` with the process-wide resolver.
pub fn resolve<C: FaultCode + ?Sized>(code: &C, locale: &Locale, args: &[FaultArg]) -> String {
    crate::context::current().resolve(code, locale, args)
}

fn degraded_message(key: &str, args: &[FaultArg]) -> String {
    if args.is_empty() {
        return key.to_string();
    }
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("{key} [{}]", rendered.join(", "))
}
