//! Process-wide resolution context.
//!
//! Errors resolve their message when they are constructed, so the resolver
//! they use is global. It starts with no template store and the locale from
//! the environment, and can be replaced atomically at any time. Readers never
//! block; a replacement only affects errors constructed afterwards.

use crate::Resolver;
use arc_swap::ArcSwap;
use faultcode_common::{init_logging, Result};
use faultcode_config::{Config, ConfigCache, ConfigLoader};
use faultcode_i18n::{Locale, TemplateStore};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::info;

static RESOLVER: Lazy<ArcSwap<Resolver>> = Lazy::new(|| ArcSwap::from_pointee(Resolver::default()));

static CONFIG: Lazy<ConfigCache> = Lazy::new(|| ConfigCache::new(Config::default()));

/// The resolver currently in effect
pub fn current() -> Arc<Resolver> {
    RESOLVER.load_full()
}

/// The configuration last passed to [`install_config`] or [`init`]
pub fn config() -> Arc<Config> {
    CONFIG.get()
}

/// Replace the process-wide resolver
pub fn install(resolver: Resolver) {
    info!(default_locale = %resolver.default_locale(), "Installed fault message resolver");
    RESOLVER.store(Arc::new(resolver));
}

/// Build a resolver from `config` and install it.
pub fn install_config(config: &Config) -> Result<()> {
    config.validate()?;
    let resolver = Resolver::from_config(config)?;
    CONFIG.update(config.clone());
    install(resolver);
    Ok(())
}

/// Load configuration from the environment, start logging and install the
/// configured resolver.
///
/// Fails if a global tracing subscriber is already set.
pub fn init() -> Result<()> {
    let config = ConfigLoader::load()?;
    init_logging(&config.logging)?;
    install_config(&config)
}

/// The process default locale
pub fn default_locale() -> Locale {
    RESOLVER.load().default_locale().clone()
}

/// Change the default locale, keeping the current template store
pub fn set_default_locale(locale: Locale) {
    info!(default_locale = %locale, "Changed default locale");
    RESOLVER.rcu(|current| Resolver::clone(current).with_default_locale(locale.clone()));
}

/// Change the template store, keeping the current default locale
pub fn set_template_store(store: impl TemplateStore + 'static) {
    let store: Arc<dyn TemplateStore> = Arc::new(store);
    RESOLVER.rcu(|current| Resolver::from_shared(Arc::clone(&store), current.default_locale().clone()));
}

/// Restore the initial resolver: no store, locale from the environment
pub fn reset() {
    RESOLVER.store(Arc::new(Resolver::default()));
    CONFIG.update(Config::default());
}
