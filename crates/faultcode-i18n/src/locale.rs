//! Locale management and utilities

use faultcode_common::{FaultcodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Environment variables consulted by [`Locale::system`], highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A BCP-47 locale such as `sv-SE` or `de`.
///
/// The root locale (`und`) names the locale-neutral template collection
/// that every lookup ends with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// The locale-neutral root locale
    pub fn root() -> Self {
        Self(LanguageIdentifier::default())
    }

    /// US English, used when the environment names no usable locale
    pub fn english() -> Self {
        Self(unic_langid::langid!("en-US"))
    }

    /// Parse a locale tag.
    ///
    /// Accepts BCP-47 (`sv-SE`) and POSIX-style underscores (`sv_SE`). The
    /// empty string and `und` both yield the root locale.
    pub fn parse(tag: &str) -> Result<Self> {
        let normalized = tag.trim().replace('_', "-");
        if normalized.is_empty() {
            return Ok(Self::root());
        }
        normalized
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| FaultcodeError::invalid_locale(tag))
    }

    /// Parse a POSIX locale value such as `sv_SE.UTF-8@euro`.
    ///
    /// `C` and `POSIX` map to English; unparseable values yield `None`.
    pub fn from_posix(value: &str) -> Option<Self> {
        let name = value.split(['.', '@']).next().unwrap_or_default().trim();
        match name {
            "" => None,
            "C" | "POSIX" => Some(Self(unic_langid::langid!("en"))),
            other => Self::parse(other).ok().filter(|locale| !locale.is_root()),
        }
    }

    /// The process locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, falling
    /// back to [`Locale::english`].
    pub fn system() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| Self::from_posix(&value))
            .unwrap_or_else(Self::english)
    }

    /// Whether this is the root locale
    pub fn is_root(&self) -> bool {
        self.0.language.is_empty()
            && self.0.script.is_none()
            && self.0.region.is_none()
            && self.0.variants().len() == 0
    }

    /// The primary language subtag, `und` for the root locale
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// The region subtag, if any
    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|region| region.as_str())
    }

    /// The BCP-47 tag, e.g. `sv-SE`
    pub fn tag(&self) -> String {
        self.0.to_string()
    }

    /// Bundle candidates from most to least specific, root excluded.
    ///
    /// `sr-Latn-RS` yields `sr-Latn-RS`, `sr-Latn`, `sr-RS`, `sr`.
    pub fn candidates(&self) -> Vec<Self> {
        if self.0.language.is_empty() {
            return Vec::new();
        }

        let language = self.0.language;
        let script = self.0.script;
        let region = self.0.region;
        let variants: Vec<_> = self.0.variants().cloned().collect();

        let mut parts = Vec::new();
        if script.is_some() {
            if region.is_some() && !variants.is_empty() {
                parts.push((script, region, variants.as_slice()));
            }
            if region.is_some() {
                parts.push((script, region, &[][..]));
            }
            parts.push((script, None, &[][..]));
        }
        if !variants.is_empty() {
            parts.push((None, region, variants.as_slice()));
        }
        if region.is_some() {
            parts.push((None, region, &[][..]));
        }
        parts.push((None, None, &[][..]));

        let mut candidates: Vec<Self> = Vec::with_capacity(parts.len());
        for (script, region, variants) in parts {
            let candidate = Self(LanguageIdentifier::from_parts(
                language, script, region, variants,
            ));
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        candidates
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = FaultcodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = FaultcodeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag()
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}
