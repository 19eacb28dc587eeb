//! Errors carrying a fault code.

use crate::{context, FaultCode, Resolver};
use faultcode_i18n::{FaultArg, Locale};
use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error whose identity is a fault code.
///
/// Implemented by [`FaultError`] and by application errors that wrap one, so
/// handlers can branch on the code without knowing the concrete type.
pub trait Fault: StdError {
    /// The fault code set
    type Code: FaultCode;

    /// The code this error was raised with
    fn code(&self) -> &Self::Code;
}

/// An error identified by a fault code, with a message resolved once when it
/// is constructed.
///
/// The message is resolved for the process default locale by the resolver
/// installed in [`context`]; later changes to the context do not alter it.
/// Use [`FaultError::message_for`] to render the same fault in another locale.
#[derive(Debug)]
pub struct FaultError<C: FaultCode> {
    code: C,
    args: Vec<FaultArg>,
    message: String,
    source: Option<BoxError>,
}

impl<C: FaultCode> FaultError<C> {
    /// Create an error for `code` with `args`
    pub fn new(code: C, args: impl IntoIterator<Item = FaultArg>) -> Self {
        Self::build(&context::current(), code, None, args.into_iter().collect())
    }

    /// Create an error for `code` caused by `cause`
    pub fn with_cause(
        code: C,
        cause: impl Into<BoxError>,
        args: impl IntoIterator<Item = FaultArg>,
    ) -> Self {
        Self::build(
            &context::current(),
            code,
            Some(cause.into()),
            args.into_iter().collect(),
        )
    }

    /// Create an error resolved by `resolver` instead of the global context
    pub fn resolved_by(
        resolver: &Resolver,
        code: C,
        args: impl IntoIterator<Item = FaultArg>,
    ) -> Self {
        Self::build(resolver, code, None, args.into_iter().collect())
    }

    fn build(resolver: &Resolver, code: C, source: Option<BoxError>, args: Vec<FaultArg>) -> Self {
        let message = resolver.resolve(&code, resolver.default_locale(), &args);
        Self {
            code,
            args,
            message,
            source,
        }
    }

    /// Attach `cause` to an existing error
    #[must_use]
    pub fn caused_by(mut self, cause: impl Into<BoxError>) -> Self {
        self.source = Some(cause.into());
        self
    }

    /// The fault code
    pub const fn code(&self) -> &C {
        &self.code
    }

    /// The arguments the error was raised with
    pub fn args(&self) -> &[FaultArg] {
        &self.args
    }

    /// The message resolved at construction
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Resolve the message again for `locale` with the current context
    pub fn message_for(&self, locale: &Locale) -> String {
        context::current().resolve(&self.code, locale, &self.args)
    }

    /// Consume the error, returning its code
    pub fn into_code(self) -> C {
        self.code
    }
}

impl<C: FaultCode> fmt::Display for FaultError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<C: FaultCode> StdError for FaultError<C> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

impl<C: FaultCode> Fault for FaultError<C> {
    type Code = C;

    fn code(&self) -> &C {
        &self.code
    }
}

impl<C: FaultCode> From<C> for FaultError<C> {
    fn from(code: C) -> Self {
        Self::new(code, [])
    }
}
