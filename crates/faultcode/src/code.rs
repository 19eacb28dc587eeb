//! Fault codes and the macro that declares closed sets of them.

use crate::resolver;
use faultcode_i18n::{FaultArg, Locale};
use std::fmt;

/// One member of a closed set of fault codes.
///
/// Codes are usually declared with [`fault_codes!`](crate::fault_codes),
/// which implements this trait for a plain enum. Manual implementations
/// only need [`name`](FaultCode::name).
pub trait FaultCode: fmt::Debug + Send + Sync + 'static {
    /// The code's stable name, unique within its set.
    fn name(&self) -> &str;

    /// Key used to find the code's template in a collection.
    fn message_key(&self) -> &str {
        self.name()
    }

    /// Template used when no store provides one. Empty counts as absent.
    fn default_format(&self) -> Option<&str> {
        None
    }

    /// Logical name of the template collection for the whole set.
    ///
    /// Sets declared with [`fault_codes!`](crate::fault_codes) use the
    /// enum's module path, e.g. `app::db::Code`. Hand-written impls default
    /// to [`std::any::type_name`], which is not stable across compiler
    /// versions, so they should override this when templates live on disk.
    fn bundle_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Resolve the message for the process default locale.
    fn message(&self, args: &[FaultArg]) -> String {
        let resolver = crate::context::current();
        resolver.resolve(self, resolver.default_locale(), args)
    }

    /// Resolve the message for `locale`.
    fn message_for(&self, locale: &Locale, args: &[FaultArg]) -> String {
        resolver::resolve(self, locale, args)
    }
}

/// Returned when parsing a name that is not part of a fault code set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{name}' is not a code of {set}")]
pub struct UnknownFaultCode {
    set: &'static str,
    name: String,
}

impl UnknownFaultCode {
    #[doc(hidden)]
    pub fn new(set: &'static str, name: &str) -> Self {
        Self {
            set,
            name: name.to_string(),
        }
    }

    /// The name that failed to parse
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The set that was searched
    pub const fn set(&self) -> &'static str {
        self.set
    }
}

/// Declares a closed set of fault codes as a `Copy` enum.
///
/// Each variant may carry a default `MessageFormat` template. The generated
/// type implements [`FaultCode`], `Display` (the code name) and `FromStr`,
/// and exposes every code in declaration order as `ALL`. The template
/// collection is named after the enum's path unless `bundle = "..."` is
/// given.
///
/// ```rust
/// use faultcode::{fault_codes, FaultCode};
///
/// fault_codes! {
///     /// Billing faults
///     pub enum Billing: bundle = "billing" {
///         /// The card was declined
///         CARD_DECLINED = "Card ending {0} was declined",
///         ACCOUNT_LOCKED,
///     }
/// }
///
/// assert_eq!(Billing::ALL.len(), 2);
/// assert_eq!(Billing::ACCOUNT_LOCKED.to_string(), "ACCOUNT_LOCKED");
/// assert_eq!("CARD_DECLINED".parse::<Billing>(), Ok(Billing::CARD_DECLINED));
/// assert_eq!(FaultCode::bundle_name(&Billing::CARD_DECLINED), "billing");
/// ```
#[macro_export]
macro_rules! fault_codes {
    (@format) => {
        ::std::option::Option::None
    };
    (@format $format:literal) => {
        ::std::option::Option::Some($format)
    };
    (@bundle $name:ident) => {
        fn bundle_name(&self) -> &str {
            ::std::concat!(::std::module_path!(), "::", ::std::stringify!($name))
        }
    };
    (@bundle $name:ident $bundle:literal) => {
        fn bundle_name(&self) -> &str {
            $bundle
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(: bundle = $bundle:literal)? {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $format:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every code in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The code's name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => ::std::stringify!($variant),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($name::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownFaultCode;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $(::std::stringify!($variant) => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err($crate::UnknownFaultCode::new(
                        ::std::stringify!($name),
                        s,
                    )),
                }
            }
        }

        impl $crate::FaultCode for $name {
            fn name(&self) -> &str {
                $name::name(*self)
            }

            fn default_format(&self) -> ::std::option::Option<&str> {
                match self {
                    $(Self::$variant => $crate::fault_codes!(@format $($format)?),)+
                }
            }

            $crate::fault_codes!(@bundle $name $($bundle)?);
        }
    };
}
