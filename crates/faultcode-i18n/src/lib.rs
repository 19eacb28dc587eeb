//! # Faultcode I18n
//!
//! Locale handling and message templates for faultcode.
//!
//! This crate provides:
//!
//! - [`Locale`], a BCP-47 identifier with a candidate chain for bundle lookup
//! - [`FaultArg`], typed message arguments with locale-aware number rendering
//! - [`Template`], positional `{0}` message patterns that never fail to parse
//! - [`TemplateStore`] and its in-memory and Fluent-file implementations
//!
//! # Example
//!
//! ```rust
//! use faultcode_i18n::{FaultArg, Locale, Template};
//!
//! let template = Template::parse("Disk {0} is {1,number,percent} full");
//! let locale: Locale = "en-US".parse().unwrap();
//! let message = template.render(&locale, &[FaultArg::from("sda1"), FaultArg::from(0.93)]);
//! assert_eq!(message, "Disk sda1 is 93% full");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod arg;
pub mod loader;
pub mod locale;
pub mod resource;
pub mod store;
pub mod template;

pub use arg::{FaultArg, NumberSymbols};
pub use loader::FluentTemplateStore;
pub use locale::Locale;
pub use store::{EmptyTemplateStore, MapTemplateStore, TemplateStore, Templates};
pub use template::{ArgStyle, Segment, Template};

/// Builds a `Vec<FaultArg>` from values of mixed types.
///
/// ```rust
/// use faultcode_i18n::{fault_args, FaultArg};
///
/// let args = fault_args!["disk", 3, 0.5, true];
/// assert_eq!(args[1], FaultArg::Int(3));
/// ```
#[macro_export]
macro_rules! fault_args {
    () => {
        ::std::vec::Vec::<$crate::FaultArg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::FaultArg::from($value)),+]
    };
}
