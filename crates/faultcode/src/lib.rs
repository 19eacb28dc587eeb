//! # Faultcode
//!
//! Closed sets of fault codes with localized, parameterized messages.
//!
//! A fault code set is an enum declared with [`fault_codes!`]. Each code has
//! a stable name and optionally a default message template. An error built
//! from a code, [`FaultError`], resolves its message once at construction:
//! first from the template store for the requested locale (walking the
//! locale fallback chain), then from the code's default format, and finally
//! from the code's name followed by its arguments. Resolution never fails.
//!
//! # Example
//!
//! ```rust
//! use faultcode::{fault, fault_codes, FaultCode};
//!
//! fault_codes! {
//!     /// Storage faults
//!     pub enum Code {
//!         ERROR_1 = "Error with one argument: {0}",
//!         ERROR_2 = "Error with two arguments: {0}, {1}",
//!         ERROR_3,
//!     }
//! }
//!
//! let err = fault!(Code::ERROR_1, "42");
//! assert_eq!(err.to_string(), "Error with one argument: 42");
//! assert_eq!(*err.code(), Code::ERROR_1);
//!
//! let err = fault!(Code::ERROR_3, "a", "b", "c");
//! assert_eq!(err.to_string(), "ERROR_3 [a, b, c]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod code;
pub mod context;
pub mod error;
pub mod resolver;

pub use code::{FaultCode, UnknownFaultCode};
pub use error::{Fault, FaultError};
pub use resolver::{resolve, Resolver};

pub use faultcode_common::{FaultcodeError, Result};
pub use faultcode_config::Config;
pub use faultcode_i18n::{
    fault_args, EmptyTemplateStore, FaultArg, FluentTemplateStore, Locale, MapTemplateStore,
    Template, TemplateStore, Templates,
};

/// Builds a [`FaultError`] from a code and arguments of mixed types.
///
/// ```rust
/// # use faultcode::{fault, fault_codes};
/// # fault_codes! { enum Code { DISK_FULL = "Disk {0} is full ({1} bytes free)" } }
/// let err = fault!(Code::DISK_FULL, "sda1", 0);
/// assert_eq!(err.to_string(), "Disk sda1 is full (0 bytes free)");
/// ```
#[macro_export]
macro_rules! fault {
    ($code:expr $(,)?) => {
        $crate::FaultError::new($code, ::std::vec::Vec::<$crate::FaultArg>::new())
    };
    ($code:expr, $($arg:expr),+ $(,)?) => {
        $crate::FaultError::new($code, $crate::fault_args![$($arg),+])
    };
}
