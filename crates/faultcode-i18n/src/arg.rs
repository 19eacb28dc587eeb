//! Typed message arguments and locale-aware number rendering

use crate::template::ArgStyle;
use crate::Locale;
use std::borrow::Cow;
use std::fmt;

/// Maximum fraction digits kept when rendering floats.
const MAX_FRACTION_DIGITS: usize = 3;

/// A single message argument.
///
/// `Display` gives the plain rendering used in degraded `KEY [a, b]`
/// messages; [`FaultArg::render`] gives the locale-aware rendering used when
/// substituting into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum FaultArg {
    /// Free text, rendered verbatim under every style
    Text(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean, rendered as `true` / `false`
    Bool(bool),
}

impl FaultArg {
    /// Render for template substitution in `locale`.
    pub fn render(&self, style: ArgStyle, locale: &Locale) -> String {
        let symbols = NumberSymbols::for_locale(locale);
        match self {
            Self::Text(text) => text.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => symbols.integer(i128::from(*value), style),
            Self::UInt(value) => symbols.integer(i128::from(*value), style),
            Self::Float(value) => symbols.float(*value, style),
        }
    }

    /// Whether the argument is numeric
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::UInt(_) | Self::Float(_))
    }
}

impl fmt::Display for FaultArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FaultArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FaultArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FaultArg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for FaultArg {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for FaultArg {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FaultArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FaultArg {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64);
impl_from_number!(UInt as u64: u8, u16, u32, u64);
impl_from_number!(Float as f64: f32, f64);

impl From<isize> for FaultArg {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i64)
    }
}

impl From<usize> for FaultArg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

/// Grouping and decimal separators of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Thousands separator
    pub grouping: char,
    /// Decimal separator
    pub decimal: char,
}

impl NumberSymbols {
    /// Separators for `locale`; unknown languages get `,` and `.`.
    pub fn for_locale(locale: &Locale) -> Self {
        let (grouping, decimal) = match (locale.language(), locale.region()) {
            ("de", Some("CH" | "LI")) => ('\u{2019}', '.'),
            ("de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr"
            | "sl" | "sr", _) => ('.', ','),
            ("fr" | "sv" | "nb" | "nn" | "no" | "fi" | "ru" | "uk" | "pl" | "cs" | "sk" | "hu"
            | "bg" | "et" | "lt" | "lv", _) => ('\u{a0}', ','),
            _ => (',', '.'),
        };
        Self { grouping, decimal }
    }

    fn integer(self, value: i128, style: ArgStyle) -> String {
        match style {
            ArgStyle::Percent => format!("{}%", self.group(value.saturating_mul(100))),
            ArgStyle::Default | ArgStyle::Number | ArgStyle::Integer => self.group(value),
        }
    }

    fn float(self, value: f64, style: ArgStyle) -> String {
        // Percent scaling can overflow a finite value to infinity.
        let (scaled, suffix) = match style {
            ArgStyle::Percent => (value * 100.0, "%"),
            ArgStyle::Default | ArgStyle::Number | ArgStyle::Integer => (value, ""),
        };
        if scaled.is_nan() {
            return "NaN".to_string();
        }
        if scaled.is_infinite() {
            let infinity = if scaled.is_sign_negative() { "-\u{221e}" } else { "\u{221e}" };
            return format!("{infinity}{suffix}");
        }

        match style {
            ArgStyle::Integer | ArgStyle::Percent => format!("{}{suffix}", self.fixed(scaled, 0)),
            ArgStyle::Default | ArgStyle::Number => self.fixed(scaled, MAX_FRACTION_DIGITS),
        }
    }

    /// Round to at most `digits` fraction digits, dropping trailing zeros.
    fn fixed(self, value: f64, digits: usize) -> String {
        let rendered = format!("{:.*}", digits, value.abs());
        let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::with_capacity(rendered.len() + 4);
        let is_zero = whole.bytes().all(|b| b == b'0') && fraction.is_empty();
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group_digits(whole));
        if !fraction.is_empty() {
            out.push(self.decimal);
            out.push_str(fraction);
        }
        out
    }

    fn group(self, value: i128) -> String {
        let digits = value.unsigned_abs().to_string();
        let grouped = self.group_digits(&digits);
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    fn group_digits(self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.grouping);
            }
            out.push(ch);
        }
        out
    }
}
