//! Positional message templates.
//!
//! Patterns follow the familiar `MessageFormat` conventions: `{0}` refers to
//! the first argument, `{1,number,integer}` selects a numeric style, a single
//! quote starts or ends quoted literal text and `''` is a literal quote.
//! Parsing is total. Anything that is not a well-formed placeholder is kept
//! as literal text, and rendering never fails either: a placeholder without
//! a matching argument is written back as `{n}`.

use crate::{FaultArg, Locale};

/// Numeric style of a placeholder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArgStyle {
    /// `{n}`
    #[default]
    Default,
    /// `{n,number}`
    Number,
    /// `{n,number,integer}`
    Integer,
    /// `{n,number,percent}`
    Percent,
}

impl ArgStyle {
    fn from_parts(kind: Option<&str>, style: Option<&str>) -> Self {
        match (kind, style) {
            (Some("number"), Some("integer")) => Self::Integer,
            (Some("number"), Some("percent")) => Self::Percent,
            (Some("number"), _) => Self::Number,
            _ => Self::Default,
        }
    }
}

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is
    Literal(String),
    /// Reference to a positional argument
    Argument {
        /// Zero-based argument position
        index: usize,
        /// How numeric arguments are rendered
        style: ArgStyle,
    },
}

/// A parsed message template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Build a template from segments, merging adjacent literals.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut merged: Vec<Segment> = Vec::new();
        for segment in segments {
            if let Segment::Literal(text) = &segment {
                if text.is_empty() {
                    continue;
                }
                if let Some(Segment::Literal(previous)) = merged.last_mut() {
                    previous.push_str(text);
                    continue;
                }
            }
            merged.push(segment);
        }
        Self { segments: merged }
    }

    /// A template without placeholders
    pub fn literal(text: impl Into<String>) -> Self {
        Self::from_segments([Segment::Literal(text.into())])
    }

    /// Parse a `MessageFormat`-style pattern.
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut quoted = false;
        let mut rest = pattern;

        while let Some(ch) = rest.chars().next() {
            rest = &rest[ch.len_utf8()..];
            match ch {
                '\'' if rest.starts_with('\'') => {
                    literal.push('\'');
                    rest = &rest[1..];
                }
                '\'' => quoted = !quoted,
                '{' if !quoted => {
                    let Some(end) = rest.find('}') else {
                        literal.push('{');
                        literal.push_str(rest);
                        break;
                    };
                    let body = &rest[..end];
                    rest = &rest[end + 1..];
                    if let Some(argument) = parse_argument(body) {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        segments.push(argument);
                    } else {
                        literal.push('{');
                        literal.push_str(body);
                        literal.push('}');
                    }
                }
                other => literal.push(other),
            }
        }

        segments.push(Segment::Literal(literal));
        Self::from_segments(segments)
    }

    /// The parsed segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of arguments the template can consume (highest index + 1)
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Argument { index, .. } => Some(index.saturating_add(1)),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitute `args` into the template for `locale`.
    ///
    /// Extra arguments are ignored; missing ones leave `{n}` in the output.
    pub fn render(&self, locale: &Locale, args: &[FaultArg]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument { index, style } => match args.get(*index) {
                    Some(arg) => out.push_str(&arg.render(*style, locale)),
                    None => {
                        out.push('{');
                        out.push_str(&index.to_string());
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

fn parse_argument(body: &str) -> Option<Segment> {
    let mut parts = body.splitn(3, ',').map(str::trim);
    let index = parts.next()?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index.parse().ok()?;
    let style = ArgStyle::from_parts(parts.next(), parts.next());
    Some(Segment::Argument { index, style })
}
