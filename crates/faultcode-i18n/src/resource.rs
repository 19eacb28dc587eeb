//! Conversion of Fluent resources into template collections

use crate::template::{ArgStyle, Segment};
use crate::{Template, Templates};
use faultcode_common::{FaultcodeError, Result};
use fluent::FluentResource;
use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::unicode::unescape_unicode_to_string;
use std::path::Path;
use tracing::debug;

/// Parse Fluent `source` read from `path` into a template collection.
///
/// Each message value becomes one template keyed by the message id. Text is
/// literal, `{ 0 }` is positional argument 0 and `{ "{" }` is literal text.
/// Messages using any other placeable are skipped. A syntax error anywhere
/// in the file fails the whole collection.
pub fn parse_templates(path: &Path, source: String) -> Result<Templates> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        let errors: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();
        FaultcodeError::TemplateParse {
            path: path.to_path_buf(),
            errors,
        }
    })?;

    let mut templates = Templates::new();
    for entry in resource.entries() {
        let Entry::Message(message) = entry else {
            continue;
        };
        let Some(pattern) = &message.value else {
            debug!(key = message.id.name, "Skipping message without a value");
            continue;
        };
        match template_from_pattern(pattern) {
            Ok(template) => templates.insert(message.id.name, template),
            Err(reason) => {
                debug!(key = message.id.name, path = %path.display(), %reason, "Skipping message");
            }
        }
    }

    Ok(templates)
}

fn template_from_pattern(pattern: &Pattern<&str>) -> std::result::Result<Template, String> {
    let mut segments = Vec::with_capacity(pattern.elements.len());
    for element in &pattern.elements {
        let segment = match element {
            PatternElement::TextElement { value } => Segment::Literal((*value).to_string()),
            PatternElement::Placeable { expression } => segment_from_expression(expression)?,
        };
        segments.push(segment);
    }
    Ok(Template::from_segments(segments))
}

fn segment_from_expression(expression: &Expression<&str>) -> std::result::Result<Segment, String> {
    match expression {
        Expression::Inline(InlineExpression::NumberLiteral { value }) => value
            .parse::<usize>()
            .map(|index| Segment::Argument {
                index,
                style: ArgStyle::Default,
            })
            .map_err(|_| format!("'{value}' is not an argument position")),
        Expression::Inline(InlineExpression::StringLiteral { value }) => {
            Ok(Segment::Literal(unescape_unicode_to_string(value).into_owned()))
        }
        Expression::Inline(InlineExpression::VariableReference { id }) => {
            Err(format!("named variable ${} has no position", id.name))
        }
        Expression::Inline(_) => Err("unsupported inline expression".to_string()),
        Expression::Select { .. } => Err("select expressions are not supported".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FaultArg, Locale};

    fn parse(source: &str) -> Result<Templates> {
        parse_templates(Path::new("test.ftl"), source.to_string())
    }

    fn render(templates: &Templates, key: &str, args: &[FaultArg]) -> String {
        templates.get(key).unwrap().render(&Locale::english(), args)
    }

    #[test]
    fn test_positional_placeables() {
        let templates = parse("ERROR_2 = Error with two arguments: { 0 }, { 1 }\n").unwrap();
        let args = [FaultArg::from("a"), FaultArg::from("b")];
        assert_eq!(render(&templates, "ERROR_2", &args), "Error with two arguments: a, b");
    }

    #[test]
    fn test_string_literals_and_apostrophes() {
        let templates = parse("QUOTED = Can't parse { \"{\" }0{ \"}\" }: { 0 }\n").unwrap();
        assert_eq!(
            render(&templates, "QUOTED", &[FaultArg::from("x")]),
            "Can't parse {0}: x"
        );
    }

    #[test]
    fn test_unsupported_messages_are_skipped() {
        let source = "\
GOOD = fine { 0 }
NAMED = uses { $name }
DECIMAL = uses { 1.5 }
-term = a term
ATTRS_ONLY =
    .title = only an attribute
";
        let templates = parse(source).unwrap();
        assert!(templates.contains_key("GOOD"));
        assert!(!templates.contains_key("NAMED"));
        assert!(!templates.contains_key("DECIMAL"));
        assert!(!templates.contains_key("ATTRS_ONLY"));
        assert_eq!(templates.len(), 1);
    }

    #[test]
    fn test_multiline_values() {
        let source = "LONG =\n    first line { 0 }\n    second line\n";
        let templates = parse(source).unwrap();
        assert_eq!(
            render(&templates, "LONG", &[FaultArg::from(1)]),
            "first line 1\nsecond line"
        );
    }

    #[test]
    fn test_syntax_error_fails_whole_collection() {
        let err = parse("GOOD = fine\nBROKEN = { 0\n").unwrap_err();
        match err {
            FaultcodeError::TemplateParse { path, errors } => {
                assert_eq!(path, Path::new("test.ftl"));
                assert!(!errors.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
