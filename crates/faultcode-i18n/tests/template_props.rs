//! Property-based tests for template parsing and argument rendering.

use faultcode_i18n::{ArgStyle, FaultArg, Locale, Segment, Template};
use proptest::prelude::*;

fn arg_strategy() -> impl Strategy<Value = FaultArg> {
    prop_oneof![
        "\\PC{0,12}".prop_map(FaultArg::from),
        any::<i64>().prop_map(FaultArg::from),
        any::<u64>().prop_map(FaultArg::from),
        any::<f64>().prop_map(FaultArg::from),
        any::<bool>().prop_map(FaultArg::from),
    ]
}

proptest! {
    /// Any pattern parses and renders with any arguments
    #[test]
    fn parse_and_render_are_total(
        pattern in "\\PC{0,64}",
        args in prop::collection::vec(arg_strategy(), 0..5),
    ) {
        let template = Template::parse(&pattern);
        let _ = template.render(&Locale::english(), &args);
        let _ = template.render(&Locale::root(), &args);
    }

    /// Text without braces or quotes is copied unchanged
    #[test]
    fn plain_text_round_trips(text in "[^{}']{0,64}") {
        let template = Template::parse(&text);
        prop_assert_eq!(template.render(&Locale::english(), &[]), text);
        prop_assert_eq!(template.arity(), 0);
    }

    /// Adjacent segments are never both literals
    #[test]
    fn literals_are_merged(pattern in "\\PC{0,64}") {
        let template = Template::parse(&pattern);
        for pair in template.segments().windows(2) {
            let both_literal = matches!(pair, [Segment::Literal(_), Segment::Literal(_)]);
            prop_assert!(!both_literal);
        }
    }

    /// A lone placeholder renders its text argument verbatim under every style
    #[test]
    fn text_arguments_ignore_style(text in "\\PC{0,32}", index in 0usize..4) {
        let mut args = vec![FaultArg::from(""); index];
        args.push(FaultArg::from(text.as_str()));
        for style in ["", ",number", ",number,integer", ",number,percent"] {
            let template = Template::parse(&format!("{{{index}{style}}}"));
            prop_assert_eq!(template.render(&Locale::english(), &args), text.clone());
        }
    }

    /// Grouped integers keep their digits
    #[test]
    fn grouping_preserves_digits(value in any::<i64>()) {
        let rendered = FaultArg::from(value).render(ArgStyle::Number, &Locale::english());
        prop_assert_eq!(rendered.replace(',', ""), value.to_string());
    }

    /// Locale parsing never panics
    #[test]
    fn locale_parse_is_total(tag in "\\PC{0,24}") {
        if let Ok(locale) = Locale::parse(&tag) {
            prop_assert!(locale.candidates().iter().all(|candidate| !candidate.is_root()));
        }
    }
}
