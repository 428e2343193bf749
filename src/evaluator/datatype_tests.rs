use super::*;
use crate::template::{ColumnDefinition, TemplateDefinition, TemplateSettings};

fn default_template() -> Template {
    Template::from_definition(&TemplateDefinition::with_columns(vec![ColumnDefinition::new("A")]))
        .unwrap()
}

#[test]
fn numbers() {
    assert_eq!(parse_number("42"), Some(42.0));
    assert_eq!(parse_number("-3.25"), Some(-3.25));
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert!(parse_number("NaN").is_none());
    assert!(parse_number("inf").is_none());
    assert!(parse_number("1,5").is_none());
    assert!(parse_number(" 7").is_none());
    assert!(parse_number("12kWh").is_none());
}

#[test]
fn booleans_are_case_insensitive() {
    let tokens: Vec<String> = ["true", "false", "yes", "no"]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(parse_boolean("TRUE", &tokens), Some("true"));
    assert_eq!(parse_boolean("No", &tokens), Some("no"));
    assert!(parse_boolean("1", &tokens).is_none());
    assert!(parse_boolean("y", &tokens).is_none());
}

#[test]
fn dates_use_the_given_format() {
    assert!(parse_date("2024-02-29", "%Y-%m-%d").is_some());
    assert!(parse_date("2023-02-29", "%Y-%m-%d").is_none());
    assert!(parse_date("29/02/2024", "%Y-%m-%d").is_none());
    assert!(parse_date("29/02/2024", "%d/%m/%Y").is_some());
}

#[test]
fn conforms_dispatches_per_variant() {
    let template = default_template();
    assert!(conforms(DataType::Text, "anything at all", &template));
    assert!(conforms(DataType::Number, "10.5", &template));
    assert!(!conforms(DataType::Number, "ten", &template));
    assert!(conforms(DataType::Boolean, "Yes", &template));
    assert!(!conforms(DataType::Boolean, "maybe", &template));
    assert!(conforms(DataType::Date, "2025-01-31", &template));
    assert!(!conforms(DataType::Date, "2025-13-01", &template));
}

#[test]
fn conforms_honours_template_settings() {
    let def = TemplateDefinition {
        settings: TemplateSettings {
            boolean_tokens: vec!["Y".to_string(), "N".to_string()],
            date_format: "%d.%m.%Y".to_string(),
            ..TemplateSettings::default()
        },
        ..TemplateDefinition::with_columns(vec![ColumnDefinition::new("A")])
    };
    let template = Template::from_definition(&def).unwrap();

    assert!(conforms(DataType::Boolean, "y", &template));
    assert!(!conforms(DataType::Boolean, "true", &template));
    assert!(conforms(DataType::Date, "31.01.2025", &template));
    assert!(!conforms(DataType::Date, "2025-01-31", &template));
}

#[test]
fn expectation_describes_accepted_values() {
    let template = default_template();
    assert_eq!(
        expectation(DataType::Boolean, &template),
        "one of: true, false, yes, no"
    );
    assert_eq!(
        expectation(DataType::Date, &template),
        "a date in format %Y-%m-%d"
    );
}
