use super::*;

#[test]
fn settings_have_expected_defaults() {
    let settings = TemplateSettings::default();
    assert_eq!(settings.delimiter, ',');
    assert_eq!(settings.date_format, "%Y-%m-%d");
    assert_eq!(settings.boolean_tokens, vec!["true", "false", "yes", "no"]);
}

#[test]
fn column_defaults_are_permissive() {
    let column: ColumnDefinition = toml::from_str(r#"name = "Zone""#).unwrap();
    assert!(!column.required);
    assert!(!column.allow_blank);
    assert!(!column.unique);
    assert_eq!(column.data_type, DataType::Text);
    assert_eq!(column.min_length, None);
    assert_eq!(column.max_length, None);
}

#[test]
fn deserialize_toml_template() {
    let toml_str = r#"
        version = "1"
        name = "Meter readings"

        [settings]
        delimiter = ";"
        date_format = "%d/%m/%Y"

        [[columns]]
        name = "MeterID"
        required = true
        unique = true
        max_length = 10
        pattern = "[A-Z0-9-]+"
        pattern_description = "Upper-case letters, digits and dashes"

        [[columns]]
        name = "Reading"
        data_type = "number"
        notes = "kWh"
    "#;

    let def: TemplateDefinition = toml::from_str(toml_str).unwrap();
    assert_eq!(def.version.as_deref(), Some("1"));
    assert_eq!(def.settings.delimiter, ';');
    assert_eq!(def.settings.date_format, "%d/%m/%Y");
    assert_eq!(def.settings.boolean_tokens.len(), 4);
    assert_eq!(def.columns.len(), 2);
    assert!(def.columns[0].required);
    assert_eq!(def.columns[0].max_length, Some(10));
    assert_eq!(def.columns[1].data_type, DataType::Number);
    assert_eq!(def.columns[1].notes.as_deref(), Some("kWh"));
}

#[test]
fn deserialize_json_template() {
    let json = r#"{
        "name": "Assets",
        "columns": [
            {"name": "Active", "data_type": "boolean", "required": true},
            {"name": "Installed", "data_type": "date", "allow_blank": true}
        ]
    }"#;

    let def: TemplateDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(def.columns[0].data_type, DataType::Boolean);
    assert_eq!(def.columns[1].data_type, DataType::Date);
    assert!(def.columns[1].allow_blank);
    assert_eq!(def.settings, TemplateSettings::default());
}

#[test]
fn unknown_data_type_is_rejected() {
    let result: Result<ColumnDefinition, _> = toml::from_str(
        r#"
        name = "X"
        data_type = "currency"
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn unknown_column_key_is_rejected() {
    let result: Result<ColumnDefinition, _> = toml::from_str(
        r#"
        name = "X"
        maxlength = 3
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn builder_sets_fields() {
    let column = ColumnDefinition::new("MeterID")
        .required()
        .unique()
        .max_length(10)
        .data_type(DataType::Text)
        .notes("Meter serial");
    assert_eq!(column.name, "MeterID");
    assert!(column.required && column.unique);
    assert_eq!(column.max_length, Some(10));
    assert_eq!(column.notes.as_deref(), Some("Meter serial"));
}

#[test]
fn template_serialize_roundtrip() {
    let def = TemplateDefinition::with_columns(vec![
        ColumnDefinition::new("MeterID").required().max_length(10),
        ColumnDefinition::new("Zone").pattern("North|South"),
    ]);
    let serialized = toml::to_string(&def).unwrap();
    let deserialized: TemplateDefinition = toml::from_str(&serialized).unwrap();
    assert_eq!(def, deserialized);
}

#[test]
fn data_type_display() {
    assert_eq!(DataType::Number.to_string(), "number");
    assert_eq!(DataType::Date.as_str(), "date");
}
