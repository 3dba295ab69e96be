use rosmsg::{Dialect, MessageDefinition, MessageDefinitionField, MsgDefError, ParseOptions, parse};

#[test]
fn default_options_parse_ros1_and_resolve() {
    let options = ParseOptions::default();
    assert_eq!(options.dialect, Dialect::Ros1);
    assert!(!options.skip_type_fixup);

    let defs = parse("Inner inner\n===\nMSG: pkg/Inner\nint32 x", &options).unwrap();
    assert_eq!(defs[0].definitions[0].type_name, "pkg/Inner");
}

#[test]
fn skip_type_fixup_option_is_honoured() {
    let options = ParseOptions::new().with_skip_type_fixup(true);
    let defs = parse("Inner inner\n===\nMSG: pkg/Inner\nint32 x", &options).unwrap();
    assert_eq!(defs[0].definitions[0].type_name, "Inner");
}

#[test]
fn ros2_dialect_is_not_implemented() {
    let options = ParseOptions::new().with_dialect(Dialect::Ros2);
    for text in ["string name", "", "garbage line"] {
        assert!(matches!(
            parse(text, &options),
            Err(MsgDefError::UnsupportedDialect { .. })
        ));
    }
}

#[test]
fn unknown_dialect_is_rejected() {
    let options = ParseOptions::new().with_dialect(Dialect::from("omgidl"));
    assert_eq!(
        parse("int32 x", &options).unwrap_err(),
        MsgDefError::UnsupportedDialect {
            dialect: "omgidl".to_string()
        }
    );
}

#[test]
fn duplicate_blocks_collapse() {
    let text = "pkg/A a\n===\nMSG: pkg/A\nint32 x\n===\nMSG: pkg/A\nint32 x";
    let defs = parse(text, &ParseOptions::default()).unwrap();
    assert_eq!(
        defs,
        vec![
            MessageDefinition::new(None, vec![MessageDefinitionField::new("pkg/A", "a")]),
            MessageDefinition::new(Some("pkg/A"), vec![MessageDefinitionField::new("int32", "x")]),
        ]
    );
}

#[test]
fn grammar_errors_propagate() {
    let err = parse("int32 x\nnot-a-field\n", &ParseOptions::default()).unwrap_err();
    assert_eq!(
        err,
        MsgDefError::MalformedField {
            line: "not-a-field".to_string()
        }
    );
}
