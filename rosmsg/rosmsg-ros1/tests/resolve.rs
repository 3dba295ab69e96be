use rosmsg_core::{MessageDefinition, MessageDefinitionField, MsgDefError, fixup_types};
use rosmsg_ros1::parse;

#[test]
fn resolves_unqualified_names() {
    let msg = "Point[] points\n===============\nMSG: geometry_msgs/Point\nfloat64 x";
    assert_eq!(
        parse(msg, false).unwrap(),
        vec![
            MessageDefinition::new(
                None,
                vec![MessageDefinitionField::new("geometry_msgs/Point", "points").with_array(None)],
            ),
            MessageDefinition::new(
                Some("geometry_msgs/Point"),
                vec![MessageDefinitionField::new("float64", "x")],
            ),
        ]
    );
}

#[test]
fn skip_type_fixup_keeps_written_names() {
    let msg = "Point[] points\n===============\nMSG: geometry_msgs/Point\nfloat64 x";
    let mut types = parse(msg, true).unwrap();
    assert_eq!(types[0].definitions[0].type_name, "Point");
    fixup_types(&mut types).unwrap();
    assert_eq!(types[0].definitions[0].type_name, "geometry_msgs/Point");
}

#[test]
fn skip_type_fixup_tolerates_missing_definitions() {
    let types = parse("Missing m", true).unwrap();
    assert_eq!(types[0].definitions[0].type_name, "Missing");
}

#[test]
fn missing_definition_is_rejected() {
    let err = parse("Missing m", false).unwrap_err();
    assert_eq!(
        err,
        MsgDefError::MissingTypeDefinition {
            type_name: "Missing".to_string()
        }
    );
}

#[test]
fn dependency_blocks_resolve_within_their_package() {
    let msg = "geometry_msgs/Pose pose\n\
               ===\nMSG: geometry_msgs/Pose\nPoint position\nQuaternion orientation\n\
               ===\nMSG: geometry_msgs/Point\nfloat64 x\n\
               ===\nMSG: geometry_msgs/Quaternion\nfloat64 w";
    let types = parse(msg, false).unwrap();
    let pose = &types[1];
    assert_eq!(pose.definitions[0].type_name, "geometry_msgs/Point");
    assert_eq!(pose.definitions[1].type_name, "geometry_msgs/Quaternion");
}

#[test]
fn resolution_is_deterministic() {
    let msg = "Inner a\nInner b\n===\nMSG: pkg/Inner\nint32 x";
    let first = parse(msg, false).unwrap();
    for _ in 0..5 {
        assert_eq!(parse(msg, false).unwrap(), first);
    }

    let ambiguous = "Inner a\n===\nMSG: a/Inner\nint32 x\n===\nMSG: b/Inner\nint32 y";
    for _ in 0..5 {
        let err = parse(ambiguous, false).unwrap_err();
        assert!(matches!(err, MsgDefError::AmbiguousTypeName { .. }));
    }
}
