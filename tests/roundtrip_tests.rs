//! Cross-format round-trip tests exercising the factory, serializers and
//! file I/O together.

use cfgcore::io::{read_configuration_file, write_configuration_file};
use cfgcore::serializers::{
    FormatType, SerializationContext, create_serializer, create_serializer_for_path,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn json_round_trip_preserves_order_and_number_kinds() {
    init_logs();
    let doc = json!({
        "zeta": 1,
        "alpha": 2.5,
        "nested": {"b": true, "a": [1, 2.0, "three"]}
    });
    let serializer = create_serializer(FormatType::Json).unwrap();
    let text = serializer
        .serialize(&SerializationContext::for_json(doc.clone()).with_pretty_print(false))
        .unwrap();
    let back = serializer.deserialize(&text).unwrap();

    assert_eq!(back, doc);
    // byte-identical re-dump proves key order survived
    assert_eq!(
        serde_json::to_string(&back).unwrap(),
        serde_json::to_string(&doc).unwrap()
    );
    assert!(back["zeta"].is_i64());
    assert!(back["alpha"].is_f64());
}

#[test]
fn ini_round_trip_of_flat_safe_document() {
    let doc = json!({
        "title": "demo app",
        "workers": 4,
        "rate": 1.5,
        "verbose": false,
        "Database": {
            "host": "localhost",
            "port": 5432,
            "replicas": ["db1", "db2"]
        },
        "Server": {
            "Http": {"port": 8080},
            "Tls": {"enabled": true}
        }
    });
    let serializer = create_serializer(FormatType::Ini).unwrap();
    let text = serializer
        .serialize(&SerializationContext::for_ini(doc.clone()))
        .unwrap();
    let back = serializer.deserialize(&text).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn json_to_ini_to_json_keeps_structure() {
    let json_serializer = create_serializer(FormatType::Json).unwrap();
    let ini_serializer = create_serializer(FormatType::Ini).unwrap();

    let doc = json_serializer
        .deserialize(r#"{"app": {"name": "x", "threads": 8}, "debug": true}"#)
        .unwrap();

    let ini_text = ini_serializer
        .serialize(&SerializationContext::for_ini(doc.clone()))
        .unwrap();
    let back = ini_serializer.deserialize(&ini_text).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn file_round_trip_through_extension_dispatch() {
    let dir = tempfile::tempdir().unwrap();

    for name in ["config.json", "config.ini", "config.CFG"] {
        let path = dir.path().join(name);
        let serializer = create_serializer_for_path(&path).unwrap();
        let doc = json!({"General": {"name": "demo", "count": 2}});

        let ctx = match serializer.format() {
            FormatType::Json => SerializationContext::for_json(doc.clone()),
            _ => SerializationContext::for_ini(doc.clone()),
        }
        .with_file_path(&path);

        write_configuration_file(serializer.as_ref(), &ctx).unwrap();
        let back = read_configuration_file(&path, serializer.as_ref()).unwrap();
        assert_eq!(back, doc, "round trip failed for {name}");
    }
}

#[test]
fn ini_section_and_array_fixtures_parse() {
    let serializer = create_serializer(FormatType::Ini).unwrap();

    let doc = serializer
        .deserialize("[Database]\nhost=localhost\nport=5432\n")
        .unwrap();
    assert_eq!(doc, json!({"Database": {"host": "localhost", "port": 5432}}));
    assert!(doc["Database"]["port"].is_i64());

    let doc = serializer.deserialize("items[0]=a\nitems[1]=b\n").unwrap();
    assert_eq!(doc, json!({"items": ["a", "b"]}));
}
