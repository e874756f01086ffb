use envreadr::{EnvReader, EnvRecord, Field, FieldValue};
use std::collections::HashMap;

fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Default, EnvRecord)]
struct Schema {
    #[field(env = "SCHEMA_NAME", default = "svc")]
    name: String,

    #[field(env = "SCHEMA_PORT")]
    port: i32,

    // Not part of the schema: no attribute.
    internal: String,

    // Not part of the schema: no FieldValue counterpart for this type.
    #[field(env = "SCHEMA_UNSIGNED")]
    unsigned: u32,
}

#[test]
fn test_derive_emits_fields_in_declaration_order() {
    let mut record = Schema::default();
    let fields = record.fields();

    let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name", "port"]);
}

#[test]
fn test_derive_passes_tags_through_verbatim() {
    let mut record = Schema::default();
    let fields = record.fields();

    assert_eq!(fields[0].tags, &[("env", "SCHEMA_NAME"), ("default", "svc")]);
    assert_eq!(fields[0].tag("env"), "SCHEMA_NAME");
    assert_eq!(fields[0].tag("default"), "svc");
    assert_eq!(fields[1].tag("default"), "");
}

#[test]
fn test_derive_binds_the_right_variants() {
    let mut record = Schema::default();
    let fields = record.fields();

    assert!(matches!(fields[0].value, FieldValue::Str(_)));
    assert!(matches!(fields[1].value, FieldValue::I32(_)));
}

#[test]
fn test_unsupported_type_is_untouched_on_read() {
    let env = source(&[("SCHEMA_UNSIGNED", "123"), ("SCHEMA_PORT", "80")]);

    let mut record = Schema {
        unsigned: 42,
        ..Schema::default()
    };
    EnvReader::new().read_from(&env, &mut record).unwrap();

    assert_eq!(record.port, 80);
    assert_eq!(record.unsigned, 42);
}

#[test]
fn test_derived_and_manual_records_interoperate() {
    // A hand-written impl goes through the exact same read path.
    #[derive(Debug, Default)]
    struct Manual {
        level: i64,
    }

    impl EnvRecord for Manual {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field {
                name: "level",
                tags: &[("env", "MANUAL_LEVEL"), ("default", "3")],
                value: FieldValue::I64(&mut self.level),
            }]
        }
    }

    let mut record = Manual::default();
    EnvReader::new().read_from(&source(&[]), &mut record).unwrap();
    assert_eq!(record.level, 3);
}

#[test]
fn test_every_supported_type_derives() {
    #[derive(Debug, Default, EnvRecord)]
    struct Everything {
        #[field(env = "EV_BOOL")]
        flag: bool,
        #[field(env = "EV_I8")]
        tiny: i8,
        #[field(env = "EV_I16")]
        short: i16,
        #[field(env = "EV_I32")]
        int: i32,
        #[field(env = "EV_I64")]
        long: i64,
        #[field(env = "EV_F32")]
        single: f32,
        #[field(env = "EV_F64")]
        double: f64,
        #[field(env = "EV_STR")]
        text: String,
        #[field(env = "EV_STRS")]
        texts: Vec<String>,
        #[field(env = "EV_INTS")]
        ints: Vec<i64>,
        #[field(env = "EV_F32S")]
        singles: Vec<f32>,
        #[field(env = "EV_F64S")]
        doubles: Vec<f64>,
    }

    let env = source(&[
        ("EV_BOOL", "true"),
        ("EV_I8", "8"),
        ("EV_I16", "16"),
        ("EV_I32", "32"),
        ("EV_I64", "64"),
        ("EV_F32", "0.5"),
        ("EV_F64", "0.25"),
        ("EV_STR", "hello"),
        ("EV_STRS", "a,b"),
        ("EV_INTS", "1,2"),
        ("EV_F32S", "1.5,2.5"),
        ("EV_F64S", "3.5,4.5"),
    ]);

    let mut record = Everything::default();
    EnvReader::new().read_from(&env, &mut record).unwrap();

    assert!(record.flag);
    assert_eq!(record.tiny, 8);
    assert_eq!(record.short, 16);
    assert_eq!(record.int, 32);
    assert_eq!(record.long, 64);
    assert_eq!(record.single, 0.5);
    assert_eq!(record.double, 0.25);
    assert_eq!(record.text, "hello");
    assert_eq!(record.texts, vec!["a", "b"]);
    assert_eq!(record.ints, vec![1, 2]);
    assert_eq!(record.singles, vec![1.5, 2.5]);
    assert_eq!(record.doubles, vec![3.5, 4.5]);
}
