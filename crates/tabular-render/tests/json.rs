use tabular::{values, PropertyOwner, Table, OMIT, SKIPPABLE};
use tabular_render::{json, JsonTable, RenderError};

fn std_table() -> JsonTable {
    let mut t = JsonTable::new();
    t.add_headers(["foo", "loquacious", "x"]);
    t.add_row_items(values![42, ".", "fred"]);
    t.add_row_items(values!["snerty", "word", "r"]);
    t.add_separator();
    t.add_row_items(values![" ", true, ()]);
    assert!(t.errors().is_none());
    t
}

const STD: &str = "[
{\"foo\": 42, \"loquacious\": \".\", \"x\": \"fred\"},
{\"foo\": \"snerty\", \"loquacious\": \"word\", \"x\": \"r\"},

{\"foo\": \" \", \"loquacious\": true, \"x\": null}
]
";

#[test]
fn one_object_per_line() {
    let mut t = std_table();
    assert_eq!(t.render().unwrap(), STD);
    assert!(t.errors().is_none());
}

#[test]
fn output_parses() {
    let mut t = std_table();
    let parsed: serde_json::Value = serde_json::from_str(&t.render().unwrap()).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["foo"], serde_json::json!(42));
    assert_eq!(rows[2]["x"], serde_json::Value::Null);
}

#[test]
fn headers_only() {
    let mut t = JsonTable::new();
    t.add_headers(["a", "b"]);
    assert_eq!(t.render().unwrap(), "[\n\n]\n");
}

#[test]
fn floats_and_escapes() {
    let mut t = JsonTable::new();
    t.add_headers(["say \"what\"", "n"]);
    t.add_row_items(values!["line\nbreak", 0.5]);
    assert_eq!(
        t.render().unwrap(),
        "[\n{\"say \\\"what\\\"\": \"line\\nbreak\", \"n\": 0.5}\n]\n"
    );
}

#[test]
fn omitted_column_and_row() {
    let mut t = std_table();
    t.column_mut(2).unwrap().set_property(OMIT, true);
    t.row_mut(2).unwrap().set_property(OMIT, true);
    let want = "[
{\"foo\": 42, \"x\": \"fred\"},

{\"foo\": \" \", \"x\": null}
]
";
    assert_eq!(t.render().unwrap(), want);
}

#[test]
fn omitted_separator_leaves_no_gap() {
    let mut t = std_table();
    t.row_mut(3).unwrap().set_property(OMIT, true);
    let out = t.render().unwrap();
    assert!(!out.contains("\n\n"), "{out}");
    assert!(out.contains("\"r\"},\n{\"foo\": \" \""), "{out}");
}

#[test]
fn skippable_cells() {
    let mut t = std_table();
    t.column_mut(3).unwrap().set_property(SKIPPABLE, true);
    let out = t.render().unwrap();
    assert!(out.contains("{\"foo\": \" \", \"loquacious\": true}\n"), "{out}");
    assert!(out.contains("\"x\": \"fred\""));
}

#[test]
fn default_column_omits_everything_else() {
    let mut t = std_table();
    t.default_column_mut().set_property(OMIT, true);
    t.column_mut(1).unwrap().set_property(OMIT, false);
    let want = "[
{\"foo\": 42},
{\"foo\": \"snerty\"},

{\"foo\": \" \"}
]
";
    assert_eq!(t.render().unwrap(), want);
}

#[test]
fn header_problems() {
    let mut t = JsonTable::new();
    t.add_row_items(values![1, 2]);
    assert!(matches!(t.render(), Err(RenderError::MissingHeaders(_))));

    t.add_headers(["a"]);
    assert!(matches!(
        t.render(),
        Err(RenderError::InsufficientHeaders { needed: 2, found: 1 })
    ));

    t.add_headers(["a", ""]);
    assert!(matches!(t.render(), Err(RenderError::EmptyHeader(2))));

    t.add_headers(["a", "a"]);
    let err = t.render().unwrap_err();
    assert!(matches!(
        err,
        RenderError::DuplicateHeader {
            column: 2,
            previous: 1,
            ..
        }
    ));
    assert_eq!(err.to_string(), "column 2 header matches previous column 1: \"a\"");
}

#[test]
fn non_boolean_omit_is_an_error() {
    let mut t = std_table();
    t.row_mut(1).unwrap().set_property(OMIT, 1u8);
    assert!(matches!(t.render(), Err(RenderError::Table(_))));
}

#[test]
fn free_function_keeps_the_table() {
    let mut table: Table = std_table().into_table();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    json::render_to(&mut table, &mut file).unwrap();
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), STD);
    assert_eq!(json::render(&mut table).unwrap(), STD);
}
