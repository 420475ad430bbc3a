use tabular::{values, Table};
use tabular_render::{csv as csv_render, CsvTable, RenderError};

fn std_table() -> CsvTable {
    let mut t = CsvTable::new();
    t.add_headers(["foo", "loquacious", "x"]);
    t.add_row_items(values![42, ".", "fred"]);
    t.add_row_items(values!["snerty", "word", "r"]);
    t.add_separator();
    t.add_row_items(values![" ", true, ()]);
    assert!(t.errors().is_none());
    t
}

const STD: &str = "\
\"foo\",\"loquacious\",\"x\"
\"42\",\".\",\"fred\"
\"snerty\",\"word\",\"r\"
\" \",\"true\",\"\"
";

#[test]
fn quotes_every_field_and_skips_separators() {
    let mut t = std_table();
    assert_eq!(t.render().unwrap(), STD);
    assert_eq!(t.render().unwrap(), STD);
}

#[test]
fn headerless() {
    let mut t = CsvTable::new();
    t.add_row_items(values![42, "fred"]);
    assert_eq!(t.render().unwrap(), "\"42\",\"fred\"\n");
}

#[test]
fn embedded_newlines_and_quotes() {
    let mut t = CsvTable::new();
    t.add_headers(["a", "b"]);
    t.add_row_items(values!["one\ntwo", "say \"hi\""]);
    assert_eq!(
        t.render().unwrap(),
        "\"a\",\"b\"\n\"one\ntwo\",\"say \"\"hi\"\"\"\n"
    );
}

#[test]
fn short_rows_are_padded() {
    let mut t = CsvTable::new();
    t.add_headers(["a", "b", "c"]);
    t.add_row_items(values!["x"]);
    assert_eq!(t.render().unwrap(), "\"a\",\"b\",\"c\"\n\"x\",\"\",\"\"\n");
}

#[test]
fn other_delimiters() {
    let mut t = std_table();
    t.set_delimiter(b';');
    let out = t.render().unwrap();
    assert!(out.starts_with("\"foo\";\"loquacious\";\"x\"\n"));
}

#[test]
fn needs_columns() {
    let mut t = CsvTable::new();
    assert!(matches!(t.render(), Err(RenderError::NoColumns)));
}

#[test]
fn free_functions() {
    let mut table: Table = std_table().into_table();
    assert_eq!(csv_render::render(&mut table).unwrap(), STD);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    csv_render::render_to(&mut table, &mut file).unwrap();
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), STD);
    assert_eq!(table.n_rows(), 4);
}
