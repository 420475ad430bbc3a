use tabular::{align, values, Alignment, Table};
use tabular_render::{markdown, MarkdownTable, RenderError};

fn std_table() -> MarkdownTable {
    let mut t = MarkdownTable::new();
    t.add_headers(["foo", "loquacious", "x"]);
    t.add_row_items(values![42, ".", "fred"]);
    t.add_row_items(values!["snerty", "word", "r"]);
    t.add_separator();
    t.add_row_items(values![" ", true, ()]);
    assert!(t.errors().is_none());
    t
}

const STD: &str = "\
| foo    | loquacious | x    |
| ------ | ---------- | ---- |
| 42     | .          | fred |
| snerty | word       | r    |
|        | true       |      |
";

#[test]
fn renders_with_headers() {
    let mut t = std_table();
    assert_eq!(t.render().unwrap(), STD);
    assert!(t.errors().is_none());
}

#[test]
fn escapes_cell_text() {
    let mut t = std_table();
    t.add_row_items(values!["a\nb\nc", "d\"e", 1]);
    let want = format!("{STD}| a&#x0a;b&#x0a;c | d&#34;e    | 1    |\n");
    assert_eq!(t.render().unwrap(), want);
}

#[test]
fn pipes_never_split_cells() {
    let mut t = MarkdownTable::new();
    t.add_headers(["a|b"]);
    t.add_row_items(values!["<x>"]);
    assert_eq!(
        t.render().unwrap(),
        "| a&#x7c;b |\n| --- |\n| &lt;x&gt; |\n"
    );
}

#[test]
fn alignment_in_control_row() {
    let mut t = std_table();
    align::set_alignment(t.column_mut(1).unwrap(), Alignment::Right);
    align::set_alignment(t.column_mut(2).unwrap(), Alignment::Center);
    let want = "\
|    foo | loquacious | x    |
| ------:|:----------:| ---- |
|     42 |     .      | fred |
| snerty |    word    | r    |
|        |    true    |      |
";
    assert_eq!(t.render().unwrap(), want);
}

#[test]
fn default_column_alignment_applies_everywhere() {
    let mut t = MarkdownTable::new();
    t.add_headers(["a", "bb"]);
    t.add_row_items(values![1, 2]);
    align::set_alignment(t.default_column_mut(), Alignment::Right);
    assert_eq!(
        t.render().unwrap(),
        "| a | bb |\n| ---:| ---:|\n| 1 |  2 |\n"
    );
}

#[test]
fn needs_headers() {
    let mut t = MarkdownTable::new();
    t.add_row_items(values![1, 2]);
    let err = t.render().unwrap_err();
    assert!(matches!(err, RenderError::MissingHeaders(_)));
    assert_eq!(err.to_string(), "require headers for markdown tables");
}

#[test]
fn needs_columns() {
    let mut t = MarkdownTable::new();
    assert!(matches!(t.render(), Err(RenderError::NoColumns)));
}

#[test]
fn free_function_keeps_the_table() {
    let mut table: Table = std_table().into_table();
    assert_eq!(markdown::render(&mut table).unwrap(), STD);
    assert_eq!(markdown::render(&mut table).unwrap(), STD);
}
