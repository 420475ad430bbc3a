use tabular::{align, values, Alignment, Table};
use tabular_render::{html, HtmlTable};

fn std_table() -> HtmlTable {
    let mut t = HtmlTable::new();
    t.add_headers(["foo", "loquacious", "x"]);
    t.add_row_items(values![42, ".", "fred"]);
    t.add_row_items(values!["snerty", "word", "r"]);
    t.add_separator();
    t.add_row_items(values![" ", true, ()]);
    assert!(t.errors().is_none());
    t
}

const STD: &str = "\
<table>
  <thead>
    <tr><th>foo</th><th>loquacious</th><th>x</th></tr>
  </thead>
  <tbody>
    <tr><td>42</td><td>.</td><td>fred</td></tr>
    <tr><td>snerty</td><td>word</td><td>r</td></tr>
    <tr><td> </td><td>true</td><td></td></tr>
  </tbody>
</table>
";

#[test]
fn plain_table() {
    let mut t = std_table();
    assert_eq!(t.render().unwrap(), STD);
    assert_eq!(t.render().unwrap(), STD);
    assert!(t.errors().is_none());
}

#[test]
fn id_class_and_caption() {
    let mut t = std_table();
    t.set_id("fruit").set_class("data wide").set_caption("Fruit & veg");
    let out = t.render().unwrap();
    assert!(
        out.starts_with(
            "<table class=\"data wide\" id=\"fruit\">\n  <caption>Fruit &amp; veg</caption>\n  <thead>\n"
        ),
        "{out}"
    );
}

#[test]
fn row_classes() {
    let mut t = std_table();
    let colors = ["blue", "green"];
    let mut calls = 0;
    t.set_row_class_generator(move |row| {
        calls += 1;
        format!("{} r{row} c{calls}", colors[row % 2])
    });
    let want = "\
<table>
  <thead>
    <tr class=\"blue r0 c1\"><th>foo</th><th>loquacious</th><th>x</th></tr>
  </thead>
  <tbody>
    <tr class=\"green r1 c2\"><td>42</td><td>.</td><td>fred</td></tr>
    <tr class=\"blue r2 c3\"><td>snerty</td><td>word</td><td>r</td></tr>
    <tr class=\"blue r4 c4\"><td> </td><td>true</td><td></td></tr>
  </tbody>
</table>
";
    assert_eq!(t.render().unwrap(), want);
}

#[test]
fn column_alignment_styles() {
    let mut t = std_table();
    align::set_alignment(t.column_mut(1).unwrap(), Alignment::Right);
    align::set_alignment(t.column_mut(3).unwrap(), Alignment::Period);
    let out = t.render().unwrap();
    assert!(out.contains(
        "<tr><th style=\"text-align: right\">foo</th><th>loquacious</th><th>x</th></tr>"
    ));
    assert!(out.contains("<tr><td style=\"text-align: right\">42</td><td>.</td><td>fred</td></tr>"));

    t.set_disable_style(true);
    assert_eq!(t.render().unwrap(), STD);
}

#[test]
fn escapes_cell_text() {
    let mut t = HtmlTable::new();
    t.add_headers(["<b>"]);
    t.add_row_items(values!["fish & \"chips\""]);
    let out = t.render().unwrap();
    assert!(out.contains("<th>&lt;b&gt;</th>"), "{out}");
    assert!(out.contains("<td>fish &amp; &quot;chips&quot;</td>"), "{out}");
}

#[test]
fn headerless_table_has_an_empty_head() {
    let mut t = HtmlTable::new();
    t.add_row_items(values![1]);
    assert_eq!(
        t.render().unwrap(),
        "<table>\n  <thead>\n    <tr></tr>\n  </thead>\n  <tbody>\n    <tr><td>1</td></tr>\n  </tbody>\n</table>\n"
    );
}

#[test]
fn free_function_keeps_the_table() {
    let mut table: Table = std_table().into_table();
    assert_eq!(html::render(&mut table).unwrap(), STD);
    assert_eq!(table.n_rows(), 4);
}
