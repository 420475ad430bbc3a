//! Property-based tests for the renderers using proptest.

use proptest::prelude::*;
use tabular::length::string_cells;
use tabular::{Table, Value};
use tabular_render::decoration::{WidthString, ASCII_SIMPLE};
use tabular_render::{CsvTable, TextTable};

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,8}",
        "[a-z ]{1,5}\n[a-z]{1,5}",
        "[0-9]{1,4}\\.[0-9]{1,3}",
        Just("£€".to_string()),
        Just("say \"hi\", ok".to_string()),
    ]
}

fn table_strategy() -> impl Strategy<Value = (usize, Vec<Vec<String>>)> {
    (1usize..5).prop_flat_map(|n_columns| {
        (
            Just(n_columns),
            prop::collection::vec(prop::collection::vec(cell_text(), 1..=n_columns), 0..6),
        )
    })
}

fn build(n_columns: usize, rows: &[Vec<String>]) -> Table {
    let mut t = Table::new();
    t.add_headers((1..=n_columns).map(|n| format!("h{n}")));
    for row in rows {
        t.add_row_items(row.iter().cloned().map(Value::from));
    }
    t
}

proptest! {
    #[test]
    fn within_width_is_never_narrower(text in "[a-z£]{0,10}", available in 0usize..16) {
        let width = string_cells(&text);
        let padded = WidthString::new(text.clone(), width).within_width(available);
        prop_assert!(padded.starts_with(&text));
        prop_assert_eq!(string_cells(&padded), width.max(available));
    }

    #[test]
    fn text_lines_share_one_width((n_columns, rows) in table_strategy()) {
        let mut t = TextTable::wrap(build(n_columns, &rows));
        t.set_decoration_named(ASCII_SIMPLE).unwrap();
        let out = t.render().unwrap();
        let widths: Vec<usize> = out.lines().map(string_cells).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", out);
        prop_assert!(t.errors().is_none());
    }

    #[test]
    fn csv_reads_back((n_columns, rows) in table_strategy()) {
        let mut t = CsvTable::wrap(build(n_columns, &rows));
        let out = t.render().unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(out.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(records.len(), rows.len() + 1);
        for (record, row) in records.iter().skip(1).zip(&rows) {
            prop_assert_eq!(record.len(), n_columns);
            for (i, text) in row.iter().enumerate() {
                prop_assert_eq!(&record[i], text.as_str());
            }
        }
    }
}
