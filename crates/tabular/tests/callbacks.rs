//! Callback registration and invocation order.

use std::cell::RefCell;
use std::rc::Rc;

use tabular::{
    values, CallbackHost, CallbackTarget, CallbackTime, PropertyCallback, PropertyKey,
    PropertyOwner, Row, RowPosition, Table, TableError,
};

type Log = Rc<RefCell<Vec<String>>>;

fn recorder(log: &Log, tag: &'static str) -> impl PropertyCallback + 'static {
    let log = Rc::clone(log);
    move |owner: &mut dyn PropertyOwner| -> tabular::Result<()> {
        log.borrow_mut().push(format!("{tag}:{}", owner.owner_label()));
        Ok(())
    }
}

fn register(t: &mut Table, host: CallbackHost, target: CallbackTarget, when: CallbackTime, cb: impl PropertyCallback + 'static) {
    t.register_property_callback(host, target, when, cb).unwrap();
}

#[test]
fn render_pass_order() {
    use CallbackTarget as On;
    use CallbackTime as At;

    let log = Log::default();
    let mut t = Table::new();
    t.add_headers(["h1"]).add_row_items(values!["a"]);

    register(&mut t, CallbackHost::Table, On::Itself, At::RenderPreCell, recorder(&log, "T-pre"));
    register(&mut t, CallbackHost::Table, On::Itself, At::RenderPostCell, recorder(&log, "T-post"));
    register(&mut t, CallbackHost::Column(1), On::Itself, At::RenderPreCell, recorder(&log, "C-pre"));
    register(&mut t, CallbackHost::Column(1), On::Itself, At::RenderPostCell, recorder(&log, "C-post"));
    register(&mut t, CallbackHost::Column(1), On::Cell, At::RenderPreCell, recorder(&log, "CC-pre"));
    register(&mut t, CallbackHost::Column(1), On::Cell, At::RenderPostCell, recorder(&log, "CC-post"));
    register(&mut t, CallbackHost::Table, On::Cell, At::RenderPreCell, recorder(&log, "TC-pre"));
    register(&mut t, CallbackHost::Table, On::Cell, At::Render, recorder(&log, "TC-render"));
    let body = RowPosition::Body(1);
    register(&mut t, CallbackHost::Row(body), On::Itself, At::RenderPreCell, recorder(&log, "R-pre"));
    register(&mut t, CallbackHost::Row(body), On::Row, At::RenderPostCell, recorder(&log, "R-post"));
    register(&mut t, CallbackHost::Row(body), On::Cell, At::RenderPreCell, recorder(&log, "RC-pre"));
    register(&mut t, CallbackHost::Row(body), On::Cell, At::RenderPostCell, recorder(&log, "RC-post"));
    register(&mut t, CallbackHost::Cell(body, 1), On::Itself, At::Render, recorder(&log, "cell-render"));

    t.invoke_render_callbacks();

    let expected = [
        "T-pre:table",
        "C-pre:column 1",
        "TC-pre:cell [row 0, col 1]",
        "CC-pre:cell [row 0, col 1]",
        "TC-render:cell [row 0, col 1]",
        "CC-post:cell [row 0, col 1]",
        "R-pre:row 1",
        "TC-pre:cell [row 1, col 1]",
        "CC-pre:cell [row 1, col 1]",
        "RC-pre:cell [row 1, col 1]",
        "TC-render:cell [row 1, col 1]",
        "cell-render:cell [row 1, col 1]",
        "RC-post:cell [row 1, col 1]",
        "CC-post:cell [row 1, col 1]",
        "R-post:row 1",
        "C-post:column 1",
        "T-post:table",
    ];
    assert_eq!(*log.borrow(), expected);
    assert!(t.errors().is_none());
}

#[test]
fn add_order() {
    let log = Log::default();
    let mut t = Table::new();
    t.add_headers(["h1", "h2"]);
    register(&mut t, CallbackHost::Table, CallbackTarget::Row, CallbackTime::Add, recorder(&log, "T-row"));
    register(&mut t, CallbackHost::Table, CallbackTarget::Cell, CallbackTime::Add, recorder(&log, "T-cell"));
    register(&mut t, CallbackHost::Column(2), CallbackTarget::Cell, CallbackTime::Add, recorder(&log, "C2-cell"));

    let mut row = Row::from_items(["x", "y"]);
    row.register_callback(CallbackTarget::Itself, CallbackTime::Add, recorder(&log, "R"))
        .unwrap();
    t.add_row(row);

    assert_eq!(
        *log.borrow(),
        [
            "R:row 1",
            "T-row:row 1",
            "T-cell:cell [row 1, col 1]",
            "C2-cell:cell [row 1, col 2]",
            "T-cell:cell [row 1, col 2]",
        ]
    );

    log.borrow_mut().clear();
    t.add_headers(["new"]);
    assert_eq!(
        *log.borrow(),
        ["T-row:row", "T-cell:cell [row 0, col 1]"]
    );
}

#[test]
fn unsupported_targets_are_refused() {
    let log = Log::default();
    let mut t = Table::new();
    t.add_row_items(values![1]);

    let err = t
        .register_property_callback(CallbackHost::Column(1), CallbackTarget::Row, CallbackTime::Add, recorder(&log, "x"))
        .unwrap_err();
    assert_eq!(err.to_string(), "unable to register a row-targeted callback upon a column");

    let err = t
        .register_property_callback(
            CallbackHost::Cell(RowPosition::Body(1), 1),
            CallbackTarget::Row,
            CallbackTime::Render,
            recorder(&log, "x"),
        )
        .unwrap_err();
    assert!(matches!(err, TableError::UnsupportedCallbackTarget { .. }));

    assert!(matches!(
        t.register_property_callback(CallbackHost::Column(5), CallbackTarget::Cell, CallbackTime::Add, recorder(&log, "x")),
        Err(TableError::ColumnOutOfRange(5))
    ));
    assert!(t
        .register_property_callback(
            CallbackHost::Row(RowPosition::Header),
            CallbackTarget::Itself,
            CallbackTime::Add,
            recorder(&log, "x"),
        )
        .is_err());
}

#[test]
fn failing_callbacks_accumulate_errors() {
    const WIDTH: PropertyKey = PropertyKey::new("test", "width");

    let mut t = Table::new();
    t.add_row_items(values!["ok", "also ok"]);
    t.register_property_callback(
        CallbackHost::Table,
        CallbackTarget::Cell,
        CallbackTime::Render,
        |owner: &mut dyn PropertyOwner| -> tabular::Result<()> {
            let width = owner.as_cell().map(|c| c.terminal_cell_width()).unwrap_or(0);
            if width > 2 {
                return Err(TableError::callback_message(format!("{} too wide", owner.owner_label())));
            }
            owner.properties_mut().set(WIDTH, width);
            Ok(())
        },
    )
    .unwrap();

    t.invoke_render_callbacks();

    let errs = t.errors().unwrap();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].to_string(), "cell [row 1, col 2] too wide");
    let first = t.row(1).unwrap().cell(1).unwrap();
    assert_eq!(first.properties().get_as::<usize>(&WIDTH), Some(&2));
}
