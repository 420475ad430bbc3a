use std::io::Write as _;

use serial_test::serial;
use tabular::{values, Color, Table};
use tabular_render::{RenderConfig, RenderError, Renderer};

fn table() -> Table {
    let mut t = Table::new();
    t.add_headers(["name", "n"]);
    t.add_row_items(values!["pear", 3]);
    t
}

fn config_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_file() {
    let file = config_file(
        ".yaml",
        "style: ascii-simple\nfg: white\nbg: navy\nsolid: true\nto_eol: true\n",
    );
    let config = RenderConfig::from_path(file.path()).unwrap();
    assert_eq!(config.style(), "ascii-simple");
    assert_eq!(config.fg, Some(Color::rgb24(255, 255, 255)));
    assert_eq!(config.bg, Some(Color::rgb24(0, 0, 128)));
    assert!(config.solid && config.to_eol);

    let mut r = config.renderer(table()).unwrap();
    let out = r.render().unwrap();
    assert_eq!(
        console::strip_ansi_codes(&out),
        "+------+---+\n| name | n |\n+------+---+\n| pear | 3 |\n+------+---+\n"
    );
    assert!(out.lines().all(|line| line.ends_with("\x1b[K\x1b[m")));
}

#[test]
fn json_file_configures_html() {
    let file = config_file(
        ".json",
        r#"{"style": "html", "html": {"id": "t1", "class": "listing", "disable_style": true}}"#,
    );
    let config = RenderConfig::from_path(file.path()).unwrap();
    let mut r = config.renderer(table()).unwrap();
    assert!(matches!(r, Renderer::Html(_)));
    assert!(r.render().unwrap().starts_with("<table class=\"listing\" id=\"t1\">\n"));
}

#[test]
fn default_config_is_a_heavy_text_table() {
    let mut r = RenderConfig::default().renderer(table()).unwrap();
    assert!(r.render().unwrap().starts_with("┏━━━━━━┳━━━┓\n"));
}

#[test]
fn unknown_decoration_is_refused() {
    let config = RenderConfig::from_yaml("style: sparkly\n").unwrap();
    assert!(matches!(config.renderer(table()), Err(RenderError::Config(_))));
}

#[test]
fn unsupported_files() {
    let file = config_file(".toml", "style = 'csv'\n");
    assert!(matches!(
        RenderConfig::from_path(file.path()),
        Err(RenderError::Config(_))
    ));
    assert!(matches!(
        RenderConfig::from_path("/nonexistent/render.yaml"),
        Err(RenderError::Config(_))
    ));
}

#[test]
#[serial]
fn registered_decorations_are_configurable() {
    let mut stars = tabular_render::Decoration::default();
    stars.horizontal = "*".into();
    stars.vertical = "*".into();
    stars.cross_piece = "*".into();
    tabular_render::register_decoration("config-stars", stars);

    let config = RenderConfig::from_yaml("style: config-stars\n").unwrap();
    let mut t = Table::new();
    t.add_row_items(values!["a"]);
    let mut r = config.renderer(t).unwrap();
    assert_eq!(r.render().unwrap(), "*****\n* a *\n*****\n");
}
