use camino::Utf8PathBuf;
use engagement_layout::LayoutConfig;
use std::io::Write;

#[test]
fn partial_toml_keeps_defaults() {
    let cfg = LayoutConfig::from_toml_str("label_width = 22\nmap_unit = 0.5\n").unwrap();
    assert_eq!(cfg.label_width, 22);
    assert_eq!(cfg.map_unit, 0.5);
    assert_eq!(cfg.row_height, 2.0);
    assert_eq!(cfg.map_columns, 3);
    assert_eq!(cfg.cell_capacity, Some(4));
    assert_eq!(cfg.counter_start, 1);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(LayoutConfig::from_toml_str("map_columns = 0").is_err());
    assert!(LayoutConfig::from_toml_str("row_height = -1.0").is_err());
    assert!(LayoutConfig::from_toml_str("row_height = \"tall\"").is_err());
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "counter_start = 0").unwrap();
    writeln!(file, "cell_capacity = 6").unwrap();
    let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap();
    let cfg = LayoutConfig::from_path(&path).unwrap();
    assert_eq!(cfg.counter_start, 0);
    assert_eq!(cfg.cell_capacity, Some(6));
}

#[test]
fn missing_file_names_the_path() {
    let err = LayoutConfig::from_path(&Utf8PathBuf::from("/nonexistent/layout.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/layout.toml"));
}
