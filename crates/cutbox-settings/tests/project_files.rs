use cutbox_settings::{overrides_table, ConfigError, Project, SettingsError};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use toml::Table;

fn project_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_project_from_disk() {
    let file = project_file(
        r#"
unit = "mil"
resolution = 96

[lid]
design = "cardbox"
length = 3.5
"#,
    );
    let project = Project::load_from_file(file.path()).unwrap();
    let section = project.section("lid").unwrap();
    assert_eq!(section.design(), "cardbox");

    let settings = project
        .settings_for(section, Table::new(), Table::new())
        .unwrap();
    assert_eq!(settings.converter().resolution(), 96);
    assert_eq!(settings.measure("length").unwrap(), 3_360_000);
}

#[test]
fn overrides_beat_every_file_layer() {
    let file = project_file(
        r#"
height = 10

[tray]
design = "matchbox"
height = 20
"#,
    );
    let project = Project::load_from_file(file.path()).unwrap();
    let section = project.section("tray").unwrap();
    let overrides = overrides_table(&["height=30mm", "unit=mil", "unit=mm"]).unwrap();
    let settings = project
        .settings_for(section, Table::new(), overrides)
        .unwrap();
    let conv = settings.converter();
    assert_eq!(settings.measure("height").unwrap(), conv.to_drawing_units(30.0));
    assert_eq!(settings.text("unit").unwrap().as_deref(), Some("mm"));
}

#[test]
fn rejects_other_extensions() {
    let file = Builder::new().suffix(".json").tempfile().unwrap();
    assert!(matches!(
        Project::load_from_file(file.path()),
        Err(SettingsError::Config(ConfigError::UnsupportedFormat(_)))
    ));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Project::load_from_file(&path),
        Err(SettingsError::LoadError(_))
    ));
}

#[test]
fn malformed_toml_is_reported() {
    let file = project_file("[tray\nlength = ");
    assert!(matches!(
        Project::load_from_file(file.path()),
        Err(SettingsError::TomlError(_))
    ));
}
