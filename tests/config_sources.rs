use forkhandle::config::extract_sources;
use forkhandle::{Config, Error, LogType};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_file_gives_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("forkhandle.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.notify.enabled);
    assert_eq!(config.notify.backend, "command");
    assert!(config.log.colors);
    assert_eq!(config.log.glyphs, "unicode");
    assert!(config.package.description.is_empty());
}

#[test]
fn missing_file_gives_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.general.level, "info");
}

#[test]
fn sections_are_read() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("forkhandle.toml");
    fs::write(
        &path,
        r#"
[package]
description = "Fork theme"

[notify]
backend = "json"
on_last = false

[log]
glyphs = "ascii"

[log.defaults]
type = "bad"
space = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.package.description, "Fork theme");
    assert_eq!(config.notify.backend, "json");
    assert!(!config.notify.on_last);
    assert_eq!(config.log.defaults.kind, Some(LogType::Bad));
    assert_eq!(config.log.defaults.space, Some(false));
    assert_eq!(config.parse_glyphs().bad(), "x");
}

#[test]
fn load_with_sources_merges_colors() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    let base_content = format!(
        r##"
source = "{}"

[colors]
red = "#ff0000"
"##,
        child_path.display()
    );
    fs::write(&base_path, base_content).unwrap();
    fs::write(
        &child_path,
        r##"
[colors]
red = "#00ff00"
blue = "#0000ff"
"##,
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.colors["red"], "#ff0000");
    assert_eq!(config.colors["blue"], "#0000ff");
}

#[test]
fn relative_source_resolves_next_to_including_file() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    fs::write(&base_path, "source = \"colors.toml\"\n").unwrap();
    fs::write(
        tmp_dir.path().join("colors.toml"),
        "[colors]\ncyan = \"#00ffff\"\n",
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert!(config.colors.contains_key("cyan"));
}

#[test]
fn load_with_missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");

    let base_content = format!(
        r##"
source = "{}"

[colors]
red = "#ff0000"
"##,
        tmp_dir.path().join("missing.toml").display()
    );
    fs::write(&base_path, base_content).unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert!(config.colors.contains_key("red"));
}

#[test]
fn load_with_cyclic_sources_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.toml");
    let b_path = tmp_dir.path().join("b.toml");

    fs::write(&a_path, format!(r#"source = "{}""#, b_path.display())).unwrap();
    fs::write(&b_path, format!(r#"source = "{}""#, a_path.display())).unwrap();

    let err = Config::load_from(&a_path).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn extract_sources_leaves_other_keys() {
    let (sources, rest) = extract_sources("source = \"a.toml\"\nsources_dir = 1\n[x]\ny = 2\n");
    assert_eq!(sources, ["a.toml"]);
    assert!(rest.contains("sources_dir = 1"));
    assert!(rest.contains("y = 2"));
}

#[test]
fn bad_toml_is_a_parse_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.toml");
    fs::write(&path, "[notify\nbackend = ").unwrap();
    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        Error::ConfigParse(_)
    ));
}
