use forkhandle::{Config, Error, Handles, PackageDescriptor};
use std::fs;
use tempfile::TempDir;

#[test]
fn reads_package_json() {
    let pkg = PackageDescriptor::from_package_json(
        r#"{"name": "fork", "description": "Fork theme", "version": "1.0.0"}"#,
    )
    .unwrap();
    assert_eq!(pkg.name.as_deref(), Some("fork"));
    assert_eq!(pkg.description, "Fork theme");
}

#[test]
fn reads_cargo_toml() {
    let pkg = PackageDescriptor::from_cargo_toml(
        "[package]\nname = \"fork\"\nversion = \"0.1.0\"\ndescription = \"Fork theme\"\n",
    )
    .unwrap();
    assert_eq!(pkg.description, "Fork theme");
}

#[test]
fn missing_description_is_empty() {
    let pkg = PackageDescriptor::from_package_json(r#"{"name": "fork"}"#).unwrap();
    assert!(pkg.description.is_empty());
}

#[test]
fn unsupported_manifest_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("setup.cfg");
    fs::write(&path, "").unwrap();
    assert!(matches!(
        PackageDescriptor::from_manifest(&path),
        Err(Error::ManifestParse(_))
    ));
}

#[test]
fn config_manifest_wins_over_inline_description() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("package.json");
    fs::write(&manifest, r#"{"description": "From manifest"}"#).unwrap();

    let config_path = tmp.path().join("forkhandle.toml");
    fs::write(
        &config_path,
        format!(
            "[package]\nname = \"inline\"\ndescription = \"Inline\"\nmanifest = \"{}\"\n",
            manifest.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let pkg = config.package_descriptor().unwrap();
    assert_eq!(pkg.description, "From manifest");
    assert_eq!(pkg.name.as_deref(), Some("inline"));
}

#[test]
fn handles_from_config_use_the_description_as_subtitle() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("forkhandle.toml");
    let jsonl = tmp.path().join("notes.jsonl");
    fs::write(
        &config_path,
        format!(
            "[package]\ndescription = \"Fork theme\"\n\n[notify]\nbackend = \"json\"\njson_path = \"{}\"\n",
            jsonl.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let handles = Handles::from_config(&config).unwrap();
    handles
        .notify
        .show("built", true, forkhandle::NotifyOptions::default());

    let line = fs::read_to_string(&jsonl).unwrap();
    let entry: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(entry["subtitle"], "Fork theme");
    assert_eq!(entry["title"], "Task complete");
}
