// tests/config_test.rs
use release_scout::config::{load_config, Config};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.tag_format, "v{version}");
    assert_eq!(config.display.commit_limit, 10);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
tag_format = "release-{version}"

[display]
commit_limit = 5
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tag_format, "release-{version}");
    assert_eq!(config.display.commit_limit, 5);
}

#[test]
fn test_load_partial_file_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(br#"tag_format = "app-{version}""#)
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tag_format, "app-{version}");
    assert_eq!(config.display.commit_limit, 10);
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"tag_format = [not toml").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_load_missing_explicit_path_fails() {
    assert!(load_config(Some("/does/not/exist/releasescout.toml")).is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    // Changes the process working directory, so it must not run in
    // parallel with other tests
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("releasescout.toml"),
        r#"tag_format = "cwd-{version}""#,
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().tag_format, "cwd-{version}");
}
