use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use zava_ar::config::AppConfig;

const BIN: &str = "zava-ar";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("ZAVA_SERVER__PORT");
        env::remove_var("ZAVA_SHELL__BRAND");
        env::remove_var("ZAVA_SHELL__DEFAULT_TAB");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.shell.brand, "Zava AR");
    assert_eq!(config.shell.tagline, "Accounts Receivable");
    assert_eq!(config.shell.user_label, "AR Manager");
    assert_eq!(config.shell.default_tab, "dashboard");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("ZAVA_SERVER__PORT", "9090");
        env::set_var("ZAVA_SHELL__DEFAULT_TAB", "invoices");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.shell.default_tab, "invoices");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("ZAVA_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "4040", "--default-tab", "payments"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4040);
    assert_eq!(config.shell.default_tab, "payments");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
server:
  port: 7070
shell:
  brand: "Contoso AR"
"#
    )
    .expect("Failed to write temp config");

    // Tell AppConfig to use this file via Env Var
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.shell.brand, "Contoso AR");
    // Untouched keys keep their defaults.
    assert_eq!(config.shell.user_label, "AR Manager");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
