use gpault::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("GPAULT_SERVER__HOST");
        env::remove_var("GPAULT_SERVER__PORT");
        env::remove_var("GPAULT_CONFIG_FILE");
        env::remove_var("GPAULT_HOST");
        env::remove_var("GPAULT_PORT");
        env::remove_var("GPAULT_STATIC_DIR");
        env::remove_var("GPAULT_SERVER__STATIC_DIR");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["gpault"]).expect("defaults should load");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.static_dir, "static");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("GPAULT_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["gpault"]).expect("failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_wins_over_env() {
    clear_env_vars();
    unsafe {
        env::set_var("GPAULT_SERVER__PORT", "9090");
    }

    let config =
        AppConfig::load_from_args(["gpault", "--port", "8080"]).expect("failed to load config");
    assert_eq!(config.server.port, 8080);

    clear_env_vars();
}

#[test]
#[serial]
fn test_static_dir_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("GPAULT_STATIC_DIR", "assets");
    }

    let config = AppConfig::load_from_args(["gpault"]).expect("failed to load config");
    assert_eq!(config.server.static_dir, "assets");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 7070
"#;

    let file_path = "test_gpault.yaml";
    fs::write(file_path, config_content).expect("failed to write temp config");

    let config = AppConfig::load_from_args(["gpault", "--config", file_path])
        .expect("failed to load config from file");
    assert_eq!(config.server.port, 7070);
    // Fields absent from the file keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");

    fs::remove_file(file_path).unwrap();
    clear_env_vars();
}
