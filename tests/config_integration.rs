use prompt_composer::config::AppConfig;
use serial_test::serial;
use std::env;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("COMPOSER_SERVER__PORT");
        env::remove_var("COMPOSER_SERVER__HOST");
        env::remove_var("COMPOSER_CHAT__SYSTEM_PROMPT");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["prompt-composer"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.chat.system_prompt, "You are a helpful assistant.");
    assert_eq!(config.chat.session_timeout_minutes, 30);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("COMPOSER_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["prompt-composer"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_wins_over_env() {
    clear_env_vars();
    unsafe {
        env::set_var("COMPOSER_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["prompt-composer", "--port", "7070"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7070);

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
    writeln!(
        file,
        "server:\n  port: 7070\nchat:\n  system_prompt: \"Answer in haiku.\""
    )
    .expect("Failed to write temp config");

    let path = file.path().to_str().expect("temp path should be UTF-8");
    let config = AppConfig::load_from_args(["prompt-composer", "--config", path])
        .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.chat.system_prompt, "Answer in haiku.");
    // Untouched keys keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");
}
