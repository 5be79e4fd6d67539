//! Tests for configuration loading.

use std::sync::{Mutex, OnceLock};

use palaver::config::{ClientConfig, DEFAULT_ENDPOINT_URL, DEFAULT_MODEL, ENDPOINT_URL_ENV, MODEL_ENV};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 2] = [ENDPOINT_URL_ENV, MODEL_ENV];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn config_from_env_reads_both_variables() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    std::env::set_var(ENDPOINT_URL_ENV, "http://localhost:9999/v1/chat/completions");
    std::env::set_var(MODEL_ENV, "llama-3-8b");

    let config = ClientConfig::from_env();

    assert_eq!(config.endpoint_url, "http://localhost:9999/v1/chat/completions");
    assert_eq!(config.model, "llama-3-8b");
    assert!(config.validate().is_ok());
}

#[test]
fn config_from_env_falls_back_to_defaults() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let config = ClientConfig::from_env();

    assert_eq!(config, ClientConfig::new(DEFAULT_ENDPOINT_URL, DEFAULT_MODEL));
}

#[test]
fn config_from_env_ignores_blank_values() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&CONFIG_ENV_VARS);

    std::env::set_var(ENDPOINT_URL_ENV, "   ");
    std::env::remove_var(MODEL_ENV);

    let config = ClientConfig::from_env();

    assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
    assert_eq!(config.model, DEFAULT_MODEL);
}
