//! Helpers shared by integration tests.

use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

/// Environment variables read by `AppConfig::apply_env_overrides`.
pub const CONFIG_VARS: [&str; 5] = ["HOST", "PORT", "RUST_LOG", "REPOSITORY_TYPE", "SEED_FILE"];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with exactly the given configuration variables set.
///
/// Every name in [`CONFIG_VARS`] not listed in `vars` is removed for the
/// duration of the call. Previous values are restored afterwards, also on
/// panic, and calls are serialized because the environment is process-global.
pub fn with_config_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::capture();

    for key in CONFIG_VARS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    f()
}

struct EnvRestore(Vec<(&'static str, Option<String>)>);

impl EnvRestore {
    fn capture() -> Self {
        Self(
            CONFIG_VARS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect(),
        )
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in &self.0 {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Writes `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
