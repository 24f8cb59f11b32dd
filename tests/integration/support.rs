use std::fs;
use std::path::Path;
use std::sync::Mutex;

use innkeep::config::{CollectionPaths, InnkeepConfig};
use innkeep::tooling::cli::CliContext;
use tempfile::TempDir;

pub fn paths_in(temp_dir: &TempDir) -> CollectionPaths {
    CollectionPaths::in_dir(temp_dir.path())
}

/// A CLI context over `temp_dir` that ignores any config on the host.
pub fn cli_in(temp_dir: &TempDir) -> CliContext {
    CliContext::with_config(InnkeepConfig::default(), Some(temp_dir.path().to_path_buf())).unwrap()
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `INNKEEP__*` variables set, holding the lock every
/// env-sensitive test takes.
pub fn with_innkeep_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    for (key, _) in vars {
        std::env::remove_var(key);
    }
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
