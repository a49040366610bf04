pub mod build_info;
pub mod persistence;

use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

static TRACING_INIT: Once = Once::new();

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "INTAKE_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".intake_core";

/// Initializes the global tracing subscriber once. `RUST_LOG` directives are honored.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "intake_core=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}

/// Returns the application data directory, defaulting to `~/.intake_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
