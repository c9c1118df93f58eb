use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

/// Installs the global logger. The filter is read from `RUST_LOG`, falling
/// back to `default_filter`.
pub fn init(default_filter: &str) {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
