//! Logging setup for the demo binaries.
//!
//! Logs go to stderr, and additionally to a file under the platform data
//! directory when one can be opened.

use log::LevelFilter;

/// Installs the global logger. Safe to call once per process.
pub fn init(level: LevelFilter) {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(dir) = dirs::data_local_dir() {
        let dir = dir.join("skyrunner");
        if std::fs::create_dir_all(&dir).is_ok()
            && let Ok(file) = fern::log_file(dir.join("skyrunner.log"))
        {
            dispatch = dispatch.chain(file);
        }
    }

    if dispatch.apply().is_err() {
        eprintln!("logger was already initialized");
    }
}
