use std::io;
use std::path::Path;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "BASE32_LOG";

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// A `trace` or `debug` file beside the executable raises the level.
fn marker_level(dir: &Path) -> Option<LevelFilter> {
    ["trace", "debug"]
        .into_iter()
        .find(|name| dir.join(name).exists())
        .and_then(parse_level)
}

fn logging_level() -> LevelFilter {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    exe_dir
        .as_deref()
        .and_then(marker_level)
        .or_else(|| std::env::var(LOG_ENV).ok().and_then(|v| parse_level(&v)))
        .unwrap_or(LevelFilter::Info)
}

/// Installs the global logger on stderr; stdout is left for results.
pub fn setup_logger() {
    let level_filter = logging_level();
    let timestamps = level_filter != LevelFilter::Info;

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if timestamps {
                out.finish(format_args!(
                    "[{}][{}]: {} <{file}:{line}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                ));
            } else {
                out.finish(format_args!(
                    "[{}]: {} <{file}:{line}>",
                    record.level(),
                    message,
                ));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        log::error!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
