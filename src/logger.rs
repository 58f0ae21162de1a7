use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Send log lines to stderr so that stdout only carries results.
pub fn setup_logger(level: &str) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .level(get_log_level(level))
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

pub fn get_log_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}
