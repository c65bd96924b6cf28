// Logging setup built on flexi_logger; the log facade is used everywhere else.

// Global static logger handle for runtime level changes
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

/// Initialise logging for the process
///
/// `log_format` selects "text" (default) or "json"; `log_file` adds file
/// output next to stderr.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::{FileSpec, Logger};

    let level_str = log_level.unwrap_or("info");
    let format_type = log_format.unwrap_or("text");

    let mut logger = Logger::try_with_str(level_str)?;

    match format_type {
        "json" => {
            logger = logger.format(json_format);
        }
        _ => {
            if color_enabled {
                logger = logger.format(simple_color_format);
            } else {
                logger = logger.format(simple_format);
            }
        }
    }

    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

/// Change the log level at runtime
///
/// Format and file output are fixed at initialisation; only the level can
/// be adjusted afterwards.
pub fn reconfigure_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(handle_mutex) = LOGGER_HANDLE.get() {
        if let Ok(mut handle) = handle_mutex.lock() {
            let _ = handle.parse_and_push_temp_spec(log_level);
            Ok(())
        } else {
            Err("Could not acquire logger handle lock".into())
        }
    } else {
        Err("Logger handle not initialised. Call init_logging first.".into())
    }
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// Text format: "YYYY-MM-DD HH:mm:ss.fff INF message (queue/coordinator.rs:42)"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    let level_colored = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored,
        record.args(),
        format_target_as_path(record.target(), record.line()).dimmed()
    )
}

fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line())
    });

    match to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// Convert intakeq::queue::coordinator -> queue/coordinator.rs:42
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("intakeq::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            // Only once per process to avoid "logger already initialized"
            let _ = init_logging(Some("debug"), None, None, false);
        });
    }

    #[test]
    fn test_log_macros_work_after_init() {
        init_test_logging();

        log::info!("Test info message");
        log::debug!("Test debug message");
        log::warn!("Test warning message");
    }

    #[test]
    fn test_simple_format_structure() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Info)
            .target("intakeq::queue::coordinator")
            .args(format_args!("Test message"))
            .build();

        simple_format(&mut buffer, &mut now, &record).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("INF Test message"));
        assert!(output.contains("(queue/coordinator.rs"));
    }

    #[test]
    fn test_json_format_is_valid_json() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Warn)
            .target("intakeq::notifications::hub")
            .args(format_args!("Subscriber replaced"))
            .build();

        json_format(&mut buffer, &mut now, &record).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["level"], "WRN");
        assert_eq!(parsed["message"], "Subscriber replaced");
        assert_eq!(parsed["target"], "notifications/hub.rs");
    }

    #[test]
    fn test_target_path_formatting() {
        assert_eq!(
            format_target_as_path("intakeq::ledger::registry", Some(17)),
            "ledger/registry.rs:17"
        );
        assert_eq!(
            format_target_as_path("other_crate::module", None),
            "other_crate/module"
        );
    }

    #[test]
    fn test_file_logging_configuration() {
        use flexi_logger::{FileSpec, Logger};

        let temp_dir = tempfile::tempdir().unwrap();

        // File output can be configured even if the global logger is
        // already set by another test
        let logger_result = Logger::try_with_str("debug").map(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(temp_dir.path()).basename("intakeq_test"))
                .format(simple_format)
        });

        assert!(logger_result.is_ok());
    }
}
