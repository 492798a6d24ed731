use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger. Output goes to stderr so it never interleaves with
/// frames a presentation adapter draws on stdout.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        eprintln!("{}", self.format_line(&timestamp, file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(file, line, message),
        None => eprintln!("{}", uninitialized_warning(file, line, message)),
    }
}

fn uninitialized_warning(file: &str, line: u32, message: &str) -> String {
    format!(
        "Logger not initialized! Call init_logger() first. Dropped {}:{}: {}",
        file, line, message
    )
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None);
        let line = logger.format_line("2024-01-01 00:00:00.000", "src/games/snake/controller.rs", 42, "hello");
        assert_eq!(line, "[2024-01-01 00:00:00.000][controller.rs:42] hello");
    }

    #[test]
    fn test_logging_before_init_warns_with_the_message() {
        let warning = uninitialized_warning("src/main.rs", 3, "early");
        assert!(warning.starts_with("Logger not initialized!"));
        assert!(warning.ends_with("src/main.rs:3: early"));
        // No test in this crate initializes the logger, so this takes the warning path.
        log("src/main.rs", 3, "early");
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Console".to_string()));
        let line = logger.format_line("ts", "C:\\src\\main.rs", 7, "started");
        assert_eq!(line, "[ts][Console][main.rs:7] started");
    }
}
