use log::Log;
use std::fs;
use termcolors::config::LoggingConfig;
use termcolors::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());
    assert_eq!(logger.log_file(), None);
    assert!(logger.dispatch().unwrap().is_none());
    assert!(logger.init().is_ok());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
        file: Some(std::env::temp_dir().join("termcolors_unused.log")),
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_default_log_file_path() {
    let config = LoggingConfig {
        enabled: true,
        ..LoggingConfig::default()
    };
    if let Ok(logger) = Logger::from_config(&config) {
        assert!(logger.is_enabled());
        assert!(logger.log_file().unwrap().ends_with("termcolors/termcolors.log"));
    }
}

#[test]
fn test_config_based_logging_enabled() {
    let temp_dir = std::env::temp_dir().join("termcolors_test_logger");
    let _ = fs::remove_dir_all(&temp_dir);
    let log_path = temp_dir.join("nested").join("termcolors.log");

    let config = LoggingConfig {
        enabled: true,
        level: "info".to_string(),
        file: Some(log_path.clone()),
    };
    let logger = Logger::from_config(&config).unwrap();
    assert!(logger.is_enabled());
    assert_eq!(logger.log_file(), Some(log_path.as_path()));

    let (level, sink) = logger.dispatch().unwrap().unwrap().into_log();
    assert_eq!(level, log::LevelFilter::Info);

    sink.log(
        &log::Record::builder()
            .args(format_args!("Detected color level: {}", "256"))
            .level(log::Level::Info)
            .target("termcolors")
            .build(),
    );
    sink.log(
        &log::Record::builder()
            .args(format_args!("Color level '{}' decided by {}", "256", "TERM"))
            .level(log::Level::Debug)
            .target("termcolors::resolver")
            .build(),
    );
    sink.flush();

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("INFO  termcolors: Detected color level: 256"));
    assert!(!content.contains("decided by"), "debug records are filtered at info level");

    let _ = fs::remove_dir_all(&temp_dir);
}
