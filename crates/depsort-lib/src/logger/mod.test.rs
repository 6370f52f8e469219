use super::*;

#[test]
fn test_filter_directives_follow_level() {
    assert_eq!(
        Logger::filter_directives(LogLevel::Debug),
        "depsort=debug,depsort_lib=debug,debug"
    );
    assert_eq!(
        Logger::filter_directives(LogLevel::Error),
        "depsort=error,depsort_lib=error,error"
    );
}

#[test]
fn test_filter_directives_parse() {
    for level in LogLevel::ALL {
        let directives = Logger::filter_directives(level);
        assert!(EnvFilter::try_new(&directives).is_ok(), "{}", directives);
    }
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_init_once_then_already_initialized() {
    let config = LoggerConfig {
        level: LogLevel::Debug,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    let logger = Logger::init(config.clone()).unwrap();
    assert!(std::ptr::eq(logger, Logger::global().unwrap()));
    logger.debug("after init", Some(LogContext::with_items("test", 1)));

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
