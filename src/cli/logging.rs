use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging with the requested verbosity
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = SimpleLogger::new().with_level(log_level).init();

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
