use nshop_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn init_twice_returns_subscriber_error() {
    let logger =
        Logger::builder("integration-init-twice").level(LevelFilter::INFO).init().expect("first init");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    let err = Logger::builder("integration-init-twice-second")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
