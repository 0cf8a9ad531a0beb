mod common;

use common::CaptureSink;
use duallog::{Severity, logger_config};
use log::LevelFilter;

#[test]
fn test_log_records_are_routed_by_target() {
    let primary = CaptureSink::default();
    duallog::init(logger_config("Bridge").with_primary_sink(primary.clone())).unwrap();
    duallog::init_log_bridge(LevelFilter::Trace).unwrap();
    assert!(duallog::init_log_bridge(LevelFilter::Info).is_err());

    log::info!(target: "Net", "connected to {} peers", 5);
    log::trace!(target: "Net", "static message");
    log::error!(target: "Disk", "write failed");

    assert_eq!(
        primary.records(),
        vec![
            (
                Severity::Info,
                "Bridge".to_string(),
                "[Net] connected to 5 peers".to_string()
            ),
            (
                Severity::Verbose,
                "Bridge".to_string(),
                "[Net] static message".to_string()
            ),
            (
                Severity::Error,
                "Bridge".to_string(),
                "[Disk] write failed".to_string()
            ),
        ]
    );
}
