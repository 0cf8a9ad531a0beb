mod common;

use std::{sync::mpsc, time::Duration};

use common::{CaptureSink, SharedBuffer};
use duallog::{Logger, PrimarySink, Severity, get_logger, logger_config};

/// Primary sink that logs through duallog itself for every `[Outer]` record.
#[derive(Clone, Default)]
struct ForwardingSink(CaptureSink);

impl PrimarySink for ForwardingSink {
    fn write(&self, severity: Severity, process_tag: &str, message: &str) {
        if message.starts_with("[Outer] ") {
            get_logger("Inner").info(&format!("seen {message}"));
        }
        self.0.write(severity, process_tag, message);
    }
}

#[test]
fn test_primary_sink_logging_from_inside_emit() {
    let primary = ForwardingSink::default();
    let file = SharedBuffer::default();
    duallog::init(
        logger_config("MyLog")
            .with_primary_sink(primary.clone())
            .with_secondary_sink(file.clone()),
    )
    .unwrap();

    let (done, finished) = mpsc::channel();
    std::thread::spawn(move || {
        let log = get_logger("Outer");
        log.info("hello");
        log.error_with_cause("boom", &std::io::Error::other("cause"));
        done.send(()).unwrap();
    });
    finished
        .recv_timeout(Duration::from_secs(5))
        .expect("nested log from a primary sink blocked");

    assert_eq!(
        primary.0.messages_with_prefix("[Inner] "),
        vec!["seen [Outer] hello", "seen [Outer] boom\ncause"]
    );
    assert_eq!(
        primary.0.messages_with_prefix("[Outer] "),
        vec!["hello", "boom\ncause"]
    );
    // nested records are not mirrored, outer records still are
    assert!(file.messages_with_prefix("[Inner] ").is_empty());
    assert_eq!(file.messages_with_prefix("[Outer] "), vec!["hello", "boom"]);

    // the flag is cleared once the outer record is written
    get_logger("Inner").warn("after");
    assert_eq!(file.messages_with_prefix("[Inner] "), vec!["after"]);
}
