use duallog::{Logger, get_logger, get_logger_for, logger_config};

struct Worker;

fn main() {
    let path = "/tmp/duallog_multi_threaded.log";
    std::fs::remove_file(path).ok();
    duallog::init(
        logger_config("MyApp")
            .with_log_file(path)
            .expect("Unable to create log file"),
    )
    .expect("logger initialized twice");

    let log = get_logger("Main");
    log.info("Hello, world!");
    let handles: Vec<_> = (0..5)
        .map(|i| {
            std::thread::spawn(move || {
                let log = get_logger_for::<Worker>();
                for j in 0..3 {
                    log.debug(&format!("thread {i} step {j}"));
                }
                if i == 4 {
                    let err = std::fs::read("/nonexistent/duallog").unwrap_err();
                    log.error_with_cause("cannot read input", &err);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    log.info(&format!(
        "{path} contains:\n{}",
        std::fs::read_to_string(path).unwrap().trim_end()
    ));
}
