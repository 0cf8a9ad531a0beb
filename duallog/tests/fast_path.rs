use std::{
    sync::{Arc, Barrier, Condvar, Mutex},
    time::Duration,
};

use duallog::{Logger, PrimarySink, Severity, get_logger, logger_config};

const N_THREADS: usize = 6;

/// Primary sink whose first write on each thread waits for all threads to be inside it.
///
/// This can only succeed if nothing serializes calls to the primary sink.
#[derive(Clone, Default)]
struct RendezvousSink {
    state: Arc<(Mutex<usize>, Condvar)>,
    met: Arc<Mutex<Vec<bool>>>,
}

impl PrimarySink for RendezvousSink {
    fn write(&self, _: Severity, _: &str, message: &str) {
        if !message.ends_with(" 0") {
            return;
        }
        let (inside, all_inside) = &*self.state;
        let mut inside = inside.lock().unwrap();
        *inside += 1;
        all_inside.notify_all();
        let (inside, timeout) = all_inside
            .wait_timeout_while(inside, Duration::from_secs(10), |n| *n < N_THREADS)
            .unwrap();
        drop(inside);
        self.met.lock().unwrap().push(!timeout.timed_out());
    }
}

#[test]
fn test_primary_only_path_does_not_serialize_threads() {
    let sink = RendezvousSink::default();
    duallog::init(logger_config("Fast").with_primary_sink(sink.clone())).unwrap();

    let barrier = Arc::new(Barrier::new(N_THREADS));
    let handles: Vec<_> = (0..N_THREADS)
        .map(|thread| {
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                let log = get_logger("Fast");
                barrier.wait();
                for seq in 0..100 {
                    log.debug(&format!("thread {thread} {seq}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let met = sink.met.lock().unwrap();
    assert_eq!(met.len(), N_THREADS);
    assert!(met.iter().all(|met| *met));
}
