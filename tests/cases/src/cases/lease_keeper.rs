use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lock_modules::SystemClock;
use quorum_lock::{start_lease_keeper, LockManager};

fn lease_duration() -> Duration {
    Duration::from_millis(400)
}

fn renew_interval() -> Duration {
    Duration::from_millis(100)
}

/// The lease keeper worker keeps a leader alive past its lease duration and
/// steps it down once the majority is gone.
pub fn run() {
    let all_node_ids: Vec<String> = vec![
        "node1".to_string(),
        "node2".to_string(),
        "node3".to_string(),
    ];

    let node1 = Arc::new(
        LockManager::new(
            "node1".to_string(),
            all_node_ids,
            lease_duration(),
            SystemClock::new(),
        )
        .expect("valid cluster configuration"),
    );

    assert!(node1.acquire_lock());

    let keeper = start_lease_keeper(node1.clone(), renew_interval());

    // without renewals the lease would lapse twice over
    thread::sleep(lease_duration() * 2);
    assert!(node1.is_leader());

    // cut node1 off; the next renewal tick steps it down
    node1.set_unreachable(vec!["node2".to_string(), "node3".to_string()]);
    thread::sleep(renew_interval() * 3);
    assert!(!node1.is_leader());

    keeper.terminate();
    keeper.join();

    info!("Lease keeper case finished");
}
