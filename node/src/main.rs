#[macro_use]
extern crate log;
extern crate chrono;
extern crate env_logger;

extern crate lock_modules;
extern crate quorum_lock;

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::prelude::{DateTime, Local};

use lock_modules::SystemClock;
use quorum_lock::{start_lease_keeper, LockManager, NodeId, WorkerPool};

fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            writeln!(
                buf,
                "{:5}: {} - {}",
                record.level(),
                now.format("%H:%M:%S.%3f").to_string(),
                record.args()
            )
        })
        .init();
}

fn lease_duration() -> Duration {
    Duration::from_secs(2)
}

fn renew_interval() -> Duration {
    lease_duration() / 2
}

fn main() {
    init_logger();

    info!("Simulated cluster started");

    let all_node_ids: Vec<NodeId> = (1..=5).map(|n| format!("node{}", n)).collect();

    let mut managers: HashMap<NodeId, Arc<LockManager<SystemClock>>> = HashMap::new();
    for node_id in &all_node_ids {
        let manager = LockManager::new(
            node_id.clone(),
            all_node_ids.clone(),
            lease_duration(),
            SystemClock::new(),
        )
        .expect("valid cluster configuration");

        managers.insert(node_id.clone(), Arc::new(manager));
    }

    // every node races for the lock; only node1 can win
    for (node_id, manager) in &managers {
        let acquired = manager.acquire_lock();
        info!("Node {} acquire attempt: {}", node_id, acquired);
    }

    let keepers = WorkerPool::new(
        managers
            .values()
            .map(|manager| start_lease_keeper(manager.clone(), renew_interval()))
            .collect(),
    );

    thread::sleep(lease_duration() * 2);
    report_leaders(&managers);

    // isolate the leader with node2: a 2-vs-3 split
    info!("Partitioning cluster: {{node1, node2}} vs {{node3, node4, node5}}");
    let minority = vec!["node1".to_string(), "node2".to_string()];
    let majority = vec![
        "node3".to_string(),
        "node4".to_string(),
        "node5".to_string(),
    ];

    for node_id in &minority {
        managers[node_id].set_unreachable(majority.clone());
    }
    for node_id in &majority {
        managers[node_id].set_unreachable(minority.clone());
    }

    // the old leader steps down on its next renewal; the majority side
    // then elects node3
    thread::sleep(lease_duration() * 2);
    for node_id in &majority {
        let acquired = managers[node_id].acquire_lock();
        info!("Node {} acquire attempt: {}", node_id, acquired);
    }

    report_leaders(&managers);

    // heal the partition; node3 keeps the lock until its lease lapses
    info!("Healing partition");
    for manager in managers.values() {
        manager.set_unreachable(Vec::new());
    }

    thread::sleep(lease_duration());
    report_leaders(&managers);

    keepers.terminate();
    keepers.join();

    info!("Simulated cluster stopped");
}

fn report_leaders(managers: &HashMap<NodeId, Arc<LockManager<SystemClock>>>) {
    for (node_id, manager) in managers {
        info!(
            "Node {} view: leader={:?}, is_leader={}",
            node_id,
            manager.leader(),
            manager.is_leader()
        );
    }
}
