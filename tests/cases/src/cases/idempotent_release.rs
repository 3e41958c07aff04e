use crate::steps;

/// Release on a non-leader is a no-op; on a real leader it succeeds once.
pub fn run() {
    let cluster = steps::TestCluster::new(steps::node_ids(3));

    let node1 = cluster.manager("node1");
    let node2 = cluster.manager("node2");

    assert!(!node2.release_lock());

    assert!(node1.acquire_lock());
    assert!(!node2.release_lock());
    assert!(!node2.is_leader());

    assert!(node1.release_lock());
    assert!(!node1.release_lock());
    assert!(!node1.is_leader());

    // released lock is up for grabs again
    assert!(node1.acquire_lock());

    info!("Idempotent release case finished");
}
