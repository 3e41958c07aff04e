use crate::steps;

/// End-to-end pass over the whole lock lifecycle: election, renewal,
/// voluntary release, failover to the next node.
pub fn run() {
    let cluster = steps::TestCluster::new(steps::node_ids(3));

    let node1 = cluster.manager("node1");
    let node2 = cluster.manager("node2");

    // election
    let winners = cluster.acquire_from_all_nodes();
    assert_eq!(vec!["node1".to_string()], winners);

    // renewal keeps the lease alive
    cluster.clock.advance(steps::lease_duration() / 2);
    assert!(node1.extend_lease());
    cluster.clock.advance(steps::lease_duration() / 2);
    assert!(node1.is_leader());

    // voluntary release, then failover once node1 is reported gone
    assert!(node1.release_lock());
    cluster.partition(
        &["node1".to_string()],
        &["node2".to_string(), "node3".to_string()],
    );

    assert!(node2.acquire_lock());
    assert_eq!(Some("node2".to_string()), node2.leader());
    assert!(node2.can_reach("node3"));
    assert!(!node2.can_reach("node1"));

    info!("Smoke case finished");
}
