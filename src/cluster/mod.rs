use std::collections::HashSet;
use std::time::Duration;

use crate::errors::{new_err, Result};

pub type NodeId = String;

/// Static cluster configuration shared by every node: the node's own id, the
/// fixed ordered membership and the lease duration granted to a leader.
/// Membership never changes for the life of the process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterView {
    self_id: NodeId,
    all_node_ids: Vec<NodeId>,
    lease_duration: Duration,
}

impl ClusterView {
    pub fn new(
        self_id: NodeId,
        all_node_ids: Vec<NodeId>,
        lease_duration: Duration,
    ) -> Result<ClusterView> {
        let mut seen = HashSet::new();
        for node_id in &all_node_ids {
            if !seen.insert(node_id) {
                return new_err(format!("duplicate node id: {}", node_id));
            }
        }

        if !seen.contains(&self_id) {
            return new_err(format!(
                "node id {} is not a member of the cluster",
                self_id
            ));
        }

        if lease_duration == Duration::from_secs(0) {
            return new_err("lease duration must be positive".to_string());
        }

        Ok(ClusterView {
            self_id,
            all_node_ids,
            lease_duration,
        })
    }

    pub fn self_id(&self) -> &str {
        &self.self_id
    }

    pub fn all_nodes(&self) -> &[NodeId] {
        &self.all_node_ids
    }

    pub fn peers(&self) -> Vec<NodeId> {
        let mut peer_ids = self.all_node_ids.clone();
        peer_ids.retain(|id| *id != self.self_id);

        peer_ids
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.all_node_ids.iter().any(|id| id == node_id)
    }

    pub fn quorum_size(&self) -> u32 {
        let node_count = self.all_node_ids.len() as u32;

        let half = node_count / 2;

        half + 1 //majority
    }

    pub fn lease_duration(&self) -> Duration {
        self.lease_duration
    }
}
