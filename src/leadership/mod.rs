use std::collections::HashSet;
use std::time::Instant;

use crate::cluster::NodeId;

pub mod election;
pub mod lease_keeper;

/// Time source injected into the manager so tests can control time
/// deterministically. Production uses a monotonic system clock.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// This node's local view of leadership. Mutated only under the manager's
/// internal mutex. `lease_expires_at` is meaningful only while
/// `current_leader_id` is set; a passed expiry voids the lease implicitly.
#[derive(Clone, Debug)]
pub(crate) struct LeadershipState {
    pub current_leader_id: Option<NodeId>,
    pub lease_expires_at: Option<Instant>,
    pub unreachable_node_ids: HashSet<NodeId>,
}

impl LeadershipState {
    pub fn new() -> LeadershipState {
        LeadershipState {
            current_leader_id: None,
            lease_expires_at: None,
            unreachable_node_ids: HashSet::new(),
        }
    }

    pub fn clear_leader(&mut self) {
        self.current_leader_id = None;
        self.lease_expires_at = None;
    }

    pub fn lease_valid(&self, now: Instant) -> bool {
        match self.lease_expires_at {
            Some(expires_at) => now < expires_at,
            None => false,
        }
    }
}
