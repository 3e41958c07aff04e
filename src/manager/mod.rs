use core::fmt;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cluster::{ClusterView, NodeId};
use crate::errors::InvalidConfiguration;
use crate::leadership::election::{solicit_votes, VoteResponse};
use crate::leadership::{Clock, LeadershipState};


/// One node's view of a cluster-wide lock guarded by lease-bound leader
/// election. Every instance owns its state exclusively; cluster-wide mutual
/// exclusion comes from the majority-vote arithmetic, not shared memory.
/// All operations are bounded local computations and never block on I/O.
pub struct LockManager<Cl>
where
    Cl: Clock,
{
    cluster: ClusterView,
    clock: Cl,
    state: Mutex<LeadershipState>,
}

impl<Cl> LockManager<Cl>
where
    Cl: Clock,
{
    pub fn new(
        self_id: NodeId,
        all_node_ids: Vec<NodeId>,
        lease_duration: Duration,
        clock: Cl,
    ) -> Result<LockManager<Cl>, InvalidConfiguration> {
        let cluster = ClusterView::new(self_id, all_node_ids, lease_duration)?;

        info!(
            "Node {} lock manager created: {} nodes, quorum size {}",
            cluster.self_id(),
            cluster.all_nodes().len(),
            cluster.quorum_size()
        );

        Ok(LockManager {
            cluster,
            clock,
            state: Mutex::new(LeadershipState::new()),
        })
    }

    pub fn cluster(&self) -> &ClusterView {
        &self.cluster
    }

    /// Attempts to become leader. Fails while any believed-valid lease is in
    /// force, when no majority of the cluster is reachable, or when the
    /// election votes go to a smaller reachable node id.
    pub fn acquire_lock(&self) -> bool {
        let mut state = self.state.lock();
        let now = self.clock.now();

        if state.current_leader_id.is_some() && state.lease_valid(now) {
            debug!(
                "Node {} acquire refused: valid lease held by {:?}",
                self.cluster.self_id(),
                state.current_leader_id
            );
            return false;
        }

        let reachable = self.reachable_nodes(&state);
        let quorum_size = self.cluster.quorum_size();

        if (reachable.len() as u32) < quorum_size {
            info!(
                "Node {} acquire refused: {} of {} nodes reachable, no possible majority",
                self.cluster.self_id(),
                reachable.len(),
                self.cluster.all_nodes().len()
            );
            return false;
        }

        let self_id = self.cluster.self_id().to_string();

        let mut lowest_reachable = self_id.clone();
        for node_id in &reachable {
            if *node_id < lowest_reachable {
                lowest_reachable = node_id.clone();
            }
        }

        // Deterministic stand-in for a vote RPC: every peer backs the first
        // node id in the candidate's reachable view, so exactly one node per
        // connected majority can gather a quorum.
        let candidate_is_preferred = self_id == lowest_reachable;
        let requester = |peer_id: &NodeId| VoteResponse {
            peer_id: peer_id.clone(),
            vote_granted: candidate_is_preferred,
        };

        let peers: Vec<NodeId> = reachable
            .iter()
            .filter(|node_id| **node_id != self_id)
            .cloned()
            .collect();

        let won_election = solicit_votes(&self_id, peers, quorum_size, requester);

        if won_election {
            let lease_duration = self.cluster.lease_duration();
            state.current_leader_id = Some(self_id.clone());
            state.lease_expires_at = Some(now + lease_duration);

            info!(
                "Node {} acquired leadership lease for {:?}",
                self_id, lease_duration
            );
            true
        } else {
            debug!("Node {} leader election failed", self_id);
            false
        }
    }

    /// Voluntary release. Succeeds whenever this node recorded itself as
    /// leader, regardless of lease status; a no-op on any other node.
    pub fn release_lock(&self) -> bool {
        let mut state = self.state.lock();

        if state.current_leader_id.as_deref() == Some(self.cluster.self_id()) {
            state.clear_leader();
            info!("Node {} released leadership lease", self.cluster.self_id());
            true
        } else {
            false
        }
    }

    /// Renews the lease if this node is a valid leader with majority support.
    /// A leader that can reach at most half of the cluster steps down here:
    /// a lease without majority backing is ineligible for renewal.
    pub fn extend_lease(&self) -> bool {
        let mut state = self.state.lock();
        let now = self.clock.now();

        if state.current_leader_id.as_deref() != Some(self.cluster.self_id()) {
            return false;
        }

        if !state.lease_valid(now) {
            // A lapsed lease cannot be resurrected: renewal does not re-run
            // the election and another node may already hold the lock.
            state.clear_leader();
            debug!(
                "Node {} renewal refused: lease already expired",
                self.cluster.self_id()
            );
            return false;
        }

        let reachable = self.reachable_nodes(&state);

        if (reachable.len() as u32) < self.cluster.quorum_size() {
            state.clear_leader();
            warn!(
                "Node {} lost majority support ({} of {} nodes reachable). Stepping down",
                self.cluster.self_id(),
                reachable.len(),
                self.cluster.all_nodes().len()
            );
            return false;
        }

        state.lease_expires_at = Some(now + self.cluster.lease_duration());
        trace!("Node {} lease renewed", self.cluster.self_id());
        true
    }

    /// Lease validity is recomputed on every call: an expired lease stops
    /// conferring leadership the instant it lapses.
    pub fn is_leader(&self) -> bool {
        let state = self.state.lock();

        state.current_leader_id.as_deref() == Some(self.cluster.self_id())
            && state.lease_valid(self.clock.now())
    }

    /// Current leader as far as this node knows, or `None` once the recorded
    /// lease has expired: a stale belief is never reported as authoritative.
    pub fn leader(&self) -> Option<NodeId> {
        let state = self.state.lock();

        if state.lease_valid(self.clock.now()) {
            state.current_leader_id.clone()
        } else {
            None
        }
    }

    /// Replaces the set of nodes this instance cannot communicate with.
    /// Models the failure-detector input; a real deployment wires this to
    /// network probes instead.
    pub fn set_unreachable(&self, node_ids: Vec<NodeId>) {
        let mut state = self.state.lock();

        debug!(
            "Node {} unreachable set replaced: {:?}",
            self.cluster.self_id(),
            node_ids
        );

        state.unreachable_node_ids = node_ids.into_iter().collect();
    }

    pub fn can_reach(&self, node_id: &str) -> bool {
        if node_id == self.cluster.self_id() {
            return true;
        }

        let state = self.state.lock();

        !state.unreachable_node_ids.contains(node_id)
    }

    fn reachable_nodes(&self, state: &LeadershipState) -> Vec<NodeId> {
        self.cluster
            .all_nodes()
            .iter()
            .filter(|node_id| {
                node_id.as_str() == self.cluster.self_id()
                    || !state.unreachable_node_ids.contains(*node_id)
            })
            .cloned()
            .collect()
    }
}

impl<Cl> fmt::Debug for LockManager<Cl>
where
    Cl: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LockManager")
            .field("cluster", &self.cluster)
            .field("state", &self.state)
            .finish()
    }
}
