use rayon::prelude::*;

use crate::cluster::NodeId;

#[derive(Clone, Debug)]
pub(crate) struct VoteResponse {
    pub peer_id: NodeId,
    pub vote_granted: bool,
}

/// Solicits votes from every reachable peer and tallies them against the
/// quorum size. The candidate always votes for itself; the requester models
/// the per-peer vote decision. Returns true once the quorum is gathered.
pub(crate) fn solicit_votes<Requester>(
    candidate_id: &str,
    peers: Vec<NodeId>,
    quorum_size: u32,
    requester: Requester,
) -> bool
where
    Requester: Fn(&NodeId) -> VoteResponse + Sync,
{
    let mut votes: u32 = 1; //self voted already

    if peers.is_empty() {
        return votes >= quorum_size;
    }

    let responses = get_responses_from_peers(peers, requester);

    for response in responses {
        trace!(
            "Node {} vote requested from peer {}. Granted={}",
            candidate_id,
            response.peer_id,
            response.vote_granted
        );

        if response.vote_granted {
            votes += 1;

            if votes >= quorum_size {
                trace!("Node {} gathered quorum for election", candidate_id);
                return true;
            }
        }
    }

    info!(
        "Node {}: cannot get quorum for election. Vote count: {}",
        candidate_id, votes
    );

    false
}

fn get_responses_from_peers<Requester>(
    peers: Vec<NodeId>,
    requester: Requester,
) -> Vec<VoteResponse>
where
    Requester: Fn(&NodeId) -> VoteResponse + Sync,
{
    peers.par_iter().map(|peer_id| requester(peer_id)).collect()
}
