use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;

use crate::leadership::Clock;
use crate::manager::LockManager;

#[derive(Debug)]
pub struct LeaseKeeperParams<Cl>
where
    Cl: Clock,
{
    pub manager: Arc<LockManager<Cl>>,
    pub renew_interval: Duration,
}

/// Renews the manager's lease on every tick while this node is leader.
/// Renewal re-runs the majority-reachability check, so a leader stranded in
/// a minority partition steps down here instead of renewing indefinitely.
pub fn watch_lease<Cl>(params: LeaseKeeperParams<Cl>, terminate_worker_rx: Receiver<()>)
where
    Cl: Clock,
{
    let node_id = params.manager.cluster().self_id().to_string();

    info!("Node {} lease keeper worker started", node_id);

    let ticker = crossbeam_channel::tick(params.renew_interval);

    loop {
        select!(
            recv(terminate_worker_rx) -> res => {
                if res.is_err() {
                    error!("Node {} abnormal exit for lease keeper worker", node_id);
                }
                break
            },
            recv(ticker) -> _ => {
                if !params.manager.is_leader() {
                    continue;
                }

                // extend_lease traces successful renewals itself
                if !params.manager.extend_lease() {
                    warn!("Node {} lost its leadership lease", node_id);
                }
            }
        );
    }

    info!("Node {} lease keeper worker stopped", node_id);
}
