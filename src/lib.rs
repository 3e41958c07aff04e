#![warn(missing_debug_implementations, unsafe_code)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate crossbeam_channel;

mod cluster;
mod common;
mod errors;
mod leadership;
mod manager;

use std::sync::Arc;
use std::time::Duration;

pub use cluster::{ClusterView, NodeId};
pub use common::{Worker, WorkerPool};
pub use errors::InvalidConfiguration;
pub use leadership::lease_keeper::LeaseKeeperParams;
pub use leadership::Clock;
pub use manager::LockManager;

pub type LeaseKeeperWorker = common::Worker;

/// Spawns a background worker renewing the manager's lease on a fixed cadence.
/// The interval must stay safely below the lease duration (half is customary)
/// so a single missed tick does not lapse the lease.
pub fn start_lease_keeper<Cl>(
    manager: Arc<LockManager<Cl>>,
    renew_interval: Duration,
) -> LeaseKeeperWorker
where
    Cl: Clock,
{
    let params = LeaseKeeperParams {
        manager,
        renew_interval,
    };

    common::run_worker(leadership::lease_keeper::watch_lease, params)
}
