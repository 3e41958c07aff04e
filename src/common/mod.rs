use std::thread;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

/// A worker thread with a dedicated termination channel.
#[derive(Debug)]
pub struct Worker {
    join_handle: JoinHandle<()>,
    terminate_worker_tx: Sender<()>,
}

impl Worker {
    pub fn terminate(&self) {
        let send_result = self.terminate_worker_tx.send(());
        if send_result.is_err() {
            error!("Cannot send termination signal")
        }
    }

    pub fn join(self) {
        let join_result = self.join_handle.join();
        if join_result.is_err() {
            error!("Worker returned an error")
        }
    }
}

pub(crate) fn run_worker<T, F>(worker: F, params: T) -> Worker
where
    T: Send + 'static,
    F: Fn(T, Receiver<()>) + Send + 'static,
{
    let (terminate_worker_tx, terminate_worker_rx): (Sender<()>, Receiver<()>) =
        crossbeam_channel::unbounded();

    let join_handle = thread::spawn(move || worker(params, terminate_worker_rx));

    Worker {
        join_handle,
        terminate_worker_tx,
    }
}

#[derive(Debug)]
pub struct WorkerPool {
    workers: Vec<Worker>,
}

impl WorkerPool {
    pub fn new(workers: Vec<Worker>) -> WorkerPool {
        WorkerPool { workers }
    }

    pub fn terminate(&self) {
        for worker in &self.workers {
            worker.terminate();
        }
    }

    pub fn join(self) {
        for worker in self.workers {
            worker.join();
        }
    }
}
