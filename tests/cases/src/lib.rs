//! # Lock manager test cases
//!
//! This subproject provides integration cases for the quorum-lock manager.
//! Each case is a `run()` function with asserts; the binary runs them all
//! with logging and the `#[test]` wrappers drive them under `cargo test`.

#[macro_use]
extern crate log;


pub use self::cases::smoke;

#[cfg(test)]
mod tests {
    use crate::cases;

    #[test]
    fn single_leader() {
        cases::single_leader::run();
    }

    #[test]
    fn deterministic_winner() {
        cases::deterministic_winner::run();
    }

    #[test]
    fn lease_expiry() {
        cases::lease_expiry::run();
    }

    #[test]
    fn partition_split() {
        cases::partition_split::run();
    }

    #[test]
    fn leader_step_down() {
        cases::leader_step_down::run();
    }

    #[test]
    fn idempotent_release() {
        cases::idempotent_release::run();
    }

    #[test]
    fn lease_keeper() {
        cases::lease_keeper::run();
    }

    #[test]
    fn smoke() {
        cases::smoke::run();
    }
}
