#[macro_use]
extern crate log;
extern crate chrono;
extern crate env_logger;


use chrono::prelude::{DateTime, Local};
use std::io::Write;

fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            writeln!(
                buf,
                "{:5}: {} - {}",
                record.level(),
                now.format("%H:%M:%S.%3f").to_string(),
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logger();

    info!("Lock manager test cases started");

    run_case("single_leader", cases::single_leader::run);
    run_case("deterministic_winner", cases::deterministic_winner::run);
    run_case("lease_expiry", cases::lease_expiry::run);
    run_case("partition_split", cases::partition_split::run);
    run_case("leader_step_down", cases::leader_step_down::run);
    run_case("idempotent_release", cases::idempotent_release::run);
    run_case("lease_keeper", cases::lease_keeper::run);
    run_case("smoke", cases::smoke::run);

    info!("Lock manager test cases completed");
}

fn run_case<F>(name: &str, case: F)
where
    F: Fn(),
{
    info!("Case '{}' started", name);
    case();
    info!("Case '{}' completed", name);
}
