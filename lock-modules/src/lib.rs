#[macro_use]
extern crate log;
extern crate quorum_lock;

mod clock;

pub use clock::manual_clock::ManualClock;
pub use clock::system_clock::SystemClock;
