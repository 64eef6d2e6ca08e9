//! Utility modules

mod time;

pub use time::{ManualClock, SystemClock};
