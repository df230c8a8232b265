//! Headless play-through of a session
//!
//! - Action scripts (`U D L R B P .`)
//! - A simulated 60 Hz frame clock
//! - Periodic ASCII frames on any writer

mod replay;

pub use replay::{
    FRAME_RATE_HZ, ReplayConfig, ReplayRunner, ReplaySummary, frame_time_ms, parse_script,
};
