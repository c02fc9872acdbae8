//! Library components for the order validator CLI.

pub mod logging;
pub mod run;
