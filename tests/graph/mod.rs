#![allow(dead_code)]

mod network;

pub use network::{assert_consistent, brute_force_distance, karachi, snapshot};
