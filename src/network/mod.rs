pub mod client;

pub use client::{Latency, SimulatedClient};
