//! Configuration for a single NUnit run

mod settings;

pub use settings::{Options, RunConfig};
