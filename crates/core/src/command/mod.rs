//! Executable resolution, switch synthesis and the spawnable command value

pub mod builder;
pub mod nunit_command;
pub mod resolver;

pub use builder::build_arguments;
pub use nunit_command::NunitCommand;
pub use resolver::{NUNIT_CONSOLE, NUNIT_X86_CONSOLE, resolve_executable};
