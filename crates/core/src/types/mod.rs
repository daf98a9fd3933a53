mod option_value;
mod platform;

pub use option_value::OptionValue;
pub use platform::{HostOs, Platform};
