pub mod parser;

pub use parser::parse_option_arg;
