pub mod code_generator;

pub use code_generator::{CODE_PREFIX, generate_code};
