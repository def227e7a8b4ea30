pub mod common;
pub mod customer;
pub mod history;
pub mod spin;

pub use common::*;
pub use customer::*;
pub use history::*;
pub use spin::*;
