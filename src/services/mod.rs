pub mod customer_service;
pub mod history_service;
pub mod spin_service;

pub use customer_service::*;
pub use history_service::*;
pub use spin_service::*;
