pub mod customers;
pub mod history;

pub use customers as customer_entity;
pub use customers::CodeStatus;
pub use history as history_entity;
