pub mod draw;
pub mod prize;
pub mod random;

pub use prize::*;
pub use random::*;
