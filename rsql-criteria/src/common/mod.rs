//! Value model, sort direction and the value encoder shared by filters and criteria.

mod constants;
mod sort_order;
mod value;

pub mod encoding;

pub use constants::*;
pub use sort_order::*;
pub use value::*;
