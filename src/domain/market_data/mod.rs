//! Quote records as delivered by the quote server.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
