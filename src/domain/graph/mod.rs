//! Display table aggregate: schema, viewer configuration, the ports to the
//! visualization engine and the idempotent feeder.

pub mod feeder;
pub mod ports;
pub mod row;
pub mod schema;
pub mod viewer;

pub use feeder::*;
pub use ports::*;
pub use row::*;
pub use schema::*;
pub use viewer::*;
