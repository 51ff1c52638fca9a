//! Deep-equality assertions for DynamoDB items in integration tests.
//!
//! The comparator walks two attribute values (or two full items) and reports
//! every structural difference with a path such as `M[users].L[2].N`, so a
//! failed test points straight at the offending sub-value. The fetch helpers
//! perform a strongly-consistent `GetItem` and delegate into the comparator.

pub mod assert;
pub mod compare;
pub mod local;
pub mod store;
pub mod value;

pub use assert::*;
pub use compare::*;
pub use store::*;
pub use value::*;
