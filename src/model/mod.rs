//! Table data structures

mod table;

pub use table::Table;
