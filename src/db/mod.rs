//! Database connection pool and repositories.

pub mod connection;
pub mod emp;
pub mod emp_num;

pub use connection::{TableCounts, connect, create_schema, get_table_counts, test_connection};
