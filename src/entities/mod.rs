//! SeaORM entities for the `emp`, `skill` and `emp_num_counter` tables.

pub mod prelude;

pub mod emp;
pub mod emp_num_counter;
pub mod skill;
