//! Employee service: request validation, skill diffing and transactions.

mod emp_service;
pub mod skill_diff;
mod validation;

pub use emp_service::EmpService;
pub use skill_diff::{SkillChange, SkillDiff};
