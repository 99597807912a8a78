//! Domain models and DTOs for employees and their skills.

pub mod codes;
pub mod emp;
pub mod request;

pub use codes::{EmpStatus, Gender, SkillLevel};
pub use emp::{ChangeState, Emp, PersonalInfo, Skill};
pub use request::{
    CreateEmpRequest, CreateSkillRequest, EmpResponse, SkillResponse, UpdateEmpRequest, UpdateSkillRequest,
};
