//! Enumerated codes stored as short strings in the database.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn of_code(code: &str) -> Result<Self> {
        match code {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            _ => Err(AppError::validation(format!("unknown gender code '{code}'"))),
        }
    }
}

/// Employment status. Set on creation; no transitions are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmpStatus {
    /// Regular (permanent) employee.
    Regular,
    /// Still in the probation period.
    Probation,
    /// No longer employed.
    Terminated,
}

impl EmpStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::Regular => "REG",
            Self::Probation => "PRO",
            Self::Terminated => "TER",
        }
    }

    pub fn of_code(code: &str) -> Result<Self> {
        match code {
            "REG" => Ok(Self::Regular),
            "PRO" => Ok(Self::Probation),
            "TER" => Ok(Self::Terminated),
            _ => Err(AppError::validation(format!("unknown employee status code '{code}'"))),
        }
    }
}

/// Proficiency in a skill, ordered from beginner to advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Medium,
    Advanced,
}

impl SkillLevel {
    pub fn code(self) -> &'static str {
        match self {
            Self::Beginner => "BEG",
            Self::Medium => "MED",
            Self::Advanced => "ADV",
        }
    }

    pub fn of_code(code: &str) -> Result<Self> {
        match code {
            "BEG" => Ok(Self::Beginner),
            "MED" => Ok(Self::Medium),
            "ADV" => Ok(Self::Advanced),
            _ => Err(AppError::validation(format!("unknown skill level code '{code}'"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for EmpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
