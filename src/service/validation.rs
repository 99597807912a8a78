//! Request checks that do not need the database.

use super::skill_diff::SkillChange;
use crate::error::{AppError, Result};
use crate::models::{CreateEmpRequest, Gender, PersonalInfo, SkillLevel, UpdateEmpRequest};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Name and id number are stored trimmed.
pub(crate) fn personal_info(id_num: &str, name: &str, gender_code: &str, dob: NaiveDate) -> Result<PersonalInfo> {
    require_text("name", name)?;
    require_text("id number", id_num)?;
    Ok(PersonalInfo {
        id_num: id_num.trim().to_string(),
        name: name.trim().to_string(),
        gender: Gender::of_code(gender_code)?,
        dob,
    })
}

pub(crate) fn create_skills(request: &CreateEmpRequest) -> Result<Vec<SkillChange>> {
    skill_changes(
        request
            .skills
            .iter()
            .map(|s| (s.skill_type_id, s.level_code.as_str(), s.duration)),
    )
}

pub(crate) fn update_skills(request: &UpdateEmpRequest) -> Result<Vec<SkillChange>> {
    skill_changes(
        request
            .skills
            .iter()
            .map(|s| (s.skill_type_id, s.level_code.as_str(), s.duration)),
    )
}

fn skill_changes<'a>(entries: impl Iterator<Item = (i32, &'a str, i32)>) -> Result<Vec<SkillChange>> {
    let mut seen = HashSet::new();
    let mut changes = Vec::new();

    for (skill_type_id, level_code, duration) in entries {
        if !seen.insert(skill_type_id) {
            return Err(AppError::validation(format!(
                "skill type {skill_type_id} appears more than once"
            )));
        }
        if duration < 0 {
            return Err(AppError::validation(format!(
                "duration of skill type {skill_type_id} cannot be negative"
            )));
        }
        changes.push(SkillChange {
            skill_type_id,
            level: SkillLevel::of_code(level_code)?,
            duration,
        });
    }

    Ok(changes)
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateEmpRequest {
        CreateEmpRequest {
            tenant_id: 1,
            id_num: "123456789012345678".to_string(),
            name: "Kline".to_string(),
            gender_code: "M".to_string(),
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            org_id: 1,
            status_code: "REG".to_string(),
            skills: Vec::new(),
        }
    }

    #[test]
    fn test_duplicate_skill_type_rejected() {
        let request = request().add_skill(1, "MED", 3).add_skill(1, "ADV", 5);
        assert!(matches!(create_skills(&request), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let request = request().add_skill(1, "MED", -1);
        assert!(matches!(create_skills(&request), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let request = request().add_skill(1, "EXPERT", 3);
        assert!(matches!(create_skills(&request), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let dob = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert!(personal_info("123", "  ", "M", dob).is_err());
        assert_eq!(personal_info("123", " Kline ", "F", dob).unwrap().name, "Kline");
    }
}
