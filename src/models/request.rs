//! Employee DTOs for create and update operations.

use super::emp::{Emp, Skill};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Skill entry of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub skill_type_id: i32,
    pub level_code: String,
    pub duration: i32,
}

/// DTO for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmpRequest {
    pub tenant_id: i32,
    pub id_num: String,
    pub name: String,
    pub gender_code: String,
    pub dob: NaiveDate,
    pub org_id: i32,
    pub status_code: String,
    #[serde(default)]
    pub skills: Vec<CreateSkillRequest>,
}

impl CreateEmpRequest {
    pub fn add_skill(mut self, skill_type_id: i32, level_code: &str, duration: i32) -> Self {
        self.skills.push(CreateSkillRequest {
            skill_type_id,
            level_code: level_code.to_string(),
            duration,
        });
        self
    }
}

/// Skill entry of an update request. `id` is set for skills that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub skill_type_id: i32,
    pub level_code: String,
    pub duration: i32,
}

/// DTO for updating an employee.
///
/// The skill list is the complete desired set: types missing from it are
/// removed, new types are added, known types are updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmpRequest {
    pub tenant_id: i32,
    pub id_num: String,
    pub name: String,
    pub gender_code: String,
    pub dob: NaiveDate,
    pub emp_num: String,
    #[serde(default)]
    pub skills: Vec<UpdateSkillRequest>,
}

impl UpdateEmpRequest {
    /// Start an update request that leaves the employee as it is.
    pub fn from_emp(emp: &Emp) -> Self {
        Self {
            tenant_id: emp.tenant_id,
            id_num: emp.personal.id_num.clone(),
            name: emp.personal.name.clone(),
            gender_code: emp.personal.gender.code().to_string(),
            dob: emp.personal.dob,
            emp_num: emp.emp_num.clone().unwrap_or_default(),
            skills: emp
                .skills()
                .map(|s| UpdateSkillRequest {
                    id: s.id,
                    skill_type_id: s.skill_type_id,
                    level_code: s.level.code().to_string(),
                    duration: s.duration,
                })
                .collect(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn add_skill(mut self, id: Option<i32>, skill_type_id: i32, level_code: &str, duration: i32) -> Self {
        self.skills.push(UpdateSkillRequest {
            id,
            skill_type_id,
            level_code: level_code.to_string(),
            duration,
        });
        self
    }

    /// Replace level and duration of the entry with the given type, if present.
    pub fn update_skill(mut self, skill_type_id: i32, level_code: &str, duration: i32) -> Self {
        if let Some(skill) = self.skills.iter_mut().find(|s| s.skill_type_id == skill_type_id) {
            skill.level_code = level_code.to_string();
            skill.duration = duration;
        }
        self
    }

    pub fn remove_skill(mut self, skill_type_id: i32) -> Self {
        self.skills.retain(|s| s.skill_type_id != skill_type_id);
        self
    }
}

/// Persisted skill as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub id: Option<i32>,
    pub skill_type_id: i32,
    pub level_code: String,
    pub duration: i32,
}

/// Persisted employee as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpResponse {
    pub tenant_id: i32,
    pub id: i32,
    pub org_id: i32,
    pub emp_num: Option<String>,
    pub id_num: String,
    pub name: String,
    pub gender_code: String,
    pub dob: NaiveDate,
    pub status_code: String,
    pub version: i32,
    pub skills: Vec<SkillResponse>,
}

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            skill_type_id: skill.skill_type_id,
            level_code: skill.level.code().to_string(),
            duration: skill.duration,
        }
    }
}

impl EmpResponse {
    /// Project a stored aggregate under its id.
    pub fn new(id: i32, emp: &Emp) -> Self {
        Self {
            tenant_id: emp.tenant_id,
            id,
            org_id: emp.org_id,
            emp_num: emp.emp_num.clone(),
            id_num: emp.personal.id_num.clone(),
            name: emp.personal.name.clone(),
            gender_code: emp.personal.gender.code().to_string(),
            dob: emp.personal.dob,
            status_code: emp.status.code().to_string(),
            version: emp.version,
            skills: emp.skills().map(SkillResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_update() -> UpdateEmpRequest {
        UpdateEmpRequest {
            tenant_id: 1,
            id_num: "123456789012345678".to_string(),
            name: "Kline".to_string(),
            gender_code: "M".to_string(),
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            emp_num: "202600000001".to_string(),
            skills: Vec::new(),
        }
        .add_skill(Some(11), 1, "MED", 3)
        .add_skill(Some(12), 2, "ADV", 10)
        .add_skill(Some(13), 3, "BEG", 1)
    }

    #[test]
    fn test_update_builder_edits_skill_list() {
        let request = base_update()
            .with_name("Dunne")
            .remove_skill(2)
            .add_skill(None, 4, "MED", 4)
            .update_skill(3, "BEG", 2);

        assert_eq!(request.name, "Dunne");
        let types: Vec<i32> = request.skills.iter().map(|s| s.skill_type_id).collect();
        assert_eq!(types, vec![1, 3, 4]);
        assert_eq!(request.skills[1].duration, 2);
        assert_eq!(request.skills[2].id, None);
    }

    #[test]
    fn test_update_skill_ignores_unknown_type() {
        let request = base_update().update_skill(99, "ADV", 7);
        assert_eq!(request, base_update());
    }

    #[test]
    fn test_create_request_json_is_camel_case() {
        let json = r#"{
            "tenantId": 1,
            "idNum": "123456789012345678",
            "name": "Kline",
            "genderCode": "M",
            "dob": "1980-01-01",
            "orgId": 1,
            "statusCode": "REG",
            "skills": [{"skillTypeId": 1, "levelCode": "MED", "duration": 3}]
        }"#;
        let request: CreateEmpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.skills.len(), 1);
        assert_eq!(request.skills[0].level_code, "MED");
        assert_eq!(request.dob, NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
    }
}
