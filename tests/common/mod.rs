//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use orgmng::config::DatabaseConfig;
use orgmng::db;
use orgmng::models::{CreateEmpRequest, Emp, Skill, SkillLevel};
use sea_orm::DatabaseConnection;

pub const DEFAULT_USER_ID: i32 = 1;
pub const DEFAULT_TENANT_ID: i32 = 1;
pub const DEFAULT_ORG_ID: i32 = 1;
pub const DEFAULT_EMP_STATUS_CODE: &str = "REG";
pub const DEFAULT_EMP_NAME: &str = "Kline";
pub const DEFAULT_GENDER_CODE: &str = "M";
pub const DEFAULT_ID_NUM: &str = "123456789012345678";

pub const JAVA_TYPE_ID: i32 = 1;
pub const JAVA_LEVEL_CODE: &str = "MED";
pub const JAVA_DURATION: i32 = 3;

pub const PYTHON_TYPE_ID: i32 = 2;
pub const PYTHON_LEVEL_CODE: &str = "ADV";
pub const PYTHON_DURATION: i32 = 10;

pub const CPP_TYPE_ID: i32 = 3;
pub const CPP_LEVEL_CODE: &str = "BEG";
pub const CPP_DURATION: i32 = 1;

pub const GOLANG_TYPE_ID: i32 = 4;
pub const GOLANG_LEVEL_CODE: &str = "MED";
pub const GOLANG_DURATION: i32 = 4;

pub fn default_dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
}

/// Fresh in-memory database with the schema in place.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connect_timeout_secs: 5,
        sqlx_logging: false,
    };
    let conn = db::connect(&config).await.expect("connect to in-memory sqlite");
    db::create_schema(&conn).await.expect("create schema");
    conn
}

pub fn build_create_emp_request() -> CreateEmpRequest {
    CreateEmpRequest {
        tenant_id: DEFAULT_TENANT_ID,
        id_num: DEFAULT_ID_NUM.to_string(),
        name: DEFAULT_EMP_NAME.to_string(),
        gender_code: DEFAULT_GENDER_CODE.to_string(),
        dob: default_dob(),
        org_id: DEFAULT_ORG_ID,
        status_code: DEFAULT_EMP_STATUS_CODE.to_string(),
        skills: Vec::new(),
    }
    .add_skill(JAVA_TYPE_ID, JAVA_LEVEL_CODE, JAVA_DURATION)
    .add_skill(PYTHON_TYPE_ID, PYTHON_LEVEL_CODE, PYTHON_DURATION)
    .add_skill(CPP_TYPE_ID, CPP_LEVEL_CODE, CPP_DURATION)
}

/// Comparable view of a skill, without ids and audit fields.
pub fn skill_key(skill: &Skill) -> (i32, i32, SkillLevel, i32) {
    (skill.tenant_id, skill.skill_type_id, skill.level, skill.duration)
}

pub fn sorted_skill_keys(emp: &Emp) -> Vec<(i32, i32, SkillLevel, i32)> {
    let mut keys: Vec<_> = emp.skills().map(skill_key).collect();
    keys.sort();
    keys
}

/// Compare two employees ignoring skills, emp_num, audit fields and version.
pub fn assert_emp_fields(actual: &Emp, expected: &Emp) {
    assert_eq!(actual.tenant_id, expected.tenant_id);
    assert_eq!(actual.id, expected.id);
    assert_eq!(actual.org_id, expected.org_id);
    assert_eq!(actual.personal, expected.personal);
    assert_eq!(actual.status, expected.status);
}
