//! Employee repository: loads and stores the employee aggregate.
//!
//! All functions take any [`ConnectionTrait`], so callers decide whether they
//! run against the pool or inside a transaction.

use crate::entities::{emp, prelude::*, skill};
use crate::error::{AppError, Result};
use crate::models::{ChangeState, Emp, EmpStatus, Gender, PersonalInfo, Skill, SkillLevel};
use sea_orm::*;

/// Load an employee and its skills by tenant and id.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, tenant_id: i32, id: i32) -> Result<Option<Emp>> {
    let Some(row) = Emps::find_by_id(id)
        .filter(emp::Column::TenantId.eq(tenant_id))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let skills = Skills::find()
        .filter(skill::Column::TenantId.eq(tenant_id))
        .filter(skill::Column::EmpId.eq(id))
        .order_by_asc(skill::Column::Id)
        .all(db)
        .await?;

    rebuild(row, skills).map(Some)
}

/// Persist the aggregate and return its id. Use [`find_by_id`] to read the
/// stored state back.
///
/// New employees are inserted. Loaded employees are updated guarded by the
/// version they were loaded with; a stale version yields [`AppError::Conflict`].
/// Skills are inserted, updated or deleted according to their change state.
pub async fn save<C: ConnectionTrait>(db: &C, emp: Emp) -> Result<i32> {
    let emp_id = match emp.id {
        None => insert_emp(db, &emp).await?,
        Some(id) => {
            update_emp(db, id, &emp).await?;
            id
        }
    };

    for skill in emp.tracked_skills() {
        save_skill(db, emp_id, skill).await?;
    }

    Ok(emp_id)
}

/// Check whether another employee of the tenant already uses the id number.
pub async fn exists_by_id_num<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    id_num: &str,
    exclude_id: Option<i32>,
) -> Result<bool> {
    let mut query = Emps::find()
        .filter(emp::Column::TenantId.eq(tenant_id))
        .filter(emp::Column::IdNum.eq(id_num));

    if let Some(id) = exclude_id {
        query = query.filter(emp::Column::Id.ne(id));
    }

    let count = query.count(db).await?;
    Ok(count > 0)
}

async fn insert_emp<C: ConnectionTrait>(db: &C, emp: &Emp) -> Result<i32> {
    let emp_num = emp
        .emp_num
        .clone()
        .ok_or_else(|| AppError::validation("employee number has not been assigned"))?;

    let model = emp::ActiveModel {
        tenant_id: Set(emp.tenant_id),
        org_id: Set(emp.org_id),
        emp_num: Set(emp_num),
        id_num: Set(emp.personal.id_num.clone()),
        name: Set(emp.personal.name.clone()),
        gender: Set(emp.personal.gender.code().to_owned()),
        dob: Set(emp.personal.dob),
        status: Set(emp.status.code().to_owned()),
        version: Set(0),
        created_at: Set(emp.created_at),
        created_by: Set(emp.created_by),
        last_updated_at: Set(emp.last_updated_at),
        last_updated_by: Set(emp.last_updated_by),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    Ok(inserted.id)
}

async fn update_emp<C: ConnectionTrait>(db: &C, id: i32, emp: &Emp) -> Result<()> {
    let model = emp::ActiveModel {
        org_id: Set(emp.org_id),
        emp_num: Set(emp.emp_num.clone().unwrap_or_default()),
        id_num: Set(emp.personal.id_num.clone()),
        name: Set(emp.personal.name.clone()),
        gender: Set(emp.personal.gender.code().to_owned()),
        dob: Set(emp.personal.dob),
        status: Set(emp.status.code().to_owned()),
        version: Set(emp.version + 1),
        last_updated_at: Set(emp.last_updated_at),
        last_updated_by: Set(emp.last_updated_by),
        ..Default::default()
    };

    let result = Emps::update_many()
        .set(model)
        .filter(emp::Column::Id.eq(id))
        .filter(emp::Column::TenantId.eq(emp.tenant_id))
        .filter(emp::Column::Version.eq(emp.version))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::conflict(format!(
            "employee {id} was modified or removed since version {}",
            emp.version
        )));
    }
    Ok(())
}

async fn save_skill<C: ConnectionTrait>(db: &C, emp_id: i32, skill: &Skill) -> Result<()> {
    match skill.state() {
        ChangeState::Unchanged => {}
        ChangeState::New => {
            let model = skill::ActiveModel {
                tenant_id: Set(skill.tenant_id),
                emp_id: Set(emp_id),
                skill_type_id: Set(skill.skill_type_id),
                level: Set(skill.level.code().to_owned()),
                duration: Set(skill.duration),
                created_at: Set(skill.created_at),
                created_by: Set(skill.created_by),
                last_updated_at: Set(skill.last_updated_at),
                last_updated_by: Set(skill.last_updated_by),
                ..Default::default()
            };
            model.insert(db).await?;
        }
        ChangeState::Updated => {
            let id = stored_skill_id(skill)?;
            let model = skill::ActiveModel {
                level: Set(skill.level.code().to_owned()),
                duration: Set(skill.duration),
                last_updated_at: Set(skill.last_updated_at),
                last_updated_by: Set(skill.last_updated_by),
                ..Default::default()
            };
            Skills::update_many()
                .set(model)
                .filter(skill::Column::Id.eq(id))
                .exec(db)
                .await?;
        }
        ChangeState::Deleted => {
            let id = stored_skill_id(skill)?;
            Skills::delete_by_id(id).exec(db).await?;
        }
    }
    Ok(())
}

fn stored_skill_id(skill: &Skill) -> Result<i32> {
    skill
        .id
        .ok_or_else(|| AppError::not_found(format!("stored row of skill type {}", skill.skill_type_id)))
}

fn rebuild(row: emp::Model, skills: Vec<skill::Model>) -> Result<Emp> {
    let skills = skills
        .into_iter()
        .map(|s| {
            Ok(Skill {
                id: Some(s.id),
                tenant_id: s.tenant_id,
                emp_id: Some(s.emp_id),
                skill_type_id: s.skill_type_id,
                level: SkillLevel::of_code(&s.level)?,
                duration: s.duration,
                created_at: s.created_at,
                created_by: s.created_by,
                last_updated_at: s.last_updated_at,
                last_updated_by: s.last_updated_by,
                state: ChangeState::Unchanged,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Emp {
        tenant_id: row.tenant_id,
        id: Some(row.id),
        org_id: row.org_id,
        emp_num: Some(row.emp_num),
        personal: PersonalInfo {
            id_num: row.id_num,
            name: row.name,
            gender: Gender::of_code(&row.gender)?,
            dob: row.dob,
        },
        status: EmpStatus::of_code(&row.status)?,
        version: row.version,
        created_at: row.created_at,
        created_by: row.created_by,
        last_updated_at: row.last_updated_at,
        last_updated_by: row.last_updated_by,
        skills,
    })
}
