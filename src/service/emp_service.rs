//! Employee create and update orchestration.

use super::skill_diff::{self, SkillDiff};
use super::validation;
use crate::db::{emp as emp_repo, emp_num};
use crate::error::{AppError, Result};
use crate::models::{CreateEmpRequest, Emp, EmpResponse, EmpStatus, UpdateEmpRequest};
use chrono::{Datelike, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, warn};

/// Service for creating and updating employees.
///
/// Every call runs in its own transaction; an error anywhere drops the
/// transaction, which rolls it back.
pub struct EmpService {
    db: DatabaseConnection,
}

impl EmpService {
    /// Create a new employee service.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an employee with its skills.
    pub async fn add_emp(&self, request: &CreateEmpRequest, user_id: i32) -> Result<EmpResponse> {
        let personal =
            validation::personal_info(&request.id_num, &request.name, &request.gender_code, request.dob)?;
        let status = EmpStatus::of_code(&request.status_code)?;
        let skills = validation::create_skills(request)?;

        let txn = self.db.begin().await?;

        if emp_repo::exists_by_id_num(&txn, request.tenant_id, &personal.id_num, None).await? {
            return Err(AppError::validation(format!(
                "id number {} is already registered",
                personal.id_num
            )));
        }

        let now = Utc::now();
        let mut emp = Emp::new(request.tenant_id, request.org_id, personal, status, user_id, now);
        emp.emp_num = Some(emp_num::next(&txn, request.tenant_id, now.year()).await?);
        for skill in &skills {
            emp.add_skill(skill.skill_type_id, skill.level, skill.duration, user_id, now)?;
        }

        let tenant_id = request.tenant_id;
        let id = emp_repo::save(&txn, emp).await?;
        let saved = emp_repo::find_by_id(&txn, tenant_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("employee {id} of tenant {tenant_id}")))?;
        txn.commit().await?;

        let response = EmpResponse::new(id, &saved);
        info!(
            "Created employee {} ({}) for tenant {} with {} skills",
            response.id,
            response.emp_num.as_deref().unwrap_or("-"),
            response.tenant_id,
            response.skills.len()
        );
        Ok(response)
    }

    /// Reset an employee's personal fields and bring its skills in line with
    /// the request.
    pub async fn update_emp(&self, id: i32, request: &UpdateEmpRequest, tenant_id: i32, user_id: i32) -> Result<()> {
        if request.tenant_id != tenant_id {
            return Err(AppError::validation(format!(
                "request tenant {} does not match tenant {tenant_id}",
                request.tenant_id
            )));
        }
        let personal =
            validation::personal_info(&request.id_num, &request.name, &request.gender_code, request.dob)?;
        validation::require_text("employee number", &request.emp_num)?;
        let requested = validation::update_skills(request)?;

        let txn = self.db.begin().await?;

        let Some(mut emp) = emp_repo::find_by_id(&txn, tenant_id, id).await? else {
            warn!("Update of unknown employee {id} for tenant {tenant_id}");
            return Err(AppError::not_found(format!("employee {id} of tenant {tenant_id}")));
        };

        if emp_repo::exists_by_id_num(&txn, tenant_id, &personal.id_num, Some(id)).await? {
            return Err(AppError::validation(format!(
                "id number {} is already registered",
                personal.id_num
            )));
        }

        let now = Utc::now();
        emp.personal = personal;
        emp.emp_num = Some(request.emp_num.trim().to_string());

        let diff = skill_diff::diff(emp.skills(), &requested);
        debug!(
            "Employee {id}: {} skills added, {} updated, {} removed",
            diff.added.len(),
            diff.updated.len(),
            diff.removed.len()
        );
        apply_skill_diff(&mut emp, &diff, user_id, now)?;
        emp.touch(user_id, now);

        if let Err(e) = emp_repo::save(&txn, emp).await {
            if matches!(e, AppError::Conflict(_)) {
                warn!("Concurrent update of employee {id}: {e}");
            }
            return Err(e);
        }
        txn.commit().await?;

        info!("Updated employee {id} for tenant {tenant_id}");
        Ok(())
    }

    /// Look up an employee by tenant and id.
    pub async fn find_emp(&self, tenant_id: i32, id: i32) -> Result<Option<EmpResponse>> {
        let emp = emp_repo::find_by_id(&self.db, tenant_id, id).await?;
        Ok(emp.map(|emp| EmpResponse::new(id, &emp)))
    }
}

fn apply_skill_diff(emp: &mut Emp, diff: &SkillDiff, user_id: i32, now: chrono::DateTime<Utc>) -> Result<()> {
    for skill_type_id in &diff.removed {
        emp.remove_skill(*skill_type_id)?;
    }
    for change in &diff.updated {
        emp.update_skill(change.skill_type_id, change.level, change.duration, user_id, now)?;
    }
    for change in &diff.added {
        emp.add_skill(change.skill_type_id, change.level, change.duration, user_id, now)?;
    }
    Ok(())
}
