//! Employee aggregate: the employee record plus the skills it owns.
//!
//! Skills carry a [`ChangeState`] so the repository knows which rows to
//! insert, update or delete when the aggregate is saved.

use super::codes::{EmpStatus, Gender, SkillLevel};
use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Pending persistence action for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeState {
    /// Not yet stored.
    New,
    /// Matches the stored row.
    Unchanged,
    /// Stored, with level or duration changed since loading.
    Updated,
    /// Stored, to be deleted on save.
    Deleted,
}

/// Personal attributes that an update resets wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub id_num: String,
    pub name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
}

/// A skill owned by exactly one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: Option<i32>,
    pub tenant_id: i32,
    pub emp_id: Option<i32>,
    pub skill_type_id: i32,
    pub level: SkillLevel,
    pub duration: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: i32,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_updated_by: Option<i32>,
    pub(crate) state: ChangeState,
}

impl Skill {
    pub fn state(&self) -> ChangeState {
        self.state
    }

    /// Apply new level and duration. Returns false when nothing differs.
    fn change(&mut self, level: SkillLevel, duration: i32, user_id: i32, now: DateTime<Utc>) -> bool {
        if self.level == level && self.duration == duration {
            return false;
        }
        self.level = level;
        self.duration = duration;
        self.last_updated_by = Some(user_id);
        self.last_updated_at = Some(now);
        if self.state == ChangeState::Unchanged {
            self.state = ChangeState::Updated;
        }
        true
    }
}

/// Employee aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Emp {
    pub tenant_id: i32,
    /// `None` until the aggregate is first saved.
    pub id: Option<i32>,
    pub org_id: i32,
    pub emp_num: Option<String>,
    pub personal: PersonalInfo,
    pub status: EmpStatus,
    /// Optimistic lock counter, bumped by every stored update.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: i32,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_updated_by: Option<i32>,
    pub(crate) skills: Vec<Skill>,
}

impl Emp {
    /// Create a new, unsaved employee without skills.
    pub fn new(
        tenant_id: i32,
        org_id: i32,
        personal: PersonalInfo,
        status: EmpStatus,
        created_by: i32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant_id,
            id: None,
            org_id,
            emp_num: None,
            personal,
            status,
            version: 0,
            created_at: now,
            created_by,
            last_updated_at: None,
            last_updated_by: None,
            skills: Vec::new(),
        }
    }

    /// Skills that remain after pending deletions.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(|s| s.state != ChangeState::Deleted)
    }

    /// Every tracked skill, including those marked for deletion.
    pub(crate) fn tracked_skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, skill_type_id: i32) -> Option<&Skill> {
        self.skills().find(|s| s.skill_type_id == skill_type_id)
    }

    pub fn has_skill(&self, skill_type_id: i32) -> bool {
        self.skill(skill_type_id).is_some()
    }

    /// Add a skill of a type the employee does not have yet.
    pub fn add_skill(
        &mut self,
        skill_type_id: i32,
        level: SkillLevel,
        duration: i32,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if self.has_skill(skill_type_id) {
            return Err(AppError::validation(format!(
                "skill type {skill_type_id} is already recorded for this employee"
            )));
        }

        // Re-adding a type removed in the same unit of work reuses its row.
        if let Some(skill) = self
            .skills
            .iter_mut()
            .find(|s| s.skill_type_id == skill_type_id && s.state == ChangeState::Deleted)
        {
            skill.state = ChangeState::Updated;
            skill.level = level;
            skill.duration = duration;
            skill.last_updated_by = Some(user_id);
            skill.last_updated_at = Some(now);
            return Ok(());
        }

        self.skills.push(Skill {
            id: None,
            tenant_id: self.tenant_id,
            emp_id: self.id,
            skill_type_id,
            level,
            duration,
            created_at: now,
            created_by: user_id,
            last_updated_at: None,
            last_updated_by: None,
            state: ChangeState::New,
        });
        Ok(())
    }

    /// Change level and duration of an existing skill.
    ///
    /// Returns whether anything actually changed.
    pub fn update_skill(
        &mut self,
        skill_type_id: i32,
        level: SkillLevel,
        duration: i32,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let skill = self
            .skills
            .iter_mut()
            .find(|s| s.skill_type_id == skill_type_id && s.state != ChangeState::Deleted)
            .ok_or_else(|| AppError::not_found(format!("skill type {skill_type_id} on employee")))?;
        Ok(skill.change(level, duration, user_id, now))
    }

    /// Remove a skill. Unsaved skills are dropped, stored ones marked deleted.
    pub fn remove_skill(&mut self, skill_type_id: i32) -> Result<()> {
        let pos = self
            .skills
            .iter()
            .position(|s| s.skill_type_id == skill_type_id && s.state != ChangeState::Deleted)
            .ok_or_else(|| AppError::not_found(format!("skill type {skill_type_id} on employee")))?;

        if self.skills[pos].state == ChangeState::New {
            self.skills.remove(pos);
        } else {
            self.skills[pos].state = ChangeState::Deleted;
        }
        Ok(())
    }

    /// Stamp the update audit fields.
    pub fn touch(&mut self, user_id: i32, now: DateTime<Utc>) {
        self.last_updated_by = Some(user_id);
        self.last_updated_at = Some(now);
    }
}
