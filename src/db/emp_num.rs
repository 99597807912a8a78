//! Employee number allocation.
//!
//! Numbers are the four-digit year followed by an eight-digit sequence that
//! restarts every year per tenant, e.g. `202600000001`.

use crate::entities::{emp_num_counter, prelude::*};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;

/// Allocate the next employee number for a tenant and year.
///
/// Must run inside the transaction that inserts the employee. The counter is
/// created or bumped by one upsert, so the first allocation of a year needs no
/// separate insert path; concurrent creates wait on the counter row.
pub async fn next<C: ConnectionTrait>(db: &C, tenant_id: i32, year: i32) -> Result<String, DbErr> {
    let counter = emp_num_counter::ActiveModel {
        tenant_id: Set(tenant_id),
        year_num: Set(year),
        max_emp_num: Set(1),
    };
    EmpNumCounters::insert(counter)
        .on_conflict(
            OnConflict::columns([emp_num_counter::Column::TenantId, emp_num_counter::Column::YearNum])
                .value(
                    emp_num_counter::Column::MaxEmpNum,
                    Expr::col((EmpNumCounters, emp_num_counter::Column::MaxEmpNum)).add(1),
                )
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    let counter = EmpNumCounters::find_by_id((tenant_id, year))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("emp_num_counter ({tenant_id}, {year})")))?;

    Ok(format_emp_num(year, counter.max_emp_num))
}

pub fn format_emp_num(year: i32, seq: i32) -> String {
    format!("{year}{seq:08}")
}
