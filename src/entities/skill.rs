use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tenant_id: i32,
    pub emp_id: i32,
    pub skill_type_id: i32,
    pub level: String,
    pub duration: i32,
    pub created_at: DateTimeUtc,
    pub created_by: i32,
    pub last_updated_at: Option<DateTimeUtc>,
    pub last_updated_by: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::emp::Entity",
        from = "Column::EmpId",
        to = "super::emp::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Emp,
}

impl Related<super::emp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Emp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
