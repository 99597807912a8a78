use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "emp")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tenant_id: i32,
    pub org_id: i32,
    pub emp_num: String,
    pub id_num: String,
    pub name: String,
    pub gender: String,
    pub dob: Date,
    pub status: String,
    pub version: i32,
    pub created_at: DateTimeUtc,
    pub created_by: i32,
    pub last_updated_at: Option<DateTimeUtc>,
    pub last_updated_by: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::skill::Entity")]
    Skill,
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
