use sea_orm::entity::prelude::*;

/// Quest template published by an administrator.
///
/// Tags are stored as a single comma-joined string; splitting and joining
/// happens at the domain-model boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub min_lvl: Option<i32>,
    pub max_lvl: Option<i32>,
    pub tags: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
