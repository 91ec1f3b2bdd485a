use sea_orm::entity::prelude::*;

/// Administrator-declared block of availability, independent of any task.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "window")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_date: Date,
    pub time_start: Time,
    pub time_end: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
