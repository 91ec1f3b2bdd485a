use sea_orm::entity::prelude::*;

/// Moderation state of an application.
///
/// The string values are the wire representation; anything outside this set
/// is rejected before it reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "default")]
    Default,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "outdated")]
    Outdated,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Default
    }
}

/// Player request to participate in a task at a specific date/time window.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub task_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub info: Option<String>,
    pub game_date: Date,
    pub time_start: Time,
    pub time_end: Option<Time>,
    pub status: ApplicationStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task::Entity",
        from = "Column::TaskId",
        to = "super::task::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Task,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
