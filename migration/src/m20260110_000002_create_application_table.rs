use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_task_table::Task;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(integer(Application::TaskId))
                    .col(string(Application::Name))
                    .col(text_null(Application::Info))
                    .col(date(Application::GameDate))
                    .col(time(Application::TimeStart))
                    .col(time_null(Application::TimeEnd))
                    .col(string_len(Application::Status, 20).default("default"))
                    .col(
                        timestamp(Application::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_task_id")
                            .from(Application::Table, Application::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    TaskId,
    Name,
    Info,
    GameDate,
    TimeStart,
    TimeEnd,
    Status,
    CreatedAt,
}
