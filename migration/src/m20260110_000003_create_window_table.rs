use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Window::Table)
                    .if_not_exists()
                    .col(pk_auto(Window::Id))
                    .col(date(Window::GameDate))
                    .col(time(Window::TimeStart))
                    .col(time(Window::TimeEnd))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Window::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Window {
    Table,
    Id,
    GameDate,
    TimeStart,
    TimeEnd,
}
