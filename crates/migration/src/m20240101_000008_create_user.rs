//! Create `user` table.
//!
//! Directory contacts (newsletter subscribers), not login accounts.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(big_integer(User::AreaCode))
                    .col(big_integer(User::PhoneNumber))
                    .col(string(User::Email))
                    .col(ColumnDef::new(User::Company).string().null())
                    .col(ColumnDef::new(User::Subscribed).boolean().null())
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    FirstName,
    LastName,
    AreaCode,
    PhoneNumber,
    Email,
    Company,
    Subscribed,
    CreatedAt,
    UpdatedAt,
}
