//! Create `user_country` junction for the user <-> country many-to-many.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCountry::Table)
                    .if_not_exists()
                    .col(integer(UserCountry::UserId))
                    .col(integer(UserCountry::CountryId))
                    .col(timestamp_with_time_zone(UserCountry::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserCountry::UserId)
                            .col(UserCountry::CountryId),
                    )
                    // A link is meaningless once either side is gone
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_country_user")
                            .from(UserCountry::Table, UserCountry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_country_country")
                            .from(UserCountry::Table, UserCountry::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserCountry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserCountry { Table, UserId, CountryId, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Country { Table, Id }
