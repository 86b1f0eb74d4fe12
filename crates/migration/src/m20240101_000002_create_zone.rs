//! Create `zone` table with optional FK to `country`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Zone::Table)
                    .if_not_exists()
                    .col(pk_auto(Zone::Id))
                    .col(string(Zone::Name))
                    .col(ColumnDef::new(Zone::CountryId).integer().null())
                    .col(timestamp_with_time_zone(Zone::CreatedAt))
                    .col(timestamp_with_time_zone(Zone::UpdatedAt))
                    // Deleting a country leaves its zones in place
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zone_country")
                            .from(Zone::Table, Zone::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Zone::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Zone { Table, Id, Name, CountryId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Country { Table, Id }
