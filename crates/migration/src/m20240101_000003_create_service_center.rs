//! Create `service_center` table with optional FK to `zone`.
//!
//! `country_name` is free text kept for display; it is not a reference.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCenter::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceCenter::Id))
                    .col(string(ServiceCenter::Name))
                    .col(text(ServiceCenter::Address))
                    .col(string(ServiceCenter::Cluster))
                    .col(string(ServiceCenter::CountryName))
                    .col(big_integer(ServiceCenter::AreaCode))
                    .col(big_integer(ServiceCenter::PhoneNumber))
                    .col(string(ServiceCenter::Email))
                    .col(ColumnDef::new(ServiceCenter::MapLink).string().null())
                    .col(
                        ColumnDef::new(ServiceCenter::ImageUrl)
                            .string()
                            .null()
                            .default("../../public/images/GrupoFerromax.jpg"),
                    )
                    .col(ColumnDef::new(ServiceCenter::ZoneId).integer().null())
                    .col(timestamp_with_time_zone(ServiceCenter::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceCenter::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_center_zone")
                            .from(ServiceCenter::Table, ServiceCenter::ZoneId)
                            .to(Zone::Table, Zone::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCenter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCenter {
    Table,
    Id,
    Name,
    Address,
    Cluster,
    CountryName,
    AreaCode,
    PhoneNumber,
    Email,
    MapLink,
    ImageUrl,
    ZoneId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Zone { Table, Id }
