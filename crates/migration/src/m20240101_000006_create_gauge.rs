//! Create `gauge` table with optional FK to `product_type`.
//!
//! Thickness/diameter values are free text in both unit systems.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gauge::Table)
                    .if_not_exists()
                    .col(pk_auto(Gauge::Id))
                    .col(string(Gauge::Name))
                    .col(ColumnDef::new(Gauge::ThicknessMetric).string().null())
                    .col(ColumnDef::new(Gauge::ThicknessImperial).string().null())
                    .col(ColumnDef::new(Gauge::ProductTypeId).integer().null())
                    .col(timestamp_with_time_zone(Gauge::CreatedAt))
                    .col(timestamp_with_time_zone(Gauge::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gauge_product_type")
                            .from(Gauge::Table, Gauge::ProductTypeId)
                            .to(ProductType::Table, ProductType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Gauge::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gauge { Table, Id, Name, ThicknessMetric, ThicknessImperial, ProductTypeId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum ProductType { Table, Id }
