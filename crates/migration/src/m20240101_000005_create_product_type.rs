//! Create `product_type` table with optional FK to `product`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductType::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductType::Id))
                    .col(string(ProductType::Name))
                    .col(ColumnDef::new(ProductType::ProductId).integer().null())
                    .col(timestamp_with_time_zone(ProductType::CreatedAt))
                    .col(timestamp_with_time_zone(ProductType::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_type_product")
                            .from(ProductType::Table, ProductType::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductType { Table, Id, Name, ProductId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Product { Table, Id }
