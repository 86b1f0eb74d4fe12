//! Create `color` table with optional FK to `product`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Color::Table)
                    .if_not_exists()
                    .col(pk_auto(Color::Id))
                    .col(ColumnDef::new(Color::Name).string().null())
                    .col(ColumnDef::new(Color::ProductId).integer().null())
                    .col(timestamp_with_time_zone(Color::CreatedAt))
                    .col(timestamp_with_time_zone(Color::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_color_product")
                            .from(Color::Table, Color::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Color::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Color { Table, Id, Name, ProductId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Product { Table, Id }
