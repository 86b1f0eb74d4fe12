use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, fk column) for every association lookup.
const FK_INDEXES: &[(&str, &str, &str)] = &[
    ("idx_zone_country", "zone", "country_id"),
    ("idx_service_center_zone", "service_center", "zone_id"),
    ("idx_product_type_product", "product_type", "product_id"),
    ("idx_gauge_product_type", "gauge", "product_type_id"),
    ("idx_color_product", "color", "product_id"),
    ("idx_user_country_country", "user_country", "country_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in FK_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in FK_INDEXES {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
