/// CRUD operations on the entities through SeaORM directly
pub mod crud_tests;


use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::db;

/// Fresh, migrated in-memory store for one test.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = db::connect_with_config(&DatabaseConfig::in_memory()).await?;
    db::migrate(&db).await?;
    Ok(db)
}

/// Every column named in a resource schema must exist on its entity.
mod schema_consistency {
    use sea_orm::{ColumnTrait, ColumnType, EntityTrait, IdenStatic, Iterable};

    use crate::resource::Resource;
    use crate::schema::FieldKind;
    use crate::{color, country, gauge, product, product_type, service_center, user, zone};

    fn assert_columns_exist<E: Resource>() {
        for spec in E::SCHEMA {
            let found = <E as EntityTrait>::Column::iter().any(|c| c.as_str() == spec.column);
            assert!(found, "{}: column {} not on entity", E::NAME, spec.column);
        }
        for ts in ["id", "created_at", "updated_at"] {
            let found = <E as EntityTrait>::Column::iter().any(|c| c.as_str() == ts);
            assert!(found, "{}: missing {}", E::NAME, ts);
        }
    }

    /// The repository sets values by kind; the column type must accept them.
    fn assert_kinds_match<E: Resource>() {
        for spec in E::SCHEMA {
            let Some(col) = <E as EntityTrait>::Column::iter().find(|c| c.as_str() == spec.column) else {
                continue;
            };
            let def = col.def();
            let ok = match spec.kind {
                FieldKind::Text => matches!(def.get_column_type(), ColumnType::String(_) | ColumnType::Text),
                FieldKind::Integer => matches!(def.get_column_type(), ColumnType::BigInteger),
                FieldKind::Reference => matches!(def.get_column_type(), ColumnType::Integer),
                FieldKind::Boolean => matches!(def.get_column_type(), ColumnType::Boolean),
            };
            assert!(ok, "{}.{}: {:?} vs {:?}", E::NAME, spec.column, spec.kind, def.get_column_type());
        }
    }

    #[test]
    fn schema_kinds_match_column_types() {
        assert_kinds_match::<country::Entity>();
        assert_kinds_match::<zone::Entity>();
        assert_kinds_match::<service_center::Entity>();
        assert_kinds_match::<product::Entity>();
        assert_kinds_match::<product_type::Entity>();
        assert_kinds_match::<gauge::Entity>();
        assert_kinds_match::<color::Entity>();
        assert_kinds_match::<user::Entity>();
    }

    #[test]
    fn schemas_match_entities() {
        assert_columns_exist::<country::Entity>();
        assert_columns_exist::<zone::Entity>();
        assert_columns_exist::<service_center::Entity>();
        assert_columns_exist::<product::Entity>();
        assert_columns_exist::<product_type::Entity>();
        assert_columns_exist::<gauge::Entity>();
        assert_columns_exist::<color::Entity>();
        assert_columns_exist::<user::Entity>();
    }

    #[test]
    fn wire_keys_are_unique_per_schema() {
        fn unique<E: Resource>() {
            let mut keys: Vec<_> = E::SCHEMA.iter().map(|s| s.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), E::SCHEMA.len(), "{}", E::NAME);
        }
        unique::<service_center::Entity>();
        unique::<user::Entity>();
        unique::<gauge::Entity>();
    }
}
