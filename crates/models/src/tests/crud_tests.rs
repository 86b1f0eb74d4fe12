use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

use super::setup_test_db;
use crate::{country, service_center, user};

fn center(name: &str) -> service_center::ActiveModel {
    let now = Utc::now().into();
    service_center::ActiveModel {
        name: Set(name.to_string()),
        address: Set("1234 Blvd., Street Name, City".into()),
        cluster: Set("North West".into()),
        country_name: Set("El Salvador".into()),
        area_code: Set(503),
        phone_number: Set(22128813),
        email: Set("xxx@grupoferromax.com".into()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// Test country CRUD operations
#[tokio::test]
async fn test_country_crud() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now().into();

    // Create
    let created = country::ActiveModel {
        name: Set("El Salvador".into()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    // Read
    let found = country::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|c| c.name.as_str()), Some("El Salvador"));

    // Update
    let mut am = created.clone().into_active_model();
    am.name = Set("Honduras".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Honduras");

    // Delete
    country::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(country::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Service centers store the placeholder picture when none is given
#[tokio::test]
async fn test_service_center_image_defaults_in_store() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let saved = center("Centro de Servicio").insert(&db).await?;
    assert_eq!(saved.image_url.as_deref(), Some(service_center::PLACEHOLDER_IMAGE));
    assert_eq!(saved.area_code, 503);
    assert!(saved.map_link.is_none());
    Ok(())
}

/// Ids grow with insertion order
#[tokio::test]
async fn test_ids_follow_insertion_order() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    for name in ["Centro A", "Centro B", "Centro C"] {
        center(name).insert(&db).await?;
    }
    let names: Vec<String> = service_center::Entity::find()
        .order_by_asc(service_center::Column::Id)
        .all(&db)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Centro A", "Centro B", "Centro C"]);
    Ok(())
}

/// Serialized records use the client-facing keys
#[tokio::test]
async fn test_user_serializes_with_wire_keys() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now().into();
    let saved = user::ActiveModel {
        first_name: Set("Juana".into()),
        last_name: Set("Lamengana".into()),
        area_code: Set(503),
        phone_number: Set(78561268),
        email: Set("juana@gmail.com".into()),
        company: Set(Some("La Peor es Nada".into())),
        subscribed: Set(Some(false)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let json = serde_json::to_value(&saved)?;
    assert_eq!(json["nombre"], "Juana");
    assert_eq!(json["apellido"], "Lamengana");
    assert_eq!(json["telnum"], 78561268);
    assert_eq!(json["subscripcion"], false);
    assert!(json.get("createdAt").is_some());
    assert!(json.get("first_name").is_none());
    Ok(())
}
