use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

use configs::DatabaseConfig;
use models::{schema, service_center};
use models::resource::Resource;
use service::repository::{ResourceRepository, SeaOrmRepository};

fn centro() -> serde_json::Value {
    json!({
        "nombre": "Ferromax Bench",
        "direccion": "Calle 1",
        "cluster": "Central",
        "pais": "El Salvador",
        "telarea": 503,
        "telnum": "22128813",
        "email": "bench@grupoferromax.com"
    })
}

fn bench_validate(c: &mut Criterion) {
    let body = centro();
    let record = body.as_object().cloned().unwrap_or_default();
    c.bench_function("schema_validate_centro", |b| {
        b.iter(|| schema::validate(service_center::Entity::SCHEMA, &record).unwrap());
    });
}

fn bench_create_and_find(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let db = rt
        .block_on(models::db::connect_and_migrate(&DatabaseConfig::in_memory()))
        .unwrap();
    let repo = SeaOrmRepository::<service_center::Entity>::new(db);
    let body = centro();

    c.bench_function("repository_create_centro", |b| {
        b.to_async(&rt).iter(|| async { repo.create(&body).await.unwrap() });
    });

    let id = rt.block_on(repo.create(&body)).unwrap().id;
    c.bench_function("repository_find_by_id", |b| {
        b.to_async(&rt).iter(|| async { repo.find_by_id(id).await.unwrap() });
    });
}

criterion_group!(benches, bench_validate, bench_create_and_find);
criterion_main!(benches);
