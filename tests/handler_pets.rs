mod common;

use axum::http::StatusCode;
use common::{Repos, cat, george, pet};
use petclinic::config::ServiceKind;
use petclinic::domain::entities::PetType;
use serde_json::json;

fn pet_body() -> serde_json::Value {
    json!({
        "name": "Leo",
        "birthDate": "2010-09-07",
        "typeId": 1
    })
}

// ─── PET TYPES ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_pet_types() {
    let mut repos = Repos::new();
    repos
        .pets
        .expect_find_pet_types()
        .times(1)
        .returning(|| Ok(vec![cat(), PetType::new(Some(2), "dog")]));
    let server = repos.server(ServiceKind::Customers);

    let response = server.get("/petTypes").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json, json!([{ "id": 1, "name": "cat" }, { "id": 2, "name": "dog" }]));
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_pet_links_owner() {
    let mut repos = Repos::new();
    repos
        .owners
        .expect_find_by_id()
        .withf(|id| *id == 1)
        .times(1)
        .returning(|_| Ok(Some(george())));
    repos
        .pets
        .expect_find_pet_type_by_id()
        .withf(|id| *id == 1)
        .times(1)
        .returning(|_| Ok(Some(cat())));
    repos
        .pets
        .expect_save()
        .withf(|p| p.id.is_none() && p.owner().and_then(|o| o.id()) == Some(1))
        .times(1)
        .returning(|mut p| {
            p.id = Some(14);
            Ok(p)
        });
    let server = repos.server(ServiceKind::Customers);

    let response = server.post("/owners/1/pets").json(&pet_body()).await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 14);
    assert_eq!(json["owner"], "George Franklin");
    assert_eq!(json["type"]["name"], "cat");
}

#[tokio::test]
async fn test_create_pet_unknown_type_leaves_type_unset() {
    let mut repos = Repos::new();
    repos
        .owners
        .expect_find_by_id()
        .returning(|_| Ok(Some(george())));
    repos
        .pets
        .expect_find_pet_type_by_id()
        .returning(|_| Ok(None));
    repos
        .pets
        .expect_save()
        .withf(|p| p.pet_type.is_none())
        .times(1)
        .returning(|mut p| {
            p.id = Some(14);
            Ok(p)
        });
    let server = repos.server(ServiceKind::Customers);

    let mut body = pet_body();
    body["typeId"] = json!(42);

    let response = server.post("/owners/1/pets").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert!(json["type"].is_null());
}

#[tokio::test]
async fn test_create_pet_owner_not_found() {
    let mut repos = Repos::new();
    repos
        .owners
        .expect_find_by_id()
        .times(1)
        .returning(|_| Ok(None));
    repos.pets.expect_save().never();
    let server = repos.server(ServiceKind::Customers);

    let response = server.post("/owners/999/pets").json(&pet_body()).await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_pet_empty_name() {
    let mut repos = Repos::new();
    repos.owners.expect_find_by_id().never();
    repos.pets.expect_save().never();
    let server = repos.server(ServiceKind::Customers);

    let mut body = pet_body();
    body["name"] = json!("");

    let response = server.post("/owners/1/pets").json(&body).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_pet_zero_owner_id_skips_lookup() {
    let mut repos = Repos::new();
    repos.owners.expect_find_by_id().never();
    repos.pets.expect_save().never();
    let server = repos.server(ServiceKind::Customers);

    let response = server.post("/owners/0/pets").json(&pet_body()).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_pet_malformed_birth_date() {
    let mut repos = Repos::new();
    repos.owners.expect_find_by_id().never();
    repos.pets.expect_save().never();
    let server = repos.server(ServiceKind::Customers);

    let mut body = pet_body();
    body["birthDate"] = json!("not-a-date");

    let response = server.post("/owners/0/pets").json(&body).await;
    response.assert_status_bad_request();

    let response = server.post("/owners/1/pets").json(&body).await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_pet() {
    let mut repos = Repos::new();
    repos
        .pets
        .expect_find_by_id()
        .withf(|id| *id == 2)
        .times(1)
        .returning(|_| {
            let mut owner = george();
            Ok(Some(owner.add_pet(pet(2, "Basil")).clone()))
        });
    let server = repos.server(ServiceKind::Customers);

    let response = server.get("/owners/2/pets/2").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Basil");
    assert_eq!(json["owner"], "George Franklin");
    assert_eq!(json["birthDate"], "2010-09-07");
    assert_eq!(json["type"]["id"], 1);
}

#[tokio::test]
async fn test_find_pet_not_found() {
    let mut repos = Repos::new();
    repos
        .pets
        .expect_find_by_id()
        .times(1)
        .returning(|_| Ok(None));
    let server = repos.server(ServiceKind::Customers);

    let response = server.get("/owners/1/pets/999").await;

    response.assert_status_not_found();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_pet_ignores_owner_segment() {
    let mut repos = Repos::new();
    repos.owners.expect_find_by_id().never();
    repos
        .pets
        .expect_find_by_id()
        .withf(|id| *id == 7)
        .times(1)
        .returning(|_| {
            let mut owner = george();
            Ok(Some(owner.add_pet(pet(7, "Samantha")).clone()))
        });
    repos
        .pets
        .expect_find_pet_type_by_id()
        .returning(|_| Ok(Some(PetType::new(Some(2), "dog"))));
    repos
        .pets
        .expect_save()
        .withf(|p| {
            p.id == Some(7)
                && p.name == "Leo"
                && p.pet_type.as_ref().map(|t| t.name.as_str()) == Some("dog")
        })
        .times(1)
        .returning(|p| Ok(p));
    let server = repos.server(ServiceKind::Customers);

    let mut body = pet_body();
    body["typeId"] = json!(2);

    let response = server.put("/owners/42/pets/7").json(&body).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_update_pet_zero_id() {
    let mut repos = Repos::new();
    repos.pets.expect_find_by_id().never();
    let server = repos.server(ServiceKind::Customers);

    let response = server.put("/owners/1/pets/0").json(&pet_body()).await;

    response.assert_status_bad_request();
}
