mod common;

use common::{Repos, vet};
use petclinic::config::ServiceKind;

#[tokio::test]
async fn test_list_vets_with_sorted_specialties() {
    let mut repos = Repos::new();
    repos.vets.expect_find_all().times(1).returning(|| {
        Ok(vec![
            vet(1, "James", "Carter", &[]),
            vet(3, "Linda", "Douglas", &["surgery", "dentistry"]),
        ])
    });
    let server = repos.server(ServiceKind::Vets);

    let response = server.get("/vets").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["firstName"], "James");
    assert_eq!(items[0]["nrOfSpecialties"], 0);
    assert_eq!(items[0]["specialties"].as_array().unwrap().len(), 0);

    assert_eq!(items[1]["nrOfSpecialties"], 2);
    assert_eq!(items[1]["specialties"][0]["name"], "dentistry");
    assert_eq!(items[1]["specialties"][1]["name"], "surgery");
}

#[tokio::test]
async fn test_vets_service_has_no_owner_routes() {
    let server = Repos::new().server(ServiceKind::Vets);

    let response = server.get("/owners").expect_failure().await;

    response.assert_status_not_found();
}
