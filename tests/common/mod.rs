#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use mockall::mock;
use std::sync::Arc;

use petclinic::config::ServiceKind;
use petclinic::domain::entities::{Owner, Pet, PetType, Specialty, Vet, Visit};
use petclinic::domain::repositories::{
    OwnerRepository, PetRepository, VetRepository, VisitRepository,
};
use petclinic::error::AppError;
use petclinic::routes::service_routes;
use petclinic::state::AppState;

mock! {
    pub Owners {}

    #[async_trait]
    impl OwnerRepository for Owners {
        async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError>;
        async fn find_all(&self) -> Result<Vec<Owner>, AppError>;
        async fn save(&self, owner: Owner) -> Result<Owner, AppError>;
    }
}

mock! {
    pub Pets {}

    #[async_trait]
    impl PetRepository for Pets {
        async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError>;
        async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError>;
        async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError>;
        async fn save(&self, pet: Pet) -> Result<Pet, AppError>;
    }
}

mock! {
    pub Vets {}

    #[async_trait]
    impl VetRepository for Vets {
        async fn find_all(&self) -> Result<Vec<Vet>, AppError>;
    }
}

mock! {
    pub Visits {}

    #[async_trait]
    impl VisitRepository for Visits {
        async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError>;
        async fn find_by_pet_id_in(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, AppError>;
        async fn save(&self, visit: Visit) -> Result<Visit, AppError>;
    }
}

/// One mock per repository; set expectations, then build a server.
pub struct Repos {
    pub owners: MockOwners,
    pub pets: MockPets,
    pub vets: MockVets,
    pub visits: MockVisits,
}

impl Repos {
    pub fn new() -> Self {
        Self {
            owners: MockOwners::new(),
            pets: MockPets::new(),
            vets: MockVets::new(),
            visits: MockVisits::new(),
        }
    }

    pub fn server(self, service: ServiceKind) -> TestServer {
        let state = AppState::new(
            Arc::new(self.owners),
            Arc::new(self.pets),
            Arc::new(self.vets),
            Arc::new(self.visits),
        );
        let app = service_routes(service).with_state(state);
        TestServer::new(app).unwrap()
    }
}

pub fn george() -> Owner {
    let mut owner = Owner::new();
    owner.id = Some(1);
    owner.first_name = "George".to_string();
    owner.last_name = "Franklin".to_string();
    owner.address = "110 W. Liberty St.".to_string();
    owner.city = "Madison".to_string();
    owner.telephone = "6085551023".to_string();
    owner
}

pub fn cat() -> PetType {
    PetType::new(Some(1), "cat")
}

pub fn pet(id: i32, name: &str) -> Pet {
    let mut pet = Pet::new();
    pet.id = Some(id);
    pet.name = name.to_string();
    pet.birth_date = NaiveDate::from_ymd_opt(2010, 9, 7);
    pet.pet_type = Some(cat());
    pet
}

pub fn vet(id: i32, first: &str, last: &str, specialties: &[&str]) -> Vet {
    let mut vet = Vet::new();
    vet.id = Some(id);
    vet.first_name = first.to_string();
    vet.last_name = last.to_string();
    for (i, name) in specialties.iter().enumerate() {
        vet.add_specialty(Specialty::new(Some(i as i32 + 1), *name));
    }
    vet
}

pub fn visit(id: i32, pet_id: i32, description: &str) -> Visit {
    Visit::builder()
        .id(id)
        .pet_id(pet_id)
        .date(NaiveDate::from_ymd_opt(2013, 1, 1).unwrap())
        .description(description)
        .build()
}
