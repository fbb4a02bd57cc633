//! Visit log entry.

use chrono::{Local, NaiveDate};

/// A visit of a pet to the clinic.
///
/// Visits refer to their pet by id only; pets live in the customers service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pet_id: Option<i32>,
}

impl Visit {
    /// Creates a visit dated today.
    pub fn new() -> Self {
        Self {
            id: None,
            date: Some(Local::now().date_naive()),
            description: None,
            pet_id: None,
        }
    }

    /// Starts a builder with every field unset, the date included.
    pub fn builder() -> VisitBuilder {
        VisitBuilder::default()
    }
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Visit`] that applies no defaults.
#[derive(Debug, Default)]
pub struct VisitBuilder {
    id: Option<i32>,
    date: Option<NaiveDate>,
    description: Option<String>,
    pet_id: Option<i32>,
}

impl VisitBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn pet_id(mut self, pet_id: i32) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    pub fn build(self) -> Visit {
        Visit {
            id: self.id,
            date: self.date,
            description: self.description,
            pet_id: self.pet_id,
        }
    }
}
