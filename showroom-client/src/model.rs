use serde::{Deserialize, Serialize};

/// Technical data attached to a car. Detail responses carry it, list
/// responses may not.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Specifications {
    pub engine: String,
    pub horsepower: u32,
    pub transmission: String,
    pub drivetrain: String,
}

/// A car as served by `GET /cars` and `GET /cars/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<u32>,
    pub category_id: u32,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Specifications>,
}

impl CarRecord {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32, year: i32) -> Self {
        Self {
            id,
            name: name.into(),
            manufacturer_id: None,
            category_id,
            year,
            image: None,
            specifications: None,
        }
    }

    pub fn with_specifications(mut self, specifications: Specifications) -> Self {
        self.specifications = Some(specifications);
        self
    }

    /// The image URL, treating an empty string the same as a missing one.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }
}
