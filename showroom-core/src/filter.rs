use crate::lookup::category_label;
use serde::{Deserialize, Serialize};
use showroom_client::CarRecord;

pub const DEFAULT_YEAR_MIN: i32 = 0;
pub const DEFAULT_YEAR_MAX: i32 = 9999;

/// Filter criteria, rebuilt for every filter pass and never persisted.
/// Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub text: Option<String>,
    pub manufacturer: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_years(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        set(&self.text).is_none()
            && set(&self.manufacturer).is_none()
            && self.year_min.is_none()
            && self.year_max.is_none()
            && set(&self.category).is_none()
    }

    /// True when `car` satisfies every criterion.
    pub fn matches(&self, car: &CarRecord) -> bool {
        let label = category_label(car.category_id);

        if let Some(text) = set(&self.text) {
            let needle = text.to_lowercase();
            let in_name = car.name.to_lowercase().contains(&needle);
            let in_label = label.is_some_and(|l| l.to_lowercase().contains(&needle));
            if !in_name && !in_label {
                return false;
            }
        }

        if let Some(manufacturer) = set(&self.manufacturer)
            && !car.name.contains(manufacturer)
        {
            return false;
        }

        let min = self.year_min.unwrap_or(DEFAULT_YEAR_MIN);
        let max = self.year_max.unwrap_or(DEFAULT_YEAR_MAX);
        if car.year < min || car.year > max {
            return false;
        }

        if let Some(category) = set(&self.category) {
            match label {
                Some(l) if l.eq_ignore_ascii_case(category) => {}
                _ => return false,
            }
        }

        true
    }
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Cars matching `criteria`, in catalog order.
pub fn filter_cars<'a>(catalog: &'a [CarRecord], criteria: &FilterCriteria) -> Vec<&'a CarRecord> {
    if criteria.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|car| criteria.matches(car)).collect()
}
