use showroom_client::ApiError;
use std::fmt;
use thiserror::Error;

pub const CATALOG_LOAD_FAILED: &str = "Failed to load cars. Please try again later.";
pub const DETAIL_LOAD_FAILED: &str = "Failed to load car details.";
pub const MISSING_CAR_ID: &str = "No car ID specified.";

/// Which fetch failed; selects the fixed message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    Catalog,
    Detail(u32),
}

impl fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadTarget::Catalog => write!(f, "cars"),
            LoadTarget::Detail(id) => write!(f, "car {}", id),
        }
    }
}

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("Failed to load {target}: {source}")]
    Load {
        target: LoadTarget,
        #[source]
        source: ApiError,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("You can compare up to {max} cars.")]
    ComparisonFull { max: usize },

    #[error("No car ID specified.")]
    MissingCarId,

    #[error("Unknown page: {0}")]
    UnknownRoute(String),

    #[error("Unknown theme '{0}' (expected light or dark)")]
    UnknownTheme(String),
}

impl ShowroomError {
    /// The static text shown in place of the affected section.
    pub fn user_message(&self) -> String {
        match self {
            ShowroomError::Load {
                target: LoadTarget::Catalog,
                ..
            } => CATALOG_LOAD_FAILED.to_string(),
            ShowroomError::Load {
                target: LoadTarget::Detail(_),
                ..
            } => DETAIL_LOAD_FAILED.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
