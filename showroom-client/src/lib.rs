pub mod client;
pub mod error;
pub mod model;

pub use client::ShowroomClient;
pub use error::ApiError;
pub use model::{CarRecord, Specifications};
