//! Core module containing the building blocks shared by every resource

pub mod entity;
pub mod envelope;
pub mod error;
pub mod exists;
pub mod id;

pub use entity::Entity;
pub use envelope::{DataEnvelope, Payload};
pub use error::{ApiError, ErrorResponse};
pub use exists::{Found, RecordLookup, require_existing};
pub use id::IdGenerator;
