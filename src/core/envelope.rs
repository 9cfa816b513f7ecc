//! `{ "data": ... }` envelopes and the request extractor that unwraps them
//!
//! Every request body and every successful response body is wrapped in a
//! `data` key. The [`Payload`] extractor strips the envelope and turns body
//! parse failures into [`ApiError::InvalidBody`].

use crate::core::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` wrapper
///
/// On input, a missing `data` key yields `T::default()`, i.e. a payload with
/// every field absent, so validation reports what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Axum extractor for enveloped JSON payloads
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<DishAppState>,
///     Payload(input): Payload<DishInput>,
/// ) -> Result<impl IntoResponse, ApiError> {
///     // input is the typed content of `data`
/// }
/// ```
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(envelope): Json<DataEnvelope<T>> = Json::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

        Ok(Payload(envelope.data))
    }
}
