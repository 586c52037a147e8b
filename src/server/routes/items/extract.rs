use crate::db::ItemPayload;
use crate::error::ItemstoreError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use tracing::debug;

/// JSON body of create/update requests.
pub struct ItemBody(pub ItemPayload);

impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = ItemstoreError;

    /// Deserialize the body into `ItemPayload` before any storage access.
    ///
    /// JSON syntax errors, shape errors (missing field, non-string value) and a
    /// missing JSON content type all become `InvalidPayload` (422) via
    /// `From<JsonRejection>`. Strings are taken as-is; empty values are allowed.
    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ItemPayload>::from_request(req, &()).await?;

        debug!(
            name_len = payload.name.len(),
            description_len = payload.description.len(),
            "Extracted item payload"
        );

        Ok(Self(payload))
    }
}

/// Integer `{item_id}` path segment. Non-integers are rejected with 422.
#[derive(Debug, Clone, Copy)]
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ItemstoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
