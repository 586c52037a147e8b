mod itemstore;

pub use itemstore::{ApiErrorBody, ApiErrorObject, ItemstoreError};
