pub mod router;
pub mod routes;

pub use router::{AppState, itemstore_router};
