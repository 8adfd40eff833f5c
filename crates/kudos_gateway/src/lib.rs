pub mod media_store;
pub mod server;
pub mod types;

pub use media_store::{MediaEntry, MediaStore};
pub use server::{router, AppState, GatewayServer};
pub use types::{ComplimentRequest, ComplimentResponse};
