pub mod error;
pub mod handlers;
pub mod params;
pub mod resolve;
pub mod routes;
pub mod server;

pub use error::*;
pub use handlers::*;
pub use routes::*;
pub use server::*;
