pub mod asset;
pub mod query;
pub mod repo;
pub mod response;
pub mod results;

pub use asset::*;
pub use query::*;
pub use repo::*;
pub use response::*;
pub use results::*;
