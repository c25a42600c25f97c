pub mod error;
pub mod http;
mod wire;

pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
