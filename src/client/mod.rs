/// Client module - request builders on top of a transport
pub mod auth;
pub mod request;

pub use auth::AuthClient;
pub use request::{CHECK_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT};
