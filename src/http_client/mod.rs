pub mod call;
pub mod error;
pub mod http_client;
pub mod request;
pub mod response;
pub mod reqwest_http_client;
