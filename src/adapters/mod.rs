pub mod client_state;
pub mod email;
pub mod http;
pub mod persistence;
