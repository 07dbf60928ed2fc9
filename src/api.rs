pub mod client;
pub mod evcc;
