pub mod authentication;
pub mod health;
pub mod scan;
pub mod server;
