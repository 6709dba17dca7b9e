pub mod auth;
pub mod classifier;
pub mod db;
pub mod health;
pub mod http_client;
pub mod ingredient_info;
pub mod object_storage;
pub mod ocr;
pub mod scan;
pub mod user;
