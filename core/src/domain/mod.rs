pub mod authentication;
pub mod common;
pub mod health;
pub mod ingredient;
pub mod ingredient_info;
pub mod ocr;
pub mod recommendation;
pub mod scan;
pub mod user;
