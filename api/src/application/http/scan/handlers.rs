pub mod analyze_ingredients;
pub mod full_scan;
pub mod get_scan;
pub mod get_scan_history;
pub mod ocr_image;
pub mod search_ingredient;
