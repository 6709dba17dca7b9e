use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::{
    handlers::{
        analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
        full_scan::{__path_full_scan, full_scan},
        get_scan::{__path_get_scan, get_scan},
        get_scan_history::{__path_get_scan_history, get_scan_history},
        ocr_image::{__path_ocr_image, ocr_image},
        search_ingredient::{__path_search_ingredient, search_ingredient},
    },
    multipart::MAX_IMAGE_SIZE,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

// multipart framing on top of the image itself
const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    ocr_image,
    analyze_ingredients,
    full_scan,
    get_scan_history,
    get_scan,
    search_ingredient
))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/api/ocr", root_path), post(ocr_image))
        .route(
            &format!("{}/api/analyze", root_path),
            post(analyze_ingredients),
        )
        .route(&format!("{}/api/full-scan", root_path), post(full_scan))
        .route(&format!("{}/api/history", root_path), get(get_scan_history))
        .route(
            &format!("{}/api/history/{{scan_id}}", root_path),
            get(get_scan),
        )
        .route(&format!("{}/api/search", root_path), get(search_ingredient))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
