use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_results, get_summary, get_timeline, refresh_season};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/refresh", post(refresh_season))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(get_summary))
        .route("/results", get(get_results))
        .route("/timeline", get(get_timeline))
        .merge(protected)
}
