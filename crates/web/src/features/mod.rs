pub mod constructors;
pub mod drivers;
pub mod season;

use axum::Router;

use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api/drivers", drivers::routes::routes())
        .nest("/api/constructors", constructors::routes::routes())
        .nest("/api/season", season::routes::routes(api_keys))
        .with_state(state)
}
