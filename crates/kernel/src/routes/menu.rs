//! Navigation menu endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::menu::MenuGroup;
use crate::state::AppState;

/// Return the sidebar menu groups in display order.
///
/// GET /api/menu
async fn list_menu(State(state): State<AppState>) -> Json<&'static [MenuGroup]> {
    Json(state.navigation().menu_groups())
}

/// Create the menu router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/menu", get(list_menu))
}
