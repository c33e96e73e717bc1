use axum::{Json, Router, extract::State, routing::get};

use crate::db::Role;
use crate::{StaffError, router::StaffState};

pub fn router() -> Router<StaffState> {
    Router::new().route("/", get(list_roles))
}

pub async fn list_roles(State(state): State<StaffState>) -> Result<Json<Vec<Role>>, StaffError> {
    Ok(Json(state.storage.list_roles().await?))
}
