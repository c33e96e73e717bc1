use axum::{Json, Router, extract::State, routing::get};

use crate::db::Department;
use crate::{StaffError, router::StaffState};

pub fn router() -> Router<StaffState> {
    Router::new().route("/", get(list_departments))
}

pub async fn list_departments(
    State(state): State<StaffState>,
) -> Result<Json<Vec<Department>>, StaffError> {
    Ok(Json(state.storage.list_departments().await?))
}
