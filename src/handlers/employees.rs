use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::db::{Employee, EmployeeDetail};
use crate::{StaffError, router::StaffState};

pub fn router() -> Router<StaffState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/{id}", get(get_employee))
}

/// GET /employees -> every employee joined with role and department.
pub async fn list_employees(
    State(state): State<StaffState>,
) -> Result<Json<Vec<EmployeeDetail>>, StaffError> {
    Ok(Json(state.storage.list_employees().await?))
}

/// GET /employees/{id} -> the raw row, 404 when absent, 400 when `id` is not an integer.
pub async fn get_employee(
    State(state): State<StaffState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Employee>, StaffError> {
    let Path(id) = path.map_err(|e| StaffError::invalid("employee id", e.body_text()))?;
    state
        .storage
        .get_employee(id)
        .await?
        .map(Json)
        .ok_or(StaffError::NotFound {
            entity: "employee",
            id,
        })
}
