use crate::db::StaffStorage;
use crate::error::StaffError;
use crate::handlers::{departments, employees, roles};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone)]
pub struct StaffState {
    pub storage: StaffStorage,
}

impl StaffState {
    pub fn new(storage: StaffStorage) -> Self {
        Self { storage }
    }
}

pub fn staff_router(state: StaffState) -> Router {
    Router::new()
        .nest("/employees", employees::router())
        .nest("/roles", roles::router())
        .nest("/departments", departments::router())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: StaffState) -> Result<(), StaffError> {
    info!(addr = %listener.local_addr()?, "HTTP server listening");
    axum::serve(listener, staff_router(state)).await?;
    Ok(())
}
