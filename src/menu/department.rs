use crate::console::{Console, Input, Output};
use crate::db::StaffStorage;
use crate::error::StaffError;
use tracing::info;

pub async fn add<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let name = console.prompt_text("Department name:", "name").await?;
    let id = storage.add_department(&name).await?;
    info!(id, "department added");
    console.say("Department added").await
}

pub async fn view<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let rows = storage.list_departments().await?;
    console.show_table(&rows).await
}

/// Fails while any role still points at the department.
pub async fn delete<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let id: i64 = console
        .prompt_parsed("Department id to delete:", "department id")
        .await?;
    storage.delete_department(id).await?;
    info!(id, "department deleted");
    console.say("Department deleted").await
}
