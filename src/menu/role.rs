use crate::console::{Console, Input, Output};
use crate::db::StaffStorage;
use crate::error::StaffError;
use tracing::info;

pub async fn add<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let title = console.prompt_text("Role title:", "title").await?;
    let salary = console.prompt_amount("Salary:", "salary").await?;
    let department = console.prompt_text("Department:", "department").await?;

    let department_id = storage
        .department_id_by_name(&department)
        .await?
        .ok_or(StaffError::DepartmentNotFound(department))?;

    let id = storage.add_role(&title, salary, department_id).await?;
    info!(id, department_id, "role added");
    console.say("Role added").await
}

pub async fn view<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let rows = storage.list_roles().await?;
    console.show_table(&rows).await
}

/// Fails while any employee still holds the role.
pub async fn delete<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let id: i64 = console.prompt_parsed("Role id to delete:", "role id").await?;
    storage.delete_role(id).await?;
    info!(id, "role deleted");
    console.say("Role deleted").await
}
