use crate::console::{Console, Input, Output};
use crate::db::{EmployeeField, NewEmployee, StaffStorage};
use crate::error::StaffError;
use tracing::info;

const UPDATE_FIELDS: [&str; 2] = ["role", "salary"];

/// Department and role are looked up by exact text; a miss inserts nothing.
pub async fn add<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let first_name = console.prompt_text("First name:", "first name").await?;
    let last_name = console.prompt_text("Last name:", "last name").await?;
    let department = console.prompt_text("Department:", "department").await?;
    let title = console.prompt_text("Role title:", "role").await?;
    let salary = console.prompt_amount("Salary:", "salary").await?;

    let department_id = storage
        .department_id_by_name(&department)
        .await?
        .ok_or_else(|| StaffError::DepartmentNotFound(department.clone()))?;
    let role_id = storage
        .role_id_by_title(&title, department_id)
        .await?
        .ok_or_else(|| StaffError::RoleNotFound(format!("{title} in {department}")))?;

    let id = storage
        .add_employee(&NewEmployee {
            first_name,
            last_name,
            role_id,
            salary,
        })
        .await?;
    info!(id, role_id, "employee added");
    console.say("Employee added").await?;

    view(storage, console).await
}

pub async fn view<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let rows = storage.list_employees().await?;
    console.show_table(&rows).await
}

pub async fn update<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let id: i64 = console
        .prompt_parsed("Employee id to update:", "employee id")
        .await?;
    let field = match console
        .select("Which field should change?", &UPDATE_FIELDS)
        .await?
    {
        0 => {
            let role_id: i64 = console.prompt_parsed("New role id:", "role id").await?;
            if !storage.role_exists(role_id).await? {
                return Err(StaffError::RoleNotFound(format!("id {role_id}")));
            }
            EmployeeField::Role(role_id)
        }
        _ => EmployeeField::Salary(console.prompt_amount("New salary:", "salary").await?),
    };

    storage.update_employee(id, field).await?;
    info!(id, column = field.column(), "employee updated");
    console.say("Employee updated").await
}

pub async fn delete<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let id: i64 = console
        .prompt_parsed("Employee id to delete:", "employee id")
        .await?;
    storage.delete_employee(id).await?;
    info!(id, "employee deleted");
    console.say("Employee deleted").await
}
