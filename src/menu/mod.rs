//! Interactive menu: read a choice, run its handler, report, repeat.

pub mod department;
pub mod employee;
pub mod role;

use crate::console::{Console, Input, Output};
use crate::db::StaffStorage;
use crate::error::StaffError;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    ViewEmployees,
    UpdateEmployee,
    DeleteEmployee,
    AddRole,
    ViewRoles,
    DeleteRole,
    AddDepartment,
    ViewDepartments,
    DeleteDepartment,
    GoBack,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddEmployee,
        MenuChoice::ViewEmployees,
        MenuChoice::UpdateEmployee,
        MenuChoice::DeleteEmployee,
        MenuChoice::AddRole,
        MenuChoice::ViewRoles,
        MenuChoice::DeleteRole,
        MenuChoice::AddDepartment,
        MenuChoice::ViewDepartments,
        MenuChoice::DeleteDepartment,
        MenuChoice::GoBack,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddEmployee => "Add Employee",
            MenuChoice::ViewEmployees => "View Employees",
            MenuChoice::UpdateEmployee => "Update Employee",
            MenuChoice::DeleteEmployee => "Delete Employee",
            MenuChoice::AddRole => "Add Role",
            MenuChoice::ViewRoles => "View Roles",
            MenuChoice::DeleteRole => "Delete Role",
            MenuChoice::AddDepartment => "Add Department",
            MenuChoice::ViewDepartments => "View Departments",
            MenuChoice::DeleteDepartment => "Delete Department",
            MenuChoice::GoBack => "Go Back",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn labels() -> [&'static str; 12] {
        Self::ALL.map(MenuChoice::label)
    }
}

/// Run the menu until "Exit" or end of input.
///
/// Handler failures are logged and printed, then the menu is shown again.
/// Only a failing console ends the session early.
pub async fn run<R: Input, W: Output>(
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    let labels = MenuChoice::labels();
    loop {
        let choice = match console.select("What would you like to do?", &labels).await {
            Ok(index) => MenuChoice::ALL[index],
            Err(StaffError::InputClosed) => {
                info!("input closed; leaving menu");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if choice == MenuChoice::Exit {
            info!("exit selected");
            return Ok(());
        }

        match dispatch(choice, storage, console).await {
            Ok(()) => {}
            Err(StaffError::InputClosed) => {
                info!(action = choice.label(), "input closed mid-prompt; leaving menu");
                return Ok(());
            }
            Err(StaffError::Io(e)) => return Err(StaffError::Io(e)),
            Err(e) => {
                error!(action = choice.label(), error = %e, "menu action failed");
                console.say(&format!("Error: {e}")).await?;
            }
        }
    }
}

async fn dispatch<R: Input, W: Output>(
    choice: MenuChoice,
    storage: &StaffStorage,
    console: &mut Console<R, W>,
) -> Result<(), StaffError> {
    match choice {
        MenuChoice::AddEmployee => employee::add(storage, console).await,
        MenuChoice::ViewEmployees => employee::view(storage, console).await,
        MenuChoice::UpdateEmployee => employee::update(storage, console).await,
        MenuChoice::DeleteEmployee => employee::delete(storage, console).await,
        MenuChoice::AddRole => role::add(storage, console).await,
        MenuChoice::ViewRoles => role::view(storage, console).await,
        MenuChoice::DeleteRole => role::delete(storage, console).await,
        MenuChoice::AddDepartment => department::add(storage, console).await,
        MenuChoice::ViewDepartments => department::view(storage, console).await,
        MenuChoice::DeleteDepartment => department::delete(storage, console).await,
        MenuChoice::GoBack | MenuChoice::Exit => Ok(()),
    }
}
