use staffdesk::StaffError;
use staffdesk::console::Console;
use staffdesk::db::{EmployeeDetail, StaffStorage};
use staffdesk::menu;

async fn fresh_store() -> StaffStorage {
    let storage = staffdesk::db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");
    storage
}

/// Run a full menu session over scripted input and return what was printed.
async fn run_session(storage: &StaffStorage, script: &'static str) -> String {
    let mut console = Console::new(script.as_bytes(), Vec::new());
    menu::run(storage, &mut console)
        .await
        .expect("menu session failed");
    String::from_utf8(console.into_inner().1).expect("console output was not utf-8")
}

#[tokio::test]
async fn engineering_session_end_to_end() {
    let storage = fresh_store().await;
    let script = "8\nEngineering\n\
                  5\nEngineer\n90000\nEngineering\n\
                  1\nAda\nLovelace\nEngineering\nEngineer\n90000\n\
                  2\n\
                  12\n";

    let out = run_session(&storage, script).await;

    assert!(out.contains("Department added"));
    assert!(out.contains("Role added"));
    assert!(out.contains("Employee added"));
    // once after the add, once for "View Employees"
    assert_eq!(out.matches("| Ada ").count(), 2);
    assert!(!out.contains("Error:"));

    let rows = storage.list_employees().await.unwrap();
    assert_eq!(
        rows,
        vec![EmployeeDetail {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            department: "Engineering".to_string(),
            title: "Engineer".to_string(),
            salary: 90000.0,
        }]
    );
}

#[tokio::test]
async fn unknown_department_inserts_nothing_and_menu_continues() {
    let storage = fresh_store().await;
    let script = "1\nAda\nLovelace\nSales\nEngineer\n90000\n\
                  9\n\
                  exit\n";

    let out = run_session(&storage, script).await;

    assert!(out.contains("Error: Department not found: Sales"));
    assert!(!out.contains("Employee added"));
    assert!(storage.list_employees().await.unwrap().is_empty());
    // the department listing still ran after the failure
    assert!(out.contains("| id | name |"));
}

#[tokio::test]
async fn unknown_role_in_department_inserts_nothing() {
    let storage = fresh_store().await;
    storage.add_department("Engineering").await.unwrap();

    let out = run_session(
        &storage,
        "1\nAda\nLovelace\nEngineering\nAstronaut\n90000\n12\n",
    )
    .await;

    assert!(out.contains("Error: Role not found: Astronaut in Engineering"));
    assert!(storage.list_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn role_add_needs_a_known_department() {
    let storage = fresh_store().await;

    let out = run_session(&storage, "5\nEngineer\n90000\nNowhere\n12\n").await;

    assert!(out.contains("Error: Department not found: Nowhere"));
    assert!(storage.list_roles().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_missing_rows_reports_not_found() {
    let storage = fresh_store().await;

    let out = run_session(&storage, "4\n42\n7\n3\n10\n5\n12\n").await;

    assert!(out.contains("Error: No employee with id 42"));
    assert!(out.contains("Error: No role with id 3"));
    assert!(out.contains("Error: No department with id 5"));
    assert!(!out.contains("deleted"));
}

#[tokio::test]
async fn update_changes_only_the_chosen_field() {
    let storage = fresh_store().await;
    let department_id = storage.add_department("Engineering").await.unwrap();
    let role_id = storage
        .add_role("Engineer", 90000.0, department_id)
        .await
        .unwrap();
    let id = storage
        .add_employee(&staffdesk::db::NewEmployee {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role_id,
            salary: 90000.0,
        })
        .await
        .unwrap();

    let out = run_session(&storage, "3\n1\nsalary\n101000\n12\n").await;

    assert!(out.contains("Employee updated"));
    let row = storage.get_employee(id).await.unwrap().unwrap();
    assert_eq!(row.salary, 101000.0);
    assert_eq!(row.role_id, role_id);
}

#[tokio::test]
async fn update_rejects_bad_id_and_unknown_role() {
    let storage = fresh_store().await;

    let out = run_session(&storage, "3\nabc\n3\n1\nrole\n77\n12\n").await;

    assert!(out.contains("Error: Invalid employee id"));
    assert!(out.contains("Error: Role not found: id 77"));
    assert!(!out.contains("Employee updated"));
}

#[tokio::test]
async fn invalid_selection_and_go_back_redisplay_menu() {
    let storage = fresh_store().await;

    let out = run_session(&storage, "0\nnonsense\n11\n12\n").await;

    assert_eq!(out.matches("What would you like to do?").count(), 4);
    assert_eq!(out.matches("Please pick one of the listed choices.").count(), 2);
}

#[tokio::test]
async fn end_of_input_leaves_the_menu() {
    let storage = fresh_store().await;

    // input runs out in the middle of "Add Department"
    let out = run_session(&storage, "8\n").await;

    assert!(out.contains("Department name:"));
    assert!(storage.list_departments().await.unwrap().is_empty());
}

#[tokio::test]
async fn handler_can_run_without_the_menu() {
    let storage = fresh_store().await;
    let mut console = Console::new(&b"Finance\n"[..], Vec::new());

    menu::department::add(&storage, &mut console).await.unwrap();

    let err = menu::department::add(&storage, &mut console)
        .await
        .unwrap_err();
    assert!(matches!(err, StaffError::InputClosed));
    assert_eq!(storage.list_departments().await.unwrap().len(), 1);
}
