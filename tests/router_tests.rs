use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use staffdesk::db::{NewEmployee, StaffStorage};
use staffdesk::router::{StaffState, staff_router};
use tower::ServiceExt;

async fn seeded_store() -> StaffStorage {
    let storage = staffdesk::db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");

    let department_id = storage.add_department("Engineering").await.unwrap();
    let role_id = storage
        .add_role("Engineer", 90000.0, department_id)
        .await
        .unwrap();
    storage
        .add_employee(&NewEmployee {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role_id,
            salary: 85000.0,
        })
        .await
        .unwrap();
    storage
}

async fn get_json(storage: &StaffStorage, uri: &str) -> (StatusCode, Value) {
    let app = staff_router(StaffState::new(storage.clone()));
    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = serde_json::from_slice(&body).expect("response body was not json");
    (status, value)
}

#[tokio::test]
async fn employees_route_returns_joined_rows() {
    let storage = seeded_store().await;

    let (status, body) = get_json(&storage, "/employees").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], "Ada");
    assert_eq!(rows[0]["department"], "Engineering");
    assert_eq!(rows[0]["title"], "Engineer");
    assert_eq!(rows[0]["salary"], 90000.0);
}

#[tokio::test]
async fn single_employee_route_returns_raw_row() {
    let storage = seeded_store().await;

    let (status, body) = get_json(&storage, "/employees/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_name"], "Lovelace");
    assert_eq!(body["salary"], 85000.0);
    assert_eq!(body["role_id"], 1);
}

#[tokio::test]
async fn missing_employee_is_404() {
    let storage = seeded_store().await;

    let (status, body) = get_json(&storage, "/employees/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "No employee with id 99");
}

#[tokio::test]
async fn non_numeric_employee_id_is_a_json_400() {
    let storage = seeded_store().await;

    let (status, body) = get_json(&storage, "/employees/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    let message = body["error"]["message"].as_str().expect("message string");
    assert!(message.starts_with("Invalid employee id"));
}

#[tokio::test]
async fn roles_and_departments_match_storage() {
    let storage = seeded_store().await;

    let (status, roles) = get_json(&storage, "/roles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roles.as_array().map(Vec::len), Some(1));
    assert_eq!(roles[0]["department_id"], 1);

    let (status, departments) = get_json(&storage, "/departments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(departments[0]["name"], "Engineering");
}
