use crate::table::TableRow;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

/// Raw `employees` row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub salary: f64,
}

/// Employee joined through its role to the department. `salary` is the role's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct EmployeeDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub title: String,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub salary: f64,
}

/// The single column an update may touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmployeeField {
    Role(i64),
    Salary(f64),
}

impl EmployeeField {
    pub fn column(&self) -> &'static str {
        match self {
            EmployeeField::Role(_) => "role_id",
            EmployeeField::Salary(_) => "salary",
        }
    }
}

impl TableRow for Department {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl TableRow for Role {
    const HEADERS: &'static [&'static str] = &["id", "title", "salary", "department_id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.salary.to_string(),
            self.department_id.to_string(),
        ]
    }
}

impl TableRow for EmployeeDetail {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "department",
        "title",
        "salary",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.department.clone(),
            self.title.clone(),
            self.salary.to_string(),
        ]
    }
}
