//! SQL DDL for the staff tables.
//! SQLite-first; the chain is employees -> roles -> departments.

/// SQLite schema with:
/// - `AUTOINCREMENT` ids so deleted ids are never handed out again
/// - `departments.name` UNIQUE
/// - required foreign keys, no cascade (a referenced row cannot be deleted)
/// - `employees.salary` is the employee's own figure; views report `roles.salary`
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    salary REAL NOT NULL,
    department_id INTEGER NOT NULL REFERENCES departments(id)
);

CREATE INDEX IF NOT EXISTS idx_roles_department_id ON roles(department_id);

CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    role_id INTEGER NOT NULL REFERENCES roles(id),
    salary REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_employees_role_id ON employees(role_id);
"#;
