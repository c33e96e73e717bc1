use crate::db::models::{Department, Employee, EmployeeDetail, EmployeeField, NewEmployee, Role};
use crate::db::schema::SQLITE_INIT;
use crate::error::StaffError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open the store behind a single persistent connection.
///
/// One connection keeps every statement strictly ordered and lets
/// `sqlite::memory:` survive for the lifetime of the pool.
pub async fn connect(database_url: &str) -> Result<StaffStorage, StaffError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_opts)
        .await?;
    Ok(StaffStorage::new(pool))
}

#[derive(Clone)]
pub struct StaffStorage {
    pool: SqlitePool,
}

impl StaffStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), StaffError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Release the connection. Further queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn add_department(&self, name: &str) -> Result<i64, StaffError> {
        let res = sqlx::query("INSERT INTO departments (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        let id = res.last_insert_rowid();
        debug!(id, department = name, "department inserted");
        Ok(id)
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, StaffError> {
        let rows = sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Exact-match lookup by name.
    pub async fn department_id_by_name(&self, name: &str) -> Result<Option<i64>, StaffError> {
        let rec: Option<(i64,)> = sqlx::query_as("SELECT id FROM departments WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rec.map(|r| r.0))
    }

    pub async fn delete_department(&self, id: i64) -> Result<(), StaffError> {
        let res = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_affected(res, "department", id)?;
        debug!(id, "department deleted");
        Ok(())
    }

    pub async fn add_role(
        &self,
        title: &str,
        salary: f64,
        department_id: i64,
    ) -> Result<i64, StaffError> {
        let res = sqlx::query("INSERT INTO roles (title, salary, department_id) VALUES (?, ?, ?)")
            .bind(title)
            .bind(salary)
            .bind(department_id)
            .execute(&self.pool)
            .await?;
        let id = res.last_insert_rowid();
        debug!(id, title, salary, department_id, "role inserted");
        Ok(id)
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, StaffError> {
        let rows = sqlx::query_as::<_, Role>(
            "SELECT id, title, salary, department_id FROM roles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Exact-match lookup by title within one department; the oldest role wins.
    pub async fn role_id_by_title(
        &self,
        title: &str,
        department_id: i64,
    ) -> Result<Option<i64>, StaffError> {
        let rec: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM roles WHERE title = ? AND department_id = ? ORDER BY id LIMIT 1",
        )
        .bind(title)
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(rec.map(|r| r.0))
    }

    pub async fn role_exists(&self, id: i64) -> Result<bool, StaffError> {
        let rec: Option<(i64,)> = sqlx::query_as("SELECT id FROM roles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rec.is_some())
    }

    pub async fn delete_role(&self, id: i64) -> Result<(), StaffError> {
        let res = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_affected(res, "role", id)?;
        debug!(id, "role deleted");
        Ok(())
    }

    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<i64, StaffError> {
        let res = sqlx::query(
            "INSERT INTO employees (first_name, last_name, role_id, salary) VALUES (?, ?, ?, ?)",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.role_id)
        .bind(employee.salary)
        .execute(&self.pool)
        .await?;
        let id = res.last_insert_rowid();
        debug!(
            id,
            role_id = employee.role_id,
            salary = employee.salary,
            "employee inserted"
        );
        Ok(id)
    }

    /// Every employee joined through role to department.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeDetail>, StaffError> {
        let rows = sqlx::query_as::<_, EmployeeDetail>(
            r#"
            SELECT employees.id, employees.first_name, employees.last_name,
                   departments.name AS department, roles.title, roles.salary
            FROM employees
            INNER JOIN roles ON employees.role_id = roles.id
            INNER JOIN departments ON roles.department_id = departments.id
            ORDER BY employees.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, StaffError> {
        let row = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, role_id, salary FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update exactly one column of one employee.
    pub async fn update_employee(&self, id: i64, field: EmployeeField) -> Result<(), StaffError> {
        let res = match field {
            EmployeeField::Role(role_id) => {
                sqlx::query("UPDATE employees SET role_id = ? WHERE id = ?")
                    .bind(role_id)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            EmployeeField::Salary(salary) => {
                sqlx::query("UPDATE employees SET salary = ? WHERE id = ?")
                    .bind(salary)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };
        ensure_affected(res, "employee", id)?;
        debug!(id, column = field.column(), "employee updated");
        Ok(())
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), StaffError> {
        let res = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_affected(res, "employee", id)?;
        debug!(id, "employee deleted");
        Ok(())
    }
}

fn ensure_affected(
    res: SqliteQueryResult,
    entity: &'static str,
    id: i64,
) -> Result<(), StaffError> {
    if res.rows_affected() == 0 {
        return Err(StaffError::NotFound { entity, id });
    }
    Ok(())
}
