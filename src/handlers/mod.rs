//! Read-only JSON listings mounted under `/employees`, `/roles` and `/departments`.

pub mod departments;
pub mod employees;
pub mod roles;
