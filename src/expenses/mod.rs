//! Expense Module
//!
//! Session-gated recording and retrieval of expense records.
//!
//! ```text
//! expenses/
//! ├── db.rs        - Expense model and database operations
//! └── handlers.rs  - HTTP handlers and amount coercion
//! ```

/// Expense model and database operations
pub mod db;

/// HTTP handlers for expense endpoints
pub mod handlers;

pub use db::{Expense, NewExpense};
pub use handlers::{add_expense, list_expenses};
