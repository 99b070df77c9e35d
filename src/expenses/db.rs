//! Database operations for expense records
//!
//! Expense rows carry denormalized owner fields (user_name, email) copied
//! at write time; they are never re-derived from the users table on read.
//! Records are immutable after creation and read back newest first.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// An expense record as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub amount: f64,
    pub expense_date: Option<NaiveDate>,
    pub payment_mode: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new expense record; the amount has already been coerced
/// to a non-negative number by the handler.
#[derive(Debug)]
pub struct NewExpense {
    pub user_id: Uuid,
    pub user_name: String,
    pub email: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: Option<NaiveDate>,
    pub payment_mode: String,
    pub description: String,
}

/// Insert a new expense record and return its identifier
pub async fn create_expense(pool: &PgPool, expense: NewExpense) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO expenses (id, user_id, user_name, email, category, amount,
                              expense_date, payment_mode, description, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(id)
    .bind(expense.user_id)
    .bind(&expense.user_name)
    .bind(&expense.email)
    .bind(&expense.category)
    .bind(expense.amount)
    .bind(expense.expense_date)
    .bind(&expense.payment_mode)
    .bind(&expense.description)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Get all expenses owned by a user, newest first
pub async fn list_expenses_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        r#"
        SELECT id, user_id, user_name, email, category, amount,
               expense_date, payment_mode, description, created_at
        FROM expenses
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
