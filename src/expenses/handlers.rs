/**
 * Expense Handlers
 *
 * This module implements the session-gated expense endpoints:
 *
 * - POST /add_expense - record a new expense for the bound user
 * - GET /api/expenses - list the bound user's expenses, newest first
 *
 * Both handlers require an authenticated session; the `SessionUser`
 * extractor is the only authorization gate, and reads filter by the bound
 * user id.
 *
 * # Amount Coercion
 *
 * The amount may arrive as a JSON number or a numeric string. It is
 * coerced to a non-negative f64; non-numeric or negative input is a
 * validation failure and nothing is stored.
 */

use axum::extract::State;
use axum::response::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::expenses::db::{create_expense, list_expenses_for_user, NewExpense};
use crate::middleware::SessionUser;

/// Add-expense request payload
///
/// `user_name` is the denormalized owner name persisted as sent; the
/// owner email comes from the session, not the payload.
#[derive(Deserialize, Debug)]
pub struct AddExpenseRequest {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub category: String,
    /// JSON number or numeric string; absent means zero
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_mode: String,
    #[serde(default)]
    pub description: String,
}

/// Add-expense response
#[derive(Serialize, Deserialize, Debug)]
pub struct AddExpenseResponse {
    pub message: String,
    pub expense_id: Uuid,
}

/// A single expense as rendered to the client; date fields are ISO-8601
/// text, `null` when absent
#[derive(Serialize, Deserialize, Debug)]
pub struct ExpenseView {
    pub id: Uuid,
    pub category: Option<String>,
    pub amount: f64,
    pub date: Option<String>,
    pub payment_mode: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

/// List-expenses response
#[derive(Serialize, Deserialize, Debug)]
pub struct ExpenseListResponse {
    pub expenses: Vec<ExpenseView>,
}

/// Coerce a JSON amount value to a non-negative number
///
/// Accepts a number or a numeric string; an absent (null) amount is zero.
fn coerce_amount(value: &serde_json::Value) -> Result<f64, ApiError> {
    let amount = match value {
        serde_json::Value::Null => 0.0,
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| {
            ApiError::Validation("Amount must be a number".to_string())
        })?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ApiError::Validation("Amount must be a number".to_string())
        })?,
        _ => {
            return Err(ApiError::Validation(
                "Amount must be a number".to_string(),
            ))
        }
    };

    // is_finite also rejects NaN parsed from a "NaN" string
    if !amount.is_finite() || amount < 0.0 {
        return Err(ApiError::Validation(
            "Amount must be a non-negative number".to_string(),
        ));
    }

    Ok(amount)
}

/// Add-expense handler
///
/// # Errors
///
/// * `401 Unauthorized` - no authenticated session
/// * `400 Bad Request` - non-numeric or negative amount
pub async fn add_expense(
    session: SessionUser,
    State(pool): State<PgPool>,
    Json(request): Json<AddExpenseRequest>,
) -> Result<Json<AddExpenseResponse>, ApiError> {
    let amount = coerce_amount(&request.amount)?;

    let expense_id = create_expense(
        &pool,
        NewExpense {
            user_id: session.user_id,
            user_name: request.user_name,
            email: session.email,
            category: request.category,
            amount,
            expense_date: request.date,
            payment_mode: request.payment_mode,
            description: request.description,
        },
    )
    .await?;

    tracing::info!("Expense {} recorded for user {}", expense_id, session.user_id);

    Ok(Json(AddExpenseResponse {
        message: "Expense added successfully!".to_string(),
        expense_id,
    }))
}

/// List-expenses handler
///
/// Returns the bound user's expenses ordered by creation time descending.
pub async fn list_expenses(
    session: SessionUser,
    State(pool): State<PgPool>,
) -> Result<Json<ExpenseListResponse>, ApiError> {
    let expenses = list_expenses_for_user(&pool, session.user_id).await?;

    let expenses = expenses
        .into_iter()
        .map(|e| ExpenseView {
            id: e.id,
            category: e.category,
            amount: e.amount,
            date: e.expense_date.map(|d| d.to_string()),
            payment_mode: e.payment_mode,
            description: e.description,
            created_at: Some(e.created_at.to_rfc3339()),
        })
        .collect();

    Ok(Json(ExpenseListResponse { expenses }))
}
