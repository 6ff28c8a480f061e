use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Service query model for SELECT operations.
///
/// The displayed total price is derived from `base_price`, `vat_percent`,
/// and `discount_amount` (see `services::pricing`) and is never stored.
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::services)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Service {
    pub id: i32,
    pub provider_id: i32,
    pub category_id: i32,
    pub name: String,
    pub base_price: f64,
    pub vat_percent: Option<f64>,
    pub discount_amount: Option<f64>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewService insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::services)]
pub struct NewService {
    pub provider_id: i32,
    pub category_id: i32,
    pub name: String,
    pub base_price: f64,
    pub vat_percent: Option<f64>,
    pub discount_amount: Option<f64>,
    pub image: Option<String>,
}

/// UpdateService model for partial updates (None fields are ignored).
///
/// A present `category_id` triggers re-validation that the new category
/// belongs to the acting provider.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::services)]
pub struct UpdateService {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub base_price: Option<f64>,
    pub vat_percent: Option<f64>,
    pub discount_amount: Option<f64>,
    pub image: Option<String>,
}
