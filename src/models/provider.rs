use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Deserialize;

/// Provider model for reading from database.
///
/// A provider is the owning tenant for categories, services, and incoming
/// customer requests. Created at registration and immutable afterwards.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::providers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Provider {
    pub id: i32,
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewProvider model for inserting new records.
///
/// `password` is the argon2 hash, `slug` the normalized public identifier;
/// both are prepared by the provider service before insertion.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::providers)]
pub struct NewProvider {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub slug: String,
}
