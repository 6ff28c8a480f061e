use chrono::NaiveDateTime;
use diesel::AsExpression;
use diesel::FromSqlRow;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Visibility of a category on the public catalog page.
///
/// Inactive categories stay fully editable in the provider's private
/// listing but never appear publicly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Inactive,
}

impl diesel::query_builder::QueryId for CategoryStatus {
    type QueryId = CategoryStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for CategoryStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        };
        out.write_all(s.as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for CategoryStatus {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "active" => Ok(CategoryStatus::Active),
            "inactive" => Ok(CategoryStatus::Inactive),
            _ => Err(format!("Unrecognized category status: {}", s).into()),
        }
    }
}

/// Category query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub provider_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: CategoryStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewCategory insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub provider_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: CategoryStatus,
}

/// UpdateCategory model for partial updates (None fields are ignored)
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<CategoryStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CategoryStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&CategoryStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: CategoryStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(status, CategoryStatus::Inactive);
    }
}
