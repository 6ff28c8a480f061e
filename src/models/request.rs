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

/// Status of a customer request, set by the owning provider.
///
/// Every request starts out pending. The status setter does not restrict
/// re-transitions; a completed request can still be marked cancelled.
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
pub enum RequestStatus {
    Pending,
    Completed,
    Cancelled,
}

impl diesel::query_builder::QueryId for RequestStatus {
    type QueryId = RequestStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for RequestStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        };
        out.write_all(s.as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for RequestStatus {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "completed" => Ok(RequestStatus::Completed),
            "cancelled" => Ok(RequestStatus::Cancelled),
            _ => Err(format!("Unrecognized request status: {}", s).into()),
        }
    }
}

/// Request query model for SELECT operations.
///
/// `service_ids` is the snapshot taken at submission time; the referenced
/// services are resolved against current records only when the provider
/// lists requests, so deleted services simply drop out of the view.
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Request {
    pub id: i32,
    pub provider_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_note: Option<String>,
    pub service_ids: Vec<i32>,
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

/// NewRequest insert model for INSERT operations.
///
/// Provider and service ids are stored exactly as submitted by the
/// anonymous caller; existence is not checked at intake.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::requests)]
pub struct NewRequest {
    pub provider_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_note: Option<String>,
    pub service_ids: Vec<i32>,
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: RequestStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, RequestStatus::Completed);
    }
}
