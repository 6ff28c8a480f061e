//! Ownership authorization check.
//!
//! Every category, service, and request belongs to exactly one provider.
//! This single predicate gates every mutation path instead of re-implementing
//! the comparison at each call site.

use crate::error::{AppError, AppResult};

/// Allows a mutation only when the acting provider owns the resource.
///
/// # Errors
/// Returns `AppError::Forbidden` when the identities differ; never a
/// silent no-op.
pub fn authorize_mutation(actor_id: i32, resource_owner_id: i32) -> AppResult<()> {
    if actor_id == resource_owner_id {
        Ok(())
    } else {
        Err(AppError::Forbidden {
            message: "Not authorized".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_allowed() {
        assert!(authorize_mutation(7, 7).is_ok());
    }

    #[test]
    fn test_other_provider_is_denied() {
        let result = authorize_mutation(7, 8);
        match result {
            Err(AppError::Forbidden { message }) => {
                assert_eq!(message, "Not authorized");
            }
            other => panic!("Expected Forbidden error, got {:?}", other),
        }
    }
}
