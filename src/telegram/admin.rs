//! Operator authorization
//!
//! `/verify` is the only privileged command. The router calls
//! [`authorize_operator`] before dispatching to it and replies with a
//! rejection on `Err`, so the verification body never runs for other users.

use crate::core::config::OperatorIds;

/// The caller is not a configured operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unauthorized;

/// Check if user is an operator
pub fn is_operator(operators: &OperatorIds, user_id: &str) -> bool {
    operators.contains(user_id)
}

/// Guard for operator-only commands
pub fn authorize_operator(operators: &OperatorIds, user_id: &str) -> Result<(), Unauthorized> {
    if is_operator(operators, user_id) {
        Ok(())
    } else {
        Err(Unauthorized)
    }
}
