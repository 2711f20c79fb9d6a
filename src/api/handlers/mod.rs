pub mod health;
pub mod venue;
pub mod event;
pub mod recurring;
pub mod team;
pub mod gallery;
pub mod review;
pub mod service;
pub mod setting;
pub mod contact;
pub mod question;
pub mod social;

use crate::error::AppError;

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Applies a PATCH-style update to an optional column; blank strings clear it.
pub(crate) fn apply_optional_text(target: &mut Option<String>, update: Option<Option<String>>) {
    if let Some(value) = update {
        *target = value.filter(|v| !v.trim().is_empty());
    }
}
