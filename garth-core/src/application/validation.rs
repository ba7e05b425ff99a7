//! Input rules shared by several services.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::api_types::hotel::TIME_FORMAT;
use crate::error::{HmsError, Result};

/// Trim `value` and reject it when blank.
pub(crate) fn required(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HmsError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// Percentages are inclusive `0..=100`.
pub(crate) fn percent(value: Decimal, message: &str) -> Result<Decimal> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(HmsError::validation(message));
    }
    Ok(value)
}

pub(crate) fn non_negative(value: Decimal, message: &str) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(HmsError::validation(message));
    }
    Ok(value)
}

/// Parse a `HH:MM` time.
pub(crate) fn time_of_day(value: &str, message: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| HmsError::validation(message))
}

/// Three ASCII letters, returned uppercase.
pub(crate) fn currency_code(value: &str) -> Result<String> {
    let code = value.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(HmsError::validation(
            "La moneda debe ser un código de 3 letras (ej. MXN)",
        ));
    }
    Ok(code)
}

/// Lowercased username of 3 to 50 characters from `[a-z0-9._-]`.
pub(crate) fn username(value: &str) -> Result<String> {
    let username = value.trim().to_lowercase();
    let len = username.chars().count();

    if len < 3 {
        return Err(HmsError::validation(
            "El usuario debe tener al menos 3 caracteres",
        ));
    }
    if len > 50 {
        return Err(HmsError::validation(
            "El usuario no puede exceder 50 caracteres",
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
    {
        return Err(HmsError::validation(
            "El usuario solo puede contener letras, números, punto, guion y guion bajo",
        ));
    }
    Ok(username)
}
