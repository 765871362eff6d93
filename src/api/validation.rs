use rust_decimal::Decimal;

use super::ApiError;

/// Trimmed, non-empty string field.
pub fn require_field(value: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn require_price(value: Option<Decimal>) -> Result<Decimal, ApiError> {
    match value {
        Some(price) if price > Decimal::ZERO => Ok(price),
        Some(_) => Err(ApiError::validation("price must be positive")),
        None => Err(ApiError::validation("price is required")),
    }
}

pub fn require_property_reference(value: Option<i32>) -> Result<i32, ApiError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ApiError::validation("property_id is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        assert!(require_field("  ", "title").is_err());
        assert_eq!(require_field(" Villa ", "title").unwrap(), "Villa");
    }

    #[test]
    fn rejects_missing_or_non_positive_prices() {
        assert!(require_price(None).is_err());
        assert!(require_price(Some(Decimal::ZERO)).is_err());
        assert_eq!(
            require_price(Some(Decimal::new(95, 0))).unwrap(),
            Decimal::new(95, 0)
        );
    }

    #[test]
    fn rejects_missing_property_reference() {
        assert!(require_property_reference(None).is_err());
        assert!(require_property_reference(Some(0)).is_err());
        assert_eq!(require_property_reference(Some(4)).unwrap(), 4);
    }
}
