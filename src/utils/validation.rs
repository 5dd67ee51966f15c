//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de entrada de la API.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if clean_phone.len() < 7 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un rating esté en el rango permitido [0, 5]
pub fn validate_rating(value: f64) -> Result<(), ValidationError> {
    if !(0.0..=5.0).contains(&value) {
        let mut error = ValidationError::new("rating");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"0.0 to 5.0".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hola").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_length() {
        let value = "test";
        assert!(validate_length(value, 1, 10).is_ok());
        assert!(validate_length(value, 5, 10).is_err());
        assert!(validate_length(value, 1, 3).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+251 911 234 567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(4.5).is_ok());
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(5.1).is_err());
    }
}
