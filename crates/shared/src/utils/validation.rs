use std::borrow::{Borrow, Cow};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Rejects NaN and infinities, which the `range` check lets through.
pub fn validate_finite<T: Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    if !value.borrow().is_finite() {
        return Err(ValidationError::new("finite"));
    }
    Ok(())
}

/// Flattens validator output into `field: message` lines, descending into
/// nested structs as `parent.field`.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect("", errors, &mut messages);
    messages.sort();

    if messages.is_empty() {
        messages.push("Validation failed".to_string());
    }
    messages
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(format!("{path}: {}", describe(&path, error)));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn describe(field: &str, error: &ValidationError) -> Cow<'static, str> {
    if let Some(message) = &error.message {
        return message.clone();
    }

    match error.code.as_ref() {
        "required" => "Value is mandatory".into(),
        "blank" => "Value must not be blank".into(),
        "length" => "Invalid length".into(),
        "range" => "Value out of range".into(),
        "finite" => "Value must be a finite number".into(),
        _ => format!("Invalid {field}").into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(required(message = "Inner id is mandatory"))]
        id: Option<i64>,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(custom(function = "validate_not_blank"))]
        name: String,
        #[validate(range(min = 1))]
        quantity: i32,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("x").is_ok());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(validate_finite(&f64::NAN).is_err());
        assert!(validate_finite(&f64::INFINITY).is_err());
        assert!(validate_finite(&-0.5).is_ok());
    }

    #[test]
    fn formats_field_and_nested_errors() {
        let outer = Outer {
            name: " ".into(),
            quantity: 0,
            inner: Inner { id: None },
        };

        let messages = format_validation_errors(&outer.validate().unwrap_err());

        assert_eq!(
            messages,
            vec![
                "inner.id: Inner id is mandatory".to_string(),
                "name: Value must not be blank".to_string(),
                "quantity: Value out of range".to_string(),
            ]
        );
    }
}
