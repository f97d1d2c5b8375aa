use std::fmt::Write;
use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut result = String::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "required" => "required".to_string(),
                    "blank" => "must not be blank".to_string(),
                    "positive" => "must be greater than 0".to_string(),
                    "future" => "must not be in the future".to_string(),
                    _ => "invalid value".to_string(),
                });

            let _ = writeln!(&mut result, "{field}: {message}");
        }
    }

    if result.is_empty() {
        "Validation failed".to_string()
    } else {
        result.trim().to_string()
    }
}

/// One entry per failing field, as carried by `ServiceError::Validation`.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    format_validation_errors(errors)
        .lines()
        .map(str::to_string)
        .collect()
}
