//! Validation Utilities

use validator::ValidationErrors;

/// Flatten validation errors into one client-facing description.
///
/// Fields are reported in name order so the text is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut messages: Vec<(String, String)> = field_errors
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
        })
        .collect();

    messages.sort_by(|a, b| a.0.cmp(&b.0));

    if messages.is_empty() {
        return "Validation failed".into();
    }

    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("; ")
}
