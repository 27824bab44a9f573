use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// JSON body that has already passed its `#[validate]` rules.
///
/// Undecodable bodies and rule violations are both rejected with 400.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::BadRequest(format!("invalid json: {}", rejection.body_text()))
            })?;

        value.validate().map_err(|errors| HttpError::Validation {
            message: format!("invalid payload: {}", format_validation_errors(&errors)),
            details: format_validation_errors_detailed(&errors),
        })?;

        Ok(Self(value))
    }
}

fn field_messages(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match e.code.as_ref() {
                            "length" => "Invalid length".to_string(),
                            "range" => "Value out of range".to_string(),
                            _ => format!("Invalid {field}"),
                        })
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let error_messages: Vec<String> = field_messages(errors)
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| format!("{field}: {message}"))
        })
        .collect();

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, messages) in field_messages(errors) {
        error_map.insert(field, json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::stock::CreateStockRequest;

    #[test]
    fn messages_are_sorted_by_field() {
        let req = CreateStockRequest::default();
        let errors = req.validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "company: company is required; name: name is required; \
             price: price is required and must be non-zero"
        );
    }

    #[test]
    fn detailed_errors_group_messages_per_field() {
        let req = CreateStockRequest {
            name: "Model S".into(),
            price: 10,
            company: String::new(),
        };
        let errors = req.validate().unwrap_err();

        assert_eq!(
            format_validation_errors_detailed(&errors),
            json!({ "company": ["company is required"] })
        );
    }
}
