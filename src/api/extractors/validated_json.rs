//! JSON body extractor with presence checks.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Deserializes a JSON body and runs its `validator` rules.
///
/// Malformed bodies and failed checks are both rejected with
/// `AppError::Validation` (400).
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// One message per failing field, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is required", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct SignupFields {
        #[validate(length(min = 1, message = "email is required"))]
        email: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_describe_orders_fields_and_defaults_message() {
        let fields = SignupFields {
            email: String::new(),
            name: String::new(),
        };
        let errors = fields.validate().unwrap_err();

        assert_eq!(describe(&errors), "email is required, name is required");
    }
}
