pub mod request {
    use axum::{
        async_trait,
        extract::{FromRequestParts, Query},
        http::request::Parts,
        RequestPartsExt,
    };
    use std::{collections::HashMap, convert::Infallible};

    pub use crate::modules::bank::service::Filters;

    const ENABLED: &str = "true";

    impl Filters {
        pub fn from_query(query: &HashMap<String, String>) -> Self {
            let enabled = |key: &str| query.get(key).map(String::as_str) == Some(ENABLED);

            Self {
                normal: enabled("normal"),
                mfo: enabled("mfo"),
            }
        }
    }

    #[async_trait]
    impl<S: Send + Sync> FromRequestParts<S> for Filters {
        type Rejection = Infallible;

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            match parts.extract::<Query<HashMap<String, String>>>().await {
                Ok(Query(query)) => Ok(Filters::from_query(&query)),
                Err(err) => {
                    tracing::debug!("Ignoring undecodable query string: {}", err);
                    Ok(Filters::default())
                }
            }
        }
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::bank::service;
    use axum::{
        http::{header, StatusCode},
        response::IntoResponse,
    };

    const XML_CONTENT_TYPE: &str = "application/xml";
    const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

    pub enum Success {
        Banks(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Banks(xml) => (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, XML_CONTENT_TYPE),
                        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                    ],
                    xml,
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UnsupportedMethod,
        FailedToListBanks(service::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UnsupportedMethod => (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                    "Method not supported",
                )
                    .into_response(),
                Self::FailedToListBanks(err) => {
                    tracing::error!("Failed to list banks: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                        format!("Server error: {}", err),
                    )
                        .into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::Filters;
    use std::collections::HashMap;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn flags_require_exact_true() {
        assert_eq!(
            Filters::from_query(&query(&[("normal", "true"), ("mfo", "true")])),
            Filters {
                normal: true,
                mfo: true
            }
        );

        for value in ["TRUE", "True", "1", "yes", "", " true"] {
            assert_eq!(
                Filters::from_query(&query(&[("normal", value), ("mfo", value)])),
                Filters::default(),
                "value {:?} must not enable a flag",
                value
            );
        }
    }

    #[test]
    fn unknown_and_missing_params_are_ignored() {
        assert_eq!(
            Filters::from_query(&query(&[("limit", "10"), ("mfo", "true")])),
            Filters {
                normal: false,
                mfo: true
            }
        );
        assert_eq!(Filters::from_query(&HashMap::new()), Filters::default());
    }
}
