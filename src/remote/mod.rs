//! Remote Check Client: the HTTP client for the Peirce checking service.
//!
//! All operations are stateless request/response calls with JSON
//! bodies. Mutating endpoints answer `{"success": bool}`; the two check
//! endpoints return data arrays directly. There is no retry, queueing,
//! or timeout policy beyond the HTTP client's defaults — failures are
//! transient and the caller discards whatever it was about to persist.

use crate::models::{Constructor, FunctionItem, Interpretation, Space, SpanDescriptor, Term};
use crate::{Error, Result, TimeSeries};
use serde::{Deserialize, Serialize};

/// The body submitted to the `check2` endpoint: everything the checker
/// needs to re-check the active file.
#[derive(Debug, Serialize)]
pub struct CheckRequest<'a> {
    /// Path of the active file.
    pub file: &'a str,
    /// Path of the active file, duplicated under the service's
    /// historical field name.
    #[serde(rename = "fileName")]
    pub file_name: &'a str,
    /// Every known term.
    pub terms: &'a [Term],
    /// Every registered space, all kinds.
    pub spaces: Vec<&'a Space>,
    /// Every known constructor.
    pub constructors: &'a [Constructor],
    /// Every known function item.
    pub function_items: &'a [FunctionItem],
}

/// Capability trait for the checking service.
///
/// Mutating operations return `Ok(false)` when the service answers
/// `success: false`; transport and protocol failures are `Err`.
pub trait CheckerApi {
    /// Registers a coordinate space.
    fn create_space(&self, space: &Space) -> Result<bool>;

    /// Submits a term's interpretation.
    fn create_term_interpretation(&self, term: &Term) -> Result<bool>;

    /// Submits a constructor's interpretation.
    fn create_constructor_interpretation(&self, cons: &Constructor) -> Result<bool>;

    /// Submits a function item's interpretation.
    fn create_function_interpretation(&self, func: &FunctionItem) -> Result<bool>;

    /// Registers a time series.
    fn create_time_series(&self, series: &TimeSeries) -> Result<bool>;

    /// Appends a time-stamped value to a series.
    fn add_value_to_time_series(&self, value: &Interpretation) -> Result<bool>;

    /// Re-checks the active file; returns the updated term array.
    fn check_terms(&self, request: &CheckRequest<'_>) -> Result<Vec<Term>>;

    /// Fetches re-population data for every file.
    fn populate_all(&self) -> Result<Vec<SpanDescriptor>>;
}

/// `{"success": bool}` answer shape of the mutating endpoints.
#[derive(Debug, Deserialize)]
struct SuccessResponse {
    success: bool,
}

/// HTTP implementation of [`CheckerApi`] over a blocking reqwest client.
pub struct HttpChecker {
    /// Base URL, e.g. `http://0.0.0.0:8080/api`.
    base_url: String,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl HttpChecker {
    /// Creates a client for the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn post(&self, endpoint: &str, body: &impl Serialize) -> Result<reqwest::blocking::Response> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| {
                tracing::error!(endpoint, error = %e, "request to checking service failed");
                Error::OperationFailed {
                    operation: endpoint.to_string(),
                    cause: e.to_string(),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(endpoint, %status, "checking service returned error status");
            return Err(Error::OperationFailed {
                operation: endpoint.to_string(),
                cause: format!("service returned status {status}"),
            });
        }
        Ok(response)
    }

    fn post_success(&self, endpoint: &str, body: &impl Serialize) -> Result<bool> {
        let response = self.post(endpoint, body)?;
        let parsed: SuccessResponse = response.json().map_err(|e| Error::OperationFailed {
            operation: endpoint.to_string(),
            cause: e.to_string(),
        })?;
        tracing::debug!(endpoint, success = parsed.success, "checking service answered");
        Ok(parsed.success)
    }
}

impl CheckerApi for HttpChecker {
    fn create_space(&self, space: &Space) -> Result<bool> {
        self.post_success("createSpace", &serde_json::json!({ "space": space }))
    }

    fn create_term_interpretation(&self, term: &Term) -> Result<bool> {
        self.post_success(
            "createTermInterpretation",
            &serde_json::json!({ "term": term }),
        )
    }

    fn create_constructor_interpretation(&self, cons: &Constructor) -> Result<bool> {
        self.post_success(
            "createConstructorInterpretation",
            &serde_json::json!({ "constructor": cons }),
        )
    }

    fn create_function_interpretation(&self, func: &FunctionItem) -> Result<bool> {
        self.post_success(
            "createFunctionInterpretation",
            &serde_json::json!({ "function_item": func }),
        )
    }

    fn create_time_series(&self, series: &TimeSeries) -> Result<bool> {
        self.post_success(
            "createTimeSeries",
            &serde_json::json!({ "time_series": series }),
        )
    }

    fn add_value_to_time_series(&self, value: &Interpretation) -> Result<bool> {
        self.post_success(
            "addValueToTimeSeries",
            &serde_json::json!({ "interpretation": value }),
        )
    }

    fn check_terms(&self, request: &CheckRequest<'_>) -> Result<Vec<Term>> {
        let response = self.post("check2", request)?;
        response.json().map_err(|e| Error::OperationFailed {
            operation: "check2".to_string(),
            cause: e.to_string(),
        })
    }

    fn populate_all(&self) -> Result<Vec<SpanDescriptor>> {
        let response = self.post("check3", &serde_json::json!({}))?;
        response.json().map_err(|e| Error::OperationFailed {
            operation: "check3".to_string(),
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let checker = HttpChecker::new("http://0.0.0.0:8080/api/");
        assert_eq!(checker.base_url, "http://0.0.0.0:8080/api");
    }
}
