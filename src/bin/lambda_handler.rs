//! AWS Lambda handler for amortization requests
//!
//! Accepts a loan request as the JSON body of a Lambda Function URL call and
//! returns the summary, breakdown and yearly table, plus the full monthly
//! schedule when `include_schedule` is set.
//!
//! Example body: `{"principal": 400000, "annual_rate_percent": 6.5, "term_years": 30}`

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use mortgage_calculator::{LoanReport, LoanRequest, LoanTerms};

/// Request body
#[derive(Debug, Default, Deserialize)]
pub struct AmortizationRequest {
    #[serde(flatten)]
    pub loan: LoanRequest,

    /// Include every monthly row in the response
    #[serde(default)]
    pub include_schedule: bool,
}

/// Build the status code and JSON body for a request body
fn respond(body: Option<&str>) -> (u16, Value) {
    let request: AmortizationRequest = match body.map(str::trim).filter(|b| !b.is_empty()) {
        Some(text) => match serde_json::from_str(text) {
            Ok(request) => request,
            Err(e) => {
                warn!("rejecting malformed request: {}", e);
                return (400, json!({ "error": format!("invalid request body: {}", e) }));
            }
        },
        None => AmortizationRequest::default(),
    };

    let terms = match LoanTerms::try_from(request.loan) {
        Ok(terms) => terms,
        Err(e) => {
            warn!("rejecting loan terms: {}", e);
            return (400, json!({ "error": e.to_string() }));
        }
    };

    info!(
        "amortizing principal={} rate={}% term={}y",
        terms.principal, terms.annual_rate_percent, terms.term_years
    );

    let amortization = terms.amortize();
    let report = LoanReport::build(&terms, &amortization, request.include_schedule);

    match serde_json::to_value(&report) {
        Ok(value) => (200, value),
        Err(e) => (500, json!({ "error": e.to_string() })),
    }
}

async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let request = event.payload;

    if request.is_base64_encoded {
        return Ok(json_response(
            415,
            &json!({ "error": "base64-encoded bodies are not supported; send application/json" }),
        ));
    }

    let (status, body) = respond(request.body.as_deref());
    Ok(json_response(status, &body))
}

/// Function URL response envelope
fn json_response(status: u16, body: &Value) -> Value {
    json!({
        "statusCode": status,
        "headers": { "content-type": "application/json" },
        "body": body.to_string(),
        "isBase64Encoded": false,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let (status, body) = respond(None);
        assert_eq!(status, 200);
        assert_eq!(body["summary"]["payment_count"], 360);
        assert!(body.get("schedule").is_none());
    }

    #[test]
    fn test_schedule_included_on_request() {
        let (status, body) = respond(Some(
            r#"{"principal": 100000, "annual_rate_percent": 0, "term_years": 10, "include_schedule": true}"#,
        ));
        assert_eq!(status, 200);
        assert_eq!(body["schedule"].as_array().map(|s| s.len()), Some(120));
        assert_eq!(body["yearly"].as_array().map(|s| s.len()), Some(10));
    }

    #[test]
    fn test_invalid_terms_rejected() {
        let (status, body) = respond(Some(r#"{"term_years": 0}"#));
        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().contains("term"));

        let (status, _) = respond(Some("not json"));
        assert_eq!(status, 400);
    }

    #[test]
    fn test_response_envelope() {
        let envelope = json_response(200, &json!({ "ok": true }));
        assert_eq!(envelope["statusCode"], 200);
        assert_eq!(envelope["body"], "{\"ok\":true}");
    }
}
