use super::*;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Greeting {
    hello: String,
}

// =============================================================================
// link_headers
// =============================================================================

#[test]
fn headers_carry_bearer_and_content_type() {
    let headers = link_headers("secret-key").unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret-key");
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(CACHE_CONTROL).unwrap(), "no-cache");
}

#[test]
fn empty_key_omits_authorization() {
    let headers = link_headers("").unwrap();
    assert!(headers.get(AUTHORIZATION).is_none());
    assert!(headers.get(CONTENT_TYPE).is_some());
}

#[test]
fn key_with_newline_is_rejected() {
    assert!(matches!(link_headers("bad\nkey"), Err(CmsError::InvalidApiKey)));
}

// =============================================================================
// parse_response
// =============================================================================

#[test]
fn parse_plain_data() {
    let resp: GraphqlResponse<Greeting> = parse_response(200, r#"{"data":{"hello":"world"}}"#).unwrap();
    assert_eq!(resp.data.as_ref().unwrap().hello, "world");
    assert!(!resp.has_errors());
}

#[test]
fn parse_keeps_partial_data_with_errors() {
    let body = json!({
        "data": { "hello": "partial" },
        "errors": [{ "message": "Forbidden access", "locations": [{ "line": 2, "column": 3 }], "path": ["blogs", 0, "content"] }]
    })
    .to_string();
    let resp: GraphqlResponse<Greeting> = parse_response(200, &body).unwrap();
    assert_eq!(resp.data.as_ref().unwrap().hello, "partial");
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].locations[0].line, 2);
}

#[test]
fn parse_error_body_on_bad_request_is_not_a_failure() {
    let body = r#"{"errors":[{"message":"Syntax Error"}]}"#;
    let resp: GraphqlResponse<Greeting> = parse_response(400, body).unwrap();
    assert!(resp.data.is_none());
    assert_eq!(resp.errors[0].message, "Syntax Error");
}

#[test]
fn parse_non_graphql_error_page_is_response_error() {
    let result: Result<GraphqlResponse<Greeting>, _> = parse_response(502, "<html>Bad Gateway</html>");
    assert!(matches!(result, Err(CmsError::Response { status: 502, .. })));
}

#[test]
fn parse_garbage_on_ok_is_parse_error() {
    let result: Result<GraphqlResponse<Greeting>, _> = parse_response(200, "not json");
    assert!(matches!(result, Err(CmsError::Parse(_))));
}

// =============================================================================
// describe_graphql_error
// =============================================================================

#[test]
fn describe_includes_message_location_and_path() {
    let err = GraphqlError {
        message: "boom".into(),
        locations: vec![SourceLocation { line: 1, column: 7 }],
        path: vec![json!("blogs"), json!(0)],
    };
    assert_eq!(describe_graphql_error(&err), "[GraphQL error]: Message: boom, Location: 1:7, Path: blogs.0");
}

#[test]
fn request_serializes_operation_name() {
    let req = GraphqlRequest { operation_name: "Op", query: "query Op { x }", variables: json!({}) };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["operationName"], "Op");
    assert_eq!(value["query"], "query Op { x }");
}
