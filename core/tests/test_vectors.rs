//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or an expected error status and
//! message. Comparing parsed JSON (not raw strings) avoids false negatives
//! from field-ordering differences.

use todo_board_core::{
    ApiError, Filter, HttpMethod, HttpRequest, HttpResponse, Stats, TodoClient, TodoPayload,
    TodoRecord,
};

const BASE_URL: &str = "http://localhost:5000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

/// Check method and path; a body, when the vector has one, is compared as JSON.
fn assert_request(name: &str, req: &HttpRequest, case: &serde_json::Value) {
    let expected = &case["expected_request"];
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("body") {
        Some(body) => {
            let expected_headers: Vec<(String, String)> = expected["headers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");

            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

/// Compare a parse outcome with `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, result: Result<T, ApiError>, case: &serde_json::Value)
where
    T: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        assert_eq!(
            err.status().map(u64::from),
            expected_error["status"].as_u64(),
            "{name}: status"
        );
        // A null message means the body carried no `error` field.
        assert_eq!(
            err.rejection_message(),
            expected_error["message"].as_str(),
            "{name}: message"
        );
    } else {
        let actual = result.unwrap();
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(actual, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        let filter = Filter::from_path_segment(case["input_filter"].as_str().unwrap()).unwrap();

        let req = c.build_list(filter);
        assert_request(name, &req, &case);

        let result = c.parse_list(simulated_response(&case));
        assert_outcome::<Vec<TodoRecord>>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: TodoPayload = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create(&input).unwrap();
        assert_request(name, &req, &case);

        let result = c.parse_create(simulated_response(&case));
        assert_outcome::<TodoRecord>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let input: TodoPayload = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update(id, &input).unwrap();
        assert_request(name, &req, &case);

        let result = c.parse_update(simulated_response(&case));
        assert_outcome::<TodoRecord>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();

        let req = c.build_remove(id);
        assert_request(name, &req, &case);

        let result = c.parse_remove(simulated_response(&case));
        if case.get("expected_error").is_some() {
            assert_outcome::<()>(name, result, &case);
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[test]
fn stats_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/stats.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_stats();
        assert_request(name, &req, &case);

        let result = c.parse_stats(simulated_response(&case));
        assert_outcome::<Stats>(name, result, &case);
    }
}
