//! Integration tests for the client facade: configuration contracts, the
//! continuation convention, interceptor pairing, and transform chains,
//! exercised end-to-end through a scripted mock transport.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tandem_client::{
    Client, Error, InterceptorSet, LogOptions, Method, PreparedRequest, RequestConfig, Response,
    Transport, TransformSet,
};

#[derive(Debug)]
struct WireFault(String);

impl fmt::Display for WireFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for WireFault {}

enum Step {
    Respond(Response),
    Fault(String),
}

/// Transport that replays scripted outcomes and records every call.
#[derive(Clone, Default)]
struct ScriptedTransport {
    inner: Arc<ScriptedInner>,
}

#[derive(Default)]
struct ScriptedInner {
    script: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            inner: Arc::new(ScriptedInner {
                script: Mutex::new(steps.into()),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    fn calls(&self) -> Vec<PreparedRequest> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    type Error = WireFault;

    async fn send(&self, request: &PreparedRequest) -> Result<Response, WireFault> {
        self.inner.calls.lock().unwrap().push(request.clone());
        match self.inner.script.lock().unwrap().pop_front() {
            Some(Step::Respond(response)) => Ok(response),
            Some(Step::Fault(message)) => Err(WireFault(message)),
            None => Err(WireFault("script exhausted".to_string())),
        }
    }
}

fn respond(status: u16, body: Value) -> Step {
    Step::Respond(Response {
        status,
        url: "http://mock.test/".to_string(),
        headers: Vec::new(),
        body,
    })
}

fn fault(message: &str) -> Step {
    Step::Fault(message.to_string())
}

fn client(steps: Vec<Step>) -> (Client<ScriptedTransport>, ScriptedTransport) {
    let transport = ScriptedTransport::new(steps);
    let client = Client::from_transport(transport.clone(), RequestConfig::default())
        .set_base_url("http://mock.test")
        .unwrap();
    (client, transport)
}

#[tokio::test]
async fn get_resolves_a_successful_exchange() {
    let (client, transport) = client(vec![respond(200, json!({ "id": 1 }))]);

    let response = client.get(RequestConfig::new("people/1")).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "id": 1 }));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn each_request_method_fixes_its_verb() {
    let (client, transport) = client(vec![
        respond(200, Value::Null),
        respond(201, Value::Null),
        respond(200, Value::Null),
        respond(204, Value::Null),
    ]);

    client.get(RequestConfig::new("r")).await.unwrap();
    client.post(RequestConfig::new("r")).await.unwrap();
    client.put(RequestConfig::new("r")).await.unwrap();
    client.delete(RequestConfig::new("r")).await.unwrap();

    let methods: Vec<_> = transport.calls().iter().map(|c| c.method).collect();
    assert_eq!(methods, [Method::Get, Method::Post, Method::Put, Method::Delete]);
}

#[tokio::test]
async fn relative_targets_resolve_against_the_base_url() {
    let (client, transport) = client(vec![respond(200, Value::Null)]);

    client.get(RequestConfig::new("people/1")).await.unwrap();

    assert_eq!(transport.calls()[0].url, "http://mock.test/people/1");
}

#[tokio::test]
async fn default_headers_merge_under_per_call_overrides() {
    let transport = ScriptedTransport::new(vec![respond(200, Value::Null)]);
    let defaults = RequestConfig::default().header("Content-Type", "application/json");
    let client = Client::from_transport(transport.clone(), defaults)
        .set_base_url("http://mock.test")
        .unwrap();

    client
        .post(RequestConfig::new("people").header("content-type", "text/plain"))
        .await
        .unwrap();

    let headers = &transport.calls()[0].headers;
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].1, "text/plain");
}

#[test]
fn set_base_url_violates_contract_on_invalid_input() {
    let transport = ScriptedTransport::default();
    let result = Client::from_transport(transport, RequestConfig::default())
        .set_base_url("not a url");

    assert!(matches!(result.unwrap_err(), Error::InvalidUrl(_)));
}

#[tokio::test]
async fn relative_target_without_base_fails_before_any_call() {
    let transport = ScriptedTransport::new(vec![respond(200, Value::Null)]);
    let client = Client::from_transport(transport.clone(), RequestConfig::default());

    let err = client.get(RequestConfig::new("people/1")).await.unwrap_err();

    assert!(matches!(err, Error::Contract(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn continuation_receives_the_success() {
    let (client, _) = client(vec![respond(200, json!({ "id": 9 }))]);

    let id = client
        .get_with(RequestConfig::new("people/9"), |outcome| {
            outcome.unwrap().body["id"].as_u64()
        })
        .await;

    assert_eq!(id, Some(9));
}

#[tokio::test]
async fn continuation_swallows_the_failure() {
    let (client, _) = client(vec![fault("connection refused")]);

    // with a continuation the call settles to a value instead of failing
    let handled = client
        .get_with(RequestConfig::new("people/9"), |outcome| match outcome {
            Ok(_) => "ok".to_string(),
            Err(e) => format!("handled: {e}"),
        })
        .await;

    assert_eq!(handled, "handled: transport error: connection refused");
}

#[tokio::test]
async fn without_a_continuation_the_failure_propagates() {
    let (client, _) = client(vec![fault("connection refused")]);

    let err = client.get(RequestConfig::new("people/9")).await.unwrap_err();

    assert!(matches!(err, Error::Transport(m) if m == "connection refused"));
}

#[tokio::test]
async fn http_error_statuses_carry_the_full_response() {
    let (client, _) = client(vec![respond(404, json!({ "reason": "missing" }))]);

    let err = client.get(RequestConfig::new("people/404")).await.unwrap_err();

    match err {
        Error::Status { status, response } => {
            assert_eq!(status, 404);
            assert_eq!(response.body, json!({ "reason": "missing" }));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn request_interceptor_shapes_the_outbound_call() {
    let (client, transport) = client(vec![respond(200, Value::Null)]);
    let client = client.intercepts(
        InterceptorSet::new().on_request(|config| config.header("X-Trace", "1")),
    );

    client.get(RequestConfig::new("people")).await.unwrap();

    let headers = &transport.calls()[0].headers;
    assert!(headers.contains(&("X-Trace".to_string(), "1".to_string())));
}

#[tokio::test]
async fn response_only_set_leaves_errors_untouched() {
    let (client, _) = client(vec![fault("refused"), respond(200, json!(1))]);
    let client = client.intercepts(InterceptorSet::new().on_response(|mut rs| {
        rs.status = 299;
        Ok(rs)
    }));

    // the defaulted error side passes the failure through unchanged
    let err = client.get(RequestConfig::new("people")).await.unwrap_err();
    assert!(matches!(err, Error::Transport(m) if m == "refused"));

    // while the supplied response side still runs on success
    let response = client.get(RequestConfig::new("people")).await.unwrap();
    assert_eq!(response.status, 299);
}

#[tokio::test]
async fn error_only_set_leaves_responses_untouched() {
    let (client, _) = client(vec![respond(201, json!(1)), respond(500, Value::Null)]);
    let client = client.intercepts(InterceptorSet::new().on_error(|_| {
        Ok(Response {
            status: 204,
            url: String::new(),
            headers: Vec::new(),
            body: Value::Null,
        })
    }));

    // the defaulted response side passes the success through unchanged
    let response = client.get(RequestConfig::new("people")).await.unwrap();
    assert_eq!(response.status, 201);

    // while the supplied error side recovers the failure
    let recovered = client.get(RequestConfig::new("people")).await.unwrap();
    assert_eq!(recovered.status, 204);
}

#[tokio::test]
async fn reregistration_chains_pairs_in_order() {
    let (client, _) = client(vec![respond(200, json!([]))]);
    let client = client
        .intercepts(InterceptorSet::new().on_response(|mut rs| {
            rs.body.as_array_mut().unwrap().push(json!("first"));
            Ok(rs)
        }))
        .intercepts(InterceptorSet::new().on_response(|mut rs| {
            rs.body.as_array_mut().unwrap().push(json!("second"));
            Ok(rs)
        }));

    let response = client.get(RequestConfig::new("people")).await.unwrap();

    assert_eq!(response.body, json!(["first", "second"]));
}

#[tokio::test]
async fn a_failing_response_stage_fails_the_call() {
    let (client, _) = client(vec![respond(200, Value::Null)]);
    let client = client.intercepts(
        InterceptorSet::new()
            .on_response(|_| Err(Error::Contract("rejected by stage".to_string()))),
    );

    let err = client.get(RequestConfig::new("people")).await.unwrap_err();

    assert!(matches!(err, Error::Contract(m) if m == "rejected by stage"));
}

#[tokio::test]
async fn transform_chains_shape_both_bodies() {
    let (client, transport) = client(vec![respond(200, json!({ "id": 3 }))]);
    let client = client.transforms(
        TransformSet::new()
            .request(|_, _| json!({ "injected": true }))
            .response(|body| json!({ "wrapped": body })),
    );

    let response = client.post(RequestConfig::new("people")).await.unwrap();

    assert_eq!(transport.calls()[0].body, Some(json!({ "injected": true })));
    assert_eq!(response.body, json!({ "wrapped": { "id": 3 } }));
}

#[tokio::test]
async fn logging_transforms_leave_the_exchange_intact() {
    let (client, transport) = client(vec![respond(200, json!({ "id": 3 }))]);
    let client = client.logs(LogOptions::default());

    let response = client
        .post(RequestConfig::new("people").body(json!({ "name": "Terry Riley" })))
        .await
        .unwrap();

    assert_eq!(transport.calls()[0].body, Some(json!({ "name": "Terry Riley" })));
    assert_eq!(response.body, json!({ "id": 3 }));
}

#[tokio::test]
async fn responses_decode_into_typed_values() {
    #[derive(serde::Deserialize)]
    struct Person {
        name: String,
    }

    let (client, _) = client(vec![respond(200, json!({ "name": "Egon Schiele" }))]);

    let person: Person = client
        .get(RequestConfig::new("people/6"))
        .await
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(person.name, "Egon Schiele");
}
