#![allow(clippy::disallowed_methods)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;

use api::{DisplayState, EchoClient, EchoTransport, SubmitError, TransportError};
use echo_core::render_display;

/// Everything observable during a submit, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    State(DisplayState),
    Request(String),
}

type Log = Arc<Mutex<Vec<Event>>>;

fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

fn recorder(log: &Log) -> impl FnMut(DisplayState) + 'static {
    let log = Arc::clone(log);
    move |state| log.lock().unwrap().push(Event::State(state))
}

fn states(log: &Log) -> Vec<DisplayState> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|event| match event {
            Event::State(state) => Some(state.clone()),
            Event::Request(_) => None,
        })
        .collect()
}

fn requests(log: &Log) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|event| match event {
            Event::Request(body) => Some(body.clone()),
            Event::State(_) => None,
        })
        .collect()
}

/// Echoes the request body back, recording each call.
struct EchoingTransport {
    log: Log,
}

impl EchoTransport for EchoingTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Request(body.to_string()));
        Ok(body.to_string())
    }
}

/// Fails every request with a fixed connectivity error.
struct FailingTransport {
    log: Log,
}

impl EchoTransport for FailingTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Request(body.to_string()));
        Err(TransportError::Network("NetworkError".to_string()))
    }
}

/// Completes each request only when its gate is released, so tests
/// control completion order across overlapping submissions.
struct GatedTransport {
    log: Log,
    gates: Mutex<VecDeque<oneshot::Receiver<Result<String, TransportError>>>>,
}

impl EchoTransport for GatedTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Request(body.to_string()));
        let gate = self
            .gates
            .lock()
            .unwrap()
            .pop_front()
            .expect("no gate armed for this request");
        gate.await.expect("gate sender dropped")
    }
}

/// Never completes; exercises the configured deadline.
struct StalledTransport;

impl EchoTransport for StalledTransport {
    async fn send(&self, _body: &str) -> Result<String, TransportError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn blank_input_makes_no_request_and_no_state_change() {
    let log = new_log();
    let client = EchoClient::new(
        EchoingTransport {
            log: Arc::clone(&log),
        },
        None,
    );

    for input in ["", "   ", " \n\t "] {
        let result = client.submit(input, recorder(&log)).await;
        assert_eq!(result, Err(SubmitError::BlankInput));
    }

    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn loading_is_applied_before_the_request_is_dispatched() {
    let log = new_log();
    let client = EchoClient::new(
        EchoingTransport {
            log: Arc::clone(&log),
        },
        None,
    );

    client.submit("hello", recorder(&log)).await.unwrap();

    let events = log.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            Event::State(DisplayState::Loading),
            Event::Request("hello".to_string()),
            Event::State(DisplayState::Success("hello".to_string())),
        ]
    );
}

#[tokio::test]
async fn round_trip_renders_label_and_line_breaks() {
    let log = new_log();
    let client = EchoClient::new(
        EchoingTransport {
            log: Arc::clone(&log),
        },
        None,
    );

    client.submit("hello\nworld", recorder(&log)).await.unwrap();

    let last = states(&log).pop().unwrap();
    assert_eq!(
        render_display(&last),
        "<strong>Server Response:</strong><br>hello<br>world"
    );
}

#[tokio::test]
async fn transport_failure_renders_error_label() {
    let log = new_log();
    let client = EchoClient::new(
        FailingTransport {
            log: Arc::clone(&log),
        },
        None,
    );

    client.submit("hello", recorder(&log)).await.unwrap();

    let last = states(&log).pop().unwrap();
    assert_eq!(render_display(&last), "<strong>Error:</strong> NetworkError");
}

#[tokio::test]
async fn sequential_submits_render_identically() {
    let log = new_log();
    let client = EchoClient::new(
        EchoingTransport {
            log: Arc::clone(&log),
        },
        None,
    );

    client.submit("same text", recorder(&log)).await.unwrap();
    let first = render_display(&states(&log).pop().unwrap());

    client.submit("same text", recorder(&log)).await.unwrap();
    let second = render_display(&states(&log).pop().unwrap());

    assert_eq!(first, second);
}

#[tokio::test]
async fn input_is_trimmed_before_dispatch() {
    let log = new_log();
    let client = EchoClient::new(
        EchoingTransport {
            log: Arc::clone(&log),
        },
        None,
    );

    client.submit("  hi  ", recorder(&log)).await.unwrap();
    client.submit("hi", recorder(&log)).await.unwrap();

    assert_eq!(requests(&log), vec!["hi".to_string(), "hi".to_string()]);
}

#[tokio::test]
async fn later_submission_wins_over_stale_completion() {
    let log = new_log();
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    let client = Arc::new(EchoClient::new(
        GatedTransport {
            log: Arc::clone(&log),
            gates: Mutex::new(VecDeque::from([first_rx, second_rx])),
        },
        None,
    ));

    let first = tokio::spawn({
        let client = Arc::clone(&client);
        let apply = recorder(&log);
        async move { client.submit("first", apply).await }
    });
    // Let the first submit reach its gate before the second token is issued.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let second = tokio::spawn({
        let client = Arc::clone(&client);
        let apply = recorder(&log);
        async move { client.submit("second", apply).await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Complete the second submission first, then the stale first one.
    second_tx.send(Ok("second response".to_string())).unwrap();
    second.await.unwrap().unwrap();
    first_tx.send(Ok("first response".to_string())).unwrap();
    first.await.unwrap().unwrap();

    let observed = states(&log);
    assert_eq!(
        observed,
        vec![
            DisplayState::Loading,
            DisplayState::Loading,
            DisplayState::Success("second response".to_string()),
        ]
    );
}

#[tokio::test]
async fn configured_deadline_surfaces_timeout_error() {
    let log = new_log();
    let client = EchoClient::new(StalledTransport, Some(Duration::from_millis(50)));

    client.submit("hello", recorder(&log)).await.unwrap();

    let last = states(&log).pop().unwrap();
    match &last {
        DisplayState::Error(message) => assert!(message.contains("timed out")),
        other => panic!("expected Error state, got {other:?}"),
    }
}
