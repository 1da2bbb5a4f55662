// tests for the turn router, against a recording test double

use aidvice::{Complete, DISCLAIMER, Error, Message, Role, Router, SYSTEM_PROMPT};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records every outbound request instead of talking to a provider.
struct RecordingClient {
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, Vec<Message>)>>,
    reply: String,
}

impl RecordingClient {
    fn new(reply: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<(String, Vec<Message>)> {
        self.requests.lock().unwrap().clone()
    }
}

// implemented on the reference so the test keeps access after Router::new
impl Complete for &RecordingClient {
    async fn complete(&self, system: &str, messages: &[Message]) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((system.to_string(), messages.to_vec()));
        Ok(self.reply.clone())
    }
}

struct FailingClient;

impl Complete for FailingClient {
    async fn complete(&self, _system: &str, _messages: &[Message]) -> Result<String, Error> {
        Err(Error::Api("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_screened_message_gets_disclaimer_without_calls() {
    let client = RecordingClient::new("should never be used");
    let router = Router::new(&client);

    let reply = router.respond("I feel anxious about my exam", &[]).await;

    assert_eq!(reply, DISCLAIMER);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_disclaimer_is_stable_across_calls() {
    let client = RecordingClient::new("unused");
    let router = Router::new(&client);

    let first = router.respond("I need therapy", &[]).await;
    let second = router.respond("I need therapy", &[]).await;

    assert_eq!(first, second);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_plain_message_makes_exactly_one_call() {
    let client = RecordingClient::new("stay curious and pace yourself");
    let router = Router::new(&client);

    let reply = router.respond("How can I stay motivated?", &[]).await;

    assert_eq!(reply, "stay curious and pace yourself");
    assert_eq!(client.call_count(), 1);

    let requests = client.requests();
    let (system, messages) = &requests[0];
    assert_eq!(system, SYSTEM_PROMPT);
    assert_eq!(messages.as_slice(), &[Message::user("How can I stay motivated?")]);
}

#[tokio::test]
async fn test_history_order_is_preserved() {
    let client = RecordingClient::new("one thing at a time");
    let router = Router::new(&client);

    let history = vec![Message::user("hi"), Message::assistant("hello")];
    router.respond("tips for stress", &history).await;

    let requests = client.requests();
    let (_, messages) = &requests[0];
    assert_eq!(
        messages.as_slice(),
        &[
            Message::user("hi"),
            Message::assistant("hello"),
            Message::user("tips for stress"),
        ]
    );
}

#[tokio::test]
async fn test_system_history_entries_are_excluded() {
    let client = RecordingClient::new("ok");
    let router = Router::new(&client);

    let history = vec![
        Message {
            role: Role::System,
            content: "smuggled instructions".to_string(),
        },
        Message::user("hi"),
    ];
    router.respond("good morning", &history).await;

    let requests = client.requests();
    let (_, messages) = &requests[0];
    assert_eq!(
        messages.as_slice(),
        &[Message::user("hi"), Message::user("good morning")]
    );
}

#[tokio::test]
async fn test_provider_failure_becomes_chat_text() {
    let router = Router::new(FailingClient);

    let reply = router.respond("hello there", &[]).await;

    assert!(reply.contains("An error occurred"));
    assert!(reply.contains("connection refused"));
}
