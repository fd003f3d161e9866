//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose mailbox is served by a
//! scripted responder instead of a `ResourceActor`. Code under test cannot tell the
//! difference, which makes it easy to inject store failures or to prove that a call
//! never happens.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted replies) | Real rows |
//! | **Use Case** | Logic *around* the client | The table itself, or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//!
//! ## Testing Strategies
//!
//! 1. **Single actor**: spawn one `ResourceActor` and drive its client.
//! 2. **Actor with mocked dependencies**: a real actor whose `Context` holds clients
//!    produced by `MockClient`.
//! 3. **Full system**: every actor real.
//!
//! ## Example
//!
//! ```rust
//! use record_actor::mock::MockClient;
//! use record_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: u64 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u64; type Create = NoteCreate; type Update = NoteUpdate; type Context = ();
//!     fn from_create_params(id: u64, _: NoteCreate) -> Self { Self { id } }
//!     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), FrameworkError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate the store going away
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! A request that arrives with no matching expectation (wrong operation, wrong id, or
//! nothing scripted) panics the responder task; the caller then observes
//! [`FrameworkError::ActorDropped`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted request and the reply to send back.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with ordered expectation tracking.
///
/// ```ignore
/// let mut mock = MockClient::<Agent>::new();
/// mock.expect_get(AgentId(1)).return_ok(Some(agent));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get {
            id,
            response,
        })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List {
            response,
        })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update {
            id,
            response,
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete {
            id,
            response,
        })
    }

    /// Panics unless every scripted expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods. Finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the raw receiving end of its mailbox.
///
/// Useful when a test needs to inspect the payload a client sends, rather than only
/// script the reply.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next message and returns it if it is a `Create` request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    struct NoteUpdate;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u64;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Context = ();

        fn from_create_params(id: u64, params: NoteCreate) -> Self {
            Self {
                id,
                text: params.text,
            }
        }

        async fn on_update(&mut self, _update: NoteUpdate, _ctx: &()) -> Result<(), FrameworkError> {
            Ok(())
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(NoteCreate {
                    text: "first".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.text, "first");
        responder.send(Ok(note(1, "first"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(note(1, "first")));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Note>::new();

        mock.expect_create().return_ok(note(1, "first"));
        mock.expect_get(1).return_ok(Some(note(1, "first")));
        mock.expect_list().return_ok(vec![note(1, "first")]);
        mock.expect_update(1)
            .return_err(FrameworkError::NotFound("1".to_string()));
        mock.expect_delete(1).return_ok(());

        let client = mock.client();

        let created = client
            .create(NoteCreate {
                text: "first".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.get(1).await.unwrap(), Some(note(1, "first")));
        assert_eq!(client.list(None).await.unwrap().len(), 1);
        assert!(matches!(
            client.update(1, NoteUpdate).await,
            Err(FrameworkError::NotFound(_))
        ));
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));
    }
}
