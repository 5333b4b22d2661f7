use std::sync::Arc;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{trace, warn};

/// Shared handle to a subscribed handler. Identity is the `Arc` allocation.
pub type Handler<E> = Arc<dyn EventHandler<E>>;

/// Synchronous publish/subscribe bus for one event type
pub struct EventBus<E> {
    handlers: Arc<Mutex<Vec<Handler<E>>>>,
}

/// Handler trait for event handlers
pub trait EventHandler<E>: Send + Sync {
    fn handle(&self, event: &E) -> anyhow::Result<()>;
}

/// Errors raised by the event bus
#[derive(Debug, Error)]
pub enum EventError {
    #[error("handler was never subscribed to this event bus")]
    NotSubscribed,

    #[error("{} event handler(s) failed: {}", .0.len(), .0.join("; "))]
    HandlerFailures(Vec<String>),
}

impl<E> EventBus<E> {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a handler. The same handler may be subscribed more than once.
    pub fn subscribe(&self, handler: Handler<E>) {
        self.handlers.lock().push(handler);
    }

    /// Remove the first subscription of exactly this handler
    pub fn unsubscribe(&self, handler: &Handler<E>) -> Result<(), EventError> {
        let mut handlers = self.handlers.lock();
        let index = handlers
            .iter()
            .position(|h| same_handler(h, handler))
            .ok_or(EventError::NotSubscribed)?;
        handlers.remove(index);
        Ok(())
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().len()
    }

    /// Publish an event to every handler subscribed when the call started.
    ///
    /// The lock is released before any handler runs, so handlers may
    /// subscribe or unsubscribe; those changes apply from the next publish.
    /// A failing handler does not stop the others, failures are reported
    /// together once every handler has run.
    pub fn publish(&self, event: &E) -> Result<(), EventError> {
        let snapshot: Vec<Handler<E>> = self.handlers.lock().clone();
        trace!(handlers = snapshot.len(), "publishing event");

        let mut failures = Vec::new();
        for handler in &snapshot {
            if let Err(err) = handler.handle(event) {
                warn!("event handler failed: {err:#}");
                failures.push(format!("{err:#}"));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EventError::HandlerFailures(failures))
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn same_handler<E>(a: &Handler<E>, b: &Handler<E>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F, E> {
    handler: F,
    _phantom: std::marker::PhantomData<fn(&E)>,
}

impl<F, E> EventHandler<E> for ClosureEventHandler<F, E>
where
    F: Fn(&E) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        (self.handler)(event)
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<E, F>(f: F) -> Handler<E>
where
    E: 'static,
    F: Fn(&E) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(ClosureEventHandler {
        handler: f,
        _phantom: std::marker::PhantomData,
    })
}
