use consent_manager_application::ports::ExternalDestinationNotifier;
use consent_manager_domain::Integrations;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::mpsc;
use tracing::debug;

type Listener = Arc<dyn Fn(&Integrations) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Broadcasts "load external destinations" notifications to the embedder.
///
/// Listeners run synchronously, in registration order, on the notifying thread.
#[derive(Clone, Default)]
pub struct LoadExternalDestinationsEmitter {
    registry: Arc<Mutex<Registry>>,
}

impl LoadExternalDestinationsEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Integrations) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Arc::new(listener);
        registry.listeners.push((id, listener));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Subscribes a channel, for consumers that drain notifications asynchronously.
    ///
    /// Once the receiver is dropped the listener does nothing, but it stays
    /// registered until the returned [`Subscription`] is unsubscribed.
    pub fn subscribe_channel(&self) -> (Subscription, mpsc::UnboundedReceiver<Integrations>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let closed = AtomicBool::new(false);
        let subscription = self.subscribe(move |integrations| {
            if closed.load(Ordering::Relaxed) {
                return;
            }
            if tx.send(integrations.clone()).is_err() {
                closed.store(true, Ordering::Relaxed);
                debug!("Notification receiver dropped; channel listener is now inert");
            }
        });
        (subscription, rx)
    }

    pub fn emit(&self, integrations: &Integrations) {
        // Snapshot so listeners may (un)subscribe without deadlocking.
        let listeners: Vec<Listener> = self
            .registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        debug!(
            listeners = listeners.len(),
            integrations = integrations.len(),
            "Emitting loadExternalDestinations"
        );

        for listener in listeners {
            listener(integrations);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .listeners
            .len()
    }
}

impl ExternalDestinationNotifier for LoadExternalDestinationsEmitter {
    fn notify(&self, integrations: &Integrations) {
        self.emit(integrations);
    }
}

impl std::fmt::Debug for LoadExternalDestinationsEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadExternalDestinationsEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle returned by [`LoadExternalDestinationsEmitter::subscribe`].
///
/// Dropping it leaves the listener registered; call [`Subscription::unsubscribe`]
/// to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
