use consent_manager_domain::Integrations;

/// Port telling the embedder which of its own destinations it may load.
pub trait ExternalDestinationNotifier: Send + Sync {
    fn notify(&self, integrations: &Integrations);
}
