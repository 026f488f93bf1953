/// Port for a full reload of the host page.
pub trait PageReloader: Send + Sync {
    fn reload(&self);
}
