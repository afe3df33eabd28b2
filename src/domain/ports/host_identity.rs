//! HostIdentity port - who is embedding the links

/// Provides the host application's bundle/package identifier, used as the
/// default campaign token of App Store links.
pub trait HostIdentity {
    /// `None` when the identifier cannot be determined
    fn bundle_identifier(&self) -> Option<String>;
}

impl HostIdentity for str {
    fn bundle_identifier(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl HostIdentity for String {
    fn bundle_identifier(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: HostIdentity + ?Sized> HostIdentity for &T {
    fn bundle_identifier(&self) -> Option<String> {
        (**self).bundle_identifier()
    }
}
