//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod builtin_url;
mod destination;
mod node_id;
mod social_platform;
mod text_key;

pub(crate) use builtin_url::builtin_url;
pub use destination::{AppStoreListing, Destination, ProviderToken};
pub use node_id::NodeId;
pub use social_platform::{MastodonInstance, SocialPlatform};
pub use text_key::TextKey;
