// Platform implementations of the service interface

pub mod events;
pub mod fake;
pub mod host;

// Re-exports for shorter imports
pub use events::{PowerEventDispatcher, PowerTracker};
pub use fake::{FakePlatform, FakeState};
pub use host::HostPlatform;
