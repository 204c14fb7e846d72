mod change_listener;
mod change_notifier;
mod listener_id;
mod observer_registry;
mod observer_registry_inner;
mod subscription;

pub use change_listener::ChangeListener;
pub use change_notifier::{ChangeNotifier, NoopNotifier};
pub use listener_id::ListenerId;
pub use observer_registry::ObserverRegistry;
pub use observer_registry_inner::ListenerEntries;
pub use subscription::Subscription;
