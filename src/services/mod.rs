pub mod notifier;
pub mod poller;
pub mod practicum;
