pub mod gate;
pub mod telegram;
pub mod types;

pub use gate::NotificationGate;
pub use telegram::TelegramNotifier;
pub use types::{Notifier, NotifierError};
