// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for save results and degraded storage.
//!
//! - Success and info toasts disappear after 3s, warnings after 5s, errors on dismiss.
//! - At most 3 toasts are visible; the rest wait in a queue.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-files-added"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
