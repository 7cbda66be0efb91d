mod handler;
mod notification;
mod notification_content;

pub use handler::NotificationHandler;
pub use notification::Notification;
pub use notification_content::NotificationContent;
