pub mod backend;
pub mod coordinator;
pub mod error;
pub mod machine;
pub mod notify;

pub use backend::RoleChangeBackend;
pub use coordinator::RoleUpdateCoordinator;
pub use error::{Result, RoleError};
pub use machine::{RowState, UserRow};
pub use notify::{Notification, NotificationKind};
