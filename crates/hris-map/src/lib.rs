pub mod backend;
pub mod configurator;
pub mod error;
pub mod policy;

pub use backend::WizardBackend;
pub use configurator::{MappingConfigurator, Violation};
pub use error::{ConfigError, Result};
pub use policy::{FilePolicy, IdentityFields, NotificationPolicy};
