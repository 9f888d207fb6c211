//! Application services - orchestrate use cases.
//!
//! The [`Dispatcher`] decides *which* use case runs; the services below
//! carry them out against the driven ports.

pub mod app;
pub mod auth_service;
pub mod dispatcher;
pub mod publish_service;
pub mod scaffold_service;

pub use app::ElementApp;
pub use auth_service::AuthService;
pub use dispatcher::{DispatchSettings, Dispatcher, Outcome};
pub use publish_service::PublishService;
pub use scaffold_service::ScaffoldService;
