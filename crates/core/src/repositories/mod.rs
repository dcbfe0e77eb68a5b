//! Settings storage services.
//!
//! One service per domain. All services are synchronous filesystem code with
//! no API concerns; authentication and HTTP belong to the binaries.

pub(crate) mod helpers;
pub mod organizations;
pub mod projects;
pub mod teams;
