//! Helmwright repository publishing
//!
//! Uploads packaged chart archives to remote chart repositories over HTTP.
//! The repository definitions themselves live in `helmwright-core`; this
//! crate only knows how to move bytes to them and how to report rejection.

pub mod error;
pub mod publish;

pub use error::{PublishError, Result};
pub use publish::Publisher;
