mod error;
mod notifications_repository;
mod notifications_repository_impl;

pub use error::*;
pub use notifications_repository::*;
pub use notifications_repository_impl::*;
