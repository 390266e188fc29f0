//!
//! Bearer tokens for outgoing requests.
//!
//! Every request made on behalf of a signed-in user needs a token that is
//! still valid at the moment it is sent, so tokens are never cached by callers.
//! Instead they ask [TokenProvider] for a fresh one before each attempt.
//!

mod dto;
pub mod error;
mod jwt_token_provider;
mod token_provider;
pub mod util;

pub use dto::Claims;
pub use jwt_token_provider::{JwtTokenProvider, JwtTokenProviderConfig};
pub use token_provider::TokenProvider;
