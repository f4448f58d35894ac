//! # flowboard-auth
//!
//! Everything that decides who may do what with an access link.
//!
//! ## Modules
//!
//! - `credential`: link secret generation and Argon2id hashing
//! - `identity`: bearer token validation into a caller identity
//! - `authority`: owner/editor standing on boards and business units

pub mod authority;
pub mod credential;
pub mod identity;

pub use authority::{AuthorizationOracle, PgAuthority, Standing, StaticAuthority, require_manage};
pub use credential::{SecretGenerator, SecretHasher};
pub use identity::{Identity, IdentityProvider, JwtIdentityProvider};
