//! Authentication primitives shared by the services and the HTTP layer.

pub mod claims;
pub mod crypto;
pub mod permissions;

pub use claims::SessionClaims;
pub use crypto::{AuthCrypto, AuthCryptoError};
pub use permissions::SessionPermissions;
