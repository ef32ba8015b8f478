pub mod claims;
pub mod service_account;

pub use claims::AssertionClaims;
pub use service_account::{ServiceAccountKey, TokenProvider, SHEETS_SCOPES};
