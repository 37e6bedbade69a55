pub mod store;
pub mod token;

pub use store::SnapshotStore;
pub use token::{generate_token_default, session_cookie, token_from_cookie_header};
