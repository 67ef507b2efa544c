mod error;
mod multi_client;
mod presentation;
mod primary_account;
mod relationship;
mod transcript;

pub use error::SampleError;
pub use multi_client::multi_client_demo;
pub use primary_account::primary_account_demo;
pub use relationship::resolve_relationship;
