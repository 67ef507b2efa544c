mod accounts_client;
mod authorization;
mod endpoint;
mod error;
mod http_accounts_client;
#[cfg(test)]
pub mod in_memory_client;

pub use accounts_client::{for_each_page, AccountsClient};
pub use endpoint::ContentEndpoint;
pub use error::ClientError;
pub use http_accounts_client::HttpAccountsClient;
