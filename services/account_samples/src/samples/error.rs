use thiserror::Error;

use crate::components::content_client::ClientError;
use crate::models::account::AccountId;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Currently authenticated user does not have access to Merchant Center {merchant_id}")]
    AccessDenied {
        merchant_id: AccountId,
        #[source]
        source: ClientError,
    },

    #[error("{step} failed")]
    Call {
        step: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("{step} returned an account without an id")]
    MissingAccountId { step: &'static str },

    #[error("This operation can only be run on multi-client accounts")]
    NotMultiClient,

    #[error("This operation cannot be run on multi-client accounts")]
    MultiClient,

    #[error("Failed to write sample output")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

pub trait CallContext<T> {
    fn step(self, step: &'static str) -> Result<T, SampleError>;
}

impl<T> CallContext<T> for Result<T, ClientError> {
    fn step(self, step: &'static str) -> Result<T, SampleError> {
        self.map_err(|source| SampleError::Call { step, source })
    }
}
