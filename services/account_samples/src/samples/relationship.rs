use std::fmt;

use tracing::{info, warn};

use crate::components::content_client::AccountsClient;
use crate::models::account::{AccountId, AuthInfo};

use super::error::{CallContext, SampleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRelationship {
    /// Listed as a merchant in the caller's auth info.
    Standalone,
    /// Listed as an aggregator in the caller's auth info.
    MultiClient,
    /// Reachable, but only through an aggregator the caller manages.
    SubAccount,
}

impl AccountRelationship {
    pub fn is_multi_client(self) -> bool {
        self == AccountRelationship::MultiClient
    }

    pub fn require_multi_client(self) -> Result<(), SampleError> {
        match self {
            AccountRelationship::MultiClient => Ok(()),
            _ => Err(SampleError::NotMultiClient),
        }
    }

    pub fn require_not_multi_client(self) -> Result<(), SampleError> {
        match self {
            AccountRelationship::MultiClient => Err(SampleError::MultiClient),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for AccountRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            AccountRelationship::Standalone => "standalone account",
            AccountRelationship::MultiClient => "multi-client account",
            AccountRelationship::SubAccount => "sub-account of a multi-client account",
        };

        f.write_str(description)
    }
}

///
/// Classifies `target` from auth info alone. `None` means the account is not
/// listed and needs an existence check.
///
pub fn classify(target: AccountId, auth_info: &AuthInfo) -> Option<AccountRelationship> {
    auth_info.account_identifiers.iter().find_map(|identifier| {
        if identifier.merchant_id == Some(target) {
            Some(AccountRelationship::Standalone)
        } else if identifier.aggregator_id == Some(target) {
            Some(AccountRelationship::MultiClient)
        } else {
            None
        }
    })
}

pub async fn resolve_relationship<C: AccountsClient + ?Sized>(
    client: &C,
    target: AccountId,
) -> Result<AccountRelationship, SampleError> {
    info!(%target, "Getting authenticated account information");
    let auth_info = client
        .authinfo()
        .await
        .step("Getting authenticated account information")?;

    if let Some(relationship) = classify(target, &auth_info) {
        return Ok(relationship);
    }

    // Not listed: either a sub-account of a listed aggregator, or not accessible at all.
    match client.get(target, target).await {
        Ok(_) => Ok(AccountRelationship::SubAccount),
        Err(source) => {
            warn!(%target, status = ?source.status(), "Existence check failed");
            Err(SampleError::AccessDenied {
                merchant_id: target,
                source,
            })
        }
    }
}
