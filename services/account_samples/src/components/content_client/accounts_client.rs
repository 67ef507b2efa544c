use crate::models::account::{Account, AccountId, AccountsPage, AuthInfo};

use super::error::{ClientError, Result};

///
/// Accounts resource of the Content API.
///
/// `merchant_id` is the account issuing the call: the aggregator for
/// sub-account operations, or the account itself otherwise.
///
#[async_trait::async_trait]
pub trait AccountsClient: Sync + Send + 'static {
    async fn get(&self, merchant_id: AccountId, account_id: AccountId) -> Result<Account>;

    async fn list_page(
        &self,
        merchant_id: AccountId,
        page_token: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<AccountsPage>;

    async fn insert(&self, merchant_id: AccountId, account: &Account) -> Result<Account>;

    /// Merge semantics: only fields present in `account` are changed.
    async fn patch(
        &self,
        merchant_id: AccountId,
        account_id: AccountId,
        account: &Account,
    ) -> Result<Account>;

    async fn delete(&self, merchant_id: AccountId, account_id: AccountId) -> Result<()>;

    async fn authinfo(&self) -> Result<AuthInfo>;
}

///
/// Walks every page of the sub-account listing of `merchant_id`, invoking
/// `on_page` once per page in the order the server returns them.
///
/// The first error, from the client or from `on_page`, ends the walk.
///
pub async fn for_each_page<C, F, E>(
    client: &C,
    merchant_id: AccountId,
    max_results: Option<u32>,
    mut on_page: F,
) -> std::result::Result<(), E>
where
    C: AccountsClient + ?Sized,
    F: FnMut(Vec<Account>) -> std::result::Result<(), E>,
    E: From<ClientError>,
{
    let mut page_token: Option<String> = None;

    loop {
        let page = client
            .list_page(merchant_id, page_token.as_deref(), max_results)
            .await?;

        on_page(page.resources)?;

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(())
}
