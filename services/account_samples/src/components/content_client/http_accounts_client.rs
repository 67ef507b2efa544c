use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::models::account::{Account, AccountId, AccountsPage, AuthInfo};

use super::accounts_client::AccountsClient;
use super::authorization::authorization_headers;
use super::endpoint::ContentEndpoint;
use super::error::{ClientError, Result};

const TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

///
/// Accounts client speaking the Content API REST protocol.
///
pub struct HttpAccountsClient {
    client: Client,
    endpoint: ContentEndpoint,
}

impl HttpAccountsClient {
    pub fn new<S: AsRef<str>>(
        endpoint: ContentEndpoint,
        auth_token: S,
        application_name: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .default_headers(authorization_headers(auth_token)?)
            .user_agent(application_name)
            .timeout(TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self { client, endpoint })
    }

    fn account_path(merchant_id: AccountId, account_id: AccountId) -> String {
        format!("{}/accounts/{}", merchant_id, account_id)
    }

    fn accounts_path(merchant_id: AccountId) -> String {
        format!("{}/accounts", merchant_id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "Received response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status, &body))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl AccountsClient for HttpAccountsClient {
    #[instrument(skip_all, fields(%merchant_id, %account_id))]
    async fn get(&self, merchant_id: AccountId, account_id: AccountId) -> Result<Account> {
        let url = self
            .endpoint
            .join(&Self::account_path(merchant_id, account_id))?;

        self.execute(self.client.get(url)).await
    }

    #[instrument(skip_all, fields(%merchant_id, ?page_token, ?max_results))]
    async fn list_page(
        &self,
        merchant_id: AccountId,
        page_token: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<AccountsPage> {
        let url = self.endpoint.join(&Self::accounts_path(merchant_id))?;

        let mut request = self.client.get(url);
        if let Some(max_results) = max_results {
            request = request.query(&[("maxResults", max_results)]);
        }
        if let Some(page_token) = page_token {
            request = request.query(&[("pageToken", page_token)]);
        }

        self.execute(request).await
    }

    #[instrument(skip_all, fields(%merchant_id))]
    async fn insert(&self, merchant_id: AccountId, account: &Account) -> Result<Account> {
        let url = self.endpoint.join(&Self::accounts_path(merchant_id))?;

        self.execute(self.client.post(url).json(account)).await
    }

    #[instrument(skip_all, fields(%merchant_id, %account_id))]
    async fn patch(
        &self,
        merchant_id: AccountId,
        account_id: AccountId,
        account: &Account,
    ) -> Result<Account> {
        let url = self
            .endpoint
            .join(&Self::account_path(merchant_id, account_id))?;

        self.execute(self.client.patch(url).json(account)).await
    }

    #[instrument(skip_all, fields(%merchant_id, %account_id))]
    async fn delete(&self, merchant_id: AccountId, account_id: AccountId) -> Result<()> {
        let url = self
            .endpoint
            .join(&Self::account_path(merchant_id, account_id))?;

        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn authinfo(&self) -> Result<AuthInfo> {
        let url = self.endpoint.join("accounts/authinfo")?;

        self.execute(self.client.get(url)).await
    }
}
