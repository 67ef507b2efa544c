use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use reqwest::StatusCode;

use crate::models::account::{Account, AccountId, AccountIdentifier, AccountsPage, AuthInfo};

use super::accounts_client::AccountsClient;
use super::error::{ClientError, Result};

const ACCOUNT_KIND: &str = "content#account";

#[derive(Default)]
struct State {
    accounts: BTreeMap<AccountId, Account>,
    sub_accounts: BTreeMap<AccountId, Vec<AccountId>>,
    auth_info: AuthInfo,
    failing: HashMap<&'static str, usize>,
    seen: HashMap<&'static str, usize>,
    next_id: u64,
}

///
/// Accounts service kept in memory, with the API's merge-on-patch behaviour.
/// Counts every call it receives.
///
pub struct InMemoryAccountsClient {
    state: Mutex<State>,
    calls: AtomicUsize,
    page_size: usize,
}

impl InMemoryAccountsClient {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1_000_000,
                ..State::default()
            }),
            calls: AtomicUsize::new(0),
            page_size: 250,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn add_account<S: Into<String>>(&self, id: AccountId, name: S) -> AccountId {
        let mut account = Account::with_name(name);
        account.id = Some(id);
        account.kind = Some(ACCOUNT_KIND.to_string());

        self.state.lock().unwrap().accounts.insert(id, account);
        id
    }

    pub fn add_aggregator(&self, id: AccountId) -> AccountId {
        self.add_account(id, format!("aggregator {}", id));
        self.state
            .lock()
            .unwrap()
            .sub_accounts
            .entry(id)
            .or_default();
        id
    }

    pub fn add_sub_account<S: Into<String>>(
        &self,
        aggregator_id: AccountId,
        id: AccountId,
        name: S,
    ) -> AccountId {
        self.add_account(id, name);
        self.state
            .lock()
            .unwrap()
            .sub_accounts
            .entry(aggregator_id)
            .or_default()
            .push(id);
        id
    }

    pub fn update_account<F: FnOnce(&mut Account)>(&self, id: AccountId, update: F) {
        let mut state = self.state.lock().unwrap();
        if let Some(account) = state.accounts.get_mut(&id) {
            update(account);
        }
    }

    pub fn set_auth_info(&self, account_identifiers: Vec<AccountIdentifier>) {
        self.state.lock().unwrap().auth_info = AuthInfo {
            account_identifiers,
        };
    }

    /// Makes every later call of `operation` fail with a server error.
    pub fn fail_on(&self, operation: &'static str) {
        self.fail_from(operation, 1);
    }

    /// Lets the first `nth - 1` calls of `operation` through, then fails the rest.
    pub fn fail_from(&self, operation: &'static str, nth: usize) {
        self.state.lock().unwrap().failing.insert(operation, nth);
    }

    pub fn account(&self, id: AccountId) -> Option<Account> {
        self.state.lock().unwrap().accounts.get(&id).cloned()
    }

    pub fn sub_account_ids(&self, aggregator_id: AccountId) -> Vec<AccountId> {
        self.state
            .lock()
            .unwrap()
            .sub_accounts
            .get(&aggregator_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self, operation: &'static str) -> Result<std::sync::MutexGuard<'_, State>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();

        let seen = state.seen.entry(operation).or_default();
        *seen += 1;
        let seen = *seen;

        if state.failing.get(operation).map_or(false, |nth| seen >= *nth) {
            return Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{} failed", operation),
            ));
        }

        Ok(state)
    }
}

fn api_error(status: StatusCode, message: String) -> ClientError {
    ClientError::Api {
        status,
        message,
        details: Vec::new(),
    }
}

fn forbidden(merchant_id: AccountId, account_id: AccountId) -> ClientError {
    api_error(
        StatusCode::FORBIDDEN,
        format!("Account {} cannot access account {}", merchant_id, account_id),
    )
}

impl State {
    fn can_access(&self, merchant_id: AccountId, account_id: AccountId) -> bool {
        merchant_id == account_id
            || self
                .sub_accounts
                .get(&merchant_id)
                .map_or(false, |children| children.contains(&account_id))
    }
}

fn merge(target: &mut Account, patch: &Account) {
    fn set<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
        if value.is_some() {
            *target = value.clone();
        }
    }

    set(&mut target.name, &patch.name);
    set(&mut target.website_url, &patch.website_url);
    set(&mut target.adult_content, &patch.adult_content);
    set(&mut target.seller_id, &patch.seller_id);
    set(&mut target.reviews_url, &patch.reviews_url);
    set(&mut target.users, &patch.users);
    set(&mut target.adwords_links, &patch.adwords_links);
}

#[async_trait::async_trait]
impl AccountsClient for InMemoryAccountsClient {
    async fn get(&self, merchant_id: AccountId, account_id: AccountId) -> Result<Account> {
        let state = self.begin("get")?;

        match state.accounts.get(&account_id) {
            Some(account) if state.can_access(merchant_id, account_id) => Ok(account.clone()),
            _ => Err(forbidden(merchant_id, account_id)),
        }
    }

    async fn list_page(
        &self,
        merchant_id: AccountId,
        page_token: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<AccountsPage> {
        let state = self.begin("list")?;

        let children = state.sub_accounts.get(&merchant_id).ok_or_else(|| {
            api_error(
                StatusCode::FORBIDDEN,
                format!("Account {} is not a multi-client account", merchant_id),
            )
        })?;

        let offset: usize = page_token
            .map(|token| token.parse::<usize>())
            .transpose()
            .map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid page token".to_string()))?
            .unwrap_or(0);
        let page_size = max_results.map_or(self.page_size, |n| n as usize);

        let resources: Vec<_> = children
            .iter()
            .skip(offset)
            .take(page_size)
            .filter_map(|id| state.accounts.get(id).cloned())
            .collect();

        let next = offset + page_size;
        let next_page_token = (next < children.len()).then(|| next.to_string());

        Ok(AccountsPage {
            resources,
            next_page_token,
        })
    }

    async fn insert(&self, merchant_id: AccountId, account: &Account) -> Result<Account> {
        let mut state = self.begin("insert")?;

        if !state.sub_accounts.contains_key(&merchant_id) {
            return Err(forbidden(merchant_id, merchant_id));
        }

        state.next_id += 1;
        let id = AccountId(state.next_id);

        let mut created = Account {
            id: Some(id),
            kind: Some(ACCOUNT_KIND.to_string()),
            ..Account::default()
        };
        merge(&mut created, account);

        state.accounts.insert(id, created.clone());
        if let Some(children) = state.sub_accounts.get_mut(&merchant_id) {
            children.push(id);
        }

        Ok(created)
    }

    async fn patch(
        &self,
        merchant_id: AccountId,
        account_id: AccountId,
        account: &Account,
    ) -> Result<Account> {
        let mut state = self.begin("patch")?;

        if !state.can_access(merchant_id, account_id) {
            return Err(forbidden(merchant_id, account_id));
        }

        let target = state
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| forbidden(merchant_id, account_id))?;
        merge(target, account);

        Ok(target.clone())
    }

    async fn delete(&self, merchant_id: AccountId, account_id: AccountId) -> Result<()> {
        let mut state = self.begin("delete")?;

        let children = state
            .sub_accounts
            .get_mut(&merchant_id)
            .filter(|children| children.contains(&account_id))
            .ok_or_else(|| forbidden(merchant_id, account_id))?;
        children.retain(|id| *id != account_id);
        state.accounts.remove(&account_id);

        Ok(())
    }

    async fn authinfo(&self) -> Result<AuthInfo> {
        let state = self.begin("authinfo")?;
        Ok(state.auth_info.clone())
    }
}
