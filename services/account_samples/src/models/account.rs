use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountId(#[serde(with = "super::uint64")] pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, PartialEq, Eq)]
pub struct AdwordsId(#[serde(with = "super::uint64")] pub u64);

impl fmt::Display for AdwordsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

///
/// Merchant account record.
///
/// Every field is optional and absent fields are never serialized: a record
/// sent as a patch only touches the fields that are set.
///
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<AccountUser>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adwords_links: Option<Vec<AccountAdwordsLink>>,
}

impl Account {
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn users(&self) -> &[AccountUser] {
        self.users.as_deref().unwrap_or_default()
    }

    pub fn adwords_links(&self) -> &[AccountAdwordsLink] {
        self.adwords_links.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
    #[serde(default)]
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_manager: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_manager: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_analyst: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager: Option<bool>,
}

impl AccountUser {
    pub fn new<S: Into<String>>(email_address: S, admin: bool) -> Self {
        Self {
            email_address: email_address.into(),
            admin: Some(admin),
            ..Self::default()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin.unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountAdwordsLink {
    pub adwords_id: AdwordsId,
    #[serde(default)]
    pub status: String,
}

impl AccountAdwordsLink {
    pub const STATUS_ACTIVE: &'static str = "active";

    pub fn active(adwords_id: AdwordsId) -> Self {
        Self {
            adwords_id,
            status: Self::STATUS_ACTIVE.to_string(),
        }
    }
}

///
/// Account the caller may act as: either directly (`merchant_id`) or as the
/// aggregator of its sub-accounts (`aggregator_id`).
///
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator_id: Option<AccountId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    #[serde(default)]
    pub account_identifiers: Vec<AccountIdentifier>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountsPage {
    #[serde(default)]
    pub resources: Vec<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}
