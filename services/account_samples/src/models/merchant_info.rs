use yaml_config_provider::{ConfigError, ConfigProvider};

use super::account::{AccountId, AdwordsId};

pub const DEFAULT_APPLICATION_NAME: &str = "account-samples";

///
/// Sample configuration read from `merchant-info.json`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantInfo {
    pub merchant_id: AccountId,
    pub application_name: String,
    /// Read for parity with the shared `merchant-info.json` template; only logged here.
    pub website_url: Option<String>,
    pub account_sample_user: Option<String>,
    pub account_sample_adwords_id: Option<AdwordsId>,
}

impl MerchantInfo {
    pub fn new(merchant_id: AccountId) -> Self {
        Self {
            merchant_id,
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            website_url: None,
            account_sample_user: None,
            account_sample_adwords_id: None,
        }
    }

    /// Empty strings and zero ids in the template file mean "not configured".
    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self, ConfigError> {
        let mut info = Self::new(AccountId(config.get_u64("merchantId")?));

        if let Some(application_name) = non_empty(config.get_opt_str("applicationName")?) {
            info.application_name = application_name;
        }

        info.website_url = non_empty(config.get_opt_str("websiteUrl")?);
        info.account_sample_user = non_empty(config.get_opt_str("accountSampleUser")?);
        info.account_sample_adwords_id = config
            .get_opt_u64("accountSampleAdwordsID")?
            .filter(|id| *id != 0)
            .map(AdwordsId);

        Ok(info)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
