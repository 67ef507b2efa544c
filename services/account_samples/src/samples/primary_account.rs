use std::io::Write;

use tracing::info;

use crate::components::content_client::AccountsClient;
use crate::models::account::{Account, AccountAdwordsLink, AccountUser, AdwordsId};
use crate::models::merchant_info::MerchantInfo;

use super::error::{CallContext, SampleError};
use super::presentation::print_account;
use super::transcript::Transcript;

///
/// Fetches the configured account, adds the sample user and/or AdWords link,
/// then patches them away again.
///
/// Works on standalone and multi-client accounts alike. Output failures are
/// reported only after the revert has run.
///
pub async fn primary_account_demo<C, W>(
    client: &C,
    config: &MerchantInfo,
    out: &mut W,
) -> Result<(), SampleError>
where
    C: AccountsClient + ?Sized,
    W: Write + ?Sized,
{
    let mut transcript = Transcript::new(out);
    add_and_revert(client, config, &mut transcript).await?;
    transcript.finish()
}

async fn add_and_revert<C, W>(
    client: &C,
    config: &MerchantInfo,
    out: &mut W,
) -> Result<(), SampleError>
where
    C: AccountsClient + ?Sized,
    W: Write + ?Sized,
{
    let merchant_id = config.merchant_id;
    let sample_user = config.account_sample_user.as_deref();
    let sample_link = config.account_sample_adwords_id;

    writeln!(out, "Getting account information.")?;
    let mut account = client
        .get(merchant_id, merchant_id)
        .await
        .step("Getting account information")?;
    print_account(out, &account)?;

    if let Some(email) = sample_user {
        writeln!(out, "Adding user {}.", email)?;
        account
            .users
            .get_or_insert_with(Vec::new)
            .push(AccountUser::new(email, false));
    }

    if let Some(adwords_id) = sample_link {
        writeln!(out, "Linking Adwords ID {}.", adwords_id)?;
        account
            .adwords_links
            .get_or_insert_with(Vec::new)
            .push(AccountAdwordsLink::active(adwords_id));
    }

    if sample_user.is_none() && sample_link.is_none() {
        info!("No account changes available in sample configuration");
        return Ok(());
    }

    writeln!(out, "Patching account information.")?;
    let account = client
        .patch(merchant_id, merchant_id, &account)
        .await
        .step("Patching account information")?;
    print_account(out, &account)?;

    writeln!(out, "Rolling back changes.")?;
    if let Some(email) = sample_user {
        writeln!(out, "Removing user {}.", email)?;
    }
    if let Some(adwords_id) = sample_link {
        writeln!(out, "Removing link to Adwords ID {}.", adwords_id)?;
    }
    let revert = removal_patch(&account, sample_user, sample_link);

    writeln!(out, "Reverting account information.")?;
    let account = client
        .patch(merchant_id, merchant_id, &revert)
        .await
        .step("Reverting account information")?;
    print_account(out, &account)?;

    Ok(())
}

///
/// Builds a fresh record holding only the collections that lose an entry.
/// Every other field stays unset so the patch leaves it untouched.
///
pub fn removal_patch(
    account: &Account,
    user_email: Option<&str>,
    adwords_id: Option<AdwordsId>,
) -> Account {
    let mut patch = Account::default();

    if let Some(email) = user_email {
        patch.users = Some(without_user(account.users(), email));
    }

    if let Some(adwords_id) = adwords_id {
        patch.adwords_links = Some(without_adwords_link(account.adwords_links(), adwords_id));
    }

    patch
}

pub fn without_user(users: &[AccountUser], email: &str) -> Vec<AccountUser> {
    users
        .iter()
        .filter(|user| user.email_address != email)
        .cloned()
        .collect()
}

pub fn without_adwords_link(
    links: &[AccountAdwordsLink],
    adwords_id: AdwordsId,
) -> Vec<AccountAdwordsLink> {
    links
        .iter()
        .filter(|link| link.adwords_id != adwords_id)
        .cloned()
        .collect()
}
