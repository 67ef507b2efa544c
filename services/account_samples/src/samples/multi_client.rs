use std::io::Write;

use uuid::Uuid;

use crate::components::content_client::{for_each_page, AccountsClient, ClientError};
use crate::models::account::{Account, AccountId};
use crate::models::merchant_info::MerchantInfo;

use super::error::{CallContext, SampleError};
use super::presentation::print_accounts;
use super::relationship::AccountRelationship;
use super::transcript::Transcript;

const LISTING_STEP: &str = "Listing subaccounts";

///
/// Lists the sub-accounts of the configured multi-client account, inserts a
/// new one and removes it again, listing after every change.
///
/// Output failures are reported only after the sub-account is removed.
///
pub async fn multi_client_demo<C, W>(
    client: &C,
    config: &MerchantInfo,
    relationship: AccountRelationship,
    max_results: Option<u32>,
    out: &mut W,
) -> Result<(), SampleError>
where
    C: AccountsClient + ?Sized,
    W: Write + ?Sized,
{
    let mut transcript = Transcript::new(out);
    insert_and_remove(client, config, relationship, max_results, &mut transcript).await?;
    transcript.finish()
}

async fn insert_and_remove<C, W>(
    client: &C,
    config: &MerchantInfo,
    relationship: AccountRelationship,
    max_results: Option<u32>,
    out: &mut W,
) -> Result<(), SampleError>
where
    C: AccountsClient + ?Sized,
    W: Write + ?Sized,
{
    if !relationship.is_multi_client() {
        writeln!(out, "This demo requires a multi-client account.")?;
        return Ok(());
    }

    let merchant_id = config.merchant_id;

    list_sub_accounts(client, merchant_id, max_results, out).await?;

    let account_name = sample_account_name();
    writeln!(out, "Adding subaccount with name {}.", account_name)?;
    let account = client
        .insert(merchant_id, &Account::with_name(account_name))
        .await
        .step("Adding subaccount")?;

    let account_id = account.id.ok_or(SampleError::MissingAccountId {
        step: "Adding subaccount",
    })?;
    writeln!(out, "Subaccount added with ID {}.", account_id)?;

    list_sub_accounts(client, merchant_id, max_results, out).await?;

    writeln!(out, "Removing subaccount with ID {}.", account_id)?;
    client
        .delete(merchant_id, account_id)
        .await
        .step("Removing subaccount")?;
    writeln!(out, "Subaccount removed.")?;

    list_sub_accounts(client, merchant_id, max_results, out).await?;

    Ok(())
}

async fn list_sub_accounts<C, W>(
    client: &C,
    merchant_id: AccountId,
    max_results: Option<u32>,
    out: &mut W,
) -> Result<(), SampleError>
where
    C: AccountsClient + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Printing subaccounts of {}:", merchant_id)?;

    for_each_page(client, merchant_id, max_results, |accounts| {
        print_accounts(out, &accounts).map_err(|source| ListingError(source.into()))
    })
    .await
    .map_err(|ListingError(err)| err)?;

    writeln!(out)?;
    Ok(())
}

struct ListingError(SampleError);

impl From<ClientError> for ListingError {
    fn from(source: ClientError) -> Self {
        ListingError(SampleError::Call {
            step: LISTING_STEP,
            source,
        })
    }
}

pub fn sample_account_name() -> String {
    format!("sampleAccount#{}", Uuid::new_v4())
}
