mod components;
mod logging;
mod models;
mod samples;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgEnum, Parser, Subcommand};
use tracing::info;

use yaml_config_provider::YamlConfigProvider;

use components::content_client::{AccountsClient, ContentEndpoint, HttpAccountsClient};
use models::merchant_info::MerchantInfo;
use samples::{multi_client_demo, primary_account_demo, resolve_relationship, SampleError};

const CONFIG_DIR_NAME: &str = "shopping-samples";
const CONFIG_FILE_NAME: &str = "merchant-info.json";

#[derive(Parser, Debug)]
#[clap(about = "Content API for Shopping accounts samples")]
struct Args {
    #[clap(long, parse(from_os_str))]
    /// Directory holding `content/merchant-info.json` [default: ~/shopping-samples]
    config_path: Option<PathBuf>,

    #[clap(long, env = "GOOGLE_SHOPPING_ACCESS_TOKEN", hide_env_values = true)]
    /// OAuth2 access token authorized for the content scope
    access_token: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shows whether the configured account is standalone, multi-client or a sub-account
    Relationship {
        #[clap(long, arg_enum)]
        /// Fails unless the account matches
        expect: Option<Expectation>,
    },
    /// Adds the sample user and AdWords link to the configured account, then removes them
    PrimaryAccount,
    /// Adds a sub-account to the configured multi-client account, then removes it
    MultiClient {
        #[clap(long)]
        /// Page size used when listing sub-accounts
        max_results: Option<u32>,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Expectation {
    MultiClient,
    NotMultiClient,
}

fn config_file_path(config_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let config_path = match config_path {
        Some(path) => path,
        None => dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not locate home directory"))?
            .join(CONFIG_DIR_NAME),
    };

    Ok(config_path.join("content").join(CONFIG_FILE_NAME))
}

async fn run(
    client: &dyn AccountsClient,
    merchant_info: &MerchantInfo,
    command: Command,
) -> Result<(), SampleError> {
    let relationship = resolve_relationship(client, merchant_info.merchant_id).await?;
    info!(merchant_id = %merchant_info.merchant_id, %relationship, "Resolved configured account");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Relationship { expect } => {
            writeln!(
                out,
                "Merchant Center {} is a {}.",
                merchant_info.merchant_id, relationship
            )?;

            match expect {
                Some(Expectation::MultiClient) => relationship.require_multi_client()?,
                Some(Expectation::NotMultiClient) => relationship.require_not_multi_client()?,
                None => (),
            }
        }
        Command::PrimaryAccount => {
            primary_account_demo(client, merchant_info, &mut out).await?;
        }
        Command::MultiClient { max_results } => {
            multi_client_demo(client, merchant_info, relationship, max_results, &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let args = Args::parse();

    let config_file = config_file_path(args.config_path)?;
    let config = YamlConfigProvider::new(&config_file).with_context(|| {
        format!(
            "Could not load {}. You can use the merchant-info.json file in the samples root as a template.",
            config_file.display()
        )
    })?;
    let merchant_info = MerchantInfo::from_config(&config)
        .with_context(|| format!("Invalid sample configuration in {}", config_file.display()))?;
    info!(
        merchant_id = %merchant_info.merchant_id,
        website_url = ?merchant_info.website_url,
        "Loaded sample configuration"
    );

    let endpoint = ContentEndpoint::from_env()?;
    if endpoint.is_overridden() {
        info!(endpoint = %endpoint.as_url(), "Using non-standard API endpoint");
    }

    let client = HttpAccountsClient::new(
        endpoint,
        &args.access_token,
        &merchant_info.application_name,
    )?;

    run(&client, &merchant_info, args.command).await?;

    Ok(())
}
