use std::io::{self, Write};

use crate::models::account::Account;

pub fn print_account<W: Write + ?Sized>(out: &mut W, account: &Account) -> io::Result<()> {
    match account.id {
        Some(id) => writeln!(out, "Information for account {}:", id)?,
        None => writeln!(out, "Information for account (unassigned):")?,
    }
    writeln!(
        out,
        "- Display name: {}",
        account.name.as_deref().unwrap_or_default()
    )?;

    let users = account.users();
    if users.is_empty() {
        writeln!(out, "- No registered users.")?;
    } else {
        writeln!(out, "- Registered users:")?;
        for user in users {
            let admin = if user.is_admin() { "(ADMIN) " } else { "" };
            writeln!(out, "  - {}{}", admin, user.email_address)?;
        }
    }

    let links = account.adwords_links();
    if links.is_empty() {
        writeln!(out, "- No linked Adwords accounts.")?;
    } else {
        writeln!(out, "- Linked Adwords accounts:")?;
        for link in links {
            writeln!(out, "  - {}: {}", link.adwords_id, link.status)?;
        }
    }

    Ok(())
}

pub fn print_accounts<W: Write + ?Sized>(out: &mut W, accounts: &[Account]) -> io::Result<()> {
    accounts
        .iter()
        .try_for_each(|account| print_account(out, account))
}
