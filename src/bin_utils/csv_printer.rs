use std::io::Write;

use crate::{
    account::{AccountId, AccountType, Amount},
    customer::CustomerId,
};
use anyhow::Context;
use csv::WriterBuilder;
use serde::Serialize;

const STATEMENT_HEADER: [&str; 4] = ["account", "customer", "type", "balance"];

/// One line of the balance statement.
#[derive(Debug, Serialize)]
pub struct StatementRow<'a> {
    pub account: AccountId,
    pub customer: CustomerId,
    pub kind: &'a AccountType,
    pub balance: Amount,
}

/// Writes the statement as CSV. The header is written even when there are no accounts.
pub fn print_statement<'a, W>(
    output: &mut W,
    rows: impl Iterator<Item = StatementRow<'a>>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer
        .write_record(STATEMENT_HEADER)
        .context("Failed to write statement header")?;
    for row in rows {
        let account = row.account;
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write statement row for account {account}"))?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
