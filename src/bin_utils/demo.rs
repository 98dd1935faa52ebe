use std::io::Write;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::{
    account::AccountType,
    ledger::{Ledger, in_memory_ledger::InMemoryLedger},
};

/// Replays the two-customer, three-account walkthrough and prints each balance.
pub fn run<W>(output: &mut W) -> Result<()>
where
    W: Write,
{
    let mut ledger = InMemoryLedger::default();

    let john = ledger.register_customer("John Doe".into(), "123 Main Street".into());
    let jane = ledger.register_customer("Jane Smith".into(), "456 Park Avenue".into());

    let account1 = ledger.create_account(john, AccountType::Savings)?.id();
    let account2 = ledger.create_account(john, AccountType::Checking)?.id();
    let account3 = ledger.create_account(jane, AccountType::Savings)?.id();

    ledger.deposit(account1, Decimal::from(1000))?;
    ledger.deposit(account2, Decimal::from(500))?;
    ledger.deposit(account3, Decimal::from(2000))?;

    ledger.transfer(account1, account2, Decimal::from(200))?;
    ledger.withdraw(account3, Decimal::from(500))?;

    for (n, account_id) in [account1, account2, account3].into_iter().enumerate() {
        let balance = ledger.balance(account_id)?;
        writeln!(output, "Account{} balance: {balance}", n + 1)
            .context("Failed to write demo output")?;
    }
    Ok(())
}
