//! Bootstrap for the binary: runs a CSV operation script against an [`InMemoryLedger`]
//! and prints the resulting balance statement.

use std::io::{Read, Write};

use crate::{
    command::{CommandError, CommandOutcome, LedgerCommand},
    ledger::{LedgerError, in_memory_ledger::InMemoryLedger},
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{StatementRow, print_statement};
use thiserror::Error;
use tracing::info;

pub mod csv_parser;
pub mod csv_printer;
pub mod demo;

/// Failure of a single script row. The run carries on with the next row.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ScriptError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser =
            CsvOperationParser::new(self.input).context("Failed to read script header")?;

        let mut ledger = InMemoryLedger::default();

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed operation at line {line}"))?;
            let (op, args) = row.into_parts();
            let outcome = LedgerCommand::parse_command(op, args)
                .map_err(ScriptError::from)
                .and_then(|cmd| cmd.execute(&mut ledger).map_err(ScriptError::from));
            match outcome {
                Ok(CommandOutcome::Balance {
                    account_id,
                    balance,
                }) => info!(line, account_id, %balance, "balance"),
                Ok(_) => {}
                Err(err) => (self.error_printer)(line, err),
            }
        }

        print_statement(
            self.output,
            ledger.accounts().map(|acc| StatementRow {
                account: acc.id(),
                customer: acc.owner(),
                kind: acc.kind(),
                balance: acc.balance(),
            }),
        )
    }
}
