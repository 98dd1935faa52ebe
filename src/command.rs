use serde::Deserialize;
use thiserror::Error;

use crate::{
    account::{AccountId, AccountType, Amount},
    customer::CustomerId,
    ledger::{Ledger, LedgerError},
};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Customer,
    Open,
    Deposit,
    Withdraw,
    Transfer,
    Balance,
}

/// Raw operation fields, any of which may be absent.
#[derive(Debug, Clone, Default)]
pub struct OperationArgs {
    pub customer: Option<CustomerId>,
    pub account: Option<AccountId>,
    pub to: Option<AccountId>,
    pub amount: Option<Amount>,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Field `{field}` is required for {op:?}")]
    MissingField {
        op: OperationKind,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    RegisterCustomer {
        name: String,
        address: String,
    },
    OpenAccount {
        customer_id: CustomerId,
        kind: AccountType,
    },
    Deposit {
        account_id: AccountId,
        amount: Amount,
    },
    Withdraw {
        account_id: AccountId,
        amount: Amount,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
    Balance {
        account_id: AccountId,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    CustomerRegistered(CustomerId),
    AccountOpened(AccountId),
    BalanceChanged,
    Balance {
        account_id: AccountId,
        balance: Amount,
    },
}

fn required<T>(
    value: Option<T>,
    op: OperationKind,
    field: &'static str,
) -> Result<T, CommandError> {
    value.ok_or(CommandError::MissingField { op, field })
}

impl LedgerCommand {
    pub fn parse_command(op: OperationKind, args: OperationArgs) -> Result<Self, CommandError> {
        match op {
            OperationKind::Customer => Ok(Self::RegisterCustomer {
                name: required(args.name, op, "name")?,
                address: required(args.address, op, "address")?,
            }),
            OperationKind::Open => Ok(Self::OpenAccount {
                customer_id: required(args.customer, op, "customer")?,
                kind: AccountType::from(required(args.kind, op, "kind")?.as_str()),
            }),
            OperationKind::Deposit => Ok(Self::Deposit {
                account_id: required(args.account, op, "account")?,
                amount: required(args.amount, op, "amount")?,
            }),
            OperationKind::Withdraw => Ok(Self::Withdraw {
                account_id: required(args.account, op, "account")?,
                amount: required(args.amount, op, "amount")?,
            }),
            OperationKind::Transfer => Ok(Self::Transfer {
                from: required(args.account, op, "account")?,
                to: required(args.to, op, "to")?,
                amount: required(args.amount, op, "amount")?,
            }),
            OperationKind::Balance => Ok(Self::Balance {
                account_id: required(args.account, op, "account")?,
            }),
        }
    }

    pub fn execute<L>(self, ledger: &mut L) -> Result<CommandOutcome, LedgerError>
    where
        L: Ledger,
    {
        match self {
            Self::RegisterCustomer { name, address } => Ok(CommandOutcome::CustomerRegistered(
                ledger.register_customer(name, address),
            )),
            Self::OpenAccount { customer_id, kind } => Ok(CommandOutcome::AccountOpened(
                ledger.create_account(customer_id, kind)?.id(),
            )),
            Self::Deposit { account_id, amount } => {
                ledger.deposit(account_id, amount)?;
                Ok(CommandOutcome::BalanceChanged)
            }
            Self::Withdraw { account_id, amount } => {
                ledger.withdraw(account_id, amount)?;
                Ok(CommandOutcome::BalanceChanged)
            }
            Self::Transfer { from, to, amount } => {
                ledger.transfer(from, to, amount)?;
                Ok(CommandOutcome::BalanceChanged)
            }
            Self::Balance { account_id } => Ok(CommandOutcome::Balance {
                account_id,
                balance: ledger.balance(account_id)?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::ledger::in_memory_ledger::InMemoryLedger;

    use super::*;

    #[test]
    fn parse_commands() {
        let cmd = LedgerCommand::parse_command(
            OperationKind::Customer,
            OperationArgs {
                name: Some("Jane Smith".into()),
                address: Some("456 Park Avenue".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::RegisterCustomer {
                name: "Jane Smith".into(),
                address: "456 Park Avenue".into(),
            }
        );

        let cmd = LedgerCommand::parse_command(
            OperationKind::Open,
            OperationArgs {
                customer: Some(1),
                kind: Some("savings".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::OpenAccount {
                customer_id: 1,
                kind: AccountType::Savings,
            }
        );

        let cmd = LedgerCommand::parse_command(
            OperationKind::Transfer,
            OperationArgs {
                account: Some(1),
                to: Some(2),
                amount: Some(dec!(200)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            cmd,
            LedgerCommand::Transfer {
                from: 1,
                to: 2,
                amount: dec!(200),
            }
        );
    }

    #[test]
    fn missing_fields() {
        let err = LedgerCommand::parse_command(
            OperationKind::Transfer,
            OperationArgs {
                account: Some(1),
                amount: Some(dec!(5)),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingField {
                op: OperationKind::Transfer,
                field: "to",
            }
        );
        assert_eq!(err.to_string(), "Field `to` is required for Transfer");

        let err =
            LedgerCommand::parse_command(OperationKind::Deposit, OperationArgs::default())
                .unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingField {
                op: OperationKind::Deposit,
                field: "account"
            }
        ));
    }

    #[test]
    fn execute_commands() {
        let mut ledger = InMemoryLedger::default();
        let outcome = LedgerCommand::RegisterCustomer {
            name: "John Doe".into(),
            address: "123 Main Street".into(),
        }
        .execute(&mut ledger)
        .unwrap();
        assert_eq!(outcome, CommandOutcome::CustomerRegistered(1));

        let outcome = LedgerCommand::OpenAccount {
            customer_id: 1,
            kind: AccountType::Checking,
        }
        .execute(&mut ledger)
        .unwrap();
        assert_eq!(outcome, CommandOutcome::AccountOpened(1));

        LedgerCommand::Deposit {
            account_id: 1,
            amount: dec!(75),
        }
        .execute(&mut ledger)
        .unwrap();
        let outcome = LedgerCommand::Balance { account_id: 1 }
            .execute(&mut ledger)
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Balance {
                account_id: 1,
                balance: dec!(75),
            }
        );

        let err = LedgerCommand::Withdraw {
            account_id: 2,
            amount: dec!(1),
        }
        .execute(&mut ledger)
        .unwrap_err();
        assert_eq!(err, LedgerError::NotFound(2));
    }
}
