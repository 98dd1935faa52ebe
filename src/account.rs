use std::{convert::Infallible, fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::customer::CustomerId;

pub type AccountId = u32;

pub type Amount = Decimal;

/// Account type tag. Well known kinds get their own variant, anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountType {
    Savings,
    Checking,
    Other(String),
}

impl From<&str> for AccountType {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "savings" => Self::Savings,
            "checking" => Self::Checking,
            _ => Self::Other(s.to_owned()),
        }
    }
}

impl FromStr for AccountType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Savings => f.write_str("Savings"),
            Self::Checking => f.write_str("Checking"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

impl Serialize for AccountType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    Credit,
    Debit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Credited,
    Debited,
}

#[derive(Debug)]
pub struct AccountEvent {
    account_id: AccountId,
    amount: Amount,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> &AccountEventKind {
        &self.kind
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Amount, available: Amount },
    #[error("Balance would exceed the supported range")]
    BalanceOverflow,
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    owner: CustomerId,
    kind: AccountType,
    balance: Amount,
}

impl Account {
    pub(crate) fn new(id: AccountId, owner: CustomerId, kind: AccountType) -> Self {
        Self {
            id,
            owner,
            kind,
            balance: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> CustomerId {
        self.owner
    }

    pub fn kind(&self) -> &AccountType {
        &self.kind
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Credited => {
                self.balance += event.amount;
            }
            AccountEventKind::Debited => {
                self.balance -= event.amount;
            }
        }
    }

    /// Checks a balance change against the current balance. Amount sign is validated by the ledger.
    pub fn handle_balance_change(
        &self,
        action: BalanceAction,
        amount: Amount,
    ) -> Result<AccountEvent, AccountError> {
        match action {
            BalanceAction::Credit => {
                if self.balance.checked_add(amount).is_none() {
                    return Err(AccountError::BalanceOverflow);
                }
                Ok(AccountEvent {
                    account_id: self.id,
                    amount,
                    kind: AccountEventKind::Credited,
                })
            }
            BalanceAction::Debit => {
                if self.balance >= amount {
                    Ok(AccountEvent {
                        account_id: self.id,
                        amount,
                        kind: AccountEventKind::Debited,
                    })
                } else {
                    Err(AccountError::InsufficientBalance {
                        requested: amount,
                        available: self.balance,
                    })
                }
            }
        }
    }
}
