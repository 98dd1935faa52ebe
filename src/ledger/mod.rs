use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountId, AccountType, Amount},
    customer::{Customer, CustomerId},
};

pub mod id_allocator;
pub mod in_memory_ledger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {0} not found")]
    NotFound(AccountId),
    #[error("Customer {0} not found")]
    CustomerNotFound(CustomerId),
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Amount),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Rejects zero and negative amounts before they reach an account.
pub fn validate_amount(amount: Amount) -> Result<Amount, LedgerError> {
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

pub trait Ledger {
    fn register_customer(&mut self, name: String, address: String) -> CustomerId;

    fn create_account(
        &mut self,
        customer_id: CustomerId,
        kind: AccountType,
    ) -> Result<&Account, LedgerError>;

    fn account(&self, account_id: AccountId) -> Result<&Account, LedgerError>;

    fn customer(&self, customer_id: CustomerId) -> Result<&Customer, LedgerError>;

    fn balance(&self, account_id: AccountId) -> Result<Amount, LedgerError> {
        self.account(account_id).map(Account::balance)
    }

    fn deposit(&mut self, account_id: AccountId, amount: Amount) -> Result<(), LedgerError>;

    fn withdraw(&mut self, account_id: AccountId, amount: Amount) -> Result<(), LedgerError>;

    /// Moves `amount` between two accounts. Either both legs are applied or neither is.
    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amount_validation() {
        assert_eq!(validate_amount(dec!(0.01)), Ok(dec!(0.01)));
        assert_eq!(
            validate_amount(Decimal::ZERO),
            Err(LedgerError::InvalidAmount(Decimal::ZERO))
        );
        assert_eq!(
            validate_amount(dec!(-5)),
            Err(LedgerError::InvalidAmount(dec!(-5)))
        );
    }

    #[test]
    fn account_errors_display_transparently() {
        let err = LedgerError::from(AccountError::InsufficientBalance {
            requested: dec!(10),
            available: dec!(2),
        });
        assert_eq!(
            err.to_string(),
            "Insufficient balance: requested 10, available 2"
        );
        assert_eq!(LedgerError::NotFound(4).to_string(), "Account 4 not found");
    }
}
