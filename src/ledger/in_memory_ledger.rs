use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    account::{Account, AccountEvent, AccountId, AccountType, Amount, BalanceAction},
    customer::{Customer, CustomerId},
};

use super::{Ledger, LedgerError, id_allocator::IdAllocator, validate_amount};

/// Ledger that keeps every customer and account in process memory.
/// Ordered maps keep iteration in id order.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    account_ids: IdAllocator,
    customer_ids: IdAllocator,
    accounts: BTreeMap<AccountId, Account>,
    customers: BTreeMap<CustomerId, Customer>,
}

impl InMemoryLedger {
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    fn apply(&mut self, event: &AccountEvent) {
        if let Some(acc) = self.accounts.get_mut(&event.account_id()) {
            acc.apply(event);
        }
    }
}

impl Ledger for InMemoryLedger {
    fn register_customer(&mut self, name: String, address: String) -> CustomerId {
        let customer_id = self.customer_ids.allocate();
        debug!(customer_id, %name, "customer registered");
        self.customers
            .insert(customer_id, Customer::new(customer_id, name, address));
        customer_id
    }

    fn create_account(
        &mut self,
        customer_id: CustomerId,
        kind: AccountType,
    ) -> Result<&Account, LedgerError> {
        let Some(customer) = self.customers.get_mut(&customer_id) else {
            return Err(LedgerError::CustomerNotFound(customer_id));
        };
        let account_id = self.account_ids.allocate();
        customer.attach_account(account_id);
        debug!(account_id, customer_id, %kind, "account created");
        let account = self
            .accounts
            .entry(account_id)
            .or_insert(Account::new(account_id, customer_id, kind));
        Ok(&*account)
    }

    fn account(&self, account_id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&account_id)
            .ok_or(LedgerError::NotFound(account_id))
    }

    fn customer(&self, customer_id: CustomerId) -> Result<&Customer, LedgerError> {
        self.customers
            .get(&customer_id)
            .ok_or(LedgerError::CustomerNotFound(customer_id))
    }

    fn deposit(&mut self, account_id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let amount = validate_amount(amount)?;
        let evt = self
            .account(account_id)?
            .handle_balance_change(BalanceAction::Credit, amount)?;
        self.apply(&evt);
        debug!(account_id, %amount, "deposited");
        Ok(())
    }

    fn withdraw(&mut self, account_id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let amount = validate_amount(amount)?;
        let evt = self
            .account(account_id)?
            .handle_balance_change(BalanceAction::Debit, amount)?;
        self.apply(&evt);
        debug!(account_id, %amount, "withdrawn");
        Ok(())
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let amount = validate_amount(amount)?;
        let source = self.account(from)?;
        let target = self.account(to)?;
        // both legs are handled before anything is applied
        let debit = source.handle_balance_change(BalanceAction::Debit, amount)?;
        let credit = target.handle_balance_change(BalanceAction::Credit, amount)?;
        self.apply(&debit);
        self.apply(&credit);
        debug!(from, to, %amount, "transferred");
        Ok(())
    }
}
