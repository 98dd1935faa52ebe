use crate::account::AccountId;

pub type CustomerId = u32;

#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: String,
    accounts: Vec<AccountId>,
}

impl Customer {
    pub(crate) fn new(id: CustomerId, name: String, address: String) -> Self {
        Self {
            id,
            name,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned accounts, in the order they were opened.
    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub(crate) fn attach_account(&mut self, account_id: AccountId) {
        self.accounts.push(account_id);
    }
}
