/// Account records and balance handling.
/// Balance changes are handled into events first, then applied.
pub mod account;

/// Customers and the accounts they own.
pub mod customer;

/// Ledger interface, plus "in memory" implementation.
/// Owns customers and accounts, and keeps every balance non-negative.
pub mod ledger;

/// Ledger commands parsed from script operations and executed against any [`ledger::Ledger`].
pub mod command;

/// Script runner and demo used by the binary. Kept in the library so integration
/// tests can drive it.
pub mod bin_utils;
