//! Driving port for account mutations.
//!
//! Inbound adapters call [`AccountCommand`] to open, fund, debit, rename, and
//! close accounts. The acting customer is identified by tax id only.

use async_trait::async_trait;

use crate::domain::{Amount, Customer, CustomerName, Error, TaxId};

/// Domain use-case port for state-changing account operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Open an account with an empty statement.
    ///
    /// # Errors
    ///
    /// Returns an `already_exists` error when the tax id is taken.
    async fn open_account(&self, tax_id: TaxId, name: CustomerName) -> Result<Customer, Error>;

    /// Credit the account.
    async fn deposit(
        &self,
        tax_id: &TaxId,
        amount: Amount,
        description: Option<String>,
    ) -> Result<(), Error>;

    /// Debit the account when the balance covers `amount`.
    ///
    /// # Errors
    ///
    /// Returns an `insufficient_funds` error, leaving the statement unchanged,
    /// when the balance is lower than `amount`.
    async fn withdraw(
        &self,
        tax_id: &TaxId,
        amount: Amount,
        description: Option<String>,
    ) -> Result<(), Error>;

    /// Replace the account holder name.
    async fn rename(&self, tax_id: &TaxId, name: CustomerName) -> Result<(), Error>;

    /// Remove the account and its statement.
    async fn close_account(&self, tax_id: &TaxId) -> Result<(), Error>;
}
