//! In-memory `AccountRepository` implementation.
//!
//! Customers live in an insertion-ordered `Vec` behind one mutex that covers
//! the list and every statement in it. Lookups are linear scans on the tax
//! id. The lock is never held across an `.await`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Customer, CustomerName, Operation, RecordError, TaxId};

/// Process-local account store; state is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Customer>>, AccountRepositoryError> {
        self.customers
            .lock()
            .map_err(|_| AccountRepositoryError::unavailable("account store lock poisoned"))
    }
}

fn position(customers: &[Customer], tax_id: &TaxId) -> Option<usize> {
    customers
        .iter()
        .position(|customer| customer.tax_id() == tax_id)
}

fn find_mut<'a>(
    customers: &'a mut [Customer],
    tax_id: &TaxId,
) -> Result<&'a mut Customer, AccountRepositoryError> {
    customers
        .iter_mut()
        .find(|customer| customer.tax_id() == tax_id)
        .ok_or_else(|| AccountRepositoryError::not_found(tax_id.as_ref()))
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, customer: Customer) -> Result<(), AccountRepositoryError> {
        let mut customers = self.lock()?;
        if position(&customers, customer.tax_id()).is_some() {
            return Err(AccountRepositoryError::already_exists(
                customer.tax_id().as_ref(),
            ));
        }
        customers.push(customer);
        debug!(accounts = customers.len(), "customer inserted");
        Ok(())
    }

    async fn find_by_tax_id(
        &self,
        tax_id: &TaxId,
    ) -> Result<Option<Customer>, AccountRepositoryError> {
        let customers = self.lock()?;
        Ok(customers
            .iter()
            .find(|customer| customer.tax_id() == tax_id)
            .cloned())
    }

    async fn rename(
        &self,
        tax_id: &TaxId,
        name: CustomerName,
    ) -> Result<(), AccountRepositoryError> {
        let mut customers = self.lock()?;
        find_mut(&mut customers, tax_id)?.rename(name);
        Ok(())
    }

    async fn append_operation(
        &self,
        tax_id: &TaxId,
        operation: Operation,
    ) -> Result<(), AccountRepositoryError> {
        let mut customers = self.lock()?;
        find_mut(&mut customers, tax_id)?
            .record(operation)
            .map_err(|error| match error {
                RecordError::InsufficientFunds { balance, requested } => {
                    AccountRepositoryError::insufficient_funds(balance, requested)
                }
                RecordError::BalanceOverflow { balance, amount } => {
                    AccountRepositoryError::balance_overflow(balance, amount)
                }
            })
    }

    async fn remove(&self, tax_id: &TaxId) -> Result<Customer, AccountRepositoryError> {
        let mut customers = self.lock()?;
        let index = position(&customers, tax_id)
            .ok_or_else(|| AccountRepositoryError::not_found(tax_id.as_ref()))?;
        let removed = customers.remove(index);
        debug!(accounts = customers.len(), "customer removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests;
