//! Account domain service.
//!
//! Implements the [`AccountCommand`] and [`AccountQuery`] driving ports on top
//! of an [`AccountRepository`]. Operation timestamps come from the injected
//! clock so statements are deterministic under test.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    AccountCommand, AccountQuery, AccountRepository, AccountRepositoryError,
};
use crate::domain::{Amount, Customer, CustomerName, Error, Operation, TaxId};

const NOT_FOUND_MESSAGE: &str = "Customer not found";

/// Account service implementing the driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> AccountService<R> {
    /// Create a new service over the given store and clock.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use backend::domain::AccountService;
    /// # use backend::outbound::memory::InMemoryAccountRepository;
    /// # use mockable::DefaultClock;
    /// let service = AccountService::new(
    ///     Arc::new(InMemoryAccountRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    fn map_repository_error(error: AccountRepositoryError) -> Error {
        match error {
            AccountRepositoryError::AlreadyExists { .. } => {
                Error::already_exists("Customer already exists")
            }
            AccountRepositoryError::NotFound { .. } => Error::not_found(NOT_FOUND_MESSAGE),
            AccountRepositoryError::InsufficientFunds { balance, requested } => {
                Error::insufficient_funds("Insufficient funds").with_details(json!({
                    "balance": balance.to_string(),
                    "requested": requested.to_string(),
                }))
            }
            AccountRepositoryError::BalanceOverflow { balance, amount } => {
                Error::invalid_request("Deposit would overflow the account balance").with_details(
                    json!({
                        "balance": balance.to_string(),
                        "amount": amount.to_string(),
                    }),
                )
            }
            AccountRepositoryError::Unavailable { message } => {
                Error::internal(format!("account store unavailable: {message}"))
            }
        }
    }

    async fn require(&self, tax_id: &TaxId) -> Result<Customer, Error> {
        self.repository
            .find_by_tax_id(tax_id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> AccountCommand for AccountService<R>
where
    R: AccountRepository,
{
    async fn open_account(&self, tax_id: TaxId, name: CustomerName) -> Result<Customer, Error> {
        let customer = Customer::open(tax_id, name);
        match self.repository.insert(customer.clone()).await {
            Ok(()) => {
                info!(tax_id = %customer.tax_id(), id = %customer.id(), "account opened");
                Ok(customer)
            }
            Err(error) => {
                warn!(tax_id = %customer.tax_id(), %error, "account not opened");
                Err(Self::map_repository_error(error))
            }
        }
    }

    async fn deposit(
        &self,
        tax_id: &TaxId,
        amount: Amount,
        description: Option<String>,
    ) -> Result<(), Error> {
        let operation = Operation::credit(amount, description, self.clock.utc());
        if let Err(error) = self.repository.append_operation(tax_id, operation).await {
            warn!(%tax_id, %amount, %error, "deposit rejected");
            return Err(Self::map_repository_error(error));
        }
        info!(%tax_id, %amount, "deposit recorded");
        Ok(())
    }

    async fn withdraw(
        &self,
        tax_id: &TaxId,
        amount: Amount,
        description: Option<String>,
    ) -> Result<(), Error> {
        let operation = Operation::debit(amount, description, self.clock.utc());
        if let Err(error) = self.repository.append_operation(tax_id, operation).await {
            warn!(%tax_id, %amount, %error, "withdrawal rejected");
            return Err(Self::map_repository_error(error));
        }
        info!(%tax_id, %amount, "withdrawal recorded");
        Ok(())
    }

    async fn rename(&self, tax_id: &TaxId, name: CustomerName) -> Result<(), Error> {
        self.repository
            .rename(tax_id, name)
            .await
            .map_err(Self::map_repository_error)?;
        info!(%tax_id, "account renamed");
        Ok(())
    }

    async fn close_account(&self, tax_id: &TaxId) -> Result<(), Error> {
        let removed = self
            .repository
            .remove(tax_id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(%tax_id, id = %removed.id(), "account closed");
        Ok(())
    }
}

#[async_trait]
impl<R> AccountQuery for AccountService<R>
where
    R: AccountRepository,
{
    async fn account(&self, tax_id: &TaxId) -> Result<Customer, Error> {
        self.require(tax_id).await
    }

    async fn balance(&self, tax_id: &TaxId) -> Result<Decimal, Error> {
        Ok(self.require(tax_id).await?.balance())
    }

    async fn statement(&self, tax_id: &TaxId) -> Result<Vec<Operation>, Error> {
        Ok(self.require(tax_id).await?.into_statement().into())
    }

    async fn statement_on(&self, tax_id: &TaxId, date: NaiveDate) -> Result<Vec<Operation>, Error> {
        Ok(self.require(tax_id).await?.statement().on(date))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
