//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`AccountRepository`]) describe what the domain needs from
//! storage; driving ports ([`AccountCommand`], [`AccountQuery`]) are the use
//! cases inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod account_query;
mod account_repository;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::AccountCommand;
#[cfg(test)]
pub use account_query::MockAccountQuery;
pub use account_query::AccountQuery;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
