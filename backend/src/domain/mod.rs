//! Domain primitives, aggregates, and services.
//!
//! Purpose: model customer accounts and their append-only statements, and
//! expose the account use cases through ports so adapters stay at the edge.
//! Types here know nothing about HTTP or storage technology.
//!
//! Public surface:
//! - [`Customer`], [`Statement`], [`Operation`] and the validated value types
//!   ([`TaxId`], [`CustomerName`], [`Amount`]).
//! - [`AccountService`] implementing [`ports::AccountCommand`] and
//!   [`ports::AccountQuery`].
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure envelope.
//! - [`TraceId`]: request-scoped correlation identifier.

pub mod account;
pub mod account_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::account::{
    AccountValidationError, Amount, Customer, CustomerName, Operation,
    OperationKind, RecordError, Statement, TaxId,
};
pub use self::account_service::AccountService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
