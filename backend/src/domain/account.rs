//! Customer accounts and their statements.
//!
//! A [`Customer`] owns an append-only [`Statement`]. The balance is never
//! stored: it is folded from the statement on demand, credits adding and
//! debits subtracting. A debit is only accepted when the balance at the time
//! of insertion covers it.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Validation errors raised by the account value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountValidationError {
    #[error("tax id must not be empty")]
    EmptyTaxId,
    #[error("tax id must not contain surrounding whitespace")]
    TaxIdWhitespace,
    #[error("name must not be empty")]
    EmptyName,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

/// Natural-person tax identifier (CPF) keying an account.
///
/// # Examples
/// ```
/// use backend::domain::TaxId;
///
/// let tax_id = TaxId::new("111").expect("valid tax id");
/// assert_eq!(tax_id.as_ref(), "111");
/// assert!(TaxId::new(" 111").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    /// Validate and construct a tax id.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AccountValidationError::EmptyTaxId);
        }
        if raw.trim() != raw {
            return Err(AccountValidationError::TaxIdWhitespace);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for TaxId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account holder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName(String);

impl CustomerName {
    /// Validate and construct a name; blank names are rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strictly positive monetary amount.
///
/// # Examples
/// ```
/// use backend::domain::Amount;
/// use rust_decimal::Decimal;
///
/// assert!(Amount::new(Decimal::new(1050, 2)).is_ok());
/// assert!(Amount::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Validate and construct an amount.
    pub fn new(value: Decimal) -> Result<Self, AccountValidationError> {
        if value <= Decimal::ZERO {
            return Err(AccountValidationError::NonPositiveAmount);
        }
        Ok(Self(value))
    }

    /// Underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Direction of a statement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Money in.
    Credit,
    /// Money out.
    Debit,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => f.write_str("credit"),
            Self::Debit => f.write_str("debit"),
        }
    }
}

/// Immutable statement entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub description: Option<String>,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
    pub kind: OperationKind,
}

impl Operation {
    /// Build a credit entry.
    pub fn credit(amount: Amount, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            amount,
            created_at,
            kind: OperationKind::Credit,
        }
    }

    /// Build a debit entry.
    pub fn debit(amount: Amount, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            amount,
            created_at,
            kind: OperationKind::Debit,
        }
    }

    /// Contribution of this entry to the balance.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            OperationKind::Credit => self.amount.value(),
            OperationKind::Debit => -self.amount.value(),
        }
    }

    /// Whether the entry was created on `date` (UTC calendar day).
    #[must_use]
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.created_at.date_naive() == date
    }
}

/// Reasons an operation cannot be appended to a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A debit would overdraw the statement.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    /// A credit would push the balance past the largest representable amount.
    #[error("balance overflow: balance {balance}, credit {amount}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

/// Append-only log of operations for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement(Vec<Operation>);

impl Statement {
    /// Create an empty statement.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Fold the statement into a balance, starting from zero.
    ///
    /// Every prefix of the statement was a checked balance when its last
    /// entry was recorded, so the fold stays within range.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Amount, Operation, Statement};
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let mut statement = Statement::new();
    /// let now = Utc::now();
    /// let hundred = Amount::new(Decimal::from(100)).expect("positive");
    /// let thirty = Amount::new(Decimal::from(30)).expect("positive");
    /// statement.record(Operation::credit(hundred, None, now)).expect("credit");
    /// statement.record(Operation::debit(thirty, None, now)).expect("debit");
    /// assert_eq!(statement.balance(), Decimal::from(70));
    /// ```
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.0
            .iter()
            .fold(Decimal::ZERO, |acc, operation| acc + operation.signed_amount())
    }

    /// Append an operation.
    ///
    /// Debits are checked against the balance folded from the existing
    /// entries and credits must keep that balance representable. A rejected
    /// operation leaves the statement untouched. Earlier entries are never
    /// re-validated.
    pub fn record(&mut self, operation: Operation) -> Result<(), RecordError> {
        let balance = self.balance();
        let amount = operation.amount.value();
        match operation.kind {
            OperationKind::Debit if balance < amount => {
                return Err(RecordError::InsufficientFunds {
                    balance,
                    requested: amount,
                });
            }
            OperationKind::Credit if balance.checked_add(amount).is_none() => {
                return Err(RecordError::BalanceOverflow { balance, amount });
            }
            OperationKind::Debit | OperationKind::Credit => {}
        }
        self.0.push(operation);
        Ok(())
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.0
    }

    /// Entries created on `date`, in insertion order.
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> Vec<Operation> {
        self.0
            .iter()
            .filter(|operation| operation.falls_on(date))
            .cloned()
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the statement has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Statement> for Vec<Operation> {
    fn from(value: Statement) -> Self {
        value.0
    }
}

/// Account holder together with their statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: Uuid,
    tax_id: TaxId,
    name: CustomerName,
    statement: Statement,
}

impl Customer {
    /// Open a new account with a fresh identifier and an empty statement.
    #[must_use]
    pub fn open(tax_id: TaxId, name: CustomerName) -> Self {
        Self::with_id(Uuid::new_v4(), tax_id, name)
    }

    /// Build a customer with a known identifier and an empty statement.
    #[must_use]
    pub fn with_id(id: Uuid, tax_id: TaxId, name: CustomerName) -> Self {
        Self {
            id,
            tax_id,
            name,
            statement: Statement::new(),
        }
    }

    /// Identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Tax id keying the account.
    #[must_use]
    pub const fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    /// Current account holder name.
    #[must_use]
    pub const fn name(&self) -> &CustomerName {
        &self.name
    }

    /// Statement in insertion order.
    #[must_use]
    pub const fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Balance folded from the statement.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.statement.balance()
    }

    /// Consume the customer, keeping only the statement.
    #[must_use]
    pub fn into_statement(self) -> Statement {
        self.statement
    }

    /// Replace the account holder name.
    pub fn rename(&mut self, name: CustomerName) {
        self.name = name;
    }

    /// Append an operation to the statement; see [`Statement::record`].
    pub fn record(&mut self, operation: Operation) -> Result<(), RecordError> {
        self.statement.record(operation)
    }
}
