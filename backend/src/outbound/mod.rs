//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local account store guarded by a single lock.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business rules of their own.

pub mod memory;
