//! Audit logging for the expense ledger
//!
//! Records every add, edit, and delete with before/after values in an
//! append-only log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, record index, and
//!   optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL).
//! - `generate_diff`: human-readable summary of what an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::update(3, &before, &after))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
