//! Due Date Engine for loan repayments
//!
//! This crate computes the first valid repayment due date for a loan from its
//! funding date, the borrower's recurring pay schedule, a holiday calendar and
//! the borrower's deposit method.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{DueDateCalculator, calculate_due_date};
