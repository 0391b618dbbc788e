//! # numera
//!
//! numera converts between Roman numerals and decimals in `[1, 3999]`,
//! computes with numerals, plain integers and numeral-shaped text, and runs a
//! small statement language that stores named values and applies these
//! conversions and operations to them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{Execution, Interpreter};

/// Conversion utilities for external callers.
///
/// This module wraps the numeral type for direct decimal to numeral
/// conversion and back, substitution of numerals or decimals inside free
/// text, and random numerals drawn from a range. Every numeral failure is
/// reported as one uniform invalid input error.
///
/// # Responsibilities
/// - Convert single values in both directions.
/// - Rewrite whole words of free text, leaving everything else untouched.
/// - Draw uniformly random numerals from validated bounds.
pub mod convert;
/// Provides unified error types for numerals, statements and conversions.
///
/// This module defines all errors that can be raised while validating or
/// computing with numerals, while parsing or executing statements, and by the
/// conversion utilities. Each error carries the offending input so that its
/// message stands on its own.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (numeral, runtime,
///   conversion).
/// - Explains grammar rejections down to the scanning phase.
/// - Integrates with the standard error traits for reporting.
pub mod error;
/// Runs the statement language.
///
/// This module ties together statement lexing and parsing, token resolution,
/// variable storage and the per-category handlers into an interpreter that
/// executes lines of `;` separated statements.
///
/// # Responsibilities
/// - Splits lines into statements and statements into commands.
/// - Resolves tokens to numerals, integers or variable values.
/// - Dispatches commands to the handler of their category and isolates
///   failing statements.
pub mod interpreter;
/// The Roman numeral value type.
///
/// This module validates numerals with a four-phase grammar scanner, encodes
/// and decodes canonical forms, and defines comparison and arithmetic across
/// numerals, numeral-shaped text and plain integers.
///
/// # Responsibilities
/// - Guarantees that every numeral lies in `[1, 3999]` and has exactly one
///   canonical spelling.
/// - Coerces every accepted operand shape to its decimal.
/// - Enforces the range on numeral results instead of clamping or wrapping.
pub mod numeral;

/// Executes a script with a fresh interpreter and returns the combined
/// outcome.
///
/// Each line of `source` is executed in turn against the same variables.
/// Failing statements are collected, never fatal, so the outcome holds the
/// results of every statement that succeeded.
///
/// # Examples
/// ```
/// use numera::get_results;
///
/// let execution = get_results("set a XIV\nconvert a");
/// assert!(execution.is_success());
/// assert_eq!(execution.results[0].to_string(), "14");
///
/// // 'b' is never defined.
/// let execution = get_results("display b");
/// assert!(!execution.is_success());
/// ```
#[must_use]
pub fn get_results(source: &str) -> Execution {
    let mut interpreter = Interpreter::new();
    let mut execution = Execution::default();

    for line in source.lines() {
        execution.extend(interpreter.execute(line));
    }

    execution
}
