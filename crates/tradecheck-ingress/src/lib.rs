//! # tradecheck-ingress
//!
//! **Salary ingress**: turns the salary figures that arrive from people and
//! spreadsheets into exact [`Amount`](tradecheck_types::Amount)s.
//!
//! Accepted forms (case-insensitive):
//!
//! ```text
//! 7501817.73   $7,501,817.73   240m   240 mil   7.5 million dollars
//! ```
//!
//! Anything else is rejected with `MalformedAmount`; a bad figure is never
//! coerced to zero.

pub mod salary_parser;

pub use salary_parser::{SalaryInput, parse_amount, parse_amount_list, parse_amount_list_with};
