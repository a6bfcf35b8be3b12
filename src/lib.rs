//! Exprdiff builds mathematical expressions as trees and evaluates both
//! their value and their exact first derivative with respect to a symbol.
//!
//! Expressions are composed with ordinary operators and functions. Numbers
//! are lifted into constants automatically:
//!
//! ```
//! use exprdiff::{atom::Symbol, function::sin, Expression};
//!
//! let x = Symbol::new(1);
//! let expr = 3 * x + sin(x * x);
//!
//! // d/dx (3x + sin(x^2)) = 3 + 2x cos(x^2)
//! assert_eq!(expr.value(x, 0.), 0.);
//! assert_eq!(expr.diff(x, 0.), 3.);
//! ```
//!
//! Every node is immutable after construction. Evaluation walks the tree on
//! demand, so the same expression can be queried at any point and with respect
//! to any symbol. Symbols other than the requested one behave as constants
//! equal to their fallback value:
//!
//! ```
//! use exprdiff::{atom::Symbol, Expression};
//!
//! let x = Symbol::new(1);
//! let y = Symbol::new(2).with_fallback(4.);
//! let expr = x * y;
//!
//! assert_eq!(expr.value(x, 2.), 8.);
//! assert_eq!(expr.diff(x, 2.), 4.);
//! ```

pub mod atom;
mod derivative;
mod evaluate;
pub mod function;
pub mod printer;
pub mod state;
pub mod utils;

pub use atom::{Atom, Expression, Negatable};
pub use derivative::Derivative;
