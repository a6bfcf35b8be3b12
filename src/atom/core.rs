//! The evaluation protocol shared by every node.
//!
//! See [Expression] for the possible operations.

use crate::{derivative::Derivative, utils};

use super::{Atom, Constant, Fun, Symbol, Variable};

/// A node that can be evaluated and differentiated at a point.
///
/// Both operations are pure: they depend only on the node, the requested
/// symbol and the point `x`. Variables bound to a different symbol than the
/// requested one behave as constants.
///
/// New node kinds extend the library by implementing this trait.
pub trait Expression {
    /// The value of the expression when the variable `symbol` takes the value `x`.
    fn value(&self, symbol: Symbol, x: f64) -> f64;

    /// The partial derivative of the expression with respect to `symbol`,
    /// evaluated where `symbol` takes the value `x`.
    fn diff(&self, symbol: Symbol, x: f64) -> f64;

    /// Get a view of the derivative with respect to `symbol` that can be
    /// evaluated at several points.
    ///
    /// ```
    /// use exprdiff::{atom::Symbol, Expression};
    ///
    /// let x = Symbol::new(0);
    /// let e = x * x;
    /// let d = e.derivative(x);
    /// assert_eq!(d.at(3.), 6.);
    /// ```
    fn derivative(&self, symbol: Symbol) -> Derivative<'_, Self> {
        Derivative::new(self, symbol)
    }

    /// Approximate the derivative with a central difference of step `h`.
    fn numerical_diff(&self, symbol: Symbol, x: f64, h: f64) -> f64 {
        utils::central_difference(|t| self.value(symbol, t), x, h)
    }
}

impl<E: Expression + ?Sized> Expression for &E {
    #[inline]
    fn value(&self, symbol: Symbol, x: f64) -> f64 {
        (**self).value(symbol, x)
    }

    #[inline]
    fn diff(&self, symbol: Symbol, x: f64) -> f64 {
        (**self).diff(symbol, x)
    }
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    #[inline]
    fn value(&self, symbol: Symbol, x: f64) -> f64 {
        (**self).value(symbol, x)
    }

    #[inline]
    fn diff(&self, symbol: Symbol, x: f64) -> f64 {
        (**self).diff(symbol, x)
    }
}

macro_rules! impl_expression {
    ($($t:ty),*) => {
        $(
        impl Expression for $t {
            #[inline]
            fn value(&self, symbol: Symbol, x: f64) -> f64 {
                self.evaluate(symbol, x)
            }

            #[inline]
            fn diff(&self, symbol: Symbol, x: f64) -> f64 {
                self.evaluate_derivative(symbol, x)
            }
        }
        )*
    };
}

impl_expression!(Constant, Variable, Fun, Atom);
