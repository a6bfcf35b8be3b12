//! Unary functions that can be applied to expressions.
//!
//! Each function is described by a [FunctionTag] that knows how to compute
//! the function and its derivative on a number. The node that applies it
//! combines the derivative with the inner derivative by the chain rule.

use crate::atom::Atom;

/// A differentiable elementary function of one argument.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum FunctionTag {
    Sin,
}

impl FunctionTag {
    pub const ALL: [FunctionTag; 1] = [FunctionTag::Sin];

    /// The name of the function, as it is printed.
    pub fn get_name(&self) -> &'static str {
        match self {
            FunctionTag::Sin => "sin",
        }
    }

    /// Compute `F(v)`.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        match self {
            FunctionTag::Sin => v.sin(),
        }
    }

    /// Compute `F'(v)`.
    #[inline]
    pub fn derivative_at(&self, v: f64) -> f64 {
        match self {
            FunctionTag::Sin => v.cos(),
        }
    }
}

impl std::fmt::Display for FunctionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_name())
    }
}

/// Create `sin(arg)`. Numbers are wrapped in a constant first.
///
/// ```
/// use exprdiff::{atom::Symbol, function::sin, Expression};
///
/// let x = Symbol::new(1);
/// assert_eq!(sin(x).diff(x, 0.), 1.);
/// assert_eq!(sin(0).value(x, 5.), 0.);
/// ```
pub fn sin<T: Into<Atom>>(arg: T) -> Atom {
    Atom::new_fun(FunctionTag::Sin, arg)
}

impl Atom {
    /// Apply `sin` to this expression.
    pub fn sin(self) -> Atom {
        sin(self)
    }
}

#[cfg(test)]
mod test {
    use super::{sin, FunctionTag};
    use crate::atom::{Atom, Constant, Symbol};

    #[test]
    fn tags() {
        for t in FunctionTag::ALL {
            assert_eq!(t.apply(0.), 0.);
            assert_eq!(t.derivative_at(0.), 1.);
        }
        assert_eq!(FunctionTag::Sin.to_string(), "sin");
    }

    #[test]
    fn scalar_argument() {
        assert_eq!(sin(2), Atom::new_fun(FunctionTag::Sin, Constant::new(2.)));
        assert_eq!(sin(0.5), Atom::new_fun(FunctionTag::Sin, Atom::num(0.5)));
    }

    #[test]
    fn node_argument() {
        let x = Symbol::new(1);
        assert_eq!(sin(x), Atom::var(x).sin());
        assert_eq!(sin(sin(x)), Atom::new_fun(FunctionTag::Sin, sin(x)));
    }
}
