//! Defines the expression nodes and the conversions between them.
//!
//! An expression is an [Atom]: a tagged tree whose leaves are constants and
//! variables and whose inner nodes are unary functions and binary operators.
//! Every node owns its children, and no node can be changed once it is built.
//!
//! # Examples
//!
//! Build `3*x + 5` and evaluate it at `x = 2`:
//!
//! ```
//! use exprdiff::{atom::Symbol, Expression};
//!
//! let x = Symbol::new(1);
//! let expr = 3 * x + 5;
//! assert_eq!(expr.value(x, 2.), 11.);
//! assert_eq!(expr.diff(x, 2.), 3.);
//! ```
//!
//! Nodes are compared by structure, not by mathematical meaning:
//!
//! ```
//! use exprdiff::atom::Symbol;
//!
//! let (a, b) = (Symbol::new(1), Symbol::new(2));
//! assert_ne!(a + b, b + a);
//! ```
mod core;
mod ops;

pub use self::core::Expression;
pub use self::ops::Negatable;

use crate::function::FunctionTag;

/// The identity of a symbolic variable. Evaluation and differentiation
/// are always requested with respect to a symbol.
///
/// A symbol can be created from any `u32` with [Symbol::new], or from a
/// name with the [symbol!](crate::symbol) macro.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol {
    id: u32,
}

impl Symbol {
    pub const fn new(id: u32) -> Symbol {
        Symbol { id }
    }

    pub fn get_id(&self) -> u32 {
        self.id
    }

    /// Create a variable for this symbol that takes the value `fallback`
    /// whenever it is evaluated with respect to a different symbol.
    pub fn with_fallback(self, fallback: f64) -> Variable {
        Variable::new(self, fallback)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.id))
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Symbol::new(id)
    }
}

/// A literal number in an expression.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constant {
    data: f64,
}

impl Constant {
    pub const fn new(data: f64) -> Constant {
        Constant { data }
    }

    pub fn get_data(&self) -> f64 {
        self.data
    }
}

/// A symbolic variable.
///
/// When an expression is evaluated with respect to `symbol`, the variable
/// takes the evaluation point. With respect to any other symbol it is a
/// constant equal to `fallback`. The fallback is fixed per node: it is not a
/// binding to the current value of another variable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Variable {
    symbol: Symbol,
    fallback: f64,
}

impl Variable {
    pub const fn new(symbol: Symbol, fallback: f64) -> Variable {
        Variable { symbol, fallback }
    }

    pub fn get_symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn get_fallback(&self) -> f64 {
        self.fallback
    }
}

/// A unary function applied to a single owned argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Fun {
    tag: FunctionTag,
    arg: Box<Atom>,
}

impl Fun {
    pub fn new(tag: FunctionTag, arg: Atom) -> Fun {
        Fun {
            tag,
            arg: Box::new(arg),
        }
    }

    pub fn get_tag(&self) -> FunctionTag {
        self.tag
    }

    pub fn get_arg(&self) -> &Atom {
        &self.arg
    }
}

/// The two owned children of a binary operator.
#[derive(Clone, Debug, PartialEq)]
pub struct Operands {
    left: Box<Atom>,
    right: Box<Atom>,
}

impl Operands {
    pub fn new(left: Atom, right: Atom) -> Operands {
        Operands {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Atom {
        &self.left
    }

    pub fn right(&self) -> &Atom {
        &self.right
    }
}

/// A general expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Atom {
    Num(Constant),
    Var(Variable),
    Fun(Fun),
    Add(Operands),
    Mul(Operands),
}

impl Atom {
    /// Create a constant.
    pub fn num(data: f64) -> Atom {
        Atom::Num(Constant::new(data))
    }

    /// Create a variable with fallback value `0`.
    pub fn var(symbol: Symbol) -> Atom {
        Atom::Var(Variable::new(symbol, 0.))
    }

    /// Create `left + right`.
    pub fn new_add<A: Into<Atom>, B: Into<Atom>>(left: A, right: B) -> Atom {
        Atom::Add(Operands::new(left.into(), right.into()))
    }

    /// Create `left * right`.
    pub fn new_mul<A: Into<Atom>, B: Into<Atom>>(left: A, right: B) -> Atom {
        Atom::Mul(Operands::new(left.into(), right.into()))
    }

    /// Apply the function `tag` to `arg`.
    pub fn new_fun<A: Into<Atom>>(tag: FunctionTag, arg: A) -> Atom {
        Atom::Fun(Fun::new(tag, arg.into()))
    }

    /// The number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Atom::Num(_) | Atom::Var(_) => 1,
            Atom::Fun(f) => 1 + f.arg.node_count(),
            Atom::Add(o) | Atom::Mul(o) => 1 + o.left.node_count() + o.right.node_count(),
        }
    }

    /// The nesting depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Atom::Num(_) | Atom::Var(_) => 1,
            Atom::Fun(f) => 1 + f.arg.depth(),
            Atom::Add(o) | Atom::Mul(o) => 1 + o.left.depth().max(o.right.depth()),
        }
    }
}

impl From<Constant> for Atom {
    fn from(c: Constant) -> Self {
        Atom::Num(c)
    }
}

impl From<Variable> for Atom {
    fn from(v: Variable) -> Self {
        Atom::Var(v)
    }
}

impl From<Symbol> for Atom {
    fn from(s: Symbol) -> Self {
        Atom::var(s)
    }
}

impl From<Fun> for Atom {
    fn from(f: Fun) -> Self {
        Atom::Fun(f)
    }
}

impl From<&Atom> for Atom {
    fn from(a: &Atom) -> Self {
        a.clone()
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
        impl From<$t> for Constant {
            fn from(n: $t) -> Self {
                Constant::new(n as f64)
            }
        }

        impl From<$t> for Atom {
            fn from(n: $t) -> Self {
                Atom::Num(Constant::from(n))
            }
        }
        )*
    };
}

impl_from_scalar!(f64, f32, i32, i64, u32);

/// Get the symbol for a name, registering the name on first use.
///
/// ```
/// use exprdiff::{state::State, symbol};
///
/// let x = symbol!("x");
/// assert_eq!(State::get_name(x), Some("x"));
/// ```
#[macro_export]
macro_rules! symbol {
    ($id: expr) => {
        $crate::state::State::get_symbol($id)
    };
    ($($id: expr),*) => {
        (
            $(
                $crate::state::State::get_symbol($id),
            )+
        )
    };
}

#[cfg(test)]
mod test {
    use super::{Atom, Constant, Operands, Symbol, Variable};
    use crate::function::{sin, FunctionTag};

    #[test]
    fn scalar_lifting() {
        assert_eq!(Atom::from(3), Atom::num(3.));
        assert_eq!(Atom::from(2.5f32), Atom::num(2.5));
        assert_eq!(Atom::from(7u32), Atom::Num(Constant::new(7.)));
        assert_eq!(Atom::from(-4i64), Atom::num(-4.));
    }

    #[test]
    fn symbol_lifting() {
        let x = Symbol::new(3);
        assert_eq!(Atom::from(x), Atom::Var(Variable::new(x, 0.)));
        assert_eq!(
            Atom::from(x.with_fallback(1.5)),
            Atom::Var(Variable::new(x, 1.5))
        );
    }

    #[test]
    fn composition_owns_children() {
        let x = Symbol::new(1);
        let inner = x * 2;
        let outer = sin(&inner) + &inner;

        match &outer {
            Atom::Add(o) => {
                assert_eq!(o.left(), &Atom::new_fun(FunctionTag::Sin, inner.clone()));
                assert_eq!(o.right(), &inner);
            }
            _ => panic!("Expected a sum"),
        }

        assert_eq!(outer.node_count(), 8);
        assert_eq!(outer.depth(), 4);
    }

    #[test]
    fn structural_equality() {
        let (a, b) = (Symbol::new(1), Symbol::new(2));
        assert_eq!(a + b, Atom::Add(Operands::new(Atom::var(a), Atom::var(b))));
        assert_ne!(a + b, b + a);
        assert_ne!(a * 1, Atom::var(a));
    }
}
