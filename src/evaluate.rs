use crate::atom::{Atom, Constant, Fun, Symbol, Variable};

impl Constant {
    /// The stored literal, for any symbol and point.
    #[inline]
    pub fn evaluate(&self, _symbol: Symbol, _x: f64) -> f64 {
        self.get_data()
    }
}

impl Variable {
    /// `x` when evaluated with respect to this variable's symbol,
    /// the fallback value otherwise.
    #[inline]
    pub fn evaluate(&self, symbol: Symbol, x: f64) -> f64 {
        if symbol == self.get_symbol() {
            x
        } else {
            self.get_fallback()
        }
    }
}

impl Fun {
    #[inline]
    pub fn evaluate(&self, symbol: Symbol, x: f64) -> f64 {
        self.get_tag().apply(self.get_arg().evaluate(symbol, x))
    }
}

impl Atom {
    /// Evaluate the expression where the variable `symbol` takes the value `x`.
    ///
    /// Values outside the natural domain of a function are not guarded against:
    /// `NaN` and infinities propagate as in ordinary arithmetic.
    pub fn evaluate(&self, symbol: Symbol, x: f64) -> f64 {
        match self {
            Atom::Num(n) => n.evaluate(symbol, x),
            Atom::Var(v) => v.evaluate(symbol, x),
            Atom::Fun(f) => f.evaluate(symbol, x),
            Atom::Add(a) => a.left().evaluate(symbol, x) + a.right().evaluate(symbol, x),
            Atom::Mul(m) => m.left().evaluate(symbol, x) * m.right().evaluate(symbol, x),
        }
    }
}
