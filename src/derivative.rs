use crate::atom::{Atom, Constant, Expression, Fun, Symbol, Variable};

impl Constant {
    /// Always zero.
    #[inline]
    pub fn evaluate_derivative(&self, _symbol: Symbol, _x: f64) -> f64 {
        0.
    }
}

impl Variable {
    /// One with respect to this variable's symbol, zero otherwise.
    #[inline]
    pub fn evaluate_derivative(&self, symbol: Symbol, _x: f64) -> f64 {
        if symbol == self.get_symbol() {
            1.
        } else {
            0.
        }
    }
}

impl Fun {
    /// Apply the chain rule: `F'(g(x)) * g'(x)`.
    #[inline]
    pub fn evaluate_derivative(&self, symbol: Symbol, x: f64) -> f64 {
        let arg = self.get_arg();
        self.get_tag().derivative_at(arg.evaluate(symbol, x)) * arg.evaluate_derivative(symbol, x)
    }
}

impl Atom {
    /// Evaluate the partial derivative of the expression with respect to
    /// `symbol` at the point where `symbol` takes the value `x`.
    pub fn evaluate_derivative(&self, symbol: Symbol, x: f64) -> f64 {
        match self {
            Atom::Num(n) => n.evaluate_derivative(symbol, x),
            Atom::Var(v) => v.evaluate_derivative(symbol, x),
            Atom::Fun(f) => f.evaluate_derivative(symbol, x),
            Atom::Add(a) => {
                a.left().evaluate_derivative(symbol, x) + a.right().evaluate_derivative(symbol, x)
            }
            Atom::Mul(m) => {
                // no shortcut for literal factors: `c * v` has derivative `c`
                // only with respect to the symbol of `v`
                let (l, r) = (m.left(), m.right());
                l.evaluate_derivative(symbol, x) * r.evaluate(symbol, x)
                    + l.evaluate(symbol, x) * r.evaluate_derivative(symbol, x)
            }
        }
    }
}

/// The derivative of an expression with respect to a fixed symbol, which
/// can be evaluated at any point.
///
/// Created by [Expression::derivative].
pub struct Derivative<'a, E: ?Sized> {
    expr: &'a E,
    symbol: Symbol,
}

impl<E: ?Sized> Clone for Derivative<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Derivative<'_, E> {}

impl<'a, E: Expression + ?Sized> Derivative<'a, E> {
    pub fn new(expr: &'a E, symbol: Symbol) -> Derivative<'a, E> {
        Derivative { expr, symbol }
    }

    pub fn get_symbol(&self) -> Symbol {
        self.symbol
    }

    /// Evaluate the derivative at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.expr.diff(self.symbol, x)
    }

    /// Evaluate the derivative at every point in `points`.
    pub fn at_points(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.at(*x)).collect()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        atom::{Atom, Constant, Symbol},
        function::sin,
        Expression,
    };

    #[test]
    fn leaves() {
        let x = Symbol::new(1);
        let y = Symbol::new(2);

        assert_eq!(Constant::new(4.).diff(x, 3.), 0.);
        assert_eq!(x.with_fallback(2.).diff(x, 3.), 1.);
        assert_eq!(x.with_fallback(2.).diff(y, 3.), 0.);
    }

    #[test]
    fn product_rule() {
        let x = Symbol::new(1);
        let a = sin(x) + 2;
        let b = x * x + x;
        let p = &a * &b;

        for t in [-1.5, 0., 0.3, 2.] {
            assert_eq!(
                p.diff(x, t),
                a.diff(x, t) * b.value(x, t) + a.value(x, t) * b.diff(x, t)
            );
        }
    }

    #[test]
    fn constant_times_foreign_variable() {
        // y acts as the constant 5 when differentiating with respect to x
        let x = Symbol::new(1);
        let y = Symbol::new(2).with_fallback(5.);
        let e = Constant::new(3.) * y;

        assert_eq!(e.diff(x, 2.), 0.);
        assert_eq!(e.value(x, 2.), 15.);
        assert_eq!(e.diff(y.get_symbol(), 2.), 3.);

        let e2 = y * x;
        assert_eq!(e2.diff(x, 2.), 5.);
    }

    #[test]
    fn chain_rule() {
        let x = Symbol::new(1);
        let inner = 3 * x * x;
        let e = sin(&inner);

        for t in [-2., 0., 0.7] {
            assert_eq!(
                e.diff(x, t),
                inner.value(x, t).cos() * inner.diff(x, t)
            );
        }
    }

    #[test]
    fn derivative_view() {
        let x = Symbol::new(1);
        let e = x * x * x;
        let d = e.derivative(x);

        assert_eq!(d.get_symbol(), x);
        assert_eq!(d.at(2.), 12.);
        assert_eq!(d.at_points(&[0., 1., -1.]), vec![0., 3., 3.]);

        let by_ref: &Atom = &e;
        assert_eq!(by_ref.derivative(x).at(2.), 12.);
    }
}
