use super::{Atom, Constant, Fun, Symbol, Variable};

/// Unary minus, expressed as a multiplication by the constant `-1`.
///
/// Node kinds opt in by implementing this trait; [Constant] does not, so a
/// literal has to be negated by writing the negative number itself.
///
/// ```compile_fail
/// use exprdiff::atom::Constant;
///
/// let c = -Constant::new(2.);
/// ```
pub trait Negatable: Into<Atom> {
    fn negate(self) -> Atom {
        Atom::new_mul(Constant::new(-1.), self)
    }
}

impl Negatable for Atom {}
impl Negatable for &Atom {}
impl Negatable for Symbol {}
impl Negatable for Variable {}
impl Negatable for Fun {}

macro_rules! impl_neg {
    ($($t:ty),*) => {
        $(
        impl std::ops::Neg for $t {
            type Output = Atom;
            fn neg(self) -> Atom {
                self.negate()
            }
        }
        )*
    };
}

impl_neg!(Atom, &Atom, Symbol, Variable, Fun);

/// `left - right` as `left + (-1 * right)`.
fn new_sub<A: Into<Atom>, B: Into<Atom>>(left: A, right: B) -> Atom {
    let right: Atom = right.into();
    Atom::new_add(left, right.negate())
}

/// Implements the binary operators for every combination of operand kinds.
///
/// Any node kind on the left accepts anything that converts into an [Atom]
/// on the right. A number on the left accepts every node kind on the right;
/// only `f64` and `i32` are accepted there, so that an unsuffixed literal such
/// as `3 * x` has a single candidate impl. Numbers are wrapped in a [Constant] before the node is built.
macro_rules! impl_binary_ops {
    ($op_trait:ident, $op_method:ident, $build:path) => {
        impl_binary_ops!(@node $op_trait, $op_method, $build; Atom, &Atom, Symbol, Variable, Constant, Fun);
        impl_binary_ops!(@scalar $op_trait, $op_method, $build; f64, i32);
    };
    (@node $op_trait:ident, $op_method:ident, $build:path; $($t:ty),*) => {
        $(
        // node op T
        impl<T: Into<Atom>> std::ops::$op_trait<T> for $t {
            type Output = Atom;
            fn $op_method(self, rhs: T) -> Atom {
                $build(self, rhs)
            }
        }
        )*
    };
    (@scalar $op_trait:ident, $op_method:ident, $build:path; $($s:ty),*) => {
        $(
        impl_binary_ops!(@scalar_node $op_trait, $op_method, $build, $s; Atom, &Atom, Symbol, Variable, Constant, Fun);
        )*
    };
    (@scalar_node $op_trait:ident, $op_method:ident, $build:path, $s:ty; $($t:ty),*) => {
        $(
        // number op node
        impl std::ops::$op_trait<$t> for $s {
            type Output = Atom;
            fn $op_method(self, rhs: $t) -> Atom {
                $build(self, rhs)
            }
        }
        )*
    };
}

impl_binary_ops!(Add, add, Atom::new_add);
impl_binary_ops!(Mul, mul, Atom::new_mul);
impl_binary_ops!(Sub, sub, new_sub);
