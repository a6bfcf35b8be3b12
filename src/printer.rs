//! Printing of expressions.
//!
//! Named symbols are printed with their name, see [State](crate::state::State).
//! Symbols without a name are printed as `v` followed by their id.

use std::fmt::{self, Write};

use crate::{
    atom::{Atom, Constant, Fun, Operands, Symbol, Variable},
    state::State,
};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PrintMode {
    #[default]
    Default,
    Mathematica,
}

/// A printer for an expression in a given [PrintMode].
///
/// ```
/// use exprdiff::{atom::Symbol, function::sin, printer::{AtomPrinter, PrintMode}};
///
/// let x = Symbol::new(1_000_000);
/// let e = sin(x * 2);
/// assert_eq!(format!("{}", e), "sin(v1000000*2)");
/// assert_eq!(
///     format!("{}", AtomPrinter::new(&e, PrintMode::Mathematica)),
///     "Sin[v1000000*2]"
/// );
/// ```
pub struct AtomPrinter<'a> {
    pub atom: &'a Atom,
    pub print_mode: PrintMode,
}

impl<'a> AtomPrinter<'a> {
    pub fn new(atom: &'a Atom, print_mode: PrintMode) -> AtomPrinter<'a> {
        AtomPrinter { atom, print_mode }
    }
}

impl fmt::Display for AtomPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.atom.fmt_output(f, self.print_mode)
    }
}

impl Atom {
    /// Get a printer for this expression.
    pub fn printer(&self, print_mode: PrintMode) -> AtomPrinter<'_> {
        AtomPrinter::new(self, print_mode)
    }

    fn fmt_output(&self, f: &mut fmt::Formatter, print_mode: PrintMode) -> fmt::Result {
        match self {
            Atom::Num(n) => n.fmt_output(f),
            Atom::Var(v) => v.fmt_output(f),
            Atom::Fun(fun) => fun.fmt_output(f, print_mode),
            Atom::Add(a) => a.fmt_output(f, print_mode, '+'),
            Atom::Mul(m) => m.fmt_output(f, print_mode, '*'),
        }
    }

    /// Print the atom as the operand of `op`, adding parentheses when needed.
    fn fmt_operand(
        &self,
        f: &mut fmt::Formatter,
        print_mode: PrintMode,
        op: char,
        is_right: bool,
    ) -> fmt::Result {
        let needs_parens = match self {
            Atom::Add(_) => op == '*',
            Atom::Num(n) => is_right && n.get_data().is_sign_negative(),
            _ => false,
        };

        if needs_parens {
            f.write_char('(')?;
            self.fmt_output(f, print_mode)?;
            f.write_char(')')
        } else {
            self.fmt_output(f, print_mode)
        }
    }
}

impl Constant {
    fn fmt_output(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get_data())
    }
}

impl Variable {
    fn fmt_output(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.get_symbol().fmt_output(f)
    }
}

impl Symbol {
    fn fmt_output(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match State::get_name(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "v{}", self.get_id()),
        }
    }
}

impl Fun {
    fn fmt_output(&self, f: &mut fmt::Formatter, print_mode: PrintMode) -> fmt::Result {
        let name = self.get_tag().get_name();
        match print_mode {
            PrintMode::Default => {
                f.write_str(name)?;
                f.write_char('(')?;
                self.get_arg().fmt_output(f, print_mode)?;
                f.write_char(')')
            }
            PrintMode::Mathematica => {
                let mut chars = name.chars();
                if let Some(c) = chars.next() {
                    f.write_char(c.to_ascii_uppercase())?;
                    f.write_str(chars.as_str())?;
                }
                f.write_char('[')?;
                self.get_arg().fmt_output(f, print_mode)?;
                f.write_char(']')
            }
        }
    }
}

impl Operands {
    fn fmt_output(&self, f: &mut fmt::Formatter, print_mode: PrintMode, op: char) -> fmt::Result {
        self.left().fmt_operand(f, print_mode, op, false)?;
        f.write_char(op)?;
        self.right().fmt_operand(f, print_mode, op, true)
    }
}

macro_rules! impl_display {
    ($($t:ty),*) => {
        $(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                self.fmt_output(f)
            }
        }
        )*
    };
}

impl_display!(Constant, Variable, Symbol);

impl fmt::Display for Fun {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_output(f, PrintMode::Default)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_output(f, PrintMode::Default)
    }
}

#[cfg(test)]
mod test {
    use super::PrintMode;
    use crate::{
        atom::{Atom, Constant, Symbol},
        function::sin,
        state::State,
    };

    #[test]
    fn scenarios() {
        let x = State::get_symbol_with_id("printer_x", 2_000_001).unwrap();

        assert_eq!(sin(x).to_string(), "sin(printer_x)");
        assert_eq!((Constant::new(3.) * x).to_string(), "3*printer_x");
        assert_eq!((x + 5).to_string(), "printer_x+5");
        assert_eq!((-x).to_string(), "-1*printer_x");
        assert_eq!((x * x).to_string(), "printer_x*printer_x");
    }

    #[test]
    fn parentheses() {
        let x = State::get_symbol_with_id("printer_y", 2_000_002).unwrap();
        let z = Symbol::new(2_000_003);

        assert_eq!(((x + 1) * z).to_string(), "(printer_y+1)*v2000003");
        assert_eq!((x * (z + 1)).to_string(), "printer_y*(v2000003+1)");
        assert_eq!((x + z * 2).to_string(), "printer_y+v2000003*2");
        assert_eq!((x * -2.5).to_string(), "printer_y*(-2.5)");
        assert_eq!((x - 2).to_string(), "printer_y+-1*2");
        assert_eq!((1 + (x + z)).to_string(), "1+printer_y+v2000003");
    }

    #[test]
    fn mathematica() {
        let x = Symbol::new(2_000_004);
        let e = sin(sin(x) + Atom::num(0.5));
        assert_eq!(
            e.printer(PrintMode::Mathematica).to_string(),
            "Sin[Sin[v2000004]+0.5]"
        );
    }
}
