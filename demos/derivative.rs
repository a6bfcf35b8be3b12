use exprdiff::{function::sin, symbol, Expression};

fn main() {
    let (x, y) = symbol!("x", "y");

    let inputs = [
        sin(x),
        3 * x,
        x + 5,
        -x,
        x * x,
        x * y.with_fallback(2.) + sin(x * x),
    ];

    for input in inputs {
        println!(
            "d({})/dx at x = 2: value = {}, derivative = {}",
            input,
            input.value(x, 2.),
            input.derivative(x).at(2.)
        );
    }
}
