//! Basic arithmetic.

use agentframe::{Error, Params, Result, Tool, param_number, param_str};
use serde_json::{Number, Value};

/// Arithmetic on two numbers.
///
/// Integer operands stay integers for `add`, `subtract` and `multiply`
/// unless the result overflows; `divide` always yields a float.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorTool;

impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs basic arithmetic operations (add, subtract, multiply, divide)"
    }

    fn execute(&self, params: &Params) -> Result<Value> {
        let operation = param_str(params, "operation")?;
        let a = param_number(params, "a")?;
        let b = param_number(params, "b")?;

        if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
            let exact = match operation {
                "add" => x.checked_add(y),
                "subtract" => x.checked_sub(y),
                "multiply" => x.checked_mul(y),
                _ => None,
            };
            if let Some(n) = exact {
                return Ok(Value::from(n));
            }
        }

        let (x, y) = (as_f64(a)?, as_f64(b)?);
        let result = match operation {
            "add" => x + y,
            "subtract" => x - y,
            "multiply" => x * y,
            "divide" if y == 0.0 => return Err(Error::invalid("Cannot divide by zero")),
            "divide" => x / y,
            other => return Err(Error::invalid(format!("Unsupported operation: {other}"))),
        };

        Number::from_f64(result)
            .map(Value::Number)
            .ok_or_else(|| Error::invalid(format!("{operation} produced a non-finite result")))
    }
}

fn as_f64(n: &Number) -> Result<f64> {
    n.as_f64()
        .ok_or_else(|| Error::invalid(format!("{n} is not representable as f64")))
}
