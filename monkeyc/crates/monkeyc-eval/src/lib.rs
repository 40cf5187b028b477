//! monkeyc-eval - Evaluator for the Monkey language.
//!
//! The evaluator collapses an AST into a single [`Value`] drawn from the
//! tagged domain `{Null, Integer, Float, Boolean}`. It is total: every
//! node produces a value, operands evaluate left to right, and constructs
//! the evaluator does not support simply yield `Null`.
//!
//! # Supported surface
//!
//! Literal, prefix, and infix expressions. Identifiers, declarations,
//! returns, conditionals, function literals, and calls are accepted by the
//! parser but evaluate to `Null`: there are no environments yet, so nothing
//! can be resolved or applied.
//!
//! # Numeric model
//!
//! Mixed integer/float/boolean operands are coerced to `f64` before an
//! operator applies ([`Value::as_number`]). An arithmetic result then
//! collapses back to `Integer` exactly when its shortest round-tripping
//! decimal rendering parses as an `i64`; everything else stays `Float`.
//! That classifier, not a `fract() == 0` test, decides the tag, so `-0.0`
//! collapses to `Integer(0)` while a whole float too large for `i64`
//! stays a float. Division by zero follows IEEE float semantics and `%`
//! is IEEE fmod.

mod value;

pub use value::{Value, ValueKind, FALSE, NULL, TRUE};

use monkeyc_par::ast::{Expression, Program, Statement};

/// Evaluates a program: statements run in order and the last statement's
/// value is the program's value. An empty program is `Null`.
pub fn eval_program(program: &Program) -> Value {
    let mut result = NULL;

    for statement in &program.statements {
        result = eval_statement(statement);
    }

    result
}

fn eval_statement(statement: &Statement) -> Value {
    match statement {
        Statement::Expression {
            expression: Some(expression),
            ..
        } => eval_expression(expression),
        // Declarations, returns, blocks, and failed expressions have no
        // runtime meaning yet.
        _ => NULL,
    }
}

fn eval_expression(expression: &Expression) -> Value {
    match expression {
        Expression::IntegerLiteral { value, .. } => Value::Integer(*value),
        Expression::FloatLiteral { value, .. } => Value::Float(*value),
        Expression::Boolean { value, .. } => Value::native_bool(*value),
        Expression::Prefix {
            operator, right, ..
        } => {
            let right = eval_expression(right);
            eval_prefix_expression(operator, right)
        }
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expression(left);
            let right = eval_expression(right);
            eval_infix_expression(operator, left, right)
        }
        _ => NULL,
    }
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => eval_bang_operator(right),
        "-" => eval_minus_operator(right),
        _ => NULL,
    }
}

/// Logical not. Numbers are truthy unless exactly zero (either zero for
/// floats); anything that is not a boolean or a number is falsy.
fn eval_bang_operator(right: Value) -> Value {
    match right {
        Value::Boolean(value) => Value::native_bool(!value),
        Value::Integer(value) => Value::native_bool(value == 0),
        Value::Float(value) => Value::native_bool(value == 0.0),
        _ => FALSE,
    }
}

/// Arithmetic negation. Booleans negate through their numeric reading,
/// so `-true` is `-1` and `-false` is `0`.
fn eval_minus_operator(right: Value) -> Value {
    match right {
        Value::Boolean(true) => Value::Integer(-1),
        Value::Boolean(false) => Value::Integer(0),
        Value::Integer(value) => Value::Integer(-value),
        Value::Float(value) => Value::Float(-value),
        _ => NULL,
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Boolean(left), Value::Boolean(right)) => {
            eval_boolean_infix_expression(operator, left, right)
        }
        _ => eval_numeric_infix_expression(operator, left, right),
    }
}

/// Two boolean operands: equality compares the canonical instances
/// directly, ordering comparisons go through numeric coercion, and any
/// other operator is undefined on booleans.
fn eval_boolean_infix_expression(operator: &str, left: bool, right: bool) -> Value {
    match operator {
        "==" => Value::native_bool(left == right),
        "!=" => Value::native_bool(left != right),
        "<" | ">" | "<=" | ">=" => eval_numeric_infix_expression(
            operator,
            Value::native_bool(left),
            Value::native_bool(right),
        ),
        _ => NULL,
    }
}

/// Mixed operands: both sides coerce to `f64`, comparisons produce the
/// canonical booleans, arithmetic collapses through [`numeric_result`].
fn eval_numeric_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    let left = left.as_number();
    let right = right.as_number();

    match operator {
        "==" => Value::native_bool(left == right),
        "!=" => Value::native_bool(left != right),
        "<" => Value::native_bool(left < right),
        ">" => Value::native_bool(left > right),
        "<=" => Value::native_bool(left <= right),
        ">=" => Value::native_bool(left >= right),
        "+" => numeric_result(left + right),
        "-" => numeric_result(left - right),
        "*" => numeric_result(left * right),
        "/" => numeric_result(left / right),
        "%" => numeric_result(left % right),
        _ => NULL,
    }
}

/// Collapses an arithmetic result to `Integer` when its shortest
/// round-tripping decimal rendering is a plain integer that fits `i64`.
///
/// `i64::from_str` accepts exactly an optional sign followed by digits,
/// so the parse doubles as the `-?[0-9]+` shape check: `inf`, `NaN`, and
/// renderings with a fractional part all fall through to `Float`.
fn numeric_result(value: f64) -> Value {
    match value.to_string().parse::<i64>() {
        Ok(integer) => Value::Integer(integer),
        Err(_) => Value::Float(value),
    }
}
