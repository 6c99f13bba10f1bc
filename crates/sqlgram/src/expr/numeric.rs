use crate::coerce::{self, Operand, must};
use crate::grammar::*;

/// `left + right`
pub fn add(left: impl Into<Operand>, right: impl Into<Operand>) -> NumericValueExpression {
    NumericValueExpression::Add(
        Box::new(must(
            "add",
            "left",
            coerce::numeric_value_expression(left.into()),
        )),
        must("add", "right", coerce::numeric_term(right.into())),
    )
}

/// `left - right`
pub fn sub(left: impl Into<Operand>, right: impl Into<Operand>) -> NumericValueExpression {
    NumericValueExpression::Subtract(
        Box::new(must(
            "sub",
            "left",
            coerce::numeric_value_expression(left.into()),
        )),
        must("sub", "right", coerce::numeric_term(right.into())),
    )
}

/// `left * right`
pub fn mul(left: impl Into<Operand>, right: impl Into<Operand>) -> NumericValueExpression {
    NumericTerm::Multiply(
        Box::new(must("mul", "left", coerce::numeric_term(left.into()))),
        must("mul", "right", coerce::numeric_factor(right.into())),
    )
    .into()
}

/// `left / right`
pub fn div(left: impl Into<Operand>, right: impl Into<Operand>) -> NumericValueExpression {
    NumericTerm::Divide(
        Box::new(must("div", "left", coerce::numeric_term(left.into()))),
        must("div", "right", coerce::numeric_factor(right.into())),
    )
    .into()
}

/// `-x`
pub fn neg(x: impl Into<Operand>) -> NumericValueExpression {
    let factor = must("neg", "x", coerce::numeric_factor(x.into()));
    let primary = match factor.sign {
        None => factor.primary,
        Some(_) => NonParenthesizedValueExpressionPrimary::Parenthesized(Box::new(
            CommonValueExpression::from(NumericValueExpression::from(factor)).into(),
        )),
    };
    NumericFactor {
        sign: Some(Sign::Minus),
        primary,
    }
    .into()
}

pub fn current_date() -> DatetimeValueExpression {
    DatetimeValueExpression::Function(DatetimeValueFunction::CurrentDate)
}

pub fn current_time() -> DatetimeValueExpression {
    DatetimeValueExpression::Function(DatetimeValueFunction::CurrentTime)
}

pub fn current_timestamp() -> DatetimeValueExpression {
    DatetimeValueExpression::Function(DatetimeValueFunction::CurrentTimestamp)
}

/// Mark `x` as an interval value.
pub fn interval(x: impl Into<Operand>) -> IntervalValueExpression {
    must(
        "interval",
        "x",
        coerce::interval_value_expression(x.into()),
    )
}
