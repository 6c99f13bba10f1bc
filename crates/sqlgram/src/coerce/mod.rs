//! Coercion engine.
//!
//! Promotes loosely typed [`Operand`]s into the grammar node a position
//! requires. Every function here tries, in order:
//!
//! 1. the operand already is the target node;
//! 2. the operand is a lower node of the same family and is wrapped;
//! 3. the operand is a higher node of the same family and is parenthesized;
//! 4. the operand is a table column and becomes a column reference;
//! 5. the operand is a literal and becomes an unsigned value (negative
//!    numbers become a signed factor);
//! 6. the operand is a finished SELECT and becomes a scalar subquery.
//!
//! Anything else is a [`CoercionError`]. Builders turn that error into a
//! panic naming the function and argument through [`must`].

mod operand;

pub use operand::Operand;

use crate::error::{CoercionError, Misuse, fatal};
use crate::grammar::*;
use crate::value::Value;

type Result<T> = std::result::Result<T, CoercionError>;

/// Unwrap a coercion result or abort with a diagnostic naming the caller.
#[track_caller]
pub(crate) fn must<T>(function: &'static str, argument: &'static str, result: Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(source) => fatal(Misuse::Coercion {
            function,
            argument,
            source,
        }),
    }
}

fn retarget(target: &'static str) -> impl FnOnce(CoercionError) -> CoercionError {
    move |e| CoercionError::new(target, e.operand)
}

fn literal(value: Value) -> NonParenthesizedValueExpressionPrimary {
    NonParenthesizedValueExpressionPrimary::UnsignedValue(UnsignedValueSpecification::literal(
        value,
    ))
}

fn parenthesized(value: impl Into<ValueExpression>) -> NonParenthesizedValueExpressionPrimary {
    NonParenthesizedValueExpressionPrimary::parenthesized(value.into())
}

pub fn non_parenthesized(op: Operand) -> Result<NonParenthesizedValueExpressionPrimary> {
    const TARGET: &str = "NonParenthesizedValueExpressionPrimary";
    use NonParenthesizedValueExpressionPrimary as P;

    match op {
        Operand::Primary(p) => Ok(p),
        Operand::ColumnReference(c) => Ok(P::ColumnReference(c)),
        Operand::Aggregate(a) => Ok(P::SetFunction(a.into_function())),
        Operand::RowPredicand(RowValuePredicand::Primary(p))
        | Operand::Row(RowValueExpression::Primary(p)) => Ok(p),
        Operand::Character(CharacterValueExpression::Primary(p)) => Ok(p),
        Operand::ValueExpression(ValueExpression::Boolean(_))
        | Operand::Boolean(_)
        | Operand::BooleanTerm(_)
        | Operand::BooleanFactor(_)
        | Operand::BooleanTest(_)
        | Operand::BooleanPrimary(_)
        | Operand::Predicate(_) => Err(CoercionError::new(TARGET, op.kind())),
        Operand::ValueExpression(v) => Ok(parenthesized(v)),
        Operand::Common(c) => Ok(parenthesized(c)),
        Operand::Numeric(NumericValueExpression::Term(NumericTerm::Factor(NumericFactor {
            sign: None,
            primary,
        }))) => Ok(primary),
        Operand::Numeric(n) => Ok(parenthesized(CommonValueExpression::from(n))),
        Operand::Character(c) => Ok(parenthesized(CommonValueExpression::from(c))),
        Operand::StringFunction(f) => Ok(parenthesized(CommonValueExpression::from(
            CharacterValueExpression::from(f.into_function()),
        ))),
        Operand::Datetime(d) => Ok(parenthesized(CommonValueExpression::from(d))),
        Operand::Interval(IntervalValueExpression::Primary(p)) => Ok(p),
        Operand::Row(r) => Ok(parenthesized(r)),
        Operand::RowPredicand(r) => Ok(parenthesized(r)),
        Operand::Column(c) => Ok(P::ColumnReference(c.reference())),
        Operand::Value(v) => match NumericValueExpression::negative_literal(&v) {
            Some(negative) => Ok(parenthesized(CommonValueExpression::from(negative))),
            None => Ok(literal(v)),
        },
        Operand::Selection(s) => s
            .subquery()
            .map(P::ScalarSubquery)
            .ok_or_else(|| CoercionError::new(TARGET, "empty Selection")),
        Operand::Query(q) => Ok(P::ScalarSubquery(Subquery::from(*q))),
        Operand::Table(_) | Operand::DerivedTable(_) | Operand::Sort(_) => {
            Err(CoercionError::new(TARGET, op.kind()))
        }
    }
}

pub fn row_value_predicand(op: Operand) -> Result<RowValuePredicand> {
    const TARGET: &str = "RowValuePredicand";

    match op {
        Operand::RowPredicand(r) => Ok(r),
        Operand::Common(c) | Operand::ValueExpression(ValueExpression::Common(c)) => {
            Ok(RowValuePredicand::Common(c))
        }
        Operand::Numeric(n) => Ok(RowValuePredicand::Common(n.into())),
        Operand::Character(CharacterValueExpression::Function(f)) => Ok(
            RowValuePredicand::Common(CharacterValueExpression::Function(f).into()),
        ),
        Operand::StringFunction(f) => Ok(RowValuePredicand::Common(
            CharacterValueExpression::from(f.into_function()).into(),
        )),
        Operand::Datetime(d) => Ok(RowValuePredicand::Common(d.into())),
        Operand::Value(v) if v.is_negative() => {
            let negative = NumericValueExpression::negative_literal(&v)
                .ok_or_else(|| CoercionError::new(TARGET, "literal"))?;
            Ok(RowValuePredicand::Common(negative.into()))
        }
        other => non_parenthesized(other)
            .map(RowValuePredicand::Primary)
            .map_err(retarget(TARGET)),
    }
}

pub fn row_value_expression(op: Operand) -> Result<RowValueExpression> {
    match op {
        Operand::Row(r) | Operand::ValueExpression(ValueExpression::Row(r)) => Ok(r),
        other => non_parenthesized(other)
            .map(RowValueExpression::Primary)
            .map_err(retarget("RowValueExpression")),
    }
}

/// An IN list item. Negative literals keep their bare sign instead of being
/// parenthesized as a primary.
pub fn in_value(op: Operand) -> Result<ValueExpression> {
    match op {
        Operand::Value(v) if v.is_negative() => value_expression(Operand::Value(v)),
        other => row_value_expression(other).map(ValueExpression::Row),
    }
}

pub fn value_expression(op: Operand) -> Result<ValueExpression> {
    match op {
        Operand::ValueExpression(v) => Ok(v),
        Operand::Common(c) => Ok(c.into()),
        Operand::Numeric(n) => Ok(CommonValueExpression::from(n).into()),
        Operand::Character(c) => Ok(CommonValueExpression::from(c).into()),
        Operand::StringFunction(f) => Ok(CommonValueExpression::from(
            CharacterValueExpression::from(f.into_function()),
        )
        .into()),
        Operand::Datetime(d) => Ok(CommonValueExpression::from(d).into()),
        Operand::Interval(i) => Ok(CommonValueExpression::from(i).into()),
        Operand::Row(r) => Ok(r.into()),
        Operand::RowPredicand(r) => Ok(r.into()),
        Operand::Boolean(_)
        | Operand::BooleanTerm(_)
        | Operand::BooleanFactor(_)
        | Operand::BooleanTest(_)
        | Operand::BooleanPrimary(_)
        | Operand::Predicate(_) => boolean_value_expression(op).map(ValueExpression::from),
        Operand::Value(v) if v.is_negative() => {
            row_value_predicand(Operand::Value(v)).map(Into::into)
        }
        other => non_parenthesized(other)
            .map(Into::into)
            .map_err(retarget("ValueExpression")),
    }
}

pub fn common_value_expression(op: Operand) -> Result<CommonValueExpression> {
    match value_expression(op) {
        Ok(ValueExpression::Common(c)) => Ok(c),
        Ok(ValueExpression::Boolean(_)) => Err(CoercionError::new(
            "CommonValueExpression",
            "BooleanValueExpression",
        )),
        Ok(other) => Ok(NumericValueExpression::from(parenthesized(other)).into()),
        Err(e) => Err(retarget("CommonValueExpression")(e)),
    }
}

pub fn numeric_value_expression(op: Operand) -> Result<NumericValueExpression> {
    match op {
        Operand::Numeric(n)
        | Operand::Common(CommonValueExpression::Numeric(n))
        | Operand::ValueExpression(ValueExpression::Common(CommonValueExpression::Numeric(n)))
        | Operand::RowPredicand(RowValuePredicand::Common(CommonValueExpression::Numeric(n))) => {
            Ok(n)
        }
        Operand::Value(v) if v.is_negative() => NumericValueExpression::negative_literal(&v)
            .ok_or_else(|| CoercionError::new("NumericValueExpression", "literal")),
        other => non_parenthesized(other)
            .map(NumericValueExpression::from)
            .map_err(retarget("NumericValueExpression")),
    }
}

pub fn numeric_term(op: Operand) -> Result<NumericTerm> {
    numeric_value_expression(op)
        .map(NumericValueExpression::into_term)
        .map_err(retarget("Term"))
}

pub fn numeric_factor(op: Operand) -> Result<NumericFactor> {
    numeric_term(op)
        .map(NumericTerm::into_factor)
        .map_err(retarget("Factor"))
}

pub fn character_value_expression(op: Operand) -> Result<CharacterValueExpression> {
    match op {
        Operand::Character(c)
        | Operand::Common(CommonValueExpression::String(StringValueExpression::Character(c)))
        | Operand::ValueExpression(ValueExpression::Common(CommonValueExpression::String(
            StringValueExpression::Character(c),
        ))) => Ok(c),
        Operand::StringFunction(f) => Ok(f.into_function().into()),
        other => non_parenthesized(other)
            .map(CharacterValueExpression::Primary)
            .map_err(retarget("CharacterValueExpression")),
    }
}

pub fn datetime_value_expression(op: Operand) -> Result<DatetimeValueExpression> {
    match op {
        Operand::Datetime(d) | Operand::Common(CommonValueExpression::Datetime(d)) => Ok(d),
        other => non_parenthesized(other)
            .map(DatetimeValueExpression::Primary)
            .map_err(retarget("DatetimeValueExpression")),
    }
}

pub fn interval_value_expression(op: Operand) -> Result<IntervalValueExpression> {
    match op {
        Operand::Interval(i) | Operand::Common(CommonValueExpression::Interval(i)) => Ok(i),
        other => non_parenthesized(other)
            .map(IntervalValueExpression::Primary)
            .map_err(retarget("IntervalValueExpression")),
    }
}

pub fn boolean_value_expression(op: Operand) -> Result<BooleanValueExpression> {
    match op {
        Operand::Boolean(b) => Ok(b),
        Operand::ValueExpression(ValueExpression::Boolean(b)) => Ok(*b),
        Operand::BooleanTerm(t) => Ok(t.into()),
        Operand::BooleanFactor(f) => Ok(f.into()),
        Operand::BooleanTest(t) => Ok(t.into()),
        Operand::BooleanPrimary(p) => Ok(p.into()),
        Operand::Predicate(p) => Ok(p.into()),
        other => non_parenthesized(other)
            .map(|p| BooleanPredicand::Primary(p).into())
            .map_err(retarget("BooleanValueExpression")),
    }
}

pub fn boolean_term(op: Operand) -> Result<BooleanTerm> {
    boolean_value_expression(op)
        .map(BooleanValueExpression::into_term)
        .map_err(retarget("BooleanTerm"))
}

pub fn boolean_factor(op: Operand) -> Result<BooleanFactor> {
    boolean_term(op)
        .map(BooleanTerm::into_factor)
        .map_err(retarget("BooleanFactor"))
}

pub fn boolean_test(op: Operand) -> Result<BooleanTest> {
    boolean_factor(op)
        .map(BooleanFactor::into_test)
        .map_err(retarget("BooleanTest"))
}

pub fn boolean_primary(op: Operand) -> Result<BooleanPrimary> {
    boolean_test(op)
        .map(BooleanTest::into_primary)
        .map_err(retarget("BooleanPrimary"))
}

pub fn predicate(op: Operand) -> Result<Predicate> {
    match boolean_primary(op) {
        Ok(BooleanPrimary::Predicate(p)) => Ok(p),
        Ok(_) => Err(CoercionError::new("Predicate", "BooleanPredicand")),
        Err(e) => Err(retarget("Predicate")(e)),
    }
}

pub fn column_reference(op: Operand) -> Result<ColumnReference> {
    match op {
        Operand::ColumnReference(c) => Ok(c),
        Operand::Column(c) => Ok(c.reference()),
        other => match non_parenthesized(other) {
            Ok(NonParenthesizedValueExpressionPrimary::ColumnReference(c)) => Ok(c),
            Ok(_) => Err(CoercionError::new(
                "ColumnReference",
                "NonParenthesizedValueExpressionPrimary",
            )),
            Err(e) => Err(retarget("ColumnReference")(e)),
        },
    }
}

pub fn sort_specification(op: Operand) -> Result<SortSpecification> {
    match op {
        Operand::Sort(s) => Ok(s),
        other => value_expression(other)
            .map(SortSpecification::new)
            .map_err(retarget("SortSpecification")),
    }
}

pub fn subquery(op: Operand) -> Result<Subquery> {
    match non_parenthesized(op) {
        Ok(NonParenthesizedValueExpressionPrimary::ScalarSubquery(s)) => Ok(s),
        Ok(_) => Err(CoercionError::new(
            "Subquery",
            "NonParenthesizedValueExpressionPrimary",
        )),
        Err(e) => Err(retarget("Subquery")(e)),
    }
}
