//! Value expression productions.
//!
//! The nesting follows SQL-92: a value expression is either common (numeric,
//! string, datetime, interval), boolean, or a row value. Untyped primaries
//! (columns, literals, aggregates, scalar subqueries) are carried as the row
//! value special case until a typed position asks for them.

use super::boolean::BooleanValueExpression;
use super::function::{AggregateFunction, StringValueFunction};
use super::query::Subquery;
use crate::meta::RelationRef;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpression {
    Common(CommonValueExpression),
    Boolean(Box<BooleanValueExpression>),
    Row(RowValueExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommonValueExpression {
    Numeric(NumericValueExpression),
    String(StringValueExpression),
    Datetime(DatetimeValueExpression),
    Interval(IntervalValueExpression),
}

/// `<numeric value expression> ::= <term> | <nve> + <term> | <nve> - <term>`
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValueExpression {
    Term(NumericTerm),
    Add(Box<NumericValueExpression>, NumericTerm),
    Subtract(Box<NumericValueExpression>, NumericTerm),
}

/// `<term> ::= <factor> | <term> * <factor> | <term> / <factor>`
#[derive(Debug, Clone, PartialEq)]
pub enum NumericTerm {
    Factor(NumericFactor),
    Multiply(Box<NumericTerm>, NumericFactor),
    Divide(Box<NumericTerm>, NumericFactor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// `<factor> ::= [ <sign> ] <numeric primary>`
#[derive(Debug, Clone, PartialEq)]
pub struct NumericFactor {
    pub sign: Option<Sign>,
    pub primary: NonParenthesizedValueExpressionPrimary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StringValueExpression {
    Character(CharacterValueExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CharacterValueExpression {
    Primary(NonParenthesizedValueExpressionPrimary),
    Function(Box<StringValueFunction>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatetimeValueExpression {
    Primary(NonParenthesizedValueExpressionPrimary),
    Function(DatetimeValueFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatetimeValueFunction {
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntervalValueExpression {
    Primary(NonParenthesizedValueExpressionPrimary),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowValueExpression {
    Primary(NonParenthesizedValueExpressionPrimary),
    /// `(v1, v2, ...)`
    Constructor(Vec<ValueExpression>),
}

/// Operand of a comparison, BETWEEN, IN or NULL predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValuePredicand {
    Primary(NonParenthesizedValueExpressionPrimary),
    Common(CommonValueExpression),
}

/// Aggregates appear in value positions through this production.
pub type SetFunctionSpecification = AggregateFunction;

#[derive(Debug, Clone, PartialEq)]
pub enum NonParenthesizedValueExpressionPrimary {
    UnsignedValue(UnsignedValueSpecification),
    ColumnReference(ColumnReference),
    SetFunction(SetFunctionSpecification),
    ScalarSubquery(Subquery),
    Parenthesized(Box<ValueExpression>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnsignedValueSpecification {
    Numeric(UnsignedNumericLiteral),
    General(GeneralLiteral),
}

/// Unsigned integer or non-negative float; always bound as a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedNumericLiteral(pub Value);

/// Character, truth value, binary and typed literals; bound as a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralLiteral(pub Value);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentifierChain(pub Vec<String>);

impl IdentifierChain {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

/// An alias attached to a table or column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correlation {
    pub name: String,
}

impl Correlation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReference {
    pub chain: IdentifierChain,
    /// Projection alias, rendered in SELECT list positions only.
    pub correlation: Option<Correlation>,
    /// Relation the chain resolves to; never rendered.
    pub source: Option<RelationRef>,
}

impl ColumnReference {
    pub fn new(chain: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            chain: IdentifierChain(chain.into_iter().map(Into::into).collect()),
            correlation: None,
            source: None,
        }
    }
}

impl UnsignedValueSpecification {
    /// Literal for a non-negative value. Negative numbers must go through
    /// [`NumericValueExpression::negative_literal`].
    pub fn literal(value: Value) -> Self {
        if value.is_numeric() {
            UnsignedValueSpecification::Numeric(UnsignedNumericLiteral(value))
        } else {
            UnsignedValueSpecification::General(GeneralLiteral(value))
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            UnsignedValueSpecification::Numeric(UnsignedNumericLiteral(v))
            | UnsignedValueSpecification::General(GeneralLiteral(v)) => v,
        }
    }
}

impl NonParenthesizedValueExpressionPrimary {
    /// Wrap any value expression in parentheses, unwrapping trivial nestings.
    pub fn parenthesized(value: ValueExpression) -> Self {
        match value {
            ValueExpression::Row(RowValueExpression::Primary(p)) => p,
            other => NonParenthesizedValueExpressionPrimary::Parenthesized(Box::new(other)),
        }
    }
}

impl NumericValueExpression {
    /// `-<literal>` for a negative number; `None` when the value is not negative.
    pub fn negative_literal(value: &Value) -> Option<Self> {
        let magnitude = value.negated()?;
        Some(NumericValueExpression::Term(NumericTerm::Factor(NumericFactor {
            sign: Some(Sign::Minus),
            primary: NonParenthesizedValueExpressionPrimary::UnsignedValue(
                UnsignedValueSpecification::literal(magnitude),
            ),
        })))
    }

    /// Narrow to a term, parenthesizing additive forms.
    pub fn into_term(self) -> NumericTerm {
        match self {
            NumericValueExpression::Term(t) => t,
            other => NumericTerm::Factor(NumericFactor::from(
                NonParenthesizedValueExpressionPrimary::Parenthesized(Box::new(
                    ValueExpression::Common(CommonValueExpression::Numeric(other)),
                )),
            )),
        }
    }
}

impl NumericTerm {
    /// Narrow to a factor, parenthesizing multiplicative forms.
    pub fn into_factor(self) -> NumericFactor {
        match self {
            NumericTerm::Factor(f) => f,
            other => NumericFactor::from(NonParenthesizedValueExpressionPrimary::Parenthesized(
                Box::new(ValueExpression::Common(CommonValueExpression::Numeric(
                    NumericValueExpression::Term(other),
                ))),
            )),
        }
    }
}

impl From<NonParenthesizedValueExpressionPrimary> for NumericFactor {
    fn from(primary: NonParenthesizedValueExpressionPrimary) -> Self {
        NumericFactor {
            sign: None,
            primary,
        }
    }
}

impl From<NumericFactor> for NumericTerm {
    fn from(factor: NumericFactor) -> Self {
        NumericTerm::Factor(factor)
    }
}

impl From<NumericTerm> for NumericValueExpression {
    fn from(term: NumericTerm) -> Self {
        NumericValueExpression::Term(term)
    }
}

impl From<NumericFactor> for NumericValueExpression {
    fn from(factor: NumericFactor) -> Self {
        NumericValueExpression::Term(NumericTerm::Factor(factor))
    }
}

impl From<NonParenthesizedValueExpressionPrimary> for NumericValueExpression {
    fn from(primary: NonParenthesizedValueExpressionPrimary) -> Self {
        NumericFactor::from(primary).into()
    }
}

impl From<StringValueFunction> for CharacterValueExpression {
    fn from(function: StringValueFunction) -> Self {
        CharacterValueExpression::Function(Box::new(function))
    }
}

impl From<NumericValueExpression> for CommonValueExpression {
    fn from(v: NumericValueExpression) -> Self {
        CommonValueExpression::Numeric(v)
    }
}

impl From<CharacterValueExpression> for CommonValueExpression {
    fn from(v: CharacterValueExpression) -> Self {
        CommonValueExpression::String(StringValueExpression::Character(v))
    }
}

impl From<DatetimeValueExpression> for CommonValueExpression {
    fn from(v: DatetimeValueExpression) -> Self {
        CommonValueExpression::Datetime(v)
    }
}

impl From<IntervalValueExpression> for CommonValueExpression {
    fn from(v: IntervalValueExpression) -> Self {
        CommonValueExpression::Interval(v)
    }
}

impl From<CommonValueExpression> for ValueExpression {
    fn from(v: CommonValueExpression) -> Self {
        ValueExpression::Common(v)
    }
}

impl From<BooleanValueExpression> for ValueExpression {
    fn from(v: BooleanValueExpression) -> Self {
        ValueExpression::Boolean(Box::new(v))
    }
}

impl From<RowValueExpression> for ValueExpression {
    fn from(v: RowValueExpression) -> Self {
        ValueExpression::Row(v)
    }
}

impl From<NonParenthesizedValueExpressionPrimary> for ValueExpression {
    fn from(v: NonParenthesizedValueExpressionPrimary) -> Self {
        ValueExpression::Row(RowValueExpression::Primary(v))
    }
}

impl From<RowValuePredicand> for ValueExpression {
    fn from(v: RowValuePredicand) -> Self {
        match v {
            RowValuePredicand::Primary(p) => p.into(),
            RowValuePredicand::Common(c) => c.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(v: impl Into<Value>) -> NonParenthesizedValueExpressionPrimary {
        NonParenthesizedValueExpressionPrimary::UnsignedValue(UnsignedValueSpecification::literal(
            v.into(),
        ))
    }

    #[test]
    fn literal_kinds() {
        assert!(matches!(
            UnsignedValueSpecification::literal(Value::from(1)),
            UnsignedValueSpecification::Numeric(_)
        ));
        assert!(matches!(
            UnsignedValueSpecification::literal(Value::from("a")),
            UnsignedValueSpecification::General(_)
        ));
        assert!(matches!(
            UnsignedValueSpecification::literal(Value::from(true)),
            UnsignedValueSpecification::General(_)
        ));
    }

    #[test]
    fn negative_literal_is_signed_unsigned() {
        let nve = NumericValueExpression::negative_literal(&Value::from(-3)).unwrap();
        let NumericValueExpression::Term(NumericTerm::Factor(factor)) = nve else {
            panic!("expected factor");
        };
        assert_eq!(factor.sign, Some(Sign::Minus));
        assert_eq!(factor.primary, literal(3u64));
        assert!(NumericValueExpression::negative_literal(&Value::from(3)).is_none());
    }

    #[test]
    fn narrowing_parenthesizes_only_compound_forms() {
        let simple = NumericValueExpression::from(literal(1));
        assert!(matches!(simple.into_term(), NumericTerm::Factor(_)));

        let sum = NumericValueExpression::Add(
            Box::new(NumericValueExpression::from(literal(1))),
            NumericTerm::from(NumericFactor::from(literal(2))),
        );
        let factor = sum.into_term().into_factor();
        assert!(matches!(
            factor.primary,
            NonParenthesizedValueExpressionPrimary::Parenthesized(_)
        ));
    }

    #[test]
    fn parenthesized_unwraps_row_primary() {
        let p = literal(1);
        assert_eq!(
            NonParenthesizedValueExpressionPrimary::parenthesized(p.clone().into()),
            p
        );
    }
}
