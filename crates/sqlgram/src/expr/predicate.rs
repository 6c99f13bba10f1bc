use crate::coerce::{self, Operand, must};
use crate::grammar::*;

fn compare(
    function: &'static str,
    op: CompOp,
    left: Operand,
    right: Operand,
) -> Predicate {
    ComparisonPredicate {
        op,
        left: must(function, "left", coerce::row_value_predicand(left)),
        right: must(function, "right", coerce::row_value_predicand(right)),
    }
    .into()
}

/// `left = right`
pub fn equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Predicate {
    compare("equal", CompOp::Equals, left.into(), right.into())
}

/// `left <> right`
pub fn not_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Predicate {
    compare("not_equal", CompOp::NotEquals, left.into(), right.into())
}

pub fn less_than(left: impl Into<Operand>, right: impl Into<Operand>) -> Predicate {
    compare("less_than", CompOp::LessThan, left.into(), right.into())
}

pub fn less_than_or_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Predicate {
    compare(
        "less_than_or_equal",
        CompOp::LessThanOrEquals,
        left.into(),
        right.into(),
    )
}

pub fn greater_than(left: impl Into<Operand>, right: impl Into<Operand>) -> Predicate {
    compare("greater_than", CompOp::GreaterThan, left.into(), right.into())
}

pub fn greater_than_or_equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Predicate {
    compare(
        "greater_than_or_equal",
        CompOp::GreaterThanOrEquals,
        left.into(),
        right.into(),
    )
}

fn between_impl(
    function: &'static str,
    not: bool,
    target: Operand,
    start: Operand,
    end: Operand,
) -> Predicate {
    BetweenPredicate {
        target: must(function, "target", coerce::row_value_predicand(target)),
        not,
        start: must(function, "start", coerce::row_value_predicand(start)),
        end: must(function, "end", coerce::row_value_predicand(end)),
    }
    .into()
}

/// `target BETWEEN start AND end`
pub fn between(
    target: impl Into<Operand>,
    start: impl Into<Operand>,
    end: impl Into<Operand>,
) -> Predicate {
    between_impl("between", false, target.into(), start.into(), end.into())
}

pub fn not_between(
    target: impl Into<Operand>,
    start: impl Into<Operand>,
    end: impl Into<Operand>,
) -> Predicate {
    between_impl("not_between", true, target.into(), start.into(), end.into())
}

fn in_list_impl<I>(function: &'static str, not: bool, target: Operand, values: I) -> Predicate
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let values = values
        .into_iter()
        .map(|v| must(function, "values", coerce::in_value(v.into())))
        .collect();
    InPredicate {
        target: must(function, "target", coerce::row_value_predicand(target)),
        not,
        values: InPredicateValue::List(values),
    }
    .into()
}

/// `target IN (v1, v2, ...)`
///
/// An empty list renders as a constant false condition.
pub fn in_list<I>(target: impl Into<Operand>, values: I) -> Predicate
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    in_list_impl("in_list", false, target.into(), values)
}

/// `target NOT IN (v1, v2, ...)`
///
/// An empty list renders as a constant true condition.
pub fn not_in_list<I>(target: impl Into<Operand>, values: I) -> Predicate
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    in_list_impl("not_in_list", true, target.into(), values)
}

fn in_subquery_impl(function: &'static str, not: bool, target: Operand, query: Operand) -> Predicate {
    InPredicate {
        target: must(function, "target", coerce::row_value_predicand(target)),
        not,
        values: InPredicateValue::Subquery(must(function, "query", coerce::subquery(query))),
    }
    .into()
}

/// `target IN (SELECT ...)`
pub fn in_subquery(target: impl Into<Operand>, query: impl Into<Operand>) -> Predicate {
    in_subquery_impl("in_subquery", false, target.into(), query.into())
}

pub fn not_in_subquery(target: impl Into<Operand>, query: impl Into<Operand>) -> Predicate {
    in_subquery_impl("not_in_subquery", true, target.into(), query.into())
}

pub fn is_null(target: impl Into<Operand>) -> Predicate {
    NullPredicate {
        target: must("is_null", "target", coerce::row_value_predicand(target.into())),
        not: false,
    }
    .into()
}

pub fn is_not_null(target: impl Into<Operand>) -> Predicate {
    NullPredicate {
        target: must(
            "is_not_null",
            "target",
            coerce::row_value_predicand(target.into()),
        ),
        not: true,
    }
    .into()
}

fn like_impl(
    function: &'static str,
    not: bool,
    target: Operand,
    pattern: Operand,
    escape: Option<Operand>,
) -> Predicate {
    LikePredicate {
        target: must(function, "target", coerce::character_value_expression(target)),
        not,
        pattern: must(function, "pattern", coerce::character_value_expression(pattern)),
        escape: escape.map(|e| must(function, "escape", coerce::character_value_expression(e))),
    }
    .into()
}

/// `target LIKE pattern`
pub fn like(target: impl Into<Operand>, pattern: impl Into<Operand>) -> Predicate {
    like_impl("like", false, target.into(), pattern.into(), None)
}

pub fn not_like(target: impl Into<Operand>, pattern: impl Into<Operand>) -> Predicate {
    like_impl("not_like", true, target.into(), pattern.into(), None)
}

/// `target LIKE pattern ESCAPE escape`
pub fn like_escape(
    target: impl Into<Operand>,
    pattern: impl Into<Operand>,
    escape: impl Into<Operand>,
) -> Predicate {
    like_impl(
        "like_escape",
        false,
        target.into(),
        pattern.into(),
        Some(escape.into()),
    )
}

/// `left AND right`
pub fn and(left: impl Into<Operand>, right: impl Into<Operand>) -> BooleanValueExpression {
    BooleanValueExpression::Term(BooleanTerm::And(
        Box::new(must("and", "left", coerce::boolean_term(left.into()))),
        must("and", "right", coerce::boolean_factor(right.into())),
    ))
}

/// `(left OR right)`
pub fn or(left: impl Into<Operand>, right: impl Into<Operand>) -> BooleanValueExpression {
    BooleanValueExpression::Or(
        Box::new(must(
            "or",
            "left",
            coerce::boolean_value_expression(left.into()),
        )),
        must("or", "right", coerce::boolean_term(right.into())),
    )
}

/// `NOT x`
pub fn not(x: impl Into<Operand>) -> BooleanFactor {
    BooleanFactor {
        not: true,
        test: must("not", "x", coerce::boolean_test(x.into())),
    }
}

fn truth(function: &'static str, x: Operand, value: TruthValue) -> BooleanTest {
    BooleanTest {
        primary: must(function, "x", coerce::boolean_primary(x)),
        truth: Some(TruthTest { not: false, value }),
    }
}

/// `x IS TRUE`
pub fn is_true(x: impl Into<Operand>) -> BooleanTest {
    truth("is_true", x.into(), TruthValue::True)
}

pub fn is_false(x: impl Into<Operand>) -> BooleanTest {
    truth("is_false", x.into(), TruthValue::False)
}

pub fn is_unknown(x: impl Into<Operand>) -> BooleanTest {
    truth("is_unknown", x.into(), TruthValue::Unknown)
}

/// Row value constructor `(v1, v2, ...)`.
pub fn row<I>(values: I) -> RowValueExpression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    RowValueExpression::Constructor(
        values
            .into_iter()
            .map(|v| must("row", "values", coerce::value_expression(v.into())))
            .collect(),
    )
}
