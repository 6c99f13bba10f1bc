//! Collects the relations an expression refers to.
//!
//! Selection uses this to keep FROM in sync with the columns mentioned in
//! WHERE, HAVING, ORDER BY and join conditions. Subqueries carry their own
//! FROM clause and are not descended into.

use super::boolean::*;
use super::function::*;
use super::query::SortSpecification;
use super::value::*;
use crate::meta::RelationRef;

pub trait Referred {
    fn collect_referred(&self, out: &mut Vec<RelationRef>);

    /// Distinct relations in first-mention order.
    fn referred(&self) -> Vec<RelationRef> {
        let mut out = Vec::new();
        self.collect_referred(&mut out);
        out
    }
}

impl<T: Referred> Referred for Option<T> {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        if let Some(v) = self {
            v.collect_referred(out);
        }
    }
}

impl<T: Referred> Referred for Box<T> {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        (**self).collect_referred(out);
    }
}

impl<T: Referred> Referred for Vec<T> {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        for v in self {
            v.collect_referred(out);
        }
    }
}

impl Referred for ColumnReference {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        if let Some(source) = &self.source {
            if !out.iter().any(|r| r.name() == source.name()) {
                out.push(source.clone());
            }
        }
    }
}

impl Referred for NonParenthesizedValueExpressionPrimary {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            NonParenthesizedValueExpressionPrimary::ColumnReference(c) => c.collect_referred(out),
            NonParenthesizedValueExpressionPrimary::SetFunction(f) => f.collect_referred(out),
            NonParenthesizedValueExpressionPrimary::Parenthesized(v) => v.collect_referred(out),
            NonParenthesizedValueExpressionPrimary::UnsignedValue(_)
            | NonParenthesizedValueExpressionPrimary::ScalarSubquery(_) => {}
        }
    }
}

impl Referred for ValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            ValueExpression::Common(c) => c.collect_referred(out),
            ValueExpression::Boolean(b) => b.collect_referred(out),
            ValueExpression::Row(r) => r.collect_referred(out),
        }
    }
}

impl Referred for CommonValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            CommonValueExpression::Numeric(n) => n.collect_referred(out),
            CommonValueExpression::String(StringValueExpression::Character(c)) => {
                c.collect_referred(out)
            }
            CommonValueExpression::Datetime(d) => d.collect_referred(out),
            CommonValueExpression::Interval(IntervalValueExpression::Primary(p)) => {
                p.collect_referred(out)
            }
        }
    }
}

impl Referred for NumericValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            NumericValueExpression::Term(t) => t.collect_referred(out),
            NumericValueExpression::Add(l, r) | NumericValueExpression::Subtract(l, r) => {
                l.collect_referred(out);
                r.collect_referred(out);
            }
        }
    }
}

impl Referred for NumericTerm {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            NumericTerm::Factor(f) => f.primary.collect_referred(out),
            NumericTerm::Multiply(l, r) | NumericTerm::Divide(l, r) => {
                l.collect_referred(out);
                r.primary.collect_referred(out);
            }
        }
    }
}

impl Referred for CharacterValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            CharacterValueExpression::Primary(p) => p.collect_referred(out),
            CharacterValueExpression::Function(f) => f.collect_referred(out),
        }
    }
}

impl Referred for DatetimeValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        if let DatetimeValueExpression::Primary(p) = self {
            p.collect_referred(out);
        }
    }
}

impl Referred for RowValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            RowValueExpression::Primary(p) => p.collect_referred(out),
            RowValueExpression::Constructor(values) => values.collect_referred(out),
        }
    }
}

impl Referred for RowValuePredicand {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            RowValuePredicand::Primary(p) => p.collect_referred(out),
            RowValuePredicand::Common(c) => c.collect_referred(out),
        }
    }
}

impl Referred for AggregateFunction {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        if let AggregateFunction::General(g) = self {
            g.value.collect_referred(out);
        }
    }
}

impl Referred for StringValueFunction {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            StringValueFunction::Substring(f) => {
                f.subject.collect_referred(out);
                f.from.collect_referred(out);
                f.for_length.collect_referred(out);
            }
            StringValueFunction::RegexSubstring(f) => {
                f.subject.collect_referred(out);
                f.similar.collect_referred(out);
                f.escape.collect_referred(out);
            }
            StringValueFunction::Fold(f) => f.subject.collect_referred(out),
            StringValueFunction::Transcoding(f) => f.subject.collect_referred(out),
            StringValueFunction::Transliteration(f) => f.subject.collect_referred(out),
            StringValueFunction::Trim(f) => {
                f.subject.collect_referred(out);
                f.character.collect_referred(out);
            }
        }
    }
}

impl Referred for BooleanValueExpression {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            BooleanValueExpression::Term(t) => t.collect_referred(out),
            BooleanValueExpression::Or(l, r) => {
                l.collect_referred(out);
                r.collect_referred(out);
            }
        }
    }
}

impl Referred for BooleanTerm {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            BooleanTerm::Factor(f) => f.collect_referred(out),
            BooleanTerm::And(l, r) => {
                l.collect_referred(out);
                r.collect_referred(out);
            }
        }
    }
}

impl Referred for BooleanFactor {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        self.test.collect_referred(out);
    }
}

impl Referred for BooleanTest {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        self.primary.collect_referred(out);
    }
}

impl Referred for BooleanPrimary {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            BooleanPrimary::Predicate(p) => p.collect_referred(out),
            BooleanPrimary::Predicand(BooleanPredicand::Parenthesized(b)) => {
                b.collect_referred(out)
            }
            BooleanPrimary::Predicand(BooleanPredicand::Primary(p)) => p.collect_referred(out),
        }
    }
}

impl Referred for Predicate {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        match self {
            Predicate::Comparison(p) => {
                p.left.collect_referred(out);
                p.right.collect_referred(out);
            }
            Predicate::Between(p) => {
                p.target.collect_referred(out);
                p.start.collect_referred(out);
                p.end.collect_referred(out);
            }
            Predicate::In(p) => {
                p.target.collect_referred(out);
                if let InPredicateValue::List(values) = &p.values {
                    values.collect_referred(out);
                }
            }
            Predicate::Like(p) => {
                p.target.collect_referred(out);
                p.pattern.collect_referred(out);
                p.escape.collect_referred(out);
            }
            Predicate::Null(p) => p.target.collect_referred(out),
        }
    }
}

impl Referred for SortSpecification {
    fn collect_referred(&self, out: &mut Vec<RelationRef>) {
        self.key.collect_referred(out);
    }
}
