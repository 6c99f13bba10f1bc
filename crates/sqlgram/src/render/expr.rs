//! Rendering of value and boolean expressions.

use super::options::Dialect;
use super::writer::{Render, Writer};
use crate::grammar::*;

impl Render for ValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            ValueExpression::Common(c) => c.render(w),
            ValueExpression::Boolean(b) => b.render(w),
            ValueExpression::Row(r) => r.render(w),
        }
    }
}

impl Render for CommonValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            CommonValueExpression::Numeric(n) => n.render(w),
            CommonValueExpression::String(StringValueExpression::Character(c)) => c.render(w),
            CommonValueExpression::Datetime(d) => d.render(w),
            CommonValueExpression::Interval(IntervalValueExpression::Primary(p)) => p.render(w),
        }
    }
}

impl Render for NumericValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            NumericValueExpression::Term(t) => t.render(w),
            NumericValueExpression::Add(l, r) => {
                l.render(w);
                w.push(" + ");
                r.render(w);
            }
            NumericValueExpression::Subtract(l, r) => {
                l.render(w);
                w.push(" - ");
                r.render(w);
            }
        }
    }
}

impl Render for NumericTerm {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            NumericTerm::Factor(f) => f.render(w),
            NumericTerm::Multiply(l, r) => {
                l.render(w);
                w.push(" * ");
                r.render(w);
            }
            NumericTerm::Divide(l, r) => {
                l.render(w);
                w.push(" / ");
                r.render(w);
            }
        }
    }
}

impl Render for NumericFactor {
    fn render(&self, w: &mut Writer<'_>) {
        match self.sign {
            Some(Sign::Minus) => w.push("-"),
            Some(Sign::Plus) => w.push("+"),
            None => {}
        }
        self.primary.render(w);
    }
}

impl Render for CharacterValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            CharacterValueExpression::Primary(p) => p.render(w),
            CharacterValueExpression::Function(f) => f.render(w),
        }
    }
}

impl Render for DatetimeValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            DatetimeValueExpression::Primary(p) => p.render(w),
            DatetimeValueExpression::Function(DatetimeValueFunction::CurrentDate) => {
                w.push("CURRENT_DATE")
            }
            DatetimeValueExpression::Function(DatetimeValueFunction::CurrentTime) => {
                w.push("CURRENT_TIME")
            }
            DatetimeValueExpression::Function(DatetimeValueFunction::CurrentTimestamp) => {
                w.push("CURRENT_TIMESTAMP")
            }
        }
    }
}

impl Render for RowValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            RowValueExpression::Primary(p) => p.render(w),
            RowValueExpression::Constructor(values) => {
                w.push("(");
                w.list(values, ", ");
                w.push(")");
            }
        }
    }
}

impl Render for RowValuePredicand {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            RowValuePredicand::Primary(p) => p.render(w),
            RowValuePredicand::Common(c) => c.render(w),
        }
    }
}

impl Render for NonParenthesizedValueExpressionPrimary {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            NonParenthesizedValueExpressionPrimary::UnsignedValue(v) => w.bind(v.value().clone()),
            NonParenthesizedValueExpressionPrimary::ColumnReference(c) => c.render(w),
            NonParenthesizedValueExpressionPrimary::SetFunction(f) => f.render(w),
            NonParenthesizedValueExpressionPrimary::ScalarSubquery(s) => s.render(w),
            NonParenthesizedValueExpressionPrimary::Parenthesized(v) => {
                w.push("(");
                w.projection(false, |w| v.render(w));
                w.push(")");
            }
        }
    }
}

impl Render for ColumnReference {
    fn render(&self, w: &mut Writer<'_>) {
        w.push(&self.chain.segments().join("."));
        if w.in_projection() {
            if let Some(alias) = &self.correlation {
                w.push(" AS ");
                w.push(&alias.name);
            }
        }
    }
}

impl Render for AggregateFunction {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            AggregateFunction::CountStar => w.push("COUNT(*)"),
            AggregateFunction::General(g) => {
                w.push(g.op.as_str());
                w.push("(");
                if let Some(quantifier) = g.quantifier {
                    w.push(quantifier.as_str());
                    w.push(" ");
                }
                w.projection(false, |w| g.value.render(w));
                w.push(")");
            }
        }
    }
}

impl Render for StringValueFunction {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            StringValueFunction::Substring(f) => {
                w.push("SUBSTRING(");
                f.subject.render(w);
                w.push(" FROM ");
                f.from.render(w);
                if let Some(length) = &f.for_length {
                    w.push(" FOR ");
                    length.render(w);
                }
                if let (Some(units), Dialect::Unknown) = (f.units, w.dialect()) {
                    w.push(" USING ");
                    w.push(units.as_str());
                }
                w.push(")");
            }
            StringValueFunction::RegexSubstring(f) => {
                w.push("SUBSTRING(");
                f.subject.render(w);
                w.push(" SIMILAR ");
                f.similar.render(w);
                w.push(" ESCAPE ");
                f.escape.render(w);
                w.push(")");
            }
            StringValueFunction::Fold(f) => {
                w.push(match f.case {
                    FoldCase::Upper => "UPPER(",
                    FoldCase::Lower => "LOWER(",
                });
                f.subject.render(w);
                w.push(")");
            }
            StringValueFunction::Transcoding(f) => {
                w.push("CONVERT(");
                f.subject.render(w);
                w.push(" USING ");
                w.push(&f.name.to_sql());
                w.push(")");
            }
            StringValueFunction::Transliteration(f) => {
                w.push("TRANSLATE(");
                f.subject.render(w);
                w.push(" USING ");
                w.push(&f.name.to_sql());
                w.push(")");
            }
            StringValueFunction::Trim(f) => render_trim(f, w),
        }
    }
}

fn render_trim(f: &TrimFunction, w: &mut Writer<'_>) {
    match (w.dialect(), f.specification, &f.character) {
        (Dialect::PostgreSql, TrimSpecification::Both, character) => {
            w.push("BTRIM(");
            f.subject.render(w);
            if let Some(character) = character {
                w.push(", ");
                character.render(w);
            }
            w.push(")");
        }
        (Dialect::MySql | Dialect::TSql | Dialect::Sqlite, spec, None) => {
            w.push(match spec {
                TrimSpecification::Both => "TRIM(",
                TrimSpecification::Leading => "LTRIM(",
                TrimSpecification::Trailing => "RTRIM(",
            });
            f.subject.render(w);
            w.push(")");
        }
        (_, spec, character) => {
            w.push("TRIM(");
            w.push(spec.as_str());
            if let Some(character) = character {
                w.push(" ");
                character.render(w);
            }
            w.push(" FROM ");
            f.subject.render(w);
            w.push(")");
        }
    }
}

impl Render for BooleanValueExpression {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            BooleanValueExpression::Term(t) => t.render(w),
            BooleanValueExpression::Or(l, r) => {
                w.push("(");
                l.render(w);
                w.push(" OR ");
                r.render(w);
                w.push(")");
            }
        }
    }
}

impl Render for BooleanTerm {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            BooleanTerm::Factor(f) => f.render(w),
            BooleanTerm::And(l, r) => {
                w.push("(");
                l.render(w);
                w.push(" AND ");
                r.render(w);
                w.push(")");
            }
        }
    }
}

impl Render for BooleanFactor {
    fn render(&self, w: &mut Writer<'_>) {
        if self.not {
            w.push("NOT ");
        }
        self.test.render(w);
    }
}

impl Render for BooleanTest {
    fn render(&self, w: &mut Writer<'_>) {
        self.primary.render(w);
        if let Some(truth) = self.truth {
            w.push(if truth.not { " IS NOT " } else { " IS " });
            w.push(match truth.value {
                TruthValue::True => "TRUE",
                TruthValue::False => "FALSE",
                TruthValue::Unknown => "UNKNOWN",
            });
        }
    }
}

/// OR and AND already render their own parentheses.
fn self_parenthesized(b: &BooleanValueExpression) -> bool {
    matches!(
        b,
        BooleanValueExpression::Or(..) | BooleanValueExpression::Term(BooleanTerm::And(..))
    )
}

impl Render for BooleanPrimary {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            BooleanPrimary::Predicate(p) => p.render(w),
            BooleanPrimary::Predicand(BooleanPredicand::Parenthesized(b)) => {
                if self_parenthesized(b) {
                    b.render(w);
                } else {
                    w.push("(");
                    b.render(w);
                    w.push(")");
                }
            }
            BooleanPrimary::Predicand(BooleanPredicand::Primary(p)) => p.render(w),
        }
    }
}

impl Render for Predicate {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            Predicate::Comparison(p) => {
                p.left.render(w);
                w.push(" ");
                w.push(p.op.as_str());
                w.push(" ");
                p.right.render(w);
            }
            Predicate::Between(p) => {
                p.target.render(w);
                w.push(if p.not { " NOT BETWEEN " } else { " BETWEEN " });
                p.start.render(w);
                w.push(" AND ");
                p.end.render(w);
            }
            Predicate::In(p) => match &p.values {
                InPredicateValue::List(values) if values.is_empty() => {
                    w.push(if p.not { "1=1" } else { "1=0" });
                }
                InPredicateValue::List(values) => {
                    p.target.render(w);
                    w.push(if p.not { " NOT IN (" } else { " IN (" });
                    w.list(values, ", ");
                    w.push(")");
                }
                InPredicateValue::Subquery(s) => {
                    p.target.render(w);
                    w.push(if p.not { " NOT IN " } else { " IN " });
                    s.render(w);
                }
            },
            Predicate::Like(p) => {
                p.target.render(w);
                w.push(if p.not { " NOT LIKE " } else { " LIKE " });
                p.pattern.render(w);
                if let Some(escape) = &p.escape {
                    w.push(" ESCAPE ");
                    escape.render(w);
                }
            }
            Predicate::Null(p) => {
                p.target.render(w);
                w.push(if p.not { " IS NOT NULL" } else { " IS NULL" });
            }
        }
    }
}
