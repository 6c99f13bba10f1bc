//! Boolean value expressions and predicates.

use super::query::Subquery;
use super::value::{
    CharacterValueExpression, NonParenthesizedValueExpressionPrimary, RowValuePredicand,
    ValueExpression,
};

/// `<boolean value expression> ::= <boolean term> | <bve> OR <boolean term>`
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanValueExpression {
    Term(BooleanTerm),
    Or(Box<BooleanValueExpression>, BooleanTerm),
}

/// `<boolean term> ::= <boolean factor> | <boolean term> AND <boolean factor>`
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanTerm {
    Factor(BooleanFactor),
    And(Box<BooleanTerm>, BooleanFactor),
}

/// `<boolean factor> ::= [ NOT ] <boolean test>`
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanFactor {
    pub not: bool,
    pub test: BooleanTest,
}

/// `<boolean test> ::= <boolean primary> [ IS [ NOT ] <truth value> ]`
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanTest {
    pub primary: BooleanPrimary,
    pub truth: Option<TruthTest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTest {
    pub not: bool,
    pub value: TruthValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthValue {
    True,
    False,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BooleanPrimary {
    Predicate(Predicate),
    Predicand(BooleanPredicand),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BooleanPredicand {
    Parenthesized(Box<BooleanValueExpression>),
    Primary(NonParenthesizedValueExpressionPrimary),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Comparison(ComparisonPredicate),
    Between(BetweenPredicate),
    In(InPredicate),
    Like(LikePredicate),
    Null(NullPredicate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
}

impl CompOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompOp::Equals => "=",
            CompOp::NotEquals => "<>",
            CompOp::LessThan => "<",
            CompOp::LessThanOrEquals => "<=",
            CompOp::GreaterThan => ">",
            CompOp::GreaterThanOrEquals => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPredicate {
    pub op: CompOp,
    pub left: RowValuePredicand,
    pub right: RowValuePredicand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetweenPredicate {
    pub target: RowValuePredicand,
    pub not: bool,
    pub start: RowValuePredicand,
    pub end: RowValuePredicand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InPredicate {
    pub target: RowValuePredicand,
    pub not: bool,
    pub values: InPredicateValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InPredicateValue {
    List(Vec<ValueExpression>),
    Subquery(Subquery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LikePredicate {
    pub target: CharacterValueExpression,
    pub not: bool,
    pub pattern: CharacterValueExpression,
    pub escape: Option<CharacterValueExpression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullPredicate {
    pub target: RowValuePredicand,
    pub not: bool,
}

impl BooleanValueExpression {
    /// `self AND other`, keeping `self` as the left-hand term.
    pub fn and(self, other: BooleanValueExpression) -> BooleanValueExpression {
        BooleanValueExpression::Term(BooleanTerm::And(
            Box::new(self.into_term()),
            other.into_term().into_factor(),
        ))
    }

    /// Narrow to a term, parenthesizing an OR.
    pub fn into_term(self) -> BooleanTerm {
        match self {
            BooleanValueExpression::Term(t) => t,
            or => BooleanPredicand::Parenthesized(Box::new(or)).into(),
        }
    }
}

impl BooleanTerm {
    /// Narrow to a factor, parenthesizing an AND.
    pub fn into_factor(self) -> BooleanFactor {
        match self {
            BooleanTerm::Factor(f) => f,
            and => {
                BooleanPredicand::Parenthesized(Box::new(BooleanValueExpression::Term(and))).into()
            }
        }
    }
}

impl BooleanFactor {
    pub fn into_test(self) -> BooleanTest {
        if self.not {
            BooleanPredicand::Parenthesized(Box::new(self.into())).into()
        } else {
            self.test
        }
    }
}

impl BooleanTest {
    pub fn into_primary(self) -> BooleanPrimary {
        match self.truth {
            None => self.primary,
            Some(_) => BooleanPrimary::Predicand(BooleanPredicand::Parenthesized(Box::new(
                self.into(),
            ))),
        }
    }
}

impl From<BooleanPredicand> for BooleanPrimary {
    fn from(p: BooleanPredicand) -> Self {
        BooleanPrimary::Predicand(p)
    }
}

impl From<Predicate> for BooleanPrimary {
    fn from(p: Predicate) -> Self {
        BooleanPrimary::Predicate(p)
    }
}

impl From<BooleanPrimary> for BooleanTest {
    fn from(primary: BooleanPrimary) -> Self {
        BooleanTest {
            primary,
            truth: None,
        }
    }
}

impl From<BooleanTest> for BooleanFactor {
    fn from(test: BooleanTest) -> Self {
        BooleanFactor { not: false, test }
    }
}

impl From<BooleanFactor> for BooleanTerm {
    fn from(f: BooleanFactor) -> Self {
        BooleanTerm::Factor(f)
    }
}

impl From<BooleanTerm> for BooleanValueExpression {
    fn from(t: BooleanTerm) -> Self {
        BooleanValueExpression::Term(t)
    }
}

/// Transitive widening: every lower boolean production converts into every
/// higher one by wrapping.
macro_rules! widen {
    ($from:ty => $via:ty => $($to:ty),+) => {
        $(
            impl From<$from> for $to {
                fn from(v: $from) -> Self {
                    <$to>::from(<$via>::from(v))
                }
            }
        )+
    };
}

widen!(BooleanPrimary => BooleanTest => BooleanFactor);
widen!(BooleanFactor => BooleanTerm => BooleanValueExpression);
widen!(BooleanTest => BooleanFactor => BooleanTerm, BooleanValueExpression);
widen!(BooleanPrimary => BooleanFactor => BooleanTerm, BooleanValueExpression);
widen!(BooleanPredicand => BooleanPrimary => BooleanTest, BooleanFactor, BooleanTerm, BooleanValueExpression);
widen!(Predicate => BooleanPrimary => BooleanTest, BooleanFactor, BooleanTerm, BooleanValueExpression);

impl From<ComparisonPredicate> for Predicate {
    fn from(p: ComparisonPredicate) -> Self {
        Predicate::Comparison(p)
    }
}

impl From<BetweenPredicate> for Predicate {
    fn from(p: BetweenPredicate) -> Self {
        Predicate::Between(p)
    }
}

impl From<InPredicate> for Predicate {
    fn from(p: InPredicate) -> Self {
        Predicate::In(p)
    }
}

impl From<LikePredicate> for Predicate {
    fn from(p: LikePredicate) -> Self {
        Predicate::Like(p)
    }
}

impl From<NullPredicate> for Predicate {
    fn from(p: NullPredicate) -> Self {
        Predicate::Null(p)
    }
}
