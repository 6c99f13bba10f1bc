use crate::expr::{Aggregate, StringFunction};
use crate::grammar::*;
use crate::meta::{Column, DerivedTable, Table};
use crate::stmt::Selection;
use crate::value::Value;

/// Anything a builder accepts in an expression position.
///
/// Builders take `impl Into<Operand>` and promote the operand to the grammar
/// node their position requires with the functions in [`crate::coerce`].
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Value),
    Column(Column),
    Table(Table),
    DerivedTable(DerivedTable),
    Selection(Box<Selection>),
    Query(Box<QuerySpecification>),
    Aggregate(Aggregate),
    StringFunction(StringFunction),
    Sort(SortSpecification),
    ValueExpression(ValueExpression),
    Common(CommonValueExpression),
    Numeric(NumericValueExpression),
    Character(CharacterValueExpression),
    Datetime(DatetimeValueExpression),
    Interval(IntervalValueExpression),
    Row(RowValueExpression),
    RowPredicand(RowValuePredicand),
    Primary(NonParenthesizedValueExpressionPrimary),
    ColumnReference(ColumnReference),
    Boolean(BooleanValueExpression),
    BooleanTerm(BooleanTerm),
    BooleanFactor(BooleanFactor),
    BooleanTest(BooleanTest),
    BooleanPrimary(BooleanPrimary),
    Predicate(Predicate),
}

impl Operand {
    /// Short description used in coercion diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Value(_) => "literal",
            Operand::Column(_) => "Column",
            Operand::Table(_) => "Table",
            Operand::DerivedTable(_) => "DerivedTable",
            Operand::Selection(_) => "Selection",
            Operand::Query(_) => "QuerySpecification",
            Operand::Aggregate(_) => "AggregateFunction",
            Operand::StringFunction(_) => "StringValueFunction",
            Operand::Sort(_) => "SortSpecification",
            Operand::ValueExpression(ValueExpression::Boolean(_)) => "BooleanValueExpression",
            Operand::ValueExpression(_) => "ValueExpression",
            Operand::Common(_) => "CommonValueExpression",
            Operand::Numeric(_) => "NumericValueExpression",
            Operand::Character(_) => "CharacterValueExpression",
            Operand::Datetime(_) => "DatetimeValueExpression",
            Operand::Interval(_) => "IntervalValueExpression",
            Operand::Row(_) => "RowValueExpression",
            Operand::RowPredicand(_) => "RowValuePredicand",
            Operand::Primary(_) => "NonParenthesizedValueExpressionPrimary",
            Operand::ColumnReference(_) => "ColumnReference",
            Operand::Boolean(_) => "BooleanValueExpression",
            Operand::BooleanTerm(_) => "BooleanTerm",
            Operand::BooleanFactor(_) => "BooleanFactor",
            Operand::BooleanTest(_) => "BooleanTest",
            Operand::BooleanPrimary(_) => "BooleanPrimary",
            Operand::Predicate(_) => "Predicate",
        }
    }
}

macro_rules! operand_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(Value::from(v))
                }
            }
        )*
    };
}

operand_from_value!(
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    bool,
    &str,
    String,
    &String,
    Vec<u8>,
    &[u8],
    uuid::Uuid,
    chrono::NaiveDate,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
);

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::Value(Value::from(v))
    }
}

macro_rules! operand_from_node {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::$variant(v)
                }
            }
        )*
    };
}

operand_from_node!(
    Value => Value,
    Column => Column,
    Table => Table,
    DerivedTable => DerivedTable,
    Aggregate => Aggregate,
    StringFunction => StringFunction,
    SortSpecification => Sort,
    ValueExpression => ValueExpression,
    CommonValueExpression => Common,
    NumericValueExpression => Numeric,
    CharacterValueExpression => Character,
    DatetimeValueExpression => Datetime,
    IntervalValueExpression => Interval,
    RowValueExpression => Row,
    RowValuePredicand => RowPredicand,
    NonParenthesizedValueExpressionPrimary => Primary,
    ColumnReference => ColumnReference,
    BooleanValueExpression => Boolean,
    BooleanTerm => BooleanTerm,
    BooleanFactor => BooleanFactor,
    BooleanTest => BooleanTest,
    BooleanPrimary => BooleanPrimary,
    Predicate => Predicate,
);

impl From<Selection> for Operand {
    fn from(v: Selection) -> Self {
        Operand::Selection(Box::new(v))
    }
}

impl From<QuerySpecification> for Operand {
    fn from(v: QuerySpecification) -> Self {
        Operand::Query(Box::new(v))
    }
}

impl From<SubstringFunction> for Operand {
    fn from(v: SubstringFunction) -> Self {
        Operand::StringFunction(v.into())
    }
}

impl From<&Column> for Operand {
    fn from(v: &Column) -> Self {
        Operand::Column(v.clone())
    }
}

impl From<&Table> for Operand {
    fn from(v: &Table) -> Self {
        Operand::Table(v.clone())
    }
}

impl From<&DerivedTable> for Operand {
    fn from(v: &DerivedTable) -> Self {
        Operand::DerivedTable(v.clone())
    }
}

impl From<&Selection> for Operand {
    fn from(v: &Selection) -> Self {
        Operand::Selection(Box::new(v.clone()))
    }
}

impl From<&Operand> for Operand {
    fn from(v: &Operand) -> Self {
        v.clone()
    }
}
