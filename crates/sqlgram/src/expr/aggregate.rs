use crate::coerce::{self, Operand, must};
use crate::error::{Misuse, fatal};
use crate::grammar::{AggregateFunction, GeneralSetFunction, SetFunctionType, SetQuantifier};

/// An aggregate function call, optionally aliased for the select list.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    function: AggregateFunction,
    alias: Option<String>,
}

impl Aggregate {
    fn new(function: AggregateFunction) -> Self {
        Self {
            function,
            alias: None,
        }
    }

    /// Apply `DISTINCT` to the argument. No effect on `COUNT(*)`.
    pub fn distinct(mut self) -> Self {
        if let AggregateFunction::General(g) = &mut self.function {
            g.quantifier = Some(SetQuantifier::Distinct);
        }
        self
    }

    /// Name the aggregate in the select list.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.alias = Some(name.into());
        self
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn function(&self) -> &AggregateFunction {
        &self.function
    }

    pub(crate) fn into_parts(self) -> (AggregateFunction, Option<String>) {
        (self.function, self.alias)
    }

    pub(crate) fn into_function(self) -> AggregateFunction {
        self.function
    }
}

/// `op(x)` for any set function type.
pub fn aggregate(op: SetFunctionType, x: impl Into<Operand>) -> Aggregate {
    Aggregate::new(AggregateFunction::General(GeneralSetFunction {
        op,
        quantifier: None,
        value: Box::new(must(op.as_str(), "x", coerce::value_expression(x.into()))),
    }))
}

/// `COUNT(*)`
pub fn count_star() -> Aggregate {
    Aggregate::new(AggregateFunction::CountStar)
}

/// `COUNT(x)`
pub fn count(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::Count, x)
}

/// `COUNT(*)` for no arguments, `COUNT(x)` for one. Backs the `count!` macro.
pub fn count_of(args: Vec<Operand>) -> Aggregate {
    let got = args.len();
    let mut args = args.into_iter();
    match (args.next(), got) {
        (None, _) => count_star(),
        (Some(x), 1) => count(x),
        _ => fatal(Misuse::TooManyArguments {
            function: "count",
            expected: 1,
            got,
        }),
    }
}

pub fn avg(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::Avg, x)
}

pub fn min(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::Min, x)
}

pub fn max(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::Max, x)
}

pub fn sum(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::Sum, x)
}

pub fn every(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::Every, x)
}

pub fn stddev_pop(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::StddevPop, x)
}

pub fn stddev_samp(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::StddevSamp, x)
}

pub fn var_pop(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::VarPop, x)
}

pub fn var_samp(x: impl Into<Operand>) -> Aggregate {
    aggregate(SetFunctionType::VarSamp, x)
}
