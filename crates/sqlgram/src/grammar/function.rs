//! Aggregate and string function productions.

use super::value::{CharacterValueExpression, NumericValueExpression, ValueExpression};
use crate::ident::Ident;

#[derive(Debug, Clone, PartialEq)]
pub enum AggregateFunction {
    /// `COUNT(*)`
    CountStar,
    General(GeneralSetFunction),
}

/// `<set function type> ( [ <set quantifier> ] <value expression> )`
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSetFunction {
    pub op: SetFunctionType,
    pub quantifier: Option<SetQuantifier>,
    pub value: Box<ValueExpression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetFunctionType {
    Avg,
    Max,
    Min,
    Sum,
    Every,
    Any,
    Some,
    Count,
    StddevPop,
    StddevSamp,
    VarSamp,
    VarPop,
    Collect,
    Fusion,
    Intersection,
}

impl SetFunctionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SetFunctionType::Avg => "AVG",
            SetFunctionType::Max => "MAX",
            SetFunctionType::Min => "MIN",
            SetFunctionType::Sum => "SUM",
            SetFunctionType::Every => "EVERY",
            SetFunctionType::Any => "ANY",
            SetFunctionType::Some => "SOME",
            SetFunctionType::Count => "COUNT",
            SetFunctionType::StddevPop => "STDDEV_POP",
            SetFunctionType::StddevSamp => "STDDEV_SAMP",
            SetFunctionType::VarSamp => "VAR_SAMP",
            SetFunctionType::VarPop => "VAR_POP",
            SetFunctionType::Collect => "COLLECT",
            SetFunctionType::Fusion => "FUSION",
            SetFunctionType::Intersection => "INTERSECTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    All,
    Distinct,
}

impl SetQuantifier {
    pub fn as_str(self) -> &'static str {
        match self {
            SetQuantifier::All => "ALL",
            SetQuantifier::Distinct => "DISTINCT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StringValueFunction {
    Substring(SubstringFunction),
    RegexSubstring(RegexSubstringFunction),
    Fold(FoldFunction),
    Transcoding(TranscodingFunction),
    Transliteration(TransliterationFunction),
    Trim(TrimFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharLengthUnits {
    Characters,
    Octets,
}

impl CharLengthUnits {
    pub fn as_str(self) -> &'static str {
        match self {
            CharLengthUnits::Characters => "CHARACTERS",
            CharLengthUnits::Octets => "OCTETS",
        }
    }
}

/// `SUBSTRING(x FROM start [FOR length] [USING units])`
#[derive(Debug, Clone, PartialEq)]
pub struct SubstringFunction {
    pub subject: CharacterValueExpression,
    pub from: NumericValueExpression,
    pub for_length: Option<NumericValueExpression>,
    pub units: Option<CharLengthUnits>,
}

/// `SUBSTRING(x SIMILAR pattern ESCAPE escape)`
#[derive(Debug, Clone, PartialEq)]
pub struct RegexSubstringFunction {
    pub subject: CharacterValueExpression,
    pub similar: CharacterValueExpression,
    pub escape: CharacterValueExpression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldCase {
    Upper,
    Lower,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoldFunction {
    pub case: FoldCase,
    pub subject: CharacterValueExpression,
}

/// `CONVERT(x USING name)`
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodingFunction {
    pub subject: CharacterValueExpression,
    pub name: Ident,
}

/// `TRANSLATE(x USING name)`
#[derive(Debug, Clone, PartialEq)]
pub struct TransliterationFunction {
    pub subject: CharacterValueExpression,
    pub name: Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSpecification {
    Leading,
    Trailing,
    Both,
}

impl TrimSpecification {
    pub fn as_str(self) -> &'static str {
        match self {
            TrimSpecification::Leading => "LEADING",
            TrimSpecification::Trailing => "TRAILING",
            TrimSpecification::Both => "BOTH",
        }
    }
}

/// `TRIM([spec] [character] FROM x)`; no character means whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimFunction {
    pub specification: TrimSpecification,
    pub character: Option<CharacterValueExpression>,
    pub subject: CharacterValueExpression,
}
