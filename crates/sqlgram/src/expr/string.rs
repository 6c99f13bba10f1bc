use crate::coerce::{self, Operand, must};
use crate::error::fatal;
use crate::grammar::*;
use crate::ident::Ident;

/// A string function call, optionally aliased for the select list.
#[derive(Debug, Clone, PartialEq)]
pub struct StringFunction {
    function: StringValueFunction,
    alias: Option<String>,
}

impl StringFunction {
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.alias = Some(name.into());
        self
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn function(&self) -> &StringValueFunction {
        &self.function
    }

    pub(crate) fn into_parts(self) -> (StringValueFunction, Option<String>) {
        (self.function, self.alias)
    }

    pub(crate) fn into_function(self) -> StringValueFunction {
        self.function
    }
}

impl From<StringValueFunction> for StringFunction {
    fn from(function: StringValueFunction) -> Self {
        Self {
            function,
            alias: None,
        }
    }
}

impl From<SubstringFunction> for StringFunction {
    fn from(f: SubstringFunction) -> Self {
        StringValueFunction::Substring(f).into()
    }
}

fn subject(function: &'static str, x: Operand) -> CharacterValueExpression {
    must(function, "x", coerce::character_value_expression(x))
}

fn name(s: &str) -> Ident {
    Ident::parse(s).unwrap_or_else(|e| fatal(e))
}

/// `SUBSTRING(x FROM from)`; refine with [`SubstringFunction::for_length`]
/// and [`SubstringFunction::using`].
pub fn substring(x: impl Into<Operand>, from: impl Into<Operand>) -> SubstringFunction {
    SubstringFunction {
        subject: subject("substring", x.into()),
        from: must(
            "substring",
            "from",
            coerce::numeric_value_expression(from.into()),
        ),
        for_length: None,
        units: None,
    }
}

impl SubstringFunction {
    pub fn for_length(mut self, length: impl Into<Operand>) -> Self {
        self.for_length = Some(must(
            "substring",
            "for",
            coerce::numeric_value_expression(length.into()),
        ));
        self
    }

    pub fn using(mut self, units: CharLengthUnits) -> Self {
        self.units = Some(units);
        self
    }

    pub fn alias(self, name: impl Into<String>) -> StringFunction {
        StringFunction::from(self).alias(name)
    }
}

/// `SUBSTRING(x SIMILAR similar ESCAPE escape)`
pub fn regex_substring(
    x: impl Into<Operand>,
    similar: impl Into<Operand>,
    escape: impl Into<Operand>,
) -> StringFunction {
    StringValueFunction::RegexSubstring(RegexSubstringFunction {
        subject: subject("regex_substring", x.into()),
        similar: must(
            "regex_substring",
            "similar",
            coerce::character_value_expression(similar.into()),
        ),
        escape: must(
            "regex_substring",
            "escape",
            coerce::character_value_expression(escape.into()),
        ),
    })
    .into()
}

pub fn fold(x: impl Into<Operand>, case: FoldCase) -> StringFunction {
    let function = match case {
        FoldCase::Upper => "upper",
        FoldCase::Lower => "lower",
    };
    StringValueFunction::Fold(FoldFunction {
        case,
        subject: subject(function, x.into()),
    })
    .into()
}

/// `UPPER(x)`
pub fn upper(x: impl Into<Operand>) -> StringFunction {
    fold(x, FoldCase::Upper)
}

/// `LOWER(x)`
pub fn lower(x: impl Into<Operand>) -> StringFunction {
    fold(x, FoldCase::Lower)
}

/// `CONVERT(x USING name)`. The name is inlined and must be a valid SQL name.
pub fn convert(x: impl Into<Operand>, using: &str) -> StringFunction {
    StringValueFunction::Transcoding(TranscodingFunction {
        subject: subject("convert", x.into()),
        name: name(using),
    })
    .into()
}

/// `TRANSLATE(x USING name)`. The name is inlined and must be a valid SQL name.
pub fn translate(x: impl Into<Operand>, using: &str) -> StringFunction {
    StringValueFunction::Transliteration(TransliterationFunction {
        subject: subject("translate", x.into()),
        name: name(using),
    })
    .into()
}

fn trim_impl(
    function: &'static str,
    x: Operand,
    character: Option<Operand>,
    specification: TrimSpecification,
) -> StringFunction {
    StringValueFunction::Trim(TrimFunction {
        specification,
        character: character
            .map(|c| must(function, "characters", coerce::character_value_expression(c))),
        subject: subject(function, x),
    })
    .into()
}

/// `TRIM(spec characters FROM x)`
pub fn trim(
    x: impl Into<Operand>,
    characters: impl Into<Operand>,
    specification: TrimSpecification,
) -> StringFunction {
    trim_impl("trim", x.into(), Some(characters.into()), specification)
}

/// Strip whitespace from both ends.
pub fn trim_space(x: impl Into<Operand>) -> StringFunction {
    trim_impl("trim_space", x.into(), None, TrimSpecification::Both)
}

pub fn ltrim(x: impl Into<Operand>, characters: impl Into<Operand>) -> StringFunction {
    trim_impl(
        "ltrim",
        x.into(),
        Some(characters.into()),
        TrimSpecification::Leading,
    )
}

pub fn ltrim_space(x: impl Into<Operand>) -> StringFunction {
    trim_impl("ltrim_space", x.into(), None, TrimSpecification::Leading)
}

pub fn rtrim(x: impl Into<Operand>, characters: impl Into<Operand>) -> StringFunction {
    trim_impl(
        "rtrim",
        x.into(),
        Some(characters.into()),
        TrimSpecification::Trailing,
    )
}

pub fn rtrim_space(x: impl Into<Operand>) -> StringFunction {
    trim_impl("rtrim_space", x.into(), None, TrimSpecification::Trailing)
}
