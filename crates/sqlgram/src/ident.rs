//! Schema-qualified SQL names.
//!
//! Names that end up inline in the SQL text (character set names for
//! `CONVERT(x USING name)`, transliteration names for `TRANSLATE`) cannot be
//! parameterized, so they are validated here instead:
//!
//! - Unquoted parts must match `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL and escape `"` as `""`

use crate::error::Misuse;

/// A part of a schema-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    Unquoted(String),
    Quoted(String),
}

/// A dotted, optionally quoted SQL name such as `utf8mb4` or `public."Latin"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

fn invalid(msg: impl Into<String>) -> Misuse {
    Misuse::InvalidName(msg.into())
}

impl Ident {
    /// Parse a name, supporting dotted and quoted forms.
    pub fn parse(s: &str) -> Result<Self, Misuse> {
        if s.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if s.contains('\0') {
            return Err(invalid("name cannot contain NUL character"));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') => {
                        if chars.peek().is_none() {
                            return Err(invalid(format!("trailing '.' in '{s}'")));
                        }
                    }
                    Some(c) => {
                        return Err(invalid(format!(
                            "expected '.' between name parts of '{s}', got '{c}'"
                        )));
                    }
                    None => break,
                }
            }

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('"') => {
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                name.push('"');
                            } else {
                                break;
                            }
                        }
                        Some(c) => name.push(c),
                        None => return Err(invalid(format!("unclosed quote in '{s}'"))),
                    }
                }
                if name.is_empty() {
                    return Err(invalid(format!("empty quoted part in '{s}'")));
                }
                parts.push(IdentPart::Quoted(name));
                continue;
            }

            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let ok = if name.is_empty() {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !ok {
                    return Err(invalid(format!("invalid character '{c}' in '{s}'")));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(invalid(format!("empty part in '{s}'")));
            }
            parts.push(IdentPart::Unquoted(name));
        }

        Ok(Self { parts })
    }

    /// Render the name as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Unquoted(s) => out.push_str(s),
                IdentPart::Quoted(s) => {
                    out.push('"');
                    for ch in s.chars() {
                        if ch == '"' {
                            out.push_str("\"\"");
                        } else {
                            out.push(ch);
                        }
                    }
                    out.push('"');
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_simple() {
        assert_eq!(Ident::parse("utf8").unwrap().to_sql(), "utf8");
    }

    #[test]
    fn ident_dotted_and_quoted() {
        let ident = Ident::parse(r#"public."Latin""1".x"#).unwrap();
        assert_eq!(ident.parts.len(), 3);
        assert_eq!(ident.to_sql(), r#"public."Latin""1".x"#);
    }

    #[test]
    fn ident_rejects_injection() {
        assert!(Ident::parse("utf8) FROM x; --").is_err());
        assert!(Ident::parse("1abc").is_err());
        assert!(Ident::parse("a..b").is_err());
        assert!(Ident::parse("a.").is_err());
        assert!(Ident::parse(r#""open"#).is_err());
        assert!(Ident::parse("").is_err());
    }
}
