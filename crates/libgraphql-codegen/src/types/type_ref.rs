use thiserror::Error;

/// A parsed GraphQL type reference such as `[User!]!`.
///
/// The front-end IR spells every field and variable type in GraphQL type
/// syntax; [`TypeRef::parse()`] turns that into a structure whose equality
/// is structural (same nesting, same nullability at each level, same
/// innermost type name).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    List {
        inner: Box<TypeRef>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeRef {
    pub fn parse(type_str: &str) -> Result<Self, TypeRefParseError> {
        let trimmed = type_str.trim();
        if trimmed.is_empty() {
            return Err(TypeRefParseError::Empty);
        }
        Self::parse_impl(type_str, trimmed)
    }

    fn parse_impl(
        full_type_str: &str,
        input: &str,
    ) -> Result<Self, TypeRefParseError> {
        let (body, nullable) = match input.strip_suffix('!') {
            Some(body) => (body.trim_end(), false),
            None => (input, true),
        };

        if let Some(rest) = body.strip_prefix('[') {
            let inner = rest.strip_suffix(']').ok_or_else(|| {
                TypeRefParseError::UnbalancedBrackets(full_type_str.to_string())
            })?;
            let inner = inner.trim();
            if inner.is_empty() {
                return Err(TypeRefParseError::Empty);
            }
            return Ok(Self::List {
                inner: Box::new(Self::parse_impl(full_type_str, inner)?),
                nullable,
            });
        }

        if body.contains(['[', ']']) {
            return Err(TypeRefParseError::UnbalancedBrackets(
                full_type_str.to_string(),
            ));
        }

        if !is_graphql_name(body) {
            return Err(TypeRefParseError::InvalidName(body.to_string()));
        }

        Ok(Self::Named {
            name: body.to_string(),
            nullable,
        })
    }

    /// Recursively unwrap list wrappers and return the innermost type name.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { name, nullable } => write!(
                f,
                "{name}{}",
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
impl serde::Serialize for TypeRef {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `/[_A-Za-z][_0-9A-Za-z]*/`
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeRefParseError {
    #[error("Type reference is empty")]
    Empty,

    #[error("`{0}` is not a valid GraphQL type name")]
    InvalidName(String),

    #[error("Type reference `{0}` has unbalanced list brackets")]
    UnbalancedBrackets(String),
}
