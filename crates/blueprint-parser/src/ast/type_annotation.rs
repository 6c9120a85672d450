/// A type annotation: `Name`, `[Inner]`, or `Inner!`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    Named(String),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Named(name) => write!(f, "{name}"),
            TypeAnnotation::List(inner) => write!(f, "[{inner}]"),
            TypeAnnotation::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
