/// A literal or variable value appearing in arguments and default values.
///
/// Numeric literals keep their raw source text: the pipeline never does
/// arithmetic on them, and deferring conversion avoids imposing a numeric
/// range at parse time.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `$name`
    Variable(String),
    /// Raw text of an integer literal, e.g. `"-42"`.
    Int(String),
    /// Raw text of a float literal, e.g. `"3.14e9"`.
    Float(String),
    /// Cooked content of a string literal.
    String(String),
    Boolean(bool),
    Null,
    /// An enum value name, e.g. `ACTIVE`.
    Enum(String),
    List(Vec<Value>),
    /// Object fields in source order.
    Object(Vec<(String, Value)>),
}
