use std::fmt;

/// A single column value moving between the command surface and the store.
///
/// The schema only needs three shapes: integer ids/counters, free text, and
/// money columns with fixed two-decimal rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
    Money(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Money(v) => write!(f, "${v:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_with_two_decimals() {
        assert_eq!(Value::Money(49.99).to_string(), "$49.99");
        assert_eq!(Value::Money(50.0).to_string(), "$50.00");
    }

    #[test]
    fn int_and_text_render_plain() {
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::Text("instructor".into()).to_string(), "instructor");
    }
}
