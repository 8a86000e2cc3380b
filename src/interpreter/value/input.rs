use crate::interpreter::value::core::Value;

impl Value {
    /// Builds a value from one line of user input.
    ///
    /// The trailing line terminator is removed first. A line containing `.`
    /// is parsed as a real, any other line as an integer; if that parse fails
    /// the line is kept verbatim as text.
    ///
    /// # Example
    /// ```
    /// use hopscotch::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_input("42\n"), Value::Integer(42));
    /// assert_eq!(Value::from_input("2.5\r\n"), Value::Real(2.5));
    /// assert_eq!(Value::from_input("4x"), Value::Text("4x".into()));
    /// assert_eq!(Value::from_input("1.2.3"), Value::Text("1.2.3".into()));
    /// ```
    #[must_use]
    pub fn from_input(line: &str) -> Self {
        let text = line.trim_end_matches(['\n', '\r']);
        let trimmed = text.trim();

        let parsed = if trimmed.contains('.') {
            trimmed.parse().ok().map(Self::Real)
        } else {
            trimmed.parse().ok().map(Self::Integer)
        };

        parsed.unwrap_or_else(|| Self::Text(text.to_string()))
    }
}
