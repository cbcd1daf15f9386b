//! Runtime error types.

/// An error raised during evaluation.
///
/// `RuntimeError` carries a human-readable message and the line of the
/// token that triggered it. Its `Display` implementation produces the
/// two-line diagnostic form reported on standard error:
///
/// ```text
/// Operands must be two numbers or two strings.
/// [line 1]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    message: String,
    /// The 1-based line of the token that triggered the error.
    line: usize,
}

impl RuntimeError {
    /// Creates a runtime error with an arbitrary message.
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        RuntimeError {
            message: message.into(),
            line,
        }
    }

    /// Creates an "Undefined variable" error.
    pub fn undefined_variable(name: &str, line: usize) -> Self {
        Self::new(format!("Undefined variable '{}'.", name), line)
    }

    /// Creates an "Operand must be a number." error.
    pub fn operand_must_be_number(line: usize) -> Self {
        Self::new("Operand must be a number.", line)
    }

    /// Creates an "Operands must be numbers." error.
    pub fn operands_must_be_numbers(line: usize) -> Self {
        Self::new("Operands must be numbers.", line)
    }

    /// Creates the error for `+` on mismatched operand types.
    pub fn operands_numbers_or_strings(line: usize) -> Self {
        Self::new("Operands must be two numbers or two strings.", line)
    }

    /// Creates a "Can only call functions and classes." error.
    pub fn not_callable(line: usize) -> Self {
        Self::new("Can only call functions and classes.", line)
    }

    /// Creates an arity mismatch error.
    pub fn arity_mismatch(expected: usize, got: usize, line: usize) -> Self {
        Self::new(
            format!("Expected {} arguments but got {}.", expected, got),
            line,
        )
    }

    /// Creates an "Only instances have properties." error.
    pub fn only_instances_have_properties(line: usize) -> Self {
        Self::new("Only instances have properties.", line)
    }

    /// Creates an "Only instances have fields." error.
    pub fn only_instances_have_fields(line: usize) -> Self {
        Self::new("Only instances have fields.", line)
    }

    /// Creates an "Undefined property" error.
    pub fn undefined_property(name: &str, line: usize) -> Self {
        Self::new(format!("Undefined property '{}'.", name), line)
    }

    /// Creates a "Superclass must be a class." error.
    pub fn superclass_must_be_class(line: usize) -> Self {
        Self::new("Superclass must be a class.", line)
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-based line of the token that triggered the error.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for RuntimeError {}
