//! Single-value validation rule.

/// Value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl ValidatableValue {
    /// String form used by the `required` check.
    fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for ValidatableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ValidatableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ValidatableValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A labeled value plus optional constraints.
///
/// Length bounds only apply to text and numeric bounds only apply to numbers;
/// a bound that does not apply to the value kind is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    pub label: String,
    pub value: ValidatableValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub whole_number: bool,
}

impl ValidationRule {
    /// Creates an unconstrained rule.
    pub fn new(label: impl Into<String>, value: impl Into<ValidatableValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            whole_number: false,
        }
    }

    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, ValidatableValue::Text(value.into()))
    }

    pub fn number(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, ValidatableValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    /// Rejects numbers with a fractional part.
    pub fn whole_number(mut self) -> Self {
        self.whole_number = true;
        self
    }

    /// Returns whether this rule passes; see [`validate`].
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Checks one rule.
///
/// # Contract
/// - `required`: the trimmed string form must be non-empty.
/// - `min_length`/`max_length`: inclusive, counted in chars, text only.
/// - `min`/`max`: inclusive, numbers only. `NaN` fails every numeric bound.
/// - `whole_number`: numbers only; `NaN` and infinities fail.
/// - All present constraints must hold.
pub fn validate(rule: &ValidationRule) -> bool {
    if rule.required && rule.value.as_text().trim().is_empty() {
        return false;
    }

    match &rule.value {
        ValidatableValue::Text(text) => {
            let length = text.chars().count();
            if rule.min_length.is_some_and(|min| length < min) {
                return false;
            }
            if rule.max_length.is_some_and(|max| length > max) {
                return false;
            }
        }
        ValidatableValue::Number(number) => {
            let bounded = rule.min.is_some() || rule.max.is_some();
            if bounded && number.is_nan() {
                return false;
            }
            if rule.min.is_some_and(|min| *number < min) {
                return false;
            }
            if rule.max.is_some_and(|max| *number > max) {
                return false;
            }
            if rule.whole_number && number.fract() != 0.0 {
                return false;
            }
        }
    }

    true
}
