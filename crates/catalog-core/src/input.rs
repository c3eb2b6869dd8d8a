//! Form input validation and formatting.
//!
//! An [`InputSpec`] describes the constraints of one field; an
//! [`InputState`] holds what the user typed plus the message to show.
//! The UI calls [`InputState::update`] on every edit and
//! [`InputState::blur`] when the field loses focus.
//!
//! Validation never rejects a value outright. Numbers above `max` are
//! replaced by `max`, values failing a custom validator are cleared, and
//! everything else is kept with an error message next to it.

use std::fmt;
use std::sync::Arc;

/// Kind of value an input holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Number,
}

impl InputKind {
    /// HTML `type` attribute for this kind
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

/// Custom validation callback
///
/// Two validators are equal only when they share the same closure, which
/// keeps [`InputSpec`] usable as component props.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Validator {
    pub fn new(check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(check))
    }

    pub fn check(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Constraints and presentation options for one input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSpec {
    pub kind: InputKind,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Minimum length in characters
    pub minlength: Option<usize>,
    /// Maximum length in characters; also enables the counter
    pub maxlength: Option<usize>,
    /// Digits after the decimal point, applied on blur
    pub fraction_digits: Option<usize>,
    /// ISO currency code, e.g. "USD"
    pub currency: Option<String>,
    /// Symbol displayed next to the value, e.g. "$"
    pub currency_symbol: Option<String>,
    /// Message template; supports `{min}`, `{max}`, `{minlength}`, `{maxlength}`
    pub error_message: Option<String>,
    pub validator: Option<Validator>,
}

/// Which check a value failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Required,
    BelowMin,
    NotANumber,
    Length,
    Custom,
}

impl InputSpec {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn number() -> Self {
        Self {
            kind: InputKind::Number,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn minlength(mut self, len: usize) -> Self {
        self.minlength = Some(len);
        self
    }

    pub fn maxlength(mut self, len: usize) -> Self {
        self.maxlength = Some(len);
        self
    }

    pub fn fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = Some(digits);
        self
    }

    pub fn currency(mut self, code: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self.currency_symbol = Some(symbol.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn validator(mut self, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Validator::new(check));
        self
    }

    /// First built-in check the value fails, if any.
    ///
    /// The custom validator is not part of this; it only runs on blur.
    pub fn check(&self, value: &str) -> Option<Failure> {
        if value.trim().is_empty() {
            return self.required.then_some(Failure::Required);
        }

        if self.kind == InputKind::Number {
            match parse_number(value) {
                None => return Some(Failure::NotANumber),
                Some(n) => {
                    if self.min.is_some_and(|min| n < min) {
                        return Some(Failure::BelowMin);
                    }
                }
            }
        }

        let len = value.chars().count();
        let too_short = self.minlength.is_some_and(|min| len < min);
        let too_long = self.maxlength.is_some_and(|max| len > max);
        if too_short || too_long {
            return Some(Failure::Length);
        }

        None
    }

    /// Message shown for a failure, with placeholders substituted
    pub fn message(&self, failure: Failure) -> String {
        let template = match &self.error_message {
            Some(custom) => custom.as_str(),
            None => self.default_template(failure),
        };
        self.substitute(template)
    }

    fn default_template(&self, failure: Failure) -> &'static str {
        match failure {
            Failure::Required => "This field is required",
            Failure::BelowMin => "Value must be at least {min}",
            Failure::NotANumber => "Please enter a valid number",
            Failure::Length => match (self.minlength, self.maxlength) {
                (Some(_), Some(_)) => "Length must be between {minlength} and {maxlength}",
                (Some(_), None) => "Must be at least {minlength} characters",
                _ => "Must be at most {maxlength} characters",
            },
            Failure::Custom => "Invalid value",
        }
    }

    fn substitute(&self, template: &str) -> String {
        let mut out = template.to_string();
        if let Some(min) = self.min {
            out = out.replace("{min}", &format_number(min));
        }
        if let Some(max) = self.max {
            out = out.replace("{max}", &format_number(max));
        }
        if let Some(len) = self.minlength {
            out = out.replace("{minlength}", &len.to_string());
        }
        if let Some(len) = self.maxlength {
            out = out.replace("{maxlength}", &len.to_string());
        }
        out
    }
}

/// Live state of one input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputState {
    pub value: String,
    /// Message currently shown under the input
    pub error: Option<String>,
    /// Set once the user has edited or left the field
    pub touched: bool,
}

impl InputState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
            touched: false,
        }
    }

    /// Apply an edit.
    pub fn update(&mut self, spec: &InputSpec, raw: &str) {
        self.touched = true;
        self.value = raw.to_string();
        self.clamp_to_max(spec);
        self.error = spec.check(&self.value).map(|f| spec.message(f));
    }

    /// The field lost focus: format, re-check and run the custom validator.
    pub fn blur(&mut self, spec: &InputSpec) {
        self.touched = true;
        self.clamp_to_max(spec);

        if let Some(digits) = spec.fraction_digits {
            if let Some(n) = parse_number(&self.value) {
                self.value = format!("{:.*}", digits, n);
                self.floor_to_max(spec, digits);
            }
        }

        self.error = spec.check(&self.value).map(|f| spec.message(f));

        if self.error.is_none() && !self.value.is_empty() {
            if let Some(validator) = &spec.validator {
                if !validator.check(&self.value) {
                    tracing::debug!(value = %self.value, "Custom validator rejected value");
                    self.value.clear();
                    self.error = Some(spec.message(Failure::Custom));
                }
            }
        }
    }

    /// Blur and report whether the field is valid, for form submission
    pub fn commit(&mut self, spec: &InputSpec) -> bool {
        self.blur(spec);
        self.error.is_none()
    }

    /// "current/max" counter for length-bounded inputs
    pub fn counter(&self, spec: &InputSpec) -> Option<String> {
        spec.maxlength
            .map(|max| format!("{}/{}", self.value.chars().count(), max))
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Rounding may carry the value past `max`; fall back to the largest
    /// value with `digits` decimals that does not exceed it.
    fn floor_to_max(&mut self, spec: &InputSpec, digits: usize) {
        if spec.kind != InputKind::Number {
            return;
        }
        if let (Some(max), Some(n)) = (spec.max, parse_number(&self.value)) {
            if n > max {
                let scale = 10f64.powi(digits as i32);
                let mut steps = (max * scale).floor();
                if steps / scale > max {
                    steps -= 1.0;
                }
                tracing::debug!(value = n, max, "Rounded input exceeded max");
                self.value = format!("{:.*}", digits, steps / scale);
            }
        }
    }

    fn clamp_to_max(&mut self, spec: &InputSpec) {
        if spec.kind != InputKind::Number {
            return;
        }
        if let (Some(max), Some(n)) = (spec.max, parse_number(&self.value)) {
            if n > max {
                tracing::debug!(value = n, max, "Clamped input to max");
                self.value = format_number(max);
            }
        }
    }
}

/// Parse a finite number, ignoring surrounding whitespace
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Shortest display form of a number ("200", "0.5")
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
