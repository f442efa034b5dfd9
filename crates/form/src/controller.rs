//! Stateful validation for one form instance.
//!
//! A [`FormController`] owns the values, errors and touched flags of a single
//! form. The rule set is fixed at construction. Every operation is
//! synchronous, performs no I/O and cannot fail: validation failures are
//! stored as messages in [`FormErrors`].
//!
//! Errors only appear live once a field has been blurred:
//!
//! - [`handle_change`](FormController::handle_change) re-validates a field
//!   only when it is already touched.
//! - [`handle_blur`](FormController::handle_blur) marks the field touched and
//!   validates it.
//! - [`validate_all`](FormController::validate_all) validates every rule
//!   field without touching anything.

use tracing::{debug, trace};

use crate::rule::RuleSet;
use crate::state::{FormErrors, TouchedSet};
use crate::value::{FieldValue, FormValues};

/// Values, errors and touched state of one form, validated against a fixed
/// [`RuleSet`].
///
/// # Examples
///
/// ```rust,ignore
/// use wings_form::{FieldRule, FormController, RuleSet, form_values};
///
/// let rules = RuleSet::new()
///     .field("email", FieldRule::new().required().email())
///     .field("password", FieldRule::new().required().min_length(6));
/// let mut form = FormController::new(form_values! { "email" => "", "password" => "" }, rules);
///
/// form.handle_change("email", "ada@");
/// assert_eq!(form.error("email"), None);
///
/// form.handle_blur("email");
/// assert_eq!(form.error("email"), Some("Please enter a valid email address"));
/// ```
#[derive(Debug, Clone)]
pub struct FormController {
    rules: RuleSet,
    initial: FormValues,
    values: FormValues,
    errors: FormErrors,
    touched: TouchedSet,
}

impl FormController {
    /// Creates a controller seeded with `initial`. The initial values are
    /// kept for [`reset`](Self::reset).
    pub fn new(initial: FormValues, rules: RuleSet) -> Self {
        debug!(
            fields = initial.len(),
            rules = rules.len(),
            "form controller created"
        );
        Self {
            values: initial.clone(),
            initial,
            rules,
            errors: FormErrors::default(),
            touched: TouchedSet::default(),
        }
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Checks `value` against the rule of `field` without changing any state.
    ///
    /// Returns `None` when the field has no rule or the value passes.
    pub fn evaluate(
        &self,
        field: &str,
        value: Option<&FieldValue>,
        all: Option<&FormValues>,
    ) -> Option<String> {
        self.rules.evaluate(field, value, all)
    }

    /// Validates every rule field against the current values.
    ///
    /// See [`validate_values`](Self::validate_values).
    pub fn validate_all(&mut self) -> bool {
        self.errors = collect_errors(&self.rules, &self.values);
        self.log_validate_all()
    }

    /// Validates every rule field against `values` and replaces all stored
    /// errors with the result. Returns `true` when no field failed.
    ///
    /// The controller's own values are not changed.
    pub fn validate_values(&mut self, values: &FormValues) -> bool {
        self.errors = collect_errors(&self.rules, values);
        self.log_validate_all()
    }

    fn log_validate_all(&self) -> bool {
        let valid = self.errors.is_empty();
        debug!(valid, error_count = self.errors.len(), "validated all fields");
        valid
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// Stores a new value for `field`.
    ///
    /// When the field is touched its error is recomputed against the updated
    /// values; otherwise its error is left as it was.
    pub fn handle_change(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.values.set(field, value);

        if self.touched.is_touched(field) {
            self.revalidate(field);
        } else {
            trace!(field, "value changed on untouched field");
        }
    }

    /// Marks `field` touched and validates its current value.
    pub fn handle_blur(&mut self, field: &str) {
        self.touched.mark(field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: &str) {
        let error = self
            .rules
            .evaluate(field, self.values.get(field), Some(&self.values));
        trace!(field, error = error.as_deref(), "field validated");
        self.errors.apply(field, error);
    }

    /// Marks every rule field and every field with a value as touched.
    ///
    /// Use before [`validate_all`](Self::validate_all) on submit so that all
    /// errors become visible.
    pub fn touch_all(&mut self) {
        let fields: Vec<String> = self
            .rules
            .fields()
            .chain(self.values.keys())
            .map(str::to_owned)
            .collect();
        for field in fields {
            self.touched.mark(field);
        }
    }

    /// Touches every field, then runs [`validate_all`](Self::validate_all).
    pub fn submit(&mut self) -> bool {
        self.touch_all();
        self.validate_all()
    }

    /// Restores the initial values and clears errors and touched flags.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
        debug!("form reset");
    }

    /// Sets an error for `field` regardless of its rule, e.g. one reported by
    /// a server.
    ///
    /// The message stays until the field is validated again.
    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        trace!(field, error = %message, "field error set");
        self.errors.insert(field, message);
    }

    /// Removes the error of `field`, if any.
    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Replaces all values at once. Nothing is validated.
    pub fn set_values(&mut self, values: FormValues) {
        trace!(fields = values.len(), "values replaced");
        self.values = values;
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.is_touched(field)
    }

    /// The error of `field` only if the field is touched; what a form shows
    /// under the input.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        self.error(field).filter(|_| self.is_touched(field))
    }

    /// Whether no error is stored. Does not re-evaluate any rule.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any value differs from the initial values.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Whether the value of `field` differs from its initial value.
    pub fn is_field_dirty(&self, field: &str) -> bool {
        self.values.get(field) != self.initial.get(field)
    }
}

fn collect_errors(rules: &RuleSet, values: &FormValues) -> FormErrors {
    rules
        .iter()
        .filter_map(|(field, rule)| {
            rule.evaluate(field, values.get(field), Some(values))
                .map(|message| (field, message))
        })
        .collect()
}
