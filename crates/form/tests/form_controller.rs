//! Behaviour of the form controller across change, blur, validate-all and
//! reset.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use wings_form::prelude::*;

fn login_rules() -> RuleSet {
    RuleSet::new()
        .field("email", FieldRule::new().required().email())
        .field("password", FieldRule::new().required().min_length(6))
}

#[fixture]
fn login() -> FormController {
    FormController::new(
        form_values! { "email" => "", "password" => "" },
        login_rules(),
    )
}

#[rstest]
fn validate_all_reports_every_failing_field(mut login: FormController) {
    login.set_values(form_values! { "email" => "", "password" => "abc" });

    assert!(!login.validate_all());
    assert_eq!(
        login.errors().iter().collect::<Vec<_>>(),
        [
            ("email", "email is required"),
            ("password", "Must be at least 6 characters"),
        ]
    );
}

#[rstest]
fn validate_all_passes_with_valid_values(mut login: FormController) {
    login.set_values(form_values! { "email" => "a@b.com", "password" => "abcdef" });

    assert!(login.validate_all());
    assert!(login.errors().is_empty());
}

#[rstest]
fn validate_all_replaces_previous_errors(mut login: FormController) {
    login.set_field_error("email", "taken");
    login.set_field_error("nickname", "server error");
    login.set_values(form_values! { "email" => "a@b.com", "password" => "abcdef" });

    assert!(login.validate_all());
    assert_eq!(login.error("email"), None);
    assert_eq!(login.error("nickname"), None);
}

#[rstest]
fn change_before_blur_never_shows_error(mut login: FormController) {
    login.handle_change("email", "not-an-email");
    assert_eq!(login.error("email"), None);
    assert!(!login.is_touched("email"));

    login.handle_blur("email");
    assert!(login.is_touched("email"));
    assert_eq!(
        login.error("email"),
        Some("Please enter a valid email address")
    );
}

#[rstest]
fn change_after_blur_validates_live(mut login: FormController) {
    login.handle_blur("password");
    assert_eq!(login.error("password"), Some("password is required"));

    login.handle_change("password", "abc");
    assert_eq!(login.error("password"), Some("Must be at least 6 characters"));

    login.handle_change("password", "abcdef");
    assert_eq!(login.error("password"), None);
}

#[rstest]
fn reset_restores_initial_state(mut login: FormController) {
    let initial = login.initial_values().clone();
    login.handle_change("email", "x");
    login.handle_blur("email");
    login.set_field_error("password", "nope");

    login.reset();

    assert_eq!(login.values(), &initial);
    assert!(login.errors().is_empty());
    assert!(login.touched().is_empty());
    assert!(!login.is_dirty());
}

#[rstest]
fn server_error_cleared_by_blur_with_valid_value(mut login: FormController) {
    login.handle_change("email", "ada@wings.dev");
    login.set_field_error("email", "taken");
    assert_eq!(login.error("email"), Some("taken"));

    login.handle_blur("email");
    assert_eq!(login.error("email"), None);
}

#[rstest]
fn unknown_fields_are_stored_but_never_fail(mut login: FormController) {
    login.handle_change("nickname", "");
    login.handle_blur("nickname");

    assert_eq!(login.value("nickname"), Some(&FieldValue::from("")));
    assert_eq!(login.error("nickname"), None);
}

#[test]
fn rule_field_missing_from_values_is_undefined() {
    let rules = RuleSet::new().field("terms", FieldRule::new().required_with("Accept the terms"));
    let mut form = FormController::new(FormValues::new(), rules);

    assert!(!form.validate_all());
    assert_eq!(form.error("terms"), Some("Accept the terms"));
}

#[test]
fn match_reacts_to_edits_of_either_field() {
    let rules = RuleSet::new()
        .field("password", FieldRule::new().required())
        .field(
            "confirm",
            FieldRule::new().matches_with("password", "Passwords do not match"),
        );
    let mut form = FormController::new(
        form_values! { "password" => "p1", "confirm" => "p1" },
        rules,
    );

    form.handle_blur("confirm");
    assert_eq!(form.error("confirm"), None);

    form.handle_change("confirm", "p2");
    assert_eq!(form.error("confirm"), Some("Passwords do not match"));

    form.handle_change("password", "p2");
    form.handle_blur("confirm");
    assert_eq!(form.error("confirm"), None);
}

#[test]
fn custom_check_sees_current_values() {
    let rules = RuleSet::new().field(
        "end",
        FieldRule::new().required().custom(|value, all| {
            let start = all.get("start").and_then(FieldValue::as_number)?;
            let end = value.and_then(FieldValue::as_number)?;
            (end < start).then(|| "End must not be before start".to_owned())
        }),
    );
    let mut form = FormController::new(form_values! { "start" => 10, "end" => 12 }, rules);

    assert!(form.validate_all());
    form.handle_change("end", 5);
    assert!(!form.submit());
    assert_eq!(
        form.visible_error("end"),
        Some("End must not be before start")
    );
}

#[test]
fn independent_controllers_share_nothing() {
    let rules = RuleSet::new().field("name", FieldRule::new().required());
    let mut a = FormController::new(form_values! { "name" => "" }, rules.clone());
    let b = FormController::new(form_values! { "name" => "" }, rules);

    a.handle_blur("name");
    assert_eq!(a.error("name"), Some("name is required"));
    assert_eq!(b.error("name"), None);
}

proptest! {
    #[test]
    fn evaluate_is_idempotent(value in ".{0,16}", other in ".{0,16}") {
        let rules = RuleSet::new().field(
            "field",
            FieldRule::new().required().email().max_length(10).matches("other"),
        );
        let all = form_values! { "field" => value.as_str(), "other" => other.as_str() };
        let value = FieldValue::from(value);

        prop_assert_eq!(
            rules.evaluate("field", Some(&value), Some(&all)),
            rules.evaluate("field", Some(&value), Some(&all))
        );
    }

    #[test]
    fn fields_without_rules_always_pass(name in "[a-z]{1,8}", value in ".{0,16}") {
        let rules = RuleSet::new().field("Configured", FieldRule::new().required().min_length(99));
        prop_assert_eq!(rules.evaluate(&name, Some(&FieldValue::from(value)), None), None);
    }

    #[test]
    fn validate_all_agrees_with_errors(password in ".{0,10}") {
        let mut form = FormController::new(
            form_values! { "email" => "a@b.com", "password" => password.as_str() },
            login_rules(),
        );
        let valid = form.validate_all();
        prop_assert_eq!(valid, form.errors().is_empty());
        prop_assert_eq!(valid, password.chars().count() >= 6);
    }
}
