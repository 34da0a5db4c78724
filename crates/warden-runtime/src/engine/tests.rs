//! Unit tests for PolicyEngine

use super::PolicyEngine;
use crate::error::RuntimeError;
use crate::observability::metrics::{
    CONDITION_ERRORS, DECISIONS_DEFAULT_DENY, DECISIONS_TOTAL, EVALUATION_DURATION,
    HISTOGRAM_WINDOW,
};
use crate::observability::MetricsCollector;
use chrono::Utc;
use std::sync::Arc;
use warden_core::{
    AccessRequest, Actor, ActorAttributes, ConditionError, Department, Effect, Environment,
    Location, Outcome, Resource, ResourceAttributes, ResourceStatus, ResourceType, Rule, Seniority,
    NO_APPLICABLE_RULE,
};

fn request(department: Department, amount: Option<f64>, business_hours: bool) -> AccessRequest {
    let actor = Actor::new(
        "user_1",
        "Test Actor",
        ActorAttributes::new(
            department,
            Seniority::Mid,
            Location::new("downtown", "west", "US"),
            3,
        ),
    );
    let resource = Resource::new(
        "acct_1",
        ResourceAttributes {
            resource_type: ResourceType::Checking,
            owner: "user_2".to_string(),
            status: ResourceStatus::Active,
            sensitivity: 2,
            branch: "downtown".to_string(),
            region: "west".to_string(),
        },
    );
    let mut req = AccessRequest::new(
        actor,
        "withdrawal",
        resource,
        Environment::new(Utc::now(), business_hours),
    );
    req.action_attributes.amount = amount;
    req
}

fn always(id: &str, priority: i32, effect: Effect) -> Rule {
    Rule::new(id, id, priority, effect, |_| Ok(true))
}

#[test]
fn test_empty_engine_default_denies() {
    let engine = PolicyEngine::new();
    let decision = engine.evaluate(request(Department::Teller, Some(10.0), true));

    assert_eq!(decision.outcome, Outcome::Deny);
    assert_eq!(decision.reason, NO_APPLICABLE_RULE);
    assert!(decision.matched_rule_name.is_empty());
    assert!(decision.source_request.is_some());
}

#[test]
fn test_no_matching_rule_default_denies() {
    let mut engine = PolicyEngine::new();
    engine
        .add_rule(Rule::permit("never", "Never", 10, |_| Ok(false)))
        .unwrap();

    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Deny);
    assert!(decision.is_default());
}

#[test]
fn test_duplicate_rule_rejected() {
    let mut engine = PolicyEngine::new();
    engine.add_rule(always("r1", 10, Effect::Permit)).unwrap();

    let err = engine.add_rule(always("r1", 99, Effect::Deny)).unwrap_err();
    assert!(matches!(err, RuntimeError::DuplicateRule(ref id) if id == "r1"));

    // Existing state untouched
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.rules()[0].priority, 10);
    assert_eq!(engine.rules()[0].effect, Effect::Permit);
}

#[test]
fn test_rules_sorted_by_priority_descending() {
    let mut engine = PolicyEngine::new();
    engine
        .add_rules(vec![
            always("low", 10, Effect::Permit),
            always("high", 300, Effect::Deny),
            always("mid", 100, Effect::Permit),
        ])
        .unwrap();

    let ids: Vec<&str> = engine.rules().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["high", "mid", "low"]);
}

#[test]
fn test_equal_priorities_keep_insertion_order() {
    let mut engine = PolicyEngine::new();
    engine.add_rule(always("first", 50, Effect::Deny)).unwrap();
    engine.add_rule(always("other", 70, Effect::Permit)).unwrap();
    engine.add_rule(always("second", 50, Effect::Permit)).unwrap();
    engine.add_rule(always("third", 50, Effect::Permit)).unwrap();
    engine.add_rule(always("top", 90, Effect::Permit)).unwrap();

    let ids: Vec<&str> = engine.rules().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["top", "other", "first", "second", "third"]);
}

#[test]
fn test_tie_break_first_added_wins() {
    let mut engine = PolicyEngine::new();
    engine.add_rule(always("deny_first", 50, Effect::Deny)).unwrap();
    engine.add_rule(always("permit_second", 50, Effect::Permit)).unwrap();

    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Deny);
    assert_eq!(decision.matched_rule_name, "deny_first");

    let mut engine = PolicyEngine::new();
    engine.add_rule(always("permit_first", 50, Effect::Permit)).unwrap();
    engine.add_rule(always("deny_second", 50, Effect::Deny)).unwrap();

    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Permit);
    assert_eq!(decision.matched_rule_name, "permit_first");
}

#[test]
fn test_higher_priority_wins_regardless_of_effect() {
    // Deny above permit
    let mut engine = PolicyEngine::new();
    engine.add_rule(always("permit", 10, Effect::Permit)).unwrap();
    engine.add_rule(always("deny", 20, Effect::Deny)).unwrap();
    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Deny);
    assert_eq!(decision.reason, "Denied by rule: deny");

    // Permit above deny
    let mut engine = PolicyEngine::new();
    engine.add_rule(always("deny", 10, Effect::Deny)).unwrap();
    engine.add_rule(always("permit", 20, Effect::Permit)).unwrap();
    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Permit);
    assert_eq!(decision.reason, "Permitted by rule: permit");
}

#[test]
fn test_only_deciding_rule_is_reported() {
    let mut engine = PolicyEngine::new();
    engine
        .add_rule(Rule::deny("skipped", "Skipped", 100, |_| Ok(false)))
        .unwrap();
    engine
        .add_rule(Rule::permit("winner", "Winner", 50, |_| Ok(true)))
        .unwrap();
    engine
        .add_rule(Rule::deny("shadowed", "Shadowed", 10, |_| Ok(true)))
        .unwrap();

    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.matched_rule_name, "Winner");
    assert_eq!(decision.reason, "Permitted by rule: Winner");
}

#[test]
fn test_erroring_condition_is_non_match() {
    let mut engine = PolicyEngine::new();
    engine
        .add_rule(Rule::deny("broken", "Broken", 500, |_| {
            Err(ConditionError::MissingAttribute("amount"))
        }))
        .unwrap();
    engine
        .add_rule(Rule::permit("fallback", "Fallback", 1, |_| Ok(true)))
        .unwrap();

    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Permit);
    assert_eq!(decision.matched_rule_name, "Fallback");
}

#[test]
fn test_panicking_condition_is_non_match() {
    let mut engine = PolicyEngine::new();
    engine
        .add_rule(Rule::deny("panics", "Panics", 500, |_| panic!("bad predicate")))
        .unwrap();

    let decision = engine.evaluate(request(Department::Teller, None, true));
    assert_eq!(decision.outcome, Outcome::Deny);
    assert!(decision.is_default());
}

#[test]
fn test_erroring_rule_equivalent_to_never_matching_rule() {
    let mut erroring = PolicyEngine::new();
    erroring
        .add_rule(Rule::permit("r", "R", 10, |req| Ok(req.require_amount()? > 0.0)))
        .unwrap();

    let mut never = PolicyEngine::new();
    never
        .add_rule(Rule::permit("r", "R", 10, |_| Ok(false)))
        .unwrap();

    let a = erroring.evaluate(request(Department::Teller, None, true));
    let b = never.evaluate(request(Department::Teller, None, true));
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.reason, b.reason);
    assert_eq!(a.matched_rule_name, b.matched_rule_name);
}

#[test]
fn test_after_hours_scenario() {
    let mut engine = PolicyEngine::new();
    engine
        .add_rule(Rule::deny(
            "after_hours_high_value",
            "After Hours High Value",
            300,
            |req| Ok(req.require_amount()? > 10_000.0 && !req.environment.business_hours),
        ))
        .unwrap();
    engine
        .add_rule(Rule::permit("teller_small", "Teller Small Transaction", 100, |req| {
            Ok(req.actor.department() == Department::Teller && req.require_amount()? < 5_000.0)
        }))
        .unwrap();

    let small = engine.evaluate(request(Department::Teller, Some(200.0), false));
    assert_eq!(small.outcome, Outcome::Permit);
    assert_eq!(small.matched_rule_name, "Teller Small Transaction");

    let large = engine.evaluate(request(Department::Teller, Some(15_000.0), false));
    assert_eq!(large.outcome, Outcome::Deny);
    assert_eq!(large.matched_rule_name, "After Hours High Value");
}

#[test]
fn test_metrics_recorded() {
    let metrics = Arc::new(MetricsCollector::new());
    let mut engine = PolicyEngine::new().with_metrics(metrics.clone());
    engine
        .add_rule(Rule::deny("broken", "Broken", 10, |_| {
            Err(ConditionError::MissingAttribute("amount"))
        }))
        .unwrap();

    engine.evaluate(request(Department::Teller, None, true));
    engine.evaluate(request(Department::Teller, None, true));

    assert_eq!(metrics.counter(DECISIONS_TOTAL).get(), 2);
    assert_eq!(metrics.counter(DECISIONS_DEFAULT_DENY).get(), 2);
    assert_eq!(metrics.counter(CONDITION_ERRORS).get(), 2);
}

#[test]
fn test_latency_samples_stay_bounded() {
    let metrics = Arc::new(MetricsCollector::new());
    let engine = PolicyEngine::new().with_metrics(metrics.clone());
    let evaluations = HISTOGRAM_WINDOW * 10;

    let req = request(Department::Teller, Some(10.0), true);
    for _ in 0..evaluations {
        engine.evaluate(req.clone());
    }

    let latency = metrics.histogram(EVALUATION_DURATION);
    assert_eq!(latency.count(), evaluations as u64);
    assert_eq!(latency.retained(), HISTOGRAM_WINDOW);
    assert_eq!(metrics.counter(DECISIONS_TOTAL).get(), evaluations as u64);
}

#[test]
fn test_rule_infos_in_evaluation_order() {
    let mut engine = PolicyEngine::new();
    engine.add_rule(always("a", 1, Effect::Permit)).unwrap();
    engine.add_rule(always("b", 2, Effect::Deny)).unwrap();

    let infos = engine.rule_infos();
    assert_eq!(infos[0].id, "b");
    assert_eq!(infos[1].id, "a");
    assert!(engine.get_rule("a").is_some());
    assert!(engine.get_rule("missing").is_none());
}
