//! Default banking policy
//!
//! Deny rules sit above permit rules so that account status, time of day,
//! clearance and seniority limits pre-empt any departmental grant. Anything
//! not explicitly permitted falls through to the engine's default deny.

use warden_core::{AccessRequest, Department, ResourceStatus, ResourceType, Rule, Seniority};

/// Every action the banking service understands
pub const BANKING_ACTIONS: [&str; 8] = [
    "deposit",
    "withdrawal",
    "transfer",
    "view_balance",
    "view_history",
    "freeze_account",
    "close_account",
    "approve_loan",
];

/// Actions that move money and therefore carry an amount
pub const MONEY_MOVEMENT_ACTIONS: [&str; 4] = ["deposit", "withdrawal", "transfer", "approve_loan"];

/// Largest amount allowed outside business hours
pub const AFTER_HOURS_LIMIT: f64 = 10_000.0;

/// Largest amount a junior employee may handle
pub const JUNIOR_LIMIT: f64 = 1_000.0;

/// Tellers handle transactions strictly below this amount
pub const TELLER_LIMIT: f64 = 5_000.0;

/// Loan officers approve loans up to this amount
pub const LOAN_APPROVAL_LIMIT: f64 = 250_000.0;

pub fn is_money_movement(action: &str) -> bool {
    MONEY_MOVEMENT_ACTIONS.contains(&action)
}

fn is_view(action: &str) -> bool {
    matches!(action, "view_balance" | "view_history")
}

fn amount_above(req: &AccessRequest, limit: f64) -> bool {
    matches!(req.amount(), Some(amount) if amount > limit)
}

fn same_branch(req: &AccessRequest) -> bool {
    req.actor.branch() == req.resource.branch()
}

fn is_staff(req: &AccessRequest) -> bool {
    req.actor.department() != Department::Customer
}

/// The default banking rule set, in no particular order
pub fn banking_rules() -> Vec<Rule> {
    vec![
        // ---- deny ----
        Rule::deny("closed_account", "Closed Account", 400, |req| {
            Ok(req.resource.status() == ResourceStatus::Closed && req.action != "view_history")
        })
        .with_description("Closed accounts only expose their history"),
        Rule::deny("frozen_account_movement", "Frozen Account Movement", 350, |req| {
            Ok(req.resource.status() == ResourceStatus::Frozen && is_money_movement(&req.action))
        })
        .with_description("No money moves in or out of a frozen account"),
        Rule::deny(
            "after_hours_high_value",
            "After Hours High Value",
            300,
            |req| Ok(!req.environment.business_hours && amount_above(req, AFTER_HOURS_LIMIT)),
        )
        .with_description("High value transactions only during business hours"),
        Rule::deny("insufficient_clearance", "Insufficient Clearance", 250, |req| {
            Ok(is_staff(req)
                && req.actor.attributes.clearance_level < req.resource.attributes.sensitivity)
        })
        .with_description("Staff clearance must cover the account sensitivity"),
        Rule::deny("junior_high_value", "Junior High Value", 200, |req| {
            Ok(req.actor.attributes.seniority == Seniority::Junior
                && amount_above(req, JUNIOR_LIMIT))
        })
        .with_description("Junior staff are limited to small amounts"),
        Rule::deny("customer_foreign_account", "Customer Foreign Account", 190, |req| {
            Ok(req.actor.department() == Department::Customer
                && req.resource.attributes.owner != req.actor.id)
        })
        .with_description("Customers only act on their own accounts"),
        // ---- permit ----
        Rule::permit("compliance_oversight", "Compliance Oversight", 150, |req| {
            Ok(req.actor.department() == Department::Compliance
                && (is_view(&req.action) || req.action == "freeze_account"))
        })
        .with_description("Compliance may inspect and freeze any account"),
        Rule::deny("cross_region_staff", "Cross Region Staff", 140, |req| {
            Ok(is_staff(req)
                && req.actor.department() != Department::Auditor
                && req.actor.attributes.location.region != req.resource.attributes.region)
        })
        .with_description("Branch staff work within their own region"),
        Rule::permit("teller_small_transaction", "Teller Small Transaction", 100, |req| {
            Ok(req.actor.department() == Department::Teller
                && matches!(req.action.as_str(), "deposit" | "withdrawal" | "transfer")
                && same_branch(req)
                && req.require_amount()? < TELLER_LIMIT)
        })
        .with_description("Tellers handle small transactions at their branch"),
        Rule::permit("teller_branch_view", "Teller Branch View", 100, |req| {
            Ok(req.actor.department() == Department::Teller
                && req.action == "view_balance"
                && same_branch(req))
        }),
        Rule::permit("loan_officer_approval", "Loan Officer Approval", 100, |req| {
            Ok(req.actor.department() == Department::LoanOfficer
                && req.action == "approve_loan"
                && req.resource.attributes.resource_type == ResourceType::Loan
                && req.require_amount()? <= LOAN_APPROVAL_LIMIT)
        })
        .with_description("Loan officers approve loans up to their limit"),
        Rule::permit("branch_manager_access", "Branch Manager Access", 90, |req| {
            Ok(req.actor.department() == Department::BranchManager && same_branch(req))
        })
        .with_description("Branch managers act on any account at their branch"),
        Rule::permit("auditor_read_only", "Auditor Read Only", 80, |req| {
            Ok(req.actor.department() == Department::Auditor && is_view(&req.action))
        }),
        Rule::permit("owner_self_service", "Owner Self Service", 70, |req| {
            Ok(req.resource.attributes.owner == req.actor.id
                && (is_view(&req.action)
                    || matches!(req.action.as_str(), "deposit" | "withdrawal" | "transfer")))
        })
        .with_description("Account owners manage their own funds"),
        Rule::permit("senior_staff_view", "Senior Staff View", 60, |req| {
            Ok(is_staff(req)
                && req.actor.attributes.seniority >= Seniority::Senior
                && is_view(&req.action))
        }),
    ]
}
