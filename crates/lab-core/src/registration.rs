//! # Registration Module
//!
//! Course-registration checks as an injected, ordered chain of rules.
//!
//! ## Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RegistrationService::evaluate(student)                                 │
//! │                                                                         │
//! │  rules[0].validate ──false──► Rejected { rule: rules[0].name() }        │
//! │      │true                                                              │
//! │  rules[1].validate ──false──► Rejected { rule: rules[1].name() }        │
//! │      │true                       (later rules are NOT evaluated)        │
//! │     ...                                                                 │
//! │      │true                                                              │
//! │  Accepted                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A new rule is a new type implementing [`ValidationRule`]; the service
//! itself never changes. Each rule decides from the `Student` alone.
//!
//! ## Example
//! ```rust
//! use lab_core::registration::{standard_rules, RegistrationService};
//! use lab_core::Student;
//!
//! let service = RegistrationService::new(standard_rules());
//! assert!(service.register(&Student::new_eligible("1049", 23)));
//! assert!(!service.register(&Student::new_eligible("24111", 26)));
//! ```

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::types::Student;

/// Maximum credit load per semester.
pub const SKS_LIMIT: u32 = 24;

/// NIM flagged with a schedule conflict when no list is configured.
pub const DEFAULT_CONFLICTING_NIM: &str = "24111";

// =============================================================================
// Rule Trait
// =============================================================================

/// A single registration check.
///
/// Implementations hold no per-call state, so one instance can be shared
/// by every student that goes through the chain.
pub trait ValidationRule: Send + Sync {
    /// Short name used in log lines and [`RegistrationOutcome::Rejected`].
    fn name(&self) -> &'static str;

    /// Returns `true` when the student passes this rule.
    fn validate(&self, student: &Student) -> bool;
}

// =============================================================================
// Concrete Rules
// =============================================================================

/// Rejects a load above the semester limit.
#[derive(Debug, Clone, Copy)]
pub struct SksLimitRule {
    limit: u32,
}

impl SksLimitRule {
    pub fn new() -> Self {
        SksLimitRule { limit: SKS_LIMIT }
    }

    pub fn with_limit(limit: u32) -> Self {
        SksLimitRule { limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for SksLimitRule {
    fn default() -> Self {
        SksLimitRule::new()
    }
}

impl ValidationRule for SksLimitRule {
    fn name(&self) -> &'static str {
        "SksLimitRule"
    }

    fn validate(&self, student: &Student) -> bool {
        if student.sks() > self.limit {
            warn!(
                nim = student.nim(),
                sks = student.sks(),
                limit = self.limit,
                "FAILED: credit limit exceeded ({} > {})",
                student.sks(),
                self.limit
            );
            return false;
        }
        info!(nim = student.nim(), "PASSED: credit limit satisfied");
        true
    }
}

/// Rejects students whose prerequisite courses are not done.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrerequisiteRule;

impl ValidationRule for PrerequisiteRule {
    fn name(&self) -> &'static str {
        "PrerequisiteRule"
    }

    fn validate(&self, student: &Student) -> bool {
        if !student.prerequisite_met() {
            warn!(nim = student.nim(), "FAILED: prerequisite courses not met");
            return false;
        }
        info!(nim = student.nim(), "PASSED: prerequisites met");
        true
    }
}

/// Rejects students with a known timetable clash.
///
/// The clash list is supplied up front; this rule does not compute
/// timetables itself.
#[derive(Debug, Clone)]
pub struct ScheduleConflictRule {
    conflicting: BTreeSet<String>,
}

impl ScheduleConflictRule {
    pub fn new<I, S>(conflicting_nims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScheduleConflictRule {
            conflicting: conflicting_nims.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_conflict(&self, nim: &str) -> bool {
        self.conflicting.contains(nim)
    }
}

impl Default for ScheduleConflictRule {
    fn default() -> Self {
        ScheduleConflictRule::new([DEFAULT_CONFLICTING_NIM])
    }
}

impl ValidationRule for ScheduleConflictRule {
    fn name(&self) -> &'static str {
        "ScheduleConflictRule"
    }

    fn validate(&self, student: &Student) -> bool {
        if self.has_conflict(student.nim()) {
            warn!(nim = student.nim(), "FAILED: schedule conflict detected");
            return false;
        }
        info!(nim = student.nim(), "PASSED: no schedule conflict");
        true
    }
}

/// The three rules used by the registration office, in evaluation order.
pub fn standard_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(SksLimitRule::default()),
        Box::new(PrerequisiteRule),
        Box::new(ScheduleConflictRule::default()),
    ]
}

// =============================================================================
// Outcome
// =============================================================================

/// Result of running the chain for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    Accepted,
    /// Stopped at the first failing rule.
    Rejected { rule: &'static str },
}

impl RegistrationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RegistrationOutcome::Accepted)
    }

    /// Name of the rule that rejected the student, if any.
    pub fn rejected_by(&self) -> Option<&'static str> {
        match self {
            RegistrationOutcome::Accepted => None,
            RegistrationOutcome::Rejected { rule } => Some(*rule),
        }
    }
}

// =============================================================================
// Registration Service
// =============================================================================

/// Runs the injected rules in order, stopping at the first failure.
pub struct RegistrationService {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RegistrationService {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        RegistrationService { rules }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluates every rule until one fails.
    ///
    /// An empty chain accepts everyone.
    pub fn evaluate(&self, student: &Student) -> RegistrationOutcome {
        info!(nim = student.nim(), rules = self.rules.len(), "Starting registration");

        for rule in &self.rules {
            if !rule.validate(student) {
                warn!(
                    nim = student.nim(),
                    rule = rule.name(),
                    "Registration rejected by {}",
                    rule.name()
                );
                return RegistrationOutcome::Rejected { rule: rule.name() };
            }
        }

        info!(nim = student.nim(), "Registration accepted");
        RegistrationOutcome::Accepted
    }

    /// `true` when every rule passes.
    pub fn register(&self, student: &Student) -> bool {
        self.evaluate(student).is_accepted()
    }
}

impl std::fmt::Debug for RegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationService")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
