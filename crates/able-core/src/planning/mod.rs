//! Plan generation from free-text queries.
//!
//! Generation is a pure, total function: an ordered list of [`Rule`]s is
//! checked against the lower-cased query and the first match builds the
//! template. When nothing matches, the generic research plan is used, so
//! every query yields a plan.

pub mod catalog;
pub mod results;

use log::debug;

use crate::models::{Plan, PlanStep};

pub use results::step_result;

/// Title and description of a step before it is attached to a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTemplate {
    pub title: String,
    pub description: String,
}

impl StepTemplate {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A plan that has not been attached to a message yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTemplate {
    pub title: String,
    pub steps: Vec<StepTemplate>,
}

impl PlanTemplate {
    /// Materializes the template as an awaiting plan whose steps are numbered
    /// from 1 and start out pending.
    pub fn into_plan(self) -> Plan {
        let steps = self
            .steps
            .into_iter()
            .zip(1u64..)
            .map(|(step, id)| PlanStep::pending(id, step.title, step.description))
            .collect();
        Plan::new(self.title, steps)
    }
}

/// A keyword rule: when `matches` accepts the lower-cased query, `build`
/// produces the plan from the original query text.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub build: fn(&str) -> PlanTemplate,
}

/// Rules in priority order. The first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        name: "logistics-ai",
        matches: mentions_logistics_or_ai,
        build: catalog::logistics_market_scan,
    },
    Rule {
        name: "monday.com",
        matches: mentions_monday,
        build: catalog::monday_deep_dive,
    },
];

fn mentions_logistics_or_ai(query: &str) -> bool {
    query.contains("logistics") || query.contains("ai")
}

fn mentions_monday(query: &str) -> bool {
    query.contains("monday.com")
}

/// Builds the plan template for `query`.
///
/// # Examples
///
/// ```rust
/// use able_core::planning::generate_plan;
///
/// let template = generate_plan("Deep dive on monday.com");
/// assert_eq!(template.title, "monday.com Deep Dive Analysis");
/// assert_eq!(template.steps.len(), 4);
///
/// let fallback = generate_plan("zzz-nonsense-query");
/// assert!(fallback.steps[0].description.contains("zzz-nonsense-query"));
/// ```
pub fn generate_plan(query: &str) -> PlanTemplate {
    let lowered = query.to_lowercase();
    match RULES.iter().find(|rule| (rule.matches)(&lowered)) {
        Some(rule) => {
            debug!("Query matched plan rule '{}'", rule.name);
            (rule.build)(query)
        }
        None => {
            debug!("No plan rule matched, using generic research plan");
            catalog::generic_research(query)
        }
    }
}
