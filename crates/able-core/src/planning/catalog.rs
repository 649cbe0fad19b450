//! Canned plan templates.

use super::{PlanTemplate, StepTemplate};

pub fn logistics_market_scan(_query: &str) -> PlanTemplate {
    PlanTemplate {
        title: "AI in Logistics Market Scan".to_string(),
        steps: vec![
            StepTemplate::new(
                "Identify key market segments",
                "Analyze the logistics AI market by segments: last-mile delivery, warehouse automation, route optimization, and supply chain visibility.",
            ),
            StepTemplate::new(
                "Compile top players by funding",
                "List companies with $50M+ in total funding, including recent funding rounds and valuations.",
            ),
            StepTemplate::new(
                "Map competitive landscape",
                "Create a heatmap showing market positioning, technology focus, and geographic coverage.",
            ),
            StepTemplate::new(
                "Analyze investment trends",
                "Review VC activity, M&A deals, and strategic partnerships in the past 24 months.",
            ),
            StepTemplate::new(
                "Generate summary report",
                "Compile findings into an executive summary with key insights and recommendations.",
            ),
        ],
    }
}

pub fn monday_deep_dive(_query: &str) -> PlanTemplate {
    PlanTemplate {
        title: "monday.com Deep Dive Analysis".to_string(),
        steps: vec![
            StepTemplate::new(
                "Company overview & financials",
                "Analyze revenue growth, margins, ARR, and key financial metrics from recent earnings.",
            ),
            StepTemplate::new(
                "Product & technology assessment",
                "Review product roadmap, platform capabilities, and technical differentiators.",
            ),
            StepTemplate::new(
                "Competitive positioning",
                "Map against Asana, Notion, ClickUp, and other work management platforms.",
            ),
            StepTemplate::new(
                "Customer & market analysis",
                "Segment customer base by industry, size, and use case. Identify expansion opportunities.",
            ),
        ],
    }
}

/// Generic four-step plan; the query is quoted into the first step.
pub fn generic_research(query: &str) -> PlanTemplate {
    PlanTemplate {
        title: "Research Plan".to_string(),
        steps: vec![
            StepTemplate::new(
                "Define research scope",
                format!("Clarify objectives and key questions for \"{query}\"."),
            ),
            StepTemplate::new(
                "Gather primary data",
                "Search databases, news sources, and proprietary datasets for relevant information.",
            ),
            StepTemplate::new(
                "Analyze findings",
                "Synthesize data into actionable insights and identify patterns.",
            ),
            StepTemplate::new(
                "Generate deliverables",
                "Create summary report, charts, or other requested artifacts.",
            ),
        ],
    }
}
