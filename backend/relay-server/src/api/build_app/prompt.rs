/// Heading placed between the task and the plan
pub const DEVELOPMENT_PLAN_HEADING: &str = "Development Plan:";

/// Compose the single prompt sent to the generation API
pub fn compose_prompt(task: &str, plan: &str) -> String {
    format!("{task}\n\n{DEVELOPMENT_PLAN_HEADING}\n{plan}")
}
