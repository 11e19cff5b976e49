//! System prompt for the marketing analyst agent

use crate::tool::entities::ToolDefinition;

const ROLE: &str = "You are an expert marketing analyst AI assistant. Your job is to analyze \
marketing data, identify trends, evaluate campaign performance, and provide strategic \
recommendations based on data-driven insights.";

const PRINCIPLES: &str = "When analyzing marketing information, follow these principles:
1. Always ground your analysis in data when available
2. Consider multiple angles and perspectives
3. Identify relevant market context and industry trends
4. Highlight both short-term tactics and long-term strategic implications
5. Provide actionable recommendations
6. Explain your reasoning clearly";

/// Templates for the analyst agent prompts
pub struct AnalystPromptTemplate;

impl AnalystPromptTemplate {
    /// System prompt listing the available tools in registration order
    pub fn system(tools: &[ToolDefinition]) -> String {
        if tools.is_empty() {
            return format!("{ROLE}\n\n{PRINCIPLES}");
        }

        let tool_descriptions = tools
            .iter()
            .map(|t| {
                let params = t
                    .parameters
                    .iter()
                    .map(|p| {
                        let required = if p.required { " (required)" } else { "" };
                        format!(
                            "    - {} ({}): {}{}",
                            p.name, p.param_type, p.description, required
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("- **{}**: {}\n  Parameters:\n{}", t.name, t.description, params)
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "{ROLE}\n\n{PRINCIPLES}\n\nYou have access to various tools to help with your analysis. \
Use them when they can provide relevant information for the user's query.\n\n\
## Available Tools\n\n{tool_descriptions}"
        )
    }

    /// Clarification returned for empty queries
    pub fn clarification() -> &'static str {
        "Please enter a marketing question or request, for example \
\"Analyze mobile gaming market trends\"."
    }

    /// Lead-in for the answer assembled when the round limit is reached
    pub fn partial_results_lead_in() -> &'static str {
        "The analysis reached its step limit before a final answer was produced. \
Here is what was gathered so far:"
    }
}
