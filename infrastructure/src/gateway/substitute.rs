//! Substitute model gateway
//!
//! Answers from a fixed keyword table without contacting any model and
//! without requesting tools. Matching is case-insensitive on the query and
//! the first matching row wins.

use analyst_application::{GatewayError, ModelGateway};
use analyst_domain::{Decision, Prompt};
use async_trait::async_trait;
use tracing::info;

const MOBILE_GAMING_TRENDS: &str = "\
Based on the market trend analysis tool, here are the key trends in the mobile gaming market:

1. Increasing mobile engagement - More users are spending longer sessions on mobile games, with average session times increasing by 15% year over year.

2. Greater emphasis on sustainability - Game developers are focusing on sustainable monetization models that prioritize player retention over short-term revenue.

3. Shift toward personalized experiences - Games are increasingly using player data to create customized gameplay experiences and recommendations.

4. Integration of AI-driven analytics - Developers are leveraging AI tools to understand player behavior and optimize game mechanics.

The mobile gaming market has shown a growth rate of 12.5% over the past year, with a current market size of $8.7 billion. This growth is expected to continue as mobile devices become more powerful and 5G adoption increases.
";

const COMPETITOR: &str = "I would analyze this using the competitor analysis tool to provide \
insights on market positioning, strengths, and weaknesses.";

const SENTIMENT: &str = "I would use the consumer sentiment analysis tool to evaluate how users \
feel about this product across different channels.";

const REPORT: &str = "I would generate a comprehensive report using the report generation tool \
with the sections you requested.";

const STRATEGY: &str = "I would develop strategic recommendations using the strategy \
recommendation tool based on your business objectives.";

const FALLBACK: &str = "I'd need to analyze this request further. Could you provide more details \
about what specific marketing insights you're looking for?";

/// Keyword rows in priority order
const RESPONSES: &[(&[&str], &str)] = &[
    (&["mobile gaming"], MOBILE_GAMING_TRENDS),
    (&["competitor"], COMPETITOR),
    (&["sentiment"], SENTIMENT),
    (&["report"], REPORT),
    (&["strategy", "recommend"], STRATEGY),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SubstituteModelGateway;

impl SubstituteModelGateway {
    pub fn new() -> Self {
        Self
    }

    /// Canned answer for a query
    pub fn respond(query: &str) -> &'static str {
        let lower = query.to_lowercase();
        RESPONSES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, text)| *text)
            .unwrap_or(FALLBACK)
    }
}

#[async_trait]
impl ModelGateway for SubstituteModelGateway {
    fn name(&self) -> &str {
        "substitute"
    }

    async fn decide(&self, prompt: &Prompt) -> Result<Decision, GatewayError> {
        info!(
            "Substitute mode: answering without a model for: {}",
            analyst_domain::preview(&prompt.query, 100)
        );
        Ok(Decision::direct(Self::respond(&prompt.query)))
    }
}
