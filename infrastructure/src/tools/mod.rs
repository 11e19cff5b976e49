//! Built-in marketing analysis tools
//!
//! Every tool returns deterministic synthetic data: the same arguments
//! always yield the same payload, and no external API is contacted.
//!
//! ## Tools
//!
//! - `market_data`: market_trend_analysis, competitor_analysis,
//!   consumer_sentiment_analysis
//! - `report`: generate_marketing_report
//! - `strategy`: recommend_marketing_strategy

pub mod hash;
pub mod market_data;
pub mod report;
pub mod schema;
pub mod strategy;

mod registry;

pub use market_data::{CompetitorAnalysis, ConsumerSentimentAnalysis, MarketTrendAnalysis};
pub use registry::ToolRegistry;
pub use report::MarketingReport;
pub use strategy::StrategyRecommendation;

use analyst_domain::ConfigurationError;

/// Create a registry holding all built-in tools, in listing order
pub fn default_registry() -> Result<ToolRegistry, ConfigurationError> {
    ToolRegistry::new()
        .with_tool(MarketTrendAnalysis)?
        .with_tool(CompetitorAnalysis)?
        .with_tool(ConsumerSentimentAnalysis)?
        .with_tool(MarketingReport)?
        .with_tool(StrategyRecommendation)
}
