//! Market data tools: market_trend_analysis, competitor_analysis,
//! consumer_sentiment_analysis
//!
//! All three return synthetic data. Values that vary by input are derived
//! from [`stable_hash`](super::hash::stable_hash) so the same arguments always
//! produce the same payload.

use super::hash::bucket;
use analyst_domain::{ParamType, ToolArguments, ToolDefinition, ToolError, ToolHandler, ToolParameter};
use serde_json::{Map, Value, json};
use tracing::info;

/// Tool name constants
pub const MARKET_TREND_ANALYSIS: &str = "market_trend_analysis";
pub const COMPETITOR_ANALYSIS: &str = "competitor_analysis";
pub const CONSUMER_SENTIMENT_ANALYSIS: &str = "consumer_sentiment_analysis";

const KEY_TRENDS: [&str; 4] = [
    "Increasing mobile engagement",
    "Greater emphasis on sustainability",
    "Shift toward personalized experiences",
    "Integration of AI-driven analytics",
];

const POSITIONS: [&str; 5] = ["premium", "value", "innovator", "established", "disruptor"];

const STRENGTHS: [&str; 5] = [
    "Strong brand recognition",
    "Innovative product development",
    "Efficient supply chain",
    "Customer loyalty",
    "Marketing effectiveness",
];

const WEAKNESSES: [&str; 5] = [
    "High prices",
    "Limited market reach",
    "Product quality issues",
    "Slow to innovate",
    "Poor customer service",
];

const SENTIMENT_TOPICS: [&str; 5] = [
    "product quality",
    "customer service",
    "price",
    "features",
    "user experience",
];

// ==================== market_trend_analysis ====================

pub struct MarketTrendAnalysis;

impl ToolHandler for MarketTrendAnalysis {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            MARKET_TREND_ANALYSIS,
            "Analyzes market trends for a specified market segment and time period. Use this \
             tool to understand how a market has been performing: growth rate, market size and \
             key trends.",
        )
        .with_parameter(ToolParameter::required(
            "market_segment",
            "The market segment to analyze (e.g., 'luxury fashion', 'mobile gaming')",
        ))
        .with_parameter(ToolParameter::required(
            "time_period",
            "Time period for the analysis (e.g., 'last 3 months', 'Q2 2023')",
        ))
        .with_parameter(
            ToolParameter::optional("metrics", "Metrics to analyze")
                .with_type(ParamType::StringList)
                .with_default(json!(["growth_rate", "market_size", "key_trends"])),
        )
    }

    fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError> {
        let segment = args.require_str("market_segment").map_err(ToolError::invalid_argument)?;
        let period = args.require_str("time_period").map_err(ToolError::invalid_argument)?;
        let metrics = args.get_string_list("metrics");
        info!("Running market trend analysis for {} over {}", segment, period);

        let mut values = Map::new();
        if metrics.iter().any(|m| m == "growth_rate") {
            values.insert(
                "growth_rate".into(),
                json!({"value": 12.5, "unit": "percent", "trend": "increasing"}),
            );
        }
        if metrics.iter().any(|m| m == "market_size") {
            values.insert(
                "market_size".into(),
                json!({"value": 8.7, "unit": "billion USD", "trend": "growing"}),
            );
        }
        if metrics.iter().any(|m| m == "key_trends") {
            values.insert("key_trends".into(), json!(KEY_TRENDS));
        }

        let summary = format!(
            "The {segment} market has shown a growth rate of 12.5% during {period}, with a \
             current market size of $8.7 billion. Key trends include increasing mobile \
             engagement, greater emphasis on sustainability, shift toward personalized \
             experiences, and integration of AI-driven analytics."
        );

        Ok(json!({
            "market_segment": segment,
            "time_period": period,
            "metrics": values,
            "analysis_summary": summary,
        }))
    }
}

// ==================== competitor_analysis ====================

pub struct CompetitorAnalysis;

impl CompetitorAnalysis {
    /// Market share between 5.0 and 24.9 percent, one decimal.
    fn market_share(name: &str) -> f64 {
        (50 + bucket(name, 200)) as f64 / 10.0
    }

    fn profile(name: &str, metrics: &[String]) -> Map<String, Value> {
        let wants = |metric: &str| metrics.iter().any(|m| m == metric);
        let mut profile = Map::new();

        if wants("market_share") {
            let trend = if bucket(name, 3) == 0 { "stable" } else { "increasing" };
            profile.insert(
                "market_share".into(),
                json!({"value": Self::market_share(name), "unit": "percent", "trend": trend}),
            );
        }
        if wants("positioning") {
            profile.insert(
                "positioning".into(),
                json!(POSITIONS[bucket(name, POSITIONS.len() as u64)]),
            );
        }
        if wants("strengths") {
            let picked: Vec<_> = STRENGTHS
                .iter()
                .enumerate()
                .filter(|(i, _)| bucket(&format!("{name}{i}"), 3) == 0)
                .map(|(_, s)| *s)
                .collect();
            profile.insert("strengths".into(), json!(picked));
        }
        if wants("weaknesses") {
            let picked: Vec<_> = WEAKNESSES
                .iter()
                .enumerate()
                .filter(|(i, _)| bucket(&format!("{name}{i}"), 4) == 0)
                .map(|(_, s)| *s)
                .collect();
            profile.insert("weaknesses".into(), json!(picked));
        }
        profile
    }
}

impl ToolHandler for CompetitorAnalysis {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            COMPETITOR_ANALYSIS,
            "Analyzes competitor data for specified companies. Use this tool to understand \
             competitor positioning, market share, strengths and weaknesses.",
        )
        .with_parameter(
            ToolParameter::required("competitors", "List of competitor names to analyze")
                .with_type(ParamType::StringList),
        )
        .with_parameter(
            ToolParameter::optional("metrics", "Metrics to analyze for each competitor")
                .with_type(ParamType::StringList)
                .with_default(json!(["market_share", "positioning", "strengths", "weaknesses"])),
        )
        .with_parameter(
            ToolParameter::optional("time_period", "Time period for the analysis")
                .with_default("current"),
        )
    }

    fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError> {
        let competitors = args.get_string_list("competitors");
        if competitors.is_empty() {
            return Err(ToolError::invalid_argument(
                "competitors must name at least one company",
            ));
        }
        let metrics = args.get_string_list("metrics");
        let period = args.get_str("time_period").unwrap_or("current");
        info!(
            "Running competitor analysis for {} ({})",
            competitors.join(", "),
            period
        );

        let mut profiles = Map::new();
        for name in &competitors {
            profiles.insert(name.clone(), Value::Object(Self::profile(name, &metrics)));
        }

        // Ties keep the first-listed competitor
        let leader = competitors.iter().fold(None, |best: Option<&String>, name| match best {
            Some(b) if Self::market_share(b) >= Self::market_share(name) => Some(b),
            _ => Some(name),
        });

        let summary = match leader {
            Some(name) => {
                let profile = profiles.get(name.as_str());
                let share = profile
                    .and_then(|p| p.pointer("/market_share/value"))
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let position = profile
                    .and_then(|p| p.get("positioning"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown");
                format!(
                    "Analysis for {period} shows {name} as the market leader with {share}% \
                     market share, positioned as a {position} brand. The competitive landscape \
                     consists of {} major players.",
                    competitors.len()
                )
            }
            None => String::new(),
        };

        Ok(json!({
            "competitors": profiles,
            "time_period": period,
            "analysis_summary": summary,
        }))
    }
}

// ==================== consumer_sentiment_analysis ====================

pub struct ConsumerSentimentAnalysis;

fn sentiment_label(score: i64) -> &'static str {
    if score > 70 {
        "positive"
    } else if score > 40 {
        "neutral"
    } else {
        "negative"
    }
}

impl ToolHandler for ConsumerSentimentAnalysis {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            CONSUMER_SENTIMENT_ANALYSIS,
            "Analyzes consumer sentiment for a specified product or brand based on social \
             media, reviews and surveys.",
        )
        .with_parameter(ToolParameter::required(
            "product_or_brand",
            "Product or brand to analyze consumer sentiment for",
        ))
        .with_parameter(
            ToolParameter::optional("channels", "Data channels to analyze")
                .with_type(ParamType::StringList)
                .with_default(json!(["social_media", "reviews", "surveys"])),
        )
        .with_parameter(
            ToolParameter::optional("time_period", "Time period for the analysis")
                .with_default("last 3 months"),
        )
    }

    fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError> {
        let subject = args.require_str("product_or_brand").map_err(ToolError::invalid_argument)?;
        let channels = args.get_string_list("channels");
        let period = args.get_str("time_period").unwrap_or("last 3 months");
        info!("Running sentiment analysis for {} over {}", subject, period);

        let overall = 65 + bucket(subject, 30) as i64;
        let trend = match bucket(subject, 3) {
            0 => "improving",
            1 => "stable",
            _ => "declining",
        };

        let mut per_channel = Map::new();
        for channel in &channels {
            let score = (overall + bucket(channel, 20) as i64 - 10).clamp(0, 100);
            let topics = &SENTIMENT_TOPICS[..3 + bucket(channel, 3)];
            per_channel.insert(
                channel.clone(),
                json!({
                    "sentiment_score": score,
                    "sentiment": sentiment_label(score),
                    "sample_size": 500 + bucket(channel, 1500),
                    "key_topics": topics,
                }),
            );
        }

        let label = sentiment_label(overall);
        let summary = format!(
            "Consumer sentiment for {subject} during {period} is predominantly {label} with a \
             sentiment score of {overall}/100. Sentiment is {trend} over time. Analysis covered \
             {} channels including {}.",
            channels.len(),
            channels.join(", ")
        );

        Ok(json!({
            "product_or_brand": subject,
            "time_period": period,
            "channels": per_channel,
            "overall_sentiment": {
                "sentiment_score": overall,
                "sentiment": label,
                "trend": trend,
            },
            "analysis_summary": summary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_domain::{DefaultToolValidator, ToolCall, ToolValidator};

    fn validated(handler: &dyn ToolHandler, call: ToolCall) -> ToolArguments {
        DefaultToolValidator
            .validate(&call, &handler.definition())
            .unwrap()
    }

    #[test]
    fn test_market_trend_default_metrics() {
        let args = validated(
            &MarketTrendAnalysis,
            ToolCall::new(MARKET_TREND_ANALYSIS)
                .with_arg("market_segment", "mobile gaming")
                .with_arg("time_period", "2024"),
        );
        let payload = MarketTrendAnalysis.execute(&args).unwrap();

        assert_eq!(payload["metrics"]["growth_rate"]["value"], 12.5);
        assert_eq!(payload["metrics"]["market_size"]["unit"], "billion USD");
        assert_eq!(payload["metrics"]["key_trends"].as_array().unwrap().len(), 4);
        assert!(
            payload["analysis_summary"]
                .as_str()
                .unwrap()
                .starts_with("The mobile gaming market has shown a growth rate of 12.5% during 2024")
        );
    }

    #[test]
    fn test_market_trend_selected_metrics() {
        let args = validated(
            &MarketTrendAnalysis,
            ToolCall::new(MARKET_TREND_ANALYSIS)
                .with_arg("market_segment", "retail")
                .with_arg("time_period", "Q1")
                .with_arg("metrics", "market_size"),
        );
        let payload = MarketTrendAnalysis.execute(&args).unwrap();
        let metrics = payload["metrics"].as_object().unwrap();

        assert_eq!(metrics.len(), 1);
        assert!(metrics.contains_key("market_size"));
    }

    #[test]
    fn test_competitor_analysis_deterministic() {
        let call = ToolCall::new(COMPETITOR_ANALYSIS)
            .with_arg("competitors", json!(["Acme", "Globex", "Initech"]));
        let args = validated(&CompetitorAnalysis, call);

        let first = CompetitorAnalysis.execute(&args).unwrap();
        let second = CompetitorAnalysis.execute(&args).unwrap();
        assert_eq!(first, second);

        let profiles = first["competitors"].as_object().unwrap();
        assert_eq!(profiles.len(), 3);
        for profile in profiles.values() {
            let share = profile["market_share"]["value"].as_f64().unwrap();
            assert!((5.0..25.0).contains(&share));
            assert!(POSITIONS.contains(&profile["positioning"].as_str().unwrap()));
        }
        assert_eq!(first["time_period"], "current");
        assert!(
            first["analysis_summary"]
                .as_str()
                .unwrap()
                .contains("consists of 3 major players")
        );
    }

    #[test]
    fn test_competitor_analysis_names_leader() {
        let names = ["Acme", "Globex", "Initech"];
        let mut leader = names[0];
        for &name in &names[1..] {
            if CompetitorAnalysis::market_share(name) > CompetitorAnalysis::market_share(leader) {
                leader = name;
            }
        }
        let args = validated(
            &CompetitorAnalysis,
            ToolCall::new(COMPETITOR_ANALYSIS).with_arg("competitors", json!(names)),
        );
        let payload = CompetitorAnalysis.execute(&args).unwrap();

        assert!(
            payload["analysis_summary"]
                .as_str()
                .unwrap()
                .contains(&format!("shows {leader} as the market leader"))
        );
    }

    #[test]
    fn test_competitor_analysis_rejects_empty_list() {
        let args = validated(
            &CompetitorAnalysis,
            ToolCall::new(COMPETITOR_ANALYSIS).with_arg("competitors", json!([])),
        );
        let err = CompetitorAnalysis.execute(&args).unwrap_err();
        assert_eq!(err.code, "INVALID_ARGUMENT");
    }

    #[test]
    fn test_sentiment_ranges() {
        let args = validated(
            &ConsumerSentimentAnalysis,
            ToolCall::new(CONSUMER_SENTIMENT_ANALYSIS).with_arg("product_or_brand", "Acme Phone"),
        );
        let payload = ConsumerSentimentAnalysis.execute(&args).unwrap();

        let overall = payload["overall_sentiment"]["sentiment_score"].as_i64().unwrap();
        assert!((65..95).contains(&overall));

        let channels = payload["channels"].as_object().unwrap();
        assert_eq!(channels.len(), 3);
        for channel in channels.values() {
            let score = channel["sentiment_score"].as_i64().unwrap();
            assert!((0..=100).contains(&score));
            assert_eq!(channel["sentiment"], sentiment_label(score));
            let topics = channel["key_topics"].as_array().unwrap().len();
            assert!((3..=5).contains(&topics));
        }
        assert_eq!(payload["time_period"], "last 3 months");
    }

    #[test]
    fn test_sentiment_label_boundaries() {
        assert_eq!(sentiment_label(71), "positive");
        assert_eq!(sentiment_label(70), "neutral");
        assert_eq!(sentiment_label(41), "neutral");
        assert_eq!(sentiment_label(40), "negative");
    }
}
