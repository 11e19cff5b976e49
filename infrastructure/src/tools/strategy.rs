//! Strategy tool: recommend_marketing_strategy
//!
//! Picks strategies from a per-objective template table, filtered by time
//! horizon and market segment, then derives an implementation plan,
//! expected outcomes, a risk assessment and (when a budget is given) a
//! budget allocation.

use analyst_domain::{ParamType, ToolArguments, ToolDefinition, ToolError, ToolHandler, ToolParameter};
use serde_json::{Map, Value, json};
use tracing::info;

/// Tool name constant
pub const RECOMMEND_MARKETING_STRATEGY: &str = "recommend_marketing_strategy";

const DEFAULT_OBJECTIVE: &str = "increase_market_share";

/// Segments specific enough that a template must list them to apply
const DISCRIMINATING_SEGMENTS: [&str; 4] = ["b2b", "b2c", "retail", "tech"];

const MAX_RISKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeHorizon {
    fn parse(value: &str) -> Result<Self, ToolError> {
        match normalize(value).as_str() {
            "short_term" | "short" => Ok(Self::ShortTerm),
            "medium_term" | "medium" => Ok(Self::MediumTerm),
            "long_term" | "long" => Ok(Self::LongTerm),
            other => Err(ToolError::invalid_argument(format!(
                "Unknown time_horizon '{}': expected short_term, medium_term or long_term",
                other
            ))),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::MediumTerm => "medium_term",
            Self::LongTerm => "long_term",
        }
    }

    /// Timeline unit and total duration of the implementation plan
    fn plan_span(&self) -> (&'static str, usize) {
        match self {
            Self::ShortTerm => ("weeks", 12),
            Self::MediumTerm => ("months", 12),
            Self::LongTerm => ("quarters", 8),
        }
    }
}

use TimeHorizon::{LongTerm, MediumTerm, ShortTerm};

struct StrategyTemplate {
    name: &'static str,
    description: &'static str,
    tactics: &'static [&'static str],
    suitable_for: &'static [&'static str],
    horizons: &'static [TimeHorizon],
}

struct ObjectiveProfile {
    objective: &'static str,
    strategies: &'static [StrategyTemplate],
    primary_metrics: [&'static str; 3],
    secondary_metrics: [&'static str; 3],
    /// Impact range for low, medium, high
    impact: [&'static str; 3],
    timeline: &'static str,
}

const OBJECTIVES: &[ObjectiveProfile] = &[
    ObjectiveProfile {
        objective: "increase_market_share",
        strategies: &[
            StrategyTemplate {
                name: "Competitive Pricing Strategy",
                description: "Implement competitive pricing to attract customers from competitors.",
                tactics: &[
                    "Conduct comprehensive pricing analysis",
                    "Identify price elasticity in target segments",
                    "Develop tiered pricing options",
                    "Implement strategic discounting for new customers",
                ],
                suitable_for: &["price_sensitive", "b2c", "retail", "e_commerce"],
                horizons: &[ShortTerm, MediumTerm],
            },
            StrategyTemplate {
                name: "Product Differentiation",
                description: "Enhance product features to stand out from competitors.",
                tactics: &[
                    "Conduct feature gap analysis against competitors",
                    "Prioritize development of unique selling points",
                    "Develop compelling messaging around differentiators",
                ],
                suitable_for: &["premium", "b2b", "tech", "saas"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Market Expansion",
                description: "Enter new geographic or demographic markets.",
                tactics: &[
                    "Identify high-potential market segments",
                    "Develop market entry strategy",
                    "Build channel partnerships in new regions",
                ],
                suitable_for: &["established", "b2b", "b2c", "global"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Digital Channel Optimization",
                description: "Enhance digital marketing to increase reach and acquisition.",
                tactics: &[
                    "Audit current digital channel performance",
                    "Reallocate budget to high-performing channels",
                    "Implement advanced targeting capabilities",
                    "Develop content strategy for organic growth",
                ],
                suitable_for: &["digital_native", "e_commerce", "b2c", "d2c"],
                horizons: &[ShortTerm, MediumTerm],
            },
        ],
        primary_metrics: [
            "Market share percentage",
            "New customer acquisition",
            "Competitive win rate",
        ],
        secondary_metrics: ["Share of voice", "Brand consideration", "Product adoption rate"],
        impact: ["5-8%", "8-15%", "15-25%"],
        timeline: "3-6 months for initial results, 6-12 months for full impact",
    },
    ObjectiveProfile {
        objective: "improve_customer_retention",
        strategies: &[
            StrategyTemplate {
                name: "Customer Loyalty Program",
                description: "Implement or enhance loyalty program to increase retention.",
                tactics: &[
                    "Design tiered reward structure",
                    "Implement personalized loyalty benefits",
                    "Create community elements for customer engagement",
                ],
                suitable_for: &["retail", "b2c", "subscription", "service"],
                horizons: &[ShortTerm, MediumTerm],
            },
            StrategyTemplate {
                name: "Customer Experience Enhancement",
                description: "Improve customer experience across touchpoints.",
                tactics: &[
                    "Map customer journey and identify friction points",
                    "Implement customer feedback loops",
                    "Enhance customer support capabilities",
                ],
                suitable_for: &["b2b", "b2c", "service", "subscription"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Value-Added Services",
                description: "Develop complementary services to increase customer value.",
                tactics: &[
                    "Identify high-value service opportunities",
                    "Develop bundling strategies",
                    "Implement success management for key accounts",
                ],
                suitable_for: &["b2b", "saas", "premium", "service"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Personalization Strategy",
                description: "Implement data-driven personalization across customer interactions.",
                tactics: &[
                    "Enhance customer data collection and integration",
                    "Implement behavioral triggers for engagement",
                    "Create personalized product recommendations",
                ],
                suitable_for: &["e_commerce", "b2c", "retail", "subscription"],
                horizons: &[ShortTerm, MediumTerm],
            },
        ],
        primary_metrics: [
            "Customer retention rate",
            "Churn rate",
            "Customer lifetime value",
        ],
        secondary_metrics: [
            "Net promoter score",
            "Repeat purchase rate",
            "Account expansion rate",
        ],
        impact: ["10-15%", "15-25%", "25-40%"],
        timeline: "1-3 months for initial results, 6-9 months for full impact",
    },
    ObjectiveProfile {
        objective: "launch_new_product",
        strategies: &[
            StrategyTemplate {
                name: "Market Penetration Strategy",
                description: "Aggressive entry to quickly gain market share.",
                tactics: &[
                    "Competitive pricing strategy",
                    "High-visibility promotional campaign",
                    "Early adopter incentive program",
                ],
                suitable_for: &["b2c", "tech", "startup", "consumer_goods"],
                horizons: &[ShortTerm],
            },
            StrategyTemplate {
                name: "Thought Leadership Campaign",
                description: "Establish category leadership through expertise.",
                tactics: &[
                    "Develop educational content series",
                    "Publish original research and white papers",
                    "Build relationships with industry influencers",
                ],
                suitable_for: &["b2b", "saas", "professional_services", "tech"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Phased Rollout Strategy",
                description: "Controlled launch across segments to optimize product.",
                tactics: &[
                    "Identify beta testing customer segments",
                    "Create rapid iteration processes",
                    "Plan phase-based expansion roadmap",
                ],
                suitable_for: &["b2b", "tech", "saas", "complex_products"],
                horizons: &[MediumTerm],
            },
            StrategyTemplate {
                name: "Integrated Launch Campaign",
                description: "Coordinated multi-channel campaign for maximum impact.",
                tactics: &[
                    "Develop unified messaging strategy",
                    "Plan sequential reveal strategy",
                    "Implement measurement framework for optimization",
                ],
                suitable_for: &["b2c", "consumer_goods", "retail", "e_commerce"],
                horizons: &[ShortTerm, MediumTerm],
            },
        ],
        primary_metrics: [
            "Product adoption rate",
            "Revenue from new product",
            "Market penetration",
        ],
        secondary_metrics: ["Product awareness", "Feature usage", "Cross-sell rate"],
        impact: ["2-5%", "5-10%", "10-20%"],
        timeline: "1-2 months for initial traction, 3-6 months for significant adoption",
    },
    ObjectiveProfile {
        objective: "increase_brand_awareness",
        strategies: &[
            StrategyTemplate {
                name: "Content Marketing Strategy",
                description: "Build awareness through valuable content.",
                tactics: &[
                    "Develop content pillars aligned with audience interests",
                    "Implement SEO optimization for discoverability",
                    "Establish content distribution partnerships",
                ],
                suitable_for: &["b2b", "b2c", "service", "thought_leadership"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Influencer Partnership Program",
                description: "Leverage influencers to expand brand reach.",
                tactics: &[
                    "Identify relevant influencers across tiers",
                    "Create co-branded content opportunities",
                    "Implement performance-based compensation models",
                ],
                suitable_for: &["b2c", "consumer_goods", "lifestyle", "e_commerce"],
                horizons: &[ShortTerm, MediumTerm],
            },
            StrategyTemplate {
                name: "Community Building Initiative",
                description: "Create engaged community around brand values.",
                tactics: &[
                    "Develop community platform strategy",
                    "Implement user-generated content program",
                    "Establish ambassador program for advocates",
                ],
                suitable_for: &["b2c", "lifestyle", "value_driven", "subscription"],
                horizons: &[MediumTerm, LongTerm],
            },
            StrategyTemplate {
                name: "Strategic PR Campaign",
                description: "Generate earned media coverage for brand.",
                tactics: &[
                    "Develop newsworthy storylines",
                    "Build relationships with key media outlets",
                    "Plan staged announcement strategy",
                ],
                suitable_for: &["b2b", "b2c", "launch", "corporate"],
                horizons: &[ShortTerm, MediumTerm],
            },
        ],
        primary_metrics: ["Brand awareness", "Share of voice", "Brand search volume"],
        secondary_metrics: [
            "Social media engagement",
            "Press mentions",
            "Website traffic",
        ],
        impact: ["20-30%", "30-50%", "50-100%"],
        timeline: "2-3 months for initial lift, 6-12 months for significant awareness increase",
    },
];

/// Known risks per strategy; strategies not listed contribute none.
const STRATEGY_RISKS: &[(&str, [&str; 3])] = &[
    (
        "Competitive Pricing Strategy",
        ["Potential margin erosion", "Competitive retaliation", "Price war escalation"],
    ),
    (
        "Product Differentiation",
        [
            "Feature development delays",
            "Insufficient differentiation",
            "High development costs",
        ],
    ),
    (
        "Market Expansion",
        [
            "Cultural/regional adaptation challenges",
            "Regulatory compliance issues",
            "Resource dispersion",
        ],
    ),
    (
        "Digital Channel Optimization",
        [
            "Rising acquisition costs",
            "Algorithm changes affecting performance",
            "Technical implementation challenges",
        ],
    ),
    (
        "Customer Loyalty Program",
        ["Low adoption rates", "Reward cost management", "Program complexity"],
    ),
    (
        "Market Penetration Strategy",
        [
            "Higher than expected acquisition costs",
            "Slower than projected adoption",
            "Supply chain constraints",
        ],
    ),
    (
        "Content Marketing Strategy",
        [
            "Content production resource constraints",
            "Difficulty measuring direct ROI",
            "Audience building timeline",
        ],
    ),
];

/// First matching keyword set wins
const MITIGATIONS: &[(&[&str], &str)] = &[
    (
        &["pricing", "margin"],
        "Implement value-based pricing strategy with tiered options to protect margins",
    ),
    (
        &["competitive", "retaliation"],
        "Develop scenario planning for competitive responses; prepare contingency plans",
    ),
    (
        &["delay", "timeline"],
        "Implement agile methodology with regular milestones and flexible resource allocation",
    ),
    (
        &["cost", "budget"],
        "Establish clear budget thresholds with stage-gate approach; prioritize initiatives by ROI",
    ),
    (
        &["adoption", "engagement"],
        "Develop staged rollout with feedback loops; create targeted incentives for early adoption",
    ),
    (
        &["measuring", "measurement", "roi"],
        "Implement comprehensive attribution model; establish proxy metrics for long-term initiatives",
    ),
    (
        &["resource"],
        "Create flexible resourcing plan with external partner options; prioritize initiatives",
    ),
];

const DEFAULT_MITIGATION: &str =
    "Establish monitoring system with early warning indicators; create contingency plans";

const BUDGET_CATEGORIES: [&str; 5] = [
    "Media & Advertising",
    "Content Production",
    "Technology & Tools",
    "Research & Analysis",
    "Personnel & Resources",
];

fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace(' ', "_")
}

fn profile_for(objective: &str) -> &'static ObjectiveProfile {
    OBJECTIVES
        .iter()
        .find(|p| p.objective == objective)
        .or_else(|| OBJECTIVES.iter().find(|p| p.objective == DEFAULT_OBJECTIVE))
        .unwrap_or(&OBJECTIVES[0])
}

fn select_strategies(
    profile: &'static ObjectiveProfile,
    segment: &str,
    horizon: TimeHorizon,
) -> Vec<&'static StrategyTemplate> {
    let discriminating = DISCRIMINATING_SEGMENTS.iter().any(|s| segment.contains(s));
    let selected: Vec<_> = profile
        .strategies
        .iter()
        .filter(|t| t.horizons.contains(&horizon))
        .filter(|t| !discriminating || t.suitable_for.iter().any(|s| segment.contains(s)))
        .collect();

    if selected.is_empty() {
        profile.strategies.iter().take(2).collect()
    } else {
        selected
    }
}

fn implementation_plan(strategies: &[&StrategyTemplate], horizon: TimeHorizon) -> Value {
    let (unit, total) = horizon.plan_span();
    let phase_len = if strategies.is_empty() {
        total
    } else {
        (total / strategies.len() + 1).max(2)
    };

    let phases: Vec<Value> = strategies
        .iter()
        .enumerate()
        .map(|(i, strategy)| {
            // Phases overlap by one unit
            let start = (i * phase_len).saturating_sub(1);
            let end = (start + phase_len).min(total);
            let steps = strategy.tactics.len() + 1;
            let milestones: Vec<Value> = strategy
                .tactics
                .iter()
                .enumerate()
                .map(|(j, tactic)| {
                    let dependencies: Vec<String> = if j == 0 {
                        Vec::new()
                    } else {
                        vec![format!("Milestone {}", j)]
                    };
                    json!({
                        "milestone": format!("Complete {}", tactic),
                        "timeline": start + j * end.saturating_sub(start) / steps,
                        "dependencies": dependencies,
                    })
                })
                .collect();
            json!({
                "phase": format!("Phase {}: {}", i + 1, strategy.name),
                "start": start,
                "end": end,
                "key_milestones": milestones,
            })
        })
        .collect();

    json!({
        "timeline_unit": unit,
        "total_duration": total,
        "phases": phases,
    })
}

fn expected_outcomes(profile: &ObjectiveProfile, strategy_count: usize) -> Value {
    let (level, range) = match strategy_count {
        0 | 1 => ("low", profile.impact[0]),
        2 => ("medium", profile.impact[1]),
        _ => ("high", profile.impact[2]),
    };
    let floor = range.split('-').next().unwrap_or(range);

    json!({
        "primary_metrics": profile.primary_metrics,
        "secondary_metrics": profile.secondary_metrics,
        "estimated_impact": {
            "overall_impact": format!(
                "Expected {} impact with {} improvement in primary metrics",
                level, range
            ),
            "timeline_to_results": profile.timeline,
            "key_performance_indicators": &profile.primary_metrics[..2],
            "success_criteria": format!(
                "Achieve minimum {}% improvement in primary metrics",
                floor
            ),
        },
    })
}

fn risk_assessment(strategies: &[&StrategyTemplate], challenges: &[String]) -> Value {
    let mut risks: Vec<String> = Vec::new();
    let strategy_risks = strategies.iter().flat_map(|s| {
        STRATEGY_RISKS
            .iter()
            .filter(move |(name, _)| *name == s.name)
            .flat_map(|(_, r)| r.iter().map(|r| r.to_string()))
    });
    let challenge_risks = challenges
        .iter()
        .map(|c| format!("Existing challenge: {}", c));

    for risk in strategy_risks.chain(challenge_risks) {
        if !risks.contains(&risk) {
            risks.push(risk);
        }
    }
    risks.truncate(MAX_RISKS);

    let mitigations: Map<String, Value> = risks
        .iter()
        .map(|risk| {
            let lower = risk.to_lowercase();
            let mitigation = MITIGATIONS
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
                .map(|(_, m)| *m)
                .unwrap_or(DEFAULT_MITIGATION);
            (risk.clone(), json!(mitigation))
        })
        .collect();

    json!({
        "key_risks": risks,
        "mitigation_strategies": mitigations,
    })
}

/// Category weights per strategy, in `BUDGET_CATEGORIES` order
fn category_weights(strategy_name: &str) -> [u32; 5] {
    if strategy_name.contains("Digital") || strategy_name.contains("Campaign") {
        [40, 25, 15, 10, 10]
    } else if strategy_name.contains("Content") {
        [20, 45, 10, 10, 15]
    } else if strategy_name.contains("Product") {
        [15, 20, 25, 20, 20]
    } else if strategy_name.contains("Loyalty") || strategy_name.contains("Experience") {
        [10, 15, 35, 15, 25]
    } else {
        [25, 20, 20, 15, 20]
    }
}

fn budget_allocation(strategies: &[&StrategyTemplate], budget: &str) -> Value {
    // Earlier strategies weigh more: 1.0, 0.85, 0.70, ... floored at 0.3
    let weights: Vec<f64> = (0..strategies.len())
        .map(|i| (1.0 - i as f64 * 0.15).max(0.3))
        .collect();
    let total_weight: f64 = weights.iter().sum();

    let by_strategy: Map<String, Value> = strategies
        .iter()
        .zip(&weights)
        .map(|(s, w)| {
            let pct = (w / total_weight * 100.0).round() as u32;
            (s.name.to_string(), json!(format!("{}%", pct)))
        })
        .collect();

    let mut totals = [0u32; 5];
    for strategy in strategies {
        for (total, weight) in totals.iter_mut().zip(category_weights(strategy.name)) {
            *total += weight;
        }
    }
    let grand_total: u32 = totals.iter().sum();
    let by_category: Map<String, Value> = if grand_total == 0 {
        Map::new()
    } else {
        BUDGET_CATEGORIES
            .iter()
            .zip(totals)
            .map(|(category, amount)| {
                let pct = (f64::from(amount) / f64::from(grand_total) * 100.0).round() as u32;
                (category.to_string(), json!(format!("{}%", pct)))
            })
            .collect()
    };

    json!({
        "budget_level": budget,
        "allocation_by_strategy": by_strategy,
        "allocation_by_category": by_category,
    })
}

pub struct StrategyRecommendation;

impl ToolHandler for StrategyRecommendation {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            RECOMMEND_MARKETING_STRATEGY,
            "Generates strategic marketing recommendations for a business objective and market \
             segment, with an implementation plan, expected outcomes and risk assessment.",
        )
        .with_parameter(ToolParameter::required(
            "business_objective",
            "The primary business objective (e.g., 'increase_market_share', \
             'improve_customer_retention', 'launch_new_product')",
        ))
        .with_parameter(ToolParameter::required(
            "market_segment",
            "The target market segment for the recommendations",
        ))
        .with_parameter(
            ToolParameter::optional(
                "time_horizon",
                "'short_term' (1-3 months), 'medium_term' (3-12 months), 'long_term' (1+ years)",
            )
            .with_default("short_term"),
        )
        .with_parameter(ToolParameter::optional(
            "available_budget",
            "Budget constraints (e.g., 'low', 'medium', 'high', or a specific amount)",
        ))
        .with_parameter(
            ToolParameter::optional(
                "current_challenges",
                "Current challenges or obstacles facing the business",
            )
            .with_type(ParamType::StringList),
        )
    }

    fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError> {
        let objective = normalize(
            args.require_str("business_objective")
                .map_err(ToolError::invalid_argument)?,
        );
        let segment = normalize(
            args.require_str("market_segment")
                .map_err(ToolError::invalid_argument)?,
        );
        let horizon = TimeHorizon::parse(args.get_str("time_horizon").unwrap_or("short_term"))?;
        let budget = args.get_str("available_budget").filter(|b| !b.trim().is_empty());
        let challenges = args.get_string_list("current_challenges");
        info!(
            "Generating strategy recommendations for {} in {} segment",
            objective, segment
        );

        let profile = profile_for(&objective);
        let strategies = select_strategies(profile, &segment, horizon);

        let recommended: Vec<Value> = strategies
            .iter()
            .map(|s| {
                json!({
                    "strategy": s.name,
                    "description": s.description,
                    "tactics": s.tactics,
                })
            })
            .collect();
        let names: Vec<&str> = strategies.iter().map(|s| s.name).collect();

        let mut result = json!({
            "business_objective": objective,
            "market_segment": segment,
            "time_horizon": horizon.as_str(),
            "available_budget": budget,
            "recommended_strategies": recommended,
            "implementation_plan": implementation_plan(&strategies, horizon),
            "expected_outcomes": expected_outcomes(profile, strategies.len()),
            "risk_assessment": risk_assessment(&strategies, &challenges),
            "analysis_summary": format!(
                "Recommended {} strategies to {} in the {} segment over the {} horizon: {}.",
                strategies.len(),
                objective.replace('_', " "),
                segment.replace('_', " "),
                horizon.as_str().replace('_', " "),
                names.join(", ")
            ),
        });

        if let Some(budget) = budget
            && let Some(map) = result.as_object_mut()
        {
            map.insert(
                "budget_allocation".to_string(),
                budget_allocation(&strategies, budget),
            );
        }

        Ok(result)
    }
}
