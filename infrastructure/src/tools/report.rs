//! Report tool: generate_marketing_report
//!
//! Assembles a report from canned section texts keyed by report type and
//! renders it as markdown or JSON.

use analyst_domain::{ParamType, ToolArguments, ToolDefinition, ToolError, ToolHandler, ToolParameter};
use chrono::Utc;
use serde_json::{Map, Value, json};
use tracing::info;

/// Tool name constant
pub const GENERATE_MARKETING_REPORT: &str = "generate_marketing_report";

/// Sections in the order they appear in a rendered report
const SECTION_ORDER: [&str; 5] = [
    "executive_summary",
    "data_analysis",
    "recommendations",
    "competitive_landscape",
    "future_outlook",
];

const DEFAULT_DATA_SOURCES: [&str; 3] = ["internal_analytics", "market_research", "competitor_data"];

const COMPETITIVE_LANDSCAPE: &str = "## Competitive Landscape

### Major Competitors
* **Alpha Inc.** - Market leader with 28% market share, known for premium positioning and innovation
* **BetaCorp** - Strong brand recognition, focused on mid-market with comprehensive product suite
* **GammaTech** - Solution-focused approach with strong enterprise relationships
* **Novex** - Fastest growing competitor with aggressive pricing and rapid development cycles
* **DeltaSoft** - Established player with loyal customer base but losing share

### Competitive Dynamics
The top three players now control 62% of market share. Price pressure from emerging players \
like Novex is pushing established companies toward value-added services and differentiation.";

/// Output rendering for the `formatted_report` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    fn parse(value: &str) -> Result<Self, ToolError> {
        match value.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ToolError::invalid_argument(format!(
                "Unsupported report format '{}': expected markdown or json",
                other
            ))),
        }
    }
}

fn executive_summary(report_type: &str, period: &str) -> String {
    match report_type {
        "market_overview" => format!(
            "## Executive Summary\n\nDuring {period}, overall market growth reached 12.5%, \
             surpassing industry forecasts by 3.2 percentage points. Mobile engagement showed the \
             strongest gains at 27% year-over-year growth.\n\nKey strategic implications include \
             enhanced mobile experiences, sustainability messaging, and personalized customer \
             journeys."
        ),
        "campaign_performance" => format!(
            "## Executive Summary\n\nCampaign performance for {period} shows digital channels \
             outperforming traditional media by an average of 32%. The Q3 Product Launch \
             generated 2.3x expected engagement and a 17% lift in qualified leads."
        ),
        "competitor_analysis" => format!(
            "## Executive Summary\n\nCompetitive analysis for {period} shows slight market \
             consolidation: the top three competitors now control 62% of market share (up from \
             57%). Emerging competitor Novex has the highest growth rate (28%)."
        ),
        _ => format!(
            "## Executive Summary\n\nThis report provides an analysis of {report_type} for {period}."
        ),
    }
}

fn data_analysis(report_type: &str, period: &str) -> String {
    match report_type {
        "market_overview" => format!(
            "## Data Analysis\n\n### Market Size and Growth\nThe total addressable market reached \
             $8.7 billion in {period}, year-over-year growth of 12.5%, driven by:\n\n\
             1. Increased consumer spending in premium segments (+18%)\n\
             2. Expansion of digital service offerings (+23%)\n\
             3. New geographic market penetration, particularly in APAC (+31%)\n\n\
             ### Channel Performance\n\
             | Channel | Traffic Share | Conversion Rate |\n\
             |---------|--------------|-----------------|\n\
             | Organic Search | 42% | 3.2% |\n\
             | Paid Search | 18% | 4.1% |\n\
             | Social Media | 22% | 2.8% |\n\
             | Email | 12% | 5.7% |"
        ),
        "campaign_performance" => format!(
            "## Data Analysis\n\nDuring {period}, 8 major campaigns ran across 12 channels with \
             total spend of $2.4M and attributed revenue of $14.8M, a blended ROI of 6.2x.\n\n\
             1. **Q3 Product Launch** - spend $450K, revenue $3.9M, ROI 8.7x\n\
             2. **Summer Promotion Series** - spend $320K, revenue $2.1M, ROI 6.6x"
        ),
        "competitor_analysis" => format!(
            "## Data Analysis\n\n### Market Share ({period})\n\
             | Competitor | Market Share | YoY Change |\n\
             |------------|--------------|------------|\n\
             | Alpha Inc. | 28% | +2.5% |\n\
             | BetaCorp | 22% | -0.8% |\n\
             | GammaTech | 12% | +0.3% |\n\
             | Novex | 9% | +2.8% |\n\
             | DeltaSoft | 8% | -1.2% |"
        ),
        _ => format!("## Data Analysis\n\nDetailed analysis of {report_type} metrics for {period}."),
    }
}

fn recommendations(report_type: &str) -> String {
    let body = match report_type {
        "market_overview" => {
            "### Short-term Actions (Next Quarter)\n\
             1. **Enhance Mobile Experience**\n\
             2. **Sustainability Initiative Launch**\n\n\
             ### Mid-term Initiatives (6-12 Months)\n\
             1. **Personalization Enhancement**\n\
             2. **Channel Optimization** - reallocate 15-20% of traditional media budget to digital"
        }
        "campaign_performance" => {
            "1. **B2B Segment Targeting Refinement**\n\
             2. **Creative Refresh for Awareness Campaigns**\n\
             3. **Q4 Campaign Focus** - allocate 40% of budget to high-performing digital channels"
        }
        "competitor_analysis" => {
            "1. **Differentiation Strategy** - emphasize unique value against Alpha Inc.\n\
             2. **Defensive Tactics** - retention programs for segments under competitive pressure\n\
             3. **Market Expansion** - target GammaTech's enterprise customers"
        }
        _ => "Strategic recommendations based on the analysis.",
    };
    format!("## Strategic Recommendations\n\n{body}")
}

fn future_outlook(report_type: &str) -> String {
    let body = match report_type {
        "market_overview" => {
            "* Overall market growth expected to reach 14-16% annually\n\
             * Mobile predicted to exceed 85% of digital interactions\n\
             * Continued shift toward subscription and service-based models"
        }
        "campaign_performance" => {
            "* Q4 Holiday Season (expected ROI 7.5-8.2x)\n\
             * New Year Product Launch (expected ROI 6.0-7.0x)\n\
             * Loyalty Program Relaunch (expected ROI 9.0-11.0x)"
        }
        "competitor_analysis" => {
            "* Alpha Inc.: 29-30% share (+1-2%)\n\
             * Novex: 12-14% share (+3-5%)\n\
             * DeltaSoft: 6-7% share (-1-2%)"
        }
        _ => "Projections and forecast for upcoming periods.",
    };
    format!("## Future Outlook\n\n{body}")
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub struct MarketingReport;

impl MarketingReport {
    fn render_markdown(
        report_type: &str,
        period: &str,
        date: &str,
        sections: &[(&str, String)],
        sources: &[String],
    ) -> String {
        let mut md = format!(
            "# {} Report\n## {}\nGenerated on: {}\n\n",
            title_case(report_type),
            period,
            date
        );
        for (_, text) in sections {
            md.push_str(text);
            md.push_str("\n\n");
        }
        md.push_str("## Data Sources\n");
        for source in sources {
            md.push_str(&format!("* {}\n", title_case(source)));
        }
        md
    }
}

impl ToolHandler for MarketingReport {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            GENERATE_MARKETING_REPORT,
            "Generates a structured marketing report (executive summary, data analysis, \
             recommendations, competitive landscape, future outlook) for a report type such as \
             market_overview, campaign_performance or competitor_analysis.",
        )
        .with_parameter(ToolParameter::required(
            "report_type",
            "Type of report (e.g., 'market_overview', 'campaign_performance', 'competitor_analysis')",
        ))
        .with_parameter(ToolParameter::required(
            "time_period",
            "Time period covered by the report (e.g., 'Q1 2023', 'last 6 months')",
        ))
        .with_parameter(
            ToolParameter::optional("include_sections", "Sections to include in the report")
                .with_type(ParamType::StringList)
                .with_default(json!(["executive_summary", "data_analysis", "recommendations"])),
        )
        .with_parameter(
            ToolParameter::optional("format", "Format of the generated report (markdown, json)")
                .with_default("markdown"),
        )
        .with_parameter(
            ToolParameter::optional("data_sources", "Specific data sources to include")
                .with_type(ParamType::StringList),
        )
    }

    fn execute(&self, args: &ToolArguments) -> Result<Value, ToolError> {
        let report_type = args.require_str("report_type").map_err(ToolError::invalid_argument)?;
        let period = args.require_str("time_period").map_err(ToolError::invalid_argument)?;
        let format = ReportFormat::parse(args.get_str("format").unwrap_or("markdown"))?;
        let requested = args.get_string_list("include_sections");
        let mut sources = args.get_string_list("data_sources");
        if sources.is_empty() {
            sources = DEFAULT_DATA_SOURCES.iter().map(|s| s.to_string()).collect();
        }
        info!("Generating {} report for {}", report_type, period);

        let sections: Vec<(&str, String)> = SECTION_ORDER
            .iter()
            .filter(|name| requested.iter().any(|r| r == *name))
            .map(|&name| {
                let text = match name {
                    "executive_summary" => executive_summary(report_type, period),
                    "data_analysis" => data_analysis(report_type, period),
                    "recommendations" => recommendations(report_type),
                    "competitive_landscape" => COMPETITIVE_LANDSCAPE.to_string(),
                    _ => future_outlook(report_type),
                };
                (name, text)
            })
            .collect();

        let date = Utc::now().format("%Y-%m-%d").to_string();
        let content: Map<String, Value> = sections
            .iter()
            .map(|(name, text)| (name.to_string(), Value::String(text.clone())))
            .collect();

        let formatted = match format {
            ReportFormat::Markdown => {
                Self::render_markdown(report_type, period, &date, &sections, &sources)
            }
            ReportFormat::Json => serde_json::to_string_pretty(&content)
                .map_err(|e| ToolError::execution_failed(e.to_string()))?,
        };

        let summary = format!(
            "Generated a {} report for {} with {} section(s).",
            title_case(report_type).to_lowercase(),
            period,
            sections.len()
        );

        Ok(json!({
            "meta": {
                "report_type": report_type,
                "time_period": period,
                "generated_date": date,
                "data_sources": sources,
            },
            "content": content,
            "formatted_report": formatted,
            "analysis_summary": summary,
        }))
    }
}
