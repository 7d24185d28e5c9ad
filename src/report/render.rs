//! Markdown rendering of a [`PersonalityReport`].

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::engine::{PersonalityReport, RiskLevel};

/// Header row and separator of the dimensions table.
pub const DIMENSIONS_HEADER: &str =
    "| Dimension | Your Profile | Description |\n|-----------|-------------|-------------|";

const RULE: &str = "\n---\n\n";

const DISCLAIMER: &str = "This personality assessment is designed for self-reflection and personal growth purposes. It is **not a clinical diagnosis** and should not replace professional psychological consultation when needed.\n\nIf you're experiencing persistent mental health concerns, please consider speaking with a qualified mental health professional.";

/// Who the report is for and when it was produced.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Respondent name.
    pub name: &'a str,
    /// Respondent age, as entered.
    pub age: &'a str,
    /// Generation time shown in the header and footer.
    pub generated_at: DateTime<Utc>,
}

/// Render the full report as Markdown.
///
/// Sections appear in a fixed order: profile, type, strengths, growth,
/// age insight, wellness (with flags and risk level), recommendations,
/// dimensions, future path, disclaimer, closing.
#[must_use]
pub fn render_markdown(report: &PersonalityReport, ctx: &RenderContext<'_>) -> String {
    let RenderContext { name, age, .. } = *ctx;
    let date = ctx.generated_at.format("%B %d, %Y");
    let mut out = String::with_capacity(8 * 1024);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# Comprehensive Personality Analysis for {name}\n");

    let _ = write!(
        out,
        "## Personal Profile\n\
         **Name:** {name}  \n\
         **Age:** {age}  \n\
         **Assessment Date:** {date}  \n\
         **Assessment Type:** Keyword and Sentiment Personality Analysis\n"
    );
    out.push_str(RULE);

    let _ = write!(
        out,
        "## Personality Type Assessment\n\n\
         Based on your responses, {name}, your personality profile suggests you exhibit characteristics aligned with:\n\n\
         **Primary Personality Type:** {}\n\n{}\n",
        report.primary_type, report.type_description
    );
    out.push_str(RULE);

    let _ = write!(
        out,
        "## Key Strengths & Positive Traits\n\n\
         Your responses reveal several notable strengths:\n\n\
         ### Core Strengths:\n{}\n\n\
         ### Cognitive Style:\n{}\n\n\
         ### Emotional Intelligence:\n{}\n",
        report.strengths, report.cognitive_style, report.emotional_intelligence
    );
    out.push_str(RULE);

    let _ = write!(
        out,
        "## Areas for Personal Growth\n\n\
         Every personality has areas that can benefit from development. For you, {name}, consider focusing on:\n\n{}\n",
        report.growth_areas
    );
    out.push_str(RULE);

    let _ = write!(out, "## Age-Appropriate Insights (Age {age})\n\n{}\n", report.age_insights);
    out.push_str(RULE);

    let _ = write!(out, "## Mental Wellness & Stress Management\n\n{}\n", report.wellness_assessment);
    write_wellness_flags(&mut out, &report.wellness_flags, report.risk_level);
    out.push_str(RULE);

    let _ = write!(
        out,
        "## Personalized Recommendations\n\n\
         Based on your unique personality profile, here are tailored suggestions:\n\n\
         ### Personal Development:\n{}\n\n\
         ### Relationship & Social Life:\n{}\n\n\
         ### Career & Goals:\n{}\n\n\
         ### Self-Care & Wellness:\n{}\n",
        report.development_recommendations,
        report.social_recommendations,
        report.career_recommendations,
        report.wellness_recommendations
    );
    out.push_str(RULE);

    let _ = write!(
        out,
        "## Personality Dimensions Summary\n\n{DIMENSIONS_HEADER}\n{}\n",
        report.dimensions_table
    );
    out.push_str(RULE);

    let _ = write!(out, "## Future Development Path\n\n{}\n", report.future_path);
    out.push_str(RULE);

    let _ = write!(out, "## Important Disclaimer\n\n{DISCLAIMER}\n");
    out.push_str(RULE);

    let _ = write!(
        out,
        "## Celebrating Your Unique Personality\n\n\
         {name}, your personality is a beautiful combination of traits that make you uniquely you. \
         Embrace your strengths, work on your growth areas with patience and self-compassion, \
         and remember that personality development is a lifelong journey.\n\n\
         *Generated on {}*\n",
        ctx.generated_at.format("%B %d, %Y at %I:%M %p")
    );

    out
}

fn write_wellness_flags(out: &mut String, flags: &[String], risk: RiskLevel) {
    let _ = write!(out, "\n**Risk Level:** {risk} ({})\n", risk.description());
    if flags.is_empty() {
        return;
    }
    out.push('\n');
    for flag in flags {
        let _ = writeln!(out, "- {flag}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::{analyze, generate_report};
    use crate::traits::SeededRandom;
    use chrono::TimeZone;

    fn ctx() -> RenderContext<'static> {
        RenderContext {
            name: "Ada",
            age: "36",
            generated_at: Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 0).unwrap(),
        }
    }

    fn report_for(responses: &[&str]) -> PersonalityReport {
        let responses: Vec<String> = responses.iter().map(|s| (*s).to_string()).collect();
        let analysis = analyze(&responses, None, None).unwrap();
        generate_report(&analysis, "Ada", "36", &responses, &mut SeededRandom::new(1))
    }

    #[test]
    fn test_sections_in_order() {
        let report = report_for(&["I use logic and research to plan everything systematically"]);
        let md = render_markdown(&report, &ctx());

        let headings = [
            "## Personal Profile",
            "## Personality Type Assessment",
            "## Key Strengths & Positive Traits",
            "## Areas for Personal Growth",
            "## Age-Appropriate Insights (Age 36)",
            "## Mental Wellness & Stress Management",
            "## Personalized Recommendations",
            "## Personality Dimensions Summary",
            "## Future Development Path",
            "## Important Disclaimer",
            "## Celebrating Your Unique Personality",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| md.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_header_and_footer_dates() {
        let report = report_for(&["I balance work and rest"]);
        let md = render_markdown(&report, &ctx());
        assert!(md.starts_with("# Comprehensive Personality Analysis for Ada"));
        assert!(md.contains("**Assessment Date:** March 14, 2026"));
        assert!(md.contains("*Generated on March 14, 2026 at 03:09 PM*"));
    }

    #[test]
    fn test_dimensions_table_has_header_and_four_rows() {
        let report = report_for(&["I balance work and rest"]);
        let md = render_markdown(&report, &ctx());
        let start = md.find(DIMENSIONS_HEADER).unwrap();
        let table: Vec<&str> = md[start..].lines().take_while(|l| l.starts_with('|')).collect();
        assert_eq!(table.len(), 2 + 4);
    }

    #[test]
    fn test_primary_type_rendered() {
        let report = report_for(&["I use logic and research to plan everything systematically"]);
        let md = render_markdown(&report, &ctx());
        assert!(md.contains(&format!("**Primary Personality Type:** {}", report.primary_type)));
        assert!(md.contains(&report.type_description));
    }

    #[test]
    fn test_wellness_flags_listed() {
        let report = report_for(&["Honestly I can't cope and I feel hopeless"]);
        let md = render_markdown(&report, &ctx());
        assert!(!report.wellness_flags.is_empty());
        for flag in &report.wellness_flags {
            assert!(md.contains(&format!("- {flag}")));
        }
        assert!(md.contains(&format!("**Risk Level:** {}", report.risk_level)));
    }

    #[test]
    fn test_low_risk_has_no_flag_list() {
        let report = report_for(&["I balance work and rest"]);
        let md = render_markdown(&report, &ctx());
        assert!(md.contains("**Risk Level:** Low"));
        assert!(!md.contains("Concerning phrase detected"));
    }
}
