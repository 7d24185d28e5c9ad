//! Narrative composer.
//!
//! Every narrative field is picked from a fixed fragment list. Most picks
//! are `fragments[score % fragments.len()]` where `score` is the truncated
//! final score of one category; a few are gated on the classification or
//! the aggressive score instead. Only the dimensions table uses randomness,
//! drawn from the injected [`RandomSource`].

use serde::{Deserialize, Serialize};

use crate::lexicon::Category;
use crate::traits::RandomSource;

use super::classifier::{Classification, ClassificationPath, PersonalityType, HIGH_INTENSITY_THRESHOLD};
use super::wellness::{distress_flags, RiskLevel};
use super::CategoryScores;

/// Rows drawn into the dimensions table.
pub const DIMENSION_ROWS_SHOWN: usize = 4;

const STRENGTHS: [&str; 3] = [
    "• **Self-Awareness:** You demonstrate excellent understanding of your own thoughts, emotions, and motivations\n\
     • **Emotional Intelligence:** Strong ability to recognize and manage emotions in yourself and others\n\
     • **Adaptability:** You show flexibility in adjusting to new situations and challenges\n\
     • **Communication Skills:** Clear and thoughtful expression of ideas and feelings",
    "• **Problem-Solving:** You approach challenges with creativity and logical thinking\n\
     • **Resilience:** Strong ability to bounce back from setbacks and maintain optimism\n\
     • **Authenticity:** You present yourself genuinely and value honest self-expression\n\
     • **Growth Mindset:** Open to learning and continuous personal development",
    "• **Empathy:** You show genuine understanding and care for others' perspectives\n\
     • **Leadership Potential:** Natural ability to guide and inspire others\n\
     • **Analytical Thinking:** Strong capacity for logical reasoning and critical analysis\n\
     • **Stress Management:** Healthy approaches to managing pressure and maintaining balance",
];

/// Strengths fragment used for competitive or aggressive profiles.
const RESILIENCE_STRENGTHS: usize = 1;

const COGNITIVE_STYLES: [&str; 4] = [
    "You tend to be a **systematic thinker** who prefers structured approaches and careful planning. \
     You value thoroughness and accuracy in your work and decisions.",
    "You demonstrate **intuitive thinking** combined with analytical skills. \
     You can see both the big picture and important details.",
    "You show **creative problem-solving** abilities, often thinking of unique solutions and \
     approaches that others might miss.",
    "You exhibit **balanced cognitive processing**, effectively combining logical analysis with \
     emotional intelligence and intuition.",
];

const EMOTIONAL_INTELLIGENCE: [&str; 4] = [
    "Your responses suggest **high emotional intelligence**. You show good self-awareness, can \
     regulate your emotions effectively, and demonstrate empathy toward others.",
    "You display **strong emotional awareness** and appear to handle interpersonal relationships \
     with maturity and understanding.",
    "You demonstrate **balanced emotional processing**, showing both logical thinking and \
     emotional sensitivity in your responses.",
    "Your emotional intelligence appears **well-developed**, with good self-regulation and social \
     awareness evident in your answers.",
];

const GROWTH_AREAS: [&str; 3] = [
    "• **Stress Management:** Continue developing healthy coping strategies for high-pressure situations\n\
     • **Communication:** Work on expressing needs and boundaries more clearly when needed\n\
     • **Work-Life Balance:** Focus on maintaining healthy boundaries between different life areas",
    "• **Self-Confidence:** Continue building confidence in your abilities and trusting your judgment\n\
     • **Time Management:** Develop more efficient systems for prioritizing tasks and managing time\n\
     • **Assertiveness:** Practice expressing your opinions and needs more directly when appropriate",
    "• **Patience with Process:** Allow yourself more time for reflection before making important decisions\n\
     • **Self-Care:** Prioritize your own needs alongside caring for others\n\
     • **Flexibility:** Practice adapting to unexpected changes with greater ease",
];

const WELLNESS: [&str; 3] = [
    "Your responses suggest **good overall mental wellness**. You appear to have healthy coping \
     mechanisms and a positive outlook. Continue maintaining the practices that support your wellbeing.",
    "You show **balanced emotional regulation** in your responses. You seem to handle stress \
     reasonably well and have insight into your emotional patterns. Consider continuing to develop \
     your stress management toolkit.",
    "Your responses indicate **resilient mental health** with good self-awareness. You appear to \
     process emotions effectively and maintain perspective during challenges.",
];

const CONCERNING_WELLNESS: &str =
    "Your responses show **patterns that may indicate stress, burnout, or underlying emotional \
     challenges**. The focus on dominance, power, and viewing others negatively can be signs of \
     deeper issues. Consider speaking with a mental health professional for support.";

const DEVELOPMENT_RECOMMENDATIONS: [&str; 3] = [
    "• Set aside regular time for self-reflection and journaling\n\
     • Read books or take courses in areas that interest you\n\
     • Practice mindfulness or meditation to enhance self-awareness\n\
     • Seek feedback from trusted friends or mentors",
    "• Challenge yourself with new learning opportunities\n\
     • Practice setting and achieving small, meaningful goals\n\
     • Develop a growth mindset by viewing challenges as opportunities\n\
     • Consider working with a coach or mentor for guidance",
    "• Engage in activities that build your strengths\n\
     • Practice stepping outside your comfort zone regularly\n\
     • Focus on developing emotional intelligence through practice\n\
     • Create systems for tracking your personal growth",
];

const SOCIAL_RECOMMENDATIONS: [&str; 2] = [
    "• Maintain meaningful connections with family and friends\n\
     • Practice active listening in your relationships\n\
     • Be open about your needs and boundaries\n\
     • Seek relationships that support your authentic self",
    "• Join groups or communities aligned with your interests\n\
     • Practice empathy and understanding in difficult conversations\n\
     • Work on building trust through consistent, reliable behavior\n\
     • Balance social time with personal reflection time",
];

const CAREER_RECOMMENDATIONS: [&str; 2] = [
    "• Align your work with your values and strengths\n\
     • Seek opportunities for continuous learning and growth\n\
     • Build positive relationships with colleagues and supervisors\n\
     • Consider how your personality traits can contribute to your professional success",
    "• Look for roles that challenge you while playing to your strengths\n\
     • Develop both technical skills and emotional intelligence\n\
     • Practice clear communication and collaboration\n\
     • Set career goals that reflect your personal values",
];

const WELLNESS_RECOMMENDATIONS: [&str; 2] = [
    "• Maintain regular exercise and healthy eating habits\n\
     • Practice stress management techniques like deep breathing or meditation\n\
     • Ensure adequate sleep and rest\n\
     • Engage in activities that bring you joy and relaxation",
    "• Create healthy boundaries between work and personal time\n\
     • Develop a support network of trusted friends and family\n\
     • Practice gratitude and positive thinking\n\
     • Don't hesitate to seek professional help when needed",
];

/// Rows of the dimensions table, in Markdown.
pub const DIMENSION_ROWS: [&str; 5] = [
    "| **Emotional Stability** | High | You handle stress well and maintain emotional balance |",
    "| **Openness to Experience** | High | You're curious and open to new ideas and experiences |",
    "| **Social Orientation** | Balanced | You enjoy both social interaction and personal time |",
    "| **Conscientiousness** | High | You're organized and responsible in your approach |",
    "| **Agreeableness** | High | You work well with others and show empathy |",
];

const GENERIC_AGE_INSIGHT: &str =
    "Your responses show maturity and thoughtfulness regardless of your age. \
     Continue to embrace growth and self-discovery throughout your life journey.";

fn pick<'a>(fragments: &[&'a str], score: usize) -> &'a str {
    fragments[score % fragments.len()]
}

/// Age-bucketed insight paragraph.
///
/// Unparsable ages fall back to a generic paragraph.
#[must_use]
pub fn age_insight(age: &str) -> String {
    let Ok(age) = age.trim().parse::<i64>() else {
        return GENERIC_AGE_INSIGHT.to_string();
    };

    if age < 25 {
        format!(
            "At {age}, you're in an important developmental phase. Your responses show mature \
             self-reflection for your age. This is an excellent time to explore your interests, \
             build skills, and establish healthy patterns that will serve you well throughout life."
        )
    } else if age < 35 {
        format!(
            "At {age}, you're likely establishing your career and personal relationships. Your \
             responses suggest good self-awareness as you navigate these important life decisions. \
             Focus on building both professional skills and personal fulfillment."
        )
    } else if age < 50 {
        format!(
            "At {age}, you're in a phase where your personality and values are well-established. \
             Your responses show the wisdom that comes with experience. This is often a time for \
             deeper self-understanding and mentoring others."
        )
    } else {
        format!(
            "At {age}, your responses reflect the depth and wisdom that comes with life experience. \
             You show excellent self-awareness and emotional maturity. Consider how you can share \
             your insights and continue growing."
        )
    }
}

fn future_path(name: &str, resilient: usize) -> String {
    if resilient % 2 == 0 {
        format!(
            "As you continue to grow, {name}, focus on leveraging your natural strengths while gently \
             working on areas for development. Your personality profile suggests you have excellent \
             potential for both personal fulfillment and positive impact on others. Consider setting \
             goals that align with your values and allow you to use your unique combination of traits."
        )
    } else {
        format!(
            "Your personality development journey, {name}, should focus on authentic self-expression \
             and meaningful connections. You have the foundation for continued growth in emotional \
             intelligence, resilience, and personal effectiveness. Trust your instincts while \
             remaining open to new perspectives and experiences."
        )
    }
}

const fn cognitive_style_index(personality: PersonalityType) -> usize {
    match personality {
        PersonalityType::Category(Category::Analytical) => 0,
        PersonalityType::Category(Category::Creative) => 2,
        PersonalityType::Category(Category::Balanced) => 3,
        _ => 1,
    }
}

/// Everything the composer reads.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInput<'a> {
    /// Classifier output.
    pub classification: Classification,
    /// Final (combined) category scores.
    pub final_scores: &'a CategoryScores,
    /// Aggressive score including any concerning-pattern bonus.
    pub aggressive_score: f64,
    /// Respondent name, interpolated into the future path.
    pub name: &'a str,
    /// Free-form age text.
    pub age: &'a str,
    /// Answered responses, scanned for distress phrases.
    pub responses: &'a [String],
}

/// Structured report.
///
/// Immutable once composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityReport {
    /// Assigned type tag.
    pub primary_type: PersonalityType,
    /// Fixed description of the type.
    pub type_description: String,
    /// Ladder rule that assigned the type.
    pub classification_path: ClassificationPath,
    /// Core strengths.
    pub strengths: String,
    /// Cognitive style paragraph.
    pub cognitive_style: String,
    /// Emotional intelligence note.
    pub emotional_intelligence: String,
    /// Areas for growth.
    pub growth_areas: String,
    /// Age-bucketed insight.
    pub age_insights: String,
    /// Mental wellness paragraph.
    pub wellness_assessment: String,
    /// Personal development block.
    pub development_recommendations: String,
    /// Relationships block.
    pub social_recommendations: String,
    /// Career block.
    pub career_recommendations: String,
    /// Self-care block.
    pub wellness_recommendations: String,
    /// Markdown rows of the dimensions table.
    pub dimensions_table: String,
    /// Closing paragraph with the respondent's name.
    pub future_path: String,
    /// Distress phrases found, one entry per hit.
    pub wellness_flags: Vec<String>,
    /// Risk level derived from the flags.
    pub risk_level: RiskLevel,
}

/// Compose the report.
pub fn compose<R>(input: &NarrativeInput<'_>, rng: &mut R) -> PersonalityReport
where
    R: RandomSource + ?Sized,
{
    let scores = input.final_scores;
    let personality = input.classification.personality;

    let analytical = scores.truncated(Category::Analytical);
    let creative = scores.truncated(Category::Creative);
    let empathetic = scores.truncated(Category::Empathetic);
    let resilient = scores.truncated(Category::Resilient);
    let balanced = scores.truncated(Category::Balanced);

    let strengths = if personality == PersonalityType::IntenseCompetitor || input.aggressive_score > 0.0
    {
        STRENGTHS[RESILIENCE_STRENGTHS]
    } else {
        pick(&STRENGTHS, creative)
    };

    let wellness_assessment = if input.aggressive_score > HIGH_INTENSITY_THRESHOLD {
        CONCERNING_WELLNESS
    } else {
        pick(&WELLNESS, balanced)
    };

    let dimensions_table = rng
        .sample_indices(DIMENSION_ROWS.len(), DIMENSION_ROWS_SHOWN)
        .into_iter()
        .filter_map(|i| DIMENSION_ROWS.get(i).copied())
        .collect::<Vec<_>>()
        .join("\n");

    let wellness_flags = distress_flags(input.responses.iter().map(String::as_str));
    let risk_level = RiskLevel::from_flag_count(wellness_flags.len());
    if risk_level != RiskLevel::Low {
        tracing::warn!(flags = wellness_flags.len(), risk = %risk_level, "wellness flags raised");
    }

    PersonalityReport {
        primary_type: personality,
        type_description: personality.description().to_string(),
        classification_path: input.classification.path,
        strengths: strengths.to_string(),
        cognitive_style: COGNITIVE_STYLES[cognitive_style_index(personality)].to_string(),
        emotional_intelligence: pick(&EMOTIONAL_INTELLIGENCE, empathetic).to_string(),
        growth_areas: pick(&GROWTH_AREAS, resilient).to_string(),
        age_insights: age_insight(input.age),
        wellness_assessment: wellness_assessment.to_string(),
        development_recommendations: pick(&DEVELOPMENT_RECOMMENDATIONS, creative).to_string(),
        social_recommendations: pick(&SOCIAL_RECOMMENDATIONS, empathetic).to_string(),
        career_recommendations: pick(&CAREER_RECOMMENDATIONS, analytical).to_string(),
        wellness_recommendations: pick(&WELLNESS_RECOMMENDATIONS, balanced).to_string(),
        dimensions_table,
        future_path: future_path(input.name, resilient),
        wellness_flags,
        risk_level,
    }
}
