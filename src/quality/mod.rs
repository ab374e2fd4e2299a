//! Document quality scoring.
//!
//! Grades agent, command, skill, plugin and output-style documents on a
//! 0-100 scale split into four categories:
//!
//! | Category | Points | Measures |
//! |---|---|---|
//! | Structural | 40 | required frontmatter keys and sections |
//! | Practices | 40 | conventions such as trigger phrases and delegation |
//! | Composition | 10 | size against the kind's budget |
//! | Documentation | 10 | description depth and examples |
//!
//! # Usage
//!
//! ```
//! use agent_grader::model::{DocumentKind, Frontmatter};
//! use agent_grader::quality::scorer_for;
//!
//! let score = scorer_for(DocumentKind::Command).score("", &Frontmatter::new(), "");
//! assert_eq!(score.overall, score.details.iter().map(|m| m.points).sum::<u32>());
//! ```

mod agent;
mod command;
mod metrics;
mod output_style;
mod plugin;
mod rules;
mod scorer;
mod skill;
mod thin_router;

pub use agent::{AGENT_COMPOSITION, AgentScorer};
pub use command::{COMMAND_COMPOSITION, CommandScorer};
pub use metrics::{CategoryScore, Metric, MetricCategory, QualityScore, Tier};
pub use output_style::{OUTPUT_STYLE_COMPOSITION, OutputStyleScorer};
pub use plugin::{PLUGIN_COMPOSITION, PluginScorer};
pub use rules::{
    ANTI_PATTERNS, Band, COMPOSITION_MAX_POINTS, CompositionThresholds, FieldSpec, SectionSpec,
    anti_patterns_fallback, score_composition, score_required_fields, score_sections,
    score_sections_with_fallback,
};
pub use scorer::{
    DocumentSize, SCORING_ENGINE_VERSION, Scorer, ScorerComponent, compute_combined_score,
    scorer_for,
};
pub use skill::{SKILL_COMPOSITION, SkillScorer};
pub use thin_router::{QUORUM, SHORT_ROUTER_MAX_LINES, ThinRouterSignals, is_thin_router};
