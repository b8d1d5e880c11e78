//! Screening wizard: 30-feature intake, simulated analysis, report.
//!
//! Phases run input -> processing -> results. Processing is a timer-driven
//! counter, not inference: progress climbs by a configured increment per
//! tick until exactly 100, holds for a configured number of ticks, then a
//! canned report is drawn from the RNG.

use std::collections::BTreeMap;

use rand::Rng;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info};

use crate::config::ScreeningConfig;
use crate::core::validate::{self, FieldErrors};

// ===== Feature catalogue =====

/// The three measurement groups of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum FeatureGroup {
    Mean,
    StdError,
    Worst,
}

impl FeatureGroup {
    pub fn title(&self) -> &'static str {
        match self {
            FeatureGroup::Mean => "A. Mean Values (Cell Features)",
            FeatureGroup::StdError => "B. Standard Error (Variance)",
            FeatureGroup::Worst => "C. Worst Values (Extremes)",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FeatureGroup::Mean => "Average measurements of cell nuclei",
            FeatureGroup::StdError => "Variability measurements of cell features",
            FeatureGroup::Worst => "Extreme measurements of cell features",
        }
    }
}

/// The ten cell-nucleus metrics measured in every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display)]
pub enum Metric {
    Radius,
    Texture,
    Perimeter,
    Area,
    Smoothness,
    Compactness,
    Concavity,
    #[strum(serialize = "Concave Points")]
    ConcavePoints,
    Symmetry,
    #[strum(serialize = "Fractal Dimension")]
    FractalDimension,
}

/// One input field of the intake form: a group/metric pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feature {
    pub group: FeatureGroup,
    pub metric: Metric,
}

impl Feature {
    /// All 30 fields in form order.
    pub fn all() -> impl Iterator<Item = Feature> {
        FeatureGroup::iter()
            .flat_map(|group| Metric::iter().map(move |metric| Feature { group, metric }))
    }

    pub fn in_group(group: FeatureGroup) -> impl Iterator<Item = Feature> {
        Metric::iter().map(move |metric| Feature { group, metric })
    }

    /// Field label as shown on the intake form, e.g. "Mean Radius",
    /// "Radius Error", "Worst Radius".
    pub fn label(&self) -> String {
        match self.group {
            FeatureGroup::Mean => format!("Mean {}", self.metric),
            FeatureGroup::StdError => format!("{} Error", self.metric),
            FeatureGroup::Worst => format!("Worst {}", self.metric),
        }
    }

    /// Stable key used in the error map.
    pub fn key(&self) -> String {
        self.label().to_lowercase().replace(' ', "_")
    }
}

// ===== Report =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    #[strum(serialize = "benign")]
    Benign,
    #[strum(serialize = "malignant")]
    Malignant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RiskBand {
    #[strum(serialize = "Low Risk")]
    Low,
    #[strum(serialize = "Moderate Risk")]
    Moderate,
    #[strum(serialize = "High Risk")]
    High,
}

const FINDINGS_MALIGNANT: &str = "The AI model has detected patterns consistent with malignant characteristics. The cell features show irregular shapes, increased texture variance, and higher concavity measurements that warrant immediate medical attention.";
const FINDINGS_BENIGN: &str = "The AI model has analyzed the cell features and identified patterns consistent with benign characteristics. The measurements fall within normal ranges with regular shapes and low variance.";
const RECOMMENDATION_MALIGNANT: &str = "Immediate consultation with an oncologist is strongly recommended. Additional diagnostic tests including biopsy and imaging may be necessary to confirm diagnosis and determine appropriate treatment options.";
const RECOMMENDATION_BENIGN: &str = "Continue with regular screening schedule. Maintain healthy lifestyle habits and perform monthly self-examinations. Schedule your next routine mammogram as per your healthcare provider's recommendation.";
const NOTICE_MALIGNANT: &str = "This AI screening indicates patterns that require immediate medical evaluation. Please schedule a consultation with a qualified oncologist or breast imaging specialist as soon as possible. This prediction is not a final diagnosis and must be confirmed through proper medical examination and additional testing.";
const NOTICE_BENIGN: &str = "This AI screening is a preliminary assessment tool and should not be considered a final diagnosis. Please consult with a qualified healthcare professional for proper evaluation and interpretation of results. Your results have been automatically shared with your assigned healthcare provider for review.";

/// The canned result shown after the simulated run. None of the numbers
/// are derived from the submitted measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub outcome: Outcome,
    pub confidence: f64, // percent
    pub risk_score: f64,
    pub findings: &'static str,
    pub recommendation: &'static str,
    pub notice: &'static str,
}

impl AnalysisReport {
    /// Draw a report from the RNG with the given malignancy probability.
    pub fn generate(rng: &mut impl Rng, malignant_rate: f64) -> Self {
        let malignant = rng.gen::<f64>() < malignant_rate;
        let confidence = 85.0 + rng.gen::<f64>() * 13.0;
        let risk_score = if malignant {
            65.0 + rng.gen::<f64>() * 30.0
        } else {
            10.0 + rng.gen::<f64>() * 30.0
        };
        let (outcome, findings, recommendation, notice) = if malignant {
            (
                Outcome::Malignant,
                FINDINGS_MALIGNANT,
                RECOMMENDATION_MALIGNANT,
                NOTICE_MALIGNANT,
            )
        } else {
            (
                Outcome::Benign,
                FINDINGS_BENIGN,
                RECOMMENDATION_BENIGN,
                NOTICE_BENIGN,
            )
        };
        Self {
            outcome,
            confidence,
            risk_score,
            findings,
            recommendation,
            notice,
        }
    }

    pub fn risk_band(&self) -> RiskBand {
        if self.risk_score < 30.0 {
            RiskBand::Low
        } else if self.risk_score < 60.0 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn notice_title(&self) -> &'static str {
        match self.outcome {
            Outcome::Malignant => "Urgent Medical Attention Required",
            Outcome::Benign => "Important Notice",
        }
    }
}

// ===== Wizard =====

#[derive(Debug, Clone)]
pub enum Phase {
    Input,
    Processing { progress: u8, hold: u32 },
    Results(AnalysisReport),
}

/// Processing-stage lamps for the progress view.
pub fn stages(progress: u8) -> [(&'static str, bool); 3] {
    [
        ("Data Validation", progress > 30),
        ("Feature Analysis", progress > 60),
        ("Prediction Model", progress > 90),
    ]
}

#[derive(Debug, Clone)]
pub struct ScreeningWizard {
    values: BTreeMap<Feature, String>,
    errors: FieldErrors,
    phase: Phase,
    sim: ScreeningConfig,
}

impl ScreeningWizard {
    pub fn new(sim: ScreeningConfig) -> Self {
        Self {
            values: Feature::all().map(|f| (f, String::new())).collect(),
            errors: FieldErrors::new(),
            phase: Phase::Input,
            sim,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Processing { .. })
    }

    pub fn progress(&self) -> u8 {
        match self.phase {
            Phase::Input => 0,
            Phase::Processing { progress, .. } => progress,
            Phase::Results(_) => 100,
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            Phase::Results(report) => Some(report),
            _ => None,
        }
    }

    pub fn value(&self, feature: Feature) -> &str {
        self.values.get(&feature).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, feature: Feature) -> Option<&str> {
        self.errors.get(&feature.key()).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Accept a keystroke for one field. Input that fails the decimal
    /// filter is dropped; accepted input clears the field's pending error.
    pub fn input(&mut self, feature: Feature, raw: String) -> bool {
        if !validate::accepts_decimal_input(&raw) {
            return false;
        }
        self.errors.remove(&feature.key());
        self.values.insert(feature, raw);
        true
    }

    /// Every field must hold a non-negative number.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for feature in Feature::all() {
            let value = self.value(feature);
            if value.trim().is_empty() {
                errors.insert(feature.key(), "Required".into());
            } else if !validate::is_positive_number(value) {
                errors.insert(feature.key(), "Must be a positive number".into());
            }
        }
        errors
    }

    /// Submit the intake form; on success the simulated run starts.
    pub fn submit(&mut self) -> bool {
        if !matches!(self.phase, Phase::Input) {
            return false;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        self.phase = Phase::Processing {
            progress: 0,
            hold: self.sim.hold_ticks(),
        };
        info!("screening submitted, starting simulated analysis");
        true
    }

    /// Advance the simulated run by one timer tick. Returns true on the
    /// tick that reveals the report.
    pub fn tick(&mut self, rng: &mut impl Rng) -> bool {
        let Phase::Processing { progress, hold } = &mut self.phase else {
            return false;
        };
        if *progress < 100 {
            *progress = progress.saturating_add(self.sim.increment.max(1)).min(100);
            debug!(progress = *progress, "analysis progress");
            return false;
        }
        *hold = hold.saturating_sub(1);
        if *hold > 0 {
            return false;
        }
        let report = AnalysisReport::generate(rng, self.sim.malignant_rate);
        info!(outcome = %report.outcome, "simulated analysis complete");
        self.phase = Phase::Results(report);
        true
    }

    /// Back to a blank intake form.
    pub fn restart(&mut self) {
        self.values = Feature::all().map(|f| (f, String::new())).collect();
        self.errors.clear();
        self.phase = Phase::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled_wizard() -> ScreeningWizard {
        let mut wizard = ScreeningWizard::new(ScreeningConfig::default());
        for feature in Feature::all() {
            assert!(wizard.input(feature, "12.5".into()));
        }
        wizard
    }

    #[test]
    fn the_catalogue_has_thirty_features_with_unique_keys() {
        let keys: std::collections::BTreeSet<_> = Feature::all().map(|f| f.key()).collect();
        assert_eq!(keys.len(), 30);
        assert!(keys.contains("mean_radius"));
        assert!(keys.contains("concave_points_error"));
        assert!(keys.contains("worst_fractal_dimension"));
    }

    #[test]
    fn labels_follow_the_group_convention() {
        let radius = |group| Feature {
            group,
            metric: Metric::Radius,
        };
        assert_eq!(radius(FeatureGroup::Mean).label(), "Mean Radius");
        assert_eq!(radius(FeatureGroup::StdError).label(), "Radius Error");
        assert_eq!(radius(FeatureGroup::Worst).label(), "Worst Radius");
    }

    #[test]
    fn empty_fields_each_get_a_required_error() {
        let mut wizard = ScreeningWizard::new(ScreeningConfig::default());
        assert!(!wizard.submit());
        assert_eq!(wizard.errors().len(), 30);
        assert!(wizard
            .errors()
            .values()
            .all(|message| message == "Required"));
        assert!(matches!(wizard.phase(), Phase::Input));
    }

    #[test]
    fn the_decimal_filter_drops_bad_keystrokes() {
        let mut wizard = ScreeningWizard::new(ScreeningConfig::default());
        let field = Feature {
            group: FeatureGroup::Mean,
            metric: Metric::Radius,
        };
        assert!(!wizard.input(field, "12a".into()));
        assert_eq!(wizard.value(field), "");
        assert!(wizard.input(field, "12.".into()));
        assert_eq!(wizard.value(field), "12.");
    }

    #[test]
    fn accepted_input_clears_only_that_fields_error() {
        let mut wizard = ScreeningWizard::new(ScreeningConfig::default());
        wizard.submit();
        let field = Feature {
            group: FeatureGroup::Mean,
            metric: Metric::Radius,
        };
        assert!(wizard.error(field).is_some());
        wizard.input(field, "14".into());
        assert!(wizard.error(field).is_none());
        assert_eq!(wizard.errors().len(), 29);
    }

    #[test]
    fn submit_with_valid_values_starts_processing() {
        let mut wizard = filled_wizard();
        assert!(wizard.submit());
        assert!(wizard.is_processing());
        assert_eq!(wizard.progress(), 0);
    }

    #[test]
    fn progress_reaches_exactly_one_hundred_before_any_report() {
        let mut wizard = filled_wizard();
        wizard.submit();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = Vec::new();
        let mut ticks = 0;
        while wizard.report().is_none() {
            let revealed = wizard.tick(&mut rng);
            seen.push(wizard.progress());
            if revealed {
                break;
            }
            ticks += 1;
            assert!(ticks < 1000, "simulation never completed");
        }

        assert!(seen.iter().all(|&p| p <= 100));
        assert_eq!(seen.last(), Some(&100));
        // 20 ticks of climbing, then the configured hold before the reveal.
        assert_eq!(seen.iter().filter(|&&p| p == 100).count() as u32, 1 + ScreeningConfig::default().hold_ticks());
        assert!(wizard.report().is_some());
    }

    #[test]
    fn the_outcome_is_always_from_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let report = AnalysisReport::generate(&mut rng, 0.3);
            assert!(matches!(report.outcome, Outcome::Benign | Outcome::Malignant));
            assert!((85.0..=98.0).contains(&report.confidence));
            match report.outcome {
                Outcome::Malignant => {
                    assert!((65.0..=95.0).contains(&report.risk_score));
                    assert_eq!(report.risk_band(), RiskBand::High);
                }
                Outcome::Benign => {
                    assert!((10.0..=40.0).contains(&report.risk_score));
                    assert!(matches!(
                        report.risk_band(),
                        RiskBand::Low | RiskBand::Moderate
                    ));
                }
            }
        }
    }

    #[test]
    fn restart_returns_to_a_blank_form() {
        let mut wizard = filled_wizard();
        wizard.submit();
        let mut rng = StdRng::seed_from_u64(1);
        while !wizard.tick(&mut rng) {}
        assert!(wizard.report().is_some());

        wizard.restart();
        assert!(matches!(wizard.phase(), Phase::Input));
        assert_eq!(wizard.progress(), 0);
        assert!(Feature::all().all(|f| wizard.value(f).is_empty()));
    }

    #[test]
    fn stage_lamps_follow_the_thresholds() {
        assert_eq!(stages(30), [
            ("Data Validation", false),
            ("Feature Analysis", false),
            ("Prediction Model", false),
        ]);
        assert_eq!(stages(65), [
            ("Data Validation", true),
            ("Feature Analysis", true),
            ("Prediction Model", false),
        ]);
        assert_eq!(stages(100), [
            ("Data Validation", true),
            ("Feature Analysis", true),
            ("Prediction Model", true),
        ]);
    }

    #[test]
    fn ticking_outside_processing_is_a_no_op() {
        let mut wizard = ScreeningWizard::new(ScreeningConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!wizard.tick(&mut rng));
        assert!(matches!(wizard.phase(), Phase::Input));
    }
}
