//! EstimatorSession - Caller-owned state that composes the estimation engine.
//!
//! The session holds the choices a user toggles between recalculations
//! (recovery scenario, usage distribution, sensitivity dimension) plus the
//! configured thresholds. Every estimate is recomputed from the inputs it is
//! given; nothing is cached between calls.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AssumptionsConfig;
use crate::domain::analysis::{
    ConsistencyChecker, ConsistencyReport, CostBreakdown, CostModel, DerivedRates,
    GuidedDerivationEngine, RoiCalculator, RoiSummary, SensitivityProjector, SensitivityTable,
    DEFAULT_RATIO_THRESHOLD,
};
use crate::domain::foundation::{
    RatePct, RecoveryScenario, SensitivityDimension, UsageDistribution,
};
use crate::domain::inputs::{GuidedInputSet, InputSet, ProjectionDefaults};

/// Everything computed from one input set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub scenario: RecoveryScenario,
    pub distribution: UsageDistribution,
    pub cost: CostBreakdown,
    pub roi: RoiSummary,
    pub sensitivity: SensitivityTable,
    pub consistency: ConsistencyReport,
    /// Echoed for display only; it does not change any cost figure.
    pub attribution_weight_pct: RatePct,
}

/// A guided-mode estimate: derived rates, the projected inputs and the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidedEstimate {
    pub derived: DerivedRates,
    pub conflict_rationale: String,
    pub inputs: InputSet,
    pub estimate: Estimate,
}

/// Session state for an interactive estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorSession {
    scenario: RecoveryScenario,
    distribution: UsageDistribution,
    dimension: SensitivityDimension,
    ratio_threshold: f64,
    projection_defaults: ProjectionDefaults,
}

impl Default for EstimatorSession {
    fn default() -> Self {
        Self {
            scenario: RecoveryScenario::default(),
            distribution: UsageDistribution::default(),
            dimension: SensitivityDimension::default(),
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            projection_defaults: ProjectionDefaults::default(),
        }
    }
}

impl EstimatorSession {
    /// Creates a session with default assumptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from configured assumptions.
    pub fn from_config(config: &AssumptionsConfig) -> Self {
        Self {
            scenario: config.recovery_scenario,
            distribution: config.usage_distribution,
            dimension: config.sensitivity_dimension,
            ratio_threshold: config.consistency_ratio_threshold,
            projection_defaults: config.projection_defaults(),
        }
    }

    pub fn scenario(&self) -> RecoveryScenario {
        self.scenario
    }

    pub fn distribution(&self) -> UsageDistribution {
        self.distribution
    }

    pub fn dimension(&self) -> SensitivityDimension {
        self.dimension
    }

    /// Switches the recovery scenario used for savings.
    pub fn set_scenario(&mut self, scenario: RecoveryScenario) {
        info!(scenario = %scenario, "Recovery scenario changed");
        self.scenario = scenario;
    }

    /// Switches the usage distribution assumption.
    pub fn set_distribution(&mut self, distribution: UsageDistribution) {
        info!(distribution = %distribution, "Usage distribution changed");
        self.distribution = distribution;
    }

    /// Switches the secondary axis of the sensitivity table.
    pub fn set_dimension(&mut self, dimension: SensitivityDimension) {
        info!(dimension = %dimension, "Sensitivity dimension changed");
        self.dimension = dimension;
    }

    /// Computes a full estimate from expert inputs.
    pub fn estimate(&self, inputs: &InputSet) -> Estimate {
        let cost = CostModel::compute_base(inputs, self.distribution);
        let roi = RoiCalculator::compute(
            &cost,
            self.scenario,
            inputs.annual_platform_cost(),
            inputs.setup_cost,
        );
        let sensitivity = SensitivityProjector::build_table(inputs, self.distribution, self.dimension);
        let consistency = ConsistencyChecker::check_with_threshold(
            inputs.daily_queries,
            inputs.customers,
            inputs.queries_per_customer,
            self.ratio_threshold,
        );

        if consistency.warn {
            warn!(
                implied_annual = consistency.implied_annual,
                customer_annual = consistency.customer_annual,
                ratio = consistency.ratio.unwrap_or_default(),
                "Annual query volume estimates disagree"
            );
        }

        debug!(
            scenario = %self.scenario,
            distribution = %self.distribution,
            total_cost = cost.total_cost,
            recovered = roi.recovered.total,
            net_benefit = roi.net_benefit,
            payback = %roi.payback,
            "Computed estimate"
        );

        Estimate {
            scenario: self.scenario,
            distribution: self.distribution,
            cost,
            roi,
            sensitivity,
            consistency,
            attribution_weight_pct: inputs.attribution_weight_pct,
        }
    }

    /// Derives rates from guided inputs, projects them, and estimates.
    pub fn estimate_guided(&self, guided: &GuidedInputSet) -> GuidedEstimate {
        let derived = GuidedDerivationEngine::derive(guided);
        let inputs = GuidedDerivationEngine::project(guided, &derived, &self.projection_defaults);

        debug!(
            conflict_rate = derived.conflict_rate.value(),
            deflection_failure_rate = derived.deflection_failure_rate.value(),
            hallucination_rate = derived.hallucination_rate.value(),
            churn_rate = derived.churn_rate.value(),
            rework_caused_rate = derived.rework_caused_rate.value(),
            daily_queries = derived.daily_queries,
            "Derived guided rates"
        );

        let estimate = self.estimate(&inputs);

        GuidedEstimate {
            derived,
            conflict_rationale: GuidedDerivationEngine::explain_conflict(guided),
            inputs,
            estimate,
        }
    }
}
