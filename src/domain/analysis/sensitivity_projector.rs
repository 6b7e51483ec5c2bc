//! Sensitivity Projector - Total cost over a 3×3 grid of rate assumptions.
//!
//! Columns vary the conflict rate, rows vary one secondary dimension. Each
//! cell is a full `CostModel` run with the secondary rate overridden, so the
//! caller's input set is never modified.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{CostModel, RateOverride};
use crate::domain::foundation::{RatePct, SensitivityDimension, UsageDistribution};
use crate::domain::inputs::InputSet;

/// Upper bound for projected conflict rates.
pub const CONFLICT_RATE_CAP: f64 = 90.0;

const LOW_FACTOR: f64 = 0.5;
const HIGH_FACTOR: f64 = 1.7;

/// Position along a sensitivity axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisLevel {
    Low,
    Base,
    High,
}

impl AxisLevel {
    /// Returns all levels in display order.
    pub fn all() -> [AxisLevel; 3] {
        [AxisLevel::Low, AxisLevel::Base, AxisLevel::High]
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            AxisLevel::Low => "Low",
            AxisLevel::Base => "Base",
            AxisLevel::High => "High",
        }
    }

    /// Labels a value on this level, e.g. "Low (15%)".
    pub fn label(&self, value: f64) -> String {
        format!("{} ({}%)", self.name(), value.round())
    }
}

/// How a cell's total compares with the base-case total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTrend {
    Higher,
    Lower,
    Equal,
}

/// A point on an axis: its level and the percent value used there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPoint {
    pub level: AxisLevel,
    pub value: f64,
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCell {
    pub conflict_rate: f64,
    pub total_cost: f64,
    pub trend: CostTrend,
}

/// One row: a fixed value of the secondary dimension across the conflict axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub level: AxisLevel,
    pub label: String,
    pub dimension_value: f64,
    pub cells: [SensitivityCell; 3],
}

impl SensitivityRow {
    /// Total cost at low, base and high conflict rate.
    pub fn totals(&self) -> [f64; 3] {
        self.cells.map(|c| c.total_cost)
    }

    /// Returns true for the row holding the secondary dimension at its base value.
    pub fn is_base(&self) -> bool {
        self.level == AxisLevel::Base
    }
}

/// The full 3×3 comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityTable {
    pub dimension: SensitivityDimension,
    pub conflict_axis: [AxisPoint; 3],
    pub rows: [SensitivityRow; 3],
    /// Total with both axes at base.
    pub base_total: f64,
}

impl SensitivityTable {
    /// Column headings, e.g. "Low (15%)".
    pub fn column_labels(&self) -> [String; 3] {
        self.conflict_axis.map(|p| p.level.label(p.value))
    }

    /// Returns the cell at (secondary level, conflict level).
    pub fn cell(&self, row: AxisLevel, column: AxisLevel) -> &SensitivityCell {
        &self.rows[Self::index(row)].cells[Self::index(column)]
    }

    /// Smallest and largest totals anywhere in the grid.
    pub fn spread(&self) -> (f64, f64) {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter().map(|c| c.total_cost))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| (lo.min(t), hi.max(t)))
    }

    fn index(level: AxisLevel) -> usize {
        match level {
            AxisLevel::Low => 0,
            AxisLevel::Base => 1,
            AxisLevel::High => 2,
        }
    }
}

/// Builds tornado-style sensitivity tables.
pub struct SensitivityProjector;

impl SensitivityProjector {
    /// Low / base / high values around `base`, clamped to [1, cap] off-base.
    pub fn axis(base: f64, cap: f64) -> [AxisPoint; 3] {
        let base = RatePct::new(base).value();
        [
            AxisPoint {
                level: AxisLevel::Low,
                value: (base * LOW_FACTOR).max(1.0),
            },
            AxisPoint {
                level: AxisLevel::Base,
                value: base,
            },
            AxisPoint {
                level: AxisLevel::High,
                value: (base * HIGH_FACTOR).min(cap),
            },
        ]
    }

    /// Builds the 3×3 table for one secondary dimension.
    ///
    /// Trends compare each cell against the base-case total and only tag
    /// the cell; totals are the raw model output.
    pub fn build_table(
        inputs: &InputSet,
        distribution: UsageDistribution,
        dimension: SensitivityDimension,
    ) -> SensitivityTable {
        let conflict_axis = Self::axis(inputs.conflict_rate.value(), CONFLICT_RATE_CAP);
        let dimension_axis = Self::axis(inputs.rate_for(dimension).value(), dimension.cap());

        let total_at = |conflict: f64, secondary: f64| {
            CostModel::compute(
                RatePct::new(conflict),
                inputs,
                distribution,
                Some(RateOverride::new(dimension, secondary)),
            )
            .total_cost
        };

        let base_total = total_at(conflict_axis[1].value, dimension_axis[1].value);

        let rows = dimension_axis.map(|row| {
            let cells = conflict_axis.map(|column| {
                let total_cost = total_at(column.value, row.value);
                let is_base_cell = row.level == AxisLevel::Base && column.level == AxisLevel::Base;
                SensitivityCell {
                    conflict_rate: column.value,
                    total_cost,
                    trend: if is_base_cell {
                        CostTrend::Equal
                    } else {
                        Self::trend(total_cost, base_total)
                    },
                }
            });

            SensitivityRow {
                level: row.level,
                label: row.level.label(row.value),
                dimension_value: row.value,
                cells,
            }
        });

        SensitivityTable {
            dimension,
            conflict_axis,
            rows,
            base_total,
        }
    }

    fn trend(total: f64, base_total: f64) -> CostTrend {
        match total.partial_cmp(&base_total) {
            Some(Ordering::Greater) => CostTrend::Higher,
            Some(Ordering::Less) => CostTrend::Lower,
            _ => CostTrend::Equal,
        }
    }
}
