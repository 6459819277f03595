//! # MPS
//!
//! 主生產排程優化：在組裝、測試時間與體積上限下，求最小成本的週別生產排程

pub use mps_calc::{CostEvaluator, FeasibilityChecker, InventoryProjector, ResourceUsage, Violation};
pub use mps_core::{
    MpsError, PlanningInstance, Result, Schedule, ScheduleLayout, SolverConfig, WeeklyCapacity,
};
pub use mps_optimizer::{
    solve, OptimizationResult, Optimizer, ScenarioRunner, SOLUTION_FOUND, SOLUTION_NOT_FOUND,
};
pub use rust_decimal::Decimal;
