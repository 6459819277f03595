//! # MPS Optimizer
//!
//! 以整數規劃求解最小成本的週別生產與庫存排程

pub mod model;
pub mod optimizer;
pub mod scenario;

// Re-export 主要類型
pub use model::{ProductionModel, RawPlan};
pub use optimizer::Optimizer;
pub use scenario::ScenarioRunner;

use mps_core::{PlanningInstance, Schedule};
use rust_decimal::Decimal;

/// 求得最佳解時的訊息
pub const SOLUTION_FOUND: &str = "The solution was successfully found!";

/// 無可行解時的訊息
pub const SOLUTION_NOT_FOUND: &str = "Unable to find the solution!";

/// 優化結果
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// 最小總成本（無可行解時為 None）
    pub objective: Option<Decimal>,

    /// 生產排程（依要求的方向）
    pub schedule: Option<Schedule>,

    /// 週末庫存（週別優先）
    pub inventory: Option<Vec<Vec<u32>>>,

    /// 結果訊息
    pub message: String,
}

impl OptimizationResult {
    /// 創建可行的優化結果
    pub fn feasible(objective: Decimal, schedule: Schedule, inventory: Vec<Vec<u32>>) -> Self {
        Self {
            objective: Some(objective),
            schedule: Some(schedule),
            inventory: Some(inventory),
            message: SOLUTION_FOUND.to_string(),
        }
    }

    /// 創建不可行的優化結果
    pub fn infeasible() -> Self {
        Self {
            objective: None,
            schedule: None,
            inventory: None,
            message: SOLUTION_NOT_FOUND.to_string(),
        }
    }

    /// 是否找到可行解
    pub fn is_feasible(&self) -> bool {
        self.objective.is_some()
    }

    /// 拆成 (目標值, 排程矩陣, 訊息)
    pub fn into_parts(self) -> (Option<Decimal>, Option<Vec<Vec<u32>>>, String) {
        (
            self.objective,
            self.schedule.map(Schedule::into_rows),
            self.message,
        )
    }
}

/// 以預設配置求解
///
/// `transpose` 為 true 時排程以 產品 × 週別 返回。
pub fn solve(instance: &PlanningInstance, transpose: bool) -> mps_core::Result<OptimizationResult> {
    Optimizer::default().solve(instance, transpose)
}
