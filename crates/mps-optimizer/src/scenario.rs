//! 多情境求解

use mps_core::PlanningInstance;
use rayon::prelude::*;

use crate::{OptimizationResult, Optimizer};

/// 多情境求解器
///
/// 各實例建立獨立模型並行求解，結果順序與輸入一致。
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    optimizer: Optimizer,
}

impl ScenarioRunner {
    /// 創建新的情境求解器
    pub fn new(optimizer: Optimizer) -> Self {
        Self { optimizer }
    }

    /// 並行求解所有情境
    pub fn solve_all(
        &self,
        instances: &[PlanningInstance],
        transpose: bool,
    ) -> Vec<mps_core::Result<OptimizationResult>> {
        tracing::info!("開始多情境求解：{} 個情境", instances.len());

        let results: Vec<_> = instances
            .par_iter()
            .map(|instance| self.optimizer.solve(instance, transpose))
            .collect();

        let feasible = results
            .iter()
            .filter(|r| matches!(r, Ok(result) if result.is_feasible()))
            .count();
        tracing::info!("多情境求解完成：可行 {} / {}", feasible, results.len());

        results
    }
}
