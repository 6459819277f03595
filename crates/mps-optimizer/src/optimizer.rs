//! 生產排程優化器

use mps_calc::{CostEvaluator, FeasibilityChecker};
use mps_core::{MpsError, PlanningInstance, Schedule, SolverConfig};

use crate::{OptimizationResult, ProductionModel};

/// 生產排程優化器
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: SolverConfig,
}

impl Optimizer {
    /// 創建新的優化器
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 求解單一實例
    ///
    /// 無可行解是正常結果（[`OptimizationResult::infeasible`]），不是錯誤。
    pub fn solve(
        &self,
        instance: &PlanningInstance,
        transpose: bool,
    ) -> mps_core::Result<OptimizationResult> {
        tracing::info!(
            "開始求解生產排程：{} 週，{} 產品",
            instance.weeks,
            instance.num_products()
        );
        let start_time = std::time::Instant::now();

        let model = ProductionModel::build(instance)?;
        tracing::debug!(
            "模型規模: 變數 {} 個，約束 {} 條",
            model.num_variables(),
            model.num_constraints()
        );

        let Some(raw) = model.solve(&self.config)? else {
            tracing::warn!("找不到可行解，耗時 {:?}", start_time.elapsed());
            return Ok(OptimizationResult::infeasible());
        };

        let inventory: Vec<Vec<i64>> = raw
            .inventory
            .iter()
            .map(|row| row.iter().map(|&v| i64::from(v)).collect())
            .collect();

        if self.config.verify_solution {
            let violations = FeasibilityChecker::check(instance, &raw.production, &inventory)?;
            if !violations.is_empty() {
                let details = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(MpsError::SolverFailure(format!(
                    "求解器回傳的解違反約束: {}",
                    details
                )));
            }
        }

        let objective = CostEvaluator::total_cost(instance, &raw.production, &inventory)?;

        let schedule = Schedule::week_major(raw.production)?;
        let schedule = if transpose {
            schedule.transpose()
        } else {
            schedule
        };

        tracing::info!(
            "求解完成，總成本 {}，耗時 {:?}",
            objective,
            start_time.elapsed()
        );

        Ok(OptimizationResult::feasible(objective, schedule, raw.inventory))
    }
}
