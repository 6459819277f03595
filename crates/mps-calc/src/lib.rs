//! # MPS Calculation
//!
//! 與求解器無關的排程計算：庫存推算、成本評估、產能使用與可行性檢查

pub mod cost;
pub mod feasibility;
pub mod projection;

// Re-export 主要類型
pub use cost::CostEvaluator;
pub use feasibility::{FeasibilityChecker, ResourceUsage, Violation, WeeklyUsage};
pub use projection::InventoryProjector;

use mps_core::{MpsError, PlanningInstance};

/// 驗證實例後檢查矩陣是否為 週數 × 產品數
pub(crate) fn check_shape<T>(
    name: &str,
    matrix: &[Vec<T>],
    instance: &PlanningInstance,
) -> mps_core::Result<()> {
    instance.validate()?;

    if matrix.len() != instance.weeks {
        return Err(MpsError::InvalidInput(format!(
            "{} 有 {} 列，但週數為 {}",
            name,
            matrix.len(),
            instance.weeks
        )));
    }

    let products = instance.num_products();
    if let Some(week) = matrix.iter().position(|row| row.len() != products) {
        return Err(MpsError::InvalidInput(format!(
            "{} 第 {} 列有 {} 欄，但產品數量為 {}",
            name,
            week,
            matrix[week].len(),
            products
        )));
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use mps_core::{PlanningInstance, WeeklyCapacity};
    use rust_decimal::Decimal;

    pub fn dec(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    /// 3 週 × 2 產品，第 2 週產品 0 無需求
    pub fn small_instance() -> PlanningInstance {
        PlanningInstance::new(
            3,
            vec![vec![4, 2], vec![0, 3], vec![5, 1]],
            vec![dec(&[10, 20]), dec(&[8, 25]), dec(&[12, 18])],
            vec![dec(&[1, 2]), dec(&[1, 2]), dec(&[3, 4])],
            dec(&[2, 3]),
            dec(&[4, 6]),
            WeeklyCapacity::new(10, Decimal::from(30), Decimal::from(60)),
        )
    }
}
