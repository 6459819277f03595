//! 週末庫存推算

use mps_core::PlanningInstance;

/// 庫存推算器
pub struct InventoryProjector;

impl InventoryProjector {
    /// 由生產排程推算每週週末庫存
    ///
    /// 規則：
    /// - 當週需求為 0：庫存歸 0（不結轉）
    /// - 其他：本週生產 - 本週需求 + 上週庫存（第 0 週的上週庫存為 0）
    ///
    /// 結果可能為負值，代表缺貨；由 [`crate::FeasibilityChecker`] 回報。
    ///
    /// 第 0 週固定為 `x[0] - d[0]`。模型對第 0 週只要求 `I[0] <= x[0] - d[0]`，
    /// 求解器回傳的第 0 週庫存因此可能較小（持有單價為 0 時尤其如此），
    /// 比對手工排程與求解結果時應以 [`crate::FeasibilityChecker`] 檢查，而非逐格相等。
    pub fn project(
        instance: &PlanningInstance,
        production: &[Vec<u32>],
    ) -> mps_core::Result<Vec<Vec<i64>>> {
        crate::check_shape("production", production, instance)?;

        let products = instance.num_products();
        let mut inventory: Vec<Vec<i64>> = Vec::with_capacity(instance.weeks);
        let mut previous = vec![0i64; products];

        for (week, produced) in production.iter().enumerate() {
            let row: Vec<i64> = (0..products)
                .map(|product| {
                    let demand = instance.demand_at(week, product);
                    if demand == 0 {
                        0
                    } else {
                        i64::from(produced[product]) - i64::from(demand) + previous[product]
                    }
                })
                .collect();

            previous.clone_from(&row);
            inventory.push(row);
        }

        tracing::debug!("庫存推算完成: {} 週 × {} 產品", instance.weeks, products);

        Ok(inventory)
    }

    /// 上週庫存；第 0 週沒有上週，固定為 0
    pub fn previous(inventory: &[Vec<i64>], week: usize, product: usize) -> i64 {
        match week.checked_sub(1) {
            Some(prev) => inventory[prev][product],
            None => 0,
        }
    }
}
