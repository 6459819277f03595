//! 產能使用與可行性檢查

use mps_core::PlanningInstance;
use rust_decimal::Decimal;

use crate::InventoryProjector;

/// 單週資源使用量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyUsage {
    /// 組裝數量
    pub assemblies: u64,
    /// 測試時間
    pub test_time: Decimal,
    /// 產出體積
    pub volume: Decimal,
}

/// 資源使用計算
pub struct ResourceUsage;

impl ResourceUsage {
    /// 計算每週資源使用量
    pub fn weekly(
        instance: &PlanningInstance,
        production: &[Vec<u32>],
    ) -> mps_core::Result<Vec<WeeklyUsage>> {
        crate::check_shape("production", production, instance)?;

        Ok(production
            .iter()
            .map(|row| {
                let mut usage = WeeklyUsage {
                    assemblies: 0,
                    test_time: Decimal::ZERO,
                    volume: Decimal::ZERO,
                };
                for (product, &qty) in row.iter().enumerate() {
                    let qty_dec = Decimal::from(qty);
                    usage.assemblies += u64::from(qty);
                    usage.test_time += instance.test_time[product] * qty_dec;
                    usage.volume += instance.volume[product] * qty_dec;
                }
                usage
            })
            .collect())
    }
}

/// 約束違反
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("第 {week} 週產品 {product} 庫存為負值: {inventory}")]
    NegativeInventory {
        week: usize,
        product: usize,
        inventory: i64,
    },

    #[error("第 {week} 週產品 {product} 無需求但持有庫存 {inventory}")]
    ZeroDemandCarry {
        week: usize,
        product: usize,
        inventory: i64,
    },

    #[error("第 {week} 週產品 {product} 庫存平衡不符: 預期 {expected}，實際 {actual}")]
    BalanceMismatch {
        week: usize,
        product: usize,
        expected: i64,
        actual: i64,
    },

    #[error("第 {week} 週產品 {product} 供給不足: 可用 {available}，需要 {required}")]
    Shortage {
        week: usize,
        product: usize,
        available: i64,
        required: i64,
    },

    #[error("第 {week} 週組裝數量 {used} 超過上限 {limit}")]
    AssemblyCapacity { week: usize, used: u64, limit: u32 },

    #[error("第 {week} 週測試時間 {used} 超過上限 {limit}")]
    TestTimeCapacity {
        week: usize,
        used: Decimal,
        limit: Decimal,
    },

    #[error("第 {week} 週產出體積 {used} 超過上限 {limit}")]
    StorageCapacity {
        week: usize,
        used: Decimal,
        limit: Decimal,
    },
}

/// 可行性檢查器
pub struct FeasibilityChecker;

impl FeasibilityChecker {
    /// 檢查排程與週末庫存是否滿足所有約束
    ///
    /// 返回所有違反項目；空列表代表可行。
    pub fn check(
        instance: &PlanningInstance,
        production: &[Vec<u32>],
        inventory: &[Vec<i64>],
    ) -> mps_core::Result<Vec<Violation>> {
        crate::check_shape("inventory", inventory, instance)?;
        let usage = ResourceUsage::weekly(instance, production)?;

        let mut violations = Vec::new();

        for week in 0..instance.weeks {
            for product in 0..instance.num_products() {
                let demand = i64::from(instance.demand_at(week, product));
                let produced = i64::from(production[week][product]);
                let held = inventory[week][product];
                let previous = InventoryProjector::previous(inventory, week, product);

                if held < 0 {
                    violations.push(Violation::NegativeInventory {
                        week,
                        product,
                        inventory: held,
                    });
                }

                if demand == 0 {
                    if held != 0 {
                        violations.push(Violation::ZeroDemandCarry {
                            week,
                            product,
                            inventory: held,
                        });
                    }
                } else if week > 0 {
                    let expected = produced - demand + previous;
                    if held != expected {
                        violations.push(Violation::BalanceMismatch {
                            week,
                            product,
                            expected,
                            actual: held,
                        });
                    }
                }

                if produced + previous < demand + held {
                    violations.push(Violation::Shortage {
                        week,
                        product,
                        available: produced + previous,
                        required: demand + held,
                    });
                }
            }

            let used = &usage[week];
            let capacity = &instance.capacity;
            if used.assemblies > u64::from(capacity.max_assemblies) {
                violations.push(Violation::AssemblyCapacity {
                    week,
                    used: used.assemblies,
                    limit: capacity.max_assemblies,
                });
            }
            if used.test_time > capacity.max_test_time {
                violations.push(Violation::TestTimeCapacity {
                    week,
                    used: used.test_time,
                    limit: capacity.max_test_time,
                });
            }
            if used.volume > capacity.storage_capacity {
                violations.push(Violation::StorageCapacity {
                    week,
                    used: used.volume,
                    limit: capacity.storage_capacity,
                });
            }
        }

        if !violations.is_empty() {
            tracing::debug!("可行性檢查發現 {} 項違反", violations.len());
        }

        Ok(violations)
    }
}
