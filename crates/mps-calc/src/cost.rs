//! 成本評估

use mps_core::PlanningInstance;
use rust_decimal::Decimal;

/// 成本評估器
pub struct CostEvaluator;

impl CostEvaluator {
    /// 計算排程總成本
    ///
    /// 總成本 = Σ 生產單價 × 生產量 + Σ 持有單價 × 週末庫存
    pub fn total_cost(
        instance: &PlanningInstance,
        production: &[Vec<u32>],
        inventory: &[Vec<i64>],
    ) -> mps_core::Result<Decimal> {
        crate::check_shape("production", production, instance)?;
        crate::check_shape("inventory", inventory, instance)?;

        let mut total = Decimal::ZERO;
        for week in 0..instance.weeks {
            for product in 0..instance.num_products() {
                total += instance.producing_price[week][product]
                    * Decimal::from(production[week][product])
                    + instance.storage_price[week][product]
                        * Decimal::from(inventory[week][product]);
            }
        }

        Ok(total)
    }

    /// 簡單下界：每個產品的總需求 × 計劃期內最低生產單價
    ///
    /// 每單位需求至少要被生產一次，且持有成本非負。
    pub fn naive_lower_bound(instance: &PlanningInstance) -> mps_core::Result<Decimal> {
        instance.validate()?;

        Ok((0..instance.num_products())
            .map(|product| {
                let total_demand: u64 = instance
                    .demand
                    .iter()
                    .map(|row| u64::from(row[product]))
                    .sum();
                let min_price = instance
                    .producing_price
                    .iter()
                    .map(|row| row[product])
                    .min()
                    .unwrap_or(Decimal::ZERO);
                min_price * Decimal::from(total_demand)
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::small_instance;
    use crate::InventoryProjector;
    use mps_core::MpsError;

    #[test]
    fn test_total_cost_lot_for_lot() {
        let instance = small_instance();
        let production = instance.demand.clone();
        let inventory = InventoryProjector::project(&instance, &production).unwrap();

        let cost = CostEvaluator::total_cost(&instance, &production, &inventory).unwrap();

        // 4*10 + 2*20 + 0*8 + 3*25 + 5*12 + 1*18
        assert_eq!(cost, Decimal::from(233));
    }

    #[test]
    fn test_total_cost_includes_holding() {
        let instance = small_instance();
        let production = vec![vec![4, 5], vec![0, 0], vec![5, 1]];
        let inventory = InventoryProjector::project(&instance, &production).unwrap();

        let cost = CostEvaluator::total_cost(&instance, &production, &inventory).unwrap();

        // 產品 1 第 0 週生產 5，週末持有 3（單價 2），第 1 週用完
        assert_eq!(inventory[0][1], 3);
        assert_eq!(cost, Decimal::from(40 + 100 + 6 + 60 + 18));
    }

    #[test]
    fn test_naive_lower_bound() {
        let instance = small_instance();

        // 產品 0：需求 9 × 最低價 8；產品 1：需求 6 × 最低價 18
        assert_eq!(
            CostEvaluator::naive_lower_bound(&instance).unwrap(),
            Decimal::from(72 + 108)
        );
    }

    #[test]
    fn test_total_cost_rejects_wrong_shape() {
        let instance = small_instance();
        let production = instance.demand.clone();

        assert!(CostEvaluator::total_cost(&instance, &production, &[vec![0, 0]]).is_err());
    }

    #[test]
    fn test_total_cost_rejects_short_price_row() {
        let mut instance = small_instance();
        instance.producing_price[2].pop();
        let production = instance.demand.clone();
        let inventory = vec![vec![0i64; 2]; 3];

        let err = CostEvaluator::total_cost(&instance, &production, &inventory).unwrap_err();

        assert!(matches!(err, MpsError::InvalidInput(_)));
    }

    #[test]
    fn test_naive_lower_bound_rejects_short_demand_row() {
        let mut instance = small_instance();
        instance.demand[1].pop();

        let err = CostEvaluator::naive_lower_bound(&instance).unwrap_err();

        assert!(matches!(err, MpsError::InvalidInput(_)));
    }
}
