//! 規劃問題實例

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MpsError, Result};

/// 每週產能上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCapacity {
    /// 每週最大組裝數量（所有產品合計）
    pub max_assemblies: u32,

    /// 每週最大測試時間
    pub max_test_time: Decimal,

    /// 每週最大體積（套用於當週產出量）
    pub storage_capacity: Decimal,
}

impl WeeklyCapacity {
    /// 創建新的產能上限
    pub fn new(max_assemblies: u32, max_test_time: Decimal, storage_capacity: Decimal) -> Self {
        Self {
            max_assemblies,
            max_test_time,
            storage_capacity,
        }
    }
}

/// 規劃問題實例
///
/// 矩陣皆為週別優先：`demand[w][p]` 為第 `w` 週產品 `p` 的需求。
/// 產品數量由矩陣寬度推導，不寫死。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningInstance {
    /// 計劃週數
    pub weeks: usize,

    /// 每週需求
    pub demand: Vec<Vec<u32>>,

    /// 單位生產成本
    pub producing_price: Vec<Vec<Decimal>>,

    /// 週末庫存的單位持有成本
    pub storage_price: Vec<Vec<Decimal>>,

    /// 每單位測試時間
    pub test_time: Vec<Decimal>,

    /// 每單位體積
    pub volume: Vec<Decimal>,

    /// 每週產能上限
    pub capacity: WeeklyCapacity,
}

impl PlanningInstance {
    /// 創建新的規劃實例（不做驗證，見 [`PlanningInstance::validate`]）
    pub fn new(
        weeks: usize,
        demand: Vec<Vec<u32>>,
        producing_price: Vec<Vec<Decimal>>,
        storage_price: Vec<Vec<Decimal>>,
        test_time: Vec<Decimal>,
        volume: Vec<Decimal>,
        capacity: WeeklyCapacity,
    ) -> Self {
        Self {
            weeks,
            demand,
            producing_price,
            storage_price,
            test_time,
            volume,
            capacity,
        }
    }

    /// 產品數量（需求矩陣寬度）
    pub fn num_products(&self) -> usize {
        self.demand.first().map(Vec::len).unwrap_or(0)
    }

    /// 取得需求；超出範圍視為 0
    pub fn demand_at(&self, week: usize, product: usize) -> u32 {
        self.demand
            .get(week)
            .and_then(|row| row.get(product))
            .copied()
            .unwrap_or(0)
    }

    /// 檢查維度一致性與非負性
    pub fn validate(&self) -> Result<()> {
        if self.weeks == 0 {
            return Err(MpsError::InvalidInput("週數必須至少為 1".to_string()));
        }

        let products = self.num_products();
        if products == 0 {
            return Err(MpsError::InvalidInput("產品數量必須至少為 1".to_string()));
        }

        check_rows("demand", self.demand.len(), self.weeks)?;
        check_rows("producing_price", self.producing_price.len(), self.weeks)?;
        check_rows("storage_price", self.storage_price.len(), self.weeks)?;

        for (week, row) in self.demand.iter().enumerate() {
            check_width("demand", week, row.len(), products)?;
        }
        check_matrix("producing_price", &self.producing_price, products)?;
        check_matrix("storage_price", &self.storage_price, products)?;

        check_vector("test_time", &self.test_time, products)?;
        check_vector("volume", &self.volume, products)?;

        if self.capacity.max_test_time < Decimal::ZERO {
            return Err(MpsError::InvalidInput(format!(
                "max_test_time 不可為負值: {}",
                self.capacity.max_test_time
            )));
        }
        if self.capacity.storage_capacity < Decimal::ZERO {
            return Err(MpsError::InvalidInput(format!(
                "storage_capacity 不可為負值: {}",
                self.capacity.storage_capacity
            )));
        }

        Ok(())
    }
}

fn check_rows(name: &str, rows: usize, weeks: usize) -> Result<()> {
    if rows != weeks {
        return Err(MpsError::InvalidInput(format!(
            "{} 有 {} 列，但週數為 {}",
            name, rows, weeks
        )));
    }
    Ok(())
}

fn check_width(name: &str, week: usize, width: usize, products: usize) -> Result<()> {
    if width != products {
        return Err(MpsError::InvalidInput(format!(
            "{} 第 {} 列有 {} 欄，但產品數量為 {}",
            name, week, width, products
        )));
    }
    Ok(())
}

fn check_matrix(name: &str, matrix: &[Vec<Decimal>], products: usize) -> Result<()> {
    for (week, row) in matrix.iter().enumerate() {
        check_width(name, week, row.len(), products)?;
        if let Some(product) = row.iter().position(|v| *v < Decimal::ZERO) {
            return Err(MpsError::InvalidInput(format!(
                "{}[{}][{}] 不可為負值: {}",
                name, week, product, row[product]
            )));
        }
    }
    Ok(())
}

fn check_vector(name: &str, values: &[Decimal], products: usize) -> Result<()> {
    if values.len() != products {
        return Err(MpsError::InvalidInput(format!(
            "{} 長度為 {}，但產品數量為 {}",
            name,
            values.len(),
            products
        )));
    }
    if let Some(product) = values.iter().position(|v| *v < Decimal::ZERO) {
        return Err(MpsError::InvalidInput(format!(
            "{}[{}] 不可為負值: {}",
            name, product, values[product]
        )));
    }
    Ok(())
}
