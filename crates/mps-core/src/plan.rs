//! 生產排程模型

use serde::{Deserialize, Serialize};

use crate::{MpsError, Result};

/// 排程矩陣的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleLayout {
    /// 週別 × 產品（預設）
    WeekMajor,
    /// 產品 × 週別（轉置）
    ProductMajor,
}

/// 每週每產品的整數生產數量
///
/// 矩陣每列長度相同；建構與反序列化時檢查。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct Schedule {
    layout: ScheduleLayout,
    rows: Vec<Vec<u32>>,
}

#[derive(Deserialize)]
struct RawSchedule {
    layout: ScheduleLayout,
    rows: Vec<Vec<u32>>,
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = MpsError;

    fn try_from(raw: RawSchedule) -> Result<Self> {
        check_rectangular(&raw.rows)?;
        Ok(Self {
            layout: raw.layout,
            rows: raw.rows,
        })
    }
}

impl Schedule {
    /// 從週別優先矩陣創建排程
    ///
    /// 各週列長度不一致時返回 [`MpsError::InvalidInput`]。
    pub fn week_major(rows: Vec<Vec<u32>>) -> Result<Self> {
        check_rectangular(&rows)?;
        Ok(Self {
            layout: ScheduleLayout::WeekMajor,
            rows,
        })
    }

    /// 排程方向
    pub fn layout(&self) -> ScheduleLayout {
        self.layout
    }

    /// 依目前方向的原始矩陣
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// 取出原始矩陣
    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows
    }

    /// 週數
    pub fn weeks(&self) -> usize {
        match self.layout {
            ScheduleLayout::WeekMajor => self.rows.len(),
            ScheduleLayout::ProductMajor => self.rows.first().map(Vec::len).unwrap_or(0),
        }
    }

    /// 產品數量
    pub fn products(&self) -> usize {
        match self.layout {
            ScheduleLayout::WeekMajor => self.rows.first().map(Vec::len).unwrap_or(0),
            ScheduleLayout::ProductMajor => self.rows.len(),
        }
    }

    /// 取得第 `week` 週產品 `product` 的數量（不受方向影響）
    pub fn quantity(&self, week: usize, product: usize) -> Option<u32> {
        let (row, col) = match self.layout {
            ScheduleLayout::WeekMajor => (week, product),
            ScheduleLayout::ProductMajor => (product, week),
        };
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// 轉置矩陣並切換方向
    pub fn transpose(&self) -> Self {
        let width = self.rows.first().map(Vec::len).unwrap_or(0);
        let rows = (0..width)
            .map(|col| self.rows.iter().map(|row| row[col]).collect())
            .collect();

        Self {
            layout: match self.layout {
                ScheduleLayout::WeekMajor => ScheduleLayout::ProductMajor,
                ScheduleLayout::ProductMajor => ScheduleLayout::WeekMajor,
            },
            rows,
        }
    }

    /// 轉換為指定方向
    pub fn with_layout(self, layout: ScheduleLayout) -> Self {
        if self.layout == layout {
            self
        } else {
            self.transpose()
        }
    }
}

fn check_rectangular(rows: &[Vec<u32>]) -> Result<()> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    match rows.iter().position(|row| row.len() != width) {
        Some(index) => Err(MpsError::InvalidInput(format!(
            "排程第 {} 列有 {} 欄，但第 0 列有 {} 欄",
            index,
            rows[index].len(),
            width
        ))),
        None => Ok(()),
    }
}
