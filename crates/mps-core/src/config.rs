//! 求解器配置

use serde::{Deserialize, Serialize};

/// 預設整數容差
pub const DEFAULT_INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// 求解器參數配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// 求解器輸出的整數變數允許偏離最近整數的最大值
    pub integrality_tolerance: f64,

    /// 是否在取出解後重新檢查所有約束
    /// - true: 任何違反都視為求解器失敗（預設）
    /// - false: 直接回傳求解器的解
    pub verify_solution: bool,
}

impl SolverConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            integrality_tolerance: DEFAULT_INTEGRALITY_TOLERANCE,
            verify_solution: true,
        }
    }

    /// 建構器模式：設置整數容差
    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置是否驗證解
    pub fn with_verify_solution(mut self, verify: bool) -> Self {
        self.verify_solution = verify;
        self
    }

    /// 將求解器輸出的浮點值轉為非負整數
    ///
    /// 超出容差或為負值時返回 `None`。
    pub fn to_integral(&self, value: f64) -> Option<u32> {
        let rounded = value.round();
        if !rounded.is_finite() || (value - rounded).abs() > self.integrality_tolerance {
            return None;
        }
        if rounded < 0.0 || rounded > f64::from(u32::MAX) {
            return None;
        }
        Some(rounded as u32)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
