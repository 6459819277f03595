//! # MPS Core
//!
//! 主生產排程（週別 × 產品）的核心資料模型與類型定義

pub mod config;
pub mod instance;
pub mod plan;

// Re-export 主要類型
pub use config::SolverConfig;
pub use instance::{PlanningInstance, WeeklyCapacity};
pub use plan::{Schedule, ScheduleLayout};

/// MPS 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MpsError {
    /// 輸入維度不一致或數值不合法
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    /// 求解器內部失敗（與「無可行解」不同）
    #[error("求解器失敗: {0}")]
    SolverFailure(String),
}

pub type Result<T> = std::result::Result<T, MpsError>;
