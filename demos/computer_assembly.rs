//! 電腦組裝排程示例（4 週 × 3 產品）

use mps::PlanningInstance;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let instance: PlanningInstance =
        serde_json::from_str(include_str!("computer_assembly.json"))?;

    let (objective, schedule, message) = mps::solve(&instance, true)?.into_parts();

    let objective = objective.map_or_else(|| "None".to_string(), |v| v.to_string());
    let schedule = schedule.map_or_else(|| "None".to_string(), |rows| format!("{:?}", rows));
    println!("{}     :    {}        :  {}", objective, schedule, message);

    Ok(())
}
