//! 整數規劃模型建構

use good_lp::{
    default_solver, variable, Constraint, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use mps_core::{MpsError, PlanningInstance, SolverConfig};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 求解器回傳的整數解（週別優先）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPlan {
    /// 每週生產量
    pub production: Vec<Vec<u32>>,
    /// 每週週末庫存
    pub inventory: Vec<Vec<u32>>,
}

/// 生產排程整數規劃模型
///
/// 變數：
/// - `x[w][p]`：第 w 週產品 p 的生產量（非負整數）
/// - `I[w][p]`：第 w 週週末產品 p 的庫存（非負整數）
///
/// 目標：最小化 Σ 生產單價 × x + Σ 持有單價 × I
pub struct ProductionModel {
    variables: ProblemVariables,
    objective: Expression,
    constraints: Vec<Constraint>,
    produce: Vec<Vec<Variable>>,
    inventory: Vec<Vec<Variable>>,
}

impl ProductionModel {
    /// 驗證實例並建立模型（不求解）
    pub fn build(instance: &PlanningInstance) -> mps_core::Result<Self> {
        instance.validate()?;

        let weeks = instance.weeks;
        let products = instance.num_products();

        let mut variables = ProblemVariables::new();
        let produce: Vec<Vec<Variable>> = (0..weeks)
            .map(|w| {
                (0..products)
                    .map(|p| variables.add(variable().integer().min(0).name(format!("x_{w}_{p}"))))
                    .collect()
            })
            .collect();
        let inventory: Vec<Vec<Variable>> = (0..weeks)
            .map(|w| {
                (0..products)
                    .map(|p| variables.add(variable().integer().min(0).name(format!("I_{w}_{p}"))))
                    .collect()
            })
            .collect();

        let mut model = Self {
            variables,
            objective: Expression::with_capacity(2 * weeks * products),
            constraints: Vec::with_capacity(2 * weeks * products + 3 * weeks),
            produce,
            inventory,
        };

        model.add_objective(instance)?;
        model.add_inventory_balance(instance);
        model.add_demand_coverage(instance);
        model.add_capacity_limits(instance)?;

        Ok(model)
    }

    /// 決策變數數量
    pub fn num_variables(&self) -> usize {
        self.produce.iter().chain(&self.inventory).map(Vec::len).sum()
    }

    /// 約束數量
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    fn add_objective(&mut self, instance: &PlanningInstance) -> mps_core::Result<()> {
        for (w, (x_row, i_row)) in self.produce.iter().zip(&self.inventory).enumerate() {
            for (p, (&x, &inv)) in x_row.iter().zip(i_row).enumerate() {
                let producing = coefficient("producing_price", instance.producing_price[w][p])?;
                let storage = coefficient("storage_price", instance.storage_price[w][p])?;
                self.objective.add_mul(producing, x);
                self.objective.add_mul(storage, inv);
            }
        }
        Ok(())
    }

    /// 庫存遞推
    ///
    /// - 需求為 0：I[w][p] = 0
    /// - 需求非 0 且 w > 0：I[w][p] = x[w][p] - d[w][p] + I[w-1][p]
    /// - 第 0 週：不加遞推式，只受需求覆蓋約束限制
    fn add_inventory_balance(&mut self, instance: &PlanningInstance) {
        for w in 0..instance.weeks {
            for p in 0..instance.num_products() {
                let demand = instance.demand_at(w, p);
                let inv = self.inventory[w][p];

                if demand == 0 {
                    self.constraints.push(Expression::from(inv).eq(0.0));
                } else if w > 0 {
                    // I[w] - x[w] - I[w-1] = -d[w]
                    let mut balance = Expression::from(inv);
                    balance.add_mul(-1.0, self.produce[w][p]);
                    balance.add_mul(-1.0, self.inventory[w - 1][p]);
                    self.constraints.push(balance.eq(-f64::from(demand)));
                }
            }
        }
    }

    /// 需求覆蓋：x[w][p] + 上週庫存 >= d[w][p] + I[w][p]
    fn add_demand_coverage(&mut self, instance: &PlanningInstance) {
        for w in 0..instance.weeks {
            for p in 0..instance.num_products() {
                let mut available = Expression::from(self.produce[w][p]);
                available += self.previous_inventory(w, p);
                available.add_mul(-1.0, self.inventory[w][p]);
                self.constraints
                    .push(available.geq(f64::from(instance.demand_at(w, p))));
            }
        }
    }

    /// 每週組裝數、測試時間、產出體積上限
    fn add_capacity_limits(&mut self, instance: &PlanningInstance) -> mps_core::Result<()> {
        let max_test_time = coefficient("max_test_time", instance.capacity.max_test_time)?;
        let storage_capacity = coefficient("storage_capacity", instance.capacity.storage_capacity)?;
        let test_time = instance
            .test_time
            .iter()
            .map(|&t| coefficient("test_time", t))
            .collect::<mps_core::Result<Vec<f64>>>()?;
        let volume = instance
            .volume
            .iter()
            .map(|&v| coefficient("volume", v))
            .collect::<mps_core::Result<Vec<f64>>>()?;

        for x_row in &self.produce {
            let mut assemblies = Expression::with_capacity(x_row.len());
            let mut testing = Expression::with_capacity(x_row.len());
            let mut produced_volume = Expression::with_capacity(x_row.len());

            for (p, &x) in x_row.iter().enumerate() {
                assemblies.add_mul(1.0, x);
                testing.add_mul(test_time[p], x);
                produced_volume.add_mul(volume[p], x);
            }

            self.constraints
                .push(assemblies.leq(f64::from(instance.capacity.max_assemblies)));
            self.constraints.push(testing.leq(max_test_time));
            self.constraints.push(produced_volume.leq(storage_capacity));
        }

        Ok(())
    }

    /// 上週庫存；第 0 週以常數 0 代替
    fn previous_inventory(&self, week: usize, product: usize) -> Expression {
        match week.checked_sub(1) {
            Some(prev) => Expression::from(self.inventory[prev][product]),
            None => Expression::default(),
        }
    }

    /// 呼叫求解器
    ///
    /// 無可行解時返回 `Ok(None)`；其他求解器錯誤為 [`MpsError::SolverFailure`]。
    pub fn solve(self, config: &SolverConfig) -> mps_core::Result<Option<RawPlan>> {
        let Self {
            variables,
            objective,
            constraints,
            produce,
            inventory,
        } = self;

        let mut problem = variables.minimise(objective).using(default_solver);
        #[cfg(feature = "coin_cbc")]
        problem.set_parameter("log", "0");

        for constraint in constraints {
            problem = problem.with(constraint);
        }

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Ok(None),
            Err(err) => return Err(MpsError::SolverFailure(err.to_string())),
        };

        Ok(Some(RawPlan {
            production: extract(&solution, config, "produce", &produce)?,
            inventory: extract(&solution, config, "inventory", &inventory)?,
        }))
    }
}

/// 取出整數解；超出容差視為求解器失敗
fn extract<S: Solution>(
    solution: &S,
    config: &SolverConfig,
    name: &str,
    vars: &[Vec<Variable>],
) -> mps_core::Result<Vec<Vec<u32>>> {
    vars.iter()
        .enumerate()
        .map(|(w, row)| {
            row.iter()
                .enumerate()
                .map(|(p, &var)| {
                    let value = solution.value(var);
                    config.to_integral(value).ok_or_else(|| {
                        MpsError::SolverFailure(format!(
                            "{}[{}][{}] 不是非負整數: {}",
                            name, w, p, value
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

/// Decimal 係數轉為求解器使用的 f64
fn coefficient(name: &str, value: Decimal) -> mps_core::Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| MpsError::InvalidInput(format!("{} 無法轉為浮點數: {}", name, value)))
}
