//! 集成測試

use mps::*;
use rstest::rstest;

fn dec(values: &[i64]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}

/// 4 週 × 3 產品的電腦組裝範例
fn computer_assembly() -> PlanningInstance {
    serde_json::from_str(include_str!("../demos/computer_assembly.json")).unwrap()
}

fn as_signed(inventory: &[Vec<u32>]) -> Vec<Vec<i64>> {
    inventory
        .iter()
        .map(|row| row.iter().map(|&v| i64::from(v)).collect())
        .collect()
}

#[test]
fn test_example_instance_schedule() {
    let instance = computer_assembly();

    let result = solve(&instance, false).unwrap();

    assert!(result.is_feasible());
    assert_eq!(result.message, "The solution was successfully found!");

    let inventory = result.inventory.clone().unwrap();
    let (objective, schedule, _) = result.into_parts();
    let objective = objective.unwrap();
    let schedule = schedule.unwrap();

    // 4 × 3 非負整數排程
    assert_eq!(schedule.len(), 4);
    assert!(schedule.iter().all(|row| row.len() == 3));

    // 目標值等於排程與庫存的實際成本，且介於下界與批對批成本之間
    let cost = CostEvaluator::total_cost(&instance, &schedule, &as_signed(&inventory)).unwrap();
    assert_eq!(objective, cost);
    assert!(objective >= CostEvaluator::naive_lower_bound(&instance).unwrap());
}

#[test]
fn test_example_instance_respects_all_constraints() {
    let instance = computer_assembly();

    let result = solve(&instance, false).unwrap();
    let production = result.schedule.unwrap().into_rows();
    let inventory = as_signed(&result.inventory.unwrap());

    for week in 0..instance.weeks {
        for product in 0..3 {
            let demand = i64::from(instance.demand[week][product]);
            let previous = if week == 0 { 0 } else { inventory[week - 1][product] };

            if demand == 0 {
                assert_eq!(inventory[week][product], 0);
            }
            assert!(
                i64::from(production[week][product]) + previous >= demand + inventory[week][product],
                "coverage fails at week {week}, product {product}"
            );
        }
    }

    let usage = ResourceUsage::weekly(&instance, &production).unwrap();
    for week_usage in &usage {
        assert!(week_usage.assemblies <= 50);
        assert!(week_usage.test_time <= Decimal::from(75));
        assert!(week_usage.volume <= Decimal::from(500));
    }

    assert!(FeasibilityChecker::check(&instance, &production, &inventory)
        .unwrap()
        .is_empty());
}

#[test]
fn test_optimum_beats_hand_built_schedules() {
    let instance = computer_assembly();
    let objective = solve(&instance, false).unwrap().objective.unwrap();

    // 批對批
    let lot_for_lot = instance.demand.clone();
    // 第 1 週（單價較低）提前生產產品 0 供第 2 週使用
    let build_ahead = vec![vec![5, 3, 2], vec![15, 4, 3], vec![0, 6, 4], vec![10, 7, 5]];

    for production in [lot_for_lot, build_ahead] {
        let inventory = InventoryProjector::project(&instance, &production).unwrap();
        assert!(FeasibilityChecker::check(&instance, &production, &inventory)
            .unwrap()
            .is_empty());

        let cost = CostEvaluator::total_cost(&instance, &production, &inventory).unwrap();
        assert!(objective <= cost, "objective {objective} > hand-built {cost}");
    }
}

#[test]
fn test_solution_is_reproducible() {
    let instance = computer_assembly();

    let first = solve(&instance, false).unwrap();
    let second = solve(&instance, false).unwrap();

    assert_eq!(first.objective, second.objective);
}

#[test]
fn test_transpose_consistency() {
    let instance = computer_assembly();

    let (objective, schedule, message) = solve(&instance, false).unwrap().into_parts();
    let (t_objective, t_schedule, t_message) = solve(&instance, true).unwrap().into_parts();

    assert_eq!(objective, t_objective);
    assert_eq!(message, t_message);

    let schedule = schedule.unwrap();
    let t_schedule = t_schedule.unwrap();
    assert_eq!(t_schedule.len(), 3);
    for (week, row) in schedule.iter().enumerate() {
        for (product, &qty) in row.iter().enumerate() {
            assert_eq!(t_schedule[product][week], qty);
        }
    }
}

#[rstest]
#[case::no_assemblies(|i: &mut PlanningInstance| i.capacity.max_assemblies = 0)]
#[case::no_test_time(|i: &mut PlanningInstance| i.capacity.max_test_time = Decimal::ZERO)]
#[case::demand_over_capacity(|i: &mut PlanningInstance| i.demand[0] = vec![30, 30, 0])]
fn test_infeasible_instances(#[case] mutate: fn(&mut PlanningInstance)) {
    let mut instance = computer_assembly();
    mutate(&mut instance);

    let (objective, schedule, message) = solve(&instance, false).unwrap().into_parts();

    assert_eq!(objective, None);
    assert_eq!(schedule, None);
    assert_eq!(message, "Unable to find the solution!");
}

#[rstest]
#[case::ragged_demand(|i: &mut PlanningInstance| i.demand[2].push(1))]
#[case::missing_week(|i: &mut PlanningInstance| { i.storage_price.pop(); })]
#[case::weeks_mismatch(|i: &mut PlanningInstance| i.weeks = 5)]
#[case::negative_price(|i: &mut PlanningInstance| i.producing_price[0][0] = Decimal::from(-3))]
fn test_malformed_input_is_an_error(#[case] mutate: fn(&mut PlanningInstance)) {
    let mut instance = computer_assembly();
    mutate(&mut instance);

    assert!(matches!(
        solve(&instance, false),
        Err(MpsError::InvalidInput(_))
    ));
}

#[test]
fn test_product_count_follows_matrix_width() {
    // 兩個產品，第 1 週產品 1 無需求
    let instance = PlanningInstance::new(
        3,
        vec![vec![4, 2], vec![6, 0], vec![3, 5]],
        vec![dec(&[9, 14]), dec(&[7, 11]), dec(&[10, 13])],
        vec![dec(&[1, 1]), dec(&[1, 1]), dec(&[1, 1])],
        dec(&[1, 2]),
        dec(&[3, 5]),
        WeeklyCapacity::new(20, Decimal::from(40), Decimal::from(100)),
    );

    let result = Optimizer::new(SolverConfig::default()).solve(&instance, false).unwrap();

    assert!(result.is_feasible());
    assert_eq!(result.inventory.as_ref().unwrap()[1][1], 0);
    let schedule = result.schedule.unwrap();
    assert_eq!(schedule.products(), 2);
    assert_eq!(schedule.weeks(), 3);
}
