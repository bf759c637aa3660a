//! Property-based tests for the allocation core.
//!
//! These cover the invariants of both components over generated snapshots
//! and option lists: bundle sizes and uniqueness, determinism, and the
//! optimality and monotonicity of the cost optimizer.

use std::collections::HashSet;

use proptest::prelude::*;

use super::{optimize_cost, solve_combination, Demand, OptimizeOutcome, StayOption};
use crate::RoomRecord;

const TYPES: &[&str] = &["Standard", "Deluxe", "Suite", "VIP"];

fn snapshot_strategy() -> impl Strategy<Value = Vec<RoomRecord>> {
    prop::collection::vec((0..TYPES.len(), any::<bool>(), 50u32..2_000), 0..40).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (ty, available, price))| {
                    RoomRecord::new(format!("R{i:03}"), TYPES[ty], f64::from(price))
                        .unwrap()
                        .with_available(available)
                })
                .collect()
        },
    )
}

fn options_strategy() -> impl Strategy<Value = Vec<StayOption>> {
    prop::collection::vec((1u32..500, 0u32..6), 1..5).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (price, cap))| {
                StayOption::new(format!("O{i}"), "Standard", f64::from(price), cap).unwrap()
            })
            .collect()
    })
}

fn available_of(rooms: &[RoomRecord], ty: &str) -> u32 {
    u32::try_from(rooms.iter().filter(|r| r.is_available() && r.is_type(ty)).count()).unwrap()
}

/// Cheapest cover by trying every day split.
fn brute_force_min(options: &[StayOption], days: u32) -> Option<f64> {
    fn go(options: &[StayOption], days: u32) -> Option<f64> {
        match options.split_first() {
            None => (days == 0).then_some(0.0),
            Some((first, rest)) => (0..=first.max_days.min(days))
                .filter_map(|k| go(rest, days - k).map(|c| c + f64::from(k) * first.price_per_day))
                .reduce(f64::min),
        }
    }
    go(options, days)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Distinct types with enough rooms each are always satisfiable
    #[test]
    fn distinct_types_with_enough_rooms_are_found(
        rooms in snapshot_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let mut demand = Demand::new();
        let mut seen = HashSet::new();
        for pick in picks {
            let ty = TYPES[pick.index(TYPES.len())];
            let available = available_of(&rooms, ty);
            if available > 0 && seen.insert(ty) {
                demand = demand.with(ty, 1 + pick.index(available as usize) as u32);
            }
        }
        prop_assume!(!demand.is_empty());

        let solution = solve_combination(&demand, &rooms).unwrap().into_solution();
        prop_assert!(solution.is_some());
        let solution = solution.unwrap();

        prop_assert_eq!(solution.len(), demand.total_quantity());
        let ids: HashSet<_> = solution.room_ids().into_iter().collect();
        prop_assert_eq!(ids.len(), solution.len());
        for room in solution.rooms() {
            prop_assert!(room.is_available());
        }
        for (group, entry) in solution.groups().iter().zip(demand.entries()) {
            prop_assert_eq!(group.rooms.len(), entry.quantity as usize);
            prop_assert!(group.rooms.iter().all(|r| r.is_type(&entry.room_type)));
        }
    }

    // Asking for more rooms of a type than exist is infeasible
    #[test]
    fn over_demand_is_infeasible(rooms in snapshot_strategy(), ty in 0..TYPES.len(), extra in 1u32..3) {
        let ty = TYPES[ty];
        let demand = Demand::new().with(ty, available_of(&rooms, ty) + extra);
        let result = solve_combination(&demand, &rooms).unwrap();
        prop_assert!(!result.is_found());
    }

    // Same snapshot and demand always give the same bundle
    #[test]
    fn search_is_deterministic(rooms in snapshot_strategy(), a in 0u32..4, b in 0u32..4) {
        let demand = Demand::new().with("Standard", a.max(1)).with("Deluxe", b.max(1));
        let first = solve_combination(&demand, &rooms).unwrap();
        let second = solve_combination(&demand, &rooms).unwrap();
        prop_assert_eq!(first, second);
    }

    // The optimizer matches exhaustive search and respects caps
    #[test]
    fn optimizer_is_minimal(options in options_strategy(), days in 0u32..12) {
        let outcome = optimize_cost(&options, days);
        let capacity: u32 = options.iter().map(|o| o.max_days).sum();

        match outcome {
            OptimizeOutcome::Allocated(allocation) => {
                prop_assert!(days <= capacity);
                prop_assert_eq!(allocation.total_days(), days);
                for assignment in &allocation.assignments {
                    let option = options.iter().find(|o| o.room_id == assignment.room_id).unwrap();
                    prop_assert!(assignment.days <= option.max_days);
                    prop_assert!(assignment.days > 0);
                }
                let expected = brute_force_min(&options, days).unwrap();
                prop_assert!((allocation.total_cost - expected).abs() < 1e-6);
            }
            OptimizeOutcome::Infeasible { requested_days, capacity: reported } => {
                prop_assert!(days > capacity);
                prop_assert_eq!(requested_days, days);
                prop_assert_eq!(reported, u64::from(capacity));
            }
        }
    }

    // More days never cost less
    #[test]
    fn optimizer_is_monotone(options in options_strategy(), days in 0u32..11) {
        let shorter = optimize_cost(&options, days);
        let longer = optimize_cost(&options, days + 1);
        if let (Some(a), Some(b)) = (shorter.allocation(), longer.allocation()) {
            prop_assert!(a.total_cost <= b.total_cost + 1e-9);
        }
    }
}
