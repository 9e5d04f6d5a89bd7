//! Integration tests for rt-sim.

use rt_agent::{FixedSatisfaction, SatisfactionModel};
use rt_core::{AgentId, OrgConfig, Role, RoleCounts, SimRng, Tick};

use crate::{ModelBuilder, NoopObserver, OrganizationModel, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(managers: usize, senior: usize, junior: usize) -> OrgConfig {
    OrgConfig {
        num_managers:          managers,
        num_senior:            senior,
        num_junior:            junior,
        seed:                  42,
        total_steps:           10,
        output_interval_steps: 1,
    }
}

fn fixed_model(
    managers:     usize,
    senior:       usize,
    junior:       usize,
    satisfaction: f64,
) -> OrganizationModel<FixedSatisfaction> {
    ModelBuilder::new(test_config(managers, senior, junior))
        .satisfaction_model(FixedSatisfaction(satisfaction))
        .build()
}

// ── Seeding ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seeding_tests {
    use super::*;

    #[test]
    fn seeds_requested_headcounts() {
        let model = ModelBuilder::new(test_config(3, 4, 5)).build();
        assert_eq!(model.agent_count(), 12);
        assert_eq!(model.role_counts(), RoleCounts::new(3, 4, 5));
        assert_eq!(model.steps(), Tick::ZERO);
    }

    #[test]
    fn ids_follow_role_order() {
        let model = ModelBuilder::new(test_config(2, 1, 2)).build();
        let roles: Vec<(u64, Role)> = model.agents().map(|e| (e.id().0, e.role())).collect();
        assert_eq!(
            roles,
            vec![
                (0, Role::Manager),
                (1, Role::Manager),
                (2, Role::Senior),
                (3, Role::Junior),
                (4, Role::Junior),
            ]
        );
    }

    #[test]
    fn new_uses_default_settings() {
        let model = OrganizationModel::new(1, 2, 3);
        assert_eq!(model.agent_count(), 6);
        assert_eq!(model.config.seed, OrgConfig::default().seed);
    }

    #[test]
    fn zero_headcount_is_legal() {
        let mut model = ModelBuilder::new(test_config(0, 0, 0)).build();
        assert_eq!(model.agent_count(), 0);
        model.step().unwrap();
        assert_eq!(model.agent_count(), 0);
        assert_eq!(model.steps(), Tick(1));
    }

    #[test]
    fn injected_rng_overrides_seed() {
        let a = ModelBuilder::new(test_config(2, 2, 2)).rng(SimRng::new(9)).build();
        let b = ModelBuilder::new(test_config(2, 2, 2)).rng(SimRng::new(9)).build();
        let c = ModelBuilder::new(test_config(2, 2, 2)).rng(SimRng::new(10)).build();
        assert_eq!(a.agent_snapshots(), b.agent_snapshots());
        assert_ne!(a.agent_snapshots(), c.agent_snapshots());
    }
}

// ── Replacement hiring ────────────────────────────────────────────────────────

#[cfg(test)]
mod hire_tests {
    use super::*;

    #[test]
    fn replacement_id_is_max_plus_one() {
        let mut model = ModelBuilder::new(test_config(1, 1, 1)).build();
        let id = model.hire_replacement(Role::Senior).unwrap();
        assert_eq!(id, AgentId(3));
        assert_eq!(model.agent(id).map(|e| e.role()), Some(Role::Senior));
        assert_eq!(model.agent(id).map(|e| e.tenure()), Some(0));
        assert_eq!(model.agent_count(), 4);
    }

    #[test]
    fn empty_population_is_an_error() {
        let mut model = ModelBuilder::new(test_config(0, 0, 0)).build();
        let err = model.hire_replacement(Role::Junior).unwrap_err();
        assert!(matches!(err, SimError::EmptyPopulation));
        assert_eq!(model.agent_count(), 0);
    }
}

// ── Step invariants ───────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    use rt_agent::Employee;

    use super::*;

    #[test]
    fn population_size_is_constant() {
        let mut model = ModelBuilder::new(test_config(5, 20, 50)).build();
        for _ in 0..50 {
            let before = model.agent_count();
            model.step().unwrap();
            assert_eq!(model.agent_count(), before);
        }
        assert_eq!(model.role_counts(), RoleCounts::new(5, 20, 50));
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut model = ModelBuilder::new(test_config(3, 10, 20)).build();
        let mut seen: HashSet<AgentId> = model.agent_ids().collect();
        let mut high_water = model.agent_ids().max().unwrap();

        for _ in 0..40 {
            model.step().unwrap();
            let mut fresh: Vec<AgentId> = model.agent_ids().filter(|id| !seen.contains(id)).collect();
            fresh.sort_unstable();
            for id in fresh {
                assert!(id > high_water, "{id} not above {high_water}");
                high_water = id;
                seen.insert(id);
            }
        }
    }

    #[test]
    fn satisfaction_stays_in_bounds() {
        let mut model = ModelBuilder::new(test_config(5, 20, 50)).build();
        for _ in 0..30 {
            model.step().unwrap();
            assert!(model.agents().all(|e| (0.0..=1.0).contains(&e.satisfaction())));
        }
    }

    #[test]
    fn salaries_never_decrease() {
        let mut model = ModelBuilder::new(test_config(5, 20, 50)).build();
        for _ in 0..30 {
            let before: HashMap<AgentId, f64> = model.agents().map(|e| (e.id(), e.salary())).collect();
            model.step().unwrap();
            for e in model.agents() {
                if let Some(&old) = before.get(&e.id()) {
                    assert!(e.salary() >= old);
                }
            }
        }
    }

    #[test]
    fn replacements_keep_role_and_are_not_visited() {
        // Everyone leaves every step: the whole population turns over, each
        // replacement keeps its predecessor's role and still has tenure 0.
        let mut model = fixed_model(2, 3, 4, 0.0);
        let before_ids: HashSet<AgentId> = model.agent_ids().collect();
        let before_roles = model.role_counts();

        model.step().unwrap();

        assert_eq!(model.role_counts(), before_roles);
        assert!(model.agent_ids().all(|id| !before_ids.contains(&id)));
        assert!(model.agents().all(|e| e.tenure() == 0));
        // Exactly nine hires, ids 9..=17: no replacement was activated.
        assert_eq!(model.agent_ids().min(), Some(AgentId(9)));
        assert_eq!(model.agent_ids().max(), Some(AgentId(17)));
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed: u64| {
            let mut model = ModelBuilder::new(OrgConfig { seed, ..test_config(3, 6, 9) }).build();
            model.run_steps(20, &mut NoopObserver).unwrap();
            model.agent_snapshots()
        };
        assert_eq!(run(5), run(5));
    }

    /// Scores 1.0 and logs every agent it is asked to score.
    struct ActivationLog(Arc<Mutex<Vec<AgentId>>>);

    impl SatisfactionModel for ActivationLog {
        fn score(&self, e: &Employee, _rng: &mut SimRng) -> f64 {
            self.0.lock().unwrap().push(e.id());
            1.0
        }
    }

    fn activation_order(seed: u64) -> Vec<AgentId> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut model = ModelBuilder::new(OrgConfig { seed, ..test_config(2, 8, 10) })
            .satisfaction_model(ActivationLog(Arc::clone(&log)))
            .build();
        // Seeding scores every hire in id order; only the step matters here.
        log.lock().unwrap().clear();
        model.step().unwrap();
        log.lock().unwrap().clone()
    }

    #[test]
    fn activation_order_is_shuffled() {
        let order = activation_order(42);
        let ascending: Vec<AgentId> = (0..20).map(AgentId).collect();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ascending, "every agent acts exactly once");
        assert_ne!(order, ascending, "agents must not act in id order");
        assert_eq!(order, activation_order(42));
        assert_ne!(order, activation_order(43));
    }

    #[test]
    fn step_counter_advances() {
        let mut model = fixed_model(1, 1, 1, 1.0);
        model.step().unwrap();
        model.step().unwrap();
        assert_eq!(model.steps(), Tick(2));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn loyal_manager_gets_two_raises_in_four_steps() {
        let mut model = fixed_model(1, 0, 0, 1.0);
        let initial = model.agent(AgentId(0)).cloned().unwrap();

        for _ in 0..4 {
            model.step().unwrap();
        }

        let e = model.agent(AgentId(0)).unwrap();
        assert_eq!(model.agent_count(), 1);
        assert_eq!(e.tenure(), 4);
        let expected_salary = initial.salary() * 1.05 * 1.05;
        assert!((e.salary() - expected_salary).abs() < 1e-6);
        let expected_growth = (initial.growth_opportunity() + 0.2).min(1.0);
        assert!((e.growth_opportunity() - expected_growth).abs() < 1e-12);
    }

    #[test]
    fn unhappy_junior_is_replaced_in_one_step() {
        let mut model = fixed_model(0, 0, 1, 0.0);
        model.step().unwrap();

        assert_eq!(model.agent_count(), 1);
        assert!(model.agent(AgentId(0)).is_none());
        let e = model.agents().next().unwrap();
        assert_eq!(e.role(), Role::Junior);
        assert_eq!(e.tenure(), 0);
        assert_eq!(e.id(), AgentId(1));
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics_tests {
    use super::*;
    use crate::Metrics;

    #[test]
    fn empty_population_metrics_are_zero() {
        let model = ModelBuilder::new(test_config(0, 0, 0)).build();
        assert_eq!(model.retention_rate(), 0.0);
        assert_eq!(model.average_satisfaction(), 0.0);
        assert_eq!(model.metrics(), Metrics::default());
    }

    #[test]
    fn fresh_population_has_zero_retention() {
        let model = ModelBuilder::new(test_config(2, 2, 2)).build();
        assert_eq!(model.retention_rate(), 0.0);
    }

    #[test]
    fn full_retention_after_a_loyal_step() {
        let mut model = fixed_model(2, 2, 2, 1.0);
        model.step().unwrap();
        assert_eq!(model.retention_rate(), 1.0);
        assert_eq!(model.average_satisfaction(), 1.0);
    }

    #[test]
    fn metrics_agree_with_individual_accessors() {
        let mut model = ModelBuilder::new(test_config(4, 8, 16)).build();
        model.run_steps(5, &mut NoopObserver).unwrap();
        let m = model.metrics();
        assert_eq!(m.retention_rate, model.retention_rate());
        assert!((m.average_satisfaction - model.average_satisfaction()).abs() < 1e-12);
        assert_eq!(m.headcount, model.role_counts());
        assert_eq!(m.total(), model.agent_count());
    }

    #[test]
    fn retention_counts_tenure_zero_only() {
        // Half the organization leaves on every step.
        struct SplitByRole;
        impl SatisfactionModel for SplitByRole {
            fn score(&self, e: &rt_agent::Employee, _rng: &mut SimRng) -> f64 {
                if e.role() == Role::Junior { 0.0 } else { 1.0 }
            }
        }
        let mut model = ModelBuilder::new(test_config(0, 3, 3))
            .satisfaction_model(SplitByRole)
            .build();
        model.step().unwrap();
        assert!((model.retention_rate() - 0.5).abs() < 1e-12);
    }
}

// ── Collection and observers ──────────────────────────────────────────────────

#[cfg(test)]
mod collection_tests {
    use super::*;
    use crate::{AgentRecord, ModelRecord};

    #[test]
    fn rows_reflect_pre_step_state() {
        let mut model = fixed_model(1, 1, 1, 1.0);
        model.run_steps(3, &mut NoopObserver).unwrap();

        let rows = model.collector().model_rows();
        assert_eq!(rows.len(), 3);
        // Step 0 sees the freshly seeded population.
        assert_eq!(rows[0].step, Tick(0));
        assert_eq!(rows[0].retention_rate, 0.0);
        // Nobody leaves, so every later step starts fully retained.
        assert_eq!(rows[1].retention_rate, 1.0);
        assert_eq!(rows[2].headcount(), RoleCounts::new(1, 1, 1));

        let agent_rows: Vec<_> = model.collector().agent_rows_at(Tick(2)).collect();
        assert_eq!(agent_rows.len(), 3);
        assert!(agent_rows.iter().all(|r| r.tenure == 2));
    }

    #[test]
    fn step_collects_too() {
        let mut model = fixed_model(1, 0, 0, 1.0);
        model.step().unwrap();
        assert_eq!(model.collector().model_rows().len(), 1);
        assert_eq!(model.collector().agent_rows().len(), 1);
    }

    #[test]
    fn history_grows_by_population_per_step() {
        let mut model = fixed_model(1, 2, 3, 0.5);
        for n in 1..=5 {
            model.step().unwrap();
            assert_eq!(model.collector().model_rows().len(), n);
            assert_eq!(model.collector().agent_rows().len(), 6 * n);
        }
    }

    #[test]
    fn latest_only_history_stays_bounded() {
        let mut model = ModelBuilder::new(test_config(1, 2, 3))
            .keep_history(false)
            .build();
        model.run_steps(5, &mut NoopObserver).unwrap();

        let collector = model.collector();
        assert_eq!(collector.model_rows().len(), 1);
        assert_eq!(collector.latest().map(|r| r.step), Some(Tick(4)));
        assert_eq!(collector.agent_rows().len(), 6);
        assert_eq!(collector.latest_agent_rows().len(), 6);
        assert!(collector.agent_rows().iter().all(|r| r.step == Tick(4)));
        assert!(model.info().to_string().contains("Step: 5"));
    }

    #[derive(Default)]
    struct Recorder {
        starts:     Vec<Tick>,
        ends:       Vec<(Tick, usize)>,
        collected:  Vec<(ModelRecord, usize)>,
        run_end:    Option<Tick>,
    }

    impl SimObserver for Recorder {
        fn on_step_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_collect(&mut self, record: &ModelRecord, agents: &[AgentRecord]) {
            self.collected.push((*record, agents.len()));
        }
        fn on_step_end(&mut self, tick: Tick, departures: usize) {
            self.ends.push((tick, departures));
        }
        fn on_run_end(&mut self, final_tick: Tick) {
            self.run_end = Some(final_tick);
        }
    }

    #[test]
    fn run_fires_hooks_and_stops_at_end_tick() {
        let mut model = fixed_model(1, 2, 3, 0.0);
        let mut rec = Recorder::default();
        model.run(&mut rec).unwrap();

        assert_eq!(model.steps(), Tick(10));
        assert_eq!(rec.starts.len(), 10);
        assert_eq!(rec.run_end, Some(Tick(10)));
        // Everyone leaves each step.
        assert!(rec.ends.iter().all(|&(_, d)| d == 6));
        assert_eq!(rec.collected.len(), 10);
        assert!(rec.collected.iter().all(|&(_, n)| n == 6));
    }

    #[test]
    fn output_interval_throttles_collect_hook() {
        let config = OrgConfig { output_interval_steps: 4, ..test_config(1, 1, 1) };
        let mut model = ModelBuilder::new(config).build();
        let mut rec = Recorder::default();
        model.run(&mut rec).unwrap();

        let steps: Vec<Tick> = rec.collected.iter().map(|(r, _)| r.step).collect();
        assert_eq!(steps, vec![Tick(0), Tick(4), Tick(8)]);
        // In-memory history is unaffected.
        assert_eq!(model.collector().model_rows().len(), 10);
    }

    #[test]
    fn zero_interval_disables_collect_hook() {
        let config = OrgConfig { output_interval_steps: 0, ..test_config(1, 1, 1) };
        let mut model = ModelBuilder::new(config).build();
        let mut rec = Recorder::default();
        model.run(&mut rec).unwrap();
        assert!(rec.collected.is_empty());
    }

    #[test]
    fn info_renders_na_before_first_step() {
        let model = fixed_model(1, 1, 1, 1.0);
        let text = model.info().to_string();
        assert!(text.contains("Step: 0"));
        assert!(text.contains("Total Employees: 3"));
        assert!(text.contains("Retention Rate: N/A"));
    }

    #[test]
    fn info_renders_latest_row() {
        let mut model = fixed_model(1, 1, 1, 1.0);
        model.run_steps(2, &mut NoopObserver).unwrap();
        let text = model.info().to_string();
        assert!(text.contains("Step: 2"));
        assert!(text.contains("Retention Rate: 1.00"));
        assert!(text.contains("Avg Satisfaction: 1.00"));
    }
}
