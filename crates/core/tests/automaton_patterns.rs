//! Life-like automaton pattern tests
//!
//! Classic still lifes, oscillators and spaceships under the Conway rule, plus
//! the alternate rules and the one-dimensional automaton.

use cellfire_core::{
    AutomatonEngine, BoundaryMode, CellRule, DensityRule, ExactlyOneRule, GridConfig, Initializer,
    LifeLikeRule, LifeRule, LifeState, LineAutomaton, SeededSource, Simulation,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Grid of `rows × cols` dead cells with `alive` cells set
fn pattern(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Vec<Vec<LifeState>> {
    let mut state = vec![vec![LifeState::Dead; cols]; rows];
    for &(r, c) in alive {
        state[r][c] = LifeState::Alive;
    }
    state
}

fn engine<R: CellRule>(
    state: Vec<Vec<LifeState>>,
    rule: R,
    boundary: BoundaryMode,
) -> AutomatonEngine<R> {
    let config = GridConfig::new(state.len(), state[0].len()).with_boundary(boundary);
    AutomatonEngine::seeded(config, rule, Initializer::Explicit(state), 0).unwrap()
}

/// Sorted coordinates of alive cells
fn alive_cells<S: Simulation<Cell = LifeState>>(sim: &S) -> Vec<(usize, usize)> {
    let grid = sim.current_state();
    let mut cells = Vec::new();
    for (r, row) in grid.to_rows().iter().enumerate() {
        for (c, state) in row.iter().enumerate() {
            if state.is_alive() {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[test]
fn test_block_is_stable() {
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    let mut sim = engine(pattern(6, 6, &block), LifeRule, BoundaryMode::Clamped);
    for _ in 0..10 {
        sim.step();
        assert_eq!(alive_cells(&sim), block.to_vec());
    }
}

#[test]
fn test_block_in_corner_is_stable() {
    let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let mut sim = engine(pattern(4, 4, &block), LifeRule, BoundaryMode::Clamped);
    sim.run(5);
    assert_eq!(alive_cells(&sim), block.to_vec());
}

#[test]
fn test_isolated_cell_dies() {
    let mut sim = engine(pattern(5, 5, &[(2, 2)]), LifeRule, BoundaryMode::Clamped);
    sim.step();
    assert_eq!(sim.population(), 0);
    sim.step();
    assert_eq!(sim.population(), 0);
}

#[test]
fn test_glider_translates_diagonally() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut sim = engine(pattern(12, 12, &glider), LifeRule, BoundaryMode::Clamped);

    sim.run(4);

    let shifted: Vec<(usize, usize)> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(alive_cells(&sim), shifted);
    assert_eq!(sim.generation(), 4);
}

#[test]
fn test_glider_wraps_around_torus() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut sim = engine(pattern(8, 8, &glider), LifeRule, BoundaryMode::Wrapped);

    // 8 diagonal shifts bring it back to where it started.
    sim.run(32);

    assert_eq!(alive_cells(&sim), glider.to_vec());
}

#[test]
fn test_blinker_period_two() {
    let vertical = [(1, 2), (2, 2), (3, 2)];
    let horizontal = [(2, 1), (2, 2), (2, 3)];
    let mut sim = engine(pattern(5, 5, &vertical), LifeRule, BoundaryMode::Clamped);
    sim.step();
    assert_eq!(alive_cells(&sim), horizontal.to_vec());
    sim.step();
    assert_eq!(alive_cells(&sim), vertical.to_vec());
}

#[test]
fn test_life_like_conway_matches_life_rule() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut fixed = engine(pattern(10, 10, &glider), LifeRule, BoundaryMode::Clamped);
    let mut parsed = engine(
        pattern(10, 10, &glider),
        LifeLikeRule::parse("B3/S23").unwrap(),
        BoundaryMode::Clamped,
    );
    for _ in 0..12 {
        fixed.step();
        parsed.step();
        assert_eq!(fixed.current_state(), parsed.current_state());
    }
}

#[test]
fn test_seeds_rule_domino() {
    let mut sim = engine(
        pattern(6, 6, &[(2, 2), (2, 3)]),
        LifeLikeRule::seeds(),
        BoundaryMode::Clamped,
    );
    sim.step();
    assert_eq!(alive_cells(&sim), vec![(1, 2), (1, 3), (3, 2), (3, 3)]);
}

#[test]
fn test_highlife_births_on_six() {
    // Two full rows around a dead centre give it six alive neighbours.
    let rows = [(1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3)];
    let mut high = engine(pattern(5, 5, &rows), LifeLikeRule::highlife(), BoundaryMode::Clamped);
    let mut conway = engine(pattern(5, 5, &rows), LifeRule, BoundaryMode::Clamped);
    high.step();
    conway.step();
    assert_eq!(high.current_state().get(2, 2), Ok(LifeState::Alive));
    assert_eq!(conway.current_state().get(2, 2), Ok(LifeState::Dead));
}

#[test]
fn test_density_rule_pair_is_stable() {
    // Each cell of a domino has one alive neighbour; dead cells next to both get two.
    let mut sim = engine(pattern(5, 5, &[(2, 1), (2, 2)]), DensityRule, BoundaryMode::Clamped);
    sim.step();
    let alive = alive_cells(&sim);
    assert!(alive.contains(&(2, 1)) && alive.contains(&(2, 2)));
    assert!(alive.contains(&(1, 1)) && alive.contains(&(3, 2)));
}

#[test]
fn test_line_automaton_exactly_one() {
    let bits = |line: &str| -> Vec<LifeState> {
        line.chars().map(|c| LifeState::from(c == '1')).collect()
    };
    let mut line = LineAutomaton::new(
        7,
        ExactlyOneRule,
        Initializer::Explicit(vec![bits("0010000")]),
        SeededSource::seeded(0),
    )
    .unwrap();

    let history = line.history(2);

    assert_eq!(history.len(), 3);
    assert_eq!(history[0], bits("0010000"));
    assert_eq!(history[1], bits("0101000"));
    assert_eq!(history[2], bits("0000100"));
    assert_eq!(line.current_state().dimensions(), (1, 7));
}

#[test]
fn test_line_automaton_random_start_is_seeded() {
    let make = || {
        LineAutomaton::new(
            64,
            ExactlyOneRule,
            Initializer::Random { probability: 0.5 },
            SeededSource::seeded(11),
        )
        .unwrap()
    };
    assert_eq!(make().history(10), make().history(10));
}
