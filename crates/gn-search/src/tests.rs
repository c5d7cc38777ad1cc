//! Unit and property tests for gn-search.
//!
//! Scenario grids are small enough that expected routes were traced by hand;
//! the property section checks the cross-strategy invariants on random grids.

#[cfg(test)]
mod helpers {
    use gn_core::{CellKind, Position};
    use gn_grid::{Grid, parse_layout};

    pub fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    pub fn grid(text: &str) -> Grid {
        parse_layout(text.as_bytes()).unwrap()
    }

    pub fn endpoints(g: &Grid) -> (Position, Position) {
        (
            g.locate(CellKind::Start).unwrap(),
            g.locate(CellKind::Goal).unwrap(),
        )
    }

    /// 5×7, start (0,0), goal (4,6).  Row 2 is a wall except the gap at (2,3).
    pub const GAP: &str = "\
S,0,0,0,0,0,0
0,0,0,0,0,0,0
1,1,1,0,1,1,1
0,0,0,0,0,0,0
0,0,0,0,0,0,G
";

    /// Greedy is drawn right along the top row into the dead end at (1,2);
    /// the only real route goes down and around first.
    ///
    /// ```text
    /// S 0 0 1 G
    /// 0 1 0 1 0
    /// 0 1 1 1 0
    /// 0 0 0 0 0
    /// ```
    pub const POCKET: &str = "\
S,0,0,1,G
0,1,0,1,0
0,1,1,1,0
0,0,0,0,0
";

    pub const OPEN_3X3: &str = "\
S,0,0
0,0,0
0,0,G
";
}

// ── Per-strategy behaviour ────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use super::helpers::{GAP, OPEN_3X3, POCKET, endpoints, grid, p};
    use crate::{AStar, Bfs, GreedyBestFirst, Path, PathFinder};

    #[test]
    fn bfs_tie_break_follows_neighbor_order() {
        let g = grid(OPEN_3X3);
        let (s, t) = endpoints(&g);
        let path = Bfs.find_path(&g, s, t);
        assert_eq!(path.cells(), [p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn astar_tie_break_orders_by_position() {
        // Equal-f entries pop in (row, col) order, so the top row is
        // expanded before the left column.
        let g = grid(OPEN_3X3);
        let (s, t) = endpoints(&g);
        let path = AStar.find_path(&g, s, t);
        assert_eq!(path.cells(), [p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn greedy_first_neighbor_wins_ties() {
        let g = grid(OPEN_3X3);
        let (s, t) = endpoints(&g);
        let path = GreedyBestFirst::default().find_path(&g, s, t);
        assert_eq!(path.cells(), [p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn gap_scenario_all_match_bfs_length() {
        let g = grid(GAP);
        let (s, t) = endpoints(&g);
        let bfs    = Bfs.find_path(&g, s, t);
        let astar  = AStar.find_path(&g, s, t);
        let greedy = GreedyBestFirst::default().find_path(&g, s, t);

        // Manhattan distance is 10, so a shortest route has 11 cells.
        assert_eq!(bfs.len(), 11);
        assert!(bfs.contains(p(2, 3)), "every route crosses the gap");
        assert!(bfs.is_contiguous() && bfs.is_clear_on(&g));
        assert!(bfs.reaches(t));

        assert_eq!(astar.len(), bfs.len());
        assert!(astar.contains(p(2, 3)));

        assert!(greedy.reaches(t));
        assert_eq!(greedy.len(), bfs.len());
        assert_eq!(
            greedy.cells(),
            [
                p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(1, 3), p(2, 3),
                p(3, 3), p(4, 3), p(4, 4), p(4, 5), p(4, 6),
            ]
        );
    }

    #[test]
    fn pocket_scenario_greedy_gets_stuck() {
        let g = grid(POCKET);
        let (s, t) = endpoints(&g);

        let greedy = GreedyBestFirst::default().find_path(&g, s, t);
        assert_eq!(greedy.cells(), [p(0, 0), p(0, 1), p(0, 2), p(1, 2)]);
        assert!(!greedy.reaches(t));

        let expected = [
            p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(3, 1), p(3, 2),
            p(3, 3), p(3, 4), p(2, 4), p(1, 4), p(0, 4),
        ];
        assert_eq!(Bfs.find_path(&g, s, t).cells(), expected);
        assert_eq!(AStar.find_path(&g, s, t).cells(), expected);
    }

    #[test]
    fn unreachable_goal_is_empty_for_bfs_and_astar() {
        let g = grid("S,1,0\n1,1,0\n0,0,G\n");
        let (s, t) = endpoints(&g);
        assert!(Bfs.find_path(&g, s, t).is_empty());
        assert!(AStar.find_path(&g, s, t).is_empty());
        // Greedy cannot move at all and reports the one-cell walk.
        assert_eq!(GreedyBestFirst::default().find_path(&g, s, t), Path::single(s));
    }

    #[test]
    fn start_equals_goal_is_single_cell() {
        let g = grid(OPEN_3X3);
        let c = p(1, 1);
        assert_eq!(Bfs.find_path(&g, c, c), Path::single(c));
        assert_eq!(AStar.find_path(&g, c, c), Path::single(c));
        assert_eq!(GreedyBestFirst::default().find_path(&g, c, c), Path::single(c));
    }

    #[test]
    fn blocked_or_outside_endpoints_are_empty() {
        let g = grid("S,0,1\n0,0,0\n0,0,G\n");
        let (s, _) = endpoints(&g);
        for target in [p(0, 2), p(7, 7), p(-1, 0)] {
            assert!(Bfs.find_path(&g, s, target).is_empty());
            assert!(AStar.find_path(&g, s, target).is_empty());
            assert!(GreedyBestFirst::default().find_path(&g, s, target).is_empty());
        }
    }

    #[test]
    fn signal_cell_is_routable() {
        let g = grid("S,T,G\n");
        let (s, t) = endpoints(&g);
        assert_eq!(Bfs.find_path(&g, s, t).cells(), [p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn greedy_budget_never_below_cell_count() {
        let g = grid(OPEN_3X3);
        assert_eq!(GreedyBestFirst::default().effective_budget(&g), 9);
        assert_eq!(GreedyBestFirst::with_budget(Some(2)).effective_budget(&g), 9);
        assert_eq!(GreedyBestFirst::with_budget(Some(50)).effective_budget(&g), 50);
    }
}

// ── Dispatch & classification ─────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::helpers::{OPEN_3X3, POCKET, endpoints, grid, p};
    use crate::{Algorithm, Path, PathFinder, SearchError, classify, compute_path};

    #[test]
    fn ids_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.id().parse::<Algorithm>().unwrap(), a);
            assert_eq!(a.to_string(), a.id());
        }
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
    }

    #[test]
    fn unknown_id_is_error() {
        let err = "Dijkstra".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SearchError::UnknownAlgorithm("Dijkstra".into()));
        // Ids are case-sensitive.
        assert!("bfs".parse::<Algorithm>().is_err());
    }

    #[test]
    fn compute_path_dispatches() {
        let g = grid(OPEN_3X3);
        let (s, t) = endpoints(&g);
        for a in Algorithm::ALL {
            let via_id = compute_path(a.id(), &g, Some(s), Some(t));
            assert_eq!(via_id, a.find_path(&g, s, t));
            assert!(via_id.reaches(t));
        }
    }

    #[test]
    fn compute_path_unknown_id_is_empty() {
        let g = grid(OPEN_3X3);
        let (s, t) = endpoints(&g);
        assert!(compute_path("Dijkstra", &g, Some(s), Some(t)).is_empty());
    }

    #[test]
    fn compute_path_unset_endpoint_is_empty() {
        let g = grid(OPEN_3X3);
        assert!(compute_path("BFS", &g, None, Some(p(2, 2))).is_empty());
        assert!(compute_path("BFS", &g, Some(p(0, 0)), None).is_empty());
    }

    #[test]
    fn classify_outcomes() {
        let g = grid(POCKET);
        let (s, t) = endpoints(&g);

        let full = Algorithm::Bfs.find_path(&g, s, t);
        assert_eq!(classify(&full, Some(s), Some(t)), Ok(()));

        let stuck = Algorithm::Greedy.find_path(&g, s, t);
        assert_eq!(
            classify(&stuck, Some(s), Some(t)),
            Err(SearchError::Stuck { at: p(1, 2), goal: t })
        );

        assert_eq!(
            classify(&Path::empty(), Some(s), Some(t)),
            Err(SearchError::Unreachable { start: s, goal: t })
        );
        assert_eq!(classify(&full, None, Some(t)), Err(SearchError::MissingEndpoint));
    }

    #[test]
    fn optimality_flags() {
        assert!(Algorithm::Bfs.is_optimal());
        assert!(Algorithm::AStar.is_optimal());
        assert!(!Algorithm::Greedy.is_optimal());
    }

    #[test]
    fn path_display() {
        assert_eq!(Path::empty().to_string(), "[]");
        let path = Path::from(vec![p(0, 0), p(0, 1)]);
        assert_eq!(path.to_string(), "[(0, 0) → (0, 1)]");
        assert_eq!(path.steps(), 1);
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use gn_core::{CellKind, Position};
    use gn_grid::{Grid, random_layout};

    use crate::{AStar, Bfs, GreedyBestFirst, Path, PathFinder};

    /// Random grid of 2..=9 × 2..=9 cells with start at the top-left and goal
    /// at the bottom-right.
    fn arb_grid() -> impl Strategy<Value = Grid> {
        (2usize..=9, 2usize..=9).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::bool::weighted(0.3), rows * cols).prop_map(
                move |blocked| {
                    let mut g = Grid::new(rows, cols);
                    for (i, &b) in blocked.iter().enumerate() {
                        if b {
                            g.set_cell(g.position_of(i), CellKind::Obstacle).unwrap();
                        }
                    }
                    g.set_cell(Position::ORIGIN, CellKind::Start).unwrap();
                    g.set_cell(
                        Position::new(rows as i32 - 1, cols as i32 - 1),
                        CellKind::Goal,
                    )
                    .unwrap();
                    g
                },
            )
        })
    }

    fn well_formed(path: &Path, grid: &Grid, start: Position) -> bool {
        path.is_empty()
            || (path.first() == Some(start) && path.is_contiguous() && path.is_clear_on(grid))
    }

    proptest! {
        #[test]
        fn bfs_and_astar_agree_on_length(g in arb_grid()) {
            let s = g.locate(CellKind::Start).unwrap();
            let t = g.locate(CellKind::Goal).unwrap();
            let bfs   = Bfs.find_path(&g, s, t);
            let astar = AStar.find_path(&g, s, t);
            prop_assert_eq!(bfs.len(), astar.len());
            prop_assert!(bfs.is_empty() || bfs.reaches(t));
            prop_assert!(astar.is_empty() || astar.reaches(t));
        }

        #[test]
        fn greedy_never_beats_bfs(g in arb_grid()) {
            let s = g.locate(CellKind::Start).unwrap();
            let t = g.locate(CellKind::Goal).unwrap();
            let greedy = GreedyBestFirst::default().find_path(&g, s, t);
            if greedy.reaches(t) {
                let bfs = Bfs.find_path(&g, s, t);
                prop_assert!(!bfs.is_empty());
                prop_assert!(greedy.len() >= bfs.len());
            }
        }

        #[test]
        fn paths_are_contiguous_and_clear(g in arb_grid()) {
            let s = g.locate(CellKind::Start).unwrap();
            let t = g.locate(CellKind::Goal).unwrap();
            prop_assert!(well_formed(&Bfs.find_path(&g, s, t), &g, s));
            prop_assert!(well_formed(&AStar.find_path(&g, s, t), &g, s));
            prop_assert!(well_formed(&GreedyBestFirst::default().find_path(&g, s, t), &g, s));
        }
    }

    /// Same invariants over a fixed batch of seeded layouts, so a regression
    /// reproduces without proptest's shrinking.
    #[test]
    fn seeded_layouts_hold_invariants() {
        for seed in 0..200u64 {
            let g = random_layout(8, 11, 0.28, seed).unwrap();
            let s = g.locate(CellKind::Start).unwrap();
            let t = g.locate(CellKind::Goal).unwrap();
            let bfs    = Bfs.find_path(&g, s, t);
            let astar  = AStar.find_path(&g, s, t);
            let greedy = GreedyBestFirst::default().find_path(&g, s, t);

            assert_eq!(bfs.len(), astar.len(), "seed {seed}");
            if greedy.reaches(t) {
                assert!(greedy.len() >= bfs.len(), "seed {seed}");
            }
            for path in [&bfs, &astar, &greedy] {
                assert!(well_formed(path, &g, s), "seed {seed}: {path}");
            }
        }
    }
}
