use maze_walker::{
    new_session, CellState, Direction, EngineError, Position, RejectReason, Session, SessionState,
    SolveOutcome, StepOutcome, WalkerConfig,
};

#[test]
fn open_board_is_solved_within_the_caps() {
    for seed in 0..20 {
        let mut s = Session::new(WalkerConfig::default(), seed).unwrap();
        let report = s.solve().unwrap();
        assert_eq!(report.outcome, SolveOutcome::Solved, "seed {seed}");
        assert_eq!(s.state(), SessionState::Solved);
        assert!(s.grid().at_goal());
        assert!(report.age >= 14, "needs at least 14 moves on 8x8, got {}", report.age);
        assert_eq!(s.status_message(), format!("Purpose found at age {}.", report.age));
    }
}

#[test]
fn cut_off_start_reports_no_solution() {
    let mut s = new_session(8).unwrap();
    for col in 0..8 {
        s.toggle_wall(1, col).unwrap();
    }
    let report = s.solve().unwrap();
    assert_eq!(report.outcome, SolveOutcome::NoSolutionFound);
    assert_eq!(report.restarts, s.config().restart_cap);
    assert_eq!(s.state(), SessionState::Stuck);
    assert!(s.status_message().starts_with("No solution. Purpose does not exist."));
    // walls stay locked until the path is cleared
    assert!(matches!(
        s.toggle_wall(1, 3),
        Err(EngineError::WallEditRejected { reason: RejectReason::SessionStuck, .. })
    ));
    s.clear_path();
    assert_eq!(s.toggle_wall(1, 3).unwrap(), CellState::Empty);
    assert_eq!(s.solve().unwrap().outcome, SolveOutcome::Solved);
}

#[test]
fn end_cell_cannot_be_walled() {
    let mut s = new_session(8).unwrap();
    assert!(matches!(
        s.toggle_wall(7, 7),
        Err(EngineError::WallEditRejected { reason: RejectReason::Reserved, .. })
    ));
    assert_eq!(s.cell_state(7, 7).unwrap(), CellState::End);
}

#[test]
fn first_step_leaves_start_for_one_neighbour() {
    let mut s = new_session(8).unwrap();
    let outcome = s.step().unwrap();
    let dir = match outcome {
        StepOutcome::Moved(d) => d,
        other => panic!("expected a move, got {other:?}"),
    };
    assert!(matches!(dir, Direction::Right | Direction::Down));
    let neighbours = [Position::new(0, 1), Position::new(1, 0)];
    let current: Vec<_> = neighbours
        .iter()
        .filter(|p| s.cell_state(p.row, p.col).unwrap() == CellState::Current)
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(s.grid().count(CellState::Current), 1);
    assert_eq!(s.cell_state(0, 0).unwrap(), CellState::Start);
    assert_eq!(s.grid().age(), 1);
    assert_eq!(s.grid().trail(), &[Position::new(0, 0), *current[0]]);
}

#[test]
fn stepping_by_hand_ends_solved_or_stuck() {
    let mut s = new_session(8).unwrap();
    let mut guard = 0;
    while s.step().is_some() {
        guard += 1;
        assert!(guard <= 64, "a walk on 8x8 cannot exceed 63 moves");
    }
    assert!(matches!(s.state(), SessionState::Solved | SessionState::Stuck));
    assert!(!s.status_message().is_empty());
    s.clear_board();
    assert_eq!(s.state(), SessionState::Idle);
    assert_eq!(s.status_message(), "");
}

#[test]
fn out_of_range_queries_are_rejected() {
    let mut s = new_session(4).unwrap();
    assert!(matches!(s.cell_state(4, 1), Err(EngineError::InvalidCoordinate { .. })));
    assert!(matches!(s.toggle_wall(1, 4), Err(EngineError::InvalidCoordinate { .. })));
}

#[test]
fn walls_stay_editable_while_walking_and_after_solving() {
    let mut s = new_session(8).unwrap();
    s.step().unwrap();
    assert_eq!(s.state(), SessionState::Solving);
    assert_eq!(s.toggle_wall(5, 5).unwrap(), CellState::Wall);
    let here = s.grid().position();
    assert!(matches!(
        s.toggle_wall(here.row, here.col),
        Err(EngineError::WallEditRejected { reason: RejectReason::OnPath, .. })
    ));
    assert_eq!(s.state(), SessionState::Solving);

    let report = s.solve().unwrap();
    assert_eq!(report.outcome, SolveOutcome::Solved);
    let n = s.grid().size();
    let free = s
        .grid()
        .cells()
        .iter()
        .position(|c| *c == CellState::Empty)
        .expect("a solved 8x8 walk leaves empty cells");
    let (row, col) = (free / n, free % n);
    assert_eq!(s.toggle_wall(row, col).unwrap(), CellState::Wall);
    assert_eq!(s.state(), SessionState::Solved);
    assert_eq!(s.toggle_wall(row, col).unwrap(), CellState::Empty);
    assert_eq!(s.toggle_wall(5, 5).unwrap(), CellState::Empty);
}
