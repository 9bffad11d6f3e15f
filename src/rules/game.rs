//! Generic match wrapper shared by every variant.
//!
//! `Game<R>` owns the board and everything about a match that is not
//! variant-specific: turn order, history, prisoners, the pass counter,
//! resignation, undo and the state view. Variant behaviour is delegated
//! to the `RulesEngine` it holds.
//!
//! ## Committed actions
//!
//! `attempt_move`, `attempt_pass` and `resign` are the only calls that
//! change the match. A rejected call returns an error and leaves every
//! field untouched. Every committed placement or pass appends one
//! `Snapshot`; resignation ends the game without a snapshot.
//!
//! ## Speculative search
//!
//! `probe`/`retract` and `probe_pass`/`retract_pass` mutate the live board
//! and side to move without touching history, the pass counter or the
//! outcome. Callers must retract in reverse order before committing.

use im::Vector;

use crate::core::{
    Action, ActionRecord, Board, EndReason, GameConfig, GameError, GameResult, GameState,
    GameVariant, IllegalReason, Move, Outcome, Pos, Side, SideMap, Snapshot,
};

use super::engine::{check_vacant, PassRule, Placement, RulesEngine};

/// A running or finished match of one variant.
#[derive(Clone, Debug)]
pub struct Game<R: RulesEngine> {
    rules: R,
    config: GameConfig,
    board: Board,
    to_move: Side,
    prisoners: SideMap<u32>,
    consecutive_passes: u32,
    last_move: Option<Move>,
    outcome: Option<Outcome>,
    history: Vector<Snapshot>,
    message: String,
}

impl<R: RulesEngine + Default> Game<R> {
    /// Start a match on a `board_size × board_size` board.
    pub fn new(board_size: usize) -> Result<Self, GameError> {
        Self::with_rules(R::default(), board_size)
    }

    /// Start a match on the variant's conventional board size.
    pub fn standard() -> Result<Self, GameError> {
        let rules = R::default();
        let size = rules.variant().standard_size();
        Self::with_rules(rules, size)
    }

    /// Rebuild a match with default rules by replaying committed actions
    /// in order.
    pub fn replay(config: &GameConfig, actions: &[ActionRecord]) -> Result<Self, GameError> {
        Self::replay_with(R::default(), config, actions)
    }
}

impl<R: RulesEngine> Game<R> {
    /// Start a match with an explicit rules object.
    pub fn with_rules(rules: R, board_size: usize) -> Result<Self, GameError> {
        let config = rules.validate(board_size)?;

        let mut board = Board::new(board_size);
        rules.setup(&mut board);

        let mut history = Vector::new();
        history.push_back(Snapshot::initial(board.clone()));

        Ok(Self {
            rules,
            config,
            board,
            to_move: Side::Black,
            prisoners: SideMap::default(),
            consecutive_passes: 0,
            last_move: None,
            outcome: None,
            history,
            message: format!("{}'s turn.", Side::Black),
        })
    }

    /// Rebuild a match played under `rules` by replaying committed actions
    /// in order.
    ///
    /// Automatic passes are re-derived, so `auto_pass` flags in `actions`
    /// are ignored.
    pub fn replay_with(
        rules: R,
        config: &GameConfig,
        actions: &[ActionRecord],
    ) -> Result<Self, GameError> {
        if rules.variant() != config.variant {
            return Err(GameError::UnsupportedAction(
                "configuration belongs to another variant",
            ));
        }
        let mut game = Self::with_rules(rules, config.board_size)?;

        for record in actions {
            match record.action {
                Action::Place(pos) => {
                    if record.side != game.to_move {
                        return Err(GameError::WrongTurn {
                            expected: game.to_move,
                            actual: record.side,
                        });
                    }
                    game.attempt_move(pos.x, pos.y)?;
                }
                Action::Pass => game.attempt_pass(record.side)?,
            }
        }

        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.config.variant
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[must_use]
    pub fn prisoners(&self) -> &SideMap<u32> {
        &self.prisoners
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winner, `None` while running or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.as_ref().and_then(Outcome::winner)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<Snapshot> {
        &self.history
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Committed actions in order, passes included.
    #[must_use]
    pub fn actions(&self) -> Vec<ActionRecord> {
        self.history.iter().filter_map(|s| s.action).collect()
    }

    /// Legal placements for the side to move; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, self.to_move)
    }

    /// Read-only view for the orchestration layer.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        GameState {
            variant: self.config.variant,
            board_size: self.config.board_size,
            board: self.board.clone(),
            to_move: self.to_move,
            history: self.history.clone(),
            is_over: self.is_over(),
            winner: self.winner(),
            outcome: self.outcome.clone(),
            last_move: self.last_move,
            prisoners: self.prisoners,
            consecutive_passes: self.consecutive_passes,
            legal_moves: self.legal_moves(),
            message: self.message.clone(),
        }
    }

    // === Committed actions ===

    /// Place a stone for the side to move at `(x, y)`.
    pub fn attempt_move(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let side = self.to_move;
        let pos = Pos::new(x, y);
        check_vacant(&self.board, pos)?;
        let placement = self.rules.place(&mut self.board, pos, side)?;

        let captured = placement.captures();
        self.prisoners[side] += captured;
        self.consecutive_passes = 0;
        self.last_move = Some(Move::new(pos, side));

        let mut record = ActionRecord::new(side, Action::Place(pos));

        if let Some(outcome) = self.rules.judge_move(&self.board, &placement) {
            self.finish(outcome);
        } else {
            let next = side.opponent();
            if self.rules.forced_pass(&self.board, next) {
                record.auto_pass = true;
                self.consecutive_passes += 1;
                self.message = format!(
                    "{next} has no valid moves and must pass. {side}'s turn again."
                );
                if let Some(outcome) =
                    self.rules
                        .judge_passes(&self.board, &self.prisoners, self.consecutive_passes)
                {
                    self.finish(outcome);
                }
            } else {
                self.to_move = next;
                self.message = match self.variant() {
                    GameVariant::Go => format!("{next}'s turn. Captured {captured} stones."),
                    _ => format!("{next}'s turn."),
                };
            }
        }

        self.commit(record);
        Ok(())
    }

    /// Give up the turn. `side` must be the side to move.
    pub fn attempt_pass(&mut self, side: Side) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        match self.rules.pass_rule() {
            PassRule::Forbidden => {
                return Err(GameError::UnsupportedAction(
                    "passing is not allowed in this game",
                ));
            }
            PassRule::OnlyWhenStuck | PassRule::Always => {}
        }
        if side != self.to_move {
            return Err(GameError::WrongTurn {
                expected: self.to_move,
                actual: side,
            });
        }
        if self.rules.pass_rule() == PassRule::OnlyWhenStuck
            && self.rules.has_legal_move(&self.board, side)
        {
            return Err(GameError::IllegalMove(IllegalReason::HasLegalMoves));
        }

        self.consecutive_passes += 1;
        self.last_move = None;

        if let Some(outcome) =
            self.rules
                .judge_passes(&self.board, &self.prisoners, self.consecutive_passes)
        {
            self.finish(outcome);
        } else {
            self.to_move = side.opponent();
            self.message = format!("{side} passed. {}'s turn.", self.to_move);
        }

        self.commit(ActionRecord::new(side, Action::Pass));
        Ok(())
    }

    /// `side` concedes; the opponent wins. No-op once the game is over.
    pub fn resign(&mut self, side: Side) {
        if self.is_over() {
            return;
        }
        let winner = side.opponent();
        self.outcome = Some(Outcome::win(winner, EndReason::Resignation));
        self.message = format!("{side} has resigned. {winner} wins!");
    }

    /// Revert the most recent committed action.
    ///
    /// A placement and the automatic pass it triggered count as one action.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.history.len() < 2 {
            return Err(GameError::NothingToUndo);
        }

        self.history.pop_back();
        let Some(previous) = self.history.back() else {
            return Err(GameError::NothingToUndo);
        };

        self.board = previous.board.clone();
        self.to_move = previous.to_move;
        self.prisoners = previous.prisoners;
        self.consecutive_passes = previous.consecutive_passes;
        self.last_move = previous.last_move;
        self.message = "Last move undone.".to_string();
        Ok(())
    }

    // === Speculative search ===

    /// Apply a placement for the side to move without recording it.
    pub fn probe(&mut self, pos: Pos) -> Result<Placement, GameError> {
        let side = self.to_move;
        let placement = self.rules.place(&mut self.board, pos, side)?;
        self.prisoners[side] += placement.captures();
        self.to_move = side.opponent();
        Ok(placement)
    }

    /// Revert a `probe`.
    pub fn retract(&mut self, placement: &Placement) {
        self.rules.unplace(&mut self.board, placement);
        self.prisoners[placement.side] -= placement.captures();
        self.to_move = placement.side;
    }

    /// Hand the turn over without recording a pass.
    pub fn probe_pass(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Revert a `probe_pass`.
    pub fn retract_pass(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    // === Internals ===

    fn commit(&mut self, action: ActionRecord) {
        self.history.push_back(Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            prisoners: self.prisoners,
            consecutive_passes: self.consecutive_passes,
            last_move: self.last_move,
            action: Some(action),
        });
    }

    fn finish(&mut self, outcome: Outcome) {
        self.message = self.describe(&outcome);
        self.outcome = Some(outcome);
    }

    fn describe(&self, outcome: &Outcome) -> String {
        let verdict = match outcome.result {
            GameResult::Winner(side) => format!("{side} wins!"),
            GameResult::Draw => "It's a draw!".to_string(),
        };

        if let Some(score) = &outcome.score {
            return format!(
                "Both players passed consecutively. Game Over! Final Score: Black {} vs White {} (including Komi). {verdict}",
                score.totals[Side::Black],
                score.totals[Side::White],
            );
        }

        match (self.variant(), outcome.reason) {
            (GameVariant::Reversi, _) => format!(
                "Black: {}, White: {}. {verdict}",
                self.board.count(Side::Black),
                self.board.count(Side::White),
            ),
            (_, EndReason::BoardFull) => "Draw: Board is full.".to_string(),
            _ => verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use crate::rules::engine::Touched;

    /// Free placement, passes always allowed, two passes draw, a full
    /// board draws.
    #[derive(Clone, Debug, Default)]
    struct Scratch;

    impl RulesEngine for Scratch {
        fn variant(&self) -> GameVariant {
            GameVariant::Go
        }

        fn place(&self, board: &mut Board, pos: Pos, side: Side) -> Result<Placement, GameError> {
            check_vacant(board, pos)?;
            board.place_raw(pos, side);
            Ok(Placement::new(pos, side))
        }

        fn legal_moves(&self, board: &Board, _side: Side) -> Vec<Pos> {
            board.positions().filter(|&p| board.is_vacant(p)).collect()
        }

        fn pass_rule(&self) -> PassRule {
            PassRule::Always
        }

        fn judge_move(&self, board: &Board, _placement: &Placement) -> Option<Outcome> {
            board.is_full().then(|| Outcome::draw(EndReason::BoardFull))
        }

        fn judge_passes(&self, _board: &Board, _prisoners: &SideMap<u32>, passes: u32) -> Option<Outcome> {
            (passes >= 2).then(|| Outcome::draw(EndReason::DoublePass))
        }
    }

    fn game() -> Game<Scratch> {
        Game::new(9).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.history().len(), 1);
        assert!(!game.is_over());
        assert_eq!(game.message(), "Black's turn.");
        assert_eq!(game.legal_moves().len(), 81);
    }

    #[test]
    fn test_rejects_bad_size() {
        assert!(Game::<Scratch>::new(7).is_err());
        assert!(Game::<Scratch>::new(20).is_err());
    }

    #[test]
    fn test_move_appends_snapshot_and_switches() {
        let mut game = game();
        game.attempt_move(4, 4).unwrap();

        assert_eq!(game.to_move(), Side::White);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history().back().unwrap().board, *game.board());
        assert_eq!(game.last_move(), Some(Move::new(Pos::new(4, 4), Side::Black)));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = game();
        game.attempt_move(4, 4).unwrap();
        let before = game.snapshot();

        assert_eq!(
            game.attempt_move(4, 4),
            Err(GameError::CellOccupied { x: 4, y: 4 })
        );
        assert!(matches!(
            game.attempt_move(9, 0),
            Err(GameError::InvalidCoordinate { .. })
        ));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_pass_wrong_turn() {
        let mut game = game();
        assert_eq!(
            game.attempt_pass(Side::White),
            Err(GameError::WrongTurn {
                expected: Side::Black,
                actual: Side::White
            })
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_double_pass_ends() {
        let mut game = game();
        game.attempt_pass(Side::Black).unwrap();
        assert_eq!(game.consecutive_passes(), 1);
        assert_eq!(game.message(), "Black passed. White's turn.");

        game.attempt_pass(Side::White).unwrap();
        assert!(game.is_over());
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.attempt_move(0, 0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_move_resets_pass_counter() {
        let mut game = game();
        game.attempt_pass(Side::Black).unwrap();
        game.attempt_move(0, 0).unwrap();
        assert_eq!(game.consecutive_passes(), 0);
        game.attempt_pass(Side::Black).unwrap();
        assert!(!game.is_over());
    }

    #[test]
    fn test_undo_restores_previous_entry() {
        let mut game = game();
        game.attempt_move(1, 1).unwrap();
        let before = game.snapshot();

        game.attempt_move(2, 2).unwrap();
        game.undo().unwrap();

        let after = game.snapshot();
        assert_eq!(after.board, before.board);
        assert_eq!(after.to_move, before.to_move);
        assert_eq!(after.history, before.history);
        assert_eq!(game.message(), "Last move undone.");
    }

    #[test]
    fn test_undo_limits() {
        let mut game = game();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));

        game.attempt_move(0, 0).unwrap();
        game.resign(Side::White);
        assert_eq!(game.undo(), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_resign() {
        let mut game = game();
        game.resign(Side::Black);

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Side::White));
        assert_eq!(game.outcome().unwrap().reason, EndReason::Resignation);
        assert_eq!(game.message(), "Black has resigned. White wins!");
        assert_eq!(game.history().len(), 1);

        // Second resignation is ignored.
        game.resign(Side::White);
        assert_eq!(game.winner(), Some(Side::White));
    }

    #[test]
    fn test_probe_and_retract() {
        let mut game = game();
        game.attempt_move(0, 0).unwrap();
        let before = game.snapshot();

        let placement = game.probe(Pos::new(3, 3)).unwrap();
        assert_eq!(game.board().get(3, 3), Cell::White);
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.history().len(), 2);

        game.retract(&placement);
        assert_eq!(game.snapshot(), before);

        game.probe_pass();
        assert_eq!(game.to_move(), Side::Black);
        game.retract_pass();
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_retract_restores_prisoners() {
        let mut game = game();
        let mut placement = Placement::new(Pos::new(2, 2), Side::Black);
        placement.captured = Touched::from_slice(&[Pos::new(5, 5)]);

        game.board.place_raw(Pos::new(2, 2), Side::Black);
        game.prisoners[Side::Black] += 1;
        game.to_move = Side::White;

        game.retract(&placement);
        assert_eq!(game.prisoners()[Side::Black], 0);
        assert_eq!(game.board().get(5, 5), Cell::White);
        assert_eq!(game.to_move(), Side::Black);
    }

    #[test]
    fn test_replay_matches_live_game() {
        let mut live = game();
        live.attempt_move(1, 1).unwrap();
        live.attempt_pass(Side::White).unwrap();
        live.attempt_move(2, 2).unwrap();

        let replayed = Game::<Scratch>::replay(live.config(), &live.actions()).unwrap();
        assert_eq!(replayed.board(), live.board());
        assert_eq!(replayed.to_move(), live.to_move());
        assert_eq!(replayed.history().len(), live.history().len());
    }

    #[test]
    fn test_replay_rejects_out_of_turn_record() {
        let config = GameConfig::new(GameVariant::Go, 9).unwrap();
        let actions = [ActionRecord::new(Side::White, Action::place(0, 0))];
        assert!(matches!(
            Game::<Scratch>::replay(&config, &actions),
            Err(GameError::WrongTurn { .. })
        ));
    }
}
