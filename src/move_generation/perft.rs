//! Legal-move tree walking with classification counters.
//!
//! Used to validate the generator against known node counts and to feed the
//! criterion benchmarks. Counters classify leaf moves only, matching the
//! usual perft convention.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_rules::RuleToggles;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_description::ShogiMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub drops: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.drops += rhs.drops;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(state: &GameState, rules: RuleToggles, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();

    for generated in generate_legal_moves(state, rules) {
        if depth > 1 {
            total.merge(perft(&generated.state_after, rules, depth - 1));
            continue;
        }

        total.nodes += 1;
        match generated.shogi_move {
            ShogiMove::Board { to, promote, .. } => {
                if state.piece_at(to).is_some() {
                    total.captures += 1;
                }
                if promote {
                    total.promotions += 1;
                }
            }
            ShogiMove::Drop { .. } => total.drops += 1,
        }

        let defender = generated.state_after.side_to_move;
        if is_king_in_check(&generated.state_after, defender) {
            total.checks += 1;
            if generate_legal_moves(&generated.state_after, rules).is_empty() {
                total.checkmates += 1;
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;
    use crate::game_state::shogi_rules::RuleToggles;

    #[test]
    fn starting_position_node_counts() {
        let state = GameState::new_game();
        let rules = RuleToggles::default();

        let depth1 = perft(&state, rules, 1);
        assert_eq!(depth1.nodes, 30);
        assert_eq!(depth1.captures, 0);
        assert_eq!(depth1.drops, 0);

        let depth2 = perft(&state, rules, 2);
        assert_eq!(depth2.nodes, 900);
    }

    #[test]
    fn drops_and_checkmates_are_classified() {
        let state = GameState::from_sfen("4k4/9/4K4/9/9/9/9/9/9 b G 1")
            .expect("tsume position parses");

        let counts = perft(&state, RuleToggles::default(), 1);
        assert!(counts.drops > 0);
        assert!(counts.checks >= 1);
        assert_eq!(counts.checkmates, 1);
    }

    #[test]
    fn zero_depth_is_a_single_node() {
        let state = GameState::new_game();
        let counts = perft(&state, RuleToggles::default(), 0);
        assert_eq!(counts.nodes, 1);
    }
}
