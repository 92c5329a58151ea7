use quickcheck::Arbitrary;

use crate::BoardState;

// Random walks from the starting position, so that every generated state is
// reachable in an actual game.
impl Arbitrary for BoardState {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_rounds = usize::arbitrary(g) % 30;
        let mut state = BoardState::new();
        for _ in 0..num_rounds {
            if state.game_outcome().unwrap().is_some() {
                break;
            }
            let bobail_moved = *g.choose(&state.bobail_moves().unwrap()).unwrap();
            if bobail_moved.game_outcome().unwrap().is_some() {
                return bobail_moved;
            }
            match g.choose(&bobail_moved.piece_moves()) {
                Some(next) => state = *next,
                None => return bobail_moved,
            }
        }
        state
    }
}
