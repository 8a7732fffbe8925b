use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use term_snake::board::{Board, Cell};
use term_snake::config::GameConfig;
use term_snake::game::{GameSession, Outcome};
use term_snake::snake::Direction;

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Up)),
        Just(Some(Direction::Down)),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
    ]
}

fn distance(a: (u16, u16), b: (u16, u16)) -> u16 {
    (a.0 as i32 - b.0 as i32).abs() as u16 + (a.1 as i32 - b.1 as i32).abs() as u16
}

proptest! {
    #[test]
    fn tick_invariants_hold(seed in any::<u64>(), inputs in prop::collection::vec(direction(), 1..200)) {
        let config = GameConfig { width: 16, height: 12, ..GameConfig::default() };
        let mut session = GameSession::new_with_rng(&config, StdRng::seed_from_u64(seed));
        let walls = session.board().count(Cell::Wall);

        for input in inputs {
            let before: Vec<_> = session.snake().segments().to_vec();
            let len = session.snake().len();
            let score = session.score();
            let had_pending = session.growth_pending();

            let outcome = session.tick(input);
            match outcome {
                Outcome::Terminated { score: final_score, .. } => {
                    let expected = if had_pending { score + 1 } else { score };
                    prop_assert_eq!(final_score, expected);
                    prop_assert!(session.is_terminated());
                    prop_assert_eq!(session.snake().head().pos, before[0].pos);

                    let board = session.board().render();
                    prop_assert_eq!(session.tick(Some(Direction::Up)), outcome);
                    prop_assert_eq!(session.board().render(), board);
                    break;
                }
                Outcome::Continue => {}
            }

            let snake = session.snake();
            if had_pending {
                prop_assert_eq!(snake.len(), len + 1);
                prop_assert_eq!(session.score(), score + 1);
            } else {
                prop_assert_eq!(snake.len(), len);
                prop_assert_eq!(session.score(), score);
            }

            for (i, seg) in snake.segments().iter().enumerate() {
                if let Some(old) = before.get(i) {
                    prop_assert!(distance(old.pos, seg.pos) <= 1);
                }
                if let Some(parent) = seg.parent {
                    prop_assert_eq!(parent, i - 1);
                    prop_assert_eq!(seg.pos, snake.segments()[parent].prev);
                }
                prop_assert_eq!(session.board().get(seg.pos), Cell::Occupied);
            }

            prop_assert_eq!(session.board().count(Cell::Occupied), snake.len());
            prop_assert_eq!(session.board().count(Cell::Wall), walls);
            prop_assert!(session.board().count(Cell::Food) <= 1);
        }
    }

    #[test]
    fn food_only_lands_on_empty_cells(seed in any::<u64>(), blocked in prop::collection::vec((2u16..=8, 2u16..=8), 0..60)) {
        let mut board = Board::new(11, 11);
        for pos in &blocked {
            board.set(*pos, Cell::Occupied);
        }
        let free = board.count(Cell::Empty);
        let mut rng = StdRng::seed_from_u64(seed);

        match board.spawn_food(&mut rng) {
            Some(pos) => {
                prop_assert!((2..=9).contains(&pos.0) && (2..=9).contains(&pos.1));
                prop_assert!(!blocked.contains(&pos));
                prop_assert_eq!(board.get(pos), Cell::Food);
                prop_assert_eq!(board.count(Cell::Empty), free - 1);
            }
            None => prop_assert!(false, "the border ring at 9 always leaves room"),
        }
    }
}
