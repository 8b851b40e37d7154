//! Property tests for shuffling, matching, and session invariants.

use std::sync::Arc;

use proptest::prelude::*;

use rust_connections::core::{GameRng, Item, SessionConfig, GROUP_SIZE};
use rust_connections::puzzles::{Group, Puzzle, PuzzleId};
use rust_connections::session::{match_group, GameSession, SessionStatus};

/// Puzzle with `groups` groups of generated, distinct item names.
fn make_puzzle(groups: usize) -> Arc<Puzzle> {
    let groups = (0..groups)
        .map(|g| {
            Group::new(
                format!("Group {g}"),
                g as u32 + 1,
                (0..GROUP_SIZE).map(|i| format!("item-{g}-{i}")),
            )
        })
        .collect();
    Arc::new(Puzzle::new(PuzzleId::new("2025-01-01"), groups).unwrap())
}

fn check_invariants(session: &GameSession) {
    let puzzle = session.puzzle();

    assert!(session.selection().len() <= GROUP_SIZE);
    assert!(session.selection().iter().all(|item| session.board().contains(item)));
    assert_eq!(
        session.solved_groups().len() * GROUP_SIZE + session.board().len(),
        puzzle.universe_size()
    );
    assert_eq!(
        session.status() == SessionStatus::Won,
        session.solved_groups().len() == puzzle.group_count()
    );
    if !session.is_infinite_mode() && session.status() != SessionStatus::Won {
        assert_eq!(
            session.status() == SessionStatus::Lost,
            session.mistakes() >= session.max_mistakes()
        );
    }
}

#[derive(Clone, Debug)]
enum Op {
    Toggle(usize, usize),
    Submit,
    Shuffle,
    Infinite,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..8usize, 0..GROUP_SIZE).prop_map(|(g, i)| Op::Toggle(g, i)),
        2 => Just(Op::Submit),
        1 => Just(Op::Shuffle),
        1 => Just(Op::Infinite),
    ]
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), len in 0usize..64) {
        let input: Vec<usize> = (0..len).collect();
        let mut rng = GameRng::new(seed);
        let mut out = rng.shuffled(&input);

        out.sort_unstable();
        prop_assert_eq!(out, input);
    }

    #[test]
    fn fresh_session_shape(seed in any::<u64>(), groups in 1usize..8) {
        let puzzle = make_puzzle(groups);
        let session = GameSession::new(puzzle, &SessionConfig::default(), GameRng::new(seed)).unwrap();

        prop_assert_eq!(session.board().len(), GROUP_SIZE * groups);
        prop_assert!(session.selection().is_empty());
        prop_assert_eq!(session.mistakes(), 0);
        prop_assert!(session.solved_groups().is_empty());
        prop_assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn each_group_matches_only_itself(groups in 1usize..8, seed in any::<u64>()) {
        let puzzle = make_puzzle(groups);
        let mut rng = GameRng::new(seed);

        for (index, group) in puzzle.groups().iter().enumerate() {
            let guess: Vec<Item> = rng.shuffled(&group.items);
            let (found, _) = match_group(&guess, puzzle.groups()).unwrap();
            prop_assert_eq!(found, index);
        }
    }

    #[test]
    fn toggle_twice_is_identity(seed in any::<u64>(), picks in proptest::collection::vec((0..3usize, 0..GROUP_SIZE), 0..4), target in (0..3usize, 0..GROUP_SIZE)) {
        let puzzle = make_puzzle(3);
        let mut session = GameSession::new(Arc::clone(&puzzle), &SessionConfig::default(), GameRng::new(seed)).unwrap();
        for (g, i) in picks {
            session.toggle_select(&puzzle.groups()[g].items[i]);
        }

        let before = session.selection().to_vec();
        let item = &puzzle.groups()[target.0].items[target.1];
        let was_selected = session.is_selected(item);

        session.toggle_select(item);
        session.toggle_select(item);

        let after = session.selection().to_vec();
        if !was_selected && before.len() == GROUP_SIZE {
            // A full selection ignores a new item both times.
            prop_assert_eq!(before, after);
        } else {
            // The toggled item may move to the end; everything else keeps its order.
            prop_assert_eq!(before.len(), after.len());
            prop_assert_eq!(after.contains(item), was_selected);
            let others = |items: &[Item]| items.iter().filter(|i| *i != item).cloned().collect::<Vec<_>>();
            prop_assert_eq!(others(&before), others(&after));
        }
    }

    #[test]
    fn random_play_keeps_invariants(seed in any::<u64>(), groups in 1usize..8, ops in proptest::collection::vec(op(), 0..200)) {
        let puzzle = make_puzzle(groups);
        let mut session = GameSession::new(Arc::clone(&puzzle), &SessionConfig::default(), GameRng::new(seed)).unwrap();

        for op in ops {
            let before_finished = session.is_finished();
            let before_mistakes = session.mistakes();

            match op {
                Op::Toggle(g, i) => {
                    let group = &puzzle.groups()[g % groups];
                    session.toggle_select(&group.items[i]);
                }
                Op::Submit => {
                    let _ = session.submit_guess();
                }
                Op::Shuffle => {
                    session.shuffle_board();
                }
                Op::Infinite => {
                    session.toggle_infinite_mode();
                }
            }

            if before_finished {
                prop_assert_eq!(session.mistakes(), before_mistakes);
            }
            if session.is_infinite_mode() {
                prop_assert!(session.mistakes() <= before_mistakes);
            }
            check_invariants(&session);
        }
    }
}
