//! Integration tests for the fragment editing core
//!
//! These tests drive complete review workflows through the session the same
//! way a host does: one tick, then one command.

use fragment_core::{
    BoundingBox, EditorCommand, EditorSession, Fragment, FragmentId, Key, SessionConfig,
};
use proptest::prelude::*;

fn fragments(texts: &[&str]) -> Vec<Fragment> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            Fragment::new(
                FragmentId::new(i),
                *text,
                BoundingBox::new(0.1 * i as f32, 0.1, 0.05, 0.02),
            )
        })
        .collect()
}

fn session(texts: &[&str]) -> EditorSession {
    EditorSession::new(fragments(texts), SessionConfig::default()).unwrap()
}

/// Host-style step: synchronize, then apply one key
fn press(session: &mut EditorSession, key: Key) {
    session.tick();
    session.apply(EditorCommand::from(key));
}

#[test]
fn test_review_scenario_end_to_end() {
    let mut session = session(&["cat", "dog"]);

    press(&mut session, Key::Down);
    session.tick();
    assert_eq!(session.highlight(), 1);
    assert_eq!(session.edited_text(), "dog");
    assert_eq!(session.cursor(), 3);

    press(&mut session, Key::Char('!'));
    assert_eq!(session.edited_text(), "dog!");
    assert_eq!(session.cursor(), 4);

    press(&mut session, Key::Backspace);
    press(&mut session, Key::Backspace);
    assert_eq!(session.edited_text(), "do");
    assert_eq!(session.cursor(), 2);

    press(&mut session, Key::Delete);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().get(0).text(), "cat");
    assert_eq!(session.highlight(), 0);
    assert_eq!(session.edited_text(), "cat");
    assert_eq!(session.cursor(), 3);
}

#[test]
fn test_highlight_clamp_on_delete() {
    let mut session = session(&["A", "B", "C"]);
    press(&mut session, Key::Up);
    session.tick();
    assert_eq!(session.highlight(), 2);

    press(&mut session, Key::Delete);
    let texts: Vec<&str> = session.store().iter().map(|f| f.text()).collect();
    assert_eq!(texts, vec!["A", "B"]);
    assert_eq!(session.highlight(), 1);
    assert_eq!(session.text_box().bound_index(), 1);
    assert_eq!(session.edited_text(), "B");
}

#[test]
fn test_deletion_floor() {
    let mut session = session(&["last one"]);
    press(&mut session, Key::Delete);
    press(&mut session, Key::Delete);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.edited_text(), "last one");
}

#[test]
fn test_rebind_resets_cursor() {
    let mut session = session(&["something long", "hello"]);
    press(&mut session, Key::Left);
    press(&mut session, Key::Left);
    press(&mut session, Key::Down);
    session.tick();
    assert_eq!(session.cursor(), 5);
}

#[test]
fn test_wraparound_cursor_navigation() {
    let mut session = session(&["hello"]);
    press(&mut session, Key::Right);
    assert_eq!(session.cursor(), 0);
    press(&mut session, Key::Left);
    assert_eq!(session.cursor(), 5);
}

#[test]
fn test_backspace_at_start_does_not_wrap() {
    let mut session = session(&["hello"]);
    press(&mut session, Key::Right);
    press(&mut session, Key::Backspace);
    assert_eq!(session.edited_text(), "hello");
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_visible_window_follows_typing() {
    let mut session = session(&[""]);
    for ch in "abcdefghijklmnopqrstuvwxyz".chars() {
        press(&mut session, Key::Char(ch));
    }

    let slice = session.visible_slice();
    assert_eq!(slice.start, 6);
    assert_eq!(slice.end, 26);
    assert_eq!(slice.text, "ghijklmnopqrstuvwxyz");
    assert_eq!(session.display_column(), 20);

    for _ in 0..10 {
        press(&mut session, Key::Left);
    }
    let slice = session.visible_slice();
    assert_eq!((slice.start, slice.end), (0, 20));
    assert_eq!(session.display_column(), 16);
}

#[test]
fn test_multi_char_insert() {
    let mut session = session(&["ad"]);
    press(&mut session, Key::Left);
    press(&mut session, Key::Text("bc".into()));
    assert_eq!(session.edited_text(), "abcd");
    assert_eq!(session.cursor(), 3);
}

#[test]
fn test_snapshot_determinism() {
    let keys = [
        Key::Down,
        Key::Char('x'),
        Key::Left,
        Key::Backspace,
        Key::Up,
        Key::Delete,
    ];

    let mut first = session(&["alpha", "beta", "gamma"]);
    let mut second = session(&["alpha", "beta", "gamma"]);
    for key in keys.iter() {
        press(&mut first, key.clone());
        press(&mut second, key.clone());
    }

    assert_eq!(first.snapshot(), second.snapshot());
}

#[derive(Debug, Clone)]
enum Op {
    Move(isize),
    Insert(String),
    Backspace,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3isize..=3).prop_map(Op::Move),
        "[a-zé ]{0,3}".prop_map(Op::Insert),
        Just(Op::Backspace),
    ]
}

proptest! {
    #[test]
    fn property_cursor_stays_within_text(
        initial in "[a-z]{0,30}",
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut session = session(&[initial.as_str()]);
        for op in ops {
            let command = match op {
                Op::Move(delta) => EditorCommand::MoveCursor(delta),
                Op::Insert(text) => EditorCommand::Insert(text),
                Op::Backspace => EditorCommand::DeleteChar,
            };
            session.apply(command);
            prop_assert!(session.cursor() <= session.edited_text().chars().count());

            let slice = session.visible_slice();
            prop_assert!(slice.end - slice.start <= 20);
            prop_assert!(slice.start <= session.cursor());
            prop_assert!(session.cursor() <= slice.end.max(slice.start + 20));
        }
    }

    #[test]
    fn property_insert_then_backspace_restores(
        initial in "[a-zA-Z0-9]{0,30}",
        back in 0usize..31,
        ch in proptest::char::range('a', 'z'),
    ) {
        let mut session = session(&[initial.as_str()]);
        let back = back.min(initial.len());
        session.apply(EditorCommand::MoveCursor(-(back as isize)));
        let before = (session.edited_text().to_string(), session.cursor());

        session.apply(EditorCommand::Insert(ch.to_string()));
        session.apply(EditorCommand::DeleteChar);

        prop_assert_eq!(session.edited_text(), before.0.as_str());
        prop_assert_eq!(session.cursor(), before.1);
    }
}
