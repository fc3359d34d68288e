mod support;

use std::thread;

use filterlab::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use support::{Session, pair};

#[test]
fn commands_are_applied_in_arrival_order() {
    let (command_tx, command_rx) = command_channel();
    let (event_tx, event_rx) = event_channel();
    let playground = Playground::new(["A"], Mode::Normal, Some(event_tx));

    let handle = thread::spawn(move || run_playground(playground, command_rx));

    for command in [
        Command::SelectFilter(FilterName::Contrast),
        Command::EditValue("120%".into()),
        Command::SelectFilter(FilterName::Blur),
        Command::EditValue("1px".into()),
        Command::Quit,
    ] {
        command_tx.send(command).expect("send command");
    }

    handle.join().expect("playground thread");

    let css: Vec<String> = event_rx
        .try_iter()
        .filter_map(|event| match event {
            Event::Rendered { css, .. } => Some(css),
            _ => None,
        })
        .collect();

    assert_eq!(css, vec!["contrast(120%)", "contrast(120%) blur(1px)"]);
}

#[test]
fn dropping_every_sender_stops_the_playground() {
    let (command_tx, command_rx) = command_channel();
    let (event_tx, event_rx) = event_channel();
    let playground = Playground::new(["A"], Mode::Normal, Some(event_tx));

    drop(command_tx);
    run_playground(playground, command_rx);

    assert_eq!(event_rx.try_iter().last(), Some(Event::Stopped));
}

#[test]
fn feeling_lucky_goes_through_the_edit_path() {
    let mut session = Session::new(&["A", "B"], Mode::Backdrop);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let (name, value) = lucky::pick_random_with(&mut rng);
        session.playground.apply_random(name, &value);

        let expected = session.playground.render("A", Mode::Backdrop);
        assert!(expected.contains(&format!("{}({})", name, value)));
        assert_eq!(
            session.rendered(),
            vec![pair("A", &expected), pair("B", &expected)]
        );
        assert_eq!(
            session.playground.controller().active_filter(),
            ActiveFilter::FilterSelected(name)
        );
    }

    assert_eq!(session.playground.render("A", Mode::Normal), "");
}

#[test]
fn feeling_lucky_command_selects_a_filter() {
    let mut session = Session::new(&["A"], Mode::Normal);

    session.send(Command::FeelingLucky);

    let Some(name) = session.playground.controller().active_filter().name()
    else {
        panic!("expected a selected filter");
    };
    let value = session
        .playground
        .store()
        .get_value("A", Mode::Normal, name)
        .expect("lucky value stored");
    assert_eq!(session.playground.controller().value_field().text, value);
}
