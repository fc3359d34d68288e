#![allow(dead_code)]

use filterlab::prelude::*;

pub struct Session {
    pub playground: Playground,
    pub events: EventReceiver,
}

impl Session {
    pub fn new(targets: &[&str], mode: Mode) -> Self {
        let (event_tx, events) = event_channel();
        let playground =
            Playground::new(targets.iter().copied(), mode, Some(event_tx));
        Self { playground, events }
    }

    pub fn send(&mut self, command: Command) {
        assert!(!self.playground.on_command(command));
    }

    pub fn drain(&self) -> Vec<Event> {
        self.events.try_iter().collect()
    }

    /// `(target, css)` for every `Rendered` event since the last drain
    pub fn rendered(&self) -> Vec<(String, String)> {
        self.drain()
            .into_iter()
            .filter_map(|event| match event {
                Event::Rendered { target, css, .. } => Some((target, css)),
                _ => None,
            })
            .collect()
    }
}

pub fn pair(target: &str, css: &str) -> (String, String) {
    (target.to_string(), css.to_string())
}
