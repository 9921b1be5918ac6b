//! Key bindings shared by both demo screens.

use algoscope_trace::PlaybackAction;
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Playback(PlaybackAction),
}

/// Key bindings for playback control.
#[derive(Debug, Clone)]
pub struct Keys {
    pub quit: Vec<KeyCode>,
    pub pause: Vec<KeyCode>,
    pub speed_more: Vec<KeyCode>,
    pub speed_less: Vec<KeyCode>,
    pub frame_next: Vec<KeyCode>,
    pub frame_prev: Vec<KeyCode>,
    pub forward: Vec<KeyCode>,
    pub backward: Vec<KeyCode>,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            quit: vec![KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')],
            pause: vec![KeyCode::Char(' '), KeyCode::Char('p'), KeyCode::Char('P')],
            speed_more: vec![KeyCode::Char('+'), KeyCode::Char('}')],
            speed_less: vec![KeyCode::Char('-'), KeyCode::Char('{')],
            frame_next: vec![KeyCode::Right, KeyCode::Char('l')],
            frame_prev: vec![KeyCode::Left, KeyCode::Char('h')],
            forward: vec![KeyCode::Up, KeyCode::Char('k')],
            backward: vec![KeyCode::Down, KeyCode::Char('j')],
        }
    }
}

impl Keys {
    pub fn input(&self, code: KeyCode) -> Option<Input> {
        let bindings = [
            (&self.pause, PlaybackAction::TogglePause),
            (&self.speed_more, PlaybackAction::SpeedMore),
            (&self.speed_less, PlaybackAction::SpeedLess),
            (&self.frame_next, PlaybackAction::Next),
            (&self.frame_prev, PlaybackAction::Previous),
            (&self.forward, PlaybackAction::Forward),
            (&self.backward, PlaybackAction::Backward),
        ];
        if self.quit.contains(&code) {
            return Some(Input::Quit);
        }
        bindings
            .into_iter()
            .find(|(keys, _)| keys.contains(&code))
            .map(|(_, action)| Input::Playback(action))
    }

    /// One line per binding, for the help footer.
    pub fn help(&self) -> String {
        fn names(keys: &[KeyCode]) -> String {
            keys.iter()
                .map(|k| match k {
                    KeyCode::Char(' ') => "space".to_string(),
                    KeyCode::Char(c) => c.to_string(),
                    other => format!("{other:?}").to_lowercase(),
                })
                .collect::<Vec<_>>()
                .join("/")
        }
        format!(
            "{} pause  {} faster  {} slower  {} step  {} back  {} skip  {} rewind  {} quit",
            names(&self.pause),
            names(&self.speed_more),
            names(&self.speed_less),
            names(&self.frame_next),
            names(&self.frame_prev),
            names(&self.forward),
            names(&self.backward),
            names(&self.quit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = Keys::default();
        assert_eq!(keys.input(KeyCode::Esc), Some(Input::Quit));
        assert_eq!(
            keys.input(KeyCode::Char(' ')),
            Some(Input::Playback(PlaybackAction::TogglePause))
        );
        assert_eq!(
            keys.input(KeyCode::Char('}')),
            Some(Input::Playback(PlaybackAction::SpeedMore))
        );
        assert_eq!(
            keys.input(KeyCode::Left),
            Some(Input::Playback(PlaybackAction::Previous))
        );
        assert_eq!(
            keys.input(KeyCode::Char('j')),
            Some(Input::Playback(PlaybackAction::Backward))
        );
        assert_eq!(keys.input(KeyCode::Char('x')), None);
    }

    #[test]
    fn help_mentions_every_binding() {
        let help = Keys::default().help();
        assert!(help.contains("space/p/P pause"));
        assert!(help.contains("esc/q/Q quit"));
        assert!(help.contains("right/l step"));
    }
}
