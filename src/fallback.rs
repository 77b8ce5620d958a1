//! Local fallback composer.
//!
//! Handles key events whenever the remote server has not claimed them:
//! redirect disabled, server-injected events, or no server connection at
//! all. It is a minimal dead-key engine so basic accented text entry keeps
//! working without the remote input method; anything it does not understand
//! passes back to the application untouched.

use crate::keyevent::{native_mods, KeyEventKind, KeyPress};
use crate::keymap::keysym;

/// What the composer did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// Consumed with no visible output yet (pending dead key).
    Consumed,
    /// Consumed; the given text should be committed.
    Commit(String),
    /// Not consumed; the toolkit should handle the event itself.
    Pass,
}

/// Spacing equivalents for the dead keys the compose table covers.
const DEAD_KEY_SPACING: &[(u32, char)] = &[
    (keysym::DEAD_GRAVE, '`'),
    (keysym::DEAD_ACUTE, '\u{b4}'),
    (keysym::DEAD_CIRCUMFLEX, '^'),
    (keysym::DEAD_TILDE, '~'),
    (keysym::DEAD_DIAERESIS, '\u{a8}'),
    (keysym::DEAD_CEDILLA, '\u{b8}'),
    (keysym::DEAD_ABOVERING, '\u{b0}'),
];

/// (dead key, base character, composed character).
#[rustfmt::skip]
const COMPOSE_TABLE: &[(u32, char, char)] = &[
    (keysym::DEAD_GRAVE,      'a', 'à'), (keysym::DEAD_GRAVE,      'A', 'À'),
    (keysym::DEAD_GRAVE,      'e', 'è'), (keysym::DEAD_GRAVE,      'E', 'È'),
    (keysym::DEAD_GRAVE,      'i', 'ì'), (keysym::DEAD_GRAVE,      'I', 'Ì'),
    (keysym::DEAD_GRAVE,      'o', 'ò'), (keysym::DEAD_GRAVE,      'O', 'Ò'),
    (keysym::DEAD_GRAVE,      'u', 'ù'), (keysym::DEAD_GRAVE,      'U', 'Ù'),
    (keysym::DEAD_ACUTE,      'a', 'á'), (keysym::DEAD_ACUTE,      'A', 'Á'),
    (keysym::DEAD_ACUTE,      'e', 'é'), (keysym::DEAD_ACUTE,      'E', 'É'),
    (keysym::DEAD_ACUTE,      'i', 'í'), (keysym::DEAD_ACUTE,      'I', 'Í'),
    (keysym::DEAD_ACUTE,      'o', 'ó'), (keysym::DEAD_ACUTE,      'O', 'Ó'),
    (keysym::DEAD_ACUTE,      'u', 'ú'), (keysym::DEAD_ACUTE,      'U', 'Ú'),
    (keysym::DEAD_ACUTE,      'y', 'ý'), (keysym::DEAD_ACUTE,      'Y', 'Ý'),
    (keysym::DEAD_CIRCUMFLEX, 'a', 'â'), (keysym::DEAD_CIRCUMFLEX, 'A', 'Â'),
    (keysym::DEAD_CIRCUMFLEX, 'e', 'ê'), (keysym::DEAD_CIRCUMFLEX, 'E', 'Ê'),
    (keysym::DEAD_CIRCUMFLEX, 'i', 'î'), (keysym::DEAD_CIRCUMFLEX, 'I', 'Î'),
    (keysym::DEAD_CIRCUMFLEX, 'o', 'ô'), (keysym::DEAD_CIRCUMFLEX, 'O', 'Ô'),
    (keysym::DEAD_CIRCUMFLEX, 'u', 'û'), (keysym::DEAD_CIRCUMFLEX, 'U', 'Û'),
    (keysym::DEAD_TILDE,      'a', 'ã'), (keysym::DEAD_TILDE,      'A', 'Ã'),
    (keysym::DEAD_TILDE,      'n', 'ñ'), (keysym::DEAD_TILDE,      'N', 'Ñ'),
    (keysym::DEAD_TILDE,      'o', 'õ'), (keysym::DEAD_TILDE,      'O', 'Õ'),
    (keysym::DEAD_DIAERESIS,  'a', 'ä'), (keysym::DEAD_DIAERESIS,  'A', 'Ä'),
    (keysym::DEAD_DIAERESIS,  'e', 'ë'), (keysym::DEAD_DIAERESIS,  'E', 'Ë'),
    (keysym::DEAD_DIAERESIS,  'i', 'ï'), (keysym::DEAD_DIAERESIS,  'I', 'Ï'),
    (keysym::DEAD_DIAERESIS,  'o', 'ö'), (keysym::DEAD_DIAERESIS,  'O', 'Ö'),
    (keysym::DEAD_DIAERESIS,  'u', 'ü'), (keysym::DEAD_DIAERESIS,  'U', 'Ü'),
    (keysym::DEAD_DIAERESIS,  'y', 'ÿ'),
    (keysym::DEAD_CEDILLA,    'c', 'ç'), (keysym::DEAD_CEDILLA,    'C', 'Ç'),
    (keysym::DEAD_ABOVERING,  'a', 'å'), (keysym::DEAD_ABOVERING,  'A', 'Å'),
];

fn is_dead_key(keysym: u32) -> bool {
    (keysym::DEAD_GRAVE..=keysym::DEAD_HORN).contains(&keysym)
}

fn compose(dead: u32, base: char) -> Option<char> {
    COMPOSE_TABLE
        .iter()
        .find(|&&(d, b, _)| d == dead && b == base)
        .map(|&(_, _, composed)| composed)
}

fn spacing_char(dead: u32) -> Option<char> {
    DEAD_KEY_SPACING
        .iter()
        .find(|&&(d, _)| d == dead)
        .map(|&(_, ch)| ch)
}

/// Minimal dead-key/compose engine.
#[derive(Debug, Default)]
pub struct FallbackComposer {
    pending: Option<u32>,
    compose_enabled: bool,
}

impl FallbackComposer {
    pub fn new(compose_enabled: bool) -> Self {
        Self {
            pending: None,
            compose_enabled,
        }
    }

    /// Drop any pending dead key.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Feed one key event through the composer.
    pub fn feed(&mut self, event: &KeyPress) -> ComposeOutcome {
        if event.kind == KeyEventKind::Release {
            return ComposeOutcome::Pass;
        }
        // a suppressing modifier means the application wants the event
        if event.state & (native_mods::CONTROL | native_mods::MOD1) != 0 {
            return ComposeOutcome::Pass;
        }

        if self.compose_enabled && is_dead_key(event.keysym) {
            self.pending = Some(event.keysym);
            return ComposeOutcome::Consumed;
        }

        let Some(ch) = event.text.chars().next().filter(|ch| !ch.is_control()) else {
            return ComposeOutcome::Pass;
        };

        match self.pending.take() {
            Some(dead) => match compose(dead, ch) {
                Some(composed) => ComposeOutcome::Commit(composed.to_string()),
                None => {
                    // unknown pair: emit the accent as a spacing character,
                    // then the base character
                    let mut text = String::new();
                    if let Some(accent) = spacing_char(dead) {
                        text.push(accent);
                    }
                    text.push(ch);
                    ComposeOutcome::Commit(text)
                }
            },
            None => ComposeOutcome::Commit(ch.to_string()),
        }
    }
}
