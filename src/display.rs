//! Notification sink the game session reports to.

use alloc::string::String;
use alloc::vec::Vec;

use crate::coordinate::Coordinate;

/// One display instruction produced while processing a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum Notification {
    Message(String),
    MarkHit(Coordinate),
    MarkMiss(Coordinate),
}

/// Receiver of game feedback. Implementations only render; they make no
/// game decisions and cannot report errors back.
pub trait DisplaySink {
    fn show_message(&mut self, text: &str);

    fn mark_hit(&mut self, at: Coordinate);

    fn mark_miss(&mut self, at: Coordinate);

    /// Dispatch a notification to the matching method.
    fn notify(&mut self, notification: &Notification) {
        match notification {
            Notification::Message(text) => self.show_message(text),
            Notification::MarkHit(at) => self.mark_hit(*at),
            Notification::MarkMiss(at) => self.mark_miss(*at),
        }
    }
}

/// Records every notification, in order.
impl DisplaySink for Vec<Notification> {
    fn show_message(&mut self, text: &str) {
        self.push(Notification::Message(String::from(text)));
    }

    fn mark_hit(&mut self, at: Coordinate) {
        self.push(Notification::MarkHit(at));
    }

    fn mark_miss(&mut self, at: Coordinate) {
        self.push(Notification::MarkMiss(at));
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn show_message(&mut self, text: &str) {
        (**self).show_message(text);
    }

    fn mark_hit(&mut self, at: Coordinate) {
        (**self).mark_hit(at);
    }

    fn mark_miss(&mut self, at: Coordinate) {
        (**self).mark_miss(at);
    }
}
