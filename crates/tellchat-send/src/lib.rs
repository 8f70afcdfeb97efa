//! Delivery of built chat messages to a running server.
//!
//! The core crate stays pure; everything that touches a live server goes
//! through the two small traits here. A [`Dispatcher`] hands one serialized
//! message to the runtime (in the reference setup, by issuing a `tellraw`
//! console command) and a [`Presence`] answers who is online. [`ChatSender`]
//! ties them together and converts every failure into a `false` return, so
//! no error crosses this boundary outward.

use std::fmt;

use tellchat::MessageBuilder;
use uuid::Uuid;

/// A player addressed either by name or by stable id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerRef {
    Name(String),
    Id(Uuid),
}

impl PlayerRef {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    #[must_use]
    pub const fn id(id: Uuid) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Hands one serialized message to the runtime for one target.
///
/// Implementations report plain success or failure. They do not retry, and
/// they do not let errors escape.
pub trait Dispatcher {
    fn dispatch(&self, target: &PlayerRef, json: &str) -> bool;
}

/// Answers presence questions against the server's player list.
pub trait Presence {
    /// Whether `target` is currently online.
    fn is_online(&self, target: &PlayerRef) -> bool;

    /// Everyone currently online, in whatever order the runtime keeps them.
    fn online_players(&self) -> Vec<PlayerRef>;
}

/// The console command line that delivers `json` to `target`.
#[must_use]
pub fn tellraw_command(target: &PlayerRef, json: &str) -> String {
    format!("tellraw {target} {json}")
}

/// Sends built messages to players, checking presence before dispatching.
#[derive(Debug)]
pub struct ChatSender<D, P> {
    dispatcher: D,
    presence: P,
}

impl<D: Dispatcher, P: Presence> ChatSender<D, P> {
    pub fn new(dispatcher: D, presence: P) -> Self {
        Self {
            dispatcher,
            presence,
        }
    }

    /// Serializes `message` and delivers it to `target` if they are online.
    ///
    /// Returns `false` for an offline target or a message that does not
    /// serialize; nothing is dispatched in either case.
    pub fn send_to(&self, target: &PlayerRef, message: &mut MessageBuilder) -> bool {
        if !self.presence.is_online(target) {
            log::debug!("not sending chat message: {target} is offline");
            return false;
        }
        let json = match message.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("chat message for {target} failed to serialize: {err}");
                return false;
            }
        };
        let delivered = self.dispatcher.dispatch(target, json);
        if !delivered {
            log::warn!("chat dispatch to {target} failed");
        }
        delivered
    }

    /// Delivers `message` to every online player. Returns `true` only if
    /// every dispatch succeeded; an empty server counts as success.
    pub fn send_to_all(&self, message: &mut MessageBuilder) -> bool {
        let json = match message.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("broadcast chat message failed to serialize: {err}");
                return false;
            }
        };
        let mut delivered_all = true;
        for player in self.presence.online_players() {
            if !self.dispatcher.dispatch(&player, json) {
                log::warn!("chat dispatch to {player} failed");
                delivered_all = false;
            }
        }
        delivered_all
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Recorder {
        calls: RefCell<Vec<(PlayerRef, String)>>,
        fail_for: Option<PlayerRef>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_for: None,
            }
        }

        fn failing_for(target: PlayerRef) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_for: Some(target),
            }
        }
    }

    impl Dispatcher for &Recorder {
        fn dispatch(&self, target: &PlayerRef, json: &str) -> bool {
            self.calls
                .borrow_mut()
                .push((target.clone(), json.to_owned()));
            self.fail_for.as_ref() != Some(target)
        }
    }

    struct Roster(Vec<PlayerRef>);

    impl Presence for &Roster {
        fn is_online(&self, target: &PlayerRef) -> bool {
            self.0.contains(target)
        }

        fn online_players(&self) -> Vec<PlayerRef> {
            self.0.clone()
        }
    }

    fn steve() -> PlayerRef {
        PlayerRef::name("Steve")
    }

    fn alex() -> PlayerRef {
        PlayerRef::name("Alex")
    }

    #[test]
    fn send_to_dispatches_serialized_json() {
        let recorder = Recorder::new();
        let roster = Roster(vec![steve()]);
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::with_text("hi");

        assert!(sender.send_to(&steve(), &mut message));
        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, steve());
        assert_eq!(calls[0].1, r#"{"text":"hi","color":"white"}"#);
    }

    #[test]
    fn offline_targets_are_not_dispatched() {
        let recorder = Recorder::new();
        let roster = Roster(Vec::new());
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::with_text("hi");

        assert!(!sender.send_to(&steve(), &mut message));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn unserializable_messages_never_reach_dispatch() {
        let recorder = Recorder::new();
        let roster = Roster(vec![steve()]);
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::new();

        assert!(!sender.send_to(&steve(), &mut message));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn failed_dispatch_reports_false() {
        let recorder = Recorder::failing_for(steve());
        let roster = Roster(vec![steve()]);
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::with_text("hi");

        assert!(!sender.send_to(&steve(), &mut message));
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    fn broadcast_covers_every_online_player() {
        let recorder = Recorder::new();
        let roster = Roster(vec![steve(), alex()]);
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::with_text("hi");

        assert!(sender.send_to_all(&mut message));
        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, steve());
        assert_eq!(calls[1].0, alex());
    }

    #[test]
    fn broadcast_reports_partial_failure() {
        let recorder = Recorder::failing_for(alex());
        let roster = Roster(vec![steve(), alex()]);
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::with_text("hi");

        assert!(!sender.send_to_all(&mut message));
        assert_eq!(recorder.calls.borrow().len(), 2);
    }

    #[test]
    fn broadcast_to_an_empty_server_is_vacuously_delivered() {
        let recorder = Recorder::new();
        let roster = Roster(Vec::new());
        let sender = ChatSender::new(&recorder, &roster);
        let mut message = MessageBuilder::with_text("hi");

        assert!(sender.send_to_all(&mut message));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn command_lines_address_names_and_ids() {
        let json = r#"{"text":"hi","color":"white"}"#;
        assert_eq!(
            tellraw_command(&steve(), json),
            format!("tellraw Steve {json}")
        );

        let id = Uuid::from_u128(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
        assert_eq!(
            tellraw_command(&PlayerRef::id(id), json),
            format!("tellraw 00112233-4455-6677-8899-aabbccddeeff {json}")
        );
    }
}
