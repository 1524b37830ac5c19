use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
    Escape,
}

impl NavKey {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "right" | "arrowright" => Some(Self::ArrowRight),
            "left" | "arrowleft" => Some(Self::ArrowLeft),
            "escape" | "esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

pub trait KeyListener {
    /// Returns whether the key was consumed.
    fn on_key(&mut self, key: NavKey) -> bool;
}

type SharedListener = Rc<RefCell<dyn KeyListener>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
}

/// Window-level key event fan-out.
///
/// Listeners stay registered exactly as long as the `KeySubscription`
/// returned by `subscribe` is alive.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    registry: Rc<RefCell<Registry>>,
}

#[must_use = "dropping the subscription detaches the listener"]
pub struct KeySubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: SharedListener) -> KeySubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        debug!(listener = id, total = registry.listeners.len(), "key listener attached");
        KeySubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `key` to every attached listener, returning how many consumed it.
    pub fn dispatch(&self, key: NavKey) -> usize {
        let listeners: Vec<SharedListener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        listeners
            .into_iter()
            .filter(|listener| listener.borrow_mut().on_key(key))
            .count()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl KeySubscription {
    pub fn is_attached(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .listeners
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            registry.listeners.retain(|(id, _)| *id != self.id);
            debug!(listener = self.id, total = registry.listeners.len(), "key listener detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        keys: Vec<NavKey>,
    }

    impl KeyListener for Recorder {
        fn on_key(&mut self, key: NavKey) -> bool {
            self.keys.push(key);
            true
        }
    }

    #[test]
    fn dropping_subscription_detaches_listener() {
        let hub = KeyboardHub::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let subscription = hub.subscribe(recorder.clone());
        assert!(subscription.is_attached());

        assert_eq!(hub.dispatch(NavKey::ArrowRight), 1);
        drop(subscription);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(NavKey::ArrowLeft), 0);
        assert_eq!(recorder.borrow().keys, vec![NavKey::ArrowRight]);
    }

    #[test]
    fn each_subscription_fires_once_per_key() {
        let hub = KeyboardHub::new();
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        let _first = hub.subscribe(first.clone());
        let second_subscription = hub.subscribe(second.clone());

        assert_eq!(hub.dispatch(NavKey::Escape), 2);
        drop(second_subscription);
        assert_eq!(hub.dispatch(NavKey::Escape), 1);
        assert_eq!(first.borrow().keys.len(), 2);
        assert_eq!(second.borrow().keys.len(), 1);
    }

    #[test]
    fn subscription_outliving_hub_drops_cleanly() {
        let hub = KeyboardHub::new();
        let subscription = hub.subscribe(Rc::new(RefCell::new(Recorder::default())));
        drop(hub);
        assert!(!subscription.is_attached());
        drop(subscription);
    }

    #[test]
    fn key_tokens_parse() {
        assert_eq!(NavKey::parse("Right"), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::parse("arrowleft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::parse("esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::parse("space"), None);
    }
}
