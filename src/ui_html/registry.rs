//! Card registry.
//!
//! Hosts discover cards through a registry populated once at start-up.
//! Registration is an explicit call; registering a card type twice is a no-op.

use std::sync::{Mutex, OnceLock};

use serde::Serialize;

pub const WEEKLY_SCHEDULE_CARD_TYPE: &str = "weekly-schedule-card";
pub const WEEKLY_SCHEDULE_EDITOR_TYPE: &str = "weekly-schedule-card-editor";

/// Describes a card to the host's card picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    pub card_type: String,
    pub name: String,
    pub description: String,
    /// Element type of the card's visual editor, if any
    pub editor_type: Option<String>,
}

impl CardDescriptor {
    pub fn weekly_schedule() -> Self {
        Self {
            card_type: WEEKLY_SCHEDULE_CARD_TYPE.to_string(),
            name: "Weekly Schedule Card".to_string(),
            description: "A weekly schedule card for Home Assistant".to_string(),
            editor_type: Some(WEEKLY_SCHEDULE_EDITOR_TYPE.to_string()),
        }
    }
}

/// Ordered set of registered cards, keyed by card type
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDescriptor>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card; returns false when its type is already registered.
    pub fn register(&mut self, descriptor: CardDescriptor) -> bool {
        if self.contains(&descriptor.card_type) {
            log::debug!("Card type `{}` already registered", descriptor.card_type);
            return false;
        }
        log::debug!("Registering card type `{}`", descriptor.card_type);
        self.cards.push(descriptor);
        true
    }

    pub fn contains(&self, card_type: &str) -> bool {
        self.get(card_type).is_some()
    }

    pub fn get(&self, card_type: &str) -> Option<&CardDescriptor> {
        self.cards.iter().find(|c| c.card_type == card_type)
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }
}

static GLOBAL_REGISTRY: OnceLock<Mutex<CardRegistry>> = OnceLock::new();

fn global_registry() -> &'static Mutex<CardRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| Mutex::new(CardRegistry::new()))
}

/// Register the built-in cards with the process-wide registry.
///
/// Safe to call more than once; returns true only on the call that actually
/// registered the weekly schedule card.
pub fn register_builtin_cards() -> bool {
    // A poisoned lock only means another registration panicked; the Vec is intact
    let mut registry = global_registry()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let registered = registry.register(CardDescriptor::weekly_schedule());
    if registered {
        log::info!(
            "WEEKLY-SCHEDULE-CARD version {}",
            env!("CARGO_PKG_VERSION")
        );
    }
    registered
}

/// Snapshot of the process-wide registry
pub fn registered_cards() -> Vec<CardDescriptor> {
    global_registry()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .cards()
        .to_vec()
}
