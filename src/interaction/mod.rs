//! Cross-chart selection coordination.
//!
//! The selection bus is a synchronous, single-threaded publish/subscribe
//! channel with two fixed topics. It owns the selection state: every mutation
//! flows through `publish`, and subscribed views cache their own last-seen
//! value inside their handlers instead of reaching back into the bus.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::record::Category;

/// Named channel carrying one kind of selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionTopic {
    CareerChanged,
    ReasonChanged,
}

/// At most one selected category per topic; `None` means no selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_career: Option<Category>,
    pub selected_reason: Option<Category>,
}

/// Callback invoked synchronously for each publish on a subscribed topic.
pub type SelectionHandler = Box<dyn FnMut(Option<&Category>)>;

struct Subscription {
    id: String,
    handler: SelectionHandler,
}

/// Topic-based synchronous selection bus.
///
/// Dispatch is reentrant-unsafe by contract: a handler must not publish to
/// the topic it is currently handling. The dashboard wiring avoids this by
/// construction, since handlers capture weak view references and never the
/// bus itself.
#[derive(Default)]
pub struct SelectionBus {
    state: SelectionState,
    career_subscriptions: Vec<Subscription>,
    reason_subscriptions: Vec<Subscription>,
}

impl SelectionBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under a caller-chosen id scoped to the topic.
    ///
    /// Re-subscribing with an id already in use replaces the prior handler in
    /// place, keeping its original dispatch position. That makes view
    /// re-initialization idempotent: the replacement fires exactly once per
    /// publish, where the original did.
    pub fn subscribe(&mut self, topic: SelectionTopic, handler_id: &str, handler: SelectionHandler) {
        let subscriptions = self.subscriptions_mut(topic);
        if let Some(existing) = subscriptions.iter_mut().find(|s| s.id == handler_id) {
            existing.handler = handler;
            debug!(?topic, handler_id, "replaced selection handler");
        } else {
            subscriptions.push(Subscription {
                id: handler_id.to_owned(),
                handler,
            });
            debug!(?topic, handler_id, "subscribed selection handler");
        }
    }

    /// Removes a handler; returns whether one was registered under the id.
    pub fn unsubscribe(&mut self, topic: SelectionTopic, handler_id: &str) -> bool {
        let subscriptions = self.subscriptions_mut(topic);
        if let Some(position) = subscriptions.iter().position(|s| s.id == handler_id) {
            subscriptions.remove(position);
            return true;
        }
        false
    }

    /// Records the payload into the selection state, then invokes every
    /// handler subscribed to the topic in subscription order before
    /// returning. Publishing to a topic with no subscribers is a no-op.
    pub fn publish(&mut self, topic: SelectionTopic, payload: Option<Category>) {
        match topic {
            SelectionTopic::CareerChanged => self.state.selected_career = payload.clone(),
            SelectionTopic::ReasonChanged => self.state.selected_reason = payload.clone(),
        }
        debug!(?topic, ?payload, "publishing selection change");
        for subscription in self.subscriptions_mut(topic) {
            (subscription.handler)(payload.as_ref());
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn subscriber_count(&self, topic: SelectionTopic) -> usize {
        match topic {
            SelectionTopic::CareerChanged => self.career_subscriptions.len(),
            SelectionTopic::ReasonChanged => self.reason_subscriptions.len(),
        }
    }

    fn subscriptions_mut(&mut self, topic: SelectionTopic) -> &mut Vec<Subscription> {
        match topic {
            SelectionTopic::CareerChanged => &mut self.career_subscriptions,
            SelectionTopic::ReasonChanged => &mut self.reason_subscriptions,
        }
    }
}

/// Publisher-side toggle contract: clicking the already-selected category
/// clears the selection.
#[must_use]
pub fn toggle_selection(current: Option<&str>, clicked: &str) -> Option<Category> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_owned())
    }
}
