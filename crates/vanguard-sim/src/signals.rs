//! Signal bus: per-tick event dispatch to registered listeners.
//!
//! Events accumulate in the engine's tick buffer and are dispatched once per
//! tick, after all systems have run. Listeners may request their own removal
//! (or any other subscription's) from inside a notification; removals are
//! collected and applied after the dispatch pass, so the listener list is
//! never mutated mid-iteration.

use vanguard_core::events::SimEvent;

/// Opaque handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// A registered event listener.
pub type Listener = Box<dyn FnMut(&SimEvent, &mut SignalActions)>;

/// Actions a listener may request during a notification.
#[derive(Debug, Default)]
pub struct SignalActions {
    unsubscribes: Vec<SubscriptionId>,
}

impl SignalActions {
    /// Request removal of a subscription. Safe to call for an already-removed
    /// id, and safe to call repeatedly.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.unsubscribes.push(id);
    }
}

/// Subscription registry for simulation events.
#[derive(Default)]
pub struct SignalBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SignalBus {
    /// Register a listener; the returned id removes it again.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a subscription. Unknown or already-removed ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a tick's events to every listener, in subscription order.
    /// Removals requested mid-dispatch take effect for subsequent events.
    pub fn dispatch(&mut self, events: &[SimEvent]) {
        if self.listeners.is_empty() || events.is_empty() {
            return;
        }
        let mut actions = SignalActions::default();
        for event in events {
            for (id, listener) in &mut self.listeners {
                if actions.unsubscribes.contains(id) {
                    continue;
                }
                listener(event, &mut actions);
            }
        }
        for id in actions.unsubscribes {
            self.unsubscribe(id);
        }
    }
}
