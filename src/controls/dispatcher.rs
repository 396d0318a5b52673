//! Start/change/end notifications for control listeners.

/// Notification emitted by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// A gesture began.
    Start,
    /// The camera was changed outside the per-frame update (by `reset`).
    Change,
    /// A gesture ended.
    End,
}

/// Handle returned by [`EventDispatcher::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked for each notification.
pub type ControlCallback = Box<dyn FnMut(ControlEvent)>;

/// Ordered list of notification listeners.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<(ListenerId, ControlCallback)>,
    next_id: u64,
}

impl EventDispatcher {
    /// Register a listener; it is called in registration order.
    pub fn add_listener<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(ControlEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Call every listener with `event`.
    pub fn dispatch(&mut self, event: ControlEvent) {
        log::trace!("dispatch {event:?} to {} listeners", self.listeners.len());
        for (_, callback) in &mut self.listeners {
            callback(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
