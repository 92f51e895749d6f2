use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the component that started an async task is still mounted.
///
/// The effect keeps the `LiveScope` and ends it from its cleanup closure; the
/// spawned task holds a [`ScopeToken`] and checks it before touching state.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with((), move |_| {
///     let scope = LiveScope::new();
///     let token = scope.token();
///     spawn_local(async move {
///         let result = fetch().await;
///         token.apply(|| state.set(result));
///     });
///
///     move || scope.end()
/// });
/// ```
#[derive(Debug)]
pub struct LiveScope {
    alive: Rc<Cell<bool>>,
}

/// Cheap handle checked by the task once its result is ready.
#[derive(Clone, Debug)]
pub struct ScopeToken {
    alive: Rc<Cell<bool>>,
}

impl LiveScope {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            alive: self.alive.clone(),
        }
    }

    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Default for LiveScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeToken {
    pub fn is_live(&self) -> bool {
        self.alive.get()
    }

    /// Runs `f` only while the scope is live. Returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_live() {
            f();
            true
        } else {
            false
        }
    }
}
