//! Document-level listeners that live exactly as long as the owner wants them.
//!
//! [`DocumentListener`] detaches itself on drop, and [`ListenerSlot`] decides
//! when to acquire or drop one, so every exit path (close, dismissal, unmount)
//! releases the DOM listener exactly once.

use contracts::domain::a001_product::dialog::PointerTarget;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, KeyboardEvent, Node};

/// What [`ListenerSlot::sync`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    Acquired,
    Released,
    Unchanged,
}

/// Holds at most one listener handle.
#[derive(Debug)]
pub struct ListenerSlot<T> {
    handle: Option<T>,
}

impl<T> Default for ListenerSlot<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T> ListenerSlot<T> {
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Brings the slot in line with `wanted`.
    ///
    /// `acquire` runs only when a handle is wanted and none is held; a `None`
    /// from it leaves the slot empty (no document available).
    pub fn sync(&mut self, wanted: bool, acquire: impl FnOnce() -> Option<T>) -> SlotChange {
        match (wanted, self.handle.is_some()) {
            (true, false) => match acquire() {
                Some(handle) => {
                    self.handle = Some(handle);
                    SlotChange::Acquired
                }
                None => SlotChange::Unchanged,
            },
            (false, true) => {
                self.release();
                SlotChange::Released
            }
            _ => SlotChange::Unchanged,
        }
    }

    pub fn release(&mut self) {
        self.handle = None;
    }
}

/// An event listener on `document`, removed when dropped.
pub struct DocumentListener {
    document: Document,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) =
            document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::error!("failed to add {} listener: {:?}", event, err);
            return None;
        }

        Some(Self {
            document,
            event,
            callback,
        })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

// Defer to the next tick: the handler that triggers the close must not be
// dropped by the resulting re-render while it is still being dispatched.
fn run_next_tick<T: 'static>(callback: Callback<T>, value: T) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        callback.run(value);
    });
}

/// Listeners that dismiss an open dialog: pointer-down outside `boundary`
/// and the Escape key.
pub struct DismissListeners {
    _pointer_down: DocumentListener,
    _escape: DocumentListener,
}

impl DismissListeners {
    pub fn attach(
        boundary: NodeRef<Div>,
        on_pointer_down: Callback<PointerTarget>,
        on_escape: Callback<()>,
    ) -> Option<Self> {
        let pointer_down = DocumentListener::attach("mousedown", move |event| {
            // Not mounted yet: nothing to compare against.
            let Some(dialog) = boundary.get_untracked() else {
                return;
            };
            let inside = event
                .target()
                .as_ref()
                .and_then(|t| t.dyn_ref::<Node>())
                .is_some_and(|node| dialog.contains(Some(node)));
            let target = if inside {
                PointerTarget::Inside
            } else {
                PointerTarget::Outside
            };
            run_next_tick(on_pointer_down, target);
        })?;

        let escape = DocumentListener::attach("keydown", move |event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    run_next_tick(on_escape, ());
                }
            }
        })?;

        Some(Self {
            _pointer_down: pointer_down,
            _escape: escape,
        })
    }
}
