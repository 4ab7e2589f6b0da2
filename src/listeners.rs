//! Document-level input dispatch: keyup and touch listeners that activate the
//! `nav-*` targets owned by the page.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, KeyboardEvent, TouchEvent};

use crate::model::{self, Direction};
use crate::state::TouchSessions;

/// Activates the target element for `dir`. A page without that element gets a
/// silent no-op rather than an error; the targets are not ours to guarantee.
pub fn navigate(document: &Document, dir: Direction) {
    if let Some(el) = document.get_element_by_id(dir.target_id()) {
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            el.click();
        }
    }
}

/// Registered document listeners. Owning the closures keeps them alive for as
/// long as they are attached; `detach` unhooks them before drop.
pub struct NavListeners {
    document: Document,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    touch_cancel: Closure<dyn FnMut(TouchEvent)>,
}

impl NavListeners {
    pub fn attach(document: &Document) -> Self {
        let sessions = Rc::new(RefCell::new(TouchSessions::default()));

        let keyup = {
            let document = document.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Some(dir) =
                    model::direction_for_key(&e.key(), e.meta_key(), e.alt_key(), e.ctrl_key())
                {
                    navigate(&document, dir);
                }
            }) as Box<dyn FnMut(_)>)
        };

        let touch_start = {
            let sessions = sessions.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let changed = e.changed_touches();
                for i in 0..changed.length() {
                    if let Some(t) = changed.item(i) {
                        sessions.borrow_mut().begin(
                            t.identifier(),
                            t.screen_x() as f64,
                            t.screen_y() as f64,
                        );
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        let touch_end = {
            let document = document.clone();
            let sessions = sessions.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let changed = e.changed_touches();
                for i in 0..changed.length() {
                    if let Some(t) = changed.item(i) {
                        let dir = sessions.borrow_mut().finish(
                            t.identifier(),
                            t.screen_x() as f64,
                            t.screen_y() as f64,
                        );
                        if let Some(dir) = dir {
                            navigate(&document, dir);
                        }
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        let touch_cancel = {
            let sessions = sessions.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let changed = e.changed_touches();
                for i in 0..changed.length() {
                    if let Some(t) = changed.item(i) {
                        sessions.borrow_mut().cancel(t.identifier());
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        document
            .add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())
            .ok();
        document
            .add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())
            .ok();
        document
            .add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref())
            .ok();
        document
            .add_event_listener_with_callback("touchcancel", touch_cancel.as_ref().unchecked_ref())
            .ok();

        Self {
            document: document.clone(),
            keyup,
            touch_start,
            touch_end,
            touch_cancel,
        }
    }

    pub fn detach(&self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref());
        let _ = self.document.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "touchend",
            self.touch_end.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "touchcancel",
            self.touch_cancel.as_ref().unchecked_ref(),
        );
    }
}
