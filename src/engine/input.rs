use crate::browser;
use anyhow::Result;
use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use super::Point;

pub enum KeyPress {
    KeyUp(KeyboardEvent),
    KeyDown(KeyboardEvent),
}

/// Hook keydown/keyup on the document and funnel them into a channel the
/// game loop drains once per animation frame.
pub fn prepare_input() -> Result<UnboundedReceiver<KeyPress>> {
    let (keydown_sender, keyevent_receiver) = unbounded();
    let keydown_sender = Rc::new(RefCell::new(keydown_sender));
    let keyup_sender = keydown_sender.clone();

    let onkeydown = browser::closure_wrap(Box::new(move |keycode: KeyboardEvent| {
        let _ = keydown_sender
            .borrow_mut()
            .start_send(KeyPress::KeyDown(keycode));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let onkeyup = browser::closure_wrap(Box::new(move |keycode: KeyboardEvent| {
        let _ = keyup_sender
            .borrow_mut()
            .start_send(KeyPress::KeyUp(keycode));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let document = browser::document()?;
    document.set_onkeydown(Some(onkeydown.as_ref().unchecked_ref()));
    document.set_onkeyup(Some(onkeyup.as_ref().unchecked_ref()));
    onkeydown.forget();
    onkeyup.forget();

    Ok(keyevent_receiver)
}

pub fn process_input(state: &mut KeyState, receiver: &mut UnboundedReceiver<KeyPress>) {
    loop {
        match receiver.try_next() {
            Ok(None) => break,
            Err(_) => break,
            Ok(Some(event)) => match event {
                KeyPress::KeyUp(event) => state.set_released(&event.code()),
                KeyPress::KeyDown(event) => state.set_pressed(&event.code()),
            },
        }
    }
}

/// Which keys are currently held, keyed by `KeyboardEvent.code`.
#[derive(Debug, Default)]
pub struct KeyState {
    pressed_keys: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        KeyState {
            pressed_keys: HashSet::new(),
        }
    }

    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed_keys.contains(code)
    }

    fn set_pressed(&mut self, code: &str) {
        self.pressed_keys.insert(code.into());
    }

    fn set_released(&mut self, code: &str) {
        self.pressed_keys.remove(code);
    }
}

/// Hook clicks on the canvas; coordinates are canvas-relative offsets, which
/// is what the menu hit rects are measured in.
pub fn prepare_pointer_input() -> Result<UnboundedReceiver<Point>> {
    let (click_sender, click_receiver) = unbounded();
    let click_sender = Rc::new(RefCell::new(click_sender));

    let onclick = browser::closure_wrap(Box::new(move |event: MouseEvent| {
        let _ = click_sender.borrow_mut().start_send(Point {
            x: event.offset_x() as i16,
            y: event.offset_y() as i16,
        });
    }) as Box<dyn FnMut(MouseEvent)>);

    browser::canvas()?.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();

    Ok(click_receiver)
}

pub fn drain_clicks(pending: &mut Vec<Point>, receiver: &mut UnboundedReceiver<Point>) {
    while let Ok(Some(point)) = receiver.try_next() {
        pending.push(point);
    }
}
