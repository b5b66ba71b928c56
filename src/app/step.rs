use raylib::prelude::*;

use super::App;
use crate::event::{Event, SelectVia};

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

impl App {
    /// Turns this tick's input into events and drains the queue.
    pub fn step(&mut self, rl: &mut RaylibHandle, dt: f32) {
        if rl.is_window_resized() {
            self.queue.emit_now(Event::WindowResized {
                width: rl.get_screen_width(),
                height: rl.get_screen_height(),
            });
        }

        let cursor = rl.get_mouse_position();
        let over_list = self.list.bounds().is_some_and(|r| r.contains(cursor));
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(index) = self.list.hit(cursor) {
                self.queue.emit_now(Event::DatasetSelected {
                    index,
                    via: SelectVia::Click,
                });
            }
        }
        for (i, key) in DIGIT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                if let Some(index) = self.list.index_for_digit(i as u32 + 1) {
                    self.queue.emit_now(Event::DatasetSelected {
                        index,
                        via: SelectVia::Key,
                    });
                }
            }
        }

        if self.cam.update(rl, dt, over_list) {
            self.queue.emit_now(Event::CameraMoved);
        }

        self.queue.emit_now(Event::Tick);
        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(env);
        }
        self.queue.advance_tick();
    }
}
