//! Keyboard-to-keypad mapping shared by the keypad-style apps.

use egui::{Context, Key};

use crate::keypad::{BinKey, KeyInput};

/// Collect this frame's keyboard events as keypad presses, in a stable
/// order. Shift+= is `+`, shift+8 is `*`, shift+5 is `%`, shift+9/0 are
/// parentheses; Enter or a plain `=` commits, Escape clears.
pub fn collect_key_inputs(ctx: &Context) -> Vec<KeyInput> {
    let mut inputs = Vec::new();
    ctx.input(|i| {
        for digit in '0'..='9' {
            if !i.modifiers.shift && i.key_pressed(digit_to_key(digit)) {
                inputs.push(KeyInput::Digit(digit));
            }
        }

        if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
            inputs.push(KeyInput::Op(BinKey::Add));
        }
        if i.key_pressed(Key::Minus) {
            inputs.push(KeyInput::Op(BinKey::Sub));
        }
        if i.modifiers.shift && i.key_pressed(Key::Num8) {
            inputs.push(KeyInput::Op(BinKey::Mul));
        }
        if i.key_pressed(Key::Slash) {
            inputs.push(KeyInput::Op(BinKey::Div));
        }
        if i.modifiers.shift && i.key_pressed(Key::Num5) {
            inputs.push(KeyInput::Op(BinKey::Rem));
        }
        if i.modifiers.shift && i.key_pressed(Key::Num9) {
            inputs.push(KeyInput::OpenParen);
        }
        if i.modifiers.shift && i.key_pressed(Key::Num0) {
            inputs.push(KeyInput::CloseParen);
        }

        if i.key_pressed(Key::Period) {
            inputs.push(KeyInput::Dot);
        }
        if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
            inputs.push(KeyInput::Equals);
        }
        if i.key_pressed(Key::Escape) {
            inputs.push(KeyInput::Clear);
        }
        if i.key_pressed(Key::Backspace) {
            inputs.push(KeyInput::Backspace);
        }
    });
    inputs
}

fn digit_to_key(digit: char) -> Key {
    match digit {
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        _ => Key::Num0,
    }
}
