use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, LitStr};

macro_rules! key {
    ($i:ident: $($n:literal),+) => {
        vec![$(($n, quote!(keymatrix::keyboard::Key::$i))),+]
    };
}

fn keycodes() -> HashMap<&'static str, TokenStream> {
    [
        key!(None: "KC_NO", "XXXXXXX"),
        key!(Transparent: "KC_TRNS", "KC_TRANSPARENT", "_______"),
        key!(A: "KC_A"),
        key!(B: "KC_B"),
        key!(C: "KC_C"),
        key!(D: "KC_D"),
        key!(E: "KC_E"),
        key!(F: "KC_F"),
        key!(G: "KC_G"),
        key!(H: "KC_H"),
        key!(I: "KC_I"),
        key!(J: "KC_J"),
        key!(K: "KC_K"),
        key!(L: "KC_L"),
        key!(M: "KC_M"),
        key!(N: "KC_N"),
        key!(O: "KC_O"),
        key!(P: "KC_P"),
        key!(Q: "KC_Q"),
        key!(R: "KC_R"),
        key!(S: "KC_S"),
        key!(T: "KC_T"),
        key!(U: "KC_U"),
        key!(V: "KC_V"),
        key!(W: "KC_W"),
        key!(X: "KC_X"),
        key!(Y: "KC_Y"),
        key!(Z: "KC_Z"),
        key!(Digit1: "KC_1"),
        key!(Digit2: "KC_2"),
        key!(Digit3: "KC_3"),
        key!(Digit4: "KC_4"),
        key!(Digit5: "KC_5"),
        key!(Digit6: "KC_6"),
        key!(Digit7: "KC_7"),
        key!(Digit8: "KC_8"),
        key!(Digit9: "KC_9"),
        key!(Digit0: "KC_0"),
        key!(Enter: "KC_ENT", "KC_ENTER"),
        key!(Escape: "KC_ESC", "KC_ESCAPE"),
        key!(Backspace: "KC_BSPC", "KC_BACKSPACE"),
        key!(Tab: "KC_TAB"),
        key!(Space: "KC_SPC", "KC_SPACE"),
        key!(Minus: "KC_MINS", "KC_MINUS"),
        key!(Equal: "KC_EQL", "KC_EQUAL"),
        key!(LeftBracket: "KC_LBRC", "KC_LEFT_BRACKET"),
        key!(RightBracket: "KC_RBRC", "KC_RIGHT_BRACKET"),
        key!(Backslash: "KC_BSLS", "KC_BACKSLASH"),
        key!(NonUsHash: "KC_NUHS", "KC_NONUS_HASH"),
        key!(Semicolon: "KC_SCLN", "KC_SEMICOLON"),
        key!(Quote: "KC_QUOT", "KC_QUOTE"),
        key!(Grave: "KC_GRV", "KC_GRAVE"),
        key!(Comma: "KC_COMM", "KC_COMMA"),
        key!(Period: "KC_DOT"),
        key!(Slash: "KC_SLSH", "KC_SLASH"),
        key!(CapsLock: "KC_CAPS", "KC_CAPS_LOCK"),
        key!(F1: "KC_F1"),
        key!(F2: "KC_F2"),
        key!(F3: "KC_F3"),
        key!(F4: "KC_F4"),
        key!(F5: "KC_F5"),
        key!(F6: "KC_F6"),
        key!(F7: "KC_F7"),
        key!(F8: "KC_F8"),
        key!(F9: "KC_F9"),
        key!(F10: "KC_F10"),
        key!(F11: "KC_F11"),
        key!(F12: "KC_F12"),
        key!(PrintScreen: "KC_PSCR", "KC_PRINT_SCREEN"),
        key!(ScrollLock: "KC_SCRL", "KC_SCROLL_LOCK"),
        key!(Pause: "KC_PAUS", "KC_PAUSE"),
        key!(Insert: "KC_INS", "KC_INSERT"),
        key!(Home: "KC_HOME"),
        key!(PageUp: "KC_PGUP", "KC_PAGE_UP"),
        key!(Delete: "KC_DEL", "KC_DELETE"),
        key!(End: "KC_END"),
        key!(PageDown: "KC_PGDN", "KC_PAGE_DOWN"),
        key!(Right: "KC_RGHT", "KC_RIGHT"),
        key!(Left: "KC_LEFT"),
        key!(Down: "KC_DOWN"),
        key!(Up: "KC_UP"),
        key!(NumLock: "KC_NUM", "KC_NUM_LOCK"),
        key!(KeypadSlash: "KC_PSLS", "KC_KP_SLASH"),
        key!(KeypadAsterisk: "KC_PAST", "KC_KP_ASTERISK"),
        key!(KeypadMinus: "KC_PMNS", "KC_KP_MINUS"),
        key!(KeypadPlus: "KC_PPLS", "KC_KP_PLUS"),
        key!(KeypadEnter: "KC_PENT", "KC_KP_ENTER"),
        key!(Keypad1: "KC_P1", "KC_KP_1"),
        key!(Keypad2: "KC_P2", "KC_KP_2"),
        key!(Keypad3: "KC_P3", "KC_KP_3"),
        key!(Keypad4: "KC_P4", "KC_KP_4"),
        key!(Keypad5: "KC_P5", "KC_KP_5"),
        key!(Keypad6: "KC_P6", "KC_KP_6"),
        key!(Keypad7: "KC_P7", "KC_KP_7"),
        key!(Keypad8: "KC_P8", "KC_KP_8"),
        key!(Keypad9: "KC_P9", "KC_KP_9"),
        key!(Keypad0: "KC_P0", "KC_KP_0"),
        key!(KeypadDot: "KC_PDOT", "KC_KP_DOT"),
        key!(NonUsBackslash: "KC_NUBS", "KC_NONUS_BACKSLASH"),
        key!(Application: "KC_APP", "KC_APPLICATION"),
        key!(Power: "KC_PWR", "KC_KB_POWER"),
        key!(KeypadEqual: "KC_PEQL", "KC_KP_EQUAL"),
        key!(F13: "KC_F13"),
        key!(F14: "KC_F14"),
        key!(F15: "KC_F15"),
        key!(F16: "KC_F16"),
        key!(F17: "KC_F17"),
        key!(F18: "KC_F18"),
        key!(F19: "KC_F19"),
        key!(F20: "KC_F20"),
        key!(F21: "KC_F21"),
        key!(F22: "KC_F22"),
        key!(F23: "KC_F23"),
        key!(F24: "KC_F24"),
        key!(Mute: "KC_KB_MUTE"),
        key!(VolumeUp: "KC_KB_VOLUME_UP"),
        key!(VolumeDown: "KC_KB_VOLUME_DOWN"),
        key!(LeftControl: "KC_LCTL", "KC_LEFT_CTRL"),
        key!(LeftShift: "KC_LSFT", "KC_LEFT_SHIFT"),
        key!(LeftAlt: "KC_LALT", "KC_LEFT_ALT"),
        key!(LeftGui: "KC_LGUI", "KC_LEFT_GUI"),
        key!(RightControl: "KC_RCTL", "KC_RIGHT_CTRL"),
        key!(RightShift: "KC_RSFT", "KC_RIGHT_SHIFT"),
        key!(RightAlt: "KC_RALT", "KC_RIGHT_ALT", "KC_ALGR"),
        key!(RightGui: "KC_RGUI", "KC_RIGHT_GUI"),
        key!(MediaNextTrack: "KC_MNXT", "KC_MEDIA_NEXT_TRACK"),
        key!(MediaPrevTrack: "KC_MPRV", "KC_MEDIA_PREV_TRACK"),
        key!(MediaStop: "KC_MSTP", "KC_MEDIA_STOP"),
        key!(MediaPlayPause: "KC_MPLY", "KC_MEDIA_PLAY_PAUSE"),
        key!(MediaMute: "KC_MUTE", "KC_AUDIO_MUTE"),
        key!(MediaVolumeUp: "KC_VOLU", "KC_AUDIO_VOL_UP"),
        key!(MediaVolumeDown: "KC_VOLD", "KC_AUDIO_VOL_DOWN"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Builds a `[[Key; COLS]; ROWS]` from a text grid of QMK keycode names.
///
/// Each row is one line of `|`-separated cells that starts and ends with
/// `|`. Lines starting with `//` are positional comments and are skipped.
///
/// ```ignore
/// const KEYS: [[Key; 3]; 1] = keymap!(r"
///     //  S1      S2      S3
///     | KC_NO | KC_Q  | _______ |
/// ");
/// ```
#[proc_macro]
pub fn keymap(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    let source = literal.value();
    let table = keycodes();

    let rows = match parse_rows(&source) {
        Ok(rows) => rows,
        Err(message) => {
            return syn::Error::new(literal.span(), message)
                .to_compile_error()
                .into()
        }
    };

    let array = rows
        .iter()
        .map(|cells| {
            let keys = cells
                .iter()
                .map(|cell| match table.get(cell) {
                    Some(key) => key.clone(),
                    None => {
                        let message = format!("keymap: Unknown keycode: {}", cell);
                        quote!(compile_error!(#message))
                    }
                })
                .map(|t| quote! {#t,})
                .collect::<TokenStream>();
            quote! {
                [#keys]
            }
        })
        .map(|t| quote! {#t,})
        .collect::<TokenStream>();

    let expanded = quote! {
        [#array]
    };

    proc_macro::TokenStream::from(expanded)
}

fn parse_rows(source: &str) -> Result<Vec<Vec<&str>>, String> {
    let mut rows = Vec::new();
    for line in source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
    {
        let cells = line
            .strip_prefix('|')
            .and_then(|line| line.strip_suffix('|'))
            .ok_or_else(|| {
                format!(
                    "keymap: row {} must start and end with `|`: {}",
                    rows.len(),
                    line
                )
            })?;
        rows.push(cells.split('|').map(str::trim).collect::<Vec<_>>());
    }

    if let Some(width) = rows.first().map(Vec::len) {
        if let Some(row) = rows.iter().position(|cells| cells.len() != width) {
            return Err(format!(
                "keymap: row {} has {} keys, expected {}",
                row,
                rows[row].len(),
                width
            ));
        }
    }
    Ok(rows)
}
