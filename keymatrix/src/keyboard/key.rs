/// A key action: a HID keyboard/keypad usage, a modifier, a consumer
/// (media) usage, or one of the two no-op sentinels.
///
/// Discriminants are the HID usage IDs. Consumer usages are offset by
/// `0x1000` to keep them apart from keyboard usages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Key {
    /// Explicitly unassigned.
    #[default]
    None = 0x0000,
    /// Defer to the layer below.
    Transparent = 0x0001,
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000a,
    H = 0x000b,
    I = 0x000c,
    J = 0x000d,
    K = 0x000e,
    L = 0x000f,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001a,
    X = 0x001b,
    Y = 0x001c,
    Z = 0x001d,
    Digit1 = 0x001e,
    Digit2 = 0x001f,
    Digit3 = 0x0020,
    Digit4 = 0x0021,
    Digit5 = 0x0022,
    Digit6 = 0x0023,
    Digit7 = 0x0024,
    Digit8 = 0x0025,
    Digit9 = 0x0026,
    Digit0 = 0x0027,
    Enter = 0x0028,
    Escape = 0x0029,
    Backspace = 0x002a,
    Tab = 0x002b,
    Space = 0x002c,
    Minus = 0x002d,
    Equal = 0x002e,
    LeftBracket = 0x002f,
    RightBracket = 0x0030,
    Backslash = 0x0031,
    NonUsHash = 0x0032,
    Semicolon = 0x0033,
    Quote = 0x0034,
    Grave = 0x0035,
    Comma = 0x0036,
    Period = 0x0037,
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003a,
    F2 = 0x003b,
    F3 = 0x003c,
    F4 = 0x003d,
    F5 = 0x003e,
    F6 = 0x003f,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004a,
    PageUp = 0x004b,
    Delete = 0x004c,
    End = 0x004d,
    PageDown = 0x004e,
    Right = 0x004f,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    NumLock = 0x0053,
    KeypadSlash = 0x0054,
    KeypadAsterisk = 0x0055,
    KeypadMinus = 0x0056,
    KeypadPlus = 0x0057,
    KeypadEnter = 0x0058,
    Keypad1 = 0x0059,
    Keypad2 = 0x005a,
    Keypad3 = 0x005b,
    Keypad4 = 0x005c,
    Keypad5 = 0x005d,
    Keypad6 = 0x005e,
    Keypad7 = 0x005f,
    Keypad8 = 0x0060,
    Keypad9 = 0x0061,
    Keypad0 = 0x0062,
    KeypadDot = 0x0063,
    NonUsBackslash = 0x0064,
    Application = 0x0065,
    Power = 0x0066,
    KeypadEqual = 0x0067,
    F13 = 0x0068,
    F14 = 0x0069,
    F15 = 0x006a,
    F16 = 0x006b,
    F17 = 0x006c,
    F18 = 0x006d,
    F19 = 0x006e,
    F20 = 0x006f,
    F21 = 0x0070,
    F22 = 0x0071,
    F23 = 0x0072,
    F24 = 0x0073,
    Mute = 0x007f,
    VolumeUp = 0x0080,
    VolumeDown = 0x0081,
    LeftControl = 0x00e0,
    LeftShift = 0x00e1,
    LeftAlt = 0x00e2,
    LeftGui = 0x00e3,
    RightControl = 0x00e4,
    RightShift = 0x00e5,
    RightAlt = 0x00e6,
    RightGui = 0x00e7,
    MediaNextTrack = 0x10b5,
    MediaPrevTrack = 0x10b6,
    MediaStop = 0x10b7,
    MediaPlayPause = 0x10cd,
    MediaMute = 0x10e2,
    MediaVolumeUp = 0x10e9,
    MediaVolumeDown = 0x10ea,
}

impl Key {
    pub fn is_noop(&self) -> bool {
        matches!(self, Key::None | Key::Transparent)
    }

    pub fn is_modifier_key(&self) -> bool {
        (0x00e0..=0x00e7).contains(&self.usage())
    }

    pub fn is_keyboard_key(&self) -> bool {
        (0x0004..0x00e0).contains(&self.usage())
    }

    pub fn is_media_key(&self) -> bool {
        (0x1000..0x2000).contains(&self.usage())
    }

    /// Keyboard page usage ID, for plain keys only.
    pub fn key_code(&self) -> Option<u8> {
        if self.is_keyboard_key() {
            Some(self.usage() as u8)
        } else {
            None
        }
    }

    /// Bit of this modifier in a boot report's modifier byte.
    pub fn modifier_key_flag(&self) -> u8 {
        if self.is_modifier_key() {
            1 << (self.usage() - 0x00e0)
        } else {
            0
        }
    }

    pub fn media_usage_id(&self) -> Option<u16> {
        if self.is_media_key() {
            Some(self.usage() & 0x0fff)
        } else {
            None
        }
    }

    fn usage(&self) -> u16 {
        *self as u16
    }
}
