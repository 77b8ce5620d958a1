//! Keycode translation between the native keysym space and the remote
//! server's virtual-key space.
//!
//! Both directions are total functions over `u32`. Low values are treated as
//! already-portable plain character codes and pass through unchanged; the
//! rest go through a static table covering navigation, modifier, function,
//! keypad, dead-key and CJK composition keys. Unmapped input yields a
//! sentinel (`remote_key::KEY_UNKNOWN` going out, `0` coming back) so
//! callers can drop the event instead of forwarding garbage.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::keyevent::{native_mods, KeyEventKind};

/// Native keysyms below this value pass through untranslated. Covers the
/// Latin-1 block plus the directly-encoded Unicode rows the server already
/// understands.
const NATIVE_PASSTHROUGH_LIMIT: u32 = 0x3000;

/// Remote keys below this value pass through untranslated.
const REMOTE_PASSTHROUGH_LIMIT: u32 = 0x1000;

/// Remote event kind discriminants on the wire.
pub const REMOTE_KEY_PRESS: i32 = 6;
pub const REMOTE_KEY_RELEASE: i32 = 7;

/// Native keysym values (X11 numbering).
pub mod keysym {
    // misc
    pub const ESCAPE: u32 = 0xff1b;
    pub const TAB: u32 = 0xff09;
    pub const ISO_LEFT_TAB: u32 = 0xfe20;
    pub const BACKSPACE: u32 = 0xff08;
    pub const RETURN: u32 = 0xff0d;
    pub const INSERT: u32 = 0xff63;
    pub const DELETE: u32 = 0xffff;
    pub const CLEAR: u32 = 0xff0b;
    pub const PAUSE: u32 = 0xff13;
    pub const PRINT: u32 = 0xff61;

    // cursor movement
    pub const HOME: u32 = 0xff50;
    pub const END: u32 = 0xff57;
    pub const LEFT: u32 = 0xff51;
    pub const UP: u32 = 0xff52;
    pub const RIGHT: u32 = 0xff53;
    pub const DOWN: u32 = 0xff54;
    pub const PRIOR: u32 = 0xff55;
    pub const NEXT: u32 = 0xff56;

    // modifiers
    pub const SHIFT_L: u32 = 0xffe1;
    pub const SHIFT_R: u32 = 0xffe2;
    pub const SHIFT_LOCK: u32 = 0xffe6;
    pub const CONTROL_L: u32 = 0xffe3;
    pub const CONTROL_R: u32 = 0xffe4;
    pub const META_L: u32 = 0xffe7;
    pub const META_R: u32 = 0xffe8;
    pub const ALT_L: u32 = 0xffe9;
    pub const ALT_R: u32 = 0xffea;
    pub const CAPS_LOCK: u32 = 0xffe5;
    pub const NUM_LOCK: u32 = 0xff7f;
    pub const SCROLL_LOCK: u32 = 0xff14;
    pub const SUPER_L: u32 = 0xffeb;
    pub const SUPER_R: u32 = 0xffec;
    pub const MENU: u32 = 0xff67;
    pub const HYPER_L: u32 = 0xffed;
    pub const HYPER_R: u32 = 0xffee;
    pub const HELP: u32 = 0xff6a;

    // function keys
    pub const F1: u32 = 0xffbe;
    pub const F2: u32 = 0xffbf;
    pub const F3: u32 = 0xffc0;
    pub const F4: u32 = 0xffc1;
    pub const F5: u32 = 0xffc2;
    pub const F6: u32 = 0xffc3;
    pub const F7: u32 = 0xffc4;
    pub const F8: u32 = 0xffc5;
    pub const F9: u32 = 0xffc6;
    pub const F10: u32 = 0xffc7;
    pub const F11: u32 = 0xffc8;
    pub const F12: u32 = 0xffc9;
    pub const F13: u32 = 0xffca;
    pub const F14: u32 = 0xffcb;
    pub const F15: u32 = 0xffcc;
    pub const F16: u32 = 0xffcd;
    pub const F17: u32 = 0xffce;
    pub const F18: u32 = 0xffcf;
    pub const F19: u32 = 0xffd0;
    pub const F20: u32 = 0xffd1;

    // vendor hardcodes
    pub const SUN_SYSREQ: u32 = 0x1005_ff60;
    pub const X386_SYSREQ: u32 = 0x1007_ff00;
    pub const HP_BACKTAB: u32 = 0x1000_ff74;
    pub const SUN_F36: u32 = 0x1005_ff10;
    pub const SUN_F37: u32 = 0x1005_ff11;

    // keypad
    pub const KP_SPACE: u32 = 0xff80;
    pub const KP_TAB: u32 = 0xff89;
    pub const KP_ENTER: u32 = 0xff8d;
    pub const KP_F1: u32 = 0xff91;
    pub const KP_F2: u32 = 0xff92;
    pub const KP_F3: u32 = 0xff93;
    pub const KP_F4: u32 = 0xff94;
    pub const KP_HOME: u32 = 0xff95;
    pub const KP_LEFT: u32 = 0xff96;
    pub const KP_UP: u32 = 0xff97;
    pub const KP_RIGHT: u32 = 0xff98;
    pub const KP_DOWN: u32 = 0xff99;
    pub const KP_PRIOR: u32 = 0xff9a;
    pub const KP_NEXT: u32 = 0xff9b;
    pub const KP_END: u32 = 0xff9c;
    pub const KP_BEGIN: u32 = 0xff9d;
    pub const KP_INSERT: u32 = 0xff9e;
    pub const KP_DELETE: u32 = 0xff9f;
    pub const KP_EQUAL: u32 = 0xffbd;
    pub const KP_MULTIPLY: u32 = 0xffaa;
    pub const KP_ADD: u32 = 0xffab;
    pub const KP_SEPARATOR: u32 = 0xffac;
    pub const KP_SUBTRACT: u32 = 0xffad;
    pub const KP_DECIMAL: u32 = 0xffae;
    pub const KP_DIVIDE: u32 = 0xffaf;
    pub const KP_0: u32 = 0xffb0;
    pub const KP_1: u32 = 0xffb1;
    pub const KP_2: u32 = 0xffb2;
    pub const KP_3: u32 = 0xffb3;
    pub const KP_4: u32 = 0xffb4;
    pub const KP_5: u32 = 0xffb5;
    pub const KP_6: u32 = 0xffb6;
    pub const KP_7: u32 = 0xffb7;
    pub const KP_8: u32 = 0xffb8;
    pub const KP_9: u32 = 0xffb9;

    // character composition
    pub const ISO_LEVEL3_SHIFT: u32 = 0xfe03;
    pub const MULTI_KEY: u32 = 0xff20;
    pub const CODEINPUT: u32 = 0xff37;
    pub const SINGLE_CANDIDATE: u32 = 0xff3c;
    pub const MULTIPLE_CANDIDATE: u32 = 0xff3d;
    pub const PREVIOUS_CANDIDATE: u32 = 0xff3e;
    pub const MODE_SWITCH: u32 = 0xff7e;

    // Japanese keyboard support
    pub const KANJI: u32 = 0xff21;
    pub const MUHENKAN: u32 = 0xff22;
    pub const HENKAN: u32 = 0xff23;
    pub const ROMAJI: u32 = 0xff24;
    pub const HIRAGANA: u32 = 0xff25;
    pub const KATAKANA: u32 = 0xff26;
    pub const HIRAGANA_KATAKANA: u32 = 0xff27;
    pub const ZENKAKU: u32 = 0xff28;
    pub const HANKAKU: u32 = 0xff29;
    pub const ZENKAKU_HANKAKU: u32 = 0xff2a;
    pub const TOUROKU: u32 = 0xff2b;
    pub const MASSYO: u32 = 0xff2c;
    pub const KANA_LOCK: u32 = 0xff2d;
    pub const KANA_SHIFT: u32 = 0xff2e;
    pub const EISU_SHIFT: u32 = 0xff2f;
    pub const EISU_TOGGLE: u32 = 0xff30;

    // Korean keyboard support
    pub const HANGUL: u32 = 0xff31;
    pub const HANGUL_START: u32 = 0xff32;
    pub const HANGUL_END: u32 = 0xff33;
    pub const HANGUL_HANJA: u32 = 0xff34;
    pub const HANGUL_JAMO: u32 = 0xff35;
    pub const HANGUL_ROMAJA: u32 = 0xff36;
    pub const HANGUL_JEONJA: u32 = 0xff38;
    pub const HANGUL_BANJA: u32 = 0xff39;
    pub const HANGUL_PREHANJA: u32 = 0xff3a;
    pub const HANGUL_POSTHANJA: u32 = 0xff3b;
    pub const HANGUL_SPECIAL: u32 = 0xff3f;

    // dead keys
    pub const DEAD_GRAVE: u32 = 0xfe50;
    pub const DEAD_ACUTE: u32 = 0xfe51;
    pub const DEAD_CIRCUMFLEX: u32 = 0xfe52;
    pub const DEAD_TILDE: u32 = 0xfe53;
    pub const DEAD_MACRON: u32 = 0xfe54;
    pub const DEAD_BREVE: u32 = 0xfe55;
    pub const DEAD_ABOVEDOT: u32 = 0xfe56;
    pub const DEAD_DIAERESIS: u32 = 0xfe57;
    pub const DEAD_ABOVERING: u32 = 0xfe58;
    pub const DEAD_DOUBLEACUTE: u32 = 0xfe59;
    pub const DEAD_CARON: u32 = 0xfe5a;
    pub const DEAD_CEDILLA: u32 = 0xfe5b;
    pub const DEAD_OGONEK: u32 = 0xfe5c;
    pub const DEAD_IOTA: u32 = 0xfe5d;
    pub const DEAD_VOICED_SOUND: u32 = 0xfe5e;
    pub const DEAD_SEMIVOICED_SOUND: u32 = 0xfe5f;
    pub const DEAD_BELOWDOT: u32 = 0xfe60;
    pub const DEAD_HOOK: u32 = 0xfe61;
    pub const DEAD_HORN: u32 = 0xfe62;
}

/// Remote virtual-key values (Qt-style numbering, as the server expects).
pub mod remote_key {
    pub const ESCAPE: u32 = 0x0100_0000;
    pub const TAB: u32 = 0x0100_0001;
    pub const BACKTAB: u32 = 0x0100_0002;
    pub const BACKSPACE: u32 = 0x0100_0003;
    pub const RETURN: u32 = 0x0100_0004;
    pub const ENTER: u32 = 0x0100_0005;
    pub const INSERT: u32 = 0x0100_0006;
    pub const DELETE: u32 = 0x0100_0007;
    pub const PAUSE: u32 = 0x0100_0008;
    pub const PRINT: u32 = 0x0100_0009;
    pub const SYSREQ: u32 = 0x0100_000a;
    pub const CLEAR: u32 = 0x0100_000b;

    pub const HOME: u32 = 0x0100_0010;
    pub const END: u32 = 0x0100_0011;
    pub const LEFT: u32 = 0x0100_0012;
    pub const UP: u32 = 0x0100_0013;
    pub const RIGHT: u32 = 0x0100_0014;
    pub const DOWN: u32 = 0x0100_0015;
    pub const PAGE_UP: u32 = 0x0100_0016;
    pub const PAGE_DOWN: u32 = 0x0100_0017;

    pub const SHIFT: u32 = 0x0100_0020;
    pub const CONTROL: u32 = 0x0100_0021;
    pub const META: u32 = 0x0100_0022;
    pub const ALT: u32 = 0x0100_0023;
    pub const CAPS_LOCK: u32 = 0x0100_0024;
    pub const NUM_LOCK: u32 = 0x0100_0025;
    pub const SCROLL_LOCK: u32 = 0x0100_0026;

    pub const F1: u32 = 0x0100_0030;
    pub const F2: u32 = 0x0100_0031;
    pub const F3: u32 = 0x0100_0032;
    pub const F4: u32 = 0x0100_0033;
    pub const F5: u32 = 0x0100_0034;
    pub const F6: u32 = 0x0100_0035;
    pub const F7: u32 = 0x0100_0036;
    pub const F8: u32 = 0x0100_0037;
    pub const F9: u32 = 0x0100_0038;
    pub const F10: u32 = 0x0100_0039;
    pub const F11: u32 = 0x0100_003a;
    pub const F12: u32 = 0x0100_003b;
    pub const F13: u32 = 0x0100_003c;
    pub const F14: u32 = 0x0100_003d;
    pub const F15: u32 = 0x0100_003e;
    pub const F16: u32 = 0x0100_003f;
    pub const F17: u32 = 0x0100_0040;
    pub const F18: u32 = 0x0100_0041;
    pub const F19: u32 = 0x0100_0042;
    pub const F20: u32 = 0x0100_0043;

    pub const SUPER_L: u32 = 0x0100_0053;
    pub const SUPER_R: u32 = 0x0100_0054;
    pub const MENU: u32 = 0x0100_0055;
    pub const HYPER_L: u32 = 0x0100_0056;
    pub const HYPER_R: u32 = 0x0100_0057;
    pub const HELP: u32 = 0x0100_0058;

    pub const ALTGR: u32 = 0x0100_1103;
    pub const MULTI_KEY: u32 = 0x0100_1120;
    pub const KANJI: u32 = 0x0100_1121;
    pub const MUHENKAN: u32 = 0x0100_1122;
    pub const HENKAN: u32 = 0x0100_1123;
    pub const ROMAJI: u32 = 0x0100_1124;
    pub const HIRAGANA: u32 = 0x0100_1125;
    pub const KATAKANA: u32 = 0x0100_1126;
    pub const HIRAGANA_KATAKANA: u32 = 0x0100_1127;
    pub const ZENKAKU: u32 = 0x0100_1128;
    pub const HANKAKU: u32 = 0x0100_1129;
    pub const ZENKAKU_HANKAKU: u32 = 0x0100_112a;
    pub const TOUROKU: u32 = 0x0100_112b;
    pub const MASSYO: u32 = 0x0100_112c;
    pub const KANA_LOCK: u32 = 0x0100_112d;
    pub const KANA_SHIFT: u32 = 0x0100_112e;
    pub const EISU_SHIFT: u32 = 0x0100_112f;
    pub const EISU_TOGGLE: u32 = 0x0100_1130;
    pub const HANGUL: u32 = 0x0100_1131;
    pub const HANGUL_START: u32 = 0x0100_1132;
    pub const HANGUL_END: u32 = 0x0100_1133;
    pub const HANGUL_HANJA: u32 = 0x0100_1134;
    pub const HANGUL_JAMO: u32 = 0x0100_1135;
    pub const HANGUL_ROMAJA: u32 = 0x0100_1136;
    pub const CODEINPUT: u32 = 0x0100_1137;
    pub const HANGUL_JEONJA: u32 = 0x0100_1138;
    pub const HANGUL_BANJA: u32 = 0x0100_1139;
    pub const HANGUL_PREHANJA: u32 = 0x0100_113a;
    pub const HANGUL_POSTHANJA: u32 = 0x0100_113b;
    pub const SINGLE_CANDIDATE: u32 = 0x0100_113c;
    pub const MULTIPLE_CANDIDATE: u32 = 0x0100_113d;
    pub const PREVIOUS_CANDIDATE: u32 = 0x0100_113e;
    pub const HANGUL_SPECIAL: u32 = 0x0100_113f;
    pub const MODE_SWITCH: u32 = 0x0100_117e;

    pub const DEAD_GRAVE: u32 = 0x0100_1250;
    pub const DEAD_ACUTE: u32 = 0x0100_1251;
    pub const DEAD_CIRCUMFLEX: u32 = 0x0100_1252;
    pub const DEAD_TILDE: u32 = 0x0100_1253;
    pub const DEAD_MACRON: u32 = 0x0100_1254;
    pub const DEAD_BREVE: u32 = 0x0100_1255;
    pub const DEAD_ABOVEDOT: u32 = 0x0100_1256;
    pub const DEAD_DIAERESIS: u32 = 0x0100_1257;
    pub const DEAD_ABOVERING: u32 = 0x0100_1258;
    pub const DEAD_DOUBLEACUTE: u32 = 0x0100_1259;
    pub const DEAD_CARON: u32 = 0x0100_125a;
    pub const DEAD_CEDILLA: u32 = 0x0100_125b;
    pub const DEAD_OGONEK: u32 = 0x0100_125c;
    pub const DEAD_IOTA: u32 = 0x0100_125d;
    pub const DEAD_VOICED_SOUND: u32 = 0x0100_125e;
    pub const DEAD_SEMIVOICED_SOUND: u32 = 0x0100_125f;
    pub const DEAD_BELOWDOT: u32 = 0x0100_1260;
    pub const DEAD_HOOK: u32 = 0x0100_1261;
    pub const DEAD_HORN: u32 = 0x0100_1262;

    // plain character codes shared with the keypad rows
    pub const SPACE: u32 = 0x20;
    pub const ASTERISK: u32 = 0x2a;
    pub const PLUS: u32 = 0x2b;
    pub const COMMA: u32 = 0x2c;
    pub const MINUS: u32 = 0x2d;
    pub const PERIOD: u32 = 0x2e;
    pub const SLASH: u32 = 0x2f;
    pub const DIGIT_0: u32 = 0x30;
    pub const DIGIT_9: u32 = 0x39;
    pub const EQUAL: u32 = 0x3d;

    /// Sentinel for keysyms the table does not cover.
    pub const KEY_UNKNOWN: u32 = 0x01ff_ffff;
}

/// The (keysym, remote key) pairs. Several keysyms share a remote key
/// (left/right modifier pairs, keypad aliases); the first row for a remote
/// key is its canonical native form for the reverse direction.
#[rustfmt::skip]
static KEYSYM_TABLE: &[(u32, u32)] = &[
    // misc keys
    (keysym::ESCAPE,              remote_key::ESCAPE),
    (keysym::TAB,                 remote_key::TAB),
    (keysym::ISO_LEFT_TAB,        remote_key::BACKTAB),
    (keysym::BACKSPACE,           remote_key::BACKSPACE),
    (keysym::RETURN,              remote_key::RETURN),
    (keysym::INSERT,              remote_key::INSERT),
    (keysym::DELETE,              remote_key::DELETE),
    (keysym::CLEAR,               remote_key::DELETE),
    (keysym::PAUSE,               remote_key::PAUSE),
    (keysym::PRINT,               remote_key::PRINT),

    // cursor movement
    (keysym::HOME,                remote_key::HOME),
    (keysym::END,                 remote_key::END),
    (keysym::LEFT,                remote_key::LEFT),
    (keysym::UP,                  remote_key::UP),
    (keysym::RIGHT,               remote_key::RIGHT),
    (keysym::DOWN,                remote_key::DOWN),
    (keysym::PRIOR,               remote_key::PAGE_UP),
    (keysym::NEXT,                remote_key::PAGE_DOWN),

    // modifiers
    (keysym::SHIFT_L,             remote_key::SHIFT),
    (keysym::SHIFT_R,             remote_key::SHIFT),
    (keysym::SHIFT_LOCK,          remote_key::SHIFT),
    (keysym::CONTROL_L,           remote_key::CONTROL),
    (keysym::CONTROL_R,           remote_key::CONTROL),
    (keysym::META_L,              remote_key::META),
    (keysym::META_R,              remote_key::META),
    (keysym::ALT_L,               remote_key::ALT),
    (keysym::ALT_R,               remote_key::ALT),
    (keysym::CAPS_LOCK,           remote_key::CAPS_LOCK),
    (keysym::NUM_LOCK,            remote_key::NUM_LOCK),
    (keysym::SCROLL_LOCK,         remote_key::SCROLL_LOCK),
    (keysym::SUPER_L,             remote_key::SUPER_L),
    (keysym::SUPER_R,             remote_key::SUPER_R),
    (keysym::MENU,                remote_key::MENU),
    (keysym::HYPER_L,             remote_key::HYPER_L),
    (keysym::HYPER_R,             remote_key::HYPER_R),
    (keysym::HELP,                remote_key::HELP),

    // function keys
    (keysym::F1,                  remote_key::F1),
    (keysym::F2,                  remote_key::F2),
    (keysym::F3,                  remote_key::F3),
    (keysym::F4,                  remote_key::F4),
    (keysym::F5,                  remote_key::F5),
    (keysym::F6,                  remote_key::F6),
    (keysym::F7,                  remote_key::F7),
    (keysym::F8,                  remote_key::F8),
    (keysym::F9,                  remote_key::F9),
    (keysym::F10,                 remote_key::F10),
    (keysym::F11,                 remote_key::F11),
    (keysym::F12,                 remote_key::F12),
    (keysym::F13,                 remote_key::F13),
    (keysym::F14,                 remote_key::F14),
    (keysym::F15,                 remote_key::F15),
    (keysym::F16,                 remote_key::F16),
    (keysym::F17,                 remote_key::F17),
    (keysym::F18,                 remote_key::F18),
    (keysym::F19,                 remote_key::F19),
    (keysym::F20,                 remote_key::F20),

    // vendor hardcodes, after the portable rows so those stay canonical
    (keysym::HP_BACKTAB,          remote_key::BACKTAB),
    (keysym::SUN_SYSREQ,          remote_key::SYSREQ),
    (keysym::X386_SYSREQ,         remote_key::SYSREQ),
    (keysym::SUN_F36,             remote_key::F11),
    (keysym::SUN_F37,             remote_key::F12),

    // numeric and function keypad keys
    (keysym::KP_SPACE,            remote_key::SPACE),
    (keysym::KP_TAB,              remote_key::TAB),
    (keysym::KP_ENTER,            remote_key::ENTER),
    (keysym::KP_F1,               remote_key::F1),
    (keysym::KP_F2,               remote_key::F2),
    (keysym::KP_F3,               remote_key::F3),
    (keysym::KP_F4,               remote_key::F4),
    (keysym::KP_HOME,             remote_key::HOME),
    (keysym::KP_LEFT,             remote_key::LEFT),
    (keysym::KP_UP,               remote_key::UP),
    (keysym::KP_RIGHT,            remote_key::RIGHT),
    (keysym::KP_DOWN,             remote_key::DOWN),
    (keysym::KP_PRIOR,            remote_key::PAGE_UP),
    (keysym::KP_NEXT,             remote_key::PAGE_DOWN),
    (keysym::KP_END,              remote_key::END),
    (keysym::KP_BEGIN,            remote_key::CLEAR),
    (keysym::KP_INSERT,           remote_key::INSERT),
    (keysym::KP_DELETE,           remote_key::DELETE),
    (keysym::KP_EQUAL,            remote_key::EQUAL),
    (keysym::KP_MULTIPLY,         remote_key::ASTERISK),
    (keysym::KP_ADD,              remote_key::PLUS),
    (keysym::KP_SEPARATOR,        remote_key::COMMA),
    (keysym::KP_SUBTRACT,         remote_key::MINUS),
    (keysym::KP_DECIMAL,          remote_key::PERIOD),
    (keysym::KP_DIVIDE,           remote_key::SLASH),
    (keysym::KP_0,                remote_key::DIGIT_0),
    (keysym::KP_1,                remote_key::DIGIT_0 + 1),
    (keysym::KP_2,                remote_key::DIGIT_0 + 2),
    (keysym::KP_3,                remote_key::DIGIT_0 + 3),
    (keysym::KP_4,                remote_key::DIGIT_0 + 4),
    (keysym::KP_5,                remote_key::DIGIT_0 + 5),
    (keysym::KP_6,                remote_key::DIGIT_0 + 6),
    (keysym::KP_7,                remote_key::DIGIT_0 + 7),
    (keysym::KP_8,                remote_key::DIGIT_0 + 8),
    (keysym::KP_9,                remote_key::DIGIT_9),

    // international and multi-key character composition
    (keysym::ISO_LEVEL3_SHIFT,    remote_key::ALTGR),
    (keysym::MULTI_KEY,           remote_key::MULTI_KEY),
    (keysym::CODEINPUT,           remote_key::CODEINPUT),
    (keysym::SINGLE_CANDIDATE,    remote_key::SINGLE_CANDIDATE),
    (keysym::MULTIPLE_CANDIDATE,  remote_key::MULTIPLE_CANDIDATE),
    (keysym::PREVIOUS_CANDIDATE,  remote_key::PREVIOUS_CANDIDATE),
    (keysym::MODE_SWITCH,         remote_key::MODE_SWITCH),

    // Japanese keyboard support
    (keysym::KANJI,               remote_key::KANJI),
    (keysym::MUHENKAN,            remote_key::MUHENKAN),
    (keysym::HENKAN,              remote_key::HENKAN),
    (keysym::ROMAJI,              remote_key::ROMAJI),
    (keysym::HIRAGANA,            remote_key::HIRAGANA),
    (keysym::KATAKANA,            remote_key::KATAKANA),
    (keysym::HIRAGANA_KATAKANA,   remote_key::HIRAGANA_KATAKANA),
    (keysym::ZENKAKU,             remote_key::ZENKAKU),
    (keysym::HANKAKU,             remote_key::HANKAKU),
    (keysym::ZENKAKU_HANKAKU,     remote_key::ZENKAKU_HANKAKU),
    (keysym::TOUROKU,             remote_key::TOUROKU),
    (keysym::MASSYO,              remote_key::MASSYO),
    (keysym::KANA_LOCK,           remote_key::KANA_LOCK),
    (keysym::KANA_SHIFT,          remote_key::KANA_SHIFT),
    (keysym::EISU_SHIFT,          remote_key::EISU_SHIFT),
    (keysym::EISU_TOGGLE,         remote_key::EISU_TOGGLE),

    // Korean keyboard support
    (keysym::HANGUL,              remote_key::HANGUL),
    (keysym::HANGUL_START,        remote_key::HANGUL_START),
    (keysym::HANGUL_END,          remote_key::HANGUL_END),
    (keysym::HANGUL_HANJA,        remote_key::HANGUL_HANJA),
    (keysym::HANGUL_JAMO,         remote_key::HANGUL_JAMO),
    (keysym::HANGUL_ROMAJA,       remote_key::HANGUL_ROMAJA),
    (keysym::HANGUL_JEONJA,       remote_key::HANGUL_JEONJA),
    (keysym::HANGUL_BANJA,        remote_key::HANGUL_BANJA),
    (keysym::HANGUL_PREHANJA,     remote_key::HANGUL_PREHANJA),
    (keysym::HANGUL_POSTHANJA,    remote_key::HANGUL_POSTHANJA),
    (keysym::HANGUL_SPECIAL,      remote_key::HANGUL_SPECIAL),

    // dead keys
    (keysym::DEAD_GRAVE,          remote_key::DEAD_GRAVE),
    (keysym::DEAD_ACUTE,          remote_key::DEAD_ACUTE),
    (keysym::DEAD_CIRCUMFLEX,     remote_key::DEAD_CIRCUMFLEX),
    (keysym::DEAD_TILDE,          remote_key::DEAD_TILDE),
    (keysym::DEAD_MACRON,         remote_key::DEAD_MACRON),
    (keysym::DEAD_BREVE,          remote_key::DEAD_BREVE),
    (keysym::DEAD_ABOVEDOT,       remote_key::DEAD_ABOVEDOT),
    (keysym::DEAD_DIAERESIS,      remote_key::DEAD_DIAERESIS),
    (keysym::DEAD_ABOVERING,      remote_key::DEAD_ABOVERING),
    (keysym::DEAD_DOUBLEACUTE,    remote_key::DEAD_DOUBLEACUTE),
    (keysym::DEAD_CARON,          remote_key::DEAD_CARON),
    (keysym::DEAD_CEDILLA,        remote_key::DEAD_CEDILLA),
    (keysym::DEAD_OGONEK,         remote_key::DEAD_OGONEK),
    (keysym::DEAD_IOTA,           remote_key::DEAD_IOTA),
    (keysym::DEAD_VOICED_SOUND,   remote_key::DEAD_VOICED_SOUND),
    (keysym::DEAD_SEMIVOICED_SOUND, remote_key::DEAD_SEMIVOICED_SOUND),
    (keysym::DEAD_BELOWDOT,       remote_key::DEAD_BELOWDOT),
    (keysym::DEAD_HOOK,           remote_key::DEAD_HOOK),
    (keysym::DEAD_HORN,           remote_key::DEAD_HORN),
];

static FORWARD: Lazy<AHashMap<u32, u32>> = Lazy::new(|| {
    let mut map = AHashMap::with_capacity(KEYSYM_TABLE.len());
    for &(sym, key) in KEYSYM_TABLE {
        map.entry(sym).or_insert(key);
    }
    map
});

static REVERSE: Lazy<AHashMap<u32, u32>> = Lazy::new(|| {
    let mut map = AHashMap::with_capacity(KEYSYM_TABLE.len());
    for &(sym, key) in KEYSYM_TABLE {
        // first row wins: canonical native form
        map.entry(key).or_insert(sym);
    }
    map
});

/// Translate a native keysym into the remote virtual-key space.
///
/// Returns [`remote_key::KEY_UNKNOWN`] for keysyms the table does not cover.
pub fn keysym_to_remote(keysym: u32) -> u32 {
    if keysym < NATIVE_PASSTHROUGH_LIMIT {
        return keysym;
    }
    FORWARD
        .get(&keysym)
        .copied()
        .unwrap_or(remote_key::KEY_UNKNOWN)
}

/// Translate a remote virtual key back into a native keysym.
///
/// Returns `0` for remote keys the table does not cover.
pub fn remote_to_keysym(key: u32) -> u32 {
    if key < REMOTE_PASSTHROUGH_LIMIT {
        return key;
    }
    REVERSE.get(&key).copied().unwrap_or(0)
}

/// Remote modifier bits.
pub mod remote_mods {
    pub const SHIFT: u32 = 0x0200_0000;
    pub const CONTROL: u32 = 0x0400_0000;
    pub const ALT: u32 = 0x0800_0000;
    pub const META: u32 = 0x1000_0000;
}

const MOD_PAIRS: &[(u32, u32)] = &[
    (native_mods::SHIFT, remote_mods::SHIFT),
    (native_mods::CONTROL, remote_mods::CONTROL),
    (native_mods::MOD1, remote_mods::ALT),
    (native_mods::MOD4, remote_mods::META),
];

/// Translate a native modifier state word into remote modifier bits.
/// Lock and the remaining mod groups have no remote equivalent and drop out.
pub fn native_mods_to_remote(state: u32) -> u32 {
    MOD_PAIRS
        .iter()
        .filter(|(native, _)| state & native != 0)
        .fold(0, |acc, &(_, remote)| acc | remote)
}

/// Translate remote modifier bits into a native state word, for events the
/// server injects back into the toolkit.
pub fn remote_mods_to_native(mods: u32) -> u32 {
    MOD_PAIRS
        .iter()
        .filter(|(_, remote)| mods & remote != 0)
        .fold(0, |acc, &(native, _)| acc | native)
}

/// Wire discriminant for an outgoing key event.
pub fn event_kind_to_remote(kind: KeyEventKind) -> i32 {
    match kind {
        KeyEventKind::Press => REMOTE_KEY_PRESS,
        KeyEventKind::Release => REMOTE_KEY_RELEASE,
    }
}

/// Decode a wire discriminant from an inbound key-event call.
pub fn remote_event_kind(kind: i32) -> Option<KeyEventKind> {
    match kind {
        REMOTE_KEY_PRESS => Some(KeyEventKind::Press),
        REMOTE_KEY_RELEASE => Some(KeyEventKind::Release),
        _ => None,
    }
}
