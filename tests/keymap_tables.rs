//! Translation-table properties checked through the public conversion API.

use libimclient::keymap::{
    self, keysym, remote_key, remote_mods, native_mods_to_remote, remote_mods_to_native,
};
use libimclient::keyevent::native_mods;

/// Canonical pairs: the native keysym is the one the reverse direction
/// must produce for its remote key.
#[rustfmt::skip]
const CANONICAL_PAIRS: &[(u32, u32)] = &[
    (keysym::ESCAPE,              remote_key::ESCAPE),
    (keysym::TAB,                 remote_key::TAB),
    (keysym::ISO_LEFT_TAB,        remote_key::BACKTAB),
    (keysym::BACKSPACE,           remote_key::BACKSPACE),
    (keysym::RETURN,              remote_key::RETURN),
    (keysym::KP_ENTER,            remote_key::ENTER),
    (keysym::INSERT,              remote_key::INSERT),
    (keysym::DELETE,              remote_key::DELETE),
    (keysym::PAUSE,               remote_key::PAUSE),
    (keysym::PRINT,               remote_key::PRINT),
    (keysym::HOME,                remote_key::HOME),
    (keysym::END,                 remote_key::END),
    (keysym::LEFT,                remote_key::LEFT),
    (keysym::UP,                  remote_key::UP),
    (keysym::RIGHT,               remote_key::RIGHT),
    (keysym::DOWN,                remote_key::DOWN),
    (keysym::PRIOR,               remote_key::PAGE_UP),
    (keysym::NEXT,                remote_key::PAGE_DOWN),
    (keysym::SHIFT_L,             remote_key::SHIFT),
    (keysym::CONTROL_L,           remote_key::CONTROL),
    (keysym::META_L,              remote_key::META),
    (keysym::ALT_L,               remote_key::ALT),
    (keysym::CAPS_LOCK,           remote_key::CAPS_LOCK),
    (keysym::NUM_LOCK,            remote_key::NUM_LOCK),
    (keysym::SCROLL_LOCK,         remote_key::SCROLL_LOCK),
    (keysym::F1,                  remote_key::F1),
    (keysym::F11,                 remote_key::F11),
    (keysym::F12,                 remote_key::F12),
    (keysym::F20,                 remote_key::F20),
    (keysym::SUPER_L,             remote_key::SUPER_L),
    (keysym::SUPER_R,             remote_key::SUPER_R),
    (keysym::MENU,                remote_key::MENU),
    (keysym::HYPER_L,             remote_key::HYPER_L),
    (keysym::HELP,                remote_key::HELP),
    (keysym::MULTI_KEY,           remote_key::MULTI_KEY),
    (keysym::MODE_SWITCH,         remote_key::MODE_SWITCH),
    (keysym::KANJI,               remote_key::KANJI),
    (keysym::MUHENKAN,            remote_key::MUHENKAN),
    (keysym::HENKAN,              remote_key::HENKAN),
    (keysym::HIRAGANA_KATAKANA,   remote_key::HIRAGANA_KATAKANA),
    (keysym::ZENKAKU_HANKAKU,     remote_key::ZENKAKU_HANKAKU),
    (keysym::HANGUL,              remote_key::HANGUL),
    (keysym::HANGUL_HANJA,        remote_key::HANGUL_HANJA),
    (keysym::CODEINPUT,           remote_key::CODEINPUT),
    (keysym::SINGLE_CANDIDATE,    remote_key::SINGLE_CANDIDATE),
    (keysym::DEAD_GRAVE,          remote_key::DEAD_GRAVE),
    (keysym::DEAD_ACUTE,          remote_key::DEAD_ACUTE),
    (keysym::DEAD_HORN,           remote_key::DEAD_HORN),
];

#[test]
fn canonical_pairs_round_trip() {
    for &(native, remote) in CANONICAL_PAIRS {
        assert_eq!(
            keymap::keysym_to_remote(native),
            remote,
            "forward mapping for keysym {native:#x}"
        );
        assert_eq!(
            keymap::remote_to_keysym(remote),
            native,
            "reverse mapping for remote key {remote:#x}"
        );
    }
}

#[test]
fn right_hand_modifiers_share_the_remote_key() {
    for &(left, right, remote) in &[
        (keysym::SHIFT_L, keysym::SHIFT_R, remote_key::SHIFT),
        (keysym::CONTROL_L, keysym::CONTROL_R, remote_key::CONTROL),
        (keysym::META_L, keysym::META_R, remote_key::META),
        (keysym::ALT_L, keysym::ALT_R, remote_key::ALT),
    ] {
        assert_eq!(keymap::keysym_to_remote(right), remote);
        // reverse lookup stays on the left-hand variant
        assert_eq!(keymap::remote_to_keysym(remote), left);
    }
}

#[test]
fn portable_function_keys_win_over_vendor_aliases() {
    assert_eq!(keymap::keysym_to_remote(keysym::SUN_F36), remote_key::F11);
    assert_eq!(keymap::keysym_to_remote(keysym::SUN_F37), remote_key::F12);
    assert_eq!(keymap::remote_to_keysym(remote_key::F11), keysym::F11);
    assert_eq!(keymap::remote_to_keysym(remote_key::F12), keysym::F12);
}

#[test]
fn keypad_keys_collapse_to_character_codes() {
    assert_eq!(keymap::keysym_to_remote(keysym::KP_SPACE), remote_key::SPACE);
    assert_eq!(keymap::keysym_to_remote(keysym::KP_ADD), remote_key::PLUS);
    assert_eq!(keymap::keysym_to_remote(keysym::KP_0), remote_key::DIGIT_0);
    assert_eq!(keymap::keysym_to_remote(keysym::KP_9), remote_key::DIGIT_9);
    assert_eq!(keymap::keysym_to_remote(keysym::KP_EQUAL), remote_key::EQUAL);
}

#[test]
fn low_values_pass_through_both_ways() {
    for value in [0x20u32, 0x41, 0x61, 0x7e, 0xe9] {
        assert_eq!(keymap::keysym_to_remote(value), value);
        assert_eq!(keymap::remote_to_keysym(value), value);
    }
}

#[test]
fn uncovered_values_hit_the_sentinels() {
    assert_eq!(keymap::keysym_to_remote(0x3456), remote_key::KEY_UNKNOWN);
    assert_eq!(keymap::remote_to_keysym(0x01f0_0000), 0);
}

#[test]
fn modifier_words_round_trip() {
    let native = native_mods::SHIFT | native_mods::CONTROL | native_mods::MOD1 | native_mods::MOD4;
    let remote =
        remote_mods::SHIFT | remote_mods::CONTROL | remote_mods::ALT | remote_mods::META;
    assert_eq!(native_mods_to_remote(native), remote);
    assert_eq!(remote_mods_to_native(remote), native);

    // bits without a remote mapping drop out
    assert_eq!(
        native_mods_to_remote(native_mods::LOCK | native_mods::MOD5),
        0
    );
    assert_eq!(remote_mods_to_native(0x4000_0000), 0);
}
