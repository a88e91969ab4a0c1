//! Benchmarks for key normalization
//!
//! Run with: cargo bench key_parsing

use keypress::keymap::{FixedLayout, LEFT_ALT_PRESSED, LEFT_CTRL_PRESSED};
use keypress::{KeyEvent, Keymap, ModifierState};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Binding descriptions
// ============================================================================

#[divan::bench(args = ["q", "Control-c", "\\C-\\M-delete", "Meta-Shift-f12", "\\e[a"])]
fn parse_description(descr: &str) -> KeyEvent {
    KeyEvent::from_descr(divan::black_box(descr)).unwrap()
}

#[divan::bench]
fn display_round_trip(bencher: divan::Bencher) {
    let event = KeyEvent::from_descr("Control-Meta-x").unwrap();
    bencher.bench(|| KeyEvent::from_descr(&divan::black_box(&event).to_string()).unwrap());
}

// ============================================================================
// Raw events
// ============================================================================

#[divan::bench]
fn raw_control_chord() -> KeyEvent {
    KeyEvent::from_raw_event(
        divan::black_box("\u{1}"),
        divan::black_box(LEFT_CTRL_PRESSED),
        divan::black_box(0x41),
    )
    .unwrap()
}

#[divan::bench]
fn raw_meta_chord() -> KeyEvent {
    KeyEvent::from_raw_event(
        divan::black_box("f"),
        divan::black_box(LEFT_ALT_PRESSED),
        divan::black_box(0x46),
    )
    .unwrap()
}

#[divan::bench]
fn layout_lookup(bencher: divan::Bencher) {
    let layout = FixedLayout::us_qwerty();
    bencher.bench(|| {
        KeyEvent::from_char(&layout, divan::black_box('!'), ModifierState::NONE, "").unwrap()
    });
}

// ============================================================================
// Keymap lookup
// ============================================================================

#[divan::bench(args = [8, 64, 512])]
fn keymap_lookup(bencher: divan::Bencher, size: usize) {
    let mut keymap = Keymap::new();
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    for i in 0..size {
        let descr = match i % 3 {
            0 => format!("Control-{}", names[i % names.len()]),
            1 => format!("Meta-f{}", 1 + i % 24),
            _ => format!("Shift-numpad{}", i % 10),
        };
        keymap.bind(KeyEvent::from_descr(&descr).unwrap(), format!("command-{}", i));
    }
    let probe = KeyEvent::from_raw_event("", LEFT_ALT_PRESSED, 0x70).unwrap();

    bencher.bench(|| keymap.lookup(divan::black_box(&probe)).map(str::len));
}
