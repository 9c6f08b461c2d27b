#![no_main]

use std::cell::RefCell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitter_layout::{
    KeyCode, KeyEvent, Modifiers, PanelSpec, PointerPosition, SizeMode, Splitter, SplitterConfig,
    SplitterListener,
};

#[derive(Debug, Arbitrary)]
struct PanelInput {
    min_px: u8,
    collapsible: bool,
    locked: bool,
    size: Option<u8>,
    default_size: Option<u8>,
    collapsed: Option<bool>,
}

#[derive(Clone, Default)]
struct HostEcho(Rc<RefCell<Option<Vec<f64>>>>);

impl SplitterListener for HostEcho {
    fn on_sizes_change(&mut self, sizes: &[f64]) {
        *self.0.borrow_mut() = Some(sizes.to_vec());
    }
}

#[derive(Debug, Arbitrary)]
enum Op {
    Measure(u16),
    Down { divider: u8, at: i16 },
    Move(i16),
    Up,
    Cancel,
    Key { divider: u8, right: bool, coarse: bool },
    Toggle(u8),
    SetSizes(Vec<u8>),
    Replace(Vec<PanelInput>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    gutter: u8,
    controlled: bool,
    panels: Vec<PanelInput>,
    ops: Vec<Op>,
}

fn panels(inputs: &[PanelInput]) -> Option<Vec<PanelSpec>> {
    if inputs.is_empty() {
        return None;
    }
    Some(
        inputs
            .iter()
            .take(12)
            .map(|input| {
                // Zero minimums would let a drag empty an expanded panel.
                let mut panel = PanelSpec::new()
                    .min_size(f64::from(input.min_px.max(1)))
                    .collapsible(input.collapsible)
                    .resizable(!input.locked);
                if let Some(size) = input.size {
                    panel = panel.size(f64::from(size.max(1)));
                }
                if let Some(size) = input.default_size {
                    panel = panel.default_size(f64::from(size.max(1)));
                }
                if let Some(collapsed) = input.collapsed {
                    panel = panel.collapsed(collapsed);
                }
                panel
            })
            .collect(),
    )
}

fuzz_target!(|input: Input| {
    let Some(initial) = panels(&input.panels) else {
        return;
    };
    let config = SplitterConfig::default().gutter_size(f64::from(input.gutter % 32));
    let built = if input.controlled {
        Splitter::new(config.clone(), initial.clone())
            .and_then(|owned| Splitter::controlled(config, initial, owned.current_sizes()))
    } else {
        Splitter::new(config, initial)
    };
    let Ok(splitter) = built else {
        return;
    };
    let echo = HostEcho::default();
    let mut splitter = splitter.with_listener(echo.clone());

    for op in input.ops.iter().take(256) {
        let dividers = splitter.divider_count();
        match op {
            Op::Measure(px) => splitter.set_container_length(f64::from(*px)),
            Op::Down { divider, at } if dividers > 0 => {
                let divider = usize::from(*divider) % dividers;
                let _ = splitter.pointer_down(divider, PointerPosition::new(f64::from(*at), 0.0));
            }
            Op::Move(at) => {
                let _ = splitter.pointer_move(PointerPosition::new(f64::from(*at), 0.0));
            }
            Op::Up => {
                let _ = splitter.pointer_up();
            }
            Op::Cancel => {
                let _ = splitter.pointer_cancel();
            }
            Op::Key {
                divider,
                right,
                coarse,
            } if dividers > 0 => {
                let code = if *right { KeyCode::Right } else { KeyCode::Left };
                let modifiers = if *coarse { Modifiers::SHIFT } else { Modifiers::NONE };
                let key = KeyEvent::new(code).with_modifiers(modifiers);
                let _ = splitter.key_down(usize::from(*divider) % dividers, &key);
            }
            Op::Toggle(index) => {
                let _ = splitter.toggle_collapse(usize::from(*index) % splitter.panel_count());
            }
            Op::SetSizes(raw) => {
                // Hosts hand back vectors that honour the collapsed flags.
                let mut sizes: Vec<f64> = (0..splitter.panel_count())
                    .map(|index| {
                        if splitter.is_collapsed(index) {
                            0.0
                        } else {
                            f64::from(raw.get(index).copied().unwrap_or(1).max(1))
                        }
                    })
                    .collect();
                let total: f64 = sizes.iter().sum();
                sizes.iter_mut().for_each(|size| *size *= 100.0 / total);
                let _ = splitter.set_sizes(sizes);
            }
            Op::Replace(inputs) => {
                if let Some(next) = panels(inputs) {
                    let _ = splitter.set_panels(next);
                }
            }
            _ => {}
        }

        let published = echo.0.borrow_mut().take();
        if splitter.mode() == SizeMode::Controlled
            && let Some(sizes) = published
        {
            let _ = splitter.set_sizes(sizes);
        }

        let sizes = splitter.current_sizes();
        let total: f64 = sizes.iter().sum();
        assert!((total - 100.0).abs() < 1e-6, "sum {total} in {sizes:?}");
        for (index, &size) in sizes.iter().enumerate() {
            assert!(size.is_finite() && size >= 0.0, "{sizes:?}");
            if splitter.is_collapsed(index) {
                assert_eq!(size, 0.0, "collapsed panel {index} in {sizes:?}");
            } else {
                assert!(size > 0.0, "expanded panel {index} at 0 in {sizes:?}");
            }
        }
    }
});
