//! Property/fuzz-style invariants for the splitter container.
//!
//! Random streams of pointer, keyboard, collapse, resize, and panel-set
//! operations are driven through the public `Splitter` API, in owned mode and
//! in controlled mode with a host that echoes every published vector back.
//! After every step the rendered vector must stay well formed, and replaying
//! the same stream must reproduce it bit for bit.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use splitter_layout::{
    DragState, KeyCode, KeyEvent, Modifiers, PanelSpec, PointerPosition, SizeMode, Splitter,
    SplitterConfig, SplitterListener,
};

#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    fn choose_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 0
    }

    fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Measure(f64),
    PointerDown { divider: usize, at: f64 },
    PointerMove(f64),
    PointerUp,
    PointerCancel,
    Key { divider: usize, code: KeyCode, coarse: bool },
    Toggle(usize),
    SetSizes(Vec<f64>),
    ReplacePanels(Vec<PanelSpec>),
}

/// Host side of a controlled splitter: keeps the last published vector so it
/// can be handed back through `set_sizes`.
#[derive(Clone, Default)]
struct HostEcho(Rc<RefCell<Option<Vec<f64>>>>);

impl HostEcho {
    fn take(&self) -> Option<Vec<f64>> {
        self.0.borrow_mut().take()
    }
}

impl SplitterListener for HostEcho {
    fn on_sizes_change(&mut self, sizes: &[f64]) {
        *self.0.borrow_mut() = Some(sizes.to_vec());
    }
}

fn random_panels(rng: &mut Lcg) -> Vec<PanelSpec> {
    let count = 1 + rng.choose_index(6);
    (0..count)
        .map(|_| {
            // A zero minimum lets a drag shrink an expanded panel to nothing.
            let min = [10.0, 20.0, 50.0, 80.0][rng.choose_index(4)];
            let mut panel = PanelSpec::new()
                .min_size(min)
                .collapsible(rng.choose_bool())
                .resizable(rng.choose_index(5) != 0);
            if rng.choose_index(4) == 0 {
                panel = panel.max_size(min + 200.0);
            }
            match rng.choose_index(4) {
                0 => panel = panel.size(rng.next_f64_range(5.0, 60.0)),
                1 => panel = panel.default_size(rng.next_f64_range(5.0, 60.0)),
                _ => {}
            }
            if rng.choose_index(5) == 0 {
                panel = panel.collapsed(rng.choose_bool());
            }
            panel
        })
        .collect()
}

fn random_operation(splitter: &Splitter, rng: &mut Lcg) -> Op {
    let dividers = splitter.divider_count();
    match rng.choose_index(10) {
        0 => Op::Measure(rng.next_f64_range(0.0, 1200.0)),
        1 if dividers > 0 => Op::PointerDown {
            divider: rng.choose_index(dividers),
            at: rng.next_f64_range(0.0, 1200.0),
        },
        2 | 3 => Op::PointerMove(rng.next_f64_range(-400.0, 1600.0)),
        4 => Op::PointerUp,
        5 => Op::PointerCancel,
        6 if dividers > 0 => {
            let codes = [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down, KeyCode::Home];
            Op::Key {
                divider: rng.choose_index(dividers),
                code: codes[rng.choose_index(codes.len())],
                coarse: rng.choose_bool(),
            }
        }
        7 | 8 => Op::Toggle(rng.choose_index(splitter.panel_count())),
        9 => match rng.choose_index(4) {
            0 => Op::ReplacePanels(random_panels(rng)),
            1 => Op::SetSizes(random_sizes(splitter, rng)),
            _ => Op::PointerMove(rng.next_f64_range(0.0, 1200.0)),
        },
        _ => Op::PointerMove(rng.next_f64_range(0.0, 1200.0)),
    }
}

/// A host-supplied vector that honours the collapsed flags.
fn random_sizes(splitter: &Splitter, rng: &mut Lcg) -> Vec<f64> {
    let mut sizes: Vec<f64> = splitter
        .collapsed_flags()
        .iter()
        .map(|&collapsed| {
            if collapsed {
                0.0
            } else {
                rng.next_f64_range(1.0, 100.0)
            }
        })
        .collect();
    let total: f64 = sizes.iter().sum();
    sizes.iter_mut().for_each(|size| *size *= 100.0 / total);
    sizes
}

fn build(rng: &mut Lcg) -> (Splitter, HostEcho) {
    let config = SplitterConfig::default().gutter_size(rng.next_f64_range(0.0, 12.0));
    let panels = random_panels(rng);
    let echo = HostEcho::default();
    let splitter = if rng.choose_bool() {
        let initial = Splitter::new(config.clone(), panels.clone())
            .expect("generated panels are valid")
            .current_sizes();
        Splitter::controlled(config, panels, initial)
    } else {
        Splitter::new(config, panels)
    }
    .expect("generated panels are valid")
    .with_listener(echo.clone());
    (splitter, echo)
}

fn step(splitter: &mut Splitter, echo: &HostEcho, op: &Op) {
    apply(splitter, op);
    let published = echo.take();
    if splitter.mode() == SizeMode::Controlled
        && let Some(sizes) = published
    {
        splitter
            .set_sizes(sizes)
            .expect("published vectors match the panel count");
    }
}

fn apply(splitter: &mut Splitter, op: &Op) {
    match op {
        Op::Measure(length) => splitter.set_container_length(*length),
        Op::PointerDown { divider, at } => {
            let _ = splitter.pointer_down(*divider, PointerPosition::new(*at, 0.0));
        }
        Op::PointerMove(at) => {
            let _ = splitter.pointer_move(PointerPosition::new(*at, 0.0));
        }
        Op::PointerUp => {
            let _ = splitter.pointer_up();
        }
        Op::PointerCancel => {
            let _ = splitter.pointer_cancel();
        }
        Op::Key {
            divider,
            code,
            coarse,
        } => {
            let modifiers = if *coarse {
                Modifiers::SHIFT
            } else {
                Modifiers::NONE
            };
            let _ = splitter.key_down(*divider, &KeyEvent::new(*code).with_modifiers(modifiers));
        }
        Op::Toggle(index) => {
            let _ = splitter.toggle_collapse(*index);
        }
        Op::SetSizes(sizes) => splitter
            .set_sizes(sizes.clone())
            .expect("generated sizes match the panel count"),
        Op::ReplacePanels(panels) => splitter
            .set_panels(panels.clone())
            .expect("generated panels are valid"),
    }
}

fn assert_well_formed(splitter: &Splitter, context: &str) {
    let sizes = splitter.current_sizes();
    assert_eq!(sizes.len(), splitter.panel_count(), "{context}");
    let total: f64 = sizes.iter().sum();
    assert!((total - 100.0).abs() < 1e-6, "{context}: sum {total} in {sizes:?}");
    for (index, &size) in sizes.iter().enumerate() {
        assert!(size.is_finite() && size >= 0.0, "{context}: {sizes:?}");
        if splitter.is_collapsed(index) {
            assert_eq!(size, 0.0, "{context}: collapsed panel {index} in {sizes:?}");
        } else {
            assert!(size > 0.0, "{context}: expanded panel {index} at 0 in {sizes:?}");
        }
    }
    assert!(
        splitter.collapsed_flags().iter().any(|&collapsed| !collapsed),
        "{context}: every panel collapsed"
    );
    if let DragState::Dragging { divider, .. } = splitter.drag_state() {
        assert!(divider < splitter.divider_count(), "{context}");
    }
}

fn run_sequence(seed: u64, steps: usize) -> (Vec<Op>, Vec<Vec<f64>>) {
    let mut rng = Lcg::new(seed);
    let (mut splitter, echo) = build(&mut rng);

    let mut ops = Vec::with_capacity(steps);
    let mut trace = Vec::with_capacity(steps);
    for step_idx in 0..steps {
        let op = random_operation(&splitter, &mut rng);
        step(&mut splitter, &echo, &op);
        assert_well_formed(&splitter, &format!("seed={seed} step={step_idx} op={op:?}"));
        trace.push(splitter.current_sizes());
        ops.push(op);
    }
    (ops, trace)
}

fn replay(seed: u64, ops: &[Op]) -> Vec<Vec<f64>> {
    let mut rng = Lcg::new(seed);
    let (mut splitter, echo) = build(&mut rng);
    ops.iter()
        .map(|op| {
            step(&mut splitter, &echo, op);
            splitter.current_sizes()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_operation_streams_keep_vectors_well_formed(
        seed in any::<u64>(),
        steps in 20usize..150,
    ) {
        let _ = run_sequence(seed, steps);
    }

    #[test]
    fn random_operation_streams_replay_deterministically(
        seed in any::<u64>(),
        steps in 20usize..80,
    ) {
        let (ops, trace) = run_sequence(seed, steps);
        prop_assert_eq!(replay(seed, &ops), trace);
    }
}

#[test]
fn seed_corpus_keeps_vectors_well_formed() {
    let seeds = [
        0_u64,
        1,
        2,
        3,
        5,
        8,
        13,
        21,
        34,
        55,
        89,
        144,
        u32::MAX as u64,
        (u32::MAX as u64) + 1,
        u64::MAX - 1,
        u64::MAX,
    ];

    for seed in seeds {
        let _ = run_sequence(seed, 240);
    }
}
