use splitter::prelude::*;
use splitter::{SizeMode, SplitterConfigError};

const WORKBENCH: &str = r#"{
    "config": { "direction": "horizontal", "gutter_size": 0, "min_size": 0 },
    "panels": [
        { "key": "nav", "default_size": 25, "collapsible": true },
        { "key": "editor" },
        { "key": "terminal", "default_size": 25 }
    ]
}"#;

#[test]
fn builds_owned_splitter_from_json() {
    let splitter = SplitterLayout::from_json(WORKBENCH)
        .expect("valid json")
        .build()
        .expect("valid layout");
    assert_eq!(splitter.mode(), SizeMode::Owned);
    assert_eq!(splitter.current_sizes(), vec![25.0, 50.0, 25.0]);
    assert_eq!(splitter.panels()[0].key.as_deref(), Some("nav"));
}

#[test]
fn snapshot_restores_sizes_and_collapsed_flags() {
    let mut splitter = SplitterLayout::from_json(WORKBENCH)
        .expect("valid json")
        .build()
        .expect("valid layout");
    splitter.set_container_length(800.0);
    let _ = splitter.pointer_down(1, PointerPosition::new(600.0, 0.0));
    let _ = splitter.pointer_move(PointerPosition::new(520.0, 0.0));
    let _ = splitter.pointer_up();
    let _ = splitter.toggle_collapse(0).expect("collapsible");
    let before = splitter.current_sizes();

    let json = SplitterLayout::snapshot(&splitter).to_json().expect("serializable");
    let restored = SplitterLayout::from_json(&json)
        .expect("round-trips")
        .build()
        .expect("valid layout");

    let after = restored.current_sizes();
    for (a, b) in after.iter().zip(&before) {
        assert!((a - b).abs() < 1e-9, "{after:?} != {before:?}");
    }
    assert_eq!(after[0], 0.0);
    assert_eq!(restored.collapsed_flags(), &[true, false, false]);
}

#[test]
fn controlled_layout_keeps_host_vector() {
    let layout = SplitterLayout {
        sizes: Some(vec![10.0, 90.0]),
        ..SplitterLayout::new(
            SplitterConfig::vertical(),
            vec![PanelSpec::new(), PanelSpec::new()],
        )
    };
    let splitter = layout.build().expect("valid layout");
    assert_eq!(splitter.mode(), SizeMode::Controlled);

    let snapshot = SplitterLayout::snapshot(&splitter);
    assert_eq!(snapshot.sizes, Some(vec![10.0, 90.0]));
    assert_eq!(snapshot.config.default_sizes, None);
}

#[test]
fn errors_carry_their_source() {
    let err = SplitterLayout::default().build().expect_err("no panels");
    assert!(matches!(err, Error::Config(SplitterConfigError::NoPanels)));
    assert_eq!(
        err.to_string(),
        "invalid splitter configuration: splitter requires at least one panel"
    );
    assert!(std::error::Error::source(&err).is_some());

    let err = SplitterLayout::from_json("{ \"panels\": 3 }").expect_err("bad json");
    assert!(matches!(err, Error::Json(_)));
}
