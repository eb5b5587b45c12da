#[cfg(test)]
mod tests {
    use std::io::Write;

    use splitter_core::{Position, Rect, SplitterProps};
    use splitter_layout::SplitterLayout;

    use crate::script::{load_script, parse_script, Script, Step};
    use crate::settings::{load_settings_from, ReplaySettings};
    use crate::stage::{Entry, Frame, Stage};

    fn script(props: SplitterProps, steps: Vec<Step>) -> Script {
        Script {
            props,
            children: 2,
            container: Rect::new(0.0, 0.0, 200.0, 300.0),
            steps,
        }
    }

    fn run(script: &Script) -> Stage {
        let mut stage = Stage::new(script, &ReplaySettings::default());
        stage.run(&script.steps);
        stage
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ──────────────────────────────────────────
    // Script parsing
    // ──────────────────────────────────────────

    #[test]
    fn test_parse_minimal_script_uses_defaults() {
        let script = parse_script(r#"{ "container": { "width": 640, "height": 480 } }"#).unwrap();
        assert_eq!(script.children, 2);
        assert_eq!(script.props, SplitterProps::default());
        assert_eq!(script.container, Rect::new(0.0, 0.0, 640.0, 480.0));
        assert!(script.steps.is_empty());
    }

    #[test]
    fn test_parse_steps() {
        let script = parse_script(
            r#"{
                "props": { "vertical": true, "primary_index": 7, "secondary_initial_size": 20 },
                "container": { "width": 640, "height": 480 },
                "steps": [
                    { "type": "mouse_down", "left": 3, "top": 4 },
                    { "type": "touch_move", "touches": [{ "left": 1, "top": 2 }] },
                    { "type": "resize", "width": 800, "height": 600 },
                    { "type": "unmount" }
                ]
            }"#,
        )
        .unwrap();

        assert!(script.props.vertical);
        assert_eq!(script.props.primary_index, 7);
        assert_eq!(script.props.secondary_initial_size, Some(20.0));
        assert_eq!(
            script.steps,
            vec![
                Step::MouseDown { left: 3.0, top: 4.0 },
                Step::TouchMove {
                    touches: vec![Position::new(1.0, 2.0)]
                },
                Step::Resize {
                    width: 800.0,
                    height: 600.0
                },
                Step::Unmount,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_negative_container() {
        assert!(parse_script(r#"{ "container": { "width": -1, "height": 10 } }"#).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_step() {
        let result = parse_script(
            r#"{ "container": { "width": 1, "height": 1 }, "steps": [{ "type": "wheel" }] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_script_from_file() {
        let file = write_temp(r#"{ "children": 1, "container": { "width": 10, "height": 10 } }"#);
        let script = load_script(file.path()).unwrap();
        assert_eq!(script.children, 1);
    }

    #[test]
    fn test_load_script_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_script(&dir.path().join("missing.json")).is_err());
    }

    // ──────────────────────────────────────────
    // Settings
    // ──────────────────────────────────────────

    #[test]
    fn test_settings_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings, ReplaySettings::default());
        assert_eq!(settings.splitter_thickness, 4.0);
        assert!(settings.print_view);
    }

    #[test]
    fn test_settings_partial_file() {
        let file = write_temp(r#"{ "print_view": false }"#);
        let settings = load_settings_from(file.path());
        assert!(!settings.print_view);
        assert_eq!(settings.splitter_thickness, 4.0);
    }

    #[test]
    fn test_settings_malformed_file_defaults() {
        let file = write_temp("{ not json");
        assert_eq!(load_settings_from(file.path()), ReplaySettings::default());
    }

    #[test]
    fn test_settings_negative_thickness_ignored() {
        let file = write_temp(r#"{ "splitter_thickness": -3, "print_view": false }"#);
        let settings = load_settings_from(file.path());
        assert_eq!(settings.splitter_thickness, 4.0);
        assert!(!settings.print_view);
    }

    // ──────────────────────────────────────────
    // Frame layout
    // ──────────────────────────────────────────

    fn mounted(props: SplitterProps, children: usize, container: Rect) -> SplitterLayout {
        let mut registry = splitter_layout::SignalRegistry::new();
        let mut layout = SplitterLayout::new(1, props, children);
        let frame = Frame::layout(container, 4.0, &layout);
        layout.mount(&mut registry, &frame);
        layout
    }

    #[test]
    fn test_frame_places_splitter_before_secondary() {
        let container = Rect::new(10.0, 0.0, 200.0, 300.0);
        let props = SplitterProps {
            secondary_initial_size: Some(20.0),
            ..Default::default()
        };
        let frame = Frame::layout(container, 4.0, &mounted(props, 2, container));
        assert_eq!(frame.splitter, Some(Rect::new(186.0, 0.0, 4.0, 300.0)));
    }

    #[test]
    fn test_frame_second_primary_vertical_percent() {
        let container = Rect::new(0.0, 50.0, 200.0, 400.0);
        let props = SplitterProps {
            vertical: true,
            percentage: true,
            primary_index: 1,
            secondary_initial_size: Some(25.0),
            ..Default::default()
        };
        let frame = Frame::layout(container, 4.0, &mounted(props, 2, container));
        assert_eq!(frame.splitter, Some(Rect::new(0.0, 150.0, 200.0, 4.0)));
    }

    #[test]
    fn test_frame_without_splitter() {
        let container = Rect::new(0.0, 0.0, 200.0, 300.0);
        let frame = Frame::layout(container, 4.0, &mounted(SplitterProps::default(), 1, container));
        assert!(frame.splitter.is_none());
    }

    // ──────────────────────────────────────────
    // Stage replay
    // ──────────────────────────────────────────

    #[test]
    fn test_stage_mouse_drag() {
        let stage = run(&script(
            SplitterProps {
                secondary_initial_size: Some(20.0),
                ..Default::default()
            },
            vec![
                Step::MouseDown { left: 177.0, top: 10.0 },
                Step::MouseMove { left: 25.0, top: 30.0 },
                Step::MouseUp,
            ],
        ));

        assert_eq!(
            stage.transcript(),
            vec![
                Entry::Size(20.0),
                Entry::DragStart,
                Entry::Size(173.0),
                Entry::DragEnd
            ]
        );
        assert_eq!(stage.frame().splitter.map(|r| r.left), Some(23.0));
    }

    #[test]
    fn test_stage_touch_drag() {
        let stage = run(&script(
            SplitterProps::default(),
            vec![
                Step::TouchStart { left: 100.0, top: 10.0 },
                Step::TouchMove {
                    touches: vec![Position::new(52.0, 30.0)],
                },
                Step::TouchEnd,
            ],
        ));

        assert_eq!(
            stage.transcript(),
            vec![
                Entry::Size(98.0),
                Entry::DragStart,
                Entry::Size(146.0),
                Entry::DragEnd
            ]
        );
    }

    #[test]
    fn test_stage_press_outside_splitter() {
        let stage = run(&script(
            SplitterProps::default(),
            vec![
                Step::MouseDown { left: 5.0, top: 10.0 },
                Step::MouseMove { left: 25.0, top: 30.0 },
                Step::MouseUp,
            ],
        ));
        assert_eq!(stage.transcript(), vec![Entry::Size(98.0)]);
    }

    #[test]
    fn test_stage_resize_keeps_pixel_size() {
        let stage = run(&script(
            SplitterProps::default(),
            vec![Step::Resize {
                width: 400.0,
                height: 300.0,
            }],
        ));
        assert_eq!(stage.layout().secondary_size(), 98.0);
        assert_eq!(stage.transcript(), vec![Entry::Size(98.0)]);
        assert_eq!(stage.frame().splitter.map(|r| r.left), Some(298.0));
    }

    #[test]
    fn test_stage_resize_keeps_percent_size() {
        let stage = run(&script(
            SplitterProps {
                percentage: true,
                ..Default::default()
            },
            vec![Step::Resize {
                width: 400.0,
                height: 300.0,
            }],
        ));
        assert_eq!(stage.transcript(), vec![Entry::Size(49.0)]);
    }

    #[test]
    fn test_stage_resize_enforces_primary_min() {
        let stage = run(&script(
            SplitterProps {
                primary_min_size: 350.0,
                secondary_initial_size: Some(98.0),
                ..Default::default()
            },
            vec![Step::Resize {
                width: 400.0,
                height: 300.0,
            }],
        ));
        assert_eq!(stage.transcript(), vec![Entry::Size(98.0), Entry::Size(46.0)]);
    }

    #[test]
    fn test_stage_unmount_stops_routing() {
        let stage = run(&script(
            SplitterProps::default(),
            vec![
                Step::MouseDown { left: 100.0, top: 10.0 },
                Step::Unmount,
                Step::MouseMove { left: 25.0, top: 30.0 },
                Step::MouseUp,
            ],
        ));
        assert!(stage.registry().is_empty());
        assert_eq!(stage.transcript(), vec![Entry::Size(98.0), Entry::DragStart]);
    }

    #[test]
    fn test_stage_remount_restores_routing() {
        let stage = run(&script(
            SplitterProps::default(),
            vec![
                Step::Unmount,
                Step::Mount,
                Step::Mount,
                Step::MouseDown { left: 100.0, top: 10.0 },
                Step::MouseUp,
            ],
        ));
        assert_eq!(stage.registry().len(), 5);
        assert_eq!(
            stage.transcript(),
            vec![
                Entry::Size(98.0),
                Entry::Size(98.0),
                Entry::DragStart,
                Entry::DragEnd
            ]
        );
    }

    #[test]
    fn test_stage_children_removed_hides_splitter() {
        let stage = run(&script(
            SplitterProps::default(),
            vec![
                Step::Children { count: 1 },
                Step::MouseDown { left: 100.0, top: 10.0 },
            ],
        ));
        assert!(stage.frame().splitter.is_none());
        assert!(!stage.layout().is_dragging());
    }

    #[test]
    fn test_report_lists_transcript_and_view() {
        let stage = run(&script(
            SplitterProps {
                custom_class_name: Some("sidebar".to_string()),
                secondary_initial_size: Some(20.0),
                ..Default::default()
            },
            vec![Step::MouseDown { left: 177.0, top: 10.0 }],
        ));

        assert_eq!(
            stage.report(true),
            "size 20\n\
             drag start\n\
             layout: splitter-layout sidebar layout-changing\n  \
             pane 0: layout-pane layout-pane-primary\n  \
             pane 1: layout-pane width: 20px\n  \
             splitter\n"
        );
        assert_eq!(stage.report(false), "size 20\ndrag start\n");
    }
}
