use figtk_core::{DesignNode, NodeKind, Rect};
use figtk_render::{render_preview, HostCall, RecordingHost, SvgHost};
use figtk_synth::{synthesize, SynthOptions, WidgetKind};

fn design() -> DesignNode {
    DesignNode::new(NodeKind::Frame, "Login")
        .with_bounds(100.0, 200.0, 300.0, 150.0)
        .with_child(
            DesignNode::new(NodeKind::Text, "Input Username")
                .with_bounds(120.0, 220.0, 200.0, 30.0),
        )
        .with_child(
            DesignNode::new(NodeKind::Rectangle, "Login Button")
                .with_bounds(120.0, 300.0, 80.0, 30.0),
        )
}

#[test]
fn test_preview_mirrors_plan() {
    let frame = design();
    let plan = synthesize(&[&frame], &SynthOptions::default());

    let mut host = RecordingHost::new();
    let preview = render_preview(&plan, &mut host).unwrap();
    assert_eq!(preview.widgets.len(), plan.len());

    assert_eq!(
        host.calls()[0],
        HostCall::Surface {
            width: 300.0,
            height: 150.0
        }
    );

    let created: Vec<_> = host.created().cloned().collect();
    assert_eq!(
        created,
        vec![
            HostCall::Create {
                handle: 1,
                parent: 0,
                kind: WidgetKind::Container,
                label: "Login".to_string(),
                rect: Rect::new(0.0, 0.0, 300.0, 150.0),
            },
            HostCall::Create {
                handle: 2,
                parent: 1,
                kind: WidgetKind::Entry,
                label: "Input Username".to_string(),
                rect: Rect::new(20.0, 20.0, 200.0, 30.0),
            },
            HostCall::Create {
                handle: 3,
                parent: 1,
                kind: WidgetKind::Button,
                label: "Login".to_string(),
                rect: Rect::new(20.0, 100.0, 80.0, 30.0),
            },
        ]
    );
}

#[test]
fn test_svg_preview_of_design() {
    let frame = design();
    let plan = synthesize(&[&frame], &SynthOptions::default());

    let mut host = SvgHost::new();
    render_preview(&plan, &mut host).unwrap();
    let svg = host.to_svg();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"<rect x="20" y="100" width="80" height="30""#));
    assert!(svg.contains(">Input Username</text>"));
    assert!(svg.contains(">Login</text>"));
}
