// File: crates/voronoi-core/tests/overlay.rs
// Purpose: Hover routing through a mounted layer: enter/leave order, focus-mode arguments, margin band.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use voronoi_core::scale::identity;
use voronoi_core::types::OFFSCREEN;
use voronoi_core::{Domain, HoverCallbacks, Margins, Point, ScreenPoint, Series, VoronoiLayer, VoronoiProps};

type Log = Rc<RefCell<Vec<String>>>;

fn two_points() -> Arc<Vec<Series<&'static str>>> {
    Arc::new(vec![Series::with_data("s", vec![Point::new(25.0, 50.0, "A"), Point::new(75.0, 50.0, "B")])])
}

fn props(focus: bool, stack: bool, margins: Margins) -> VoronoiProps<&'static str> {
    VoronoiProps::builder(two_points(), Arc::new(Domain::new(0.0, 100.0, 0.0, 100.0)))
        .x_scale(identity())
        .y_scale(identity())
        .margins(margins)
        .size(100.0, 100.0)
        .focus(focus)
        .stack(stack)
        .build()
        .expect("valid props")
}

fn recording(log: &Log) -> HoverCallbacks<&'static str> {
    let over = Rc::clone(log);
    let out = Rc::clone(log);
    HoverCallbacks::new()
        .on_mouse_over(move |ev| {
            over.borrow_mut().push(format!("over:{}:{}:{:?}", ev.point.payload, ev.focus.is_some(), ev.stack))
        })
        .on_mouse_out(move |ev| out.borrow_mut().push(format!("out:{}", ev.point.payload)))
}

#[test]
fn enter_and_leave_fire_in_order() {
    let log: Log = Rc::default();
    let mut layer = VoronoiLayer::mount(props(false, false, Margins::zero()), recording(&log));
    assert_eq!(layer.overlay().len(), 2);

    let hit = layer.pointer_move(10.0, 50.0).map(|c| c.point.payload);
    assert_eq!(hit, Some("A"));
    layer.pointer_move(20.0, 40.0);
    assert_eq!(*log.borrow(), vec!["over:A:false:None"]);

    layer.pointer_move(90.0, 50.0);
    layer.pointer_leave();
    assert_eq!(*log.borrow(), vec!["over:A:false:None", "out:A", "over:B:false:None", "out:B"]);

    // outside the clip rect nothing is hit
    assert!(layer.pointer_move(150.0, 50.0).is_none());
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn focus_mode_passes_handle_and_stack_flag() {
    let log: Log = Rc::default();
    let mut layer = VoronoiLayer::mount(props(true, true, Margins::zero()), recording(&log));
    layer.pointer_move(80.0, 10.0);
    assert_eq!(*log.borrow(), vec!["over:B:true:Some(true)"]);
}

#[test]
fn track_focus_follows_hovered_site() {
    let mut layer = VoronoiLayer::mount(props(true, false, Margins::zero()), HoverCallbacks::track_focus());
    let focus = layer.focus().expect("focus enabled");
    assert_eq!(focus.position(), OFFSCREEN);
    assert!(!focus.is_visible());
    assert_eq!(focus.height(), 100.0);

    layer.pointer_move(10.0, 90.0);
    assert_eq!(layer.focus().map(|f| f.position()), Some(ScreenPoint::new(25.0, 50.0)));
    layer.pointer_move(60.0, 5.0);
    assert_eq!(layer.focus().map(|f| f.position()), Some(ScreenPoint::new(75.0, 50.0)));
    layer.pointer_leave();
    assert_eq!(layer.focus().map(|f| f.is_visible()), Some(false));
}

#[test]
fn focus_indicator_style_defaults() {
    let layer = VoronoiLayer::mount(props(true, false, Margins::zero()), HoverCallbacks::new());
    let style = *layer.focus().expect("focus enabled").style();
    assert_eq!(style.inner_radius, 3.0);
    assert_eq!(style.outer_radius, 7.0);
    assert_eq!(style.stroke_width, 2.0);
    assert_eq!(style.stroke_opacity, 0.5);
}

#[test]
fn no_focus_indicator_without_focus_flag() {
    let layer = VoronoiLayer::mount(props(false, false, Margins::zero()), HoverCallbacks::new());
    assert!(layer.focus().is_none());
}

#[test]
fn focus_flag_toggle_creates_and_drops_indicator() {
    let base = props(false, false, Margins::zero());
    let mut layer = VoronoiLayer::mount(base.clone(), HoverCallbacks::new());
    let mut on = base.clone();
    on.focus = true;
    layer.update(on);
    assert!(layer.focus().is_some());
    layer.update(base);
    assert!(layer.focus().is_none());
}

#[test]
fn margin_band_resolves_to_nearest_point() {
    let log: Log = Rc::default();
    let mut layer = VoronoiLayer::mount(props(false, false, Margins::new(20.0, 20.0, 20.0, 20.0)), recording(&log));
    assert_eq!(layer.pointer_move(-15.0, -15.0).map(|c| c.point.payload), Some("A"));
    assert_eq!(layer.pointer_move(118.0, 118.0).map(|c| c.point.payload), Some("B"));
}

#[test]
fn shared_edge_still_hits_a_region() {
    let mut layer = VoronoiLayer::mount(props(false, false, Margins::zero()), HoverCallbacks::new());
    assert!(layer.pointer_move(50.0, 50.0).is_some());
}

#[test]
fn clear_drops_hover_without_callbacks() {
    let log: Log = Rc::default();
    let mut layer = VoronoiLayer::mount(props(false, false, Margins::zero()), recording(&log));
    layer.pointer_move(10.0, 50.0);
    let next = layer.props().with_dataset(two_points());
    layer.update(next);
    assert!(layer.overlay().hovered().is_none());
    assert_eq!(*log.borrow(), vec!["over:A:false:None"]);

    // hovering again after the rebuild re-enters
    layer.pointer_move(10.0, 50.0);
    assert_eq!(log.borrow().last().map(String::as_str), Some("over:A:false:None"));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn rebuild_parks_focus_indicator() {
    let mut layer = VoronoiLayer::mount(props(true, false, Margins::zero()), HoverCallbacks::track_focus());
    layer.pointer_move(10.0, 50.0);
    assert_eq!(layer.focus().map(|f| f.position()), Some(ScreenPoint::new(25.0, 50.0)));

    let next = layer.props().with_dataset(two_points());
    layer.update(next);
    assert!(layer.overlay().hovered().is_none());
    let focus = layer.focus().expect("indicator kept across rebuilds");
    assert!(!focus.is_visible());
    assert_eq!(focus.position(), OFFSCREEN);

    // reuse leaves the marker where the callbacks put it
    layer.pointer_move(90.0, 50.0);
    let same = layer.props().clone();
    layer.update(same);
    assert_eq!(layer.focus().map(|f| f.position()), Some(ScreenPoint::new(75.0, 50.0)));
}

#[test]
fn regions_are_closed_paths_over_cell_vertices() {
    let layer = VoronoiLayer::mount(props(false, false, Margins::zero()), HoverCallbacks::new());
    let region = &layer.overlay().regions()[0];
    assert_eq!(region.path().count_points(), region.cell().polygon.len());
    assert!(region.contains(ScreenPoint::new(5.0, 5.0)));
    assert!(!region.contains(ScreenPoint::new(95.0, 5.0)));
    assert_eq!(region.cell().path_data(), "M0,0L50,0L50,100L0,100Z");
}
