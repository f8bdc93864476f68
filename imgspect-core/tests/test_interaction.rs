use std::cell::RefCell;
use std::rc::Rc;

use imgspect_core::{
    mapper, Change, Imgspect, ImgspectConfig, ImgspectError, Point, Rect, Region, Size,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

fn new_inspector(zoom_unit: f64) -> Imgspect {
    Imgspect::new(
        ImgspectConfig { zoom_unit },
        Size::new(640.0, 480.0),
        Size::new(320.0, 240.0),
    )
    .unwrap()
}

fn drag(insp: &mut Imgspect, from: Point, to: Point) -> Option<Region> {
    insp.on_pointer_down(from).unwrap();
    insp.on_pointer_move(to);
    insp.on_pointer_up().unwrap()
}

#[test]
fn test_zoom_three_times_then_draw() {
    let mut insp = new_inspector(0.1);
    for _ in 0..3 {
        insp.zoom_in();
    }
    assert_close(insp.current_zoom_factor(), 1.3);

    let region = drag(&mut insp, Point::new(0.0, 0.0), Point::new(50.0, 50.0)).unwrap();
    assert_close(region.x1, 0.0);
    assert_close(region.y1, 0.0);
    assert_close(region.x2, 50.0 / 1.3);
    assert_close(region.y2, 50.0 / 1.3);
}

#[test]
fn test_region_reprojects_after_zoom() {
    let mut insp = new_inspector(0.5);
    let region = drag(&mut insp, Point::new(10.0, 10.0), Point::new(60.0, 60.0)).unwrap();
    assert_eq!(region, Region { x1: 10.0, y1: 10.0, x2: 60.0, y2: 60.0 });

    insp.zoom_in();
    insp.zoom_in();
    assert_eq!(insp.current_zoom_factor(), 2.0);
    let rects: Vec<Rect> = insp.projected_regions().collect();
    assert_eq!(rects, vec![Rect::new(20.0, 20.0, 100.0, 100.0)]);
    assert_eq!(insp.project(&region), rects[0]);
}

#[test]
fn test_n_commits_in_order() {
    let mut insp = new_inspector(0.1);
    let mut expected = Vec::new();
    for i in 0..7 {
        let start = Point::new(i as f64 * 20.0, 5.0);
        let end = Point::new(i as f64 * 20.0 + 10.0, 15.0);
        expected.push(drag(&mut insp, start, end).unwrap());
        if i % 2 == 0 {
            insp.zoom_in();
        }
    }
    let all: Vec<Region> = insp.all_regions().copied().collect();
    assert_eq!(all.len(), 7);
    assert_eq!(all, expected);
}

#[test]
fn test_zoom_floor_holds_for_any_sequence() {
    let mut insp = new_inspector(0.3);
    assert_eq!(insp.zoom_out(), 1.0);
    let steps = "+-+--+++----+-+---++-";
    for step in steps.chars() {
        if step == '+' {
            insp.zoom_in();
        } else {
            insp.zoom_out();
        }
        assert!(insp.current_zoom_factor() >= 1.0);
    }
}

#[test]
fn test_begin_twice_is_region_in_progress() {
    let mut insp = new_inspector(0.1);
    insp.on_pointer_down(Point::new(1.0, 1.0)).unwrap();
    let err = insp.on_pointer_down(Point::new(2.0, 2.0)).unwrap_err();
    assert!(matches!(err, ImgspectError::RegionInProgress));
    // The session recovers: the first gesture can still be completed
    insp.on_pointer_move(Point::new(11.0, 11.0));
    let region = insp.on_pointer_up().unwrap().unwrap();
    assert_eq!(region, Region { x1: 1.0, y1: 1.0, x2: 11.0, y2: 11.0 });
}

#[test]
fn test_click_without_drag_stores_nothing() {
    let mut insp = new_inspector(0.1);
    insp.on_pointer_down(Point::new(40.0, 40.0)).unwrap();
    assert_eq!(insp.on_pointer_up().unwrap(), None);
    assert_eq!(insp.all_regions().count(), 0);
    assert!(!insp.is_drawing());
}

#[test]
fn test_pan_then_draw_round_trip() {
    let mut insp = new_inspector(0.25);
    insp.set_viewport_origin(Point::new(700.0, 20.0));
    for _ in 0..4 {
        insp.zoom_in(); // 2.0
    }
    // Navigator at (10, 20), handle dragged 30px right and 40px down
    let pan = insp.on_drag_move(Point::new(10.0, 20.0), Point::new(40.0, 60.0));
    assert_eq!(pan.left, -60.0);
    assert_eq!(pan.top, -80.0);

    let region = drag(&mut insp, Point::new(700.0, 20.0), Point::new(740.0, 60.0)).unwrap();
    // Top-left of the viewport shows original (30, 40), which is where the
    // handle sits on the navigator.
    assert_eq!(region, Region { x1: 30.0, y1: 40.0, x2: 50.0, y2: 60.0 });

    let rect = insp.project(&region);
    let on_screen = Point::new(rect.left + pan.left, rect.top + pan.top);
    assert_eq!(on_screen, Point::ORIGIN);
}

#[test]
fn test_observer_sees_full_sequence() {
    let mut insp = new_inspector(0.1);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    insp.subscribe(move |change| {
        let tag = match change {
            Change::Zoomed { .. } => "zoom",
            Change::Panned { .. } => "pan",
            Change::ViewportResized => "resize",
            Change::Draft(Some(_)) => "draft",
            Change::Draft(None) => "draft-end",
            Change::RegionCommitted { .. } => "commit",
        };
        sink.borrow_mut().push(tag);
    });

    insp.zoom_in();
    insp.on_drag_move(Point::ORIGIN, Point::new(5.0, 5.0));
    drag(&mut insp, Point::new(0.0, 0.0), Point::new(20.0, 20.0));
    insp.set_viewport_size(Size::new(300.0, 200.0));

    assert_eq!(
        *seen.borrow(),
        vec!["zoom", "pan", "draft", "draft", "draft-end", "commit", "resize"]
    );
}

#[test]
fn test_zoom_mid_gesture_keeps_draft_on_image() {
    let mut insp = new_inspector(1.0);
    insp.on_pointer_down(Point::new(10.0, 10.0)).unwrap();
    insp.on_pointer_move(Point::new(60.0, 60.0));

    let drafts = Rc::new(RefCell::new(Vec::new()));
    let sink = drafts.clone();
    insp.subscribe(move |change| {
        if let Change::Draft(rect) = change {
            sink.borrow_mut().push(*rect);
        }
    });

    assert_eq!(insp.zoom_in(), 2.0);
    let rescaled = Rect::new(20.0, 20.0, 100.0, 100.0);
    assert_eq!(insp.draft(), Some(rescaled));
    assert_eq!(*drafts.borrow(), vec![Some(rescaled)]);

    let region = insp.on_pointer_up().unwrap().unwrap();
    assert_eq!(region, Region { x1: 10.0, y1: 10.0, x2: 60.0, y2: 60.0 });

    // Zooming back out mid-gesture works the same way
    insp.on_pointer_down(Point::new(40.0, 40.0)).unwrap();
    insp.on_pointer_move(Point::new(80.0, 100.0));
    assert_eq!(insp.zoom_out(), 1.0);
    let region = insp.on_pointer_up().unwrap().unwrap();
    assert_eq!(region, Region { x1: 20.0, y1: 20.0, x2: 40.0, y2: 50.0 });
}

#[test]
fn test_pan_event_carries_handle_position() {
    let mut insp = new_inspector(0.5);
    insp.zoom_in(); // 1.5
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    insp.subscribe(move |change| {
        if let Change::Panned { offset, handle } = change {
            sink.borrow_mut().push((*offset, *handle));
        }
    });
    insp.on_drag_move(Point::new(5.0, 5.0), Point::new(25.0, 15.0));
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.left, -30.0);
    assert_eq!(seen[0].0.top, -15.0);
    assert_eq!(seen[0].1, Point::new(20.0, 10.0));
    assert_eq!(insp.handle_offset(), Point::new(20.0, 10.0));
}

#[test]
fn test_mapper_round_trip_for_many_zooms() {
    let mut zoom = 1.0;
    while zoom < 50.0 {
        let p = Point::new(123.456, 78.9);
        let back = mapper::to_original_space(mapper::to_draw_space(p, zoom), zoom).unwrap();
        assert_close(back.x, p.x);
        assert_close(back.y, p.y);
        zoom += 0.37;
    }
}
