use wheelzoom_rs::WheelZoomController;
use wheelzoom_rs::api::{WheelZoomOptions, WheelZoomSetting};
use wheelzoom_rs::chart::{AxisHit, NullChart};
use wheelzoom_rs::core::{AxisId, PlotBox, RawWheelEvent};
use wheelzoom_rs::interaction::ZoomDimension;

fn build_chart() -> NullChart {
    let plot_box = PlotBox::new(60.0, 40.0, 800.0, 400.0).expect("valid plot box");
    NullChart::new(plot_box, 2, 1)
}

fn build_controller(dimension: Option<ZoomDimension>) -> WheelZoomController {
    let options = WheelZoomOptions {
        dimension,
        ..WheelZoomOptions::default()
    };
    WheelZoomController::new(WheelZoomSetting::from(options).resolve())
}

fn wheel_event() -> RawWheelEvent {
    RawWheelEvent::new(260.0, 140.0, 120.0)
}

#[test]
fn x_dimension_selects_all_x_axes_when_no_axis_is_associated() {
    let mut chart = build_chart();
    let mut controller = build_controller(Some(ZoomDimension::X));

    let outcome = controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");
    assert!(outcome.zoomed);

    let request = &chart.transform_log()[0];
    assert_eq!(request.axes.as_slice(), &[AxisId::new(0), AxisId::new(1)]);
}

#[test]
fn y_dimension_selects_all_y_axes_when_no_axis_is_associated() {
    let mut chart = build_chart();
    let mut controller = build_controller(Some(ZoomDimension::Y));

    controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");

    let request = &chart.transform_log()[0];
    assert_eq!(request.axes.as_slice(), &[AxisId::new(2)]);
}

#[test]
fn associated_axis_wins_over_full_collection_for_single_dimension() {
    let mut chart = build_chart().with_axis_hit(AxisHit {
        x_axis: Some(AxisId::new(1)),
        y_axis: Some(AxisId::new(2)),
    });
    let mut controller = build_controller(Some(ZoomDimension::X));

    controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");

    let request = &chart.transform_log()[0];
    assert_eq!(request.axes.as_slice(), &[AxisId::new(1)]);
}

#[test]
fn xy_dimension_selects_full_axis_union_even_with_associated_pair() {
    let mut chart = build_chart().with_axis_hit(AxisHit {
        x_axis: Some(AxisId::new(0)),
        y_axis: Some(AxisId::new(2)),
    });
    let mut controller = build_controller(Some(ZoomDimension::Xy));

    controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");

    let request = &chart.transform_log()[0];
    assert_eq!(
        request.axes.as_slice(),
        &[AxisId::new(0), AxisId::new(1), AxisId::new(2)]
    );
}

#[test]
fn unset_dimension_resolves_to_no_axes_and_keeps_default_scroll() {
    let mut chart = build_chart();
    let mut controller = build_controller(None);

    let outcome = controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");

    assert!(!outcome.zoomed);
    assert!(!outcome.prevent_default);
    assert!(chart.transform_log().is_empty());
    assert!(!controller.is_settle_armed());
}

#[test]
fn wheel_dimension_overrides_chart_level_zoom_type() {
    let mut chart = build_chart().with_zoom_dimension(Some(ZoomDimension::Xy));
    let mut controller = build_controller(Some(ZoomDimension::Y));

    controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");

    let request = &chart.transform_log()[0];
    assert_eq!(request.axes.as_slice(), &[AxisId::new(2)]);
}

#[test]
fn chart_level_zoom_type_applies_when_wheel_dimension_is_unset() {
    let mut chart = build_chart().with_zoom_dimension(Some(ZoomDimension::X));
    let mut controller = build_controller(None);

    controller
        .handle_wheel(&mut chart, &wheel_event(), 0)
        .expect("wheel handled");

    let request = &chart.transform_log()[0];
    assert_eq!(request.axes.as_slice(), &[AxisId::new(0), AxisId::new(1)]);
}
