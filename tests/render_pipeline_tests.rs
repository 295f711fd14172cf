//! Offline tests of the render pipeline through the library surface.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use qrstudio::models::{ErrorCorrection, InputMode};
use qrstudio::render::RenderSource;
use qrstudio::Session;

mod fixtures;
use fixtures::*;

#[test]
fn test_primary_path_produces_styled_raster() {
    let mut session = Session::new();
    session.set_url_input("example.com");

    let raster = session.raster().expect("URL input should render");
    assert_eq!(raster.source(), RenderSource::Primary);
    assert!(raster.is_styled());
    assert_eq!(raster.image().dimensions(), (400, 400));
}

#[test]
fn test_logo_elevates_error_correction_and_removal_restores_it() {
    let (logo_path, logo_temp) = create_temp_logo([10, 120, 240, 255]);
    let mut session = Session::new();
    session.set_mode(InputMode::Text);
    session.set_text_input("hello");

    assert_eq!(session.config().error_correction(), ErrorCorrection::Medium);

    session.set_center_image(&logo_path).unwrap();
    assert_eq!(session.config().error_correction(), ErrorCorrection::High);

    session.clear_center_image();
    assert_eq!(session.config().error_correction(), ErrorCorrection::Medium);
}

#[test]
fn test_logo_is_composited_into_the_center() {
    let (logo_path, logo_temp) = create_temp_logo([200, 30, 30, 255]);
    let mut session = Session::new();
    session.set_mode(InputMode::Text);
    session.set_text_input("hello");
    session.set_center_image(&logo_path).unwrap();

    let raster = session.raster().expect("text input should render");
    let side = raster.image().width();
    let center = *raster.image().get_pixel(side / 2, side / 2);
    assert!(center[0] > 150, "center should carry the logo color: {center:?}");
}

#[test]
fn test_broken_logo_file_is_rejected_and_state_unchanged() {
    let (json_path, temp) = create_temp_contact_json("not an image");
    let mut session = Session::new();
    session.set_mode(InputMode::Text);
    session.set_text_input("hello");

    assert!(session.set_center_image(&json_path).is_err());
    assert_eq!(session.config().error_correction(), ErrorCorrection::Medium);
    assert!(session.raster().is_some(), "plain QR should survive");
}

#[test]
fn test_empty_payload_is_not_a_render_failure() {
    let mut session = Session::new();
    session.set_url_input("");
    assert!(session.raster().is_none());
    assert!(!session.render_failed());
}
