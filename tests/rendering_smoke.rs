use rand::SeedableRng;
use rand_pcg::Pcg64;
use tandav::rendering::raster::rasterize_with_seed;
use tandav::rendering::Surface;
use tandav::{render_scene, Resolution};

#[test]
fn smoke_rasterize_preview_size() {
    let s = rasterize_with_seed(Resolution::from_width(120), 1.0, 1);
    assert_eq!(s.width, 120);
    assert_eq!(s.height, 260);
    assert_eq!(&s.png_data[0..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn backing_store_follows_pixel_density() {
    let mut surface = Surface::new();
    let res = Resolution::from_width(90);
    render_scene(&mut surface, res, 1.5, &mut Pcg64::seed_from_u64(2));
    assert_eq!(surface.backing_size(), (135, 292));
    assert_eq!(surface.logical_size(), Some(Resolution { width: 90, height: 195 }));
}

#[test]
fn zero_area_render_is_a_silent_no_op() {
    let mut surface = Surface::new();
    render_scene(&mut surface, Resolution::from_width(0), 2.0, &mut Pcg64::seed_from_u64(2));
    assert_eq!(surface.backing_size(), (0, 0));
    assert!(surface.pixmap().is_none());
}

#[test]
fn rendered_frame_is_fully_opaque() {
    let mut surface = Surface::new();
    render_scene(&mut surface, Resolution::from_width(64), 1.0, &mut Pcg64::seed_from_u64(4));
    let pixmap = surface.pixmap().expect("pixmap");
    assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
}
