use std::fs;

use tandav::platform::{DirectorySink, DisplayHost, DownloadSink, FixedDisplay};
use tandav::Viewport;

#[test]
fn platform_smoke() {
    // display
    let d = FixedDisplay::default();
    assert_eq!(d.viewport().width, 1280);
    d.set_viewport(Viewport {
        width: 360,
        height: 640,
        device_pixel_ratio: 3.0,
    });
    assert_eq!(d.viewport().width, 360);

    // download
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path());
    let path = sink.deliver("smoke.png", b"noop").unwrap();
    assert_eq!(path, dir.path().join("smoke.png"));
    assert_eq!(fs::read(&path).unwrap(), b"noop".to_vec());
}
