use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use logo_forge::{BatchConfig, Error, MaskStrategy};

const RED: Rgba<u8> = Rgba([220, 30, 30, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Creates an empty scratch directory unique to one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("logo-forge-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a 512x512 opaque PNG to `dir/source.png`.
fn write_source(dir: &Path, pixel: impl Fn(u32, u32) -> Rgba<u8>) -> PathBuf {
    let image = RgbaImage::from_fn(512, 512, pixel);
    let path = dir.join("source.png");
    image.save(&path).unwrap();
    path
}

fn opaque_source(dir: &Path) -> PathBuf {
    write_source(dir, |x, y| Rgba([(x / 2) as u8, (y / 2) as u8, 128, 255]))
}

fn open_rgba(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

#[test]
fn png_batch_with_rounded_corners_and_icon() {
    let dir = scratch_dir("png-rounded");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output)
        .with_sizes("16,256")
        .with_mask(MaskStrategy::Corner { radius: 64.0 });

    let report = logo_forge::run(&config).unwrap();
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(
        report.written,
        vec![output.join("logo_16x16.png"), output.join("logo_256x256.png")]
    );

    let small = open_rgba(&output.join("logo_16x16.png"));
    assert_eq!(small.dimensions(), (16, 16));
    assert_eq!(small.get_pixel(0, 0)[3], 0);

    let large = open_rgba(&output.join("logo_256x256.png"));
    assert_eq!(large.dimensions(), (256, 256));
    for (x, y) in [(0, 0), (255, 0), (0, 255), (255, 255)] {
        assert_eq!(large.get_pixel(x, y).0, [0, 0, 0, 0], "corner ({x}, {y})");
    }
    assert_eq!(large.get_pixel(128, 128)[3], 255);

    let icon = output.join("icon.ico");
    assert_eq!(report.icon.as_deref(), Some(icon.as_path()));
    assert!(fs::metadata(&icon).unwrap().len() > 0);

    let dir_entries = ico::IconDir::read(fs::File::open(&icon).unwrap()).unwrap();
    assert_eq!(dir_entries.entries().len(), 1);
    assert_eq!(dir_entries.entries()[0].width(), 256);
}

#[test]
fn bad_size_entry_is_skipped() {
    let dir = scratch_dir("bad-size");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output).with_sizes("abc,64");

    let report = logo_forge::run(&config).unwrap();
    assert_eq!(report.written, vec![output.join("logo_64x64.png")]);

    let invalid: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|e| matches!(e, Error::InvalidSize { entry, .. } if entry == "abc"))
        .collect();
    assert_eq!(invalid.len(), 1);

    // No 256 entry, so no container, and that is only a diagnostic
    assert!(report.icon.is_none());
    assert!(!output.join("icon.ico").exists());
    assert!(
        report
            .diagnostics
            .iter()
            .any(|e| matches!(e, Error::MissingIconSize(256)))
    );
    assert_eq!(open_rgba(&output.join("logo_64x64.png")).dimensions(), (64, 64));
}

#[test]
fn jpeg_output_is_fully_opaque() {
    let dir = scratch_dir("jpeg");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output)
        .with_sizes("64")
        .with_format("jpg")
        .with_mask(MaskStrategy::Corner { radius: 96.0 });

    let report = logo_forge::run(&config).unwrap();
    let path = output.join("logo_64x64.jpg");
    assert_eq!(report.written, vec![path.clone()]);

    let decoded = image::open(&path).unwrap();
    assert!(!decoded.color().has_alpha());

    let rgba = decoded.to_rgba8();
    assert_eq!(rgba.dimensions(), (64, 64));
    assert!(rgba.pixels().all(|p| p[3] == 255));

    // The clipped corner was flattened onto white
    let corner = rgba.get_pixel(0, 0);
    assert!(corner.0[..3].iter().all(|&c| c > 225), "{corner:?}");
}

#[test]
fn jpeg_extension_is_kept_as_given() {
    let dir = scratch_dir("jpeg-ext");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output)
        .with_sizes("16")
        .with_format("jpeg");

    let report = logo_forge::run(&config).unwrap();
    assert_eq!(report.written, vec![output.join("logo_16x16.jpeg")]);
}

#[test]
fn unsupported_format_still_builds_icon() {
    let dir = scratch_dir("unsupported");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output)
        .with_sizes("32,256")
        .with_format("gif");

    let report = logo_forge::run(&config).unwrap();
    assert!(report.written.is_empty());
    assert!(!output.join("logo_32x32.gif").exists());

    let unsupported = report
        .diagnostics
        .iter()
        .filter(|e| matches!(e, Error::UnsupportedFormat(name) if name == "gif"))
        .count();
    assert_eq!(unsupported, 2);
    assert!(output.join("icon.ico").exists());
}

#[test]
fn duplicate_sizes_are_rendered_once() {
    let dir = scratch_dir("duplicates");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output).with_sizes("256,32,256");

    let report = logo_forge::run(&config).unwrap();
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.icons.len(), 2);
    assert!(report.icon.is_some());
}

#[test]
fn every_size_has_its_dimensions() {
    let dir = scratch_dir("dimensions");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output).with_sizes(logo_forge::DEFAULT_SIZES);

    let report = logo_forge::run(&config).unwrap();
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    for size in [16, 24, 32, 48, 64, 128, 256, 512] {
        let image = open_rgba(&output.join(format!("logo_{size}x{size}.png")));
        assert_eq!(image.dimensions(), (size, size));
    }
}

#[test]
fn output_is_byte_identical_across_runs() {
    let dir = scratch_dir("idempotent");
    let input = opaque_source(&dir);
    let first = dir.join("first");
    let second = dir.join("second");
    let mask = MaskStrategy::Corner { radius: 40.0 };

    logo_forge::run(&BatchConfig::new(&input, &first).with_sizes("24,256").with_mask(mask))
        .unwrap();
    logo_forge::run(&BatchConfig::new(&input, &second).with_sizes("24,256").with_mask(mask))
        .unwrap();

    for name in ["logo_24x24.png", "logo_256x256.png"] {
        assert_eq!(
            fs::read(first.join(name)).unwrap(),
            fs::read(second.join(name)).unwrap(),
            "{name} differs between runs"
        );
    }
}

#[test]
fn white_canvas_is_removed_along_edges() {
    let dir = scratch_dir("edge-white");
    let input = write_source(&dir, |x, y| {
        if (128..384).contains(&x) && (128..384).contains(&y) {
            RED
        } else {
            WHITE
        }
    });
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output)
        .with_sizes("96")
        .with_mask(MaskStrategy::EdgeWhite { divisor: 12 });

    logo_forge::run(&config).unwrap();
    let image = open_rgba(&output.join("logo_96x96.png"));

    // Band is 8px wide: white there is cleared
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(image.get_pixel(48, 3).0, [0, 0, 0, 0]);
    // White just inside the band is kept
    assert_eq!(image.get_pixel(12, 12).0, [255, 255, 255, 255]);
    // Subject untouched
    assert_eq!(image.get_pixel(48, 48).0, RED.0);
}

#[test]
fn circle_white_clips_outside_circle() {
    let dir = scratch_dir("circle-white");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    let config = BatchConfig::new(&input, &output)
        .with_sizes("64")
        .with_mask(MaskStrategy::CircleWhite { radius: 128.0 });

    logo_forge::run(&config).unwrap();
    let image = open_rgba(&output.join("logo_64x64.png"));
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(image.get_pixel(32, 32)[3], 255);
}

#[test]
fn write_failures_are_diagnosed_and_batch_continues() {
    let dir = scratch_dir("write-failures");
    let input = opaque_source(&dir);
    let output = dir.join("out");
    // Directories squatting on the target file names make both writes fail
    fs::create_dir_all(output.join("logo_16x16.png")).unwrap();
    fs::create_dir_all(output.join("icon.ico")).unwrap();

    let config = BatchConfig::new(&input, &output).with_sizes("16,32,256");
    let report = logo_forge::run(&config).unwrap();

    let save_failures: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|e| matches!(e, Error::Save { .. }))
        .collect();
    assert_eq!(save_failures.len(), 1);
    assert!(matches!(
        save_failures[0],
        Error::Save { path, .. } if path == &output.join("logo_16x16.png")
    ));

    assert_eq!(
        report.written,
        vec![output.join("logo_32x32.png"), output.join("logo_256x256.png")]
    );
    // The failed size is still rendered and kept
    assert_eq!(report.icons.len(), 3);
    assert!(report.icons.find_by_size(16).is_some());

    assert!(
        report
            .diagnostics
            .iter()
            .any(|e| matches!(e, Error::IcoCreate { .. }))
    );
    assert!(report.icon.is_none());
    assert!(report.diagnostics.iter().all(|e| !e.is_fatal()));
}

#[test]
fn unreadable_input_is_fatal() {
    let dir = scratch_dir("missing-input");
    let config = BatchConfig::new(dir.join("nope.png"), dir.join("out"));

    let err = logo_forge::run(&config).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.is_fatal());
    assert!(!dir.join("out").exists());
}

#[test]
fn uncreatable_output_dir_is_fatal() {
    let dir = scratch_dir("bad-output");
    let input = opaque_source(&dir);
    let blocker = dir.join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = logo_forge::run(&BatchConfig::new(&input, blocker.join("out"))).unwrap_err();
    assert!(matches!(err, Error::CreateOutputDir { .. }));
    assert!(err.is_fatal());
}

#[test]
fn nested_output_dir_is_created() {
    let dir = scratch_dir("nested");
    let input = opaque_source(&dir);
    let output = dir.join("a").join("b").join("c");

    let report = logo_forge::run(&BatchConfig::new(&input, &output).with_sizes("16")).unwrap();
    assert_eq!(report.written, vec![output.join("logo_16x16.png")]);
}
