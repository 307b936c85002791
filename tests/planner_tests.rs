//! Tests for the pure planning core: crop geometry, filter chain
//! rendering, and encoder argument assembly.

use std::ffi::OsString;

use cropcut::{
    build_args, crop_rectangle, filter_chain, ClipRequest, CropDirective, CropRectangle,
    Dimensions, TimeRange, Volume,
};

// Crop directive parsing

#[test]
fn test_directive_parsing() {
    assert_eq!(CropDirective::parse("original"), CropDirective::Original);
    assert_eq!(CropDirective::parse("1:1"), CropDirective::Square);
    assert_eq!(CropDirective::parse("4:3"), CropDirective::Standard);

    // Case insensitive, whitespace tolerant
    assert_eq!(CropDirective::parse("ORIGINAL"), CropDirective::Original);
    assert_eq!(CropDirective::parse(" 4:3 "), CropDirective::Standard);
}

#[test]
fn test_unknown_directive_falls_through_to_original() {
    assert_eq!(CropDirective::parse("16:9"), CropDirective::Original);
    assert_eq!(CropDirective::parse("square"), CropDirective::Original);
    assert_eq!(CropDirective::parse(""), CropDirective::Original);
}

// Crop geometry

#[test]
fn test_original_never_crops() {
    for (w, h) in [(1920, 1080), (640, 480), (1, 1), (3840, 2160)] {
        assert_eq!(
            crop_rectangle(CropDirective::Original, Dimensions::new(w, h)),
            None
        );
    }
}

#[test]
fn test_square_crop_uses_shorter_side() {
    for (w, h) in [(1920, 1080), (1080, 1920), (640, 480), (500, 500)] {
        let rect = crop_rectangle(CropDirective::Square, Dimensions::new(w, h)).unwrap();
        let side = w.min(h);
        assert_eq!(rect, CropRectangle {
            width: side,
            height: side
        });
    }
}

#[test]
fn test_standard_crop_prefers_full_width() {
    // 640x480 is already 4:3, so the full frame survives
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(640, 480)).unwrap();
    assert_eq!((rect.width, rect.height), (640, 480));

    // Wider than 4:3: full width kept, height trimmed
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(2000, 1600)).unwrap();
    assert_eq!((rect.width, rect.height), (2000, 1500));
}

#[test]
fn test_standard_crop_refits_against_height() {
    // 1920x1080: full-width attempt wants 1440 rows, taller than the
    // source allows, so the rectangle refits against the full height
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(1920, 1080)).unwrap();
    assert_eq!((rect.width, rect.height), (1440, 1080));

    // Portrait source
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(1080, 1920)).unwrap();
    assert_eq!((rect.width, rect.height), (1080, 810));
}

#[test]
fn test_standard_crop_truncates_not_rounds() {
    // 999 * 3 / 4 = 749.25, must truncate to 749
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(999, 900)).unwrap();
    assert_eq!((rect.width, rect.height), (999, 749));

    // Refit path: 1001 * 4 / 3 = 1334.66..., must truncate to 1334
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(1920, 1001)).unwrap();
    assert_eq!((rect.width, rect.height), (1334, 1001));
}

#[test]
fn test_standard_crop_survives_extreme_dimensions() {
    // Width whose *3 intermediate exceeds u32
    let rect = crop_rectangle(CropDirective::Standard, Dimensions::new(2_000_000_000, 100)).unwrap();
    assert_eq!((rect.width, rect.height), (133, 100));

    // Refit path whose *4 intermediate exceeds u32
    let rect =
        crop_rectangle(CropDirective::Standard, Dimensions::new(4_000_000_000, 2_000_000_000))
            .unwrap();
    assert_eq!((rect.width, rect.height), (2_666_666_666, 2_000_000_000));
}

#[test]
fn test_standard_crop_fits_within_source() {
    for (w, h) in [(1920, 1080), (1080, 1920), (641, 479), (7, 5), (3, 4)] {
        let source = Dimensions::new(w, h);
        let rect = crop_rectangle(CropDirective::Standard, source).unwrap();
        assert!(rect.width <= w, "{}x{}: width {} exceeds source", w, h, rect.width);
        assert!(rect.height <= h, "{}x{}: height {} exceeds source", w, h, rect.height);
    }
}

// Volume parsing

#[test]
fn test_volume_parsing_accepts_full_range() {
    for v in 1..=10u8 {
        let volume = Volume::parse(&v.to_string()).unwrap();
        assert_eq!(volume.get(), v);
    }
}

#[test]
fn test_volume_parsing_rejects_out_of_range_and_garbage() {
    for input in ["0", "11", "-1", "abc", "2.5", ""] {
        assert!(Volume::parse(input).is_err(), "accepted {:?}", input);
    }
}

// Filter chain rendering

#[test]
fn test_filter_chain_crop_only() {
    let crop = Some(CropRectangle {
        width: 480,
        height: 480,
    });
    assert_eq!(
        filter_chain(crop, Volume::UNCHANGED),
        Some("crop=480:480".to_string())
    );
}

#[test]
fn test_filter_chain_volume_only() {
    let volume = Volume::parse("3").unwrap();
    assert_eq!(filter_chain(None, volume), Some("volume=3".to_string()));
}

#[test]
fn test_filter_chain_crop_then_volume() {
    let crop = Some(CropRectangle {
        width: 1440,
        height: 1080,
    });
    let volume = Volume::parse("2").unwrap();
    assert_eq!(
        filter_chain(crop, volume),
        Some("crop=1440:1080,volume=2".to_string())
    );
}

#[test]
fn test_filter_chain_empty_when_nothing_applies() {
    // A volume of exactly 1 is valid input but never emits a clause
    assert_eq!(filter_chain(None, Volume::parse("1").unwrap()), None);
}

// Command assembly

fn request(filter: Option<&str>) -> ClipRequest {
    ClipRequest {
        input: "in.mp4".into(),
        output: "out.mp4".into(),
        range: TimeRange::new("00:00:01", "00:00:05").unwrap(),
        filter: filter.map(String::from),
    }
}

#[test]
fn test_build_args_skeleton_order() {
    let args = build_args(&request(None));
    let expected: Vec<OsString> = ["-y", "-i", "in.mp4", "-ss", "00:00:01", "-to", "00:00:05", "out.mp4"]
        .iter()
        .map(OsString::from)
        .collect();
    assert_eq!(args, expected);
}

#[test]
fn test_build_args_includes_filter_before_output() {
    let args = build_args(&request(Some("crop=1440:1080,volume=2")));
    let expected: Vec<OsString> = [
        "-y",
        "-i",
        "in.mp4",
        "-ss",
        "00:00:01",
        "-to",
        "00:00:05",
        "-vf",
        "crop=1440:1080,volume=2",
        "out.mp4",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    assert_eq!(args, expected);
}

// Time range validation

#[test]
fn test_time_range_requires_hh_mm_ss() {
    assert!(TimeRange::new("00:01:00", "00:02:00").is_ok());
    assert!(TimeRange::new("1:2:3", "00:02:00").is_err());
    assert!(TimeRange::new("00:01:00", "00:60:00").is_err());
    assert!(TimeRange::new("90.5", "00:02:00").is_err());
}
