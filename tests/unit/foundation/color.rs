use super::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn luminosity_of_extremes() {
    assert_close(Rgb::new(1.0, 1.0, 1.0).luminosity(), 1.0);
    assert_eq!(Rgb::new(0.0, 0.0, 0.0).luminosity(), 0.0);

    let mid = 127.0 / 255.0;
    assert_close(Rgb::new(mid, mid, mid).luminosity(), mid);
}

#[test]
fn saturation_is_channel_spread() {
    assert_eq!(Rgb::new(1.0, 1.0, 1.0).saturation(), 0.0);
    assert_close(Rgb::new(0.2, 0.8, 0.5).saturation(), 0.6);
}

#[test]
fn clipped_preserves_luminosity_and_range() {
    let c = Rgb::new(1.2, 0.5, -0.1);
    let clipped = c.clipped();

    assert_close(clipped.luminosity(), c.luminosity());
    for ch in [clipped.r, clipped.g, clipped.b] {
        assert!((0.0..=1.0).contains(&ch), "channel out of range: {ch}");
    }
}

#[test]
fn clipped_is_identity_in_gamut() {
    let c = Rgb::new(0.2, 0.4, 0.9);
    assert_eq!(c.clipped(), c);
}

#[test]
fn clipped_achromatic_never_divides_by_zero() {
    for c in [
        Rgb::new(1.5, 1.5, 1.5),
        Rgb::new(-0.25, -0.25, -0.25),
        Rgb::new(2.0, 2.0, 2.0),
    ] {
        let out = c.clipped();
        for ch in [out.r, out.g, out.b] {
            assert!(ch.is_finite(), "{c:?} clipped to non-finite {ch}");
        }
    }
}

#[test]
fn with_luminosity_hits_the_target() {
    let c = Rgb::new(0.25, 0.5, 0.75);
    assert_close(c.with_luminosity(0.4).luminosity(), 0.4);
    assert_close(c.with_luminosity(0.9).luminosity(), 0.9);
    assert_close(c.with_luminosity(0.0).luminosity(), 0.0);
}

#[test]
fn with_saturation_keeps_channel_ranks() {
    // b is min, r/g tie for max; ties rank r before g
    let c = Rgb::new(0.5, 0.5, 0.2).with_saturation(0.5);
    assert_eq!(c, Rgb::new(0.5, 0.5, 0.0));
    assert_close(c.saturation(), 0.5);
}

#[test]
fn with_saturation_achromatic_goes_black() {
    let black = Rgb::new(0.0, 0.0, 0.0);
    assert_eq!(black.with_saturation(0.0), black);
    assert_eq!(Rgb::new(0.7, 0.7, 0.7).with_saturation(0.4), black);
}

#[test]
fn pixel_rgba8_round_trip() {
    for bytes in [[33, 150, 243, 255], [233, 30, 99, 128], [0, 0, 0, 0]] {
        assert_eq!(Pixel::from_rgba8(bytes).to_rgba8(), bytes);
    }
}

#[test]
fn to_rgba8_clamps_out_of_gamut() {
    let p = Pixel::new(Rgb::new(1.5, -0.5, 0.5), 2.0);
    assert_eq!(p.to_rgba8(), [255, 0, 127, 255]);
}
