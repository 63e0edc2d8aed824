use super::*;

const CYAN: [u8; 4] = [33, 150, 243, 255];
const MAGENTA: [u8; 4] = [233, 30, 99, 255];

fn uniform(px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(1, 1, image::Rgba(px))
}

fn draw_one(compositor: Compositor, source: [u8; 4], backdrop: [u8; 4]) -> [u8; 4] {
    let out = compositor
        .draw(1, 1, &uniform(source), &uniform(backdrop))
        .unwrap();
    out.get_pixel(0, 0).0
}

#[test]
fn opaque_src_over_fully_occludes() {
    let out = draw_one(Compositor::default(), CYAN, MAGENTA);
    assert_eq!(out, CYAN);
}

#[test]
fn copy_returns_source_and_dst_returns_backdrop() {
    assert_eq!(
        draw_one(Compositor::new(CompositeOp::Copy), CYAN, MAGENTA),
        CYAN
    );
    assert_eq!(
        draw_one(Compositor::new(CompositeOp::Dst), CYAN, MAGENTA),
        MAGENTA
    );
}

#[test]
fn src_out_of_two_opaque_layers_is_transparent() {
    let out = draw_one(Compositor::new(CompositeOp::SrcOut), CYAN, MAGENTA);
    assert_eq!(out, [0, 0, 0, 0]);
}

#[test]
fn zero_alpha_output_carries_no_color() {
    let p = Compositor::new(CompositeOp::Clear).pixel(
        Pixel::from_rgba8([200, 100, 50, 255]),
        Pixel::from_rgba8([10, 20, 30, 255]),
    );
    assert_eq!(p, Pixel::TRANSPARENT);
}

#[test]
fn semi_transparent_src_over_interpolates() {
    let out = draw_one(Compositor::default(), [33, 150, 243, 128], MAGENTA);
    assert_eq!(out, [132, 90, 171, 255]);
}

#[test]
fn src_over_transparent_backdrop_passes_source_through() {
    let out = draw_one(Compositor::default(), [33, 150, 243, 128], [0, 0, 0, 0]);
    assert_eq!(out, [33, 150, 243, 128]);
}

#[test]
fn dst_in_keeps_backdrop_color_with_source_coverage() {
    let out = draw_one(
        Compositor::new(CompositeOp::DstIn),
        [33, 150, 243, 128],
        MAGENTA,
    );
    assert_eq!(out, [233, 30, 99, 128]);
}

#[test]
fn darken_blend_over_opaque_layers() {
    let compositor = Compositor::with_blend(CompositeOp::SrcOver, BlendMode::Darken);
    let out = draw_one(compositor, [214, 20, 65, 255], [250, 121, 17, 255]);
    assert_eq!(out, [214, 20, 17, 255]);
}

#[test]
fn multiply_blend_over_opaque_layers() {
    let compositor = Compositor::with_blend(CompositeOp::SrcOver, BlendMode::Multiply);
    let out = draw_one(compositor, [214, 20, 65, 255], [250, 121, 17, 255]);
    assert_eq!(out, [209, 9, 4, 255]);
}

#[test]
fn multiply_blend_with_semi_transparent_source() {
    let compositor = Compositor::with_blend(CompositeOp::SrcOver, BlendMode::Multiply);
    let out = draw_one(compositor, [214, 20, 65, 128], [250, 121, 17, 255]);
    assert_eq!(out, [229, 65, 10, 255]);
}

#[test]
fn out_of_bounds_inputs_read_as_transparent() {
    let source = uniform(CYAN); // 1x1
    let backdrop = RgbaImage::from_pixel(2, 2, image::Rgba(MAGENTA));

    let out = Compositor::new(CompositeOp::Copy)
        .draw(2, 2, &source, &backdrop)
        .unwrap();
    assert_eq!(out.get_pixel(0, 0).0, CYAN);
    assert_eq!(out.get_pixel(1, 1).0, [0, 0, 0, 0]);
}

#[test]
fn empty_canvas_draws_an_empty_image() {
    let out = Compositor::default()
        .draw(0, 0, &uniform(CYAN), &uniform(MAGENTA))
        .unwrap();
    assert_eq!(out.dimensions(), (0, 0));
}

#[test]
fn oversized_canvas_is_a_validation_error() {
    let err = Compositor::default()
        .draw(u32::MAX, u32::MAX, &uniform(CYAN), &uniform(MAGENTA))
        .unwrap_err();
    assert!(matches!(err, DuffleError::Validation(_)));
}
