use rewarp_image::{Image, ImageSize};
use rewarp_imgproc::interpolation::InterpolationMode;
use rewarp_imgproc::parallel::ExecutionStrategy;
use rewarp_imgproc::warp::{
    compile_transform, parse_transform_script, resolve_canvas, transform_image, AffineMatrix,
    TransformCommand, WarpOptions,
};
use rewarp_imgproc::WarpError;

const ALL_MODES: [InterpolationMode; 4] = [
    InterpolationMode::Nearest,
    InterpolationMode::Bilinear,
    InterpolationMode::Bicubic,
    InterpolationMode::BicubicQuadrant,
];

fn ramp(size: ImageSize) -> Result<Image<u8>, WarpError> {
    let data = (0..size.area())
        .map(|i| ((i * 37) % 256) as u8)
        .collect::<Vec<_>>();
    Ok(Image::new(size, data)?)
}

#[test]
fn identity_reproduces_source() -> Result<(), WarpError> {
    let src = ramp([9, 7].into())?;
    let commands = parse_transform_script("T 0 0")?;

    let nearest = transform_image(
        &src,
        &commands,
        &WarpOptions::with_interpolation(InterpolationMode::Nearest),
    )?;
    assert_eq!(nearest, src);

    let bilinear = transform_image(
        &src,
        &commands,
        &WarpOptions::with_interpolation(InterpolationMode::Bilinear),
    )?;
    assert_eq!(bilinear.size(), src.size());
    for (a, b) in bilinear.as_slice().iter().zip(src.as_slice()) {
        assert!(a.abs_diff(*b) <= 1);
    }

    let bicubic = transform_image(
        &src,
        &commands,
        &WarpOptions::with_interpolation(InterpolationMode::Bicubic),
    )?;
    assert_eq!(bicubic, src);

    Ok(())
}

#[test]
fn translate_one_one_nearest() -> Result<(), WarpError> {
    let src = Image::<u8>::new([4, 4].into(), (0..16).collect())?;
    let commands = parse_transform_script("T 1 1\n")?;

    let dst = transform_image(
        &src,
        &commands,
        &WarpOptions::with_interpolation(InterpolationMode::Nearest),
    )?;

    assert!(dst.width() >= 5 && dst.height() >= 5);
    for y in 0..dst.height() {
        for x in 0..dst.width() {
            let expected = if x >= 1 && y >= 1 && x <= 4 && y <= 4 {
                src.get_pixel(x - 1, y - 1)?
            } else {
                255
            };
            assert_eq!(dst.get_pixel(x, y)?, expected, "pixel ({x}, {y})");
        }
    }

    Ok(())
}

#[test]
fn rotate_ninety_permutes_corners() -> Result<(), WarpError> {
    let src = Image::<u8>::new([2, 2].into(), vec![10, 20, 30, 40])?;

    // the quadrant tables blend neighbours even on the pixel grid, so only exact kernels
    for mode in &ALL_MODES[..3] {
        let mode = *mode;
        let dst = transform_image(
            &src,
            &[TransformCommand::rotate(90.0)],
            &WarpOptions::with_interpolation(mode),
        )?;
        assert_eq!(dst.size(), src.size(), "{mode:?}");

        let mut values = dst.as_slice().to_vec();
        values.sort_unstable();
        assert_eq!(values, vec![10, 20, 30, 40], "{mode:?}");
    }

    // x' = -y, y' = x, shifted right by one column
    let dst = transform_image(
        &src,
        &[TransformCommand::rotate(90.0)],
        &WarpOptions::with_interpolation(InterpolationMode::Nearest),
    )?;
    assert_eq!(dst.as_slice(), &[30, 10, 40, 20]);

    Ok(())
}

#[test]
fn full_turn_is_identity() -> Result<(), WarpError> {
    let src = ramp([6, 5].into())?;
    let dst = transform_image(
        &src,
        &[TransformCommand::rotate(360.0)],
        &WarpOptions::with_interpolation(InterpolationMode::Nearest),
    )?;
    assert_eq!(dst, src);
    Ok(())
}

#[test]
fn scale_up_nearest() -> Result<(), WarpError> {
    let src = Image::<u8>::new([2, 2].into(), vec![1, 2, 3, 4])?;
    let dst = transform_image(
        &src,
        &[TransformCommand::scale(2.0, 2.0)],
        &WarpOptions::with_interpolation(InterpolationMode::Nearest),
    )?;

    // source (x, y) lands on (2x, 2y); halfway samples round away from zero
    #[rustfmt::skip]
    let expected = [
        1, 2, 2,
        3, 4, 4,
        3, 4, 4,
    ];
    assert_eq!(dst.as_slice(), &expected);
    Ok(())
}

#[test]
fn scale_inverse_roundtrip() -> Result<(), WarpError> {
    let m = compile_transform(&[TransformCommand::scale(2.0, 2.0)]);
    assert_eq!(m.inverse()?, AffineMatrix::from_scale(0.5, 0.5));
    Ok(())
}

#[test]
fn corners_fit_resolved_canvas() -> Result<(), WarpError> {
    let source: ImageSize = [31, 17].into();
    for angle in (-360..=360).step_by(15) {
        let commands = [
            TransformCommand::scale(1.25, 0.8),
            TransformCommand::rotate(angle as f32),
            TransformCommand::translate(-3.0, 2.5),
        ];
        let resolved = resolve_canvas(&compile_transform(&commands), source)?;
        for (x, y) in rewarp_imgproc::warp::corners(source) {
            let (u, v) = resolved.matrix.transform_point(x, y);
            let (u, v) = (u.round(), v.round());
            assert!(u >= 0.0 && (u as usize) < resolved.size.width, "angle {angle}");
            assert!(v >= 0.0 && (v as usize) < resolved.size.height, "angle {angle}");
        }
    }
    Ok(())
}

#[test]
fn singular_transform_fails_before_resampling() -> Result<(), WarpError> {
    let src = ramp([4, 4].into())?;
    let res = transform_image(
        &src,
        &[TransformCommand::scale(0.0, 1.0)],
        &WarpOptions::default(),
    );
    assert!(matches!(res, Err(WarpError::SingularMatrix(_))));
    Ok(())
}

#[test]
fn overflowing_scale_fails_without_panic() -> Result<(), WarpError> {
    let src = ramp([4, 4].into())?;
    let commands = parse_transform_script("S 1e20 1e20\nS 1e20 1e20\n")?;
    for mode in ALL_MODES {
        let res = transform_image(&src, &commands, &WarpOptions::with_interpolation(mode));
        assert!(matches!(res, Err(WarpError::CanvasTooLarge(..))), "{mode:?}");
    }

    let res = transform_image(
        &src,
        &[TransformCommand::scale(1e30, 1e30)],
        &WarpOptions::default(),
    );
    assert!(matches!(res, Err(WarpError::CanvasTooLarge(..))));
    Ok(())
}

#[test]
fn invalid_kind_fails_parse() {
    assert_eq!(
        parse_transform_script("S 2 2\nZ 1 1\n"),
        Err(WarpError::InvalidCommandKind("Z".to_string()))
    );
}

#[test]
fn empty_source_fails() -> Result<(), WarpError> {
    let src = Image::<u8>::new([0, 0].into(), vec![])?;
    assert_eq!(
        transform_image(&src, &[], &WarpOptions::default()),
        Err(WarpError::EmptyImage)
    );
    Ok(())
}

#[test]
fn strategies_agree() -> Result<(), WarpError> {
    let src = ramp([23, 19].into())?;
    let commands = parse_transform_script("S 1.3 0.9\nR 17 0\nT -4 2\n")?;

    for mode in ALL_MODES {
        let mut outputs = Vec::new();
        for strategy in [
            ExecutionStrategy::Serial,
            ExecutionStrategy::ParallelRows,
            ExecutionStrategy::Fixed(3),
        ] {
            let options = WarpOptions {
                interpolation: mode,
                strategy,
                ..Default::default()
            };
            outputs.push(transform_image(&src, &commands, &options)?);
        }
        assert_eq!(outputs[0], outputs[1], "{mode:?}");
        assert_eq!(outputs[0], outputs[2], "{mode:?}");
    }
    Ok(())
}

#[test]
fn custom_background() -> Result<(), WarpError> {
    let src = Image::<u8>::from_size_val([3, 3].into(), 100)?;
    let options = WarpOptions {
        interpolation: InterpolationMode::Bicubic,
        background: 0,
        ..Default::default()
    };
    let dst = transform_image(&src, &[TransformCommand::translate(2.0, 0.0)], &options)?;
    assert_eq!(dst.size(), [5, 3].into());
    for row in dst.rows_iter() {
        assert_eq!(row, &[0, 0, 100, 100, 100]);
    }
    Ok(())
}
