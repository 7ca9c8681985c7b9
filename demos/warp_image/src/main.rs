use argh::FromArgs;
use std::path::PathBuf;

use rewarp::imgproc::interpolation::InterpolationMode;
use rewarp::imgproc::parallel::ExecutionStrategy;
use rewarp::imgproc::warp::{transform_image, WarpOptions};
use rewarp::io::{functional as F, script};

#[derive(FromArgs)]
/// Apply a scale/rotate/translate script to a grayscale image
struct Args {
    /// path to an input image
    #[argh(positional)]
    image_path: PathBuf,

    /// path to a transform script of `S|R|T a b` lines
    #[argh(positional)]
    transform_path: PathBuf,

    /// resampling quality: N (nearest), B (bilinear) or C (bicubic)
    #[argh(positional)]
    quality: String,

    /// path of the output image, defaults to out_<quality>.png
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// number of worker threads, 1 runs serially
    #[argh(option)]
    threads: Option<usize>,
}

fn interpolation_from_quality(quality: &str) -> Option<InterpolationMode> {
    match quality {
        "N" => Some(InterpolationMode::Nearest),
        "B" => Some(InterpolationMode::Bilinear),
        "C" => Some(InterpolationMode::Bicubic),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let Some(interpolation) = interpolation_from_quality(&args.quality) else {
        let name = std::env::args().next().unwrap_or_else(|| "warp_image".to_string());
        println!("Invalid quality {:?}", args.quality);
        println!("Usage: {name} image_file transform_file quality (N|B|C)");
        return Ok(());
    };

    // read the inputs before any pixel work
    let image = F::read_image_gray8(&args.image_path)?;
    let commands = script::read_transform_script(&args.transform_path)?;

    let options = WarpOptions {
        interpolation,
        strategy: ExecutionStrategy::from_threads(args.threads)?,
        ..Default::default()
    };

    let output = transform_image(&image, &commands, &options)?;

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("out_{}.png", args.quality)));
    F::write_image_gray8(&output_path, &output)?;

    log::info!("wrote {} to {:?}", output.size(), output_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_flags() {
        assert_eq!(
            interpolation_from_quality("N"),
            Some(InterpolationMode::Nearest)
        );
        assert_eq!(
            interpolation_from_quality("B"),
            Some(InterpolationMode::Bilinear)
        );
        assert_eq!(
            interpolation_from_quality("C"),
            Some(InterpolationMode::Bicubic)
        );
        assert_eq!(interpolation_from_quality("Q"), None);
        assert_eq!(interpolation_from_quality("n"), None);
    }
}
