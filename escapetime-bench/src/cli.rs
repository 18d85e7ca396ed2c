use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Scalar escape-time microbenchmark.
///
/// With no flags this reproduces the canonical workload: 1920x1080
/// evaluations of the reference kernel at (0, 0) with a budget of 1024,
/// reported as a single line on stdout.
#[derive(Parser, Debug)]
#[command(name = "escapetime-bench", version)]
pub struct Cli {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Iteration budget per evaluation
    #[arg(long, default_value_t = 1024)]
    pub max_iter: u32,

    /// Workload shape: the same coordinate for every pixel, or a per-pixel
    /// sweep of the default Mandelbrot viewport
    #[arg(long, value_enum, default_value = "fixed")]
    pub mode: Mode,

    /// Coordinate for fixed mode, as "RE,IM"
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    pub point: Point,

    /// Kernel variant id ("reference" or "textbook")
    #[arg(long, default_value = "reference")]
    pub kernel: String,

    /// Run a doubling-resolution sweep of this many steps instead of a
    /// single fixed-size run. Capped at 24: the ladder widths leave u32
    /// pixel range beyond that.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=24))]
    pub sweep: Option<u32>,

    /// Emit the workload summary as JSON instead of the report line
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every evaluation uses the same coordinate (worst case at the origin)
    Fixed,
    /// Each pixel maps to its own point in the complex plane
    Grid,
}

/// A coordinate in the complex plane, as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub re: f32,
    pub im: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum PointParseError {
    #[error("expected \"RE,IM\", got {0:?}")]
    MissingComma(String),
    #[error("invalid component {0:?}")]
    InvalidComponent(String),
    #[error("coordinate must be finite, got {0:?}")]
    NonFinite(String),
}

/// Parse a `--point` argument of the form "RE,IM".
///
/// The kernel contract only covers finite inputs, so non-finite values are
/// rejected here at the edge.
pub fn parse_point(s: &str) -> Result<Point, PointParseError> {
    let (re_str, im_str) = s
        .split_once(',')
        .ok_or_else(|| PointParseError::MissingComma(s.to_string()))?;
    let re: f32 = re_str
        .trim()
        .parse()
        .map_err(|_| PointParseError::InvalidComponent(re_str.to_string()))?;
    let im: f32 = im_str
        .trim()
        .parse()
        .map_err(|_| PointParseError::InvalidComponent(im_str.to_string()))?;
    if !re.is_finite() || !im.is_finite() {
        return Err(PointParseError::NonFinite(s.to_string()));
    }
    Ok(Point { re, im })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_reproduce_the_canonical_workload() {
        let cli = Cli::parse_from(["escapetime-bench"]);
        assert_eq!(cli.width, 1920);
        assert_eq!(cli.height, 1080);
        assert_eq!(cli.max_iter, 1024);
        assert_eq!(cli.mode, Mode::Fixed);
        assert_eq!(cli.point, Point { re: 0.0, im: 0.0 });
        assert_eq!(cli.kernel, "reference");
        assert_eq!(cli.sweep, None);
        assert!(!cli.json);
    }

    #[test]
    fn point_parses_signed_decimals() {
        let point = parse_point("-0.761574,-0.0847596").unwrap();
        assert_eq!(point.re, -0.761574);
        assert_eq!(point.im, -0.0847596);
    }

    #[test]
    fn point_allows_whitespace_around_components() {
        assert_eq!(parse_point(" 1.5 , 2 "), Ok(Point { re: 1.5, im: 2.0 }));
    }

    #[test]
    fn point_without_comma_is_rejected() {
        assert!(matches!(
            parse_point("0.5"),
            Err(PointParseError::MissingComma(_))
        ));
    }

    #[test]
    fn point_with_garbage_component_is_rejected() {
        assert!(matches!(
            parse_point("a,0"),
            Err(PointParseError::InvalidComponent(_))
        ));
    }

    #[test]
    fn non_finite_point_is_rejected() {
        assert!(matches!(
            parse_point("NaN,0"),
            Err(PointParseError::NonFinite(_))
        ));
        assert!(matches!(
            parse_point("0,inf"),
            Err(PointParseError::NonFinite(_))
        ));
    }

    #[test]
    fn sweep_accepts_the_ladder_cap() {
        let cli = Cli::parse_from(["escapetime-bench", "--sweep", "24"]);
        assert_eq!(cli.sweep, Some(24));
    }

    #[test]
    fn sweep_beyond_ladder_cap_is_rejected() {
        // Step 25 and beyond would overflow the u32 resolution ladder.
        assert!(Cli::try_parse_from(["escapetime-bench", "--sweep", "25"]).is_err());
        assert!(Cli::try_parse_from(["escapetime-bench", "--sweep", "33"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
