// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod color;
mod edge;
mod error;
mod framebuffer;
mod raster;

use svg_pipeline_types::read_polygon;

use color::hex_to_straight_rgb;
use error::Error;
use framebuffer::Framebuffer;

const CANVAS_SIZE: f32 = 900.0;

const HELP: &str = "\
svg-rasterize reads the polygon stream on stdin and renders it into a PNG via
a scanline active-edge algorithm with optional vertical supersampling.

USAGE:
  svg-rasterize [scale] [aa] [debug] < polygons.txt

ARGS:
  <scale>   Output scales to a (900*scale) x (900*scale) canvas. Default 1.
  <aa>      Vertical supersampling factor. Default 1.
  <debug>   Nonzero bypasses rasterization and plots one opaque pixel per
             transformed vertex, writing debug.png instead of out.png.
             Default 0.

OPTIONS:
  -h, --help        Prints this help
  -v, --verbose     Raises the log level from warn to debug
";

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    init_logger(args.verbose);

    if let Err(e) = process(&args) {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

struct CliArgs {
    scale: f32,
    aa: u32,
    debug: bool,
    verbose: bool,
}

fn parse_args() -> Result<CliArgs, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }
    let verbose = args.contains(["-v", "--verbose"]);
    let scale = args.opt_free_from_str()?.unwrap_or(1.0f32);
    let aa = args.opt_free_from_str()?.unwrap_or(1u32);
    let debug_flag: u32 = args.opt_free_from_str()?.unwrap_or(0);
    Ok(CliArgs {
        scale,
        aa,
        debug: debug_flag != 0,
        verbose,
    })
}

fn process(args: &CliArgs) -> Result<(), Error> {
    let size = ((CANVAS_SIZE * args.scale).round().max(1.0)) as u32;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    if args.debug {
        render_debug(&mut input, size, args.scale)
    } else {
        render_aa(&mut input, size, args.scale, args.aa.max(1))
    }
}

/// Debug mode: bypass rasterization entirely and plot one opaque
/// pixel per transformed vertex into a non-supersampled buffer.
fn render_debug<R: std::io::BufRead>(input: &mut R, size: u32, scale: f32) -> Result<(), Error> {
    let mut buf = vec![0u8; (size as usize) * (size as usize) * 4];
    while let Some(poly) = read_polygon(input)? {
        let rgb = hex_to_straight_rgb(poly.color);
        for v in &poly.vertices {
            let x = (v.x * scale).round() as i64;
            let y = (v.y * scale).round() as i64;
            if x < 0 || y < 0 || x as u32 >= size || y as u32 >= size {
                continue;
            }
            let idx = ((y as u32 * size + x as u32) * 4) as usize;
            buf[idx] = (rgb[0] * 255.0) as u8;
            buf[idx + 1] = (rgb[1] * 255.0) as u8;
            buf[idx + 2] = (rgb[2] * 255.0) as u8;
            buf[idx + 3] = 0xff;
        }
    }
    write_png("debug.png", size, size, &buf)
}

/// Normal mode: accumulate every polygon into a shared, optionally
/// vertically-supersampled [`Framebuffer`], then resolve once and encode.
fn render_aa<R: std::io::BufRead>(input: &mut R, size: u32, scale: f32, aa: u32) -> Result<(), Error> {
    let mut fb = Framebuffer::new(size, size, aa);
    while let Some(poly) = read_polygon(input)? {
        if poly.vertices.len() < 2 {
            continue;
        }
        let rgb = hex_to_straight_rgb(poly.color);
        // x lives in output-pixel space; y is additionally scaled by `aa`
        // to land in the framebuffer's subpixel-row space.
        let device: Vec<svg_pipeline_types::Point> = poly
            .vertices
            .iter()
            .map(|p| svg_pipeline_types::Point::new(p.x * scale, p.y * scale * aa as f32))
            .collect();
        raster::scan_fill(&device, |x, y, coverage| {
            fb.put_pixel(x, y, rgb, coverage);
        });
    }
    let bytes = fb.resolve();
    write_png("out.png", fb.width(), fb.height(), &bytes)
}

fn write_png(path: &str, width: u32, height: u32, rgba: &[u8]) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}

fn init_logger(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }
}

static LOGGER: SimpleLogger = SimpleLogger;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
