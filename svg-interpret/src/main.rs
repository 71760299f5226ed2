// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod bezier;
mod context;
mod error;
mod matrix;
mod style;
mod stroke;

use std::io::Write;

use svg_pipeline_types::{read_instruction, write_polygon, Instruction};

use context::Context;
use error::Error;
use matrix::Matrix3;

const DEFAULT_BEZIER_SAMPLES: u32 = 10;

const HELP: &str = "\
svg-interpret maintains the drawing state (style/transform stacks, current
path, smooth-curve reflection) described by the instruction stream on stdin
and emits a polygon stream on stdout.

USAGE:
  svg-interpret [bezier-sampling-rate] < instructions.txt > polygons.txt

ARGS:
  <bezier-sampling-rate>   Number of linear samples per flattened cubic
                            Bezier curve. Default 10. A missing argument
                            keeps the default; a present-but-unparseable one
                            is a usage error.

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

    if let Err(e) = process(args.bezier_samples) {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

struct CliArgs {
    bezier_samples: u32,
    verbose: bool,
}

fn parse_args() -> Result<CliArgs, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }
    let verbose = args.contains(["-v", "--verbose"]);
    // A missing positional keeps the default; a present-but-malformed one
    // is a usage error, same as any other pico-args parse failure.
    let bezier_samples = args.opt_free_from_str()?.unwrap_or(DEFAULT_BEZIER_SAMPLES);
    Ok(CliArgs { bezier_samples, verbose })
}

fn process(bezier_samples: u32) -> Result<(), Error> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    let mut ctx = Context::new();
    while let Some(instr) = read_instruction(&mut input)? {
        exec(&mut ctx, instr, bezier_samples, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn exec<W: Write>(
    ctx: &mut Context,
    instr: Instruction,
    bezier_samples: u32,
    out: &mut W,
) -> Result<(), Error> {
    match instr {
        Instruction::Save => ctx.save(),
        Instruction::Restore => ctx.restore()?,
        Instruction::StrokeWidth(w) => ctx.set_stroke_width(w),
        Instruction::StrokeColor(c) => ctx.set_stroke_color(c),
        Instruction::FillColor(c) => ctx.set_fill_color(c),
        Instruction::PushMatrix(v) => ctx.push_matrix(Matrix3::from_svg_matrix(v)),
        Instruction::PopMatrix => ctx.pop_matrix()?,
        Instruction::BeginPath => ctx.begin_path(),
        Instruction::MoveTo(p) => ctx.move_to(p)?,
        Instruction::MoveToRel(p) => ctx.move_to_rel(p)?,
        Instruction::LineTo(p) => ctx.line_to(p)?,
        Instruction::LineToRel(p) => ctx.line_to_rel(p)?,
        Instruction::VLineTo(y) => ctx.v_line_to(y)?,
        Instruction::VLineToRel(dy) => ctx.v_line_to_rel(dy)?,
        Instruction::HLineTo(x) => ctx.h_line_to(x)?,
        Instruction::HLineToRel(dx) => ctx.h_line_to_rel(dx)?,
        Instruction::CurveTo { c1, c2, end } => ctx.curve_to(c1, c2, end, bezier_samples)?,
        Instruction::CurveToRel { c1, c2, end } => ctx.curve_to_rel(c1, c2, end, bezier_samples)?,
        Instruction::SCurveTo { c2, end } => ctx.s_curve_to(c2, end, bezier_samples)?,
        Instruction::SCurveToRel { c2, end } => ctx.s_curve_to_rel(c2, end, bezier_samples)?,
        Instruction::ClosePath => ctx.close_path()?,
        Instruction::FillAndStroke => {
            for (color, vertices) in ctx.fill_and_stroke() {
                if let Some(hex) = color.hex24() {
                    write_polygon(out, hex, &vertices)?;
                }
            }
        }
    }
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
