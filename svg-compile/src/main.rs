// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod compiler;
mod error;
mod path_data;

use std::io::{Read, Write};

use error::Error;

const HELP: &str = "\
svg-compile parses a restricted SVG subset and emits the drawing instruction
stream consumed by svg-interpret.

USAGE:
  svg-compile < in.svg > instructions.txt

OPTIONS:
  -h, --help        Prints this help
  -v, --verbose     Raises the log level from warn to debug
";

fn main() {
    let verbose = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    init_logger(verbose);

    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Result<bool, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }
    let verbose = args.contains(["-v", "--verbose"]);
    Ok(verbose)
}

fn process() -> Result<(), Error> {
    let mut svg_data = Vec::new();
    std::io::stdin().lock().read_to_end(&mut svg_data)?;
    let svg_string = std::str::from_utf8(&svg_data).map_err(|_| Error::NotUtf8)?;

    let xml_opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(svg_string, xml_opt)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    compiler::compile(&doc, &mut out)?;
    out.flush()?;

    Ok(())
}

static LOGGER: SimpleLogger = SimpleLogger;

fn init_logger(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }
}

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
