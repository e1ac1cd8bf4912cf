pub mod config;
pub mod error;
pub mod logger;

use self::config::{Config, USAGE};
use self::error::Error;
use log::error;
use smbios::{Acquire, DumpFile, DumpOptions, Firmware};
use std::io::{BufWriter, Write};
use std::process;

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            process::exit(2);
        }
    };

    if config.help {
        print!("{}", USAGE);
        return;
    }

    if let Err(err) = logger::init(config.level()) {
        eprintln!("{}", err);
    }

    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let smbios = match &config.from_dump {
        Some(path) => DumpFile::new(path).acquire()?,
        None => Firmware.acquire()?,
    };

    let options = DumpOptions {
        hex: config.hex,
        types: config.types.clone(),
    };

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let result = smbios::dump(&smbios, &options, &mut writer);
    writer.flush()?;
    result?;

    Ok(())
}
