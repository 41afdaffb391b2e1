#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::error::Error;

use clap::{App, Arg};

use filever::Version;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("string")
                .short("s")
                .long("string")
                .value_name("STRING")
                .help("the string to get a version from")
                .required(true)
                .takes_value(true),
        )
        .get_matches();

    // This cannot panic because of CLAP required flag.
    let v = matches.value_of("string").unwrap();

    debug!("extracting version from {:?}", v);
    let version: Version = v.parse()?;

    println!("Long:      {}", version.long());
    println!("Short:     {}", version.short());
    println!("Has build: {}", version.has_build());
    println!("Is set:    {}", version.is_set());

    Ok(())
}
