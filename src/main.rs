use std::fs;
use std::io::{self, Read};

use structopt::StructOpt;

use openstat::cliopt::CliOpt;
use openstat::engine::{self, ViewKind};
use openstat::ingest;
use openstat::output::{
    encoder::{HumanReadableEncoder, JsonEncoder},
    writer::LineWriter,
    Output,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let opt = CliOpt::from_args();

    let text = match opt.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let records = ingest::parse(&text)?;

    let mut output = Output::new(
        Box::new(LineWriter::new(io::stdout())),
        match opt.encode {
            None => Box::new(JsonEncoder::new()),
            Some(ref e) if e == "h" => Box::new(HumanReadableEncoder::new()),
            _ => unimplemented!(),
        },
    );

    let kinds = if opt.views.is_empty() {
        ViewKind::ALL.to_vec()
    } else {
        opt.views
    };

    for kind in kinds {
        output.write(kind, &engine::execute(kind, &records))?;
    }

    Ok(())
}
