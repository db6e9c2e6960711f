use std::path::PathBuf;

use structopt::StructOpt;

use crate::engine::ViewKind;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "openstat",
    about = "Aggregate email open tracking exports into dashboard-ready views"
)]
pub struct CliOpt {
    /// CSV export to aggregate; stdin when omitted.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Views to compute (repeatable); all of them when omitted.
    #[structopt(long = "view", short = "v")]
    pub views: Vec<ViewKind>,

    /// Output encoding ("h" for human-readable tables; JSON otherwise).
    #[structopt(long = "encode", short = "e")]
    pub encode: Option<String>,
}
