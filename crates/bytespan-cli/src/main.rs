mod cli;
mod commands;
mod presets;
mod util;


use cli::{DumpParams, MatchParams, ReduceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matching::run(params.into());
        }
        Some(("reduce", m)) => {
            let params = ReduceParams::from_matches(m);
            commands::reduce::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
