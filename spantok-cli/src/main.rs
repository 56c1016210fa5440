mod common;
mod decode;
mod encode;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "spantok";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Reversible word and character tokenization with token spans.")
        .subcommand_required(true)
        .subcommand(encode::cli::create_encode_cli())
        .subcommand(decode::cli::create_decode_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ENCODE
        //
        Some((encode::cli::ENCODE_CMD, matches)) => {
            encode::handlers::run_encode(matches)?;
        }

        //
        // DECODE
        //
        Some((decode::cli::DECODE_CMD, matches)) => {
            decode::handlers::run_decode(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
