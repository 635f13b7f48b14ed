use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;
use std::io;

use ton_wallet_manager::{
    assemble, display, interactive, resolve, Args, SeedSource, StateInitDeriver, WalletReport,
};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.direct_mode() {
        run_direct(&args)
    } else {
        run_interactive()
    }
}

fn run_interactive() -> Result<()> {
    display::print_header();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let selection = interactive::collect_selection(&mut input, &mut output, &mut OsRng)?;
    let config = resolve(selection, &mut OsRng)?;
    let info = assemble(config, &StateInitDeriver)?;

    display::print_wallet(&info);
    Ok(())
}

fn run_direct(args: &Args) -> Result<()> {
    let selection = args.selection()?;
    let generated = matches!(selection.seed, SeedSource::Generate);

    let config = resolve(selection, &mut OsRng)?;

    // A freshly generated phrase always goes to stderr first, clearly
    // labeled, even in simple mode - stdout stays clean for piping.
    if generated {
        eprintln!("# Seed phrase (save securely!):");
        eprintln!("{}", config.seed.joined());
        if !args.simple {
            eprintln!();
        }
    }

    let info = assemble(config, &StateInitDeriver)?;

    if args.simple {
        println!("{}", info.address);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&WalletReport::from(&info))?);
    } else {
        display::print_wallet_cli(&info);
    }

    Ok(())
}
