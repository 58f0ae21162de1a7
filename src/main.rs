use anyhow::Context;
use colored::Colorize;
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io;
use std::process;
use structopt::StructOpt;

use namedraw::cli::Command;
use namedraw::report::{render_state, write_selection_csv};
use namedraw::selector::{Selector, SelectorState};
use namedraw::{logger, shell};

///
/// Main loop
///

fn main() {
    let cmd = Command::from_args();

    if let Err(e) = logger::setup_logger(&cmd.draw_options().log_level) {
        eprintln!("{}: unable to start logging: {}", "error".red(), e);
    }

    match run(cmd) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            process::exit(1);
        }
    }
}

/// Returns `false` when the draw ended in a user-facing error.
fn run(cmd: Command) -> anyhow::Result<bool> {
    let opts = cmd.draw_options();
    let mut rng: Box<dyn RngCore> = match opts.seed {
        Some(seed) => {
            debug!("seeding draw with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };
    let mut selector = Selector::new(opts.sample_size);

    match &cmd {
        Command::Draw {
            file, output_file, ..
        } => {
            let state = selector.upload(file, &mut rng);
            println!("{}", render_state(state));

            match (state, output_file) {
                (SelectorState::Sampled(names), Some(out)) => {
                    write_selection_csv(out, names)?;
                    debug!("saved selection to {}", out.display());
                    Ok(true)
                }
                (SelectorState::Sampled(_), None) => Ok(true),
                _ => Ok(false),
            }
        }
        Command::Shell { .. } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            shell::run_shell(stdin.lock(), &mut stdout.lock(), &mut selector, &mut rng)
                .context("running shell")?;
            Ok(true)
        }
    }
}
