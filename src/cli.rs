use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Draw random names from a CSV or TSV file")]
pub enum Command {
    /// Draw names from a single file and print them
    #[structopt(name = "draw")]
    Draw {
        /// CSV or TSV file with a header row and first,last name columns
        #[structopt(parse(from_os_str))]
        file: PathBuf,
        #[structopt(long, short, parse(from_os_str))]
        /// Also save the selected names to this new CSV file
        output_file: Option<PathBuf>,
        #[structopt(flatten)]
        draw_options: DrawOptions,
    },
    /// Load, show and clear selections interactively
    #[structopt(name = "shell")]
    Shell {
        #[structopt(flatten)]
        draw_options: DrawOptions,
    },
}

impl Command {
    pub fn draw_options(&self) -> &DrawOptions {
        match self {
            Command::Draw { draw_options, .. } => draw_options,
            Command::Shell { draw_options } => draw_options,
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct DrawOptions {
    #[structopt(
        long = "number-of-names",
        short = "n",
        default_value = "10",
        parse(try_from_str = parse_sample_size)
    )]
    /// The number of names to draw
    pub sample_size: usize,
    #[structopt(long)]
    /// Seed the random draw so that it can be repeated
    pub seed: Option<u64>,
    #[structopt(long, default_value = "warn")]
    /// Log level: trace, debug, info, warn or error
    pub log_level: String,
}

fn parse_sample_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("at least one name must be drawn".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{}: {}", s, e)),
    }
}
