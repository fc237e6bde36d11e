use clap::Parser;

use swasp_catalog::radius::stellar_radius;

#[derive(Parser)]
#[command(name = "rstar")]
#[command(about = "Estimate a stellar radius from IRFM theta and a parallax")]
#[command(version)]
struct Cli {
    /// IRFM theta value (mas)
    theta: f64,

    /// Parallax (mas)
    parallax: f64,
}

fn main() {
    let cli = Cli::parse();
    println!("{}", stellar_radius(cli.theta, cli.parallax));
}
