use clap::Parser;

/// A minimal task list with a terminal UI
#[derive(Parser)]
#[command(name = "tarefa", version)]
struct Cli {
    /// Start with an empty list instead of the sample tasks
    #[arg(long)]
    empty: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tarefa::tui::run(cli.empty) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
