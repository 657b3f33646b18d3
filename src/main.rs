use clap::{crate_authors, crate_version, Args, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use timeq::cmd::context::{ContextCommand, ContextSubCommand};
use timeq::cmd::init::InitCommand;
use timeq::cmd::query::QueryCommand;
use timeq::cmd::time::TimeCommand;
use timeq::cmd::{context, init, query, time};

#[derive(Parser)]
#[clap(author = crate_authors!("\n"), version = crate_version!(), about = "timeq CLI", long_about = None)]
struct App {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: SubCommands,
}

// Enum representing all available commands
#[derive(Subcommand)]
enum SubCommands {
    Init(InitCommand),
    Context(ContextCommand),
    Query(QueryCommand),
    Time(TimeCommand),
}

#[derive(Args)]
struct GlobalOpts {
    /// Show more information in command output
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let app = App::parse();

    let level = if app.global_opts.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    match app.command {
        SubCommands::Init(_init_cmd) => {
            init::execute()?;
        }
        SubCommands::Context(context_cmd) => match context_cmd.subcommand {
            ContextSubCommand::List => {
                context::list::execute()?;
            }
            ContextSubCommand::Set(args) => {
                context::set::execute(&args)?;
            }
        },
        SubCommands::Query(query_cmd) => {
            query::execute(query_cmd)?;
        }
        SubCommands::Time(time_cmd) => {
            time::execute(&time_cmd)?;
        }
    }

    Ok(())
}
