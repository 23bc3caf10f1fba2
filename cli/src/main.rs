use clap::{Parser, Subcommand};
use coursefill::error::{AppResult, run_with_error_handler};

#[derive(Parser, Debug)]
#[command(about = "Admin tool for filling course content in the learning store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Commands {
    /// Create the missing lesson and quiz for every course
    Populate,

    /// Rewrite every lesson body with the long-form template
    Enhance,

    /// Report lesson word counts against the 1500-2500 target
    WordCount,

    /// List the courses visible to the service key
    Courses,
}

async fn execute(command: Commands) -> AppResult<()> {
    let mm = coursefill::connect(cfg!(debug_assertions))?;

    match command {
        Commands::Populate => {
            coursefill::run_populate(&mm).await?;
        }
        Commands::Enhance => {
            coursefill::run_enhance(&mm).await?;
        }
        Commands::WordCount => {
            coursefill::run_word_count(&mm).await?;
        }
        Commands::Courses => {
            coursefill::run_list_courses(&mm).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    coursefill::setup_trace();

    let command = args.command;
    run_with_error_handler(async || execute(command).await).await;
}
