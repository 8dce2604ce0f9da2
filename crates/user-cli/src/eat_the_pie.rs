use eat_the_pie_cli::commands::LotteryCommand;
use eat_the_pie_cli::context::Context;
use eat_the_pie_cli::shell::run_shell;
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use log4rs::Config as LogConfig;
use std::path::PathBuf;
use structopt::StructOpt;

const LOG_FILE_PATH: &str = "log/eat-the-pie.log";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "eat-the-pie",
    about = "Eat The Pie, the world lottery on Ethereum."
)]
pub struct Opt {
    /// Set the config path
    #[structopt(short = "c", long, parse(from_os_str), default_value = "conf/config.yml")]
    config_path: PathBuf,

    /// Set the history file path of the shell
    #[structopt(
        short = "H",
        long,
        parse(from_os_str),
        default_value = "eat-the-pie.history"
    )]
    history_file_path: PathBuf,

    /// Set the level of the file log
    #[structopt(short = "l", long, default_value = "debug")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Option<LotteryCommand>,
}

fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}{n}")))
        .build();

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build(LOG_FILE_PATH)?;

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Warn)))
                .build("stdout", Box::new(stdout)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(level),
        )?;

    log4rs::init_config(log_config)?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    init_logger(opt.log_level)?;

    let command = opt.command.unwrap_or(LotteryCommand::Setup);
    let context = Context::new(opt.config_path, opt.history_file_path);

    info!("running {} with config {}", command.name(), context.config_path.display());

    let succeeded = match command {
        LotteryCommand::Shell => {
            run_shell(&context).await?;
            true
        }
        command => command.execute(&context).await,
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
