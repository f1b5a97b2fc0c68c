mod errors;
mod page;
mod pipeline;
mod video;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Download a Facebook video by providing an URL
#[derive(Parser, Debug)]
#[command(
    name = "facebook-video-downloader",
    version,
    about,
    long_about = "Usage example:\n\nfacebook-video-downloader <video_url> --out video.mp4"
)]
struct Cli {
    /// Facebook video page URL
    url: Option<String>,

    /// Video output path
    #[arg(short, long)]
    out: Option<String>,

    /// Append to an existing output file instead of replacing it
    #[arg(long)]
    append: bool,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(url) = cli.url else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let out = match cli.out {
        Some(out) if !out.is_empty() => PathBuf::from(out),
        _ => {
            println!("Please specify video output path with --out or -o");
            return Ok(());
        }
    };

    let options = pipeline::Options {
        out,
        write_mode: if cli.append {
            video::WriteMode::Append
        } else {
            video::WriteMode::Truncate
        },
    };
    pipeline::run(&url, &options).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run(Cli::parse()).await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
