use clap::{Args, Parser, Subcommand};
use semaforo::digest::{load_news, write_digest};
use semaforo::image_fit::{LOGO_MAX_HEIGHT, LOGO_MAX_WIDTH, fit_image_file};
use semaforo::preview::{preview_config, render_preview};
use semaforo::{LogoSpec, Orientation, ReportConfig, ReportDocumentBuilder, ReportError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the one-page header preview
    Preview {
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Fit a logo into a bounding box and write it as PNG
    FitLogo {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = LOGO_MAX_WIDTH)]
        max_width: f32,
        #[arg(long, default_value_t = LOGO_MAX_HEIGHT)]
        max_height: f32,
        /// Print the logo as a config JSON fragment instead of its size
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Render a news digest report
    Digest {
        #[command(flatten)]
        report: ReportArgs,
        /// JSON array of news items
        #[arg(long)]
        news: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Report configuration JSON
    #[arg(long)]
    config: PathBuf,
    #[arg(long)]
    output: PathBuf,
    #[arg(long, default_value_t = false)]
    landscape: bool,
    /// Logo file for the issuing company, fitted to 500x200 px
    #[arg(long)]
    issuer_logo: Option<PathBuf>,
    /// Logo file for the client, fitted to 500x200 px
    #[arg(long)]
    client_logo: Option<PathBuf>,
}

impl ReportArgs {
    fn orientation(&self) -> Orientation {
        if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    fn load_config(&self) -> Result<ReportConfig, ReportError> {
        let mut config = ReportConfig::from_file(&self.config)?;
        if let Some(path) = &self.issuer_logo {
            config = config.with_issuer_logo(fit_image_file(path, LOGO_MAX_WIDTH, LOGO_MAX_HEIGHT)?);
        }
        if let Some(path) = &self.client_logo {
            config = config.with_client_logo(fit_image_file(path, LOGO_MAX_WIDTH, LOGO_MAX_HEIGHT)?);
        }
        Ok(config)
    }
}

fn run(command: Command) -> Result<(), ReportError> {
    match command {
        Command::Preview { report } => {
            let config = preview_config(report.load_config()?);
            let mut builder = ReportDocumentBuilder::new(config, report.orientation())?;
            render_preview(&mut builder);
            builder.save_as(&report.output)?;
            println!("Generated {}", report.output.display());
        }
        Command::FitLogo {
            input,
            output,
            max_width,
            max_height,
            json,
        } => {
            let logo = fit_image_file(&input, max_width, max_height)?;
            std::fs::write(&output, logo.bytes())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&LogoSpec::from_image(&logo))?);
            } else {
                println!(
                    "{}: {:.2} x {:.2} mm",
                    output.display(),
                    logo.width_mm,
                    logo.height_mm
                );
            }
        }
        Command::Digest { report, news } => {
            let config = report.load_config()?;
            let items = load_news(&news)?;
            let mut builder = ReportDocumentBuilder::new(config, report.orientation())?;
            let pages = write_digest(&mut builder, &items)?;
            builder.save_as(&report.output)?;
            println!("Generated {} ({} pages)", report.output.display(), pages);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("semaforo=info"))
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
