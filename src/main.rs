use anyhow::Result;
use clap::Parser;

use release_scout::analyzer::ReleaseAnalyzer;
use release_scout::config;
use release_scout::git::Git2Repository;
use release_scout::ui;
use release_scout::warnings::ScanWarning;

#[derive(clap::Parser)]
#[command(
    name = "release-scout",
    about = "Find the last release tag and the commits made since it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Tag format, e.g. v{version} (overrides config)")]
    format: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path to the repository")]
    path: String,

    #[arg(short, long, help = "Maximum number of commits to list")]
    limit: Option<usize>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-scout {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let tag_format = args.format.unwrap_or(config.tag_format);
    let limit = args.limit.unwrap_or(config.display.commit_limit);

    // A format without the {version} placeholder is a configuration defect;
    // fail before touching the repository
    let analyzer = match ReleaseAnalyzer::new(&tag_format) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(&args.path) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status("Collecting commits and previous version information...");

    let result = match analyzer.analyze(&repo) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Analysis failed: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(selected) = &result.tag {
        ui::display_success(&format!(
            "Last tag is {} at {}",
            selected.tag.name,
            selected.commit.short_id()
        ));

        if result.commits.is_empty() {
            ui::display_warning(&ScanWarning::NoNewCommits {
                last_tag: selected.tag.name.clone(),
                head: selected.commit.id.to_string(),
            });
        }

        // Selection never inspects the version part; warn here so a tag
        // like "vNext" does not surprise the downstream bump logic
        if !analyzer.pattern().matches_version(&selected.tag.name) {
            let reason = match analyzer.pattern().version_part(&selected.tag.name) {
                Some(version) => match semver::Version::parse(version) {
                    Ok(_) => "not a plain X.Y.Z version".to_string(),
                    Err(e) => e.to_string(),
                },
                None => "tag has no version part".to_string(),
            };
            ui::display_warning(&ScanWarning::UnparsableVersion {
                tag: selected.tag.name.clone(),
                reason,
            });
        }
    } else {
        ui::display_status(&format!(
            "No tag matching '{}' found, using full history",
            tag_format
        ));
    }

    ui::display_success(&format!("Found {} commits", result.commits.len()));
    ui::display_analysis(&result, limit);

    Ok(())
}
