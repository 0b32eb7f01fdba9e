// ==========================================
// 作品集内容管理 - 命令行入口
// ==========================================
// 本地运维工具，直接访问数据库，不经过管理员会话
// ==========================================

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use portfolio_cms::app::{get_default_db_path, AppState};
use portfolio_cms::importer::{default_importer, ProjectImporter};
use portfolio_cms::repository::ProjectRepository;
use portfolio_cms::ImportReport;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "portfolio-cms", version, about = "Portfolio CMS maintenance tool")]
struct Cli {
    /// SQLite database path (defaults to PORTFOLIO_CMS_DB_PATH or the user data directory)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database and tables if missing
    InitDb,
    /// Import projects from a CSV file and print the report
    Import {
        #[arg(value_name = "CSV")]
        file: PathBuf,
    },
    /// List all projects
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    portfolio_cms::logging::init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(get_default_db_path);
    tracing::info!(
        "{} v{}，使用数据库: {}",
        portfolio_cms::APP_NAME,
        portfolio_cms::VERSION,
        db_path
    );

    let state = AppState::new(db_path).map_err(|e| anyhow!(e))?;

    match cli.command {
        Command::InitDb => {
            println!("database ready: {}", state.db_path);
        }
        Command::Import { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .map_err(|e| anyhow!("failed to read {}: {}", file.display(), e))?;

            let importer = default_importer(state.project_repo.clone());
            let outcome = importer.import_from_text(&text).await?;
            let report = ImportReport::from(outcome);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::List => {
            for project in state.project_repo.list_all().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    project.id,
                    project.start_date,
                    if project.published { "published" } else { "draft" },
                    project.title
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_with_db_flag() {
        let cli = Cli::try_parse_from(["portfolio-cms", "import", "projects.csv", "--db", "x.db"])
            .unwrap();
        assert_eq!(cli.db.as_deref(), Some("x.db"));
        match cli.command {
            Command::Import { file } => assert_eq!(file, PathBuf::from("projects.csv")),
            other => panic!("Expected Import, got {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_names() {
        let cli = Cli::try_parse_from(["portfolio-cms", "init-db"]).unwrap();
        assert!(matches!(cli.command, Command::InitDb));
        assert!(cli.db.is_none());

        assert!(Cli::try_parse_from(["portfolio-cms", "import"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-cms", "sync"]).is_err());
    }
}
