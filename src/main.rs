mod fetch;
mod parser;
mod record;
mod sheet;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

const DEFAULT_OUTPUT: &str = "Marvel_Comics_Issue_Data.xlsx";
const URL_PROMPT: &str = "Enter the URL of the individual issue page: ";

#[derive(Parser)]
#[command(name = "comic_scraper", about = "Scrape one comic issue wiki page into a spreadsheet")]
struct Cli {
    /// Issue page URL (prompted for when omitted)
    url: Option<String>,
    /// Spreadsheet to append to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Also print the extracted record as JSON
    #[arg(long)]
    print: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let url = match cli.url {
        Some(url) => url,
        None => prompt_url(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let markup = fetch::fetch_page(&url).await?;
    let record = parser::extract(&markup).with_context(|| format!("Failed to parse {}", url))?;
    info!("Extracted {:?}", record.issue_name);

    if cli.print {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    sheet::append(&cli.output, &record)?;
    println!(
        "Data has been successfully scraped and saved to {}",
        cli.output.display()
    );
    Ok(())
}

fn prompt_url(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", URL_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read URL from stdin")?;
    let url = line.trim();
    if url.is_empty() {
        bail!("No URL given");
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reads_one_line() {
        let mut input = io::Cursor::new("  https://example.org/wiki/Issue_1 \nignored\n");
        let mut out = Vec::new();
        let url = prompt_url(&mut input, &mut out).unwrap();
        assert_eq!(url, "https://example.org/wiki/Issue_1");
        assert_eq!(String::from_utf8(out).unwrap(), URL_PROMPT);
    }

    #[test]
    fn prompt_rejects_blank() {
        let mut input = io::Cursor::new("\n");
        assert!(prompt_url(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["comic_scraper"]).unwrap();
        assert!(cli.url.is_none());
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!cli.print);

        let cli = Cli::try_parse_from(["comic_scraper", "https://x/y", "-o", "out.xlsx", "--print"])
            .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://x/y"));
        assert_eq!(cli.output, PathBuf::from("out.xlsx"));
        assert!(cli.print);
    }
}
