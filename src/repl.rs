use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::aid_record::AidMatch;
use crate::search::embedding_engine::TextEmbedder;
use crate::search::service::SearchService;
use crate::store::VectorStore;

pub const BANNER: &str = "\n🧠 Oklahoma Resource Agent ✦ type ‘exit’ to quit\n";
pub const PROMPT: &str = "What do you need help with?\n> ";
pub const NO_MATCH: &str = "No matching resources – try again.\n";

/// What one line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Empty,
    Query(&'a str),
}

pub fn classify_input(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        Command::Exit
    } else if trimmed.is_empty() {
        Command::Empty
    } else {
        Command::Query(trimmed)
    }
}

pub fn format_matches(matches: &[AidMatch]) -> String {
    let mut out = String::from("\n🔎 Top Matches:\n\n");
    for (i, m) in matches.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({})\n   {}\n   ➤ Contact: {}\n\n",
            i + 1,
            m.name,
            m.city,
            m.description,
            m.contact
        ));
    }
    out
}

/// Read-search-print loop. Returns once the user exits or input reaches EOF.
///
/// Returns the number of searches that were run.
pub async fn run<E, S, R, W>(
    service: &SearchService<'_, E, S>,
    top_k: usize,
    mut input: R,
    output: &mut W,
) -> Result<usize>
where
    E: TextEmbedder + ?Sized,
    S: VectorStore + Sync + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut searches = 0;
    writeln!(output, "{}", BANNER)?;
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            break;
        }

        let query = match classify_input(&line) {
            Command::Exit => break,
            Command::Empty => continue,
            Command::Query(query) => query,
        };

        let matches = service.search(query, top_k).await?;
        searches += 1;
        if matches.is_empty() {
            writeln!(output, "{}", NO_MATCH)?;
        } else {
            write!(output, "{}", format_matches(&matches))?;
        }
    }
    output.flush()?;
    Ok(searches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exit_variants() {
        assert_eq!(classify_input("exit"), Command::Exit);
        assert_eq!(classify_input("EXIT\n"), Command::Exit);
        assert_eq!(classify_input(" quit "), Command::Exit);
        assert_eq!(classify_input("Quit\r\n"), Command::Exit);
    }

    #[test]
    fn test_classify_empty_and_queries() {
        assert_eq!(classify_input(""), Command::Empty);
        assert_eq!(classify_input("   \n"), Command::Empty);
        assert_eq!(classify_input("  rent help \n"), Command::Query("rent help"));
        // Only an exact match exits.
        assert_eq!(classify_input("exit now"), Command::Query("exit now"));
        assert_eq!(classify_input("quitting"), Command::Query("quitting"));
    }

    #[test]
    fn test_format_matches_numbering() {
        let matches = vec![
            AidMatch {
                name: "Care Clinic".to_string(),
                city: "Norman".to_string(),
                description: "Diabetes screening".to_string(),
                contact: "405-555-0100".to_string(),
            },
            AidMatch {
                name: "Food Bank".to_string(),
                city: "Tulsa".to_string(),
                description: "Groceries".to_string(),
                contact: "918-555-0100".to_string(),
            },
        ];
        let text = format_matches(&matches);
        assert!(text.starts_with("\n🔎 Top Matches:\n\n"));
        assert!(text.contains("1. Care Clinic (Norman)\n   Diabetes screening\n   ➤ Contact: 405-555-0100\n"));
        assert!(text.contains("2. Food Bank (Tulsa)\n"));
    }
}
