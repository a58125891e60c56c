//! Line protocol spoken by `pathway_pipe`.
//!
//! ```text
//! GENERATE <profile-json>  ->  PATHWAY <pathway-json>
//! CHECK                    ->  MISSING <id> <id> ...   or   OK
//! EXIT
//! ```
//!
//! Every non-blank request gets exactly one reply line; bad input answers
//! `ERROR <message>`.

use crate::core::engine::PathwayEngine;
use crate::core::types::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Write this line back to the host
    Reply(String),
    /// Blank input; nothing to answer
    Skip,
    /// The host asked us to stop
    Exit,
}

/// Handles one request line. Surrounding whitespace is ignored.
pub fn respond(engine: &PathwayEngine, line: &str) -> Response {
    let line = line.trim();
    if line.is_empty() {
        return Response::Skip;
    }
    let (command, payload) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "GENERATE" => Response::Reply(handle_generate(engine, payload)),
        "CHECK" => Response::Reply(handle_check(engine)),
        "EXIT" => Response::Exit,
        other => Response::Reply(format!("ERROR unknown command '{}'", other)),
    }
}

fn handle_generate(engine: &PathwayEngine, payload: &str) -> String {
    let profile: UserProfile = match serde_json::from_str(payload) {
        Ok(profile) => profile,
        Err(e) => return format!("ERROR invalid profile: {}", e),
    };
    match serde_json::to_string(&engine.generate(&profile)) {
        Ok(json) => format!("PATHWAY {}", json),
        Err(e) => format!("ERROR {}", e),
    }
}

fn handle_check(engine: &PathwayEngine) -> String {
    let missing = engine.catalog().missing_referenced_ids();
    if missing.is_empty() {
        "OK".to_string()
    } else {
        format!("MISSING {}", missing.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModuleCatalog;

    const HISTORY_PROFILE: &str = r#"{"background": {"discipline": "history",
        "researchInterests": [], "programmingExperience": "intermediate"}}"#;

    fn reply(engine: &PathwayEngine, line: &str) -> String {
        match respond(engine, line) {
            Response::Reply(text) => text,
            other => panic!("expected a reply for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn generate_replies_with_pathway_json() {
        let engine = PathwayEngine::new();
        let text = reply(&engine, &format!("GENERATE {}", HISTORY_PROFILE));
        let json = text.strip_prefix("PATHWAY ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["modules"][0], "structured-data");
        assert_eq!(value["recommendedLanguage"], "python");
    }

    #[test]
    fn leading_whitespace_still_gets_a_reply() {
        let engine = PathwayEngine::new();
        let text = reply(&engine, &format!(" GENERATE {}", HISTORY_PROFILE));
        assert!(text.starts_with("PATHWAY "));
        assert_eq!(reply(&engine, "  CHECK"), "OK");
        assert_eq!(reply(&engine, "\tCHECK  "), "OK");
        assert_eq!(respond(&engine, "  EXIT"), Response::Exit);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let engine = PathwayEngine::new();
        assert_eq!(respond(&engine, ""), Response::Skip);
        assert_eq!(respond(&engine, "   \t"), Response::Skip);
    }

    #[test]
    fn check_lists_missing_ids() {
        let engine = PathwayEngine::with_catalog(ModuleCatalog::from_records(vec![]).unwrap());
        let text = reply(&engine, "CHECK");
        assert!(text.starts_with("MISSING "));
        assert!(text.contains("python-basics"));
    }

    #[test]
    fn bad_input_answers_error() {
        let engine = PathwayEngine::new();
        assert_eq!(reply(&engine, "FOO"), "ERROR unknown command 'FOO'");
        assert!(reply(&engine, "GENERATE {not json").starts_with("ERROR invalid profile"));
        assert!(reply(&engine, "GENERATE").starts_with("ERROR invalid profile"));
    }
}
