use medgloss_core::preprocess::normalize_query;
use medgloss_core::session::SessionError;
use medgloss_types::{AppEvent, Notice, UiEvent};

use crate::commands::{Command, HELP, parse_command};
use crate::render::{render_notice, render_session};
use crate::state::UiState;

/// What the UI loop should do after an input line or an app event
#[derive(Debug, Default)]
pub struct Reaction {
    pub output: Vec<String>,
    pub outgoing: Vec<AppEvent>,
    pub quit: bool,
}

impl Reaction {
    fn print(line: impl Into<String>) -> Self {
        Self {
            output: vec![line.into()],
            ..Self::default()
        }
    }

    fn send(event: AppEvent) -> Self {
        Self {
            outgoing: vec![event],
            ..Self::default()
        }
    }
}

fn notice(state: &UiState, notice: Notice) -> Reaction {
    Reaction::print(render_notice(&notice, &state.style))
}

pub fn handle_input(state: &mut UiState, line: &str) -> Reaction {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => return notice(state, Notice::Error(e.to_string())),
    };

    match command {
        Command::Search(query) => {
            // Blank lines keep the previous query
            if query.as_deref().is_some_and(|q| normalize_query(q).is_none()) {
                return Reaction::default();
            }
            if state.session.is_searching() {
                return notice(state, Notice::Error(SessionError::Busy.to_string()));
            }
            if let Some(query) = query {
                state.session.set_query(query);
            }
            match state.session.begin_search() {
                Ok(ticket) => {
                    tracing::debug!("Search {} for '{}'", ticket.search_id, ticket.query);
                    Reaction {
                        output: vec!["Searching…".to_string()],
                        outgoing: vec![AppEvent::Search {
                            search_id: ticket.search_id,
                            query: ticket.query,
                        }],
                        quit: false,
                    }
                }
                Err(SessionError::EmptyQuery) => Reaction::default(),
                Err(e) => notice(state, Notice::Error(e.to_string())),
            }
        }
        Command::Edit { field, value } => {
            state.session.edit(field, value);
            let current = state.session.field(field).to_string();
            notice(state, Notice::Info(format!("Updated {field}: {current}")))
        }
        Command::Copy => Reaction::send(AppEvent::CopyText(state.session.export_text())),
        Command::Export => Reaction::print(state.session.export_text()),
        Command::Clear => {
            state.session.clear();
            Reaction::print(render_session(&state.session, &state.style))
        }
        Command::Show => Reaction::print(render_session(&state.session, &state.style)),
        Command::Help => Reaction::print(HELP),
        Command::Quit => Reaction {
            outgoing: vec![AppEvent::UiEvent(UiEvent::Close)],
            quit: true,
            ..Reaction::default()
        },
    }
}

pub fn handle_app_event(state: &mut UiState, event: AppEvent) -> Reaction {
    match event {
        AppEvent::ShowRecord { search_id, record } => {
            if state.session.apply_record(search_id, record) {
                Reaction::print("Fetching image…")
            } else {
                tracing::debug!("Dropping stale record for search {}", search_id);
                Reaction::default()
            }
        }
        AppEvent::ShowImage { search_id, image } => {
            if state.session.apply_image(search_id, image) {
                Reaction::print(render_session(&state.session, &state.style))
            } else {
                tracing::debug!("Dropping stale image for search {}", search_id);
                Reaction::default()
            }
        }
        AppEvent::SearchFailed { search_id, message } => {
            if state.session.fail_search(search_id) {
                notice(state, Notice::Error(message))
            } else {
                tracing::debug!("Dropping stale failure for search {}", search_id);
                Reaction::default()
            }
        }
        AppEvent::Notify(n) => notice(state, n),
        AppEvent::BackendReady => notice(state, Notice::Info("Ready".to_string())),
        AppEvent::UiEvent(UiEvent::Close) => Reaction {
            quit: true,
            ..Reaction::default()
        },
        AppEvent::Search { .. } | AppEvent::CopyText(_) => {
            // App-bound events, nothing to do on the UI side
            Reaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use medgloss_core::session::SearchPhase;
    use medgloss_types::{ImageResult, TermRecord};

    use super::*;
    use crate::render::Style;

    fn state() -> UiState {
        UiState::new(Style::plain())
    }

    fn record(term: &str) -> TermRecord {
        TermRecord {
            term: term.to_string(),
            pronunciation: "أوستيوميلايتس".to_string(),
            meaning: "التهاب العظم".to_string(),
            definition: "عدوى بكتيرية في العظم".to_string(),
        }
    }

    fn search_id(reaction: &Reaction) -> u64 {
        match reaction.outgoing.as_slice() {
            [AppEvent::Search { search_id, .. }] => *search_id,
            other => panic!("expected one search event, got {other:?}"),
        }
    }

    fn run_search(state: &mut UiState, term: &str, image: &str) -> u64 {
        let id = search_id(&handle_input(state, term));
        handle_app_event(
            state,
            AppEvent::ShowRecord {
                search_id: id,
                record: record(term),
            },
        );
        handle_app_event(
            state,
            AppEvent::ShowImage {
                search_id: id,
                image: ImageResult::new(image),
            },
        );
        id
    }

    #[test]
    fn blank_input_sends_nothing() {
        let mut state = state();
        for line in ["", "   ", "\t"] {
            let reaction = handle_input(&mut state, line);
            assert!(reaction.outgoing.is_empty());
            assert!(reaction.output.is_empty());
        }
        assert_eq!(state.session.phase(), SearchPhase::Idle);
    }

    #[test]
    fn blank_input_after_a_result_keeps_the_session() {
        let mut state = state();
        run_search(&mut state, "Osteomyelitis", "https://example/img.png");
        let before = render_session(&state.session, &state.style);

        for line in ["   ", "", "\t"] {
            let reaction = handle_input(&mut state, line);
            assert!(reaction.outgoing.is_empty());
        }

        assert_eq!(state.session.query(), "Osteomyelitis");
        assert_eq!(state.session.phase(), SearchPhase::Displaying);
        assert_eq!(render_session(&state.session, &state.style), before);

        // The stored query can still be re-run
        let rerun = handle_input(&mut state, ":search");
        match rerun.outgoing.as_slice() {
            [AppEvent::Search { query, .. }] => assert_eq!(query, "Osteomyelitis"),
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn edit_echoes_the_new_value() {
        let mut state = state();
        run_search(&mut state, "Osteomyelitis", "");

        let reaction = handle_input(&mut state, ":edit meaning التهاب نقي العظم");
        assert_eq!(
            reaction.output,
            vec!["Updated meaning: التهاب نقي العظم".to_string()]
        );
    }

    #[test]
    fn search_sends_trimmed_query() {
        let mut state = state();
        let reaction = handle_input(&mut state, "  Osteomyelitis  ");

        match reaction.outgoing.as_slice() {
            [AppEvent::Search { query, .. }] => assert_eq!(query, "Osteomyelitis"),
            other => panic!("unexpected events: {other:?}"),
        }
        assert!(state.session.is_searching());
    }

    #[test]
    fn second_search_while_pending_is_refused() {
        let mut state = state();
        handle_input(&mut state, "Osteomyelitis");

        let reaction = handle_input(&mut state, "Nephritis");
        assert!(reaction.outgoing.is_empty());
        assert_eq!(reaction.output, vec!["Error: A search is already running"]);
        assert_eq!(state.session.query(), "Osteomyelitis");
    }

    #[test]
    fn record_then_image_reaches_displaying() {
        let mut state = state();
        run_search(&mut state, "Osteomyelitis", "https://example/img.png");

        assert_eq!(state.session.phase(), SearchPhase::Displaying);
        assert_eq!(state.session.image().image_url, "https://example/img.png");
    }

    #[test]
    fn failure_notifies_and_keeps_fields() {
        let mut state = state();
        run_search(&mut state, "Osteomyelitis", "");
        let before = state.session.export_text();

        let id = search_id(&handle_input(&mut state, "Nephritis"));
        let reaction = handle_app_event(
            &mut state,
            AppEvent::SearchFailed {
                search_id: id,
                message: "Missing OPENAI_API_KEY".to_string(),
            },
        );

        assert_eq!(reaction.output, vec!["Error: Missing OPENAI_API_KEY"]);
        assert_eq!(state.session.phase(), SearchPhase::Idle);
        assert_eq!(state.session.export_text(), before);

        // Input is still accepted after a failure
        assert_eq!(search_id(&handle_input(&mut state, "Nephritis")), id + 1);
    }

    #[test]
    fn edit_then_copy_uses_edited_text_without_lookup() {
        let mut state = state();
        run_search(&mut state, "Osteomyelitis", "https://example/img.png");

        let edit = handle_input(&mut state, ":edit meaning التهاب نقي العظم");
        assert!(edit.outgoing.is_empty());

        let copy = handle_input(&mut state, ":copy");
        match copy.outgoing.as_slice() {
            [AppEvent::CopyText(text)] => {
                assert!(text.contains("\u{202B}المعنى بالعربي: التهاب نقي العظم"));
                assert!(text.ends_with("\u{202B}Image (URL): https://example/img.png"));
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn clear_mid_search_drops_late_results() {
        let mut state = state();
        let id = search_id(&handle_input(&mut state, "Osteomyelitis"));
        handle_input(&mut state, ":clear");

        let reaction = handle_app_event(
            &mut state,
            AppEvent::ShowRecord {
                search_id: id,
                record: record("Osteomyelitis"),
            },
        );

        assert!(reaction.output.is_empty());
        assert_eq!(state.session.record(), &TermRecord::default());
        assert_eq!(state.session.query(), "");
    }

    #[test]
    fn quit_closes_the_app() {
        let mut state = state();
        let reaction = handle_input(&mut state, ":quit");
        assert!(reaction.quit);
        assert!(matches!(
            reaction.outgoing.as_slice(),
            [AppEvent::UiEvent(UiEvent::Close)]
        ));
    }

    #[test]
    fn notices_are_rendered() {
        let mut state = state();
        let reaction = handle_app_event(
            &mut state,
            AppEvent::Notify(Notice::Info("Copied ✅".to_string())),
        );
        assert_eq!(reaction.output, vec!["Copied ✅"]);
    }
}
