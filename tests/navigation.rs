//! End-to-end keyboard workflows through the screen controller.
//!
//! Every test drives the controller with raw key events the way the
//! event loop does, starting from an injected session so no login
//! round-trip is needed. API-bound choices run against a closed port
//! and land their transport failure in the response buffer.

mod common;

use apiconsole::api::ApiClient;
use apiconsole::app::Controller;
use apiconsole::screens::{ScreenAction, ScreenContext};
use apiconsole::ui::ScreenId;
use common::{key, key_with, serve_one, session, type_str, with_ctx};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::runtime::Runtime;

fn logged_in(ctx: &ScreenContext) -> Controller {
    let mut controller = Controller::new();
    controller
        .apply(ScreenAction::LoggedIn(session()), ctx)
        .unwrap();
    controller
}

fn press(controller: &mut Controller, ctx: &ScreenContext, code: KeyCode) -> bool {
    controller.handle_event(key(code), ctx).unwrap()
}

#[test]
fn arrow_keys_and_enter_reach_every_submenu() {
    with_ctx(|ctx| {
        let paths = [
            (0, ScreenId::PostgresMenu),
            (1, ScreenId::OpenAiMenu),
            (2, ScreenId::AwsMenu),
            (3, ScreenId::ClickUpMenu),
        ];
        for (downs, expected) in paths {
            let mut controller = logged_in(ctx);
            for _ in 0..downs {
                press(&mut controller, ctx, KeyCode::Down);
            }
            press(&mut controller, ctx, KeyCode::Enter);
            assert_eq!(controller.current(), expected, "after {downs} downs");
        }
    });
}

#[test]
fn successful_login_reaches_main_menu_with_cleared_fields() {
    let (url, request_rx) = serve_one(
        r#"{"message":"ok","token":"live-tok","refreshToken":"live-ref","user":{"id":"3","name":"Eve","email":"eve@example.com"}}"#,
    );
    let api = ApiClient::new(url);
    let runtime = Runtime::new().unwrap();
    let ctx = ScreenContext::new(&api, &runtime);
    let mut controller = Controller::new();

    for event in type_str("eve@example.com") {
        controller.handle_event(event, &ctx).unwrap();
    }
    controller.handle_event(key(KeyCode::Tab), &ctx).unwrap();
    for event in type_str(" pw ") {
        controller.handle_event(event, &ctx).unwrap();
    }
    controller.handle_event(key(KeyCode::Tab), &ctx).unwrap();
    let quit = controller.handle_event(key(KeyCode::Enter), &ctx).unwrap();
    assert!(!quit);

    assert_eq!(controller.current(), ScreenId::MainMenu);
    assert_eq!(controller.session().unwrap().token, "live-tok");
    // The credentials are discarded on the transition.
    assert_eq!(controller.login_screen().field_value(0), "");
    assert_eq!(controller.login_screen().field_value(1), "");

    // The password went over the wire exactly as typed.
    let request = request_rx.recv().unwrap();
    assert!(request.contains("\" pw \""));
}

#[test]
fn vim_keys_move_the_cursor() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Char('j'));
        press(&mut controller, ctx, KeyCode::Char('j'));
        press(&mut controller, ctx, KeyCode::Char('k'));
        assert_eq!(controller.menu(ScreenId::MainMenu).unwrap().cursor(), 1);
    });
}

#[test]
fn cursor_clamps_at_both_ends() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Up);
        assert_eq!(controller.menu(ScreenId::MainMenu).unwrap().cursor(), 0);
        for _ in 0..10 {
            press(&mut controller, ctx, KeyCode::Down);
        }
        // Four main menu entries; the cursor stops on the last one.
        assert_eq!(controller.menu(ScreenId::MainMenu).unwrap().cursor(), 3);
    });
}

#[test]
fn token_choice_answers_from_the_session() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter); // into Postgres
        press(&mut controller, ctx, KeyCode::Enter); // API Token
        let menu = controller.menu(ScreenId::PostgresMenu).unwrap();
        assert_eq!(menu.response(), "Response:\ntoken-abc");
        assert!(menu.is_selected(0));
    });
}

#[test]
fn refresh_token_choice_answers_from_the_session() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Enter);
        let menu = controller.menu(ScreenId::PostgresMenu).unwrap();
        assert_eq!(menu.response(), "Response:\nrefresh-xyz");
    });
}

#[test]
fn this_user_choice_formats_the_session_user() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        for _ in 0..3 {
            press(&mut controller, ctx, KeyCode::Down);
        }
        press(&mut controller, ctx, KeyCode::Enter);
        let menu = controller.menu(ScreenId::PostgresMenu).unwrap();
        assert_eq!(menu.response(), "Response:\nCurrent User: Ada (7)");
    });
}

#[test]
fn all_users_failure_lands_in_the_buffer() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Enter);
        // Still on the menu; the failed request never leaves the screen.
        assert_eq!(controller.current(), ScreenId::PostgresMenu);
        let menu = controller.menu(ScreenId::PostgresMenu).unwrap();
        assert!(menu
            .response()
            .starts_with("Error generating response: getting all users: sending request: "));
    });
}

#[test]
fn get_user_by_id_round_trips_through_the_prompt() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut controller, ctx, KeyCode::Down);
        }
        press(&mut controller, ctx, KeyCode::Enter);
        assert_eq!(controller.current(), ScreenId::UserIdPrompt);

        for event in type_str("42") {
            controller.handle_event(event, ctx).unwrap();
        }
        press(&mut controller, ctx, KeyCode::Enter); // field -> submit slot
        press(&mut controller, ctx, KeyCode::Enter); // submit

        assert_eq!(controller.current(), ScreenId::PostgresMenu);
        let menu = controller.menu(ScreenId::PostgresMenu).unwrap();
        assert!(menu.is_selected(4));
        assert!(menu
            .response()
            .starts_with("Error generating response: fetching user: sending request: "));
    });
}

#[test]
fn escape_quits_from_a_prompt() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter); // Postgres
        for _ in 0..4 {
            press(&mut controller, ctx, KeyCode::Down);
        }
        press(&mut controller, ctx, KeyCode::Enter); // prompt
        assert_eq!(controller.current(), ScreenId::UserIdPrompt);
        // Esc exits from input screens, same as on the login form.
        assert!(press(&mut controller, ctx, KeyCode::Esc));
    });
}

#[test]
fn empty_prompt_submit_stays_put() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut controller, ctx, KeyCode::Down);
        }
        press(&mut controller, ctx, KeyCode::Enter);
        press(&mut controller, ctx, KeyCode::Enter); // to submit slot
        press(&mut controller, ctx, KeyCode::Enter); // submit nothing
        assert_eq!(controller.current(), ScreenId::UserIdPrompt);
    });
}

#[test]
fn ask_ai_prompt_echoes_into_the_openai_menu() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Enter); // OpenAI menu
        press(&mut controller, ctx, KeyCode::Enter); // Ask ChatGPT
        assert_eq!(controller.current(), ScreenId::AskAi);

        for event in type_str("hello there") {
            controller.handle_event(event, ctx).unwrap();
        }
        press(&mut controller, ctx, KeyCode::Enter);
        press(&mut controller, ctx, KeyCode::Enter);

        assert_eq!(controller.current(), ScreenId::OpenAiMenu);
        let menu = controller.menu(ScreenId::OpenAiMenu).unwrap();
        assert_eq!(menu.response(), "Prompt:\nhello there");
        assert!(menu.is_selected(0));
    });
}

#[test]
fn only_the_last_activated_choice_stays_selected() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Enter); // AWS menu
        press(&mut controller, ctx, KeyCode::Enter); // select row 0
        press(&mut controller, ctx, KeyCode::Down);
        press(&mut controller, ctx, KeyCode::Char(' ')); // select row 1
        let menu = controller.menu(ScreenId::AwsMenu).unwrap();
        assert!(!menu.is_selected(0));
        assert!(menu.is_selected(1));
    });
}

#[test]
fn reentering_a_submenu_starts_fresh() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        press(&mut controller, ctx, KeyCode::Enter); // fill the buffer
        assert!(!controller
            .menu(ScreenId::PostgresMenu)
            .unwrap()
            .response()
            .is_empty());

        controller.apply(ScreenAction::MenuChosen(0), ctx).unwrap();
        let menu = controller.menu(ScreenId::PostgresMenu).unwrap();
        assert_eq!(menu.cursor(), 0);
        assert!(menu.response().is_empty());
    });
}

#[test]
fn q_quits_from_a_menu() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        assert!(press(&mut controller, ctx, KeyCode::Char('q')));
    });
}

#[test]
fn ctrl_c_quits_from_a_prompt() {
    with_ctx(|ctx| {
        let mut controller = logged_in(ctx);
        press(&mut controller, ctx, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut controller, ctx, KeyCode::Down);
        }
        press(&mut controller, ctx, KeyCode::Enter);
        let quit = controller
            .handle_event(key_with(KeyCode::Char('c'), KeyModifiers::CONTROL), ctx)
            .unwrap();
        assert!(quit);
    });
}
