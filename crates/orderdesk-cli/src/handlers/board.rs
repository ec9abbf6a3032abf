use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use is_terminal::IsTerminal;
use orderdesk_client::ApiClient;
use orderdesk_core::{Action, Directive, FormField, FormMode, Overlay, Screen};
use orderdesk_types::OrderBatch;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::presentation::presenters;
use crate::presentation::views::tui::{self, BoardTerminal};

/// Outcome of a spawned API call, delivered back to the event loop.
enum CallOutcome {
    Health(bool),
    Fetch(Result<OrderBatch, String>),
    Save(Result<(), String>),
    Delete(Result<(), String>),
}

pub async fn handle(client: ApiClient) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("the board needs an interactive terminal (use `orderdesk list` in scripts)");
    }

    let mut terminal = tui::setup_terminal()?;
    let result = run_board(&mut terminal, client).await;
    tui::restore_terminal(&mut terminal)?;
    result
}

async fn run_board(terminal: &mut BoardTerminal, client: ApiClient) -> Result<()> {
    let mut screen = Screen::new();
    let (tx, mut rx) = mpsc::channel::<CallOutcome>(16);

    // Advisory liveness probe, then the initial fetch.
    spawn_health(&client, &tx);
    let directive = screen.apply(Action::Refresh, Instant::now());
    execute(&client, &tx, directive);

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(250));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        screen.tick(Instant::now());
        let vm = presenters::present_board(&screen, client.base_url(), Instant::now());
        terminal.draw(|f| tui::draw(f, &vm))?;

        let directive = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match map_key(&key, &screen) {
                        Some(action) => screen.apply(action, Instant::now()),
                        None => Directive::None,
                    }
                }
                // Resize and the rest just trigger the redraw above.
                Some(Ok(_)) => Directive::None,
                Some(Err(_)) | None => Directive::Quit,
            },
            Some(outcome) = rx.recv() => apply_outcome(&mut screen, outcome),
            _ = ticker.tick() => Directive::None,
        };

        if matches!(directive, Directive::Quit) {
            return Ok(());
        }
        execute(&client, &tx, directive);
    }
}

/// Contextual key mapping: the active overlay decides what a key means.
fn map_key(key: &KeyEvent, screen: &Screen) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen.overlay() {
        Overlay::Form => match key.code {
            KeyCode::Esc => Some(Action::CloseOverlay),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Left | KeyCode::Right => {
                (screen.form().focus() == FormField::Status).then_some(Action::CycleStatusChoice)
            }
            KeyCode::Char(' ') if screen.form().focus() == FormField::Status => {
                Some(Action::CycleStatusChoice)
            }
            KeyCode::Char(ch) => Some(Action::Input(ch)),
            _ => None,
        },

        Overlay::Confirm => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(Action::CloseOverlay),
            _ => None,
        },

        Overlay::None => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
            KeyCode::Char('a') => Some(Action::OpenCreate),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEdit),
            KeyCode::Char('d') => Some(Action::RequestDelete),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('f') => Some(Action::CycleStatusFilter),
            KeyCode::Char('v') => Some(Action::CycleVendorFilter),
            KeyCode::Char('x') => Some(Action::ClearFilters),
            _ => None,
        },
    }
}

fn apply_outcome(screen: &mut Screen, outcome: CallOutcome) -> Directive {
    let now = Instant::now();
    match outcome {
        CallOutcome::Health(ok) => {
            screen.finish_health(ok, now);
            Directive::None
        }
        CallOutcome::Fetch(result) => {
            screen.finish_fetch(result, now);
            Directive::None
        }
        CallOutcome::Save(result) => screen.finish_save(result, now),
        CallOutcome::Delete(result) => screen.finish_delete(result, now),
    }
}

/// Runs a directive by spawning the API call; the outcome returns through
/// the channel so drawing never blocks on the network.
fn execute(client: &ApiClient, tx: &mpsc::Sender<CallOutcome>, directive: Directive) {
    match directive {
        Directive::None | Directive::Quit => {}

        Directive::Fetch => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = client.list_orders().await.map_err(|e| e.to_string());
                let _ = tx.send(CallOutcome::Fetch(outcome)).await;
            });
        }

        Directive::Save(mode, draft) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = match &mode {
                    FormMode::Create => client.create_order(&draft).await.map(|_| ()),
                    FormMode::Edit(id) => client.update_order(id, &draft).await.map(|_| ()),
                }
                .map_err(|e| e.to_string());
                let _ = tx.send(CallOutcome::Save(outcome)).await;
            });
        }

        Directive::Delete(id) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = client.delete_order(&id).await.map_err(|e| e.to_string());
                let _ = tx.send(CallOutcome::Delete(outcome)).await;
            });
        }
    }
}

fn spawn_health(client: &ApiClient, tx: &mpsc::Sender<CallOutcome>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let ok = client.check_health().await.is_ok();
        let _ = tx.send(CallOutcome::Health(ok)).await;
    });
}
