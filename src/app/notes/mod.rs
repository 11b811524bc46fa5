//! Notes view: runs state commands on the tokio runtime and feeds results back

pub mod state;

use crate::api::ApiClient;
use eframe::egui;
use state::{Command, Event, NotesState};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

pub struct NotesPage {
    state: NotesState,
    client: ApiClient,
    runtime: Handle,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    in_flight: usize,
}

impl NotesPage {
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: NotesState::default(),
            client,
            runtime,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    /// Number of requests still waiting for a response
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Feed an event to the state and run whatever command it returns.
    pub fn handle(&mut self, ctx: &egui::Context, event: Event) {
        if let Some(command) = self.state.update(event) {
            self.dispatch(ctx, command);
        }
    }

    /// Drain completed requests. Called once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.handle(ctx, event);
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, command: Command) {
        debug!(?command, "Dispatching");
        self.in_flight += 1;

        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let event = match command {
                Command::List { seq } => Event::Listed { seq, result: client.list_notes().await },
                Command::Create(payload) => Event::Created(client.create_note(&payload).await),
                Command::Update { id, payload } => Event::Updated {
                    id,
                    result: client.update_note(id, &payload).await,
                },
                Command::Delete { id } => Event::Deleted { id, result: client.delete_note(id).await },
            };
            if let Err(e) = tx.send(event) {
                debug!(event = ?e.0, "Completion dropped, notes page is gone");
            }
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubServer;
    use crate::types::FormMode;
    use std::time::{Duration, Instant};

    fn settle(page: &mut NotesPage, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            page.poll(ctx);
            if page.in_flight() == 0 {
                return;
            }
            assert!(Instant::now() < deadline, "requests did not finish");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    fn setup() -> (tokio::runtime::Runtime, StubServer, NotesPage, egui::Context) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(StubServer::start());
        let page = NotesPage::new(ApiClient::new(server.base_url()), runtime.handle().clone());
        (runtime, server, page, egui::Context::default())
    }

    #[test]
    fn refresh_loads_empty_collection() {
        let (_runtime, _server, mut page, ctx) = setup();

        page.handle(&ctx, Event::Refresh);
        settle(&mut page, &ctx);

        assert_eq!(page.state().status(), "Loaded 0 note(s)");
        assert!(page.state().notes().is_empty());
    }

    #[test]
    fn create_then_list_shows_the_note() {
        let (_runtime, server, mut page, ctx) = setup();

        page.handle(&ctx, Event::TitleChanged("A".into()));
        page.handle(&ctx, Event::ContentChanged("B".into()));
        page.handle(&ctx, Event::Submit);
        settle(&mut page, &ctx);

        assert_eq!(server.last_body(), Some(serde_json::json!({ "title": "A", "content": "B" })));
        assert_eq!(page.state().mode(), FormMode::Create);
        assert_eq!(page.state().title(), "");
        assert_eq!(page.state().status(), "Loaded 1 note(s)");
        let notes = page.state().notes();
        assert_eq!(notes.len(), 1);
        assert_eq!((notes[0].title.as_str(), notes[0].content.as_str()), ("A", "B"));
    }

    #[test]
    fn edit_and_delete_round_trip() {
        let (_runtime, server, mut page, ctx) = setup();

        for (title, content) in [("one", "1"), ("two", "2")] {
            page.handle(&ctx, Event::TitleChanged(title.into()));
            page.handle(&ctx, Event::ContentChanged(content.into()));
            page.handle(&ctx, Event::Submit);
            settle(&mut page, &ctx);
        }
        let one = page.state().notes().iter().find(|n| n.title == "one").cloned().unwrap();
        let two = page.state().notes().iter().find(|n| n.title == "two").cloned().unwrap();

        page.handle(&ctx, Event::BeginEdit(one.clone()));
        page.handle(&ctx, Event::ContentChanged("uno".into()));
        page.handle(&ctx, Event::Submit);
        settle(&mut page, &ctx);

        let edited = page.state().notes().iter().find(|n| n.id == one.id).cloned().unwrap();
        assert_eq!(edited.content, "uno");
        assert_eq!(page.state().notes().iter().find(|n| n.id == two.id), Some(&two));

        page.handle(&ctx, Event::Delete(two.id));
        settle(&mut page, &ctx);
        assert!(page.state().notes().iter().all(|n| n.id != two.id));
        assert_eq!(page.state().notes(), server.notes().as_slice());
    }

    #[test]
    fn missing_note_delete_reports_detail() {
        let (_runtime, _server, mut page, ctx) = setup();
        page.handle(&ctx, Event::Refresh);
        settle(&mut page, &ctx);

        page.handle(&ctx, Event::Delete(5));
        settle(&mut page, &ctx);

        assert_eq!(page.state().status(), "not found");
        assert!(page.state().notes().is_empty());
        assert_eq!(page.state().mode(), FormMode::Create);
    }

    #[test]
    fn dropping_the_page_with_requests_in_flight_is_harmless() {
        let (runtime, server, mut page, ctx) = setup();

        page.handle(&ctx, Event::Refresh);
        drop(page);
        runtime.block_on(async { tokio::time::sleep(Duration::from_millis(200)).await });

        let client = ApiClient::new(server.base_url());
        assert!(runtime.block_on(client.list_notes()).unwrap().is_empty());
    }
}
