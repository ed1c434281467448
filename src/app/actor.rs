//! App actor - message loop processing UI events and timer events

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, TimerEvent, UiEvent};
use crate::models::MenuCatalog;
use crate::timer::ResetTimer;

/// App actor that processes UI events and timer events
pub struct AppActor {
    state: AppState,
    timer: ResetTimer,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        reset_delay: Duration,
        timer_tx: mpsc::UnboundedSender<TimerEvent>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(catalog),
            timer: ResetTimer::new(reset_delay, timer_tx),
            render_tx,
        }
    }

    /// Run the actor message loop. Returns when the UI asks to quit or goes
    /// away; a pending form reset is cancelled with the actor.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                event = ui_rx.recv() => match event {
                    Some(event) => {
                        if self.handle_ui_event(event) {
                            tracing::info!("Quit requested");
                            break;
                        }
                        let _ = self.render_tx.send(self.state.to_render_state());
                    }
                    None => {
                        tracing::info!("UI channel closed");
                        break;
                    }
                },
                Some(event) = timer_rx.recv() => {
                    self.handle_timer_event(event);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
            }
        }

        if let Some(ticket) = self.timer.pending() {
            tracing::info!(submission = ticket.0, "Dropping pending form reset");
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation bar
            UiEvent::SwitchSection(section) => self.state.switch_section(section),
            UiEvent::NextSection => self.state.next_section(),
            UiEvent::PrevSection => self.state.prev_section(),

            // Menu browser
            UiEvent::SelectCategory(name) => self.state.select_category(&name),
            UiEvent::SelectCategoryIndex(index) => self.state.select_category_index(index),
            UiEvent::NextCategory => self.state.next_category(),
            UiEvent::PrevCategory => self.state.prev_category(),

            // Contact form
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::FieldChar(c) => self.state.enter_char(c),
            UiEvent::FieldBackspace => self.state.delete_char(),
            UiEvent::SetField(field, value) => self.state.set_field(field, value),
            UiEvent::SubmitForm => {
                let ticket = self.state.submit_form();
                self.timer.schedule(ticket);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }

    fn handle_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ResetContactForm(ticket) => {
                self.timer.clear_fired(ticket);
                self.state.complete_submission(ticket);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::contact::ContactField;
    use crate::catalog;
    use crate::constants::SUBMIT_RESET_DELAY;
    use tokio::time::Instant;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let catalog = Arc::new(catalog::built_in().unwrap());
        let actor = AppActor::new(catalog, SUBMIT_RESET_DELAY, timer_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, timer_rx));
        Harness { ui_tx, render_rx, handle }
    }

    impl Harness {
        async fn send(&mut self, event: UiEvent) -> RenderState {
            self.ui_tx.send(event).unwrap();
            self.render_rx.recv().await.unwrap()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_render_shows_bread() {
        let mut h = spawn_actor();
        let initial = h.render_rx.recv().await.unwrap();
        assert_eq!(initial.selected_category, "Bread");
        assert_eq!(initial.visible_items.len(), 3);
        assert!(!initial.acknowledged);
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_click_filters_items() {
        let mut h = spawn_actor();
        h.render_rx.recv().await.unwrap();

        let render = h.send(UiEvent::SelectCategory("Croissant".into())).await;
        assert_eq!(render.selected_category, "Croissant");
        assert_eq!(render.visible_items[1].name, "Pain au Chocolat");

        let render = h.send(UiEvent::SelectCategory("Sandwiches".into())).await;
        assert_eq!(render.selected_category, "Croissant");

        let render = h.send(UiEvent::SelectCategoryIndex(3)).await;
        assert_eq!(render.selected_category, "Beverages");
        assert_eq!(render.visible_items[0].name, "Espresso");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_resets_after_delay() {
        let mut h = spawn_actor();
        h.render_rx.recv().await.unwrap();

        h.send(UiEvent::SetField(ContactField::Name, "Alice".into())).await;
        let start = Instant::now();
        let render = h.send(UiEvent::SubmitForm).await;
        assert!(render.acknowledged);
        assert_eq!(render.fields.name, "Alice");

        let render = h.render_rx.recv().await.unwrap();
        assert!(Instant::now() - start >= SUBMIT_RESET_DELAY);
        assert!(!render.acknowledged);
        assert!(render.fields.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_submit_ends_idle() {
        let mut h = spawn_actor();
        h.render_rx.recv().await.unwrap();

        let start = Instant::now();
        h.send(UiEvent::SubmitForm).await;
        tokio::time::advance(Duration::from_millis(1000)).await;
        h.send(UiEvent::SetField(ContactField::Email, "a@b.c".into())).await;
        let render = h.send(UiEvent::SubmitForm).await;
        assert!(render.acknowledged);

        // Only the restarted timer fires, 3000 ms after the second submit
        let render = h.render_rx.recv().await.unwrap();
        assert!(Instant::now() - start >= Duration::from_millis(4000));
        assert!(!render.acknowledged);
        assert!(render.fields.is_empty());

        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(h.render_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_actor() {
        let mut h = spawn_actor();
        h.render_rx.recv().await.unwrap();
        h.send(UiEvent::SubmitForm).await;
        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();

        // No reset arrives for the abandoned submission
        assert!(h.render_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_ui_channel_stops_actor() {
        let mut h = spawn_actor();
        h.render_rx.recv().await.unwrap();
        h.send(UiEvent::SubmitForm).await;
        drop(h.ui_tx);

        let finished = tokio::time::timeout(Duration::from_secs(60), h.handle).await;
        assert!(finished.is_ok(), "actor kept running after the UI sender was dropped");
        assert!(h.render_rx.recv().await.is_none());
    }
}
