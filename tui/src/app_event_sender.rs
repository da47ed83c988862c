use std::sync::mpsc::Sender;

use contract_core::SaveAck;

use crate::app_event::AppEvent;
use crate::app_event::Route;

#[derive(Clone, Debug)]
pub(crate) struct AppEventSender {
    app_event_tx: Sender<AppEvent>,
}

impl AppEventSender {
    pub(crate) fn new(app_event_tx: Sender<AppEvent>) -> Self {
        Self { app_event_tx }
    }

    /// Send an event to the app event channel. If it fails, we swallow the
    /// error and log it.
    pub(crate) fn send(&self, event: AppEvent) {
        if let Err(e) = self.app_event_tx.send(event) {
            tracing::error!("failed to send event: {e}");
        }
    }

    pub(crate) fn navigate(&self, route: Route) {
        self.send(AppEvent::Navigate(route));
    }

    pub(crate) fn contract_saved(&self, ack: SaveAck) {
        self.send(AppEvent::ContractSaved(ack));
    }
}
