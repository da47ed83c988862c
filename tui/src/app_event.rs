use contract_core::SaveAck;

/// Top-level destinations the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Editor,
}

/// Messages views post to the app loop. They are drained on the UI thread
/// right after the input event that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEvent {
    /// Switch screens. Entering the editor always starts a fresh session.
    Navigate(Route),

    /// A save completed; show its acknowledgment.
    ContractSaved(SaveAck),

    /// Show or hide the diagnostic log pane.
    ToggleLogPane,

    /// Request to exit the application gracefully.
    ExitRequest,
}
