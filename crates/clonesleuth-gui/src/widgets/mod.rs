/// Reusable drawing widgets shared by the panels.
pub mod metric_card;
pub mod progress_ring;
pub mod score_bar;
pub mod status_badge;
pub mod status_bar;
pub mod toolbar;
