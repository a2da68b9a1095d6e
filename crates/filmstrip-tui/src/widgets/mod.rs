mod filmstrip;
mod status_bar;

pub use filmstrip::FilmstripWidget;
pub use status_bar::StatusBarWidget;
