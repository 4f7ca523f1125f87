mod app;
mod message;
mod sections;
mod widgets;

pub use app::PortfolioApp;
pub use message::Message;

/// Boots the portfolio window.
pub fn run() -> iced::Result {
    iced::application(PortfolioApp::title, PortfolioApp::update, PortfolioApp::view)
        .subscription(PortfolioApp::subscription)
        .theme(PortfolioApp::theme)
        .window_size(app::DEFAULT_WINDOW)
        .run()
}
