pub mod console;
pub mod html_page;

pub use console::ConsoleRenderTarget;
pub use html_page::HtmlPageTarget;
