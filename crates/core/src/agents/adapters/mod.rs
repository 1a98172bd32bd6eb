//! Builtin agent implementations.

mod echo;
mod http_fetch;
mod template;

pub use echo::EchoAgent;
pub use http_fetch::HttpFetchAgent;
pub use template::TemplateAgent;
