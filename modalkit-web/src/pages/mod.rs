mod builder;
mod embed;

pub use builder::Builder;
pub use embed::Embed;
