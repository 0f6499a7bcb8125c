pub mod sources;

pub use sources::{ArticleDraft, NewsSource, TimesOfIndiaSource};
