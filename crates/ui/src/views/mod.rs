mod quiz;
mod result;
mod share;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use result::ResultCard;
pub use share::ShareButton;
pub use state::ViewError;
