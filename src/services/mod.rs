pub mod recommender;
pub mod submission;

pub use recommender::{HttpRecommender, Recommender};
pub use submission::{
    BufferedView, ResultsArea, ResultsView, SubmissionHandler, SubmissionOutcome, SubmissionState,
};
