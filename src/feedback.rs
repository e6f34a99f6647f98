// Guest feedback: a rating and comments

use crate::guest::GuestHandle;

// Ratings are stored as given; no range is enforced
#[derive(Debug, Clone)]
pub struct Feedback {
    feedback_id: u32,
    guest: GuestHandle,
    rating: i32,
    comments: String,
}

impl Feedback {
    pub fn new(feedback_id: u32, guest: GuestHandle, rating: i32, comments: impl Into<String>) -> Self {
        Self {
            feedback_id,
            guest,
            rating,
            comments: comments.into(),
        }
    }

    pub fn get_feedback_id(&self) -> u32 {
        self.feedback_id
    }

    pub fn get_guest(&self) -> &GuestHandle {
        &self.guest
    }

    pub fn get_rating(&self) -> i32 {
        self.rating
    }

    pub fn set_rating(&mut self, rating: i32) {
        self.rating = rating;
    }

    pub fn get_comments(&self) -> &str {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }

    pub fn submit_feedback(&self) -> String {
        tracing::debug!(feedback = self.feedback_id, rating = self.rating, "feedback submitted");
        format!(
            "Feedback submitted. Rating: {}, Comments: {}",
            self.rating, self.comments
        )
    }
}
