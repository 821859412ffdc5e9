pub mod health;
pub mod talking_head;
