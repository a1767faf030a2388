pub mod booking;
pub mod contact;
pub mod gallery_item;
pub mod outbox;
pub mod post;
pub mod testimonial;
pub mod tour;
pub mod user;
