pub mod booking_repo;
pub mod contact_repo;
pub mod gallery_repo;
pub mod outbox_repo;
pub mod post_repo;
pub mod testimonial_repo;
pub mod tour_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use contact_repo::ContactRepo;
pub use gallery_repo::GalleryRepo;
pub use outbox_repo::OutboxRepo;
pub use post_repo::PostRepo;
pub use testimonial_repo::TestimonialRepo;
pub use tour_repo::TourRepo;
pub use user_repo::UserRepo;
