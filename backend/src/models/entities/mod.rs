pub mod user;
pub mod parcel_booking;
pub mod review;
pub mod payment;

pub use user::{Entity as User, Model as UserModel, ActiveModel as UserActiveModel, Role};
pub use user::{CreateUserDto, UserPatch};

pub use parcel_booking::{Entity as ParcelBooking, Model as ParcelBookingModel, ActiveModel as ParcelBookingActiveModel};
pub use parcel_booking::{CreateBookingDto, BookingPatch};

pub use review::{Entity as Review, Model as ReviewModel, ActiveModel as ReviewActiveModel};
pub use review::CreateReviewDto;

pub use payment::{Entity as Payment, Model as PaymentModel, ActiveModel as PaymentActiveModel};
pub use payment::CreatePaymentDto;
