mod countdown;
mod parallax;
mod reveal;
mod subscribe;

pub use countdown::{Countdown, CountdownStatus, TimeParts};
pub use parallax::PointerParallax;
pub use reveal::RevealSet;
pub use subscribe::{
    validate_email, SimulatedSink, SubmitOutcome, SubscribeError, SubscribeForm, SubscriptionSink,
};
