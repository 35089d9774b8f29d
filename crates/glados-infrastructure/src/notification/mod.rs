mod pushdeer;

pub use pushdeer::PushDeerSender;
